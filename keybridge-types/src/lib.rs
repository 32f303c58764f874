//! Keybridge Types
//!
//! Shared type definitions for the canonical handler error taxonomy and
//! the operation context carried through failure translation.

pub mod error;
pub mod operation;

pub use error::{HandlerError, HandlerResult};
pub use operation::OperationContext;
