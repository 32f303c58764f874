//! Key-service failure translation for Keybridge
//!
//! Classifies failures raised by the managed key service into the
//! canonical handler error taxonomy, and guarantees that every surfaced
//! diagnostic names the operation that failed.
// Copyright 2025 Francisco F. Pinochet
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.


pub mod api_helper;
pub mod error;
pub mod translate;

pub use api_helper::invoke;
pub use error::{ErrorDetails, KeyServiceError, KeyServiceResult};
pub use translate::{
    normalize_message, translate, ACCESS_DENIED_ERROR_CODE, THROTTLING_ERROR_CODE,
    VALIDATION_ERROR_CODE,
};
