//! Scoped invocation of key-service operations
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


use crate::error::KeyServiceResult;
use crate::translate::translate;
use keybridge_types::{HandlerResult, OperationContext};
use std::future::Future;
use tracing::warn;

/// Await a key-service call, translating any failure
///
/// Wraps a single remote operation. On failure, the raised service error
/// is classified into its canonical handler error, whose message names
/// `operation`. Success values pass through untouched. Lifecycle handlers
/// are expected to route every remote call through this wrapper and
/// propagate the resulting error as their own failure signal.
pub async fn invoke<T, F>(operation: &str, call: F) -> HandlerResult<T>
where
    F: Future<Output = KeyServiceResult<T>>,
{
    match call.await {
        Ok(value) => Ok(value),
        Err(failure) => {
            let ctx = OperationContext::new(operation);
            let error = translate(&failure, &ctx);
            warn!(
                operation = operation,
                kind = error.kind(),
                error = %error,
                "Key service operation failed"
            );
            Err(error)
        }
    }
}
