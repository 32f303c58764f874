//! Operation context carried through failure translation
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


use serde::{Deserialize, Serialize};

/// Identifies the key-service operation being attempted
///
/// Supplied by the caller for every invocation so that the surfaced
/// diagnostic can name the operation that failed, e.g. "CreateKey" or
/// "UntagResource".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationContext {
    operation: String,
}

impl OperationContext {
    /// Create a context for the named operation
    pub fn new<S: Into<String>>(operation: S) -> Self {
        Self {
            operation: operation.into(),
        }
    }

    /// Human-readable name of the attempted operation
    pub fn operation(&self) -> &str {
        &self.operation
    }
}
