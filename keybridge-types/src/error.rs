//! Canonical handler error taxonomy
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


use thiserror::Error;

/// Canonical failure kinds surfaced to resource lifecycle handlers
///
/// Every failure raised by a key-service call translates into exactly one
/// of these variants. The carried string is the normalized diagnostic
/// message, which always names the operation that failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HandlerError {
    #[error("Resource already exists: {0}")]
    AlreadyExists(String),

    #[error("Internal failure: {0}")]
    InternalFailure(String),

    #[error("Service limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Service internal error: {0}")]
    ServiceInternal(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Request throttled: {0}")]
    Throttling(String),

    #[error("Access denied: {0}")]
    AccessDenied(String),

    #[error("Unauthorized tagging operation: {0}")]
    UnauthorizedTagging(String),

    /// Undifferentiated service failure, keeps the transport status code
    /// for diagnostics
    #[error("Service failure: {message}")]
    GeneralService {
        message: String,
        status_code: Option<u16>,
    },
}

impl HandlerError {
    /// Normalized diagnostic message carried by this error
    pub fn message(&self) -> &str {
        match self {
            Self::AlreadyExists(message)
            | Self::InternalFailure(message)
            | Self::LimitExceeded(message)
            | Self::InvalidRequest(message)
            | Self::ServiceInternal(message)
            | Self::NotFound(message)
            | Self::Throttling(message)
            | Self::AccessDenied(message)
            | Self::UnauthorizedTagging(message) => message,
            Self::GeneralService { message, .. } => message,
        }
    }

    /// Short kind label for structured logging
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AlreadyExists(_) => "AlreadyExists",
            Self::InternalFailure(_) => "InternalFailure",
            Self::LimitExceeded(_) => "LimitExceeded",
            Self::InvalidRequest(_) => "InvalidRequest",
            Self::ServiceInternal(_) => "ServiceInternal",
            Self::NotFound(_) => "NotFound",
            Self::Throttling(_) => "Throttling",
            Self::AccessDenied(_) => "AccessDenied",
            Self::UnauthorizedTagging(_) => "UnauthorizedTagging",
            Self::GeneralService { .. } => "GeneralService",
        }
    }
}

/// Result type for handler operations
pub type HandlerResult<T> = std::result::Result<T, HandlerError>;
