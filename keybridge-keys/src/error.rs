//! Failure model for the managed key service
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
use std::fmt;
use thiserror::Error;

/// Wire-level details accompanying a key-service failure
///
/// The service omits any of these depending on where the failure
/// originated; all three fields are independently optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetails {
    /// Machine-readable error code token, e.g. "ThrottlingException"
    pub error_code: Option<String>,
    /// Transport status code
    pub status_code: Option<u16>,
    /// Free-text error message
    pub message: Option<String>,
}

impl ErrorDetails {
    /// Create empty details
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the machine-readable error code
    pub fn with_error_code<S: Into<String>>(mut self, error_code: S) -> Self {
        self.error_code = Some(error_code.into());
        self
    }

    /// Set the transport status code
    pub fn with_status_code(mut self, status_code: u16) -> Self {
        self.status_code = Some(status_code);
        self
    }

    /// Set the free-text message
    pub fn with_message<S: Into<String>>(mut self, message: S) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl fmt::Display for ErrorDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => f.write_str(message),
            None => f.write_str("(no message)"),
        }
    }
}

/// Failures raised by the managed key service
///
/// The variant is the failure identity reported by the service; every
/// variant carries whatever wire-level details accompanied it. `Kms` is
/// the undifferentiated base failure, distinguished only by its error
/// code, status code, and message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyServiceError {
    #[error("AlreadyExistsException: {0}")]
    AlreadyExists(ErrorDetails),

    #[error("InvalidMarkerException: {0}")]
    InvalidMarker(ErrorDetails),

    #[error("LimitExceededException: {0}")]
    LimitExceeded(ErrorDetails),

    #[error("InvalidAliasNameException: {0}")]
    InvalidAliasName(ErrorDetails),

    #[error("KmsInvalidStateException: {0}")]
    InvalidState(ErrorDetails),

    #[error("InvalidArnException: {0}")]
    InvalidArn(ErrorDetails),

    #[error("MalformedPolicyDocumentException: {0}")]
    MalformedPolicyDocument(ErrorDetails),

    #[error("TagException: {0}")]
    Tag(ErrorDetails),

    #[error("UnsupportedOperationException: {0}")]
    UnsupportedOperation(ErrorDetails),

    #[error("DisabledException: {0}")]
    Disabled(ErrorDetails),

    #[error("KmsInternalException: {0}")]
    Internal(ErrorDetails),

    #[error("DependencyTimeoutException: {0}")]
    DependencyTimeout(ErrorDetails),

    #[error("NotFoundException: {0}")]
    NotFound(ErrorDetails),

    #[error("KmsException: {0}")]
    Kms(ErrorDetails),
}

impl KeyServiceError {
    /// Wire-level details carried with this failure
    pub fn details(&self) -> &ErrorDetails {
        match self {
            Self::AlreadyExists(details)
            | Self::InvalidMarker(details)
            | Self::LimitExceeded(details)
            | Self::InvalidAliasName(details)
            | Self::InvalidState(details)
            | Self::InvalidArn(details)
            | Self::MalformedPolicyDocument(details)
            | Self::Tag(details)
            | Self::UnsupportedOperation(details)
            | Self::Disabled(details)
            | Self::Internal(details)
            | Self::DependencyTimeout(details)
            | Self::NotFound(details)
            | Self::Kms(details) => details,
        }
    }

    /// Machine-readable error code, if the service reported one
    pub fn error_code(&self) -> Option<&str> {
        self.details().error_code.as_deref()
    }

    /// Transport status code, if present
    pub fn status_code(&self) -> Option<u16> {
        self.details().status_code
    }

    /// Raw service message, if present
    pub fn message(&self) -> Option<&str> {
        self.details().message.as_deref()
    }

    /// The service's wire-level identifier for this failure variant
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::AlreadyExists(_) => "AlreadyExistsException",
            Self::InvalidMarker(_) => "InvalidMarkerException",
            Self::LimitExceeded(_) => "LimitExceededException",
            Self::InvalidAliasName(_) => "InvalidAliasNameException",
            Self::InvalidState(_) => "KmsInvalidStateException",
            Self::InvalidArn(_) => "InvalidArnException",
            Self::MalformedPolicyDocument(_) => "MalformedPolicyDocumentException",
            Self::Tag(_) => "TagException",
            Self::UnsupportedOperation(_) => "UnsupportedOperationException",
            Self::Disabled(_) => "DisabledException",
            Self::Internal(_) => "KmsInternalException",
            Self::DependencyTimeout(_) => "DependencyTimeoutException",
            Self::NotFound(_) => "NotFoundException",
            Self::Kms(_) => "KmsException",
        }
    }
}

/// Result type for key-service calls
pub type KeyServiceResult<T> = std::result::Result<T, KeyServiceError>;
