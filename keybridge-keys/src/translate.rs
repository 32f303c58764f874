//! Translation of key-service failures into canonical handler errors
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


use crate::error::KeyServiceError;
use keybridge_types::{HandlerError, OperationContext};

/// Error code the service reports when a request is throttled
pub const THROTTLING_ERROR_CODE: &str = "ThrottlingException";

/// Error code the service reports for request validation failures
pub const VALIDATION_ERROR_CODE: &str = "ValidationException";

/// Error code the service reports when the caller lacks permission
pub const ACCESS_DENIED_ERROR_CODE: &str = "AccessDeniedException";

/// Literal placeholder the service emits when a failure carries no text
const NO_MESSAGE_PLACEHOLDER: &str = "null";

/// Denied actions that mark an access-denied failure as tagging-related
///
/// The service reports every permission failure under the same error
/// code; only the message body names the denied action. These cover
/// tagging during key creation, the untag operation, and listing
/// resource tags.
const TAGGING_DENIAL_ACTIONS: [&str; 3] = [
    "kms:TagResource",
    "kms:UntagResource",
    "kms:ListResourceTags",
];

/// Translate a key-service failure into its canonical handler error
///
/// Total over its inputs: every failure resolves to exactly one
/// [`HandlerError`] variant. Specific failure identities are matched
/// first; the undifferentiated base failure is classified by its error
/// code, falling back to [`HandlerError::GeneralService`] when the code
/// is missing or unrecognized. The carried message is normalized so it
/// always names the attempted operation.
pub fn translate(failure: &KeyServiceError, ctx: &OperationContext) -> HandlerError {
    let message = normalize_message(failure.message(), ctx.operation(), failure.type_name());

    match failure {
        KeyServiceError::AlreadyExists(_) => HandlerError::AlreadyExists(message),
        KeyServiceError::InvalidMarker(_) => HandlerError::InternalFailure(message),
        KeyServiceError::LimitExceeded(_) => HandlerError::LimitExceeded(message),
        KeyServiceError::InvalidAliasName(_)
        | KeyServiceError::InvalidState(_)
        | KeyServiceError::InvalidArn(_)
        | KeyServiceError::MalformedPolicyDocument(_)
        | KeyServiceError::Tag(_)
        | KeyServiceError::UnsupportedOperation(_)
        | KeyServiceError::Disabled(_) => HandlerError::InvalidRequest(message),
        KeyServiceError::Internal(_) | KeyServiceError::DependencyTimeout(_) => {
            HandlerError::ServiceInternal(message)
        }
        KeyServiceError::NotFound(_) => HandlerError::NotFound(message),
        KeyServiceError::Kms(details) => match details.error_code.as_deref() {
            Some(THROTTLING_ERROR_CODE) => HandlerError::Throttling(message),
            Some(VALIDATION_ERROR_CODE) => HandlerError::InvalidRequest(message),
            Some(ACCESS_DENIED_ERROR_CODE) => {
                if is_tagging_denial(details.message.as_deref()) {
                    HandlerError::UnauthorizedTagging(message)
                } else {
                    HandlerError::AccessDenied(message)
                }
            }
            _ => HandlerError::GeneralService {
                message,
                status_code: details.status_code,
            },
        },
    }
}

/// Rewrite a message that lacks identifying context
///
/// A failure surfaced without text carries the literal `null`
/// placeholder, either alone or followed by parenthesized request
/// metadata. The placeholder portion is replaced with
/// `"<operation> failed due to <type_name>"`; trailing metadata is kept
/// verbatim. Messages with real content pass through unchanged.
pub fn normalize_message(message: Option<&str>, operation: &str, type_name: &str) -> String {
    let replacement = format!("{} failed due to {}", operation, type_name);
    match message {
        None => replacement,
        Some(m) if m == NO_MESSAGE_PLACEHOLDER => replacement,
        Some(m) => {
            // Only "null" followed by a space is the placeholder; words
            // that merely start with "null" are real content.
            match m
                .strip_prefix(NO_MESSAGE_PLACEHOLDER)
                .filter(|rest| rest.starts_with(' '))
            {
                Some(rest) => format!("{}{}", replacement, rest),
                None => m.to_string(),
            }
        }
    }
}

/// Whether an access-denied message names one of the tagging actions
fn is_tagging_denial(message: Option<&str>) -> bool {
    message.map_or(false, |m| {
        TAGGING_DENIAL_ACTIONS
            .iter()
            .any(|action| m.contains(action))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_absent_message() {
        let normalized = normalize_message(None, "CreateKey", "NotFoundException");
        assert_eq!(normalized, "CreateKey failed due to NotFoundException");
    }

    #[test]
    fn test_normalize_bare_placeholder() {
        let normalized = normalize_message(Some("null"), "DisableKey", "DisabledException");
        assert_eq!(normalized, "DisableKey failed due to DisabledException");
    }

    #[test]
    fn test_normalize_placeholder_with_metadata_suffix() {
        let normalized = normalize_message(
            Some("null (Service: Kms, Status Code: 400, Request ID: null)"),
            "PutKeyPolicy",
            "MalformedPolicyDocumentException",
        );
        assert_eq!(
            normalized,
            "PutKeyPolicy failed due to MalformedPolicyDocumentException \
             (Service: Kms, Status Code: 400, Request ID: null)"
        );
    }

    #[test]
    fn test_normalize_real_message_unchanged() {
        let normalized = normalize_message(
            Some("Alias name is invalid"),
            "CreateAlias",
            "InvalidAliasNameException",
        );
        assert_eq!(normalized, "Alias name is invalid");
    }

    #[test]
    fn test_normalize_placeholder_prefix_without_space_unchanged() {
        let normalized = normalize_message(
            Some("nullable fields are rejected"),
            "CreateKey",
            "KmsException",
        );
        assert_eq!(normalized, "nullable fields are rejected");
    }

    #[test]
    fn test_tagging_denial_requires_known_action() {
        assert!(is_tagging_denial(Some(
            "User is not authorized to perform: kms:UntagResource on the key"
        )));
        assert!(is_tagging_denial(Some(
            "You don't have the kms:TagResource permission"
        )));
        assert!(is_tagging_denial(Some(
            "not authorized to perform: kms:ListResourceTags"
        )));
        assert!(!is_tagging_denial(Some(
            "User is not authorized to perform: kms:CreateKey"
        )));
        assert!(!is_tagging_denial(Some("mentions tags but no action")));
        assert!(!is_tagging_denial(None));
    }
}
