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

// Simple script to run a canned catalog of key-service failures through
// the translator and print the resulting canonical outcomes
use keybridge_keys::{
    invoke, translate, ErrorDetails, KeyServiceError, ACCESS_DENIED_ERROR_CODE,
    THROTTLING_ERROR_CODE,
};
use keybridge_types::OperationContext;

#[tokio::main]
async fn main() {
    keybridge_logging::init_console_logging("test-utils", "info");

    let samples: Vec<(&str, KeyServiceError)> = vec![
        (
            "CreateKey",
            KeyServiceError::AlreadyExists(ErrorDetails::new()),
        ),
        (
            "PutKeyPolicy",
            KeyServiceError::MalformedPolicyDocument(ErrorDetails::new().with_message(
                "null (Service: Kms, Status Code: 400, Request ID: null, Extended Request ID: null)",
            )),
        ),
        (
            "ListAliases",
            KeyServiceError::InvalidMarker(ErrorDetails::new().with_status_code(400)),
        ),
        (
            "DescribeKey",
            KeyServiceError::NotFound(ErrorDetails::new().with_status_code(400)),
        ),
        (
            "CreateKey",
            KeyServiceError::Kms(
                ErrorDetails::new()
                    .with_error_code(THROTTLING_ERROR_CODE)
                    .with_status_code(400),
            ),
        ),
        (
            "TagResource",
            KeyServiceError::Kms(
                ErrorDetails::new()
                    .with_error_code(ACCESS_DENIED_ERROR_CODE)
                    .with_status_code(400)
                    .with_message(
                        "User is not authorized to perform: kms:TagResource on the key",
                    ),
            ),
        ),
        (
            "ScheduleKeyDeletion",
            KeyServiceError::Kms(
                ErrorDetails::new()
                    .with_error_code(ACCESS_DENIED_ERROR_CODE)
                    .with_status_code(400),
            ),
        ),
        (
            "EnableKeyRotation",
            KeyServiceError::Kms(ErrorDetails::new().with_status_code(500)),
        ),
    ];

    println!("🔎 Translating {} sample failures", samples.len());
    for (operation, failure) in samples {
        let ctx = OperationContext::new(operation);
        let outcome = translate(&failure, &ctx);
        let record = serde_json::json!({
            "operation": operation,
            "kind": outcome.kind(),
            "message": outcome.message(),
        });
        println!("{}", record);
    }

    // Exercise the scoped invocation wrapper; the warn! record comes from
    // the translation boundary.
    println!("");
    println!("📤 Invoking a failing DeleteKey call through the wrapper...");
    let result: Result<(), _> = invoke("DeleteKey", async {
        Err(KeyServiceError::NotFound(
            ErrorDetails::new().with_status_code(400),
        ))
    })
    .await;

    match result {
        Ok(()) => println!("✅ Unexpected success"),
        Err(error) => println!("✅ Translated to {}: {}", error.kind(), error.message()),
    }
}
