// Test Assertion Helpers
//
// Common assertions on the error envelope.

use serde_json::Value;

/// Assert that `body` is an error envelope carrying exactly `message`
///
/// # Panics
/// If the status is not "Error" or the message differs
pub fn assert_error_envelope(body: &Value, message: &str) {
    assert_eq!(
        body["status"], "Error",
        "Expected an error envelope, got {}",
        body
    );
    assert_eq!(
        body["message"], message,
        "Unexpected error message in {}",
        body
    );
    assert!(
        body.get("additional_info").is_none(),
        "additional_info must be omitted when empty: {}",
        body
    );
}

/// Assert that `body` is a serialized User with the canonical test values
pub fn assert_canonical_user(body: &Value) {
    assert_eq!(body["name"], "John");
    assert_eq!(body["email"], "testuser@test.com");
    assert_eq!(body["type"], "Customer");
    assert_eq!(body["age"], 27);
    assert_eq!(body["isActive"], true);
}
