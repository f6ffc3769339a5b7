//! HTTP response assertions.

use axum_test::TestResponse;

/// Asserts that the response has the expected status code.
pub fn assert_status(response: &TestResponse, expected: u16) {
    let actual = response.status_code().as_u16();
    assert_eq!(
        actual, expected,
        "Expected status {}, got {}",
        expected, actual
    );
}

/// Asserts that the response body is empty.
pub fn assert_empty_body(response: &TestResponse) {
    let body = response.text();
    assert!(body.is_empty(), "Expected empty body, got {:?}", body);
}

/// Asserts that the response is JSON.
pub fn assert_json_content_type(response: &TestResponse) {
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(
        content_type.starts_with("application/json"),
        "Expected application/json, got {:?}",
        content_type
    );
}
