//! Integration tests for the SubmissionClient using mockito for HTTP mocking.

use eventpro_contact::{ContactSubmission, SubmissionClient, SubmissionError, ValidatedSubmission};
use mockito::{Matcher, Server};
use serde_json::json;

fn validated() -> ValidatedSubmission {
    ValidatedSubmission::try_from(ContactSubmission::new(
        "Jordan Lee",
        "jordan@example.com",
        "+1 (234) 567-8901",
        "We'd like a quote for a 120-guest gala in May.",
    ))
    .unwrap()
}

#[test]
fn test_submit_posts_json_payload() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/contact")
        .match_header("content-type", "application/json")
        .match_header("authorization", "Bearer form-key")
        .match_body(Matcher::PartialJson(json!({
            "name": "Jordan Lee",
            "email": "jordan@example.com",
            "phone": "+1 (234) 567-8901",
            "message": "We'd like a quote for a 120-guest gala in May."
        })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": "sub_123"}"#)
        .create();

    let client = SubmissionClient::with_endpoint(
        format!("{}/contact", server.url()),
        Some("form-key".to_string()),
    );
    let receipt = client.submit(&validated()).unwrap();

    mock.assert();
    assert_eq!(receipt.status, 201);
    assert_eq!(receipt.id.as_deref(), Some("sub_123"));
    assert_eq!(client.metrics().http_requests_total(), 1);
    assert_eq!(client.metrics().http_errors_total(), 0);
}

#[test]
fn test_submit_includes_timestamp() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/contact")
        .match_body(Matcher::Regex(r#""submittedAt":"\d{4}-\d{2}-\d{2}T"#.to_string()))
        .with_status(200)
        .create();

    let client = SubmissionClient::with_endpoint(format!("{}/contact", server.url()), None);
    let receipt = client.submit(&validated()).unwrap();

    mock.assert();
    assert_eq!(receipt.id, None);
}

#[test]
fn test_submit_without_api_key_sends_no_authorization() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/contact")
        .match_header("authorization", Matcher::Missing)
        .with_status(204)
        .create();

    let client = SubmissionClient::with_endpoint(format!("{}/contact", server.url()), None);
    let receipt = client.submit(&validated()).unwrap();

    mock.assert();
    assert_eq!(receipt.status, 204);
}

#[test]
fn test_submit_server_error() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/contact")
        .with_status(500)
        .with_body("Internal Server Error")
        .create();

    let client = SubmissionClient::with_endpoint(format!("{}/contact", server.url()), None);
    let result = client.submit(&validated());

    mock.assert();
    match result {
        Err(SubmissionError::ApiError { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "Internal Server Error");
        }
        other => panic!("Expected ApiError, got: {:?}", other),
    }
    assert_eq!(client.metrics().http_errors_total(), 1);
}

#[test]
fn test_submit_rate_limited() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/contact")
        .with_status(429)
        .with_body("Too Many Requests")
        .create();

    let client = SubmissionClient::with_endpoint(format!("{}/contact", server.url()), None);
    let result = client.submit(&validated());

    mock.assert();
    assert!(matches!(result, Err(SubmissionError::RateLimitExceeded)));
}

#[test]
fn test_submit_connection_refused() {
    // Nothing listens on port 1
    let client = SubmissionClient::with_endpoint("http://127.0.0.1:1/contact".to_string(), None);
    let result = client.submit(&validated());

    assert!(matches!(
        result,
        Err(SubmissionError::HttpError(_)) | Err(SubmissionError::Timeout)
    ));
    assert_eq!(client.metrics().http_errors_total(), 1);
}
