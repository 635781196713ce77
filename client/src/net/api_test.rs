use super::*;

#[test]
fn created_response_yields_success_with_id() {
    let body = r#"{"message":"Message sent successfully","data":{"id":42,"name":"Alice","email":"a@example.com","message":"hi","created_at":"2025-01-01T00:00:00Z"}}"#;
    assert_eq!(classify_response(201, body), SubmitOutcome::Success { id: 42 });
}

#[test]
fn created_status_with_garbled_body_is_server_error() {
    assert_eq!(classify_response(201, "ok"), SubmitOutcome::ServerError);
}

#[test]
fn bad_request_lists_rejected_fields() {
    let body = r#"{"message":"Invalid form data","errors":[{"field":"name","message":"Must not be empty"},{"field":"message","message":"Required"}]}"#;
    assert_eq!(
        classify_response(400, body),
        SubmitOutcome::ValidationError { fields: vec!["name".to_owned(), "message".to_owned()] }
    );
}

#[test]
fn bad_request_for_whole_body_has_no_field_names() {
    let body = r#"{"message":"Invalid form data","errors":[{"field":"","message":"Expected object"}]}"#;
    assert_eq!(classify_response(400, body), SubmitOutcome::ValidationError { fields: vec![] });
    assert_eq!(classify_response(400, ""), SubmitOutcome::ValidationError { fields: vec![] });
}

#[test]
fn other_statuses_are_server_errors() {
    let body = r#"{"message":"Failed to save your message. Please try again."}"#;
    assert_eq!(classify_response(500, body), SubmitOutcome::ServerError);
    assert_eq!(classify_response(404, ""), SubmitOutcome::ServerError);
}

#[test]
fn endpoint_matches_server_route() {
    assert_eq!(CONTACT_ENDPOINT, "/api/contact");
}
