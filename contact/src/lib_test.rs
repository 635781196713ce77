use super::*;
use serde_json::json;

#[test]
fn validate_accepts_complete_body() {
    let msg = validate(&json!({"name": "Alice", "email": "a@example.com", "message": "hi"})).expect("valid");
    assert_eq!(msg.name, "Alice");
    assert_eq!(msg.email, "a@example.com");
    assert_eq!(msg.message, "hi");
}

#[test]
fn validate_ignores_extra_fields() {
    let msg = validate(&json!({"name": "A", "email": "b", "message": "c", "extra": 1})).expect("valid");
    assert_eq!(msg, NewContactMessage { name: "A".into(), email: "b".into(), message: "c".into() });
}

#[test]
fn validate_rejects_empty_name() {
    let err = validate(&json!({"name": "", "email": "a@example.com", "message": "hi"})).unwrap_err();
    assert_eq!(err.fields(), vec!["name"]);
    assert_eq!(err.0[0].message, "Must not be empty");
}

#[test]
fn validate_rejects_whitespace_only_value() {
    let err = validate(&json!({"name": "Alice", "email": "   ", "message": "hi"})).unwrap_err();
    assert_eq!(err.fields(), vec!["email"]);
}

#[test]
fn validate_trims_surrounding_whitespace() {
    let msg = validate(&json!({"name": "  Alice ", "email": "\ta@example.com\n", "message": " hi "})).expect("valid");
    assert_eq!(msg.name, "Alice");
    assert_eq!(msg.email, "a@example.com");
    assert_eq!(msg.message, "hi");
}

#[test]
fn validate_reports_missing_and_mistyped_fields_in_order() {
    let err = validate(&json!({"message": 42, "email": null})).unwrap_err();
    assert_eq!(
        err.0,
        vec![
            FieldError::new("name", "Required"),
            FieldError::new("email", "Required"),
            FieldError::new("message", "Expected string"),
        ]
    );
}

#[test]
fn validate_rejects_non_object_body() {
    let err = validate(&json!(["Alice"])).unwrap_err();
    assert_eq!(err.0, vec![FieldError::new("", "Expected object")]);
    assert_eq!(err.to_string(), "invalid form data: <body>");
}

#[test]
fn validate_fields_names_every_blank_field() {
    assert!(validate_fields("a", "b", "c").is_ok());
    let err = validate_fields("", "b", " ").unwrap_err();
    assert_eq!(err.fields(), vec!["name", "message"]);
    assert_eq!(err.to_string(), "invalid form data: name, message");
}

#[test]
fn new_message_validate_matches_validate_fields() {
    let msg = NewContactMessage { name: "Alice".into(), email: String::new(), message: "hi".into() };
    assert_eq!(msg.validate().unwrap_err().fields(), vec!["email"]);
}

#[test]
fn created_response_uses_expected_wire_shape() {
    let resp = CreatedResponse {
        message: MESSAGE_SENT.to_owned(),
        data: ContactMessage {
            id: 7,
            name: "Alice".into(),
            email: "a@example.com".into(),
            message: "hi".into(),
            created_at: "2024-01-01T00:00:00Z".into(),
        },
    };
    let value = serde_json::to_value(&resp).expect("serialize");
    assert_eq!(value["message"], json!("Message sent successfully"));
    assert_eq!(value["data"]["id"], json!(7));
    assert_eq!(value["data"]["created_at"], json!("2024-01-01T00:00:00Z"));
}

#[test]
fn validation_error_response_parses_from_server_json() {
    let raw = r#"{"message":"Invalid form data","errors":[{"field":"name","message":"Must not be empty"}]}"#;
    let resp: ValidationErrorResponse = serde_json::from_str(raw).expect("parse");
    assert_eq!(resp.message, INVALID_FORM_DATA);
    assert_eq!(resp.errors, vec![FieldError::new("name", "Must not be empty")]);
}
