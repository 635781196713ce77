//! Shared contact-message wire model and validation.
//!
//! This crate owns the JSON representation exchanged between `server` and
//! `client` for the contact form. Validation lives here so the browser can
//! reject incomplete input before submission and the server can re-check the
//! same rules on every request body it receives.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

/// Confirmation message returned with a `201 Created` response.
pub const MESSAGE_SENT: &str = "Message sent successfully";
/// Summary message returned with a `400 Bad Request` response.
pub const INVALID_FORM_DATA: &str = "Invalid form data";
/// Generic message returned when a submission cannot be stored.
pub const SAVE_FAILED: &str = "Failed to save your message. Please try again.";
/// Generic message returned when the message list cannot be loaded.
pub const LIST_FAILED: &str = "Failed to retrieve messages";

/// Field names checked by [`validate`], in reporting order.
pub const FIELDS: [&str; 3] = ["name", "email", "message"];

/// A contact submission as sent by the browser.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// A stored contact message with its assigned identifier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub message: String,
    /// RFC 3339 timestamp of when the message was stored.
    pub created_at: String,
}

/// One field-level validation failure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Offending field name, or `""` when the whole body is rejected.
    pub field: String,
    pub message: String,
}

impl FieldError {
    #[must_use]
    pub fn new(field: &str, message: &str) -> Self {
        Self { field: field.to_owned(), message: message.to_owned() }
    }
}

/// All field errors found in one submission.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid form data: {}", field_list(.0))]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    /// Names of the rejected fields, in reporting order.
    #[must_use]
    pub fn fields(&self) -> Vec<&str> {
        self.0.iter().map(|e| e.field.as_str()).collect()
    }
}

fn field_list(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| if e.field.is_empty() { "<body>" } else { e.field.as_str() })
        .collect::<Vec<_>>()
        .join(", ")
}

// =============================================================================
// RESPONSE ENVELOPES
// =============================================================================

/// Body of `201 Created` from `POST /api/contact`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub message: String,
    pub data: ContactMessage,
}

/// Body of `400 Bad Request` from `POST /api/contact`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrorResponse {
    pub message: String,
    pub errors: Vec<FieldError>,
}

/// Body of any opaque `500` response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

// =============================================================================
// VALIDATION
// =============================================================================

const REQUIRED: &str = "Required";
const EXPECTED_STRING: &str = "Expected string";
const MUST_NOT_BE_EMPTY: &str = "Must not be empty";

/// Validate an untyped request body into a [`NewContactMessage`].
///
/// Every field is checked so the caller can report all failures at once.
///
/// # Errors
///
/// Returns [`ValidationErrors`] when the body is not an object or any of
/// `name`, `email`, `message` is missing, not a string, or blank.
pub fn validate(body: &Value) -> Result<NewContactMessage, ValidationErrors> {
    let Some(obj) = body.as_object() else {
        return Err(ValidationErrors(vec![FieldError::new("", "Expected object")]));
    };

    let mut errors = Vec::new();
    let mut values: [String; 3] = Default::default();
    for (slot, field) in values.iter_mut().zip(FIELDS) {
        match obj.get(field) {
            None | Some(Value::Null) => errors.push(FieldError::new(field, REQUIRED)),
            Some(Value::String(s)) if s.trim().is_empty() => errors.push(FieldError::new(field, MUST_NOT_BE_EMPTY)),
            Some(Value::String(s)) => *slot = s.trim().to_owned(),
            Some(_) => errors.push(FieldError::new(field, EXPECTED_STRING)),
        }
    }

    if !errors.is_empty() {
        return Err(ValidationErrors(errors));
    }
    let [name, email, message] = values;
    Ok(NewContactMessage { name, email, message })
}

/// Check already-typed form values for completeness.
///
/// # Errors
///
/// Returns [`ValidationErrors`] naming every blank field.
pub fn validate_fields(name: &str, email: &str, message: &str) -> Result<(), ValidationErrors> {
    let errors: Vec<FieldError> = FIELDS
        .iter()
        .zip([name, email, message])
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| FieldError::new(field, MUST_NOT_BE_EMPTY))
        .collect();
    if errors.is_empty() { Ok(()) } else { Err(ValidationErrors(errors)) }
}

impl NewContactMessage {
    /// Validate this submission with [`validate_fields`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErrors`] naming every blank field.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        validate_fields(&self.name, &self.email, &self.message)
    }
}
