//! Contact form routes: submission and listing.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use contact::{
    ContactMessage, CreatedResponse, ErrorResponse, FieldError, INVALID_FORM_DATA, LIST_FAILED, MESSAGE_SENT,
    SAVE_FAILED, ValidationErrorResponse,
};
use tracing::{error, warn};

use crate::services::contact::{self as contact_svc, StoreError, SubmitError};
use crate::state::AppState;

/// `POST /api/contact`: validate and store a contact message.
pub async fn create_message(State(state): State<AppState>, body: Result<Json<serde_json::Value>, JsonRejection>) -> Response {
    let body = match body {
        Ok(Json(body)) => body,
        Err(rejection) => {
            warn!(error = %rejection, "rejected contact body");
            return validation_error_response(vec![FieldError::new("", &rejection.body_text())]);
        }
    };

    match contact_svc::submit(state.contacts.as_ref(), &body).await {
        Ok(data) => {
            (StatusCode::CREATED, Json(CreatedResponse { message: MESSAGE_SENT.to_owned(), data })).into_response()
        }
        Err(SubmitError::Invalid(errors)) => {
            warn!(fields = ?errors.fields(), "invalid contact form data");
            validation_error_response(errors.0)
        }
        Err(SubmitError::Store(err)) => store_error_response(&err, SAVE_FAILED),
    }
}

/// `GET /api/contact`: list stored messages in submission order.
pub async fn list_messages(State(state): State<AppState>) -> Result<Json<Vec<ContactMessage>>, Response> {
    state
        .contacts
        .list()
        .await
        .map(Json)
        .map_err(|err| store_error_response(&err, LIST_FAILED))
}

fn validation_error_response(errors: Vec<FieldError>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ValidationErrorResponse { message: INVALID_FORM_DATA.to_owned(), errors }),
    )
        .into_response()
}

/// Log the underlying failure and hide it behind a generic message.
pub(crate) fn store_error_response(err: &StoreError, message: &str) -> Response {
    error!(error = %err, "contact store failure");
    (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse { message: message.to_owned() })).into_response()
}
