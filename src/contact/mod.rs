//! The contact form endpoint: validation, the notification message, and
//! delivery to an external service.

mod delivery;
mod handler;
mod submission;

pub use delivery::{delivery_from_config, Delivery, DeliveryError, LogDelivery, WebhookDelivery};
pub use handler::{submit_contact, DELIVERY_TIMEOUT};
pub use submission::{ContactMessage, ContactSubmission, ValidSubmission};

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Why a submission was rejected.
#[derive(Debug, Error)]
pub enum ContactError {
    #[error("request body is not a valid contact payload: {0}")]
    InvalidPayload(String),

    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("internal server error: {0}")]
    Internal(String),
}

impl ContactError {
    pub fn status(&self) -> StatusCode {
        match self {
            ContactError::InvalidPayload(_) | ContactError::MissingFields(_) => {
                StatusCode::BAD_REQUEST
            }
            ContactError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable reason.
    pub fn code(&self) -> &'static str {
        match self {
            ContactError::InvalidPayload(_) => "invalid_payload",
            ContactError::MissingFields(_) => "missing_fields",
            ContactError::Internal(_) => "internal",
        }
    }
}

impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        let status = self.status();
        let mut body = json!({
            "success": false,
            "error": self.code(),
        });

        match &self {
            ContactError::MissingFields(fields) => {
                body["message"] = json!("Missing required fields");
                body["fields"] = json!(fields);
            }
            ContactError::InvalidPayload(_) => {
                body["message"] = json!(self.to_string());
            }
            // Internal details stay in the log.
            ContactError::Internal(_) => {
                body["message"] = json!("Internal server error");
            }
        }

        (status, Json(body)).into_response()
    }
}
