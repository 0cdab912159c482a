//! HTTP API.
//!
//! # Endpoints
//!
//! - `POST /api/payments/create` – validate a checkout request and create a PIX transaction

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use passport_core::gateway::GatewayError;
use passport_core::payment::{PaymentError, ValidationError};
use passport_sdk::objects::ErrorResponse;

use crate::state::AppState;

mod extractors;
mod payments;

/// Build the API router.
pub fn router() -> Router<AppState> {
    Router::new().route("/payments/create", post(payments::create_payment))
}

// ---------------------------------------------------------------------------
// Error handling
// ---------------------------------------------------------------------------

/// Generic message returned with every 500.
const CREATE_FAILED: &str = "Failed to create payment transaction";

/// Errors that can occur in payment handlers.
#[derive(Debug)]
pub(crate) enum PaymentApiError {
    /// The request body was malformed, incomplete or failed a format check.
    Validation(ValidationError),
    /// The gateway call failed.
    Gateway(GatewayError),
}

impl From<ValidationError> for PaymentApiError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}

impl From<PaymentError> for PaymentApiError {
    fn from(err: PaymentError) -> Self {
        match err {
            PaymentError::Validation(e) => Self::Validation(e),
            PaymentError::Gateway(e) => Self::Gateway(e),
        }
    }
}

impl IntoResponse for PaymentApiError {
    fn into_response(self) -> Response {
        match self {
            PaymentApiError::Validation(e) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(e.to_string()))).into_response()
            }
            PaymentApiError::Gateway(e) => {
                tracing::error!(error = %e, "Error creating ViperPay transaction");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::with_details(CREATE_FAILED, error_details(&e))),
                )
                    .into_response()
            }
        }
    }
}

/// The error's message, or `"Unknown error"` when it has none.
fn error_details(err: &GatewayError) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        "Unknown error".to_string()
    } else {
        message
    }
}
