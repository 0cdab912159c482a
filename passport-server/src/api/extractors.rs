//! Custom Axum extractors.
//!
//! Provides `PaymentBody`, which reads the raw request body and decodes it
//! into a [`PaymentEnvelope`] without trusting the `Content-Type` header.

use axum::extract::{FromRequest, Request};
use passport_core::payment::{PaymentEnvelope, ValidationError};

use super::PaymentApiError;

/// Largest accepted request body.
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// An Axum extractor that decodes a create-payment body.
///
/// Unreadable bodies, non-JSON bodies and wrongly typed fields are all
/// rejected with 400 "Missing required fields" (fail closed).
pub(crate) struct PaymentBody(pub PaymentEnvelope);

impl<S: Send + Sync> FromRequest<S> for PaymentBody {
    type Rejection = PaymentApiError;

    async fn from_request(req: Request, _state: &S) -> Result<Self, Self::Rejection> {
        let body_bytes = axum::body::to_bytes(req.into_body(), MAX_BODY_BYTES)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Failed to read payment request body");
                ValidationError::MissingFields
            })?;

        let envelope = PaymentEnvelope::parse(&body_bytes).inspect_err(|_| {
            tracing::warn!(
                body_len = body_bytes.len(),
                "Payment request body is not a valid JSON object"
            )
        })?;

        Ok(PaymentBody(envelope))
    }
}
