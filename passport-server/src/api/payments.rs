use axum::{Json, extract::State};
use kanau::processor::Processor;
use passport_core::payment::PaymentCreator;
use passport_sdk::objects::CreatePaymentResponse;

use super::PaymentApiError;
use super::extractors::PaymentBody;
use crate::state::AppState;

/// Handler for `POST /api/payments/create`.
///
/// Validates the submitted customer, then creates a transaction on the
/// gateway with the sandbox payload and returns the gateway's answer.
pub(super) async fn create_payment(
    State(state): State<AppState>,
    PaymentBody(envelope): PaymentBody,
) -> Result<Json<CreatePaymentResponse>, PaymentApiError> {
    let creator = PaymentCreator::new(state.gateway().await, state.environment.clone());
    let response = creator.process(envelope).await?;
    Ok(Json(response))
}
