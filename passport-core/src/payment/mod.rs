//! PIX payment creation flow.
//!
//! [`PaymentEnvelope`] decodes and validates the incoming body,
//! [`sandbox`] builds the outbound transaction, and [`PaymentCreator`]
//! drives both against a [`PaymentGateway`](crate::gateway::PaymentGateway).

mod creator;
mod request;
pub mod sandbox;

pub use creator::PaymentCreator;
pub use request::{PaymentEnvelope, ValidationError};

use crate::gateway::GatewayError;
use thiserror::Error;

/// Errors that can end a payment creation.
#[derive(Debug, Error)]
pub enum PaymentError {
    /// The request was malformed or incomplete.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The gateway call failed.
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}
