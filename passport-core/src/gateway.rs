//! Payment gateway seam.
//!
//! The checkout flow only needs one operation from the PIX processor:
//! create a transaction. [`PaymentGateway`] abstracts it so the flow can
//! run against [`ViperPayClient`] in production and a recording double in
//! tests.

use async_trait::async_trait;
use passport_sdk::client::{ClientError, ViperPayClient};
use passport_sdk::objects::{TransactionRequest, TransactionResult};
use thiserror::Error;

/// Errors that can occur while creating a transaction on the gateway.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Transport, status or decoding failure from the gateway client.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// The gateway accepted the transaction but returned no PIX payload.
    #[error("gateway response is missing the PIX payload")]
    MissingPixPayload,

    /// Any other failure reported by a gateway implementation.
    #[error("{0}")]
    Other(String),
}

/// A third-party processor able to create PIX transactions.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create a transaction. No retries are attempted.
    async fn create_transaction(
        &self,
        request: &TransactionRequest,
    ) -> Result<TransactionResult, GatewayError>;
}

#[async_trait]
impl PaymentGateway for ViperPayClient {
    #[tracing::instrument(
        skip_all,
        err,
        name = "ViperPay:CreateTransaction",
        fields(external_id = %request.external_id)
    )]
    async fn create_transaction(
        &self,
        request: &TransactionRequest,
    ) -> Result<TransactionResult, GatewayError> {
        Ok(ViperPayClient::create_transaction(self, request).await?)
    }
}
