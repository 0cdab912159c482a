use std::sync::Arc;

use kanau::processor::Processor;
use passport_sdk::objects::{CreatePaymentResponse, DebugInfo, TransactionSummary};
use tracing::{info, warn};

use super::request::PaymentEnvelope;
use super::{PaymentError, sandbox};
use crate::gateway::{GatewayError, PaymentGateway};

/// Creates PIX payments on a [`PaymentGateway`].
///
/// Cheap to build per request: it only holds the shared gateway handle and
/// the environment label that goes into diagnostic logs.
pub struct PaymentCreator {
    gateway: Arc<dyn PaymentGateway>,
    environment: Arc<str>,
}

impl PaymentCreator {
    pub fn new(gateway: Arc<dyn PaymentGateway>, environment: impl Into<Arc<str>>) -> Self {
        Self {
            gateway,
            environment: environment.into(),
        }
    }
}

impl Processor<PaymentEnvelope> for PaymentCreator {
    type Output = CreatePaymentResponse;
    type Error = PaymentError;

    async fn process(
        &self,
        envelope: PaymentEnvelope,
    ) -> Result<CreatePaymentResponse, PaymentError> {
        info!(
            customer = envelope.customer_name().unwrap_or_default(),
            amount = ?envelope.amount(),
            items_count = envelope.item_count(),
            environment = %self.environment,
            "Received payment creation request"
        );

        let request = envelope
            .validate()
            .inspect_err(|e| warn!(reason = %e, "Rejected payment creation request"))?;

        // The submitted customer, amount and items are not forwarded; the
        // gateway always receives the sandbox payload.
        let transaction = sandbox::transaction();
        match serde_json::to_string_pretty(&transaction) {
            Ok(payload) => info!(
                external_id = %transaction.external_id,
                %payload,
                "Creating ViperPay transaction with sandbox payload"
            ),
            Err(e) => warn!(error = %e, "Failed to render outbound payload"),
        }

        let result = self.gateway.create_transaction(&transaction).await?;

        info!(
            real_customer = %request.customer_data.name,
            real_email = %request.customer_data.email,
            real_amount = %request.amount,
            "Real customer data for reference"
        );

        let pix = result.pix.ok_or(GatewayError::MissingPixPayload)?;

        Ok(CreatePaymentResponse {
            success: true,
            transaction: TransactionSummary {
                id: result.id,
                external_id: result.external_id,
                status: result.status,
                total_value: result.total_value,
                pix_payload: pix.payload,
                payment_method: result.payment_method,
                has_error: result.has_error,
            },
            debug: DebugInfo {
                used_test_data: true,
                real_customer: request.customer_data.name,
                real_amount: request.amount,
                test_amount_used: transaction.total_amount,
                webhook_used: transaction.webhook_url,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payment::ValidationError;
    use async_trait::async_trait;
    use passport_sdk::objects::{PixData, TransactionRequest, TransactionResult};
    use rust_decimal::Decimal;
    use serde_json::json;
    use std::sync::Mutex;

    /// Records every request and answers with a canned outcome.
    struct RecordingGateway {
        calls: Mutex<Vec<TransactionRequest>>,
        respond: fn(&TransactionRequest) -> Result<TransactionResult, GatewayError>,
    }

    impl RecordingGateway {
        fn new(
            respond: fn(&TransactionRequest) -> Result<TransactionResult, GatewayError>,
        ) -> Arc<Self> {
            Arc::new(Self {
                calls: Mutex::new(Vec::new()),
                respond,
            })
        }

        fn calls(&self) -> Vec<TransactionRequest> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PaymentGateway for RecordingGateway {
        async fn create_transaction(
            &self,
            request: &TransactionRequest,
        ) -> Result<TransactionResult, GatewayError> {
            self.calls.lock().unwrap().push(request.clone());
            (self.respond)(request)
        }
    }

    fn accepted(request: &TransactionRequest) -> Result<TransactionResult, GatewayError> {
        Ok(TransactionResult {
            id: "tx_1".to_string(),
            external_id: request.external_id.clone(),
            status: "PENDING".to_string(),
            total_value: request.total_amount,
            pix: Some(PixData {
                payload: "00020126580014br.gov.bcb.pix".to_string(),
            }),
            payment_method: "PIX".to_string(),
            has_error: false,
        })
    }

    fn envelope(amount: f64) -> PaymentEnvelope {
        let body = json!({
            "customerData": {
                "name": "Maria Silva",
                "email": "maria@example.com",
                "phone": "11987654321",
                "cpf": "11222333000181"
            },
            "amount": amount,
            "items": [{ "id": "a" }, { "id": "b" }]
        });
        PaymentEnvelope::parse(body.to_string().as_bytes()).unwrap()
    }

    #[tokio::test]
    async fn test_sends_sandbox_payload_not_submitted_data() {
        let gateway = RecordingGateway::new(accepted);
        let creator = PaymentCreator::new(gateway.clone(), "test");

        let response = creator.process(envelope(250.0)).await.unwrap();

        let calls = gateway.calls();
        assert_eq!(calls.len(), 1);
        let sent = &calls[0];
        assert!(sent.external_id.starts_with("passport-"));
        assert_eq!(sent.total_amount, Decimal::TEN);
        assert_eq!(sent.items.len(), 1);
        assert_eq!(sent.items[0].id, "test-item");
        assert_eq!(sent.customer.name, "Test User");

        assert!(response.success);
        assert_eq!(response.transaction.external_id, sent.external_id);
        assert_eq!(response.transaction.pix_payload, "00020126580014br.gov.bcb.pix");
        assert!(response.debug.used_test_data);
        assert_eq!(response.debug.real_customer, "Maria Silva");
        assert_eq!(response.debug.real_amount.as_f64(), Some(250.0));
        assert_eq!(response.debug.test_amount_used, Decimal::TEN);
        assert_eq!(response.debug.webhook_used, "https://webhook.site/unique-id");
    }

    #[tokio::test]
    async fn test_repeated_requests_are_not_deduplicated() {
        let gateway = RecordingGateway::new(accepted);
        let creator = PaymentCreator::new(gateway.clone(), "test");

        creator.process(envelope(10.0)).await.unwrap();
        creator.process(envelope(10.0)).await.unwrap();

        let calls = gateway.calls();
        assert_eq!(calls.len(), 2);
        assert_ne!(calls[0].external_id, calls[1].external_id);
    }

    #[tokio::test]
    async fn test_validation_failure_skips_gateway() {
        let gateway = RecordingGateway::new(accepted);
        let creator = PaymentCreator::new(gateway.clone(), "test");

        let err = creator.process(envelope(0.0)).await.unwrap_err();
        assert!(matches!(
            err,
            PaymentError::Validation(ValidationError::MissingFields)
        ));
        assert!(gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn test_gateway_failure_propagates() {
        let gateway = RecordingGateway::new(|_| Err(GatewayError::Other("connection reset".into())));
        let creator = PaymentCreator::new(gateway.clone(), "test");

        let err = creator.process(envelope(10.0)).await.unwrap_err();
        assert!(matches!(err, PaymentError::Gateway(_)));
        assert_eq!(err.to_string(), "connection reset");
    }

    #[tokio::test]
    async fn test_missing_pix_payload_is_a_gateway_failure() {
        let gateway = RecordingGateway::new(|request| {
            let mut result = accepted(request)?;
            result.pix = None;
            Ok(result)
        });
        let creator = PaymentCreator::new(gateway.clone(), "test");

        let err = creator.process(envelope(10.0)).await.unwrap_err();
        assert!(matches!(
            err,
            PaymentError::Gateway(GatewayError::MissingPixPayload)
        ));
        assert_eq!(gateway.calls().len(), 1);
    }
}
