//! Request and response types of `POST /api/payments/create`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Customer fields submitted by the checkout frontend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerData {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// CPF or CNPJ, formatted or bare digits.
    pub cpf: String,
}

/// Request payload for creating a PIX payment.
///
/// `items` is carried as opaque JSON; only its presence is checked.
/// `amount` keeps the number exactly as submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePaymentRequest {
    #[serde(rename = "customerData")]
    pub customer_data: CustomerData,
    pub amount: Number,
    pub items: Vec<serde_json::Value>,
}

/// The subset of the gateway's transaction exposed to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionSummary {
    pub id: String,
    pub external_id: String,
    pub status: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_value: Decimal,
    pub pix_payload: String,
    pub payment_method: String,
    #[serde(rename = "hasError")]
    pub has_error: bool,
}

/// Records which values were actually sent to the gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebugInfo {
    pub used_test_data: bool,
    pub real_customer: String,
    pub real_amount: Number,
    #[serde(with = "rust_decimal::serde::float")]
    pub test_amount_used: Decimal,
    pub webhook_used: String,
}

/// Successful response of the create-payment endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePaymentResponse {
    pub success: bool,
    pub transaction: TransactionSummary,
    pub debug: DebugInfo,
}

/// Error body returned with 4xx and 5xx statuses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    /// An error body without details.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    /// An error body carrying a details string.
    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}
