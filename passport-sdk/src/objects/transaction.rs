//! ViperPay gateway wire types.
//!
//! These mirror the JSON bodies exchanged with the PIX processor's
//! transaction-creation endpoint.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Payment rails accepted by the gateway.
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentMethod {
    Pix,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Brazilian taxpayer document kinds.
#[serde(rename_all = "UPPERCASE")]
pub enum DocumentType {
    Cpf,
    Cnpj,
}

/// Customer block of an outbound transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionCustomer {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub document_type: DocumentType,
    pub document: String,
}

/// A single line item of an outbound transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionItem {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub quantity: u32,
    pub is_physical: bool,
}

/// Request body for creating a transaction on the gateway.
///
/// `external_id` is generated by the caller and identifies this attempt
/// to the gateway; it is never reused between attempts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRequest {
    pub external_id: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    pub payment_method: PaymentMethod,
    pub webhook_url: String,
    pub items: Vec<TransactionItem>,
    pub ip: String,
    pub customer: TransactionCustomer,
}

/// PIX copy-and-paste data returned by the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixData {
    pub payload: String,
}

/// Response body of a created transaction.
///
/// Unknown fields are ignored. `pix` is optional on the wire; callers that
/// need the PIX payload must treat its absence as a failed creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionResult {
    pub id: String,
    pub external_id: String,
    pub status: String,
    pub total_value: Decimal,
    #[serde(default)]
    pub pix: Option<PixData>,
    pub payment_method: String,
    #[serde(rename = "hasError", default)]
    pub has_error: bool,
}
