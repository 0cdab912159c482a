//! Sandbox transaction payload.
//!
//! The gateway integration was validated against this exact payload, so
//! every transaction is created with it regardless of what the caller
//! submitted. Only `external_id` changes between calls.

use passport_sdk::objects::{
    DocumentType, PaymentMethod, TransactionCustomer, TransactionItem, TransactionRequest,
};
use rand::Rng;
use rust_decimal::Decimal;

pub const WEBHOOK_URL: &str = "https://webhook.site/unique-id";
pub const AMOUNT: Decimal = Decimal::TEN;
pub const CLIENT_IP: &str = "127.0.0.1";
pub const EXTERNAL_ID_PREFIX: &str = "passport";

const EXTERNAL_ID_SUFFIX_LEN: usize = 9;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generate a fresh `passport-{unix_millis}-{9 base36 chars}` identifier.
pub fn generate_external_id() -> String {
    let millis = time::OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
    let mut rng = rand::rng();
    let suffix: String = (0..EXTERNAL_ID_SUFFIX_LEN)
        .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
        .collect();
    format!("{EXTERNAL_ID_PREFIX}-{millis}-{suffix}")
}

pub fn customer() -> TransactionCustomer {
    TransactionCustomer {
        name: "Test User".to_string(),
        email: "test@example.com".to_string(),
        phone: "11999999999".to_string(),
        document_type: DocumentType::Cpf,
        document: "11144477735".to_string(),
    }
}

pub fn items() -> Vec<TransactionItem> {
    vec![TransactionItem {
        id: "test-item".to_string(),
        title: "Test Item".to_string(),
        description: "Test Description".to_string(),
        price: AMOUNT,
        quantity: 1,
        is_physical: false,
    }]
}

/// Build the sandbox transaction with a newly generated `external_id`.
pub fn transaction() -> TransactionRequest {
    TransactionRequest {
        external_id: generate_external_id(),
        total_amount: AMOUNT,
        payment_method: PaymentMethod::Pix,
        webhook_url: WEBHOOK_URL.to_string(),
        items: items(),
        ip: CLIENT_IP.to_string(),
        customer: customer(),
    }
}
