pub mod create_payment;
pub mod transaction;

pub use create_payment::{
    CreatePaymentRequest, CreatePaymentResponse, CustomerData, DebugInfo, ErrorResponse,
    TransactionSummary,
};
pub use transaction::{
    DocumentType, PaymentMethod, PixData, TransactionCustomer, TransactionItem,
    TransactionRequest, TransactionResult,
};
