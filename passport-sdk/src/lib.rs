//! Passport checkout SDK.
//!
//! Wire types shared by the checkout server and its callers, the customer
//! field validators, and (behind the `client` feature) a typed client for
//! the ViperPay PIX gateway.

#![forbid(unsafe_code)]

#[cfg(feature = "client")]
pub mod client;
pub mod objects;
pub mod validators;
