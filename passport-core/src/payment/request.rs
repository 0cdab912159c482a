use passport_sdk::objects::{CreatePaymentRequest, CustomerData};
use passport_sdk::validators::{validate_document, validate_email, validate_phone};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Number, Value};
use thiserror::Error;

/// Reasons a create-payment body is rejected.
///
/// The `Display` strings are returned verbatim to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing required fields: customerData, amount, items")]
    MissingFields,
    #[error("Missing required customer fields")]
    MissingCustomerFields,
    #[error("Invalid email format")]
    InvalidEmail,
    #[error("Invalid phone format")]
    InvalidPhone,
    #[error("Invalid CPF/CNPJ format")]
    InvalidDocument,
}

/// A create-payment body that parsed as a JSON object but is not yet
/// validated.
///
/// Every top-level field is optional here so that presence can be checked
/// in the documented order. A field with the wrong JSON type fails the
/// parse outright.
#[derive(Debug, Clone)]
pub struct PaymentEnvelope {
    customer_data: Option<Map<String, Value>>,
    amount: Option<Number>,
    items: Option<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
struct RawCustomer {
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    cpf: Option<String>,
}

impl PaymentEnvelope {
    /// Parse a raw request body.
    ///
    /// Anything that is not a JSON object with correctly typed fields is
    /// reported as [`ValidationError::MissingFields`].
    pub fn parse(body: &[u8]) -> Result<Self, ValidationError> {
        let mut object: Map<String, Value> =
            serde_json::from_slice(body).map_err(|_| ValidationError::MissingFields)?;
        Ok(Self {
            customer_data: take_field(&mut object, "customerData")?,
            amount: take_field(&mut object, "amount")?,
            items: take_field(&mut object, "items")?,
        })
    }

    /// `customerData.name`, if it is a string.
    pub fn customer_name(&self) -> Option<&str> {
        self.customer_data.as_ref()?.get("name")?.as_str()
    }

    pub fn amount(&self) -> Option<&Number> {
        self.amount.as_ref()
    }

    pub fn item_count(&self) -> usize {
        self.items.as_ref().map_or(0, Vec::len)
    }

    /// Run the presence and format checks; the first failure wins.
    pub fn validate(self) -> Result<CreatePaymentRequest, ValidationError> {
        let (Some(customer), Some(amount), Some(items)) = (
            self.customer_data,
            self.amount.filter(is_non_zero),
            self.items,
        ) else {
            return Err(ValidationError::MissingFields);
        };

        let customer: RawCustomer = serde_json::from_value(Value::Object(customer))
            .map_err(|_| ValidationError::MissingCustomerFields)?;
        let customer = customer
            .into_complete()
            .ok_or(ValidationError::MissingCustomerFields)?;

        if !validate_email(&customer.email) {
            return Err(ValidationError::InvalidEmail);
        }
        if !validate_phone(&customer.phone) {
            return Err(ValidationError::InvalidPhone);
        }
        if !validate_document(&customer.cpf) {
            return Err(ValidationError::InvalidDocument);
        }

        Ok(CreatePaymentRequest {
            customer_data: customer,
            amount,
            items,
        })
    }
}

/// Remove `key` from `object`, treating `null` as absent.
fn take_field<T: DeserializeOwned>(
    object: &mut Map<String, Value>,
    key: &str,
) -> Result<Option<T>, ValidationError> {
    match object.remove(key) {
        Some(value) => serde_json::from_value::<Option<T>>(value)
            .map_err(|_| ValidationError::MissingFields),
        None => Ok(None),
    }
}

fn is_non_zero(amount: &Number) -> bool {
    amount.as_f64().is_some_and(|value| value != 0.0)
}

impl RawCustomer {
    fn into_complete(self) -> Option<CustomerData> {
        let non_empty = |field: Option<String>| field.filter(|value| !value.is_empty());
        Some(CustomerData {
            name: non_empty(self.name)?,
            email: non_empty(self.email)?,
            phone: non_empty(self.phone)?,
            cpf: non_empty(self.cpf)?,
        })
    }
}
