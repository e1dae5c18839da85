use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Currencies accepted by the gateway.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Eur,
    Gbp,
    Usd,
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Usd => "USD",
        })
    }
}

/// The lifecycle status of a payment.
///
/// `Rejected` is assigned locally when a request fails validation;
/// the other three are derived from the bank's processing outcome.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
pub enum PaymentStatus {
    Authorized,
    Declined,
    Rejected,
    ErrorOrPending,
}

/// An incoming card-payment request.
///
/// Transient: lives for the duration of one submission and is never
/// persisted. The amount is an integral number of minor currency units.
#[derive(Debug, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub card_number: u64,
    pub expiry_month: u8,
    pub expiry_year: u16,
    pub currency: Currency,
    pub amount: i64,
    pub cvv: u16,
}

impl PaymentRequest {
    /// The last four decimal digits of the card number.
    pub fn card_number_last_four(&self) -> u16 {
        (self.card_number % 10_000) as u16
    }
}

/// The stored record of a processed payment.
///
/// Holds only masked card data: the last four digits are derived at
/// construction and the full card number never reaches the store.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: Uuid,
    pub status: PaymentStatus,
    pub card_number_last_four: u16,
    pub expiry_month: u8,
    pub expiry_year: u16,
    pub currency: Currency,
    pub amount: i64,
}

impl Payment {
    /// Builds the record for a submission, masking the card number.
    pub fn from_request(request: &PaymentRequest, id: Uuid, status: PaymentStatus) -> Self {
        Self {
            id,
            status,
            card_number_last_four: request.card_number_last_four(),
            expiry_month: request.expiry_month,
            expiry_year: request.expiry_year,
            currency: request.currency,
            amount: request.amount,
        }
    }

    /// Returns a copy of this record with only the status replaced.
    pub fn with_status(self, status: PaymentStatus) -> Self {
        Self { status, ..self }
    }
}
