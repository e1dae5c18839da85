use super::payment::{Currency, PaymentRequest, PaymentStatus};
use serde::{Deserialize, Serialize};

/// Outcome of a single authorization attempt against the bank.
///
/// `Failure` is the default assigned to outcomes parsed off the wire,
/// until the flag-derived status replaces it.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum BankProcessingStatus {
    Success,
    #[default]
    Failure,
    InternalError,
}

impl From<BankProcessingStatus> for PaymentStatus {
    fn from(status: BankProcessingStatus) -> Self {
        match status {
            BankProcessingStatus::Success => PaymentStatus::Authorized,
            BankProcessingStatus::Failure => PaymentStatus::Declined,
            BankProcessingStatus::InternalError => PaymentStatus::ErrorOrPending,
        }
    }
}

/// The request body sent to the bank's authorization endpoint.
///
/// Built fresh per submission and discarded afterwards; this is the only
/// place the full card number leaves the process.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct BankRequest {
    pub card_number: String,
    pub expiry_date: String,
    pub currency: Currency,
    pub amount: i64,
    pub cvv: u16,
}

impl From<&PaymentRequest> for BankRequest {
    fn from(request: &PaymentRequest) -> Self {
        Self {
            card_number: request.card_number.to_string(),
            expiry_date: format!("{:02}/{}", request.expiry_month, request.expiry_year),
            currency: request.currency,
            amount: request.amount,
            cvv: request.cvv,
        }
    }
}

/// The bank's answer to an authorization attempt.
///
/// Only `authorized` and `authorization_code` come off the wire; the
/// processing status is derived locally by the client and never trusted
/// from the endpoint.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct BankAuthorization {
    pub authorized: bool,
    #[serde(default)]
    pub authorization_code: Option<String>,
    #[serde(skip, default)]
    pub status: BankProcessingStatus,
}

impl BankAuthorization {
    /// An unauthorized outcome with no code, tagged with the given status.
    pub fn unauthorized(status: BankProcessingStatus) -> Self {
        Self {
            authorized: false,
            authorization_code: None,
            status,
        }
    }
}
