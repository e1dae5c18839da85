use super::bank::{BankAuthorization, BankRequest};
use super::payment::{Payment, PaymentStatus};
use crate::error::Result;
use async_trait::async_trait;
use uuid::Uuid;

pub type PaymentStoreBox = Box<dyn PaymentStore>;
pub type BankClientBox = Box<dyn BankClient>;

/// Storage port for payment records.
///
/// Implementations must support concurrent create/read/update from
/// multiple in-flight requests; mutations are atomic per key.
#[async_trait]
pub trait PaymentStore: Send + Sync {
    /// Inserts the record keyed by its id and returns that id.
    /// The store never generates identifiers.
    async fn create(&self, payment: Payment) -> Result<Uuid>;

    /// Returns the current record, or `NotFound` if absent or expired.
    async fn read(&self, id: Uuid) -> Result<Payment>;

    /// Replaces only the status of an existing record and returns its id.
    /// Fails with `NotFound` if the record is absent or expired.
    async fn update_status(&self, id: Uuid, status: PaymentStatus) -> Result<Uuid>;
}

/// Outbound port to the acquiring bank.
#[async_trait]
pub trait BankClient: Send + Sync {
    /// Sends a single authorization attempt. Infallible by contract:
    /// every transport or parse problem is folded into the outcome.
    async fn authorize(&self, request: BankRequest) -> BankAuthorization;
}
