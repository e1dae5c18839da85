use crate::domain::bank::BankRequest;
use crate::domain::payment::{Payment, PaymentRequest, PaymentStatus};
use crate::domain::ports::{BankClientBox, PaymentStoreBox};
use crate::domain::validation::REJECTED_CVV;
use crate::error::Result;
use tracing::{info, warn};
use uuid::Uuid;

/// The main entry point for payment processing.
///
/// `PaymentService` owns the storage backend and the bank client and
/// drives a submission from validation through authorization to the
/// persisted record.
pub struct PaymentService {
    store: PaymentStoreBox,
    bank: BankClientBox,
}

impl PaymentService {
    pub fn new(store: PaymentStoreBox, bank: BankClientBox) -> Self {
        Self { store, bank }
    }

    /// Processes one payment submission.
    ///
    /// Always resolves to a record: a request that fails the local CVV
    /// check comes back `Rejected` without touching the bank or the
    /// store, so its id is never retrievable later. Every other request
    /// is authorized against the bank exactly once and persisted with
    /// the mapped status.
    pub async fn submit(&self, request: PaymentRequest) -> Result<Payment> {
        let id = Uuid::new_v4();

        if request.cvv == REJECTED_CVV {
            warn!(payment_id = %id, "payment with invalid cvv was rejected");
            return Ok(Payment::from_request(&request, id, PaymentStatus::Rejected));
        }

        info!(
            payment_id = %id,
            amount = request.amount,
            currency = %request.currency,
            "processing payment"
        );
        let authorization = self.bank.authorize(BankRequest::from(&request)).await;

        let status = PaymentStatus::from(authorization.status);
        let payment = Payment::from_request(&request, id, status);

        self.store.create(payment.clone()).await?;
        info!(payment_id = %id, status = ?status, "payment stored");

        Ok(payment)
    }

    /// Looks up a previously submitted payment; `NotFound` passes
    /// through unchanged.
    pub async fn fetch(&self, id: Uuid) -> Result<Payment> {
        self.store.read(id).await
    }
}
