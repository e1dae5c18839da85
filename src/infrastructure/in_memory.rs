use crate::domain::payment::{Payment, PaymentStatus};
use crate::domain::ports::PaymentStore;
use crate::error::{PaymentError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;
use uuid::Uuid;

/// Records are kept for 12 hours from creation.
const RETENTION: Duration = Duration::from_secs(12 * 60 * 60);

struct Entry {
    payment: Payment,
    expires_at: Instant,
}

/// A thread-safe in-memory store for payment records with a fixed
/// retention window.
///
/// Uses `Arc<RwLock<HashMap<Uuid, Entry>>>` for shared concurrent access.
/// Expiry is passive: an entry past its window is treated as absent.
/// Updates keep the expiry instant computed at creation, so a record is
/// never retrievable for longer than the original window.
#[derive(Clone)]
pub struct InMemoryPaymentStore {
    entries: Arc<RwLock<HashMap<Uuid, Entry>>>,
    retention: Duration,
}

impl InMemoryPaymentStore {
    /// Creates an empty store with the standard 12-hour retention.
    pub fn new() -> Self {
        Self::with_retention(RETENTION)
    }

    /// Creates an empty store with a custom retention window.
    pub fn with_retention(retention: Duration) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            retention,
        }
    }
}

impl Default for InMemoryPaymentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PaymentStore for InMemoryPaymentStore {
    async fn create(&self, payment: Payment) -> Result<Uuid> {
        let id = payment.id;
        let entry = Entry {
            payment,
            expires_at: Instant::now() + self.retention,
        };
        let mut entries = self.entries.write().await;
        entries.insert(id, entry);
        Ok(id)
    }

    async fn read(&self, id: Uuid) -> Result<Payment> {
        let entries = self.entries.read().await;
        match entries.get(&id) {
            Some(entry) if entry.expires_at > Instant::now() => Ok(entry.payment.clone()),
            _ => Err(PaymentError::NotFound(id)),
        }
    }

    async fn update_status(&self, id: Uuid, status: PaymentStatus) -> Result<Uuid> {
        let mut entries = self.entries.write().await;
        match entries.get_mut(&id) {
            Some(entry) if entry.expires_at > Instant::now() => {
                entry.payment = entry.payment.clone().with_status(status);
                Ok(id)
            }
            _ => Err(PaymentError::NotFound(id)),
        }
    }
}
