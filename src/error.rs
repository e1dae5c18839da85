use thiserror::Error;
use uuid::Uuid;

pub type Result<T> = std::result::Result<T, PaymentError>;

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("payment {0} not found")]
    NotFound(Uuid),
    #[error("invalid payment request: {0}")]
    Validation(String),
}
