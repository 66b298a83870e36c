//! Billing domain errors

use thiserror::Error;

/// Errors that can occur in the billing domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BillingError {
    /// Transaction id is blank
    #[error("Transaction ID is required")]
    MissingTransactionId,

    /// Amount is not acceptable for a transaction
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}
