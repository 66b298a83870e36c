//! Policy domain errors

use thiserror::Error;

/// Errors that can occur in the policy domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PolicyError {
    /// Required field is missing or blank
    #[error("Missing required field: {0}")]
    MissingRequiredField(String),

    /// Premium is not a non-negative amount
    #[error("Invalid premium: {0}")]
    InvalidPremium(String),
}
