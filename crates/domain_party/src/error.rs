//! Party domain errors
//!
//! Registration input that fails to parse or validate is reported here. None
//! of these errors leave a partially registered user behind.

use thiserror::Error;

/// Errors that can occur in the party domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PartyError {
    /// Role text does not name a known role
    #[error("Invalid role: {0}")]
    InvalidRole(String),

    /// Commission is not a non-negative number
    #[error("Invalid commission: {0}")]
    InvalidCommission(String),

    /// An agent-family role was given without agent details
    #[error("Role {0} requires an agent ID and commission")]
    MissingAgentProfile(String),

    /// Password hashing failed
    #[error("Credential error: {0}")]
    Credential(String),

    /// Registration form validation failed
    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}

impl PartyError {
    /// Creates a ValidationFailed error from validation errors
    pub fn validation_failed(errors: Vec<String>) -> Self {
        PartyError::ValidationFailed(errors.join("; "))
    }
}
