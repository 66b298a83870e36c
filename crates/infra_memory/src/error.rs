//! Registry error types
//!
//! Every variant is recoverable: the registry is left exactly as it was
//! before the failing call.

use thiserror::Error;

use core_kernel::{ClaimId, PolicyId, TransactionId, UserId};

/// Errors returned by registry operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A user with this id is already registered
    #[error("User ID '{0}' is already registered")]
    DuplicateUser(UserId),

    /// A policy with this id already exists
    #[error("Policy '{0}' already exists")]
    DuplicatePolicy(PolicyId),

    /// A claim or payment already carries this transaction id
    #[error("Transaction '{0}' already exists")]
    DuplicateTransaction(TransactionId),

    #[error("User with ID {0} not found")]
    UserNotFound(UserId),

    #[error("Policy with ID {0} not found")]
    PolicyNotFound(PolicyId),

    #[error("Claim with ID {0} not found")]
    ClaimNotFound(ClaimId),

    /// Login failed; deliberately silent about which credential was wrong
    #[error("Invalid user ID or password")]
    AuthFailure,
}

impl RegistryError {
    /// Returns true for the not-found family of errors
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RegistryError::UserNotFound(_)
                | RegistryError::PolicyNotFound(_)
                | RegistryError::ClaimNotFound(_)
        )
    }
}
