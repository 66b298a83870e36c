//! Claims domain errors

use thiserror::Error;

/// Errors that can occur in the claims domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClaimError {
    #[error("Claim ID is required")]
    MissingClaimId,

    #[error("Claim status must not be blank")]
    BlankStatus,

    #[error("Invalid claim: {0}")]
    InvalidClaim(String),
}
