//! CLI error handling

use thiserror::Error;

use core_kernel::MoneyError;
use domain_billing::BillingError;
use domain_claims::ClaimError;
use domain_party::{PartyError, Role};
use domain_policy::PolicyError;
use infra_memory::RegistryError;

use crate::auth::Permission;

/// Errors returned by session operations
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("No user is logged in")]
    NotLoggedIn,

    #[error("{role} is not permitted to perform {permission}")]
    Forbidden { role: Role, permission: Permission },

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Party(#[from] PartyError),

    #[error(transparent)]
    Policy(#[from] PolicyError),

    #[error(transparent)]
    Claim(#[from] ClaimError),

    #[error(transparent)]
    Billing(#[from] BillingError),

    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Errors surfaced by the terminal front end
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Input stream closed
    #[error("End of input")]
    EndOfInput,
}
