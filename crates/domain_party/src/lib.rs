//! Party Domain - users, roles, and credentials
//!
//! Every user carries a [`RoleProfile`]: Admin, Customer, Agent,
//! ClaimAdjuster or Underwriter, the last three with an [`AgentProfile`].
//! The role is derived from the profile, never stored separately.
//!
//! Role-specific behavior is reached through capability handles:
//!
//! ```rust
//! use domain_party::{AgentProfile, User};
//! use rust_decimal_macros::dec;
//!
//! let agent = User::agent("U7", "Ana", "pw", AgentProfile::new("AG7", dec!(0.05)).unwrap()).unwrap();
//! assert!(agent.as_agent().is_some());
//! assert!(agent.as_customer().is_none());
//! ```

pub mod user;
pub mod role;
pub mod agent;
pub mod credential;
pub mod capabilities;
pub mod validation;
pub mod error;

pub use user::User;
pub use role::{Role, RoleProfile};
pub use agent::AgentProfile;
pub use credential::Credential;
pub use capabilities::{Admin, Agent, ClaimAdjuster, Customer, Report, RiskSpecialization, Underwriter};
pub use validation::{RegistrationForm, ValidationResult};
pub use error::PartyError;
