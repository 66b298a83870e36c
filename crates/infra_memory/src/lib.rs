//! In-Memory Registry
//!
//! The registry is the single source of truth for users, policies, claims
//! and payments. Each collection keeps insertion order, lookups are linear
//! scans returning the first match, and all state lives for the lifetime of
//! the process only.
//!
//! # Example
//!
//! ```rust
//! use core_kernel::{Currency, Money};
//! use domain_party::User;
//! use domain_policy::Policy;
//! use infra_memory::Registry;
//! use rust_decimal_macros::dec;
//!
//! let mut registry = Registry::new();
//! registry.register_user(User::customer("C1", "Carl", "pw2").unwrap()).unwrap();
//! registry
//!     .add_policy(Policy::new("P1", "Auto", Money::new(dec!(500), Currency::USD), "C1"))
//!     .unwrap();
//!
//! let user = registry.login_user("C1", "pw2").unwrap();
//! assert_eq!(registry.policies_owned_by(user.user_id()).len(), 1);
//! ```

pub mod registry;
pub mod shared;
pub mod snapshot;
pub mod error;

pub use registry::Registry;
pub use shared::SharedRegistry;
pub use snapshot::{RegistrySnapshot, UserRecord};
pub use error::RegistryError;
