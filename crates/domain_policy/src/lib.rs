//! Policy Domain
//!
//! Policies are plain records keyed by a caller-supplied `PolicyId`. They are
//! created by an admin or sold by an agent, repriced through `set_premium`,
//! and removed by id. Ownership is a weak `UserId` reference.
//!
//! # Example
//!
//! ```rust
//! use core_kernel::{Currency, Money, UserId};
//! use domain_policy::{policies_owned_by, Policy};
//! use rust_decimal_macros::dec;
//!
//! let policies = vec![
//!     Policy::new("P1", "Auto", Money::new(dec!(500), Currency::USD), "C1"),
//!     Policy::new("P2", "Home", Money::new(dec!(900), Currency::USD), "C2"),
//! ];
//!
//! let owned = policies_owned_by(&policies, &UserId::from("C1"));
//! assert_eq!(owned.len(), 1);
//! ```

pub mod policy;
pub mod events;
pub mod error;

pub use policy::{Policy, PolicyBuilder, policies_owned_by};
pub use events::PolicyEvent;
pub use error::PolicyError;
