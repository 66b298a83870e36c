//! Core Kernel - Foundational types shared by every insurance crate
//!
//! This crate provides the building blocks used across the domain modules:
//! - Caller-supplied identifiers wrapped in distinct newtypes
//! - Money with precise decimal arithmetic
//! - The `Listing` outcome that separates "nothing found" from errors

pub mod money;
pub mod identifiers;
pub mod outcome;

pub use money::{Money, Currency, MoneyError};
pub use identifiers::{UserId, AgentId, PolicyId, ClaimId, TransactionId};
pub use outcome::Listing;
