//! Billing Domain - transactions and payments
//!
//! Every money movement is a [`Transaction`]: an id, an amount, and the user
//! who is party to it. [`Payment`] adds a payment date and a processing step
//! that yields a [`PaymentReceipt`]. Claims reuse the same transaction core
//! from the claims crate.
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use core_kernel::{Currency, Money};
//! use domain_billing::{Payment, Transaction};
//! use rust_decimal_macros::dec;
//!
//! let txn = Transaction::new("T9", Money::new(dec!(120), Currency::USD), "C1");
//! let payment = Payment::new(txn, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
//!
//! let receipt = payment.process_payment();
//! assert_eq!(receipt.user_id, "C1");
//! ```

pub mod transaction;
pub mod payment;
pub mod error;

pub use transaction::{Transaction, TransactionReceipt};
pub use payment::{Payment, PaymentReceipt};
pub use error::BillingError;
