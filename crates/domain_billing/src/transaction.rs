//! Financial transactions
//!
//! A `Transaction` is the common part of every money movement: an id, an
//! amount, and the user who is party to it. Claims and payments both wrap one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{Money, TransactionId, UserId};

use crate::error::BillingError;

/// A financial event between the insurer and a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    transaction_id: TransactionId,
    amount: Money,
    user_id: UserId,
}

impl Transaction {
    /// Creates a transaction from already-validated parts
    pub fn new(
        transaction_id: impl Into<TransactionId>,
        amount: Money,
        user_id: impl Into<UserId>,
    ) -> Self {
        Self {
            transaction_id: transaction_id.into(),
            amount,
            user_id: user_id.into(),
        }
    }

    /// Creates a transaction, rejecting a blank id or a negative amount
    ///
    /// # Errors
    ///
    /// * `BillingError::MissingTransactionId` - the id is blank
    /// * `BillingError::InvalidAmount` - the amount is negative
    pub fn validated(
        transaction_id: impl Into<TransactionId>,
        amount: Money,
        user_id: impl Into<UserId>,
    ) -> Result<Self, BillingError> {
        let transaction_id = transaction_id.into();
        if transaction_id.as_str().trim().is_empty() {
            return Err(BillingError::MissingTransactionId);
        }
        if amount.is_negative() {
            return Err(BillingError::InvalidAmount(format!(
                "{} must not be negative",
                amount
            )));
        }
        Ok(Self::new(transaction_id, amount, user_id))
    }

    pub fn transaction_id(&self) -> &TransactionId {
        &self.transaction_id
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    /// The user who is party to the transaction
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Replaces the amount without validation
    pub fn set_amount(&mut self, amount: Money) {
        self.amount = amount;
    }

    /// Processes the transaction and returns the resulting receipt
    pub fn process(&self) -> TransactionReceipt {
        let receipt = TransactionReceipt {
            transaction_id: self.transaction_id.clone(),
            user_id: self.user_id.clone(),
            amount: self.amount,
            processed_at: Utc::now(),
        };
        tracing::info!(
            transaction_id = %receipt.transaction_id,
            user_id = %receipt.user_id,
            amount = %receipt.amount,
            "Transaction processed"
        );
        receipt
    }
}

/// Record of a processed transaction
///
/// The user is named by id; a transaction does not hold the user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionReceipt {
    pub transaction_id: TransactionId,
    pub user_id: UserId,
    pub amount: Money,
    pub processed_at: DateTime<Utc>,
}

impl fmt::Display for TransactionReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Processing transaction ID {} for {} with amount {}.",
            self.transaction_id, self.user_id, self.amount
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::Currency;
    use rust_decimal_macros::dec;

    #[test]
    fn test_validated_rejects_blank_id() {
        let result = Transaction::validated(" ", Money::new(dec!(1), Currency::USD), "C1");
        assert_eq!(result.unwrap_err(), BillingError::MissingTransactionId);
    }

    #[test]
    fn test_process_reports_fields() {
        let txn = Transaction::new("T1", Money::new(dec!(250), Currency::USD), "C1");
        let receipt = txn.process();
        assert_eq!(receipt.transaction_id, "T1");
        assert_eq!(
            receipt.to_string(),
            "Processing transaction ID T1 for C1 with amount $ 250.00."
        );
    }
}
