//! Payment processing
//!
//! A payment is a transaction with a date. The registry stores it and then
//! immediately processes it; processing yields a [`PaymentReceipt`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{Money, TransactionId, UserId};

use crate::transaction::Transaction;

/// A payment record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    transaction: Transaction,
    payment_date: NaiveDate,
}

impl Payment {
    /// Creates a new payment
    ///
    /// # Arguments
    ///
    /// * `transaction` - Id, amount and paying user
    /// * `payment_date` - Date the payment was made
    pub fn new(transaction: Transaction, payment_date: NaiveDate) -> Self {
        Self {
            transaction,
            payment_date,
        }
    }

    pub fn transaction(&self) -> &Transaction {
        &self.transaction
    }

    pub fn transaction_id(&self) -> &TransactionId {
        self.transaction.transaction_id()
    }

    pub fn amount(&self) -> Money {
        self.transaction.amount()
    }

    pub fn user_id(&self) -> &UserId {
        self.transaction.user_id()
    }

    pub fn payment_date(&self) -> NaiveDate {
        self.payment_date
    }

    /// Replaces the amount without validation
    pub fn set_amount(&mut self, amount: Money) {
        self.transaction.set_amount(amount);
    }

    /// Processes the payment and returns its receipt
    pub fn process_payment(&self) -> PaymentReceipt {
        let receipt = PaymentReceipt {
            transaction_id: self.transaction_id().clone(),
            user_id: self.user_id().clone(),
            amount: self.amount(),
            payment_date: self.payment_date,
        };
        tracing::info!(
            transaction_id = %receipt.transaction_id,
            user_id = %receipt.user_id,
            amount = %receipt.amount,
            payment_date = %receipt.payment_date,
            "Payment processed"
        );
        receipt
    }
}

impl fmt::Display for Payment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Payment ID: {}, Amount: {}, Date: {}",
            self.transaction_id(),
            self.amount(),
            self.payment_date
        )
    }
}

/// Record of a processed payment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentReceipt {
    pub transaction_id: TransactionId,
    pub user_id: UserId,
    pub amount: Money,
    pub payment_date: NaiveDate,
}

impl fmt::Display for PaymentReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Processing payment of {} for user {} on {}.",
            self.amount, self.user_id, self.payment_date
        )
    }
}
