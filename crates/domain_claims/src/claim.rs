//! Claim entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::{ClaimId, Money, TransactionId, UserId};
use domain_billing::Transaction;

use crate::error::ClaimError;

/// Claim status
///
/// The status set is open: the well-known states have variants and any other
/// non-blank text is carried verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ClaimStatus {
    /// Initial state after filing
    Pending,
    Approved,
    Denied,
    Other(String),
}

impl ClaimStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ClaimStatus::Pending => "Pending",
            ClaimStatus::Approved => "Approved",
            ClaimStatus::Denied => "Denied",
            ClaimStatus::Other(status) => status,
        }
    }
}

impl Default for ClaimStatus {
    fn default() -> Self {
        ClaimStatus::Pending
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClaimStatus {
    type Err = ClaimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ClaimError::BlankStatus);
        }
        Ok(ClaimStatus::from(trimmed.to_string()))
    }
}

impl From<String> for ClaimStatus {
    fn from(status: String) -> Self {
        match status.to_ascii_lowercase().as_str() {
            "pending" => ClaimStatus::Pending,
            "approved" => ClaimStatus::Approved,
            "denied" => ClaimStatus::Denied,
            _ => ClaimStatus::Other(status),
        }
    }
}

impl From<ClaimStatus> for String {
    fn from(status: ClaimStatus) -> String {
        match status {
            ClaimStatus::Other(status) => status,
            known => known.as_str().to_string(),
        }
    }
}

/// A claim filed by a user
///
/// The requested amount lives only on the underlying transaction;
/// [`Claim::claim_amount`] reads it from there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    transaction: Transaction,
    claim_id: ClaimId,
    status: ClaimStatus,
}

impl Claim {
    /// Files a new claim in the `Pending` state
    pub fn file(transaction: Transaction, claim_id: impl Into<ClaimId>) -> Self {
        Self {
            transaction,
            claim_id: claim_id.into(),
            status: ClaimStatus::Pending,
        }
    }

    pub fn claim_id(&self) -> &ClaimId {
        &self.claim_id
    }

    pub fn transaction(&self) -> &Transaction {
        &self.transaction
    }

    pub fn transaction_id(&self) -> &TransactionId {
        self.transaction.transaction_id()
    }

    pub fn user_id(&self) -> &UserId {
        self.transaction.user_id()
    }

    pub fn claim_amount(&self) -> Money {
        self.transaction.amount()
    }

    pub fn status(&self) -> &ClaimStatus {
        &self.status
    }

    /// Replaces the claimed amount without validation
    pub fn set_amount(&mut self, amount: Money) {
        self.transaction.set_amount(amount);
    }

    /// Replaces the status and reports the change
    ///
    /// Any status may follow any other; only the status field changes.
    pub fn update_status(&mut self, status: ClaimStatus) -> StatusChange {
        let previous = std::mem::replace(&mut self.status, status);
        let change = StatusChange {
            claim_id: self.claim_id.clone(),
            previous,
            current: self.status.clone(),
            changed_at: Utc::now(),
        };
        tracing::info!(
            claim_id = %change.claim_id,
            previous = %change.previous,
            current = %change.current,
            "Claim status updated"
        );
        change
    }
}

impl fmt::Display for Claim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Claim ID: {}, Amount: {}, Status: {}",
            self.claim_id,
            self.claim_amount(),
            self.status
        )
    }
}

/// Record of a claim status change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusChange {
    pub claim_id: ClaimId,
    pub previous: ClaimStatus,
    pub current: ClaimStatus,
    pub changed_at: DateTime<Utc>,
}

impl fmt::Display for StatusChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Claim {} status updated to {}.", self.claim_id, self.current)
    }
}
