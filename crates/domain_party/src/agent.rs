//! Agent state shared by Agent, ClaimAdjuster and Underwriter

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{AgentId, Money, MoneyError};

use crate::error::PartyError;

/// Agent-specific data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentProfile {
    agent_id: AgentId,
    commission: Decimal,
}

impl AgentProfile {
    /// Creates a new agent profile
    ///
    /// # Errors
    ///
    /// Returns `PartyError::InvalidCommission` if `commission` is negative
    pub fn new(agent_id: impl Into<AgentId>, commission: Decimal) -> Result<Self, PartyError> {
        if commission.is_sign_negative() && !commission.is_zero() {
            return Err(PartyError::InvalidCommission(format!(
                "{} must not be negative",
                commission
            )));
        }
        Ok(Self {
            agent_id: agent_id.into(),
            commission,
        })
    }

    pub fn agent_id(&self) -> &AgentId {
        &self.agent_id
    }

    pub fn commission(&self) -> Decimal {
        self.commission
    }

    /// Commission earned on a premium, treating `commission` as a rate
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::Overflow` if the product is out of range
    pub fn commission_on(&self, premium: Money) -> Result<Money, MoneyError> {
        premium.multiply(self.commission)
    }
}
