//! Policy entity
//!
//! A policy ties a free-text product type and a premium to an owning user.
//! The owner is a weak reference: the id is stored as given and is never
//! checked against the set of registered users.

use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{Currency, Listing, Money, PolicyId, UserId};

use crate::error::PolicyError;

/// An insurance policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    policy_id: PolicyId,
    policy_type: String,
    premium: Money,
    owner: UserId,
}

impl Policy {
    /// Creates a policy from already-validated parts
    pub fn new(
        policy_id: impl Into<PolicyId>,
        policy_type: impl Into<String>,
        premium: Money,
        owner: impl Into<UserId>,
    ) -> Self {
        Self {
            policy_id: policy_id.into(),
            policy_type: policy_type.into(),
            premium,
            owner: owner.into(),
        }
    }

    pub fn policy_id(&self) -> &PolicyId {
        &self.policy_id
    }

    pub fn policy_type(&self) -> &str {
        &self.policy_type
    }

    pub fn premium(&self) -> Money {
        self.premium
    }

    pub fn owner(&self) -> &UserId {
        &self.owner
    }

    /// Replaces the premium
    ///
    /// No range check happens here; callers validate the new value first.
    pub fn set_premium(&mut self, premium: Money) {
        self.premium = premium;
    }

    /// Returns true if `user_id` is exactly the stored owner
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.owner == user_id
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Policy ID: {}, Type: {}, Premium: {}, Owner: {}",
            self.policy_id, self.policy_type, self.premium, self.owner
        )
    }
}

/// Filters `policies` down to those owned by `owner`, keeping their order
pub fn policies_owned_by<'a, I>(policies: I, owner: &UserId) -> Listing<&'a Policy>
where
    I: IntoIterator<Item = &'a Policy>,
{
    policies
        .into_iter()
        .filter(|policy| policy.is_owned_by(owner))
        .collect()
}

/// Builder for policies entered at a boundary
///
/// Unlike [`Policy::new`], `build` checks that every field is present and
/// that the premium is not negative.
#[derive(Debug, Clone)]
pub struct PolicyBuilder {
    policy_id: Option<PolicyId>,
    policy_type: Option<String>,
    premium: Option<Money>,
    owner: Option<UserId>,
    currency: Currency,
}

impl Default for PolicyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PolicyBuilder {
    /// Creates a new policy builder with default values
    pub fn new() -> Self {
        Self {
            policy_id: None,
            policy_type: None,
            premium: None,
            owner: None,
            currency: Currency::USD,
        }
    }

    pub fn policy_id(mut self, id: impl Into<PolicyId>) -> Self {
        self.policy_id = Some(id.into());
        self
    }

    pub fn policy_type(mut self, policy_type: impl Into<String>) -> Self {
        self.policy_type = Some(policy_type.into());
        self
    }

    pub fn premium(mut self, premium: Money) -> Self {
        self.premium = Some(premium);
        self
    }

    /// Parses the premium from user-entered text in the builder's currency
    ///
    /// # Errors
    ///
    /// Returns `PolicyError::InvalidPremium` if the text is not a
    /// non-negative number.
    pub fn premium_text(mut self, text: &str) -> Result<Self, PolicyError> {
        let premium = Money::parse_non_negative(text, self.currency)
            .map_err(|e| PolicyError::InvalidPremium(e.to_string()))?;
        self.premium = Some(premium);
        Ok(self)
    }

    pub fn owner(mut self, owner: impl Into<UserId>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    /// Sets the currency used by `premium_text`
    pub fn currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Builds the policy
    ///
    /// # Errors
    ///
    /// Returns error if a field is missing, an id is blank, or the premium
    /// is negative
    pub fn build(self) -> Result<Policy, PolicyError> {
        let policy_id = self
            .policy_id
            .filter(|id| !id.as_str().trim().is_empty())
            .ok_or_else(|| PolicyError::MissingRequiredField("policy_id".to_string()))?;
        let policy_type = self
            .policy_type
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| PolicyError::MissingRequiredField("policy_type".to_string()))?;
        let premium = self
            .premium
            .ok_or_else(|| PolicyError::MissingRequiredField("premium".to_string()))?;
        let owner = self
            .owner
            .filter(|id| !id.as_str().trim().is_empty())
            .ok_or_else(|| PolicyError::MissingRequiredField("owner".to_string()))?;

        if premium.is_negative() {
            return Err(PolicyError::InvalidPremium(format!(
                "{} must not be negative",
                premium
            )));
        }

        Ok(Policy {
            policy_id,
            policy_type,
            premium,
            owner,
        })
    }
}
