//! Role capabilities
//!
//! Each handle borrows a [`User`] whose role grants the capability, so a
//! customer can never be asked to sell a policy. Handles only describe what
//! happened; storing the resulting policy, claim or payment is left to the
//! registry.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{AgentId, Listing, UserId};
use domain_claims::{Claim, ClaimInvestigation};
use domain_policy::{policies_owned_by, Policy, PolicyEvent};

use crate::agent::AgentProfile;
use crate::user::User;

/// Placeholder output of report generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub report_type: String,
    pub requested_by: UserId,
    pub generated_at: DateTime<Utc>,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Generating {} report.", self.report_type)
    }
}

/// Record that an underwriter took on risk assessment work
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskSpecialization {
    pub underwriter_id: AgentId,
    pub started_at: DateTime<Utc>,
}

impl fmt::Display for RiskSpecialization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Specializing in risk assessment.")
    }
}

/// Admin capabilities
#[derive(Debug, Clone, Copy)]
pub struct Admin<'a> {
    user: &'a User,
}

impl<'a> Admin<'a> {
    pub(crate) fn new(user: &'a User) -> Self {
        Self { user }
    }

    pub fn user(&self) -> &'a User {
        self.user
    }

    pub fn generate_report(&self, report_type: &str) -> Report {
        let report = Report {
            report_type: report_type.trim().to_string(),
            requested_by: self.user.user_id().clone(),
            generated_at: Utc::now(),
        };
        tracing::info!(
            report_type = %report.report_type,
            user_id = %report.requested_by,
            "Generating report"
        );
        report
    }
}

/// Customer capabilities
#[derive(Debug, Clone, Copy)]
pub struct Customer<'a> {
    user: &'a User,
}

impl<'a> Customer<'a> {
    pub(crate) fn new(user: &'a User) -> Self {
        Self { user }
    }

    pub fn user(&self) -> &'a User {
        self.user
    }

    /// Returns the policies in `policies` owned by this customer
    ///
    /// Order follows the input; `Listing::Empty` means none were found.
    pub fn view_policy_details<'p, I>(&self, policies: I) -> Listing<&'p Policy>
    where
        I: IntoIterator<Item = &'p Policy>,
    {
        let owned = policies_owned_by(policies, self.user.user_id());
        tracing::debug!(
            user_id = %self.user.user_id(),
            count = owned.len(),
            "Viewing customer policies"
        );
        owned
    }
}

/// Agent capabilities
#[derive(Debug, Clone, Copy)]
pub struct Agent<'a> {
    user: &'a User,
    profile: &'a AgentProfile,
}

impl<'a> Agent<'a> {
    pub(crate) fn new(user: &'a User, profile: &'a AgentProfile) -> Self {
        Self { user, profile }
    }

    pub fn user(&self) -> &'a User {
        self.user
    }

    pub fn agent_id(&self) -> &'a AgentId {
        self.profile.agent_id()
    }

    pub fn commission(&self) -> Decimal {
        self.profile.commission()
    }

    /// Records the sale of `policy`; the caller adds it to the registry
    pub fn sell_policy(&self, policy: &Policy) -> PolicyEvent {
        tracing::info!(
            policy_id = %policy.policy_id(),
            agent_id = %self.profile.agent_id(),
            "Selling policy"
        );
        PolicyEvent::sold(policy.policy_id().clone(), self.profile.agent_id().clone())
    }
}

/// ClaimAdjuster capabilities, on top of everything an Agent can do
#[derive(Debug, Clone, Copy)]
pub struct ClaimAdjuster<'a> {
    agent: Agent<'a>,
}

impl<'a> ClaimAdjuster<'a> {
    pub(crate) fn new(agent: Agent<'a>) -> Self {
        Self { agent }
    }

    pub fn as_agent(&self) -> Agent<'a> {
        self.agent
    }

    pub fn investigate_claim(&self, claim: &Claim) -> ClaimInvestigation {
        ClaimInvestigation::open(claim, self.agent.agent_id().clone())
    }
}

/// Underwriter capabilities, on top of everything an Agent can do
#[derive(Debug, Clone, Copy)]
pub struct Underwriter<'a> {
    agent: Agent<'a>,
}

impl<'a> Underwriter<'a> {
    pub(crate) fn new(agent: Agent<'a>) -> Self {
        Self { agent }
    }

    pub fn as_agent(&self) -> Agent<'a> {
        self.agent
    }

    pub fn specialize_in_risk(&self) -> RiskSpecialization {
        let specialization = RiskSpecialization {
            underwriter_id: self.agent.agent_id().clone(),
            started_at: Utc::now(),
        };
        tracing::info!(
            agent_id = %specialization.underwriter_id,
            "Specializing in risk assessment"
        );
        specialization
    }
}
