//! User entity
//!
//! A user has an immutable id, a mutable display name, a credential, and a
//! role profile fixed at registration.

use core_kernel::UserId;

use crate::agent::AgentProfile;
use crate::capabilities::{Admin, Agent, ClaimAdjuster, Customer, Underwriter};
use crate::credential::Credential;
use crate::error::PartyError;
use crate::role::{Role, RoleProfile};

/// A registered user
#[derive(Debug, Clone)]
pub struct User {
    user_id: UserId,
    name: String,
    credential: Credential,
    profile: RoleProfile,
}

impl User {
    /// Creates a user, hashing `password`
    ///
    /// # Errors
    ///
    /// Returns `PartyError::Credential` if the password cannot be hashed
    pub fn new(
        user_id: impl Into<UserId>,
        name: impl Into<String>,
        password: &str,
        profile: RoleProfile,
    ) -> Result<Self, PartyError> {
        Ok(Self::with_credential(
            user_id,
            name,
            Credential::from_password(password)?,
            profile,
        ))
    }

    /// Creates a user around an existing credential
    pub fn with_credential(
        user_id: impl Into<UserId>,
        name: impl Into<String>,
        credential: Credential,
        profile: RoleProfile,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            name: name.into(),
            credential,
            profile,
        }
    }

    pub fn admin(
        user_id: impl Into<UserId>,
        name: impl Into<String>,
        password: &str,
    ) -> Result<Self, PartyError> {
        Self::new(user_id, name, password, RoleProfile::Admin)
    }

    pub fn customer(
        user_id: impl Into<UserId>,
        name: impl Into<String>,
        password: &str,
    ) -> Result<Self, PartyError> {
        Self::new(user_id, name, password, RoleProfile::Customer)
    }

    pub fn agent(
        user_id: impl Into<UserId>,
        name: impl Into<String>,
        password: &str,
        profile: AgentProfile,
    ) -> Result<Self, PartyError> {
        Self::new(user_id, name, password, RoleProfile::Agent(profile))
    }

    pub fn claim_adjuster(
        user_id: impl Into<UserId>,
        name: impl Into<String>,
        password: &str,
        profile: AgentProfile,
    ) -> Result<Self, PartyError> {
        Self::new(user_id, name, password, RoleProfile::ClaimAdjuster(profile))
    }

    pub fn underwriter(
        user_id: impl Into<UserId>,
        name: impl Into<String>,
        password: &str,
        profile: AgentProfile,
    ) -> Result<Self, PartyError> {
        Self::new(user_id, name, password, RoleProfile::Underwriter(profile))
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> Role {
        self.profile.role()
    }

    pub fn profile(&self) -> &RoleProfile {
        &self.profile
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Returns true iff `candidate` matches the stored credential
    pub fn verify_password(&self, candidate: &str) -> bool {
        self.credential.verify(candidate)
    }

    pub fn as_admin(&self) -> Option<Admin<'_>> {
        matches!(self.profile, RoleProfile::Admin).then(|| Admin::new(self))
    }

    pub fn as_customer(&self) -> Option<Customer<'_>> {
        matches!(self.profile, RoleProfile::Customer).then(|| Customer::new(self))
    }

    /// Agent capabilities, also available to ClaimAdjuster and Underwriter
    pub fn as_agent(&self) -> Option<Agent<'_>> {
        self.profile
            .agent_profile()
            .map(|profile| Agent::new(self, profile))
    }

    pub fn as_claim_adjuster(&self) -> Option<ClaimAdjuster<'_>> {
        match &self.profile {
            RoleProfile::ClaimAdjuster(profile) => Some(ClaimAdjuster::new(Agent::new(self, profile))),
            _ => None,
        }
    }

    pub fn as_underwriter(&self) -> Option<Underwriter<'_>> {
        match &self.profile {
            RoleProfile::Underwriter(profile) => Some(Underwriter::new(Agent::new(self, profile))),
            _ => None,
        }
    }
}
