//! Login sessions and role-gated operations
//!
//! A session is either logged out or logged in as exactly one user. Every
//! operation other than registration and login first checks that the
//! session's role carries the matching [`Permission`]; the role-specific
//! work is then delegated to the user's capability handle and the registry.

use chrono::Utc;
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use core_kernel::{ClaimId, Currency, Listing, Money, PolicyId, TransactionId};
use domain_billing::{Payment, PaymentReceipt, Transaction};
use domain_claims::{file_claim, Claim, ClaimInvestigation, ClaimStatus, StatusChange};
use domain_party::{RegistrationForm, Report, RiskSpecialization, Role, User};
use domain_policy::{Policy, PolicyEvent};
use infra_memory::{RegistryError, SharedRegistry, UserRecord};

use crate::auth::{has_permission, Permission};
use crate::error::SessionError;

/// Login state of a session
#[derive(Debug, Clone, Default)]
pub enum SessionState {
    #[default]
    LoggedOut,
    /// Copy of the user taken at login
    LoggedIn(User),
}

/// Both effects of an agent selling a policy
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolicySale {
    pub sold: PolicyEvent,
    pub added: PolicyEvent,
}

/// A single user's interaction with a shared registry
#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    registry: SharedRegistry,
    state: SessionState,
    currency: Currency,
}

impl Session {
    pub fn new(registry: SharedRegistry) -> Self {
        Self {
            id: Uuid::now_v7(),
            registry,
            state: SessionState::LoggedOut,
            currency: Currency::USD,
        }
    }

    /// Sets the currency for amounts entered during this session
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn registry(&self) -> &SharedRegistry {
        &self.registry
    }

    pub fn current_user(&self) -> Option<&User> {
        match &self.state {
            SessionState::LoggedIn(user) => Some(user),
            SessionState::LoggedOut => None,
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.current_user().map(User::role)
    }

    /// Validates a registration form and registers the user it describes
    ///
    /// Registration is open to logged-out sessions.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Party` for invalid input and
    /// `SessionError::Registry` for a duplicate user id
    pub fn register(&self, form: RegistrationForm) -> Result<UserRecord, SessionError> {
        let user = form.into_user()?;
        let record = self
            .registry
            .with_registry(|registry| registry.register_user(user).map(UserRecord::from))?;
        Ok(record)
    }

    /// Logs in, replacing any previous login
    ///
    /// The typed id is trimmed the same way registration trims it.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::AuthFailure` for any unmatched id and password
    pub fn login(&mut self, user_id: &str, password: &str) -> Result<&User, SessionError> {
        let user_id = user_id.trim();
        let user = self
            .registry
            .with_registry(|registry| registry.login_user(user_id, password).cloned())?;

        tracing::info!(
            session_id = %self.id,
            user_id = %user.user_id(),
            role = %user.role(),
            "Session started"
        );
        self.state = SessionState::LoggedIn(user);
        self.current_user().ok_or(SessionError::NotLoggedIn)
    }

    /// Logs out, returning the user that was logged in
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotLoggedIn` if nobody was logged in
    pub fn logout(&mut self) -> Result<User, SessionError> {
        match std::mem::take(&mut self.state) {
            SessionState::LoggedIn(user) => {
                tracing::info!(session_id = %self.id, user_id = %user.user_id(), "Session ended");
                Ok(user)
            }
            SessionState::LoggedOut => Err(SessionError::NotLoggedIn),
        }
    }

    fn require(&self, permission: Permission) -> Result<&User, SessionError> {
        let SessionState::LoggedIn(user) = &self.state else {
            return Err(SessionError::NotLoggedIn);
        };
        if !has_permission(user.role(), permission) {
            tracing::warn!(
                session_id = %self.id,
                user_id = %user.user_id(),
                %permission,
                "Permission denied"
            );
            return Err(forbidden(user, permission));
        }
        Ok(user)
    }

    // ------------------------------------------------------------------
    // Admin
    // ------------------------------------------------------------------

    pub fn add_policy(&self, policy: Policy) -> Result<PolicyEvent, SessionError> {
        self.require(Permission::PolicyWrite)?;
        Ok(self.registry.with_registry(|registry| registry.add_policy(policy))?)
    }

    pub fn remove_policy(&self, policy_id: &PolicyId) -> Result<PolicyEvent, SessionError> {
        self.require(Permission::PolicyWrite)?;
        Ok(self.registry.with_registry(|registry| registry.remove_policy(policy_id))?)
    }

    pub fn modify_policy(
        &self,
        policy_id: &PolicyId,
        new_premium: Money,
    ) -> Result<PolicyEvent, SessionError> {
        self.require(Permission::PolicyWrite)?;
        Ok(self
            .registry
            .with_registry(|registry| registry.modify_policy(policy_id, new_premium))?)
    }

    /// Every policy, for admins and underwriters
    pub fn list_policies(&self) -> Result<Listing<Policy>, SessionError> {
        self.require(Permission::PolicyRead)?;
        Ok(self
            .registry
            .with_registry(|registry| registry.list_policies().map(Policy::clone)))
    }

    pub fn list_claims(&self) -> Result<Listing<Claim>, SessionError> {
        self.require(Permission::ClaimRead)?;
        Ok(self
            .registry
            .with_registry(|registry| registry.list_claims().map(Claim::clone)))
    }

    pub fn list_users(&self) -> Result<Listing<UserRecord>, SessionError> {
        self.require(Permission::UserRead)?;
        Ok(self
            .registry
            .with_registry(|registry| registry.list_users().map(UserRecord::from)))
    }

    pub fn list_payments(&self) -> Result<Listing<Payment>, SessionError> {
        self.require(Permission::PaymentRead)?;
        Ok(self
            .registry
            .with_registry(|registry| registry.list_payments().map(Payment::clone)))
    }

    pub fn generate_report(&self, report_type: &str) -> Result<Report, SessionError> {
        let user = self.require(Permission::ReportGenerate)?;
        let admin = user
            .as_admin()
            .ok_or_else(|| forbidden(user, Permission::ReportGenerate))?;
        Ok(admin.generate_report(report_type))
    }

    // ------------------------------------------------------------------
    // Customer
    // ------------------------------------------------------------------

    /// Policies owned by the logged-in customer, in registry order
    pub fn view_own_policies(&self) -> Result<Listing<Policy>, SessionError> {
        let user = self.require(Permission::OwnPolicyRead)?;
        let customer = user
            .as_customer()
            .ok_or_else(|| forbidden(user, Permission::OwnPolicyRead))?;
        Ok(self.registry.with_registry(|registry| {
            customer
                .view_policy_details(registry.list_policies().into_items())
                .map(Policy::clone)
        }))
    }

    /// Files a claim for the logged-in customer; it starts out Pending
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Claim` for a blank id or negative amount, and
    /// `SessionError::Registry` if the transaction id is already in use
    pub fn file_claim(
        &self,
        transaction_id: impl Into<TransactionId>,
        claim_id: impl Into<ClaimId>,
        amount: Money,
    ) -> Result<Claim, SessionError> {
        let user = self.require(Permission::ClaimFile)?;
        let claim = file_claim(transaction_id, claim_id, amount, user.user_id().clone())?;
        let filed = self
            .registry
            .with_registry(|registry| registry.file_claim(claim).cloned())?;
        Ok(filed)
    }

    /// Creates a payment dated today and processes it
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Registry` if the transaction id is already in use
    pub fn pay_premium(
        &self,
        transaction_id: impl Into<TransactionId>,
        amount: Money,
    ) -> Result<PaymentReceipt, SessionError> {
        let user = self.require(Permission::PaymentMake)?;
        let transaction = Transaction::validated(transaction_id, amount, user.user_id().clone())?;
        let payment = Payment::new(transaction, Utc::now().date_naive());
        let receipt = self
            .registry
            .with_registry(|registry| registry.process_payment(payment))?;
        Ok(receipt)
    }

    // ------------------------------------------------------------------
    // Agent, ClaimAdjuster, Underwriter
    // ------------------------------------------------------------------

    /// Adds `policy` to the registry and records the sale against this agent
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicatePolicy` if the id is taken; nothing
    /// is recorded as sold in that case.
    pub fn sell_policy(&self, policy: Policy) -> Result<PolicySale, SessionError> {
        let user = self.require(Permission::PolicySell)?;
        let agent = user
            .as_agent()
            .ok_or_else(|| forbidden(user, Permission::PolicySell))?;

        let added = self
            .registry
            .with_registry(|registry| registry.add_policy(policy.clone()))?;
        let sold = agent.sell_policy(&policy);
        Ok(PolicySale { sold, added })
    }

    pub fn commission(&self) -> Result<Decimal, SessionError> {
        let user = self.require(Permission::CommissionRead)?;
        let agent = user
            .as_agent()
            .ok_or_else(|| forbidden(user, Permission::CommissionRead))?;
        Ok(agent.commission())
    }

    pub fn investigate_claim(&self, claim_id: &ClaimId) -> Result<ClaimInvestigation, SessionError> {
        let user = self.require(Permission::ClaimInvestigate)?;
        let adjuster = user
            .as_claim_adjuster()
            .ok_or_else(|| forbidden(user, Permission::ClaimInvestigate))?;

        let investigation = self.registry.with_registry(|registry| {
            registry
                .find_claim(claim_id)
                .map(|claim| adjuster.investigate_claim(claim))
                .ok_or_else(|| RegistryError::ClaimNotFound(claim_id.clone()))
        })?;
        Ok(investigation)
    }

    pub fn update_claim_status(
        &self,
        claim_id: &ClaimId,
        status: ClaimStatus,
    ) -> Result<StatusChange, SessionError> {
        self.require(Permission::ClaimUpdate)?;
        Ok(self
            .registry
            .with_registry(|registry| registry.update_claim_status(claim_id, status))?)
    }

    pub fn specialize_in_risk(&self) -> Result<RiskSpecialization, SessionError> {
        let user = self.require(Permission::RiskSpecialize)?;
        let underwriter = user
            .as_underwriter()
            .ok_or_else(|| forbidden(user, Permission::RiskSpecialize))?;
        Ok(underwriter.specialize_in_risk())
    }
}

fn forbidden(user: &User, permission: Permission) -> SessionError {
    SessionError::Forbidden {
        role: user.role(),
        permission,
    }
}
