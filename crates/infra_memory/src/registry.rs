//! Registry of users, policies, claims and payments
//!
//! The registry owns four insertion-ordered collections. Queries hand out
//! shared references only; every mutation goes through a named operation.

use core_kernel::{ClaimId, Listing, Money, PolicyId, TransactionId, UserId};
use domain_billing::{Payment, PaymentReceipt};
use domain_claims::{Claim, ClaimStatus, StatusChange};
use domain_party::{Credential, User};
use domain_policy::{policies_owned_by, Policy, PolicyEvent};

use crate::error::RegistryError;
use crate::snapshot::RegistrySnapshot;

/// In-memory store and sole arbiter of registry state
#[derive(Debug, Default)]
pub struct Registry {
    users: Vec<User>,
    policies: Vec<Policy>,
    claims: Vec<Claim>,
    payments: Vec<Payment>,
}

impl Registry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Users
    // ------------------------------------------------------------------

    /// Registers a user
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateUser` if the id is already taken;
    /// the existing user is left untouched.
    pub fn register_user(&mut self, user: User) -> Result<&User, RegistryError> {
        if self.find_user(user.user_id()).is_some() {
            tracing::warn!(user_id = %user.user_id(), "Rejected duplicate user registration");
            return Err(RegistryError::DuplicateUser(user.user_id().clone()));
        }

        tracing::info!(
            user_id = %user.user_id(),
            name = %user.name(),
            role = %user.role(),
            "User registered"
        );
        self.users.push(user);
        Ok(&self.users[self.users.len() - 1])
    }

    /// Returns the user matching both id and password
    ///
    /// An unknown id is still checked against a decoy hash, so both kinds of
    /// failure cost one Argon2 verification.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::AuthFailure` for an unknown id and for a
    /// wrong password alike.
    pub fn login_user(&self, user_id: &str, password: &str) -> Result<&User, RegistryError> {
        let matched = match self.users.iter().find(|user| user.user_id() == user_id) {
            Some(user) => user.verify_password(password).then_some(user),
            None => {
                Credential::verify_decoy(password);
                None
            }
        };

        match matched {
            Some(user) => {
                tracing::info!(user_id = %user.user_id(), role = %user.role(), "User logged in");
                Ok(user)
            }
            None => {
                tracing::warn!("Login failed");
                Err(RegistryError::AuthFailure)
            }
        }
    }

    pub fn find_user(&self, user_id: &UserId) -> Option<&User> {
        self.users.iter().find(|user| user.user_id() == user_id)
    }

    /// Changes the display name of a user
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::UserNotFound` if no user has this id
    pub fn rename_user(&mut self, user_id: &UserId, name: &str) -> Result<(), RegistryError> {
        let user = self
            .users
            .iter_mut()
            .find(|user| user.user_id() == user_id)
            .ok_or_else(|| RegistryError::UserNotFound(user_id.clone()))?;
        user.set_name(name);
        tracing::info!(user_id = %user_id, name = %name, "User renamed");
        Ok(())
    }

    pub fn list_users(&self) -> Listing<&User> {
        self.users.iter().collect()
    }

    // ------------------------------------------------------------------
    // Policies
    // ------------------------------------------------------------------

    /// Adds a policy
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicatePolicy` if the id is already present
    pub fn add_policy(&mut self, policy: Policy) -> Result<PolicyEvent, RegistryError> {
        if self.find_policy(policy.policy_id()).is_some() {
            tracing::warn!(policy_id = %policy.policy_id(), "Rejected duplicate policy");
            return Err(RegistryError::DuplicatePolicy(policy.policy_id().clone()));
        }

        tracing::info!(
            policy_id = %policy.policy_id(),
            policy_type = %policy.policy_type(),
            premium = %policy.premium(),
            owner = %policy.owner(),
            "Policy added"
        );
        let event = PolicyEvent::added(policy.policy_id().clone());
        self.policies.push(policy);
        Ok(event)
    }

    /// Removes every policy with this id
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::PolicyNotFound` when nothing matched; the
    /// collection is unchanged in that case.
    pub fn remove_policy(&mut self, policy_id: &PolicyId) -> Result<PolicyEvent, RegistryError> {
        let before = self.policies.len();
        self.policies.retain(|policy| policy.policy_id() != policy_id);
        let removed = before - self.policies.len();

        if removed == 0 {
            tracing::warn!(policy_id = %policy_id, "Policy to remove not found");
            return Err(RegistryError::PolicyNotFound(policy_id.clone()));
        }

        tracing::info!(policy_id = %policy_id, removed, "Policy removed");
        Ok(PolicyEvent::removed(policy_id.clone(), removed))
    }

    /// Replaces the premium of the first policy with this id
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::PolicyNotFound` if no policy has this id
    pub fn modify_policy(
        &mut self,
        policy_id: &PolicyId,
        new_premium: Money,
    ) -> Result<PolicyEvent, RegistryError> {
        let Some(policy) = self
            .policies
            .iter_mut()
            .find(|policy| policy.policy_id() == policy_id)
        else {
            tracing::warn!(policy_id = %policy_id, "Policy to modify not found");
            return Err(RegistryError::PolicyNotFound(policy_id.clone()));
        };

        let previous = policy.premium();
        policy.set_premium(new_premium);
        tracing::info!(
            policy_id = %policy_id,
            previous = %previous,
            current = %new_premium,
            "Policy modified"
        );
        Ok(PolicyEvent::premium_changed(policy_id.clone(), previous, new_premium))
    }

    pub fn find_policy(&self, policy_id: &PolicyId) -> Option<&Policy> {
        self.policies.iter().find(|policy| policy.policy_id() == policy_id)
    }

    pub fn list_policies(&self) -> Listing<&Policy> {
        self.policies.iter().collect()
    }

    /// Policies whose owner is exactly `user_id`, in insertion order
    pub fn policies_owned_by(&self, user_id: &UserId) -> Listing<&Policy> {
        policies_owned_by(&self.policies, user_id)
    }

    // ------------------------------------------------------------------
    // Claims
    // ------------------------------------------------------------------

    /// True if a claim or payment already uses this transaction id
    pub fn has_transaction(&self, transaction_id: &TransactionId) -> bool {
        self.claims
            .iter()
            .any(|claim| claim.transaction_id() == transaction_id)
            || self.find_payment(transaction_id).is_some()
    }

    fn ensure_new_transaction(&self, transaction_id: &TransactionId) -> Result<(), RegistryError> {
        if self.has_transaction(transaction_id) {
            tracing::warn!(transaction_id = %transaction_id, "Rejected duplicate transaction");
            return Err(RegistryError::DuplicateTransaction(transaction_id.clone()));
        }
        Ok(())
    }

    /// Appends a claim
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateTransaction` if a claim or payment
    /// already uses the claim's transaction id
    pub fn file_claim(&mut self, claim: Claim) -> Result<&Claim, RegistryError> {
        self.ensure_new_transaction(claim.transaction_id())?;
        tracing::info!(
            claim_id = %claim.claim_id(),
            transaction_id = %claim.transaction_id(),
            user_id = %claim.user_id(),
            amount = %claim.claim_amount(),
            "Claim filed"
        );
        self.claims.push(claim);
        Ok(&self.claims[self.claims.len() - 1])
    }

    pub fn find_claim(&self, claim_id: &ClaimId) -> Option<&Claim> {
        self.claims.iter().find(|claim| claim.claim_id() == claim_id)
    }

    /// Sets the status of the first claim with this id
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::ClaimNotFound` if no claim has this id
    pub fn update_claim_status(
        &mut self,
        claim_id: &ClaimId,
        status: ClaimStatus,
    ) -> Result<StatusChange, RegistryError> {
        match self.claims.iter_mut().find(|claim| claim.claim_id() == claim_id) {
            Some(claim) => Ok(claim.update_status(status)),
            None => {
                tracing::warn!(claim_id = %claim_id, "Claim to update not found");
                Err(RegistryError::ClaimNotFound(claim_id.clone()))
            }
        }
    }

    pub fn list_claims(&self) -> Listing<&Claim> {
        self.claims.iter().collect()
    }

    // ------------------------------------------------------------------
    // Payments
    // ------------------------------------------------------------------

    /// Appends a payment and processes it
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateTransaction` if a claim or payment
    /// already uses the payment's transaction id
    pub fn process_payment(&mut self, payment: Payment) -> Result<PaymentReceipt, RegistryError> {
        self.ensure_new_transaction(payment.transaction_id())?;
        self.payments.push(payment);
        Ok(self.payments[self.payments.len() - 1].process_payment())
    }

    pub fn find_payment(&self, transaction_id: &TransactionId) -> Option<&Payment> {
        self.payments
            .iter()
            .find(|payment| payment.transaction_id() == transaction_id)
    }

    pub fn list_payments(&self) -> Listing<&Payment> {
        self.payments.iter().collect()
    }

    /// Copies the four collections into a serializable snapshot
    pub fn snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot::capture(&self.users, &self.policies, &self.claims, &self.payments)
    }
}
