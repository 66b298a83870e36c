//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use rust_decimal::Decimal;

use core_kernel::{Money, PolicyId, UserId};
use domain_billing::Payment;
use domain_claims::Claim;
use domain_party::{AgentProfile, Role, RoleProfile, User};
use domain_policy::Policy;
use infra_memory::{Registry, SharedRegistry};

use crate::fixtures::{MoneyFixtures, UserFixtures};

/// Builder for test policies
pub struct TestPolicyBuilder {
    policy_id: PolicyId,
    policy_type: String,
    premium: Money,
    owner: UserId,
}

impl Default for TestPolicyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestPolicyBuilder {
    /// Starts from `P1`, Auto, $500, owned by `C1`
    pub fn new() -> Self {
        Self {
            policy_id: PolicyId::from("P1"),
            policy_type: "Auto".to_string(),
            premium: MoneyFixtures::usd_500(),
            owner: UserId::from("C1"),
        }
    }

    pub fn with_policy_id(mut self, id: impl Into<PolicyId>) -> Self {
        self.policy_id = id.into();
        self
    }

    pub fn with_policy_type(mut self, policy_type: impl Into<String>) -> Self {
        self.policy_type = policy_type.into();
        self
    }

    pub fn with_premium(mut self, premium: Money) -> Self {
        self.premium = premium;
        self
    }

    pub fn with_owner(mut self, owner: impl Into<UserId>) -> Self {
        self.owner = owner.into();
        self
    }

    pub fn build(self) -> Policy {
        Policy::new(self.policy_id, self.policy_type, self.premium, self.owner)
    }
}

/// Builder for test users of any role
pub struct TestUserBuilder {
    user_id: UserId,
    name: String,
    password: String,
    role: Role,
    agent_id: String,
    commission: Decimal,
}

impl Default for TestUserBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestUserBuilder {
    /// Starts from a customer with a random name
    pub fn new() -> Self {
        Self {
            user_id: UserId::from("U1"),
            name: UserFixtures::random_name(),
            password: "secret".to_string(),
            role: Role::Customer,
            agent_id: "AG1".to_string(),
            commission: Decimal::new(5, 2),
        }
    }

    pub fn with_user_id(mut self, id: impl Into<UserId>) -> Self {
        self.user_id = id.into();
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    /// Agent details, used only by agent-family roles
    pub fn with_agent(mut self, agent_id: impl Into<String>, commission: Decimal) -> Self {
        self.agent_id = agent_id.into();
        self.commission = commission;
        self
    }

    /// Builds the user
    ///
    /// # Panics
    ///
    /// Panics on a negative commission or a hashing failure
    pub fn build(self) -> User {
        let agent = self
            .role
            .is_agent_family()
            .then(|| AgentProfile::new(self.agent_id.as_str(), self.commission).expect("valid commission"));
        let profile = RoleProfile::for_role(self.role, agent).expect("agent profile present");
        User::new(self.user_id, self.name, &self.password, profile).expect("hashable password")
    }
}

/// Builder for a registry seeded with test data
#[derive(Default)]
pub struct TestRegistryBuilder {
    users: Vec<User>,
    policies: Vec<Policy>,
    claims: Vec<Claim>,
    payments: Vec<Payment>,
}

impl TestRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Admin `A1` and customer `C1`, as in the walkthrough scenario
    pub fn scenario() -> Self {
        Self::new()
            .with_user(UserFixtures::admin())
            .with_user(UserFixtures::customer())
    }

    pub fn with_user(mut self, user: User) -> Self {
        self.users.push(user);
        self
    }

    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policies.push(policy);
        self
    }

    pub fn with_claim(mut self, claim: Claim) -> Self {
        self.claims.push(claim);
        self
    }

    pub fn with_payment(mut self, payment: Payment) -> Self {
        self.payments.push(payment);
        self
    }

    /// Builds the registry through its public operations
    ///
    /// # Panics
    ///
    /// Panics if a user, policy or transaction id was given twice
    pub fn build(self) -> Registry {
        let mut registry = Registry::new();
        for user in self.users {
            registry.register_user(user).expect("unique user id");
        }
        for policy in self.policies {
            registry.add_policy(policy).expect("unique policy id");
        }
        for claim in self.claims {
            registry.file_claim(claim).expect("unique transaction id");
        }
        for payment in self.payments {
            registry.process_payment(payment).expect("unique transaction id");
        }
        registry
    }

    pub fn build_shared(self) -> SharedRegistry {
        SharedRegistry::new(self.build())
    }
}
