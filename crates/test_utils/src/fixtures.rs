//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for common entities across the insurance
//! ledger. The user and policy fixtures match the walkthrough used in the
//! end-to-end tests: admin `A1`, customer `C1`, policy `P1` owned by `C1`.

use chrono::NaiveDate;
use fake::faker::name::en::Name;
use fake::Fake;
use rust_decimal_macros::dec;

use core_kernel::{Currency, Money};
use domain_billing::{Payment, Transaction};
use domain_claims::{file_claim, Claim};
use domain_party::{AgentProfile, User};
use domain_policy::Policy;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// Premium of the standard auto policy
    pub fn usd_500() -> Money {
        Money::new(dec!(500.00), Currency::USD)
    }

    /// Amount of the standard claim
    pub fn usd_250() -> Money {
        Money::new(dec!(250.00), Currency::USD)
    }

    pub fn usd_zero() -> Money {
        Money::zero(Currency::USD)
    }

    /// Creates a EUR amount for currency tests
    pub fn eur_100() -> Money {
        Money::new(dec!(100.00), Currency::EUR)
    }
}

/// Passwords used by the user fixtures
pub struct PasswordFixtures;

impl PasswordFixtures {
    pub const ADMIN: &'static str = "pw";
    pub const CUSTOMER: &'static str = "pw2";
    pub const AGENT: &'static str = "agent-pw";
}

/// Fixture for users of every role
///
/// # Panics
///
/// Each constructor panics if password hashing fails, which only happens
/// when the system random source is unavailable.
pub struct UserFixtures;

impl UserFixtures {
    /// Admin `A1`, Alice
    pub fn admin() -> User {
        User::admin("A1", "Alice", PasswordFixtures::ADMIN).expect("admin fixture")
    }

    /// Customer `C1`, Carl
    pub fn customer() -> User {
        User::customer("C1", "Carl", PasswordFixtures::CUSTOMER).expect("customer fixture")
    }

    /// Agent `G1` with agent id `AG1` at 10% commission
    pub fn agent() -> User {
        User::agent("G1", "Gil", PasswordFixtures::AGENT, Self::agent_profile("AG1"))
            .expect("agent fixture")
    }

    /// ClaimAdjuster `J1` with agent id `AG2`
    pub fn claim_adjuster() -> User {
        User::claim_adjuster("J1", "Jo", PasswordFixtures::AGENT, Self::agent_profile("AG2"))
            .expect("claim adjuster fixture")
    }

    /// Underwriter `W1` with agent id `AG3`
    pub fn underwriter() -> User {
        User::underwriter("W1", "Wren", PasswordFixtures::AGENT, Self::agent_profile("AG3"))
            .expect("underwriter fixture")
    }

    pub fn agent_profile(agent_id: &str) -> AgentProfile {
        AgentProfile::new(agent_id, dec!(0.10)).expect("agent profile fixture")
    }

    /// A realistic random display name
    pub fn random_name() -> String {
        Name().fake()
    }
}

/// Fixture for policies
pub struct PolicyFixtures;

impl PolicyFixtures {
    /// `P1`, Auto, $500, owned by `C1`
    pub fn auto() -> Policy {
        Policy::new("P1", "Auto", MoneyFixtures::usd_500(), "C1")
    }

    /// `P2`, Home, $900, owned by `C2`
    pub fn home_other_owner() -> Policy {
        Policy::new("P2", "Home", Money::new(dec!(900), Currency::USD), "C2")
    }
}

/// Fixture for claims and payments
pub struct TransactionFixtures;

impl TransactionFixtures {
    /// Claim `CL1` on transaction `T1`, $250, filed by `C1`
    pub fn pending_claim() -> Claim {
        file_claim("T1", "CL1", MoneyFixtures::usd_250(), "C1").expect("claim fixture")
    }

    pub fn payment_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date")
    }

    /// Payment `T5` of $120 by `C1` on 2024-03-01
    pub fn payment() -> Payment {
        Payment::new(
            Transaction::new("T5", Money::new(dec!(120), Currency::USD), "C1"),
            Self::payment_date(),
        )
    }
}
