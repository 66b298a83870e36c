//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use proptest::collection::vec;
use proptest::prelude::*;
use rust_decimal::Decimal;

use core_kernel::{Currency, Money};
use domain_claims::ClaimStatus;
use domain_party::Role;
use domain_policy::Policy;

/// Strategy for caller-style ids such as `P7` or `C12`
pub fn id_strategy(prefix: &'static str) -> impl Strategy<Value = String> {
    (0u32..10_000).prop_map(move |n| format!("{}{}", prefix, n))
}

/// Strategy for non-negative USD amounts with two decimal places
pub fn premium_strategy() -> impl Strategy<Value = Money> {
    (0i64..10_000_000).prop_map(|cents| Money::new(Decimal::new(cents, 2), Currency::USD))
}

/// Strategy for free-text policy types
pub fn policy_type_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Auto".to_string()),
        Just("Home".to_string()),
        Just("Life".to_string()),
        "[A-Z][a-z]{2,10}",
    ]
}

pub fn role_strategy() -> impl Strategy<Value = Role> {
    proptest::sample::select(Role::ALL.to_vec())
}

/// Strategy for claim statuses, including free-text ones
pub fn claim_status_strategy() -> impl Strategy<Value = ClaimStatus> {
    prop_oneof![
        Just(ClaimStatus::Pending),
        Just(ClaimStatus::Approved),
        Just(ClaimStatus::Denied),
        "[A-Z][a-z]{3,12}( [a-z]{2,8})?".prop_map(ClaimStatus::from),
    ]
}

/// Strategy for policies owned by one of `owners`
pub fn policy_strategy(owners: Vec<String>) -> impl Strategy<Value = Policy> {
    (
        id_strategy("P"),
        policy_type_strategy(),
        premium_strategy(),
        proptest::sample::select(owners),
    )
        .prop_map(|(id, policy_type, premium, owner)| Policy::new(id, policy_type, premium, owner))
}

/// Strategy for up to `max` policies with distinct ids
pub fn policy_set_strategy(owners: Vec<String>, max: usize) -> impl Strategy<Value = Vec<Policy>> {
    vec(policy_strategy(owners), 0..=max).prop_map(|policies| {
        let mut seen = std::collections::HashSet::new();
        policies
            .into_iter()
            .filter(|policy| seen.insert(policy.policy_id().clone()))
            .collect()
    })
}
