//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use std::borrow::Borrow;
use std::fmt::Debug;

use rust_decimal::Decimal;

use core_kernel::{Listing, Money};
use domain_claims::{Claim, ClaimStatus};
use domain_policy::Policy;
use infra_memory::RegistryError;

/// Asserts that a listing is the Empty outcome
pub fn assert_listing_empty<T: Debug>(listing: &Listing<T>) {
    assert!(
        listing.is_empty(),
        "Expected Listing::Empty, got {} item(s): {:?}",
        listing.len(),
        listing
    );
}

/// Asserts that a policy listing holds exactly these ids, in order
pub fn assert_policy_ids<P: Borrow<Policy>>(listing: &Listing<P>, expected: &[&str]) {
    let actual: Vec<&str> = listing
        .items()
        .iter()
        .map(|p| p.borrow().policy_id().as_str())
        .collect();
    assert_eq!(actual, expected, "Policy ids differ");
}

/// Asserts a claim's id and status
pub fn assert_claim(claim: &Claim, claim_id: &str, status: &ClaimStatus) {
    assert_eq!(claim.claim_id().as_str(), claim_id, "Claim id mismatch");
    assert_eq!(
        claim.status(),
        status,
        "Claim {} has status {}, expected {}",
        claim_id,
        claim.status(),
        status
    );
}

/// Asserts that a Money value has exactly this amount
pub fn assert_money_amount(money: &Money, expected: Decimal) {
    assert_eq!(
        money.amount(),
        expected,
        "Expected amount {}, got {} {}",
        expected,
        money.currency().symbol(),
        money.amount()
    );
}

/// Asserts that a registry error belongs to the not-found family
pub fn assert_not_found(error: &RegistryError) {
    assert!(error.is_not_found(), "Expected a not-found error, got {:?}", error);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{PolicyFixtures, TransactionFixtures};

    #[test]
    fn test_assert_policy_ids_accepts_owned_and_borrowed() {
        let policy = PolicyFixtures::auto();
        let owned = Listing::from_vec(vec![policy.clone()]);
        let borrowed = Listing::from_vec(vec![&policy]);

        assert_policy_ids(&owned, &["P1"]);
        assert_policy_ids(&borrowed, &["P1"]);
    }

    #[test]
    fn test_assert_claim() {
        assert_claim(&TransactionFixtures::pending_claim(), "CL1", &ClaimStatus::Pending);
    }

    #[test]
    #[should_panic(expected = "Expected Listing::Empty")]
    fn test_assert_listing_empty_fails_on_items() {
        assert_listing_empty(&Listing::from_vec(vec![1]));
    }
}
