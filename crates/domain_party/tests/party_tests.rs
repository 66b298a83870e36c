//! Tests for domain_party

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{Currency, Listing, Money, MoneyError, UserId};
use domain_billing::Transaction;
use domain_claims::Claim;
use domain_policy::{Policy, PolicyEvent};

use domain_party::{
    AgentProfile, PartyError, RegistrationForm, Role, RoleProfile, User,
};

fn usd(amount: rust_decimal::Decimal) -> Money {
    Money::new(amount, Currency::USD)
}

fn agent_profile() -> AgentProfile {
    AgentProfile::new("AG1", dec!(0.10)).unwrap()
}

// ============================================================================
// User Tests
// ============================================================================

mod user_tests {
    use super::*;

    #[test]
    fn test_user_accessors() {
        let user = User::admin("A1", "Alice", "pw").unwrap();

        assert_eq!(user.user_id(), "A1");
        assert_eq!(user.name(), "Alice");
        assert_eq!(user.role(), Role::Admin);
    }

    #[test]
    fn test_verify_password() {
        let user = User::customer("C1", "Carl", "pw2").unwrap();

        assert!(user.verify_password("pw2"));
        assert!(!user.verify_password("pw"));
        assert!(!user.verify_password("PW2"));
    }

    #[test]
    fn test_set_name_keeps_identity() {
        let mut user = User::customer("C1", "Carl", "pw2").unwrap();
        user.set_name("Carla");

        assert_eq!(user.name(), "Carla");
        assert_eq!(user.user_id(), "C1");
        assert_eq!(user.role(), Role::Customer);
        assert!(user.verify_password("pw2"));
    }

    #[test]
    fn test_role_follows_profile() {
        let adjuster = User::claim_adjuster("U1", "Ada", "pw", agent_profile()).unwrap();
        let underwriter = User::underwriter("U2", "Uma", "pw", agent_profile()).unwrap();

        assert_eq!(adjuster.role(), Role::ClaimAdjuster);
        assert_eq!(underwriter.role(), Role::Underwriter);
        assert_eq!(adjuster.profile().agent_profile(), Some(&agent_profile()));
    }
}

// ============================================================================
// Capability Tests
// ============================================================================

mod capability_tests {
    use super::*;

    #[test]
    fn test_capabilities_match_role() {
        let admin = User::admin("A1", "Alice", "pw").unwrap();
        let customer = User::customer("C1", "Carl", "pw").unwrap();
        let agent = User::agent("G1", "Gil", "pw", agent_profile()).unwrap();

        assert!(admin.as_admin().is_some());
        assert!(admin.as_customer().is_none());
        assert!(admin.as_agent().is_none());

        assert!(customer.as_customer().is_some());
        assert!(customer.as_admin().is_none());

        assert!(agent.as_agent().is_some());
        assert!(agent.as_claim_adjuster().is_none());
        assert!(agent.as_underwriter().is_none());
    }

    #[test]
    fn test_agent_specializations_inherit_agent() {
        let adjuster = User::claim_adjuster("U1", "Ada", "pw", agent_profile()).unwrap();
        let underwriter = User::underwriter("U2", "Uma", "pw", agent_profile()).unwrap();

        assert!(adjuster.as_agent().is_some());
        assert!(underwriter.as_agent().is_some());
        assert!(adjuster.as_underwriter().is_none());
        assert!(underwriter.as_claim_adjuster().is_none());
    }

    #[test]
    fn test_generate_report() {
        let admin = User::admin("A1", "Alice", "pw").unwrap();
        let report = admin.as_admin().unwrap().generate_report("Monthly");

        assert_eq!(report.requested_by, "A1");
        assert_eq!(report.to_string(), "Generating Monthly report.");
    }

    #[test]
    fn test_view_policy_details_filters_by_owner() {
        let customer = User::customer("C1", "Carl", "pw").unwrap();
        let policies = vec![
            Policy::new("P1", "Auto", usd(dec!(500)), "C1"),
            Policy::new("P2", "Home", usd(dec!(700)), "C2"),
            Policy::new("P3", "Life", usd(dec!(90)), "C1"),
        ];

        let owned = customer.as_customer().unwrap().view_policy_details(&policies);
        let ids: Vec<&str> = owned.items().iter().map(|p| p.policy_id().as_str()).collect();

        assert_eq!(ids, vec!["P1", "P3"]);
    }

    #[test]
    fn test_view_policy_details_empty() {
        let customer = User::customer("C9", "Cy", "pw").unwrap();
        let policies = vec![Policy::new("P1", "Auto", usd(dec!(500)), "C1")];

        let owned = customer.as_customer().unwrap().view_policy_details(&policies);
        assert_eq!(owned, Listing::Empty);
    }

    #[test]
    fn test_sell_policy_event() {
        let agent = User::agent("G1", "Gil", "pw", agent_profile()).unwrap();
        let policy = Policy::new("P1", "Auto", usd(dec!(500)), "C1");

        let event = agent.as_agent().unwrap().sell_policy(&policy);

        assert!(matches!(
            event,
            PolicyEvent::PolicySold { ref policy_id, ref agent_id, .. }
                if policy_id == "P1" && agent_id == "AG1"
        ));
    }

    #[test]
    fn test_commission_on_premium() {
        let profile = agent_profile();
        assert_eq!(profile.commission_on(usd(dec!(500))).unwrap().amount(), dec!(50));
    }

    #[test]
    fn test_commission_overflow_reported() {
        let profile = AgentProfile::new("AG1", Decimal::MAX).unwrap();
        assert!(matches!(
            profile.commission_on(usd(dec!(500))),
            Err(MoneyError::Overflow(_))
        ));
    }

    #[test]
    fn test_investigate_claim() {
        let adjuster = User::claim_adjuster("U1", "Ada", "pw", agent_profile()).unwrap();
        let claim = Claim::file(Transaction::new("T1", usd(dec!(250)), "C1"), "CL1");

        let investigation = adjuster.as_claim_adjuster().unwrap().investigate_claim(&claim);

        assert_eq!(investigation.claim_id, "CL1");
        assert_eq!(investigation.adjuster_id, "AG1");
    }

    #[test]
    fn test_specialize_in_risk() {
        let underwriter = User::underwriter("U2", "Uma", "pw", agent_profile()).unwrap();
        let specialization = underwriter.as_underwriter().unwrap().specialize_in_risk();

        assert_eq!(specialization.underwriter_id, "AG1");
        assert_eq!(specialization.to_string(), "Specializing in risk assessment.");
    }
}

// ============================================================================
// Profile Tests
// ============================================================================

mod profile_tests {
    use super::*;

    #[test]
    fn test_negative_commission_rejected() {
        let err = AgentProfile::new("AG1", dec!(-0.01)).unwrap_err();
        assert!(matches!(err, PartyError::InvalidCommission(_)));
    }

    #[test]
    fn test_zero_commission_allowed() {
        assert_eq!(AgentProfile::new("AG1", dec!(0)).unwrap().commission(), dec!(0));
    }

    #[test]
    fn test_agent_role_needs_profile() {
        let err = RoleProfile::for_role(Role::Underwriter, None).unwrap_err();
        assert_eq!(err, PartyError::MissingAgentProfile("Underwriter".to_string()));
    }

    #[test]
    fn test_customer_ignores_profile() {
        let profile = RoleProfile::for_role(Role::Customer, Some(agent_profile())).unwrap();
        assert_eq!(profile, RoleProfile::Customer);
        assert!(profile.agent_profile().is_none());
    }
}

// ============================================================================
// Registration Tests
// ============================================================================

mod registration_tests {
    use super::*;

    fn form(role: &str) -> RegistrationForm {
        RegistrationForm {
            user_id: "U1".to_string(),
            name: "Una".to_string(),
            role: role.to_string(),
            password: "pw".to_string(),
            agent_id: None,
            commission: None,
        }
    }

    #[test]
    fn test_into_user_customer() {
        let user = form("customer").into_user().unwrap();

        assert_eq!(user.role(), Role::Customer);
        assert_eq!(user.user_id(), &UserId::from("U1"));
        assert!(user.verify_password("pw"));
    }

    #[test]
    fn test_into_user_agent() {
        let user = RegistrationForm {
            agent_id: Some("AG9".to_string()),
            commission: Some("0.15".to_string()),
            ..form("Agent")
        }
        .into_user()
        .unwrap();

        let agent = user.as_agent().unwrap();
        assert_eq!(agent.agent_id(), "AG9");
        assert_eq!(agent.commission(), dec!(0.15));
    }

    #[test]
    fn test_into_user_claim_adjuster() {
        let user = RegistrationForm {
            agent_id: Some("AG2".to_string()),
            commission: Some("5".to_string()),
            ..form("Claim Adjuster")
        }
        .into_user()
        .unwrap();

        assert_eq!(user.role(), Role::ClaimAdjuster);
    }

    #[test]
    fn test_invalid_role_rejected() {
        let err = form("Broker").into_user().unwrap_err();
        match err {
            PartyError::ValidationFailed(msg) => assert!(msg.contains("Invalid role: Broker")),
            other => panic!("Expected ValidationFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_non_numeric_commission_rejected() {
        let err = RegistrationForm {
            agent_id: Some("AG9".to_string()),
            commission: Some("ten".to_string()),
            ..form("agent")
        }
        .into_user()
        .unwrap_err();

        match err {
            PartyError::ValidationFailed(msg) => assert!(msg.contains("'ten' is not a number")),
            other => panic!("Expected ValidationFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_commission_rejected() {
        let result = RegistrationForm {
            agent_id: Some("AG9".to_string()),
            commission: Some("-1".to_string()),
            ..form("agent")
        }
        .check();

        assert!(!result.is_valid);
    }

    #[test]
    fn test_agent_without_agent_id_rejected() {
        let result = RegistrationForm {
            commission: Some("1".to_string()),
            ..form("underwriter")
        }
        .check();

        assert_eq!(result.errors, vec!["agent ID is required".to_string()]);
    }
}

// ============================================================================
// Commission Property Tests
// ============================================================================

mod commission_property_tests {
    use super::*;

    proptest! {
        #[test]
        fn commission_sign_decides_acceptance(cents in -100_000i64..100_000) {
            let rate = Decimal::new(cents, 4);
            let result = AgentProfile::new("AG1", rate);

            prop_assert_eq!(result.is_ok(), cents >= 0);
        }

        #[test]
        fn commission_on_premium_scales_linearly(rate_bp in 0i64..10_000, premium_cents in 0i64..10_000_000) {
            let profile = AgentProfile::new("AG1", Decimal::new(rate_bp, 4)).unwrap();
            let premium = usd(Decimal::new(premium_cents, 2));

            let earned = profile.commission_on(premium).unwrap();

            let expected = (Decimal::new(premium_cents, 2) * Decimal::new(rate_bp, 4)).round_dp(4);
            prop_assert_eq!(earned.amount(), expected);
            prop_assert_eq!(earned.currency(), Currency::USD);
        }
    }
}
