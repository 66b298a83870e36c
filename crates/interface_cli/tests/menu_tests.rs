//! Tests for the terminal menus, driven by scripted input

use proptest::prelude::*;

use core_kernel::{Currency, PolicyId};
use infra_memory::SharedRegistry;

use interface_cli::{Console, Session};
use test_utils::{PolicyFixtures, TestRegistryBuilder, TransactionFixtures, UserFixtures};

/// Runs the console over `script` and returns everything it printed
fn run_script(registry: SharedRegistry, script: &str) -> String {
    let mut console = Console::new(script.as_bytes(), Vec::new(), Session::new(registry));
    console.run().unwrap();
    String::from_utf8(console.into_output()).unwrap()
}

fn lines(parts: &[&str]) -> String {
    parts.iter().map(|p| format!("{}\n", p)).collect()
}

// ============================================================================
// Main Menu Tests
// ============================================================================

mod main_menu_tests {
    use super::*;

    #[test]
    fn test_exit() {
        let output = run_script(SharedRegistry::default(), "3\n");
        assert!(output.contains("Welcome to the Insurance System"));
        assert!(output.ends_with("Thank you for using the Insurance System. Goodbye!\n"));
    }

    #[test]
    fn test_end_of_input_exits_cleanly() {
        let output = run_script(SharedRegistry::default(), "");
        assert!(output.contains("Goodbye!"));
    }

    #[test]
    fn test_invalid_choice_reprompts() {
        let output = run_script(SharedRegistry::default(), "9\nabc\n3\n");
        assert_eq!(output.matches("Invalid choice. Please enter a valid option.").count(), 2);
        assert_eq!(output.matches("Welcome to the Insurance System").count(), 3);
    }

    #[test]
    fn test_end_of_input_mid_registration() {
        let registry = SharedRegistry::default();
        let output = run_script(registry.clone(), "1\nU1\nUna\n");
        assert!(output.contains("Goodbye!"));
        assert!(registry.with_registry(|r| r.list_users().is_empty()));
    }

    proptest! {
        #[test]
        fn arbitrary_choices_never_abort(choices in proptest::collection::vec("[0-9a-z]{0,3}", 0..12)) {
            let script: String = choices
                .iter()
                .filter(|c| c.as_str() != "1" && c.as_str() != "2")
                .map(|c| format!("{}\n", c))
                .collect();

            let output = run_script(SharedRegistry::default(), &script);

            prop_assert!(output.ends_with("Goodbye!\n"));
        }
    }
}

// ============================================================================
// Registration And Login Tests
// ============================================================================

mod registration_tests {
    use super::*;

    #[test]
    fn test_register_then_login() {
        let registry = SharedRegistry::default();
        let script = lines(&["1", "C1", "Carl", "customer", "pw2", "2", "C1", "pw2", "4", "3"]);

        let output = run_script(registry.clone(), &script);

        assert!(output.contains("User Carl registered successfully."));
        assert!(output.contains("Welcome Carl! You are logged in as Customer."));
        assert!(output.contains("Customer Dashboard"));
        assert!(output.contains("Logging out..."));
    }

    #[test]
    fn test_register_agent_prompts_for_agent_details() {
        let registry = SharedRegistry::default();
        let script = lines(&["1", "G1", "Gil", "Agent", "pw", "AG1", "0.05", "3"]);

        let output = run_script(registry.clone(), &script);

        assert!(output.contains("Enter agent ID: "));
        assert!(output.contains("Enter commission: "));
        assert!(output.contains("User Gil registered successfully."));
    }

    #[test]
    fn test_invalid_role_reported() {
        let script = lines(&["1", "B1", "Bo", "Broker", "pw", "3"]);
        let output = run_script(SharedRegistry::default(), &script);
        assert!(output.contains("An error occurred: Validation failed: Invalid role: Broker"));
    }

    #[test]
    fn test_login_failures_print_the_same_line() {
        let wrong_password = run_script(
            TestRegistryBuilder::scenario().build_shared(),
            &lines(&["2", "C1", "nope", "3"]),
        );
        let unknown_id = run_script(
            TestRegistryBuilder::scenario().build_shared(),
            &lines(&["2", "ZZ", "pw2", "3"]),
        );

        assert_eq!(wrong_password, unknown_id);
        assert!(unknown_id.contains("Invalid user ID or password. Please try again."));
    }

    #[test]
    fn test_padded_id_registers_and_logs_in() {
        let script = lines(&["1", " C7 ", "Cleo", "customer", "pw7", "2", " C7 ", "pw7", "4", "3"]);
        let output = run_script(SharedRegistry::default(), &script);
        assert!(output.contains("Welcome Cleo! You are logged in as Customer."));
    }

    #[test]
    fn test_bad_login() {
        let registry = TestRegistryBuilder::scenario().build_shared();
        let output = run_script(registry, &lines(&["2", "C1", "nope", "3"]));
        assert!(output.contains("Invalid user ID or password. Please try again."));
        assert!(!output.contains("Customer Dashboard"));
    }
}

// ============================================================================
// Dashboard Tests
// ============================================================================

mod dashboard_tests {
    use super::*;

    #[test]
    fn test_admin_adds_lists_and_removes() {
        let registry = TestRegistryBuilder::scenario().build_shared();
        let script = lines(&[
            "2", "A1", "pw",
            "4",
            "1", "P1", "Auto", "500", "C1",
            "4",
            "2", "P9",
            "2", "P1",
            "9",
            "3",
        ]);

        let output = run_script(registry.clone(), &script);

        assert!(output.contains("No policies found."));
        assert!(output.contains("Policy P1 added."));
        assert!(output.contains("Policy ID: P1, Type: Auto, Premium: $ 500.00, Owner: C1"));
        assert!(output.contains("An error occurred: Policy with ID P9 not found. Please try again."));
        assert!(output.contains("Policy with ID P1 removed."));
        assert!(output.contains("Logging out..."));
        assert!(registry.with_registry(|r| r.list_policies().is_empty()));
    }

    #[test]
    fn test_admin_rejects_non_numeric_premium() {
        let registry = TestRegistryBuilder::scenario().build_shared();
        let script = lines(&["2", "A1", "pw", "1", "P1", "Auto", "lots", "C1", "9", "3"]);

        let output = run_script(registry.clone(), &script);

        assert!(output.contains("An error occurred: Invalid premium"));
        assert!(registry.with_registry(|r| r.find_policy(&PolicyId::from("P1")).is_none()));
    }

    #[test]
    fn test_customer_views_policies_and_files_claim() {
        let registry = TestRegistryBuilder::scenario()
            .with_policy(PolicyFixtures::auto())
            .build_shared();
        let script = lines(&["2", "C1", "pw2", "1", "2", "T1", "CL1", "250", "4", "3"]);

        let output = run_script(registry.clone(), &script);

        assert!(output.contains("Policy ID: P1, Type: Auto"));
        assert!(output.contains("Claim CL1 filed successfully."));
        let status = registry.with_registry(|r| r.list_claims().items()[0].status().to_string());
        assert_eq!(status, "Pending");
    }

    #[test]
    fn test_reused_transaction_id_reported() {
        let registry = TestRegistryBuilder::scenario()
            .with_payment(TransactionFixtures::payment())
            .build_shared();
        let script = lines(&["2", "C1", "pw2", "3", "T5", "7", "4", "3"]);

        let output = run_script(registry.clone(), &script);

        assert!(output.contains("An error occurred: Transaction 'T5' already exists. Please try again."));
        assert_eq!(registry.with_registry(|r| r.list_payments().len()), 1);
    }

    #[test]
    fn test_agent_sells_policy() {
        let registry = TestRegistryBuilder::scenario()
            .with_user(UserFixtures::agent())
            .build_shared();
        let script = lines(&["2", "G1", "agent-pw", "1", "P7", "Home", "900", "C1", "2", "3", "3"]);

        let output = run_script(registry.clone(), &script);

        assert!(output.contains("Policy P7 sold by agent AG1."));
        assert!(output.contains("Policy P7 added."));
        assert!(output.contains("Commission: 0.10"));
        assert_eq!(registry.with_registry(|r| r.list_policies().len()), 1);
    }

    #[test]
    fn test_adjuster_updates_claim_status() {
        let registry = TestRegistryBuilder::scenario()
            .with_user(UserFixtures::claim_adjuster())
            .with_claim(TransactionFixtures::pending_claim())
            .build_shared();
        let script = lines(&["2", "J1", "agent-pw", "3", "CL1", "4", "CL1", "Approved", "5", "3"]);

        let output = run_script(registry, &script);

        assert!(output.contains("Investigating claim ID CL1."));
        assert!(output.contains("Claim CL1 status updated to Approved."));
    }

    #[test]
    fn test_end_of_input_inside_dashboard() {
        let registry = TestRegistryBuilder::scenario().build_shared();
        let output = run_script(registry, &lines(&["2", "A1", "pw"]));
        assert!(output.contains("Admin Dashboard"));
        assert!(output.ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_amounts_use_session_currency() {
        let registry = TestRegistryBuilder::scenario().build_shared();
        let session = Session::new(registry.clone()).with_currency(Currency::EUR);
        let script = lines(&["2", "A1", "pw", "1", "P1", "Auto", "10", "C1", "9", "3"]);
        let mut console = Console::new(script.as_bytes(), Vec::new(), session);

        console.run().unwrap();

        let currency = registry.with_registry(|r| {
            r.find_policy(&PolicyId::from("P1")).map(|p| p.premium().currency())
        });
        assert_eq!(currency, Some(Currency::EUR));
    }
}
