//! Terminal menus
//!
//! [`Console`] drives a [`Session`] from line-based input. It is generic over
//! its reader and writer so tests can script a whole interaction.
//!
//! Failed actions are reported and the menu is shown again. End of input
//! leaves every menu and ends the program cleanly.

use std::io::{BufRead, Write};
use std::str::FromStr;

use core_kernel::{ClaimId, Listing, Money, PolicyId};
use domain_claims::ClaimStatus;
use domain_party::{RegistrationForm, Role};
use domain_policy::{Policy, PolicyBuilder};
use infra_memory::RegistryError;

use crate::error::{CliError, SessionError};
use crate::session::Session;

const RULE: &str = "====================================";

/// What the caller should do once a menu returns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// One entry of a role dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    AddPolicy,
    RemovePolicy,
    ModifyPolicy,
    ListPolicies,
    ListClaims,
    ListUsers,
    ListPayments,
    GenerateReport,
    ViewOwnPolicies,
    FileClaim,
    PayPremium,
    SellPolicy,
    ViewCommission,
    InvestigateClaim,
    UpdateClaimStatus,
    SpecializeInRisk,
    LogOut,
}

impl Action {
    fn label(&self) -> &'static str {
        match self {
            Action::AddPolicy => "Add Policy",
            Action::RemovePolicy => "Remove Policy",
            Action::ModifyPolicy => "Modify Policy",
            Action::ListPolicies => "List Policies",
            Action::ListClaims => "List Claims",
            Action::ListUsers => "List Users",
            Action::ListPayments => "List Payments",
            Action::GenerateReport => "Generate Report",
            Action::ViewOwnPolicies => "View Policy Details",
            Action::FileClaim => "File Claim",
            Action::PayPremium => "Pay Premium",
            Action::SellPolicy => "Sell Policy",
            Action::ViewCommission => "View Commission",
            Action::InvestigateClaim => "Investigate Claim",
            Action::UpdateClaimStatus => "Update Claim Status",
            Action::SpecializeInRisk => "Specialize in Risk",
            Action::LogOut => "Log Out",
        }
    }
}

fn dashboard_for(role: Role) -> (&'static str, &'static [Action]) {
    match role {
        Role::Admin => (
            "Admin Dashboard",
            &[
                Action::AddPolicy,
                Action::RemovePolicy,
                Action::ModifyPolicy,
                Action::ListPolicies,
                Action::ListClaims,
                Action::ListUsers,
                Action::ListPayments,
                Action::GenerateReport,
                Action::LogOut,
            ],
        ),
        Role::Customer => (
            "Customer Dashboard",
            &[
                Action::ViewOwnPolicies,
                Action::FileClaim,
                Action::PayPremium,
                Action::LogOut,
            ],
        ),
        Role::Agent => (
            "Agent Dashboard",
            &[Action::SellPolicy, Action::ViewCommission, Action::LogOut],
        ),
        Role::ClaimAdjuster => (
            "Claim Adjuster Dashboard",
            &[
                Action::SellPolicy,
                Action::ViewCommission,
                Action::InvestigateClaim,
                Action::UpdateClaimStatus,
                Action::LogOut,
            ],
        ),
        Role::Underwriter => (
            "Underwriter Dashboard",
            &[
                Action::SellPolicy,
                Action::ViewCommission,
                Action::SpecializeInRisk,
                Action::ListPolicies,
                Action::LogOut,
            ],
        ),
    }
}

/// Line-oriented front end over a session
pub struct Console<R, W> {
    input: R,
    output: W,
    session: Session,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, session: Session) -> Self {
        Self {
            input,
            output,
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Consumes the console, returning its writer
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the main menu until the user exits or input ends
    ///
    /// # Errors
    ///
    /// Returns `CliError::Io` if the terminal cannot be read or written
    pub fn run(&mut self) -> Result<(), CliError> {
        loop {
            self.header("Welcome to the Insurance System")?;
            writeln!(self.output, "1. Register")?;
            writeln!(self.output, "2. Login")?;
            writeln!(self.output, "3. Exit")?;
            writeln!(self.output, "{}", RULE)?;

            let result = match self.prompt("Enter your choice: ") {
                Ok(choice) => match choice.as_str() {
                    "1" => self.register().map(|()| Flow::Continue),
                    "2" => self.login(),
                    "3" => Ok(Flow::Exit),
                    _ => self.invalid_choice().map(|()| Flow::Continue),
                },
                Err(e) => Err(e),
            };

            if self.recover(result)? == Flow::Exit {
                break;
            }
        }

        writeln!(self.output, "Thank you for using the Insurance System. Goodbye!")?;
        self.output.flush()?;
        Ok(())
    }

    fn register(&mut self) -> Result<(), CliError> {
        self.header("User Registration")?;
        let user_id = self.prompt("Enter user ID: ")?;
        let name = self.prompt("Enter name: ")?;
        let role = self.prompt("Enter role (Admin/Customer/Agent/ClaimAdjuster/Underwriter): ")?;
        let password = self.prompt("Enter password: ")?;

        let mut form = RegistrationForm {
            user_id,
            name,
            role,
            password,
            agent_id: None,
            commission: None,
        };
        if form.parsed_role().is_ok_and(|role| role.is_agent_family()) {
            form.agent_id = Some(self.prompt("Enter agent ID: ")?);
            form.commission = Some(self.prompt("Enter commission: ")?);
        }

        let record = self.session.register(form)?;
        writeln!(self.output, "User {} registered successfully.", record.name)?;
        Ok(())
    }

    fn login(&mut self) -> Result<Flow, CliError> {
        self.header("User Login")?;
        let user_id = self.prompt("Enter user ID: ")?;
        let password = self.prompt("Enter password: ")?;

        let (name, role) = match self.session.login(&user_id, &password) {
            Ok(user) => (user.name().to_string(), user.role()),
            Err(SessionError::Registry(RegistryError::AuthFailure)) => {
                writeln!(self.output, "Invalid user ID or password. Please try again.")?;
                return Ok(Flow::Continue);
            }
            Err(e) => return Err(e.into()),
        };

        writeln!(self.output, "Welcome {}! You are logged in as {}.", name, role)?;
        let flow = self.dashboard(role);
        if self.session.current_user().is_some() {
            self.session.logout()?;
        }
        flow
    }

    fn dashboard(&mut self, role: Role) -> Result<Flow, CliError> {
        let (title, actions) = dashboard_for(role);
        loop {
            self.header(title)?;
            for (index, action) in actions.iter().enumerate() {
                writeln!(self.output, "{}. {}", index + 1, action.label())?;
            }
            writeln!(self.output, "{}", RULE)?;

            let result = match self.prompt("Enter your choice: ") {
                Ok(choice) => match selected(&choice, actions) {
                    Some(Action::LogOut) => {
                        writeln!(self.output, "Logging out...")?;
                        return Ok(Flow::Continue);
                    }
                    Some(action) => self.perform(action).map(|()| Flow::Continue),
                    None => self.invalid_choice().map(|()| Flow::Continue),
                },
                Err(e) => Err(e),
            };

            if self.recover(result)? == Flow::Exit {
                return Ok(Flow::Exit);
            }
        }
    }

    fn perform(&mut self, action: Action) -> Result<(), CliError> {
        match action {
            Action::AddPolicy => {
                let policy = self.read_policy()?;
                let event = self.session.add_policy(policy)?;
                writeln!(self.output, "{}", event.description())?;
            }
            Action::RemovePolicy => {
                let policy_id = PolicyId::from(self.prompt("Enter policy ID to remove: ")?);
                let event = self.session.remove_policy(&policy_id)?;
                writeln!(self.output, "{}", event.description())?;
            }
            Action::ModifyPolicy => {
                let policy_id = PolicyId::from(self.prompt("Enter policy ID to modify: ")?);
                let premium = self.read_money("Enter new premium: ")?;
                let event = self.session.modify_policy(&policy_id, premium)?;
                writeln!(self.output, "{}", event.description())?;
            }
            Action::ListPolicies => {
                let policies = self.session.list_policies()?;
                self.print_listing(&policies, "No policies found.")?;
            }
            Action::ListClaims => {
                let claims = self.session.list_claims()?;
                self.print_listing(&claims, "No claims found.")?;
            }
            Action::ListUsers => match self.session.list_users()? {
                Listing::Empty => writeln!(self.output, "No users found.")?,
                Listing::Items(users) => {
                    for user in users {
                        writeln!(
                            self.output,
                            "ID: {}, Name: {}, Role: {}",
                            user.user_id, user.name, user.role
                        )?;
                    }
                }
            },
            Action::ListPayments => {
                let payments = self.session.list_payments()?;
                self.print_listing(&payments, "No payments found.")?;
            }
            Action::GenerateReport => {
                let report_type = self.prompt("Enter report type: ")?;
                let report = self.session.generate_report(&report_type)?;
                writeln!(self.output, "{}", report)?;
            }
            Action::ViewOwnPolicies => {
                let policies = self.session.view_own_policies()?;
                self.print_listing(&policies, "No policies found.")?;
            }
            Action::FileClaim => {
                let transaction_id = self.prompt("Enter transaction ID: ")?;
                let claim_id = self.prompt("Enter claim ID: ")?;
                let amount = self.read_money("Enter claim amount: ")?;
                let claim = self.session.file_claim(transaction_id, claim_id, amount)?;
                writeln!(self.output, "Claim {} filed successfully.", claim.claim_id())?;
            }
            Action::PayPremium => {
                let transaction_id = self.prompt("Enter transaction ID: ")?;
                let amount = self.read_money("Enter payment amount: ")?;
                let receipt = self.session.pay_premium(transaction_id, amount)?;
                writeln!(self.output, "{}", receipt)?;
            }
            Action::SellPolicy => {
                let policy = self.read_policy()?;
                let sale = self.session.sell_policy(policy)?;
                writeln!(self.output, "{}", sale.sold.description())?;
                writeln!(self.output, "{}", sale.added.description())?;
            }
            Action::ViewCommission => {
                let commission = self.session.commission()?;
                writeln!(self.output, "Commission: {}", commission)?;
            }
            Action::InvestigateClaim => {
                let claim_id = ClaimId::from(self.prompt("Enter claim ID: ")?);
                let investigation = self.session.investigate_claim(&claim_id)?;
                writeln!(self.output, "{}", investigation)?;
            }
            Action::UpdateClaimStatus => {
                let claim_id = ClaimId::from(self.prompt("Enter claim ID: ")?);
                let status = ClaimStatus::from_str(&self.prompt("Enter new status: ")?)
                    .map_err(SessionError::from)?;
                let change = self.session.update_claim_status(&claim_id, status)?;
                writeln!(self.output, "{}", change)?;
            }
            Action::SpecializeInRisk => {
                let specialization = self.session.specialize_in_risk()?;
                writeln!(self.output, "{}", specialization)?;
            }
            Action::LogOut => {}
        }
        Ok(())
    }

    fn read_policy(&mut self) -> Result<Policy, CliError> {
        let policy_id = self.prompt("Enter policy ID: ")?;
        let policy_type = self.prompt("Enter policy type: ")?;
        let premium = self.prompt("Enter premium: ")?;
        let owner = self.prompt("Enter owner ID: ")?;

        let policy = PolicyBuilder::new()
            .currency(self.session.currency())
            .policy_id(policy_id)
            .policy_type(policy_type)
            .premium_text(&premium)
            .and_then(|builder| builder.owner(owner).build())
            .map_err(SessionError::from)?;
        Ok(policy)
    }

    fn read_money(&mut self, label: &str) -> Result<Money, CliError> {
        let text = self.prompt(label)?;
        let money = Money::parse_non_negative(&text, self.session.currency())
            .map_err(SessionError::from)?;
        Ok(money)
    }

    fn print_listing<T: std::fmt::Display>(
        &mut self,
        listing: &Listing<T>,
        empty: &str,
    ) -> Result<(), CliError> {
        if listing.is_empty() {
            writeln!(self.output, "{}", empty)?;
        }
        for item in listing.items() {
            writeln!(self.output, "{}", item)?;
        }
        Ok(())
    }

    fn header(&mut self, title: &str) -> Result<(), CliError> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", RULE)?;
        writeln!(self.output, "{:^36}", title)?;
        writeln!(self.output, "{}", RULE)?;
        Ok(())
    }

    fn invalid_choice(&mut self) -> Result<(), CliError> {
        writeln!(self.output, "Invalid choice. Please enter a valid option.")?;
        Ok(())
    }

    /// Reads one line, without its line ending
    fn prompt(&mut self, label: &str) -> Result<String, CliError> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CliError::EndOfInput);
        }
        Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
    }

    /// Turns an action result into a menu decision
    ///
    /// End of input exits, terminal I/O failures propagate, and anything
    /// else is reported so the menu can be shown again.
    fn recover(&mut self, result: Result<Flow, CliError>) -> Result<Flow, CliError> {
        match result {
            Ok(flow) => Ok(flow),
            Err(CliError::EndOfInput) => Ok(Flow::Exit),
            Err(CliError::Io(e)) => Err(CliError::Io(e)),
            Err(e) => {
                tracing::debug!(error = %e, "Menu action failed");
                writeln!(self.output, "An error occurred: {}. Please try again.", e)?;
                Ok(Flow::Continue)
            }
        }
    }
}

fn selected(choice: &str, actions: &[Action]) -> Option<Action> {
    let index: usize = choice.trim().parse().ok()?;
    actions.get(index.checked_sub(1)?).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_dashboard_ends_with_log_out() {
        for role in Role::ALL {
            let (_, actions) = dashboard_for(role);
            assert_eq!(actions.last(), Some(&Action::LogOut), "{}", role);
        }
    }

    #[test]
    fn test_selected() {
        let (_, actions) = dashboard_for(Role::Agent);
        assert_eq!(selected("1", actions), Some(Action::SellPolicy));
        assert_eq!(selected(" 3 ", actions), Some(Action::LogOut));
        assert_eq!(selected("0", actions), None);
        assert_eq!(selected("4", actions), None);
        assert_eq!(selected("x", actions), None);
    }
}
