//! Registration validation
//!
//! Terminal input arrives as raw text. `RegistrationForm` checks it and turns
//! it into a [`User`]; nothing past this point re-validates roles or
//! commission values.
//!
//! # Validation Rules
//!
//! - User ID, name, role and password must be non-blank
//! - Role must name one of the five roles
//! - Agent, ClaimAdjuster and Underwriter also need an agent ID and a
//!   non-negative numeric commission

use std::str::FromStr;

use rust_decimal::Decimal;
use validator::{Validate, ValidationError};

use crate::agent::AgentProfile;
use crate::error::PartyError;
use crate::role::{Role, RoleProfile};
use crate::user::User;

/// Result of form validation
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether the form is valid
    pub is_valid: bool,
    /// List of validation errors
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Creates a successful validation result
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    /// Adds an error to the result
    pub fn add_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
        self.is_valid = false;
    }

    /// Converts the result into an error if it has failed
    pub fn into_result(self) -> Result<(), PartyError> {
        if self.is_valid {
            Ok(())
        } else {
            Err(PartyError::validation_failed(self.errors))
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::ok()
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Raw registration input
#[derive(Debug, Clone, Default, Validate)]
pub struct RegistrationForm {
    #[validate(custom(function = "not_blank", message = "user ID is required"))]
    pub user_id: String,
    #[validate(custom(function = "not_blank", message = "name is required"))]
    pub name: String,
    #[validate(custom(function = "not_blank", message = "role is required"))]
    pub role: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
    pub agent_id: Option<String>,
    pub commission: Option<String>,
}

impl RegistrationForm {
    /// Parses the role field
    ///
    /// # Errors
    ///
    /// Returns `PartyError::InvalidRole` for unknown role text
    pub fn parsed_role(&self) -> Result<Role, PartyError> {
        Role::from_str(&self.role)
    }

    /// Checks every field and collects all problems at once
    pub fn check(&self) -> ValidationResult {
        let mut result = ValidationResult::ok();

        if let Err(errors) = self.validate() {
            let mut messages: Vec<String> = errors
                .field_errors()
                .into_iter()
                .flat_map(|(field, errs)| {
                    errs.iter()
                        .map(move |e| {
                            e.message
                                .as_ref()
                                .map(|m| m.to_string())
                                .unwrap_or_else(|| format!("{} is invalid", field))
                        })
                        .collect::<Vec<_>>()
                })
                .collect();
            messages.sort();
            for message in messages {
                result.add_error(message);
            }
        }

        match self.parsed_role() {
            Ok(role) if role.is_agent_family() => {
                let agent_id = self.agent_id.as_deref().map(str::trim).unwrap_or("");
                if agent_id.is_empty() {
                    result.add_error("agent ID is required");
                }
                if let Err(e) = self.parsed_commission() {
                    result.add_error(e.to_string());
                }
            }
            Ok(_) => {}
            Err(e) if !self.role.trim().is_empty() => result.add_error(e.to_string()),
            Err(_) => {}
        }

        result
    }

    fn parsed_commission(&self) -> Result<Decimal, PartyError> {
        let text = self
            .commission
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| PartyError::InvalidCommission("commission is required".to_string()))?;
        let commission = Decimal::from_str(text)
            .map_err(|_| PartyError::InvalidCommission(format!("'{}' is not a number", text)))?;
        if commission.is_sign_negative() && !commission.is_zero() {
            return Err(PartyError::InvalidCommission(format!(
                "{} must not be negative",
                text
            )));
        }
        Ok(commission)
    }

    /// Validates the form and builds the user it describes
    ///
    /// # Errors
    ///
    /// Returns `PartyError::ValidationFailed` listing every problem, or
    /// `PartyError::Credential` if the password cannot be hashed
    pub fn into_user(self) -> Result<User, PartyError> {
        self.check().into_result()?;

        let role = self.parsed_role()?;
        let agent = if role.is_agent_family() {
            let agent_id = self.agent_id.as_deref().unwrap_or_default().trim();
            Some(AgentProfile::new(agent_id, self.parsed_commission()?)?)
        } else {
            None
        };
        let profile = RoleProfile::for_role(role, agent)?;

        User::new(
            self.user_id.trim(),
            self.name.trim(),
            &self.password,
            profile,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer_form() -> RegistrationForm {
        RegistrationForm {
            user_id: "C1".to_string(),
            name: "Carl".to_string(),
            role: "Customer".to_string(),
            password: "pw2".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_customer() {
        assert!(customer_form().check().is_valid);
    }

    #[test]
    fn test_blank_fields_are_all_reported() {
        let form = RegistrationForm {
            role: "Customer".to_string(),
            ..Default::default()
        };
        let result = form.check();
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 3);
    }

    #[test]
    fn test_agent_requires_commission() {
        let form = RegistrationForm {
            role: "agent".to_string(),
            agent_id: Some("AG1".to_string()),
            ..customer_form()
        };
        let result = form.check();
        assert!(result.errors.iter().any(|e| e.contains("commission is required")));
    }
}
