//! User roles
//!
//! `Role` is the closed set of capability classes. `RoleProfile` carries the
//! role together with any role-specific state, so a user's role and the data
//! that goes with it cannot disagree.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::agent::AgentProfile;
use crate::error::PartyError;

/// The capability class of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Customer,
    Agent,
    ClaimAdjuster,
    Underwriter,
}

impl Role {
    /// All roles in menu order
    pub const ALL: [Role; 5] = [
        Role::Admin,
        Role::Customer,
        Role::Agent,
        Role::ClaimAdjuster,
        Role::Underwriter,
    ];

    /// Returns true for Agent and its specializations
    pub fn is_agent_family(&self) -> bool {
        matches!(self, Role::Agent | Role::ClaimAdjuster | Role::Underwriter)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Customer => "Customer",
            Role::Agent => "Agent",
            Role::ClaimAdjuster => "ClaimAdjuster",
            Role::Underwriter => "Underwriter",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = PartyError;

    /// Parses a role name, ignoring case, spaces, hyphens and underscores
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "admin" => Ok(Role::Admin),
            "customer" => Ok(Role::Customer),
            "agent" => Ok(Role::Agent),
            "claimadjuster" => Ok(Role::ClaimAdjuster),
            "underwriter" => Ok(Role::Underwriter),
            _ => Err(PartyError::InvalidRole(s.trim().to_string())),
        }
    }
}

/// A role together with its role-specific state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoleProfile {
    Admin,
    Customer,
    Agent(AgentProfile),
    ClaimAdjuster(AgentProfile),
    Underwriter(AgentProfile),
}

impl RoleProfile {
    /// Builds the profile for `role`
    ///
    /// # Errors
    ///
    /// Returns `PartyError::MissingAgentProfile` when an agent-family role
    /// has no profile. A profile passed for Admin or Customer is ignored.
    pub fn for_role(role: Role, agent: Option<AgentProfile>) -> Result<Self, PartyError> {
        match (role, agent) {
            (Role::Admin, _) => Ok(RoleProfile::Admin),
            (Role::Customer, _) => Ok(RoleProfile::Customer),
            (Role::Agent, Some(profile)) => Ok(RoleProfile::Agent(profile)),
            (Role::ClaimAdjuster, Some(profile)) => Ok(RoleProfile::ClaimAdjuster(profile)),
            (Role::Underwriter, Some(profile)) => Ok(RoleProfile::Underwriter(profile)),
            (role, None) => Err(PartyError::MissingAgentProfile(role.to_string())),
        }
    }

    pub fn role(&self) -> Role {
        match self {
            RoleProfile::Admin => Role::Admin,
            RoleProfile::Customer => Role::Customer,
            RoleProfile::Agent(_) => Role::Agent,
            RoleProfile::ClaimAdjuster(_) => Role::ClaimAdjuster,
            RoleProfile::Underwriter(_) => Role::Underwriter,
        }
    }

    /// Agent state for Agent, ClaimAdjuster and Underwriter
    pub fn agent_profile(&self) -> Option<&AgentProfile> {
        match self {
            RoleProfile::Agent(profile)
            | RoleProfile::ClaimAdjuster(profile)
            | RoleProfile::Underwriter(profile) => Some(profile),
            RoleProfile::Admin | RoleProfile::Customer => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse_variants() {
        assert_eq!("ADMIN".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("claim adjuster".parse::<Role>().unwrap(), Role::ClaimAdjuster);
        assert_eq!("Claim_Adjuster".parse::<Role>().unwrap(), Role::ClaimAdjuster);
        assert_eq!(" underwriter ".parse::<Role>().unwrap(), Role::Underwriter);
    }

    #[test]
    fn test_role_parse_rejects_unknown() {
        assert_eq!(
            "broker".parse::<Role>().unwrap_err(),
            PartyError::InvalidRole("broker".to_string())
        );
    }

    #[test]
    fn test_display_round_trips() {
        for role in Role::ALL {
            assert_eq!(role.to_string().parse::<Role>().unwrap(), role);
        }
    }
}
