//! Role-based authorization

use serde::{Deserialize, Serialize};
use std::fmt;

use domain_party::Role;

/// An operation a session may be allowed to perform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    PolicyRead,
    PolicyWrite,
    PolicySell,
    OwnPolicyRead,
    ClaimRead,
    ClaimFile,
    ClaimInvestigate,
    ClaimUpdate,
    UserRead,
    PaymentRead,
    PaymentMake,
    ReportGenerate,
    CommissionRead,
    RiskSpecialize,
}

impl Permission {
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::PolicyRead => "policy:read",
            Permission::PolicyWrite => "policy:write",
            Permission::PolicySell => "policy:sell",
            Permission::OwnPolicyRead => "policy:read_own",
            Permission::ClaimRead => "claim:read",
            Permission::ClaimFile => "claim:file",
            Permission::ClaimInvestigate => "claim:investigate",
            Permission::ClaimUpdate => "claim:update",
            Permission::UserRead => "user:read",
            Permission::PaymentRead => "payment:read",
            Permission::PaymentMake => "payment:make",
            Permission::ReportGenerate => "report:generate",
            Permission::CommissionRead => "commission:read",
            Permission::RiskSpecialize => "risk:specialize",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const ADMIN: &[Permission] = &[
    Permission::PolicyRead,
    Permission::PolicyWrite,
    Permission::ClaimRead,
    Permission::UserRead,
    Permission::PaymentRead,
    Permission::ReportGenerate,
];

const CUSTOMER: &[Permission] = &[
    Permission::OwnPolicyRead,
    Permission::ClaimFile,
    Permission::PaymentMake,
];

const AGENT: &[Permission] = &[Permission::PolicySell, Permission::CommissionRead];

const CLAIM_ADJUSTER: &[Permission] = &[
    Permission::PolicySell,
    Permission::CommissionRead,
    Permission::ClaimInvestigate,
    Permission::ClaimUpdate,
];

const UNDERWRITER: &[Permission] = &[
    Permission::PolicySell,
    Permission::CommissionRead,
    Permission::RiskSpecialize,
    Permission::PolicyRead,
];

/// Permissions granted to a role
///
/// ClaimAdjuster and Underwriter carry every Agent permission plus their own.
pub fn permissions_for(role: Role) -> &'static [Permission] {
    match role {
        Role::Admin => ADMIN,
        Role::Customer => CUSTOMER,
        Role::Agent => AGENT,
        Role::ClaimAdjuster => CLAIM_ADJUSTER,
        Role::Underwriter => UNDERWRITER,
    }
}

/// Checks if a role grants a permission
pub fn has_permission(role: Role, permission: Permission) -> bool {
    permissions_for(role).contains(&permission)
}
