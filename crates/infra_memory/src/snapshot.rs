//! Serializable registry snapshots
//!
//! Nothing is persisted by the registry itself. A caller that wants to keep
//! state can serialize a snapshot; each collection is written on its own and
//! every record carries its id. Credentials are left out.

use serde::Serialize;

use core_kernel::UserId;
use domain_billing::Payment;
use domain_claims::Claim;
use domain_party::{AgentProfile, Role, User};
use domain_policy::Policy;

/// Public view of a user, without the credential
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRecord {
    pub user_id: UserId,
    pub name: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent: Option<AgentProfile>,
}

impl From<&User> for UserRecord {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.user_id().clone(),
            name: user.name().to_string(),
            role: user.role(),
            agent: user.profile().agent_profile().cloned(),
        }
    }
}

/// Point-in-time copy of the four registry collections
#[derive(Debug, Clone, Serialize)]
pub struct RegistrySnapshot {
    pub users: Vec<UserRecord>,
    pub policies: Vec<Policy>,
    pub claims: Vec<Claim>,
    pub payments: Vec<Payment>,
}

impl RegistrySnapshot {
    pub(crate) fn capture(
        users: &[User],
        policies: &[Policy],
        claims: &[Claim],
        payments: &[Payment],
    ) -> Self {
        Self {
            users: users.iter().map(UserRecord::from).collect(),
            policies: policies.to_vec(),
            claims: claims.to_vec(),
            payments: payments.to_vec(),
        }
    }
}
