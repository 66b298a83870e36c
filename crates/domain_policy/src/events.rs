//! Domain events for policies
//!
//! Every change the registry makes to its policy collection is reported as a
//! `PolicyEvent`. A sale by an agent is reported separately from the
//! registry insert that follows it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{AgentId, Money, PolicyId};

/// Domain events emitted when policies change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PolicyEvent {
    /// Policy was inserted into the registry
    PolicyAdded {
        policy_id: PolicyId,
        timestamp: DateTime<Utc>,
    },

    /// An agent sold the policy
    PolicySold {
        policy_id: PolicyId,
        agent_id: AgentId,
        timestamp: DateTime<Utc>,
    },

    /// Every policy with this id was removed
    PolicyRemoved {
        policy_id: PolicyId,
        removed: usize,
        timestamp: DateTime<Utc>,
    },

    /// The premium of a policy was replaced
    PremiumChanged {
        policy_id: PolicyId,
        previous: Money,
        current: Money,
        timestamp: DateTime<Utc>,
    },
}

impl PolicyEvent {
    pub fn added(policy_id: PolicyId) -> Self {
        PolicyEvent::PolicyAdded {
            policy_id,
            timestamp: Utc::now(),
        }
    }

    pub fn sold(policy_id: PolicyId, agent_id: AgentId) -> Self {
        PolicyEvent::PolicySold {
            policy_id,
            agent_id,
            timestamp: Utc::now(),
        }
    }

    pub fn removed(policy_id: PolicyId, removed: usize) -> Self {
        PolicyEvent::PolicyRemoved {
            policy_id,
            removed,
            timestamp: Utc::now(),
        }
    }

    pub fn premium_changed(policy_id: PolicyId, previous: Money, current: Money) -> Self {
        PolicyEvent::PremiumChanged {
            policy_id,
            previous,
            current,
            timestamp: Utc::now(),
        }
    }

    /// Returns the policy this event refers to
    pub fn policy_id(&self) -> &PolicyId {
        match self {
            PolicyEvent::PolicyAdded { policy_id, .. }
            | PolicyEvent::PolicySold { policy_id, .. }
            | PolicyEvent::PolicyRemoved { policy_id, .. }
            | PolicyEvent::PremiumChanged { policy_id, .. } => policy_id,
        }
    }

    /// Returns a human-readable description of the event
    pub fn description(&self) -> String {
        match self {
            PolicyEvent::PolicyAdded { policy_id, .. } => format!("Policy {} added.", policy_id),
            PolicyEvent::PolicySold { policy_id, agent_id, .. } => {
                format!("Policy {} sold by agent {}.", policy_id, agent_id)
            }
            PolicyEvent::PolicyRemoved { policy_id, .. } => {
                format!("Policy with ID {} removed.", policy_id)
            }
            PolicyEvent::PremiumChanged { policy_id, current, .. } => {
                format!("Policy {} modified, premium is now {}.", policy_id, current)
            }
        }
    }
}
