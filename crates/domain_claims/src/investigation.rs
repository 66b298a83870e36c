//! Claim investigation records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{AgentId, ClaimId};

use crate::claim::{Claim, ClaimStatus};

/// Record that an adjuster looked into a claim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimInvestigation {
    pub claim_id: ClaimId,
    pub adjuster_id: AgentId,
    /// Status of the claim when the investigation started
    pub status: ClaimStatus,
    pub started_at: DateTime<Utc>,
}

impl ClaimInvestigation {
    /// Opens an investigation of `claim` by `adjuster_id`
    pub fn open(claim: &Claim, adjuster_id: AgentId) -> Self {
        let investigation = Self {
            claim_id: claim.claim_id().clone(),
            adjuster_id,
            status: claim.status().clone(),
            started_at: Utc::now(),
        };
        tracing::info!(
            claim_id = %investigation.claim_id,
            adjuster_id = %investigation.adjuster_id,
            "Investigating claim"
        );
        investigation
    }
}

impl fmt::Display for ClaimInvestigation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Investigating claim ID {}.", self.claim_id)
    }
}
