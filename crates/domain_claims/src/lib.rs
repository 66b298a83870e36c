//! Claims Domain
//!
//! A claim wraps a billing [`Transaction`](domain_billing::Transaction) with a
//! claim id and a status. Claims are filed `Pending`, move to any other status
//! through `update_status`, and are never deleted.
//!
//! ```text
//! Pending -> Approved | Denied | <any other status>
//! ```

pub mod claim;
pub mod investigation;
pub mod error;

pub use claim::{Claim, ClaimStatus, StatusChange};
pub use investigation::ClaimInvestigation;
pub use error::ClaimError;

use core_kernel::{ClaimId, Money, TransactionId, UserId};
use domain_billing::Transaction;

/// Files a claim from boundary input
///
/// The one `amount` becomes the claim's transaction amount, which is also
/// what `claim_amount` reports.
///
/// # Errors
///
/// Returns error if either id is blank or the amount is negative
pub fn file_claim(
    transaction_id: impl Into<TransactionId>,
    claim_id: impl Into<ClaimId>,
    amount: Money,
    user_id: impl Into<UserId>,
) -> Result<Claim, ClaimError> {
    let claim_id = claim_id.into();
    if claim_id.as_str().trim().is_empty() {
        return Err(ClaimError::MissingClaimId);
    }
    let transaction = Transaction::validated(transaction_id, amount, user_id)
        .map_err(|e| ClaimError::InvalidClaim(e.to_string()))?;
    Ok(Claim::file(transaction, claim_id))
}
