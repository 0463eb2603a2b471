//! Credit accounting - pure read-side computation
//!
//! Sums purchases and counts active bookings; never writes. The booking
//! ledger re-evaluates the same quantities inside its own transaction, so
//! numbers reported here are advisory snapshots for reporting endpoints.

use tracing::instrument;
use uuid::Uuid;

use crate::dto::PurchaseHistoryItem;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Snapshot of a user's credit standing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreditBalance {
    pub purchased: i64,
    pub used: i64,
}

impl CreditBalance {
    /// Credits still available for booking; non-positive means no capacity
    #[must_use]
    pub fn remaining(&self) -> i64 {
        self.purchased - self.used
    }
}

/// Credit accounting service
pub struct CreditService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CreditService<'a> {
    /// Create a new CreditService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Purchase history for the acting user, newest first
    #[instrument(skip(self))]
    pub async fn purchase_history(&self, user_id: Uuid) -> ServiceResult<Vec<PurchaseHistoryItem>> {
        let records = self.ctx.credit_purchase_repo().history(user_id).await?;
        Ok(records.into_iter().map(PurchaseHistoryItem::from).collect())
    }

    /// Current purchased/used totals for a user
    #[instrument(skip(self))]
    pub async fn balance(&self, user_id: Uuid) -> ServiceResult<CreditBalance> {
        let purchased = self.ctx.credit_purchase_repo().purchased_credits(user_id).await?;
        let used = self.ctx.booking_repo().active_count_for_user(user_id).await?;
        Ok(CreditBalance { purchased, used })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remaining_credits() {
        let balance = CreditBalance { purchased: 5, used: 3 };
        assert_eq!(balance.remaining(), 2);

        // Transiently negative outside a consistent snapshot still means
        // "no capacity" to callers
        let overdrawn = CreditBalance { purchased: 2, used: 3 };
        assert!(overdrawn.remaining() <= 0);
    }
}
