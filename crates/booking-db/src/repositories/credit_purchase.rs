//! PostgreSQL implementation of CreditPurchaseRepository
//!
//! Purchases are append-only; there is no update or delete path.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use booking_core::entities::CreditPurchase;
use booking_core::traits::{CreditPurchaseRepository, PurchaseRecord, RepoResult};

use crate::models::PurchaseRecordModel;

use super::error::map_db_error;

/// PostgreSQL implementation of CreditPurchaseRepository
#[derive(Clone)]
pub struct PgCreditPurchaseRepository {
    pool: PgPool,
}

impl PgCreditPurchaseRepository {
    /// Create a new PgCreditPurchaseRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CreditPurchaseRepository for PgCreditPurchaseRepository {
    #[instrument(skip(self, purchase))]
    async fn create(&self, purchase: &CreditPurchase) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO credit_purchases
                (id, user_id, credit_package_id, purchased_credits, price_paid, purchase_at, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(purchase.id)
        .bind(purchase.user_id)
        .bind(purchase.credit_package_id)
        .bind(purchase.purchased_credits)
        .bind(purchase.price_paid)
        .bind(purchase.purchase_at)
        .bind(purchase.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn purchased_credits(&self, user_id: Uuid) -> RepoResult<i64> {
        let total = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COALESCE(SUM(purchased_credits), 0)::BIGINT
            FROM credit_purchases
            WHERE user_id = $1
            ",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(total)
    }

    #[instrument(skip(self))]
    async fn history(&self, user_id: Uuid) -> RepoResult<Vec<PurchaseRecord>> {
        let rows = sqlx::query_as::<_, PurchaseRecordModel>(
            r"
            SELECT cp.purchased_credits, cp.price_paid, pkg.name, cp.purchase_at
            FROM credit_purchases cp
            INNER JOIN credit_packages pkg ON pkg.id = cp.credit_package_id
            WHERE cp.user_id = $1
            ORDER BY cp.purchase_at DESC
            ",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(PurchaseRecord::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgCreditPurchaseRepository>();
    }
}
