//! PostgreSQL implementation of CreditPackageRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use booking_core::entities::CreditPackage;
use booking_core::error::DomainError;
use booking_core::traits::{CreditPackageRepository, CreditPriceStats, RepoResult};

use crate::models::CreditPackageModel;

use super::error::{map_db_error, map_unique_violation, package_not_found};

/// PostgreSQL implementation of CreditPackageRepository
#[derive(Clone)]
pub struct PgCreditPackageRepository {
    pool: PgPool,
}

impl PgCreditPackageRepository {
    /// Create a new PgCreditPackageRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CreditPackageRepository for PgCreditPackageRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<CreditPackage>> {
        let rows = sqlx::query_as::<_, CreditPackageModel>(
            r"
            SELECT id, name, credit_amount, price, created_at
            FROM credit_packages
            ORDER BY created_at
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(CreditPackage::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<CreditPackage>> {
        let result = sqlx::query_as::<_, CreditPackageModel>(
            r"
            SELECT id, name, credit_amount, price, created_at
            FROM credit_packages
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(CreditPackage::from))
    }

    #[instrument(skip(self))]
    async fn name_exists(&self, name: &str) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM credit_packages WHERE name = $1)
            ",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn create(&self, package: &CreditPackage) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO credit_packages (id, name, credit_amount, price, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(package.id)
        .bind(&package.name)
        .bind(package.credit_amount)
        .bind(package.price)
        .bind(package.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::PackageAlreadyExists))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM credit_packages WHERE id = $1
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(package_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn price_stats(&self) -> RepoResult<CreditPriceStats> {
        let row = sqlx::query_as::<_, (i64, f64)>(
            r"
            SELECT COALESCE(SUM(credit_amount), 0)::BIGINT,
                   COALESCE(SUM(price), 0)::DOUBLE PRECISION
            FROM credit_packages
            ",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(CreditPriceStats {
            total_credits: row.0,
            total_price: row.1,
        })
    }
}
