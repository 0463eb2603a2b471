//! PostgreSQL implementation of CoachRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use booking_core::entities::Coach;
use booking_core::error::DomainError;
use booking_core::traits::{CoachRepository, RepoResult};

use crate::models::{CoachListItemModel, CoachModel};

use super::error::map_db_error;

/// PostgreSQL implementation of CoachRepository
#[derive(Clone)]
pub struct PgCoachRepository {
    pool: PgPool,
}

impl PgCoachRepository {
    /// Create a new PgCoachRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CoachRepository for PgCoachRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Coach>> {
        let result = sqlx::query_as::<_, CoachModel>(
            r"
            SELECT id, user_id, experience_years, description, profile_image_url,
                   created_at, updated_at
            FROM coaches
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Coach::from))
    }

    #[instrument(skip(self))]
    async fn find_by_user_id(&self, user_id: Uuid) -> RepoResult<Option<Coach>> {
        let result = sqlx::query_as::<_, CoachModel>(
            r"
            SELECT id, user_id, experience_years, description, profile_image_url,
                   created_at, updated_at
            FROM coaches
            WHERE user_id = $1
            ",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Coach::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, offset: i64, limit: i64) -> RepoResult<Vec<(Uuid, String)>> {
        let rows = sqlx::query_as::<_, CoachListItemModel>(
            r"
            SELECT c.id, u.name
            FROM coaches c
            INNER JOIN users u ON u.id = c.user_id
            ORDER BY c.created_at DESC
            OFFSET $1 LIMIT $2
            ",
        )
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(|row| (row.id, row.name)).collect())
    }

    #[instrument(skip(self, coach))]
    async fn create(&self, coach: &Coach) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO coaches
                (id, user_id, experience_years, description, profile_image_url,
                 created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(coach.id)
        .bind(coach.user_id)
        .bind(coach.experience_years)
        .bind(&coach.description)
        .bind(coach.profile_image_url.as_deref())
        .bind(coach.created_at)
        .bind(coach.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, description))]
    async fn update_profile(
        &self,
        user_id: Uuid,
        experience_years: i32,
        description: &str,
        profile_image_url: Option<&str>,
    ) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE coaches
            SET experience_years = $2, description = $3, profile_image_url = $4,
                updated_at = NOW()
            WHERE user_id = $1
            ",
        )
        .bind(user_id)
        .bind(experience_years)
        .bind(description)
        .bind(profile_image_url)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::CoachNotFound);
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn replace_skills(&self, coach_id: Uuid, skill_ids: &[Uuid]) -> RepoResult<()> {
        // Replace wholesale inside one transaction so a half-written link
        // set is never observable.
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r"
            DELETE FROM coach_skills WHERE coach_id = $1
            ",
        )
        .bind(coach_id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        for skill_id in skill_ids {
            sqlx::query(
                r"
                INSERT INTO coach_skills (coach_id, skill_id)
                VALUES ($1, $2)
                ",
            )
            .bind(coach_id)
            .bind(skill_id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn skill_ids(&self, coach_id: Uuid) -> RepoResult<Vec<Uuid>> {
        let ids = sqlx::query_scalar::<_, Uuid>(
            r"
            SELECT skill_id FROM coach_skills WHERE coach_id = $1
            ",
        )
        .bind(coach_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgCoachRepository>();
    }
}
