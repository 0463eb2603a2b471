//! PostgreSQL implementation of SkillRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use booking_core::entities::Skill;
use booking_core::error::DomainError;
use booking_core::traits::{RepoResult, SkillRepository};

use crate::models::SkillModel;

use super::error::{map_db_error, map_unique_violation, skill_not_found};

/// PostgreSQL implementation of SkillRepository
#[derive(Clone)]
pub struct PgSkillRepository {
    pool: PgPool,
}

impl PgSkillRepository {
    /// Create a new PgSkillRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SkillRepository for PgSkillRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Skill>> {
        let rows = sqlx::query_as::<_, SkillModel>(
            r"
            SELECT id, name, created_at
            FROM skills
            ORDER BY created_at
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Skill::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Skill>> {
        let result = sqlx::query_as::<_, SkillModel>(
            r"
            SELECT id, name, created_at
            FROM skills
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Skill::from))
    }

    #[instrument(skip(self))]
    async fn name_exists(&self, name: &str) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM skills WHERE name = $1)
            ",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn create(&self, skill: &Skill) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO skills (id, name, created_at)
            VALUES ($1, $2, $3)
            ",
        )
        .bind(skill.id)
        .bind(&skill.name)
        .bind(skill.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::SkillAlreadyExists))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM skills WHERE id = $1
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(skill_not_found(id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgSkillRepository>();
    }
}
