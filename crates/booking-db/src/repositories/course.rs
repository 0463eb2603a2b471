//! PostgreSQL implementation of CourseRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use booking_core::entities::Course;
use booking_core::traits::{CourseListing, CourseRepository, OwnedCourse, RepoResult};

use crate::models::{CourseDetailModel, CourseListingModel, CourseModel, OwnedCourseModel};

use super::error::{course_not_found, map_db_error};

/// PostgreSQL implementation of CourseRepository
#[derive(Clone)]
pub struct PgCourseRepository {
    pool: PgPool,
}

impl PgCourseRepository {
    /// Create a new PgCourseRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CourseRepository for PgCourseRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Course>> {
        let result = sqlx::query_as::<_, CourseModel>(
            r"
            SELECT id, user_id, skill_id, name, description, start_at, end_at,
                   max_participants, meeting_url, created_at, updated_at
            FROM courses
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Course::from))
    }

    #[instrument(skip(self))]
    async fn list_public(&self) -> RepoResult<Vec<CourseListing>> {
        let rows = sqlx::query_as::<_, CourseListingModel>(
            r"
            SELECT c.id, u.name AS coach_name, s.name AS skill_name,
                   c.name, c.description, c.start_at, c.end_at, c.max_participants
            FROM courses c
            INNER JOIN users u ON u.id = c.user_id
            INNER JOIN skills s ON s.id = c.skill_id
            ORDER BY c.start_at
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(CourseListing::from).collect())
    }

    #[instrument(skip(self))]
    async fn list_by_coach_user(&self, user_id: Uuid) -> RepoResult<Vec<CourseListing>> {
        let rows = sqlx::query_as::<_, CourseListingModel>(
            r"
            SELECT c.id, u.name AS coach_name, s.name AS skill_name,
                   c.name, c.description, c.start_at, c.end_at, c.max_participants
            FROM courses c
            INNER JOIN users u ON u.id = c.user_id
            INNER JOIN skills s ON s.id = c.skill_id
            WHERE c.user_id = $1
            ORDER BY c.start_at
            ",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(CourseListing::from).collect())
    }

    #[instrument(skip(self, course))]
    async fn create(&self, course: &Course) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO courses
                (id, user_id, skill_id, name, description, start_at, end_at,
                 max_participants, meeting_url, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ",
        )
        .bind(course.id)
        .bind(course.user_id)
        .bind(course.skill_id)
        .bind(&course.name)
        .bind(&course.description)
        .bind(course.start_at)
        .bind(course.end_at)
        .bind(course.max_participants)
        .bind(course.meeting_url.as_deref())
        .bind(course.created_at)
        .bind(course.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, course))]
    async fn update(&self, course: &Course) -> RepoResult<()> {
        // Ownership rides in the WHERE clause; a course belonging to another
        // coach matches zero rows.
        let result = sqlx::query(
            r"
            UPDATE courses
            SET skill_id = $3, name = $4, description = $5, start_at = $6,
                end_at = $7, max_participants = $8, meeting_url = $9, updated_at = NOW()
            WHERE id = $1 AND user_id = $2
            ",
        )
        .bind(course.id)
        .bind(course.user_id)
        .bind(course.skill_id)
        .bind(&course.name)
        .bind(&course.description)
        .bind(course.start_at)
        .bind(course.end_at)
        .bind(course.max_participants)
        .bind(course.meeting_url.as_deref())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(course_not_found(course.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_owned(&self, user_id: Uuid) -> RepoResult<Vec<OwnedCourse>> {
        let rows = sqlx::query_as::<_, OwnedCourseModel>(
            r"
            SELECT id, name, start_at, end_at, max_participants
            FROM courses
            WHERE user_id = $1
            ORDER BY start_at
            ",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(OwnedCourse::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_owned_detail(
        &self,
        user_id: Uuid,
        course_id: Uuid,
    ) -> RepoResult<Option<(Course, String)>> {
        let row = sqlx::query_as::<_, CourseDetailModel>(
            r"
            SELECT c.id, c.user_id, c.skill_id, c.name, c.description, c.start_at,
                   c.end_at, c.max_participants, c.meeting_url, c.created_at,
                   c.updated_at, s.name AS skill_name
            FROM courses c
            INNER JOIN skills s ON s.id = c.skill_id
            WHERE c.user_id = $1 AND c.id = $2
            ",
        )
        .bind(user_id)
        .bind(course_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(row.map(|detail| {
            let skill_name = detail.skill_name.clone();
            let course = Course {
                id: detail.id,
                user_id: detail.user_id,
                skill_id: detail.skill_id,
                name: detail.name,
                description: detail.description,
                start_at: detail.start_at,
                end_at: detail.end_at,
                max_participants: detail.max_participants,
                meeting_url: detail.meeting_url,
                created_at: detail.created_at,
                updated_at: detail.updated_at,
            };
            (course, skill_name)
        }))
    }

    #[instrument(skip(self))]
    async fn ids_starting_between(
        &self,
        user_id: Uuid,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> RepoResult<Vec<Uuid>> {
        let ids = sqlx::query_scalar::<_, Uuid>(
            r"
            SELECT id FROM courses
            WHERE user_id = $1 AND start_at >= $2 AND start_at < $3
            ",
        )
        .bind(user_id)
        .bind(from)
        .bind(to)
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
        assert_send_sync::<PgCourseRepository>();
    }
}
