//! PostgreSQL implementation of BookingRepository
//!
//! This is the booking ledger's storage port: the sole writer of
//! course_bookings rows. Booking creation runs as one transaction that takes
//! row locks on the course and the user before any count, so two requests
//! racing for the last seat or the last credit serialize instead of both
//! passing a stale check. Cancellation stays optimistic: a conditional
//! update whose affected-row count decides the outcome.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use booking_core::error::DomainError;
use booking_core::traits::{BookingRepository, RepoResult};
use booking_core::value_objects::CourseStatus;

use super::error::{course_not_found, map_db_error, user_not_found};

/// Time window columns needed for the ended-course check
#[derive(Debug, sqlx::FromRow)]
struct CourseWindowRow {
    start_at: chrono::DateTime<chrono::Utc>,
    end_at: chrono::DateTime<chrono::Utc>,
    max_participants: i32,
}

/// PostgreSQL implementation of BookingRepository
#[derive(Clone)]
pub struct PgBookingRepository {
    pool: PgPool,
}

impl PgBookingRepository {
    /// Create a new PgBookingRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for PgBookingRepository {
    #[instrument(skip(self))]
    async fn book(&self, user_id: Uuid, course_id: Uuid) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Lock the course row first; all capacity checks for this course
        // serialize behind this lock. Lock order is course then user
        // everywhere, so concurrent bookings cannot deadlock.
        let course = sqlx::query_as::<_, CourseWindowRow>(
            r"
            SELECT start_at, end_at, max_participants
            FROM courses
            WHERE id = $1
            FOR UPDATE
            ",
        )
        .bind(course_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        .ok_or_else(|| course_not_found(course_id))?;

        if CourseStatus::current(course.start_at, course.end_at).is_ended() {
            return Err(DomainError::CourseEnded);
        }

        // Lock the user row; credit checks for this user serialize here.
        sqlx::query_scalar::<_, Uuid>(
            r"
            SELECT id FROM users WHERE id = $1 FOR UPDATE
            ",
        )
        .bind(user_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        .ok_or_else(|| user_not_found(user_id))?;

        let already_booked = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(
                SELECT 1 FROM course_bookings
                WHERE user_id = $1 AND course_id = $2 AND cancelled_at IS NULL
            )
            ",
        )
        .bind(user_id)
        .bind(course_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if already_booked {
            return Err(DomainError::AlreadyBooked);
        }

        let seats_taken = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM course_bookings
            WHERE course_id = $1 AND cancelled_at IS NULL
            ",
        )
        .bind(course_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if seats_taken >= i64::from(course.max_participants) {
            return Err(DomainError::CourseFull);
        }

        let purchased = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COALESCE(SUM(purchased_credits), 0)::BIGINT
            FROM credit_purchases
            WHERE user_id = $1
            ",
        )
        .bind(user_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let active = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM course_bookings
            WHERE user_id = $1 AND cancelled_at IS NULL
            ",
        )
        .bind(user_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if active >= purchased {
            return Err(DomainError::InsufficientCredits);
        }

        sqlx::query(
            r"
            INSERT INTO course_bookings (id, user_id, course_id, booking_at, created_at)
            VALUES ($1, $2, $3, NOW(), NOW())
            ",
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(course_id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        // Any early return above drops the transaction and rolls back;
        // nothing is visible until this commit.
        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn cancel(&self, user_id: Uuid, course_id: Uuid) -> RepoResult<()> {
        let exists = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(
                SELECT 1 FROM course_bookings
                WHERE user_id = $1 AND course_id = $2 AND cancelled_at IS NULL
            )
            ",
        )
        .bind(user_id)
        .bind(course_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        if !exists {
            return Err(DomainError::BookingNotFound);
        }

        // Conditional write: a concurrent cancellation that slipped in
        // between the check and here leaves zero rows to update.
        let result = sqlx::query(
            r"
            UPDATE course_bookings
            SET cancelled_at = NOW()
            WHERE user_id = $1 AND course_id = $2 AND cancelled_at IS NULL
            ",
        )
        .bind(user_id)
        .bind(course_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::CancelFailed);
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn active_count_for_course(&self, course_id: Uuid) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM course_bookings
            WHERE course_id = $1 AND cancelled_at IS NULL
            ",
        )
        .bind(course_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn active_count_for_user(&self, user_id: Uuid) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM course_bookings
            WHERE user_id = $1 AND cancelled_at IS NULL
            ",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn active_count_for_courses(&self, course_ids: &[Uuid]) -> RepoResult<i64> {
        if course_ids.is_empty() {
            return Ok(0);
        }

        let count = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM course_bookings
            WHERE course_id = ANY($1) AND cancelled_at IS NULL
            ",
        )
        .bind(course_ids)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgBookingRepository>();
    }
}
