//! Course booking database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for course_bookings table
///
/// A row is active while `cancelled_at` is NULL; cancelled rows are kept
/// for reporting and never deleted.
#[derive(Debug, Clone, FromRow)]
pub struct CourseBookingModel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub course_id: Uuid,
    pub booking_at: DateTime<Utc>,
    pub cancelled_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}
