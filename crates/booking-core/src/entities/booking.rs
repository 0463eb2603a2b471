//! Course booking entity
//!
//! A booking links a user to a course. It is active while `cancelled_at` is
//! null; cancellation is terminal and never deletes the row (history is kept
//! for revenue and attendance reporting).

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Booking row linking a user to a course
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseBooking {
    pub id: Uuid,
    pub user_id: Uuid,
    pub course_id: Uuid,
    pub booking_at: DateTime<Utc>,
    pub cancelled_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl CourseBooking {
    /// A booking consumes a credit while active
    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.cancelled_at.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_until_cancelled() {
        let now = Utc::now();
        let mut booking = CourseBooking {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            course_id: Uuid::new_v4(),
            booking_at: now,
            cancelled_at: None,
            created_at: now,
        };
        assert!(booking.is_active());

        booking.cancelled_at = Some(now);
        assert!(!booking.is_active());
    }
}
