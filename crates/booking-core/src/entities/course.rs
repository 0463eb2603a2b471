//! Course entity - a bookable class published by a coach

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::CourseStatus;

/// Course owned by a coach's user account
///
/// `max_participants` bounds the number of simultaneously active bookings;
/// status is derived from the time window, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub id: Uuid,
    /// Owning coach's user id
    pub user_id: Uuid,
    pub skill_id: Uuid,
    pub name: String,
    pub description: String,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub max_participants: i32,
    pub meeting_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Course {
    /// Derive the status of this course at the current instant
    #[must_use]
    pub fn status(&self) -> CourseStatus {
        CourseStatus::current(self.start_at, self.end_at)
    }

    /// Derive the status at a given instant (deterministic for tests)
    #[must_use]
    pub fn status_at(&self, now: DateTime<Utc>) -> CourseStatus {
        CourseStatus::derive(self.start_at, self.end_at, now)
    }

    /// A course whose window has passed can never be booked
    #[must_use]
    pub fn has_ended(&self) -> bool {
        self.status().is_ended()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn course_with_window(start: DateTime<Utc>, end: DateTime<Utc>) -> Course {
        let now = Utc::now();
        Course {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            skill_id: Uuid::new_v4(),
            name: "Yoga basics".to_string(),
            description: "Intro class".to_string(),
            start_at: start,
            end_at: end,
            max_participants: 10,
            meeting_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_status_transitions() {
        let now = Utc::now();
        let upcoming = course_with_window(now + Duration::days(1), now + Duration::days(2));
        assert_eq!(upcoming.status_at(now), CourseStatus::NotStarted);

        let open = course_with_window(now - Duration::hours(1), now + Duration::hours(1));
        assert_eq!(open.status_at(now), CourseStatus::Open);

        let ended = course_with_window(now - Duration::days(2), now - Duration::days(1));
        assert_eq!(ended.status_at(now), CourseStatus::Ended);
        assert!(ended.has_ended());
    }
}
