//! Course status - derived from the clock, never stored

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Lifecycle status of a course relative to its time window
///
/// Derived on demand from `start_at` / `end_at`; there is no status column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseStatus {
    /// Now is before `start_at`
    NotStarted,
    /// Within the `[start_at, end_at]` window, bookable
    Open,
    /// Now is after `end_at`; never bookable again
    Ended,
}

impl CourseStatus {
    /// Derive the status of a time window at instant `now`
    #[must_use]
    pub fn derive(start_at: DateTime<Utc>, end_at: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        if now < start_at {
            Self::NotStarted
        } else if now <= end_at {
            Self::Open
        } else {
            Self::Ended
        }
    }

    /// Derive the status at the current instant
    #[must_use]
    pub fn current(start_at: DateTime<Utc>, end_at: DateTime<Utc>) -> Self {
        Self::derive(start_at, end_at, Utc::now())
    }

    #[inline]
    #[must_use]
    pub fn is_ended(&self) -> bool {
        matches!(self, Self::Ended)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn window(start_offset: i64, end_offset: i64) -> (DateTime<Utc>, DateTime<Utc>, DateTime<Utc>) {
        let now = Utc::now();
        (
            now + Duration::hours(start_offset),
            now + Duration::hours(end_offset),
            now,
        )
    }

    #[test]
    fn test_not_started() {
        let (start, end, now) = window(1, 2);
        assert_eq!(CourseStatus::derive(start, end, now), CourseStatus::NotStarted);
    }

    #[test]
    fn test_open() {
        let (start, end, now) = window(-1, 1);
        assert_eq!(CourseStatus::derive(start, end, now), CourseStatus::Open);
    }

    #[test]
    fn test_ended() {
        let (start, end, now) = window(-2, -1);
        assert_eq!(CourseStatus::derive(start, end, now), CourseStatus::Ended);
        assert!(CourseStatus::derive(start, end, now).is_ended());
    }

    #[test]
    fn test_boundaries_inclusive() {
        let now = Utc::now();
        // exactly at start and exactly at end both count as open
        assert_eq!(CourseStatus::derive(now, now + Duration::hours(1), now), CourseStatus::Open);
        assert_eq!(CourseStatus::derive(now - Duration::hours(1), now, now), CourseStatus::Open);
    }
}
