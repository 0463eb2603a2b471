//! Course service - public catalogue and the booking ledger facade
//!
//! Booking and cancellation delegate to the atomic repository operation;
//! every invariant (existence, not ended, no duplicate, capacity, credits)
//! is evaluated inside that single transactional unit, so this service adds
//! no check-then-write steps of its own.

use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::CourseListItem;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Course service
pub struct CourseService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CourseService<'a> {
    /// Create a new CourseService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Public course catalogue with coach and skill names
    #[instrument(skip(self))]
    pub async fn list_courses(&self) -> ServiceResult<Vec<CourseListItem>> {
        let listings = self.ctx.course_repo().list_public().await?;
        Ok(listings.into_iter().map(CourseListItem::from).collect())
    }

    /// Book a course for the acting user
    #[instrument(skip(self))]
    pub async fn book_course(&self, user_id: Uuid, course_id: Uuid) -> ServiceResult<()> {
        self.ctx.booking_repo().book(user_id, course_id).await?;
        info!(user_id = %user_id, course_id = %course_id, "Course booked");
        Ok(())
    }

    /// Cancel the acting user's active booking for a course
    #[instrument(skip(self))]
    pub async fn cancel_booking(&self, user_id: Uuid, course_id: Uuid) -> ServiceResult<()> {
        self.ctx.booking_repo().cancel(user_id, course_id).await?;
        info!(user_id = %user_id, course_id = %course_id, "Booking cancelled");
        Ok(())
    }
}
