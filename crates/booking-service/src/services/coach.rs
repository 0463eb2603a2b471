//! Coach service - public coach catalogue

use tracing::instrument;
use uuid::Uuid;

use crate::dto::{CoachDetailResponse, CoachListItem, CourseListItem};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Coach service
pub struct CoachService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CoachService<'a> {
    /// Create a new CoachService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Paged coach catalogue (1-based page)
    #[instrument(skip(self))]
    pub async fn list_coaches(&self, per: i64, page: i64) -> ServiceResult<Vec<CoachListItem>> {
        let offset = (page - 1) * per;
        let rows = self.ctx.coach_repo().list(offset, per).await?;

        Ok(rows
            .into_iter()
            .map(|(id, name)| CoachListItem { id, name })
            .collect())
    }

    /// Public coach detail with the owning user's name and role
    #[instrument(skip(self))]
    pub async fn coach_detail(&self, coach_id: Uuid) -> ServiceResult<CoachDetailResponse> {
        let coach = self
            .ctx
            .coach_repo()
            .find_by_id(coach_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Coach", coach_id.to_string()))?;

        let user = self
            .ctx
            .user_repo()
            .find_by_id(coach.user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", coach.user_id.to_string()))?;

        Ok(CoachDetailResponse::new(&user, &coach))
    }

    /// Public listing of one coach's courses
    #[instrument(skip(self))]
    pub async fn coach_courses(&self, coach_id: Uuid) -> ServiceResult<Vec<CourseListItem>> {
        let coach = self
            .ctx
            .coach_repo()
            .find_by_id(coach_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Coach", coach_id.to_string()))?;

        let listings = self.ctx.course_repo().list_by_coach_user(coach.user_id).await?;
        Ok(listings.into_iter().map(CourseListItem::from).collect())
    }
}
