//! Coach administration service
//!
//! Promotion of users to coaches, course authoring, and the coach's own
//! views (courses, profile, monthly revenue).

use chrono::{Datelike, TimeZone, Utc};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use booking_core::entities::{Coach, Course};
use booking_core::value_objects::{CourseStatus, UserRole};

use crate::dto::validation::parse_month;
use crate::dto::{
    CoachProfileResponse, CourseResponse, CreateCourseRequest, OwnedCourseDetail, OwnedCourseItem,
    PromoteCoachRequest, PromoteCoachResponse, RevenueResponse, RevenueTotals,
    UpdateCoachProfileRequest, UpdateCourseRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Coach administration service
pub struct CoachAdminService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CoachAdminService<'a> {
    /// Create a new CoachAdminService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Promote a user to coach
    ///
    /// Explicit check-and-transition: the current role is read and verified
    /// first, and the write itself is conditional on the role still being
    /// USER, so a concurrent promotion fails typed instead of double-writing.
    #[instrument(skip(self, request))]
    pub async fn promote_user(
        &self,
        user_id: Uuid,
        request: PromoteCoachRequest,
    ) -> ServiceResult<PromoteCoachResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        if user.role == UserRole::Coach {
            warn!(user_id = %user_id, "Promotion rejected: already a coach");
            return Err(ServiceError::conflict("User is already a coach"));
        }

        self.ctx.user_repo().promote_to_coach(user_id).await?;

        let coach = Coach::new(
            Uuid::new_v4(),
            user_id,
            request.experience_years,
            request.description,
            request.profile_image_url,
        );
        self.ctx.coach_repo().create(&coach).await?;

        info!(user_id = %user_id, coach_id = %coach.id, "User promoted to coach");

        let promoted = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        Ok(PromoteCoachResponse::new(&promoted, &coach))
    }

    /// Create a course owned by the acting coach
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create_course(
        &self,
        user_id: Uuid,
        request: CreateCourseRequest,
    ) -> ServiceResult<CourseResponse> {
        self.ensure_skill_exists(request.skill_id).await?;

        let now = Utc::now();
        let course = Course {
            id: Uuid::new_v4(),
            user_id,
            skill_id: request.skill_id,
            name: request.name,
            description: request.description,
            start_at: request.start_at,
            end_at: request.end_at,
            max_participants: request.max_participants,
            meeting_url: request.meeting_url,
            created_at: now,
            updated_at: now,
        };
        self.ctx.course_repo().create(&course).await?;

        info!(course_id = %course.id, user_id = %user_id, "Course created");

        Ok(CourseResponse::from(&course))
    }

    /// Update a course owned by the acting coach
    #[instrument(skip(self, request))]
    pub async fn update_course(
        &self,
        user_id: Uuid,
        course_id: Uuid,
        request: UpdateCourseRequest,
    ) -> ServiceResult<CourseResponse> {
        let existing = self
            .ctx
            .course_repo()
            .find_by_id(course_id)
            .await?
            .filter(|course| course.user_id == user_id)
            .ok_or_else(|| ServiceError::not_found("Course", course_id.to_string()))?;

        self.ensure_skill_exists(request.skill_id).await?;

        let course = Course {
            skill_id: request.skill_id,
            name: request.name,
            description: request.description,
            start_at: request.start_at,
            end_at: request.end_at,
            max_participants: request.max_participants,
            meeting_url: request.meeting_url,
            updated_at: Utc::now(),
            ..existing
        };
        self.ctx.course_repo().update(&course).await?;

        info!(course_id = %course_id, user_id = %user_id, "Course updated");

        Ok(CourseResponse::from(&course))
    }

    /// The acting coach's course list with live participant counts
    #[instrument(skip(self))]
    pub async fn owned_courses(&self, user_id: Uuid) -> ServiceResult<Vec<OwnedCourseItem>> {
        self.ensure_coach(user_id).await?;

        let courses = self.ctx.course_repo().list_owned(user_id).await?;

        let mut items = Vec::with_capacity(courses.len());
        for course in courses {
            let participants = self
                .ctx
                .booking_repo()
                .active_count_for_course(course.id)
                .await?;

            let status = CourseStatus::current(course.start_at, course.end_at);
            items.push(OwnedCourseItem {
                id: course.id,
                name: course.name,
                start_at: course.start_at,
                end_at: course.end_at,
                max_participants: course.max_participants,
                status,
                participants,
            });
        }

        Ok(items)
    }

    /// Detail of one course owned by the acting coach
    #[instrument(skip(self))]
    pub async fn owned_course_detail(
        &self,
        user_id: Uuid,
        course_id: Uuid,
    ) -> ServiceResult<OwnedCourseDetail> {
        self.ensure_coach(user_id).await?;

        let (course, skill_name) = self
            .ctx
            .course_repo()
            .find_owned_detail(user_id, course_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Course", course_id.to_string()))?;

        Ok(OwnedCourseDetail {
            id: course.id,
            name: course.name,
            description: course.description,
            start_at: course.start_at,
            end_at: course.end_at,
            max_participants: course.max_participants,
            skill_name,
        })
    }

    /// The acting coach's own profile with linked skill ids
    #[instrument(skip(self))]
    pub async fn own_profile(&self, user_id: Uuid) -> ServiceResult<CoachProfileResponse> {
        let coach = self.ensure_coach(user_id).await?;
        let skill_ids = self.ctx.coach_repo().skill_ids(coach.id).await?;

        Ok(CoachProfileResponse {
            id: coach.id,
            experience_years: coach.experience_years,
            description: coach.description,
            profile_image_url: coach.profile_image_url,
            skill_ids,
        })
    }

    /// Update the acting coach's profile, replacing linked skills wholesale
    ///
    /// Every skill id is verified before any write; the first unknown id
    /// aborts the whole request.
    #[instrument(skip(self, request))]
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        request: UpdateCoachProfileRequest,
    ) -> ServiceResult<CoachProfileResponse> {
        for skill_id in &request.skill_ids {
            self.ensure_skill_exists(*skill_id).await?;
        }

        let coach = self.ensure_coach(user_id).await?;

        self.ctx
            .coach_repo()
            .update_profile(
                user_id,
                request.experience_years,
                &request.description,
                Some(request.profile_image_url.as_str()),
            )
            .await?;

        self.ctx
            .coach_repo()
            .replace_skills(coach.id, &request.skill_ids)
            .await?;

        info!(user_id = %user_id, coach_id = %coach.id, "Coach profile updated");

        Ok(CoachProfileResponse {
            id: coach.id,
            experience_years: request.experience_years,
            description: request.description,
            profile_image_url: Some(request.profile_image_url),
            skill_ids: request.skill_ids,
        })
    }

    /// Monthly revenue report for the acting coach
    ///
    /// Counts active bookings on courses starting inside the named month of
    /// the current year; revenue is participants times the average credit
    /// price over all packages.
    #[instrument(skip(self))]
    pub async fn monthly_revenue(&self, user_id: Uuid, month: &str) -> ServiceResult<RevenueResponse> {
        let month_number = parse_month(month)
            .ok_or_else(|| ServiceError::validation("Unknown month name"))?;

        self.ensure_coach(user_id).await?;

        let year = Utc::now().year();
        let from = Utc
            .with_ymd_and_hms(year, month_number, 1, 0, 0, 0)
            .single()
            .ok_or_else(|| ServiceError::validation("Unknown month name"))?;
        let to = if month_number == 12 {
            Utc.with_ymd_and_hms(year + 1, 1, 1, 0, 0, 0)
        } else {
            Utc.with_ymd_and_hms(year, month_number + 1, 1, 0, 0, 0)
        }
        .single()
        .ok_or_else(|| ServiceError::internal("Month arithmetic failed"))?;

        let course_ids = self
            .ctx
            .course_repo()
            .ids_starting_between(user_id, from, to)
            .await?;

        if course_ids.is_empty() {
            return Ok(RevenueResponse::empty());
        }

        let participants = self
            .ctx
            .booking_repo()
            .active_count_for_courses(&course_ids)
            .await?;

        let stats = self.ctx.credit_package_repo().price_stats().await?;
        let revenue = stats.avg_price_per_credit() * participants as f64;

        Ok(RevenueResponse {
            total: RevenueTotals {
                participants,
                revenue: (revenue * 100.0).round() / 100.0,
                course_count: course_ids.len(),
            },
        })
    }

    /// Resolve the acting user's coach row or fail
    async fn ensure_coach(&self, user_id: Uuid) -> ServiceResult<Coach> {
        self.ctx
            .coach_repo()
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Coach", user_id.to_string()))
    }

    /// Verify that a skill id references an existing row
    async fn ensure_skill_exists(&self, skill_id: Uuid) -> ServiceResult<()> {
        self.ctx
            .skill_repo()
            .find_by_id(skill_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| ServiceError::not_found("Skill", skill_id.to_string()))
    }
}
