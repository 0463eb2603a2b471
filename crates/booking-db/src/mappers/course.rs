//! Course entity <-> model mappers

use booking_core::entities::Course;
use booking_core::traits::{CourseListing, OwnedCourse};

use crate::models::{CourseListingModel, CourseModel, OwnedCourseModel};

impl From<CourseModel> for Course {
    fn from(model: CourseModel) -> Self {
        Course {
            id: model.id,
            user_id: model.user_id,
            skill_id: model.skill_id,
            name: model.name,
            description: model.description,
            start_at: model.start_at,
            end_at: model.end_at,
            max_participants: model.max_participants,
            meeting_url: model.meeting_url,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<CourseListingModel> for CourseListing {
    fn from(model: CourseListingModel) -> Self {
        CourseListing {
            id: model.id,
            coach_name: model.coach_name,
            skill_name: model.skill_name,
            name: model.name,
            description: model.description,
            start_at: model.start_at,
            end_at: model.end_at,
            max_participants: model.max_participants,
        }
    }
}

impl From<OwnedCourseModel> for OwnedCourse {
    fn from(model: OwnedCourseModel) -> Self {
        OwnedCourse {
            id: model.id,
            name: model.name,
            start_at: model.start_at,
            end_at: model.end_at,
            max_participants: model.max_participants,
        }
    }
}
