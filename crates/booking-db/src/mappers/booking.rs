//! Course booking entity <-> model mapper

use booking_core::entities::CourseBooking;

use crate::models::CourseBookingModel;

impl From<CourseBookingModel> for CourseBooking {
    fn from(model: CourseBookingModel) -> Self {
        CourseBooking {
            id: model.id,
            user_id: model.user_id,
            course_id: model.course_id,
            booking_at: model.booking_at,
            cancelled_at: model.cancelled_at,
            created_at: model.created_at,
        }
    }
}
