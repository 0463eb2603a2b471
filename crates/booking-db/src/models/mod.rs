//! Database models - SQLx-compatible structs for PostgreSQL tables

mod booking;
mod coach;
mod course;
mod credit_package;
mod credit_purchase;
mod skill;
mod user;

pub use booking::CourseBookingModel;
pub use coach::{CoachListItemModel, CoachModel};
pub use course::{CourseDetailModel, CourseListingModel, CourseModel, OwnedCourseModel};
pub use credit_package::CreditPackageModel;
pub use credit_purchase::{CreditPurchaseModel, PurchaseRecordModel};
pub use skill::SkillModel;
pub use user::UserModel;
