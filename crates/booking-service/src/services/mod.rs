//! Service layer - business logic and use cases

mod admin;
mod auth;
mod coach;
mod context;
mod course;
mod credit;
mod credit_package;
mod error;
mod skill;

pub use admin::CoachAdminService;
pub use auth::AuthService;
pub use coach::CoachService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use course::CourseService;
pub use credit::{CreditBalance, CreditService};
pub use credit_package::CreditPackageService;
pub use error::{ServiceError, ServiceResult};
pub use skill::SkillService;
