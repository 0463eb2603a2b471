//! Axum extractors for request handling
//!
//! Custom extractors for authentication, role gating, validation, typed
//! paths, and pagination.

mod auth;
mod pagination;
mod path;
mod validated;

pub use auth::{AuthUser, CoachUser};
pub use pagination::PageQuery;
pub use path::{CoachIdPath, CourseIdPath, CreditPackageIdPath, SkillIdPath, UserIdPath};
pub use validated::ValidatedJson;
