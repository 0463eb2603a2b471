//! Route definitions
//!
//! All API routes organized by domain and mounted under /api.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{admin, coaches, courses, credit_packages, health, skills, users};
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/healthcheck", get(health::health_check))
        .nest("/api", api_routes())
}

/// API routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(user_routes())
        .merge(course_routes())
        .merge(skill_routes())
        .merge(credit_package_routes())
        .merge(coach_routes())
        .merge(admin_routes())
}

/// User account routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/signup", post(users::signup))
        .route("/users/login", post(users::login))
        .route("/users/profile", get(users::get_profile))
        .route("/users/profile", put(users::update_profile))
        .route("/users/password", put(users::change_password))
        .route("/users/credit-package", get(users::purchased_packages))
}

/// Course routes (public catalogue + booking)
fn course_routes() -> Router<AppState> {
    Router::new()
        .route("/courses", get(courses::list_courses))
        .route("/courses/:course_id", post(courses::book_course))
        .route("/courses/:course_id", delete(courses::cancel_booking))
}

/// Skill routes
fn skill_routes() -> Router<AppState> {
    Router::new()
        .route("/coaches/skill", get(skills::list_skills))
        .route("/coaches/skill", post(skills::add_skill))
        .route("/coaches/skill/:skill_id", delete(skills::delete_skill))
}

/// Credit package routes
fn credit_package_routes() -> Router<AppState> {
    Router::new()
        .route("/credit-package", get(credit_packages::list_packages))
        .route("/credit-package", post(credit_packages::add_package))
        .route(
            "/credit-package/:credit_package_id",
            delete(credit_packages::delete_package),
        )
        .route(
            "/credit-package/:credit_package_id",
            post(credit_packages::purchase_package),
        )
}

/// Public coach catalogue routes
fn coach_routes() -> Router<AppState> {
    Router::new()
        .route("/coaches", get(coaches::list_coaches))
        .route("/coaches/:coach_id", get(coaches::coach_detail))
        .route("/coaches/:coach_id/courses", get(coaches::coach_courses))
}

/// Coach administration routes
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/coaches", get(admin::own_profile))
        .route("/admin/coaches", put(admin::update_profile))
        .route("/admin/coaches/revenue", get(admin::monthly_revenue))
        .route("/admin/coaches/courses", get(admin::owned_courses))
        .route("/admin/coaches/courses", post(admin::create_course))
        .route("/admin/coaches/courses/:course_id", get(admin::owned_course_detail))
        .route("/admin/coaches/courses/:course_id", put(admin::update_course))
        .route("/admin/coaches/:user_id", post(admin::promote_user))
}
