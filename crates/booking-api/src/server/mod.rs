//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{http::StatusCode, Json, Router};
use serde_json::json;
use tokio::net::TcpListener;
use tracing::info;

use booking_common::{AppConfig, AppError, JwtService};
use booking_db::{
    create_pool, PgBookingRepository, PgCoachRepository, PgCourseRepository,
    PgCreditPackageRepository, PgCreditPurchaseRepository, PgSkillRepository, PgUserRepository,
};
use booking_service::ServiceContextBuilder;

use crate::middleware::apply_middleware_with_config;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let rate_limit = state.config().rate_limit.clone();
    let cors = state.config().cors.clone();
    let is_production = state.config().app.env.is_production();

    let router = create_router().fallback(route_not_found);
    let router = apply_middleware_with_config(router, &rate_limit, &cors, is_production);
    router.with_state(state)
}

/// Fallback for unknown routes
async fn route_not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "status": "error",
            "message": "Route not found",
        })),
    )
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let db_config = booking_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    // Apply pending schema migrations
    booking_db::run_migrations(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("Schema migrations applied");

    // Create JWT service
    let jwt_service = Arc::new(JwtService::new(&config.jwt.secret, config.jwt.expire_days));

    // Create repositories
    let user_repo = Arc::new(PgUserRepository::new(pool.clone()));
    let coach_repo = Arc::new(PgCoachRepository::new(pool.clone()));
    let skill_repo = Arc::new(PgSkillRepository::new(pool.clone()));
    let course_repo = Arc::new(PgCourseRepository::new(pool.clone()));
    let booking_repo = Arc::new(PgBookingRepository::new(pool.clone()));
    let credit_package_repo = Arc::new(PgCreditPackageRepository::new(pool.clone()));
    let credit_purchase_repo = Arc::new(PgCreditPurchaseRepository::new(pool.clone()));

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .pool(pool)
        .user_repo(user_repo)
        .coach_repo(coach_repo)
        .skill_repo(skill_repo)
        .course_repo(course_repo)
        .booking_repo(booking_repo)
        .credit_package_repo(credit_package_repo)
        .credit_purchase_repo(credit_purchase_repo)
        .jwt_service(jwt_service)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.api.port));

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, addr).await
}
