//! # booking-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `booking-core`. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations, including the transactional booking ledger
//!
//! ## Usage
//!
//! ```rust,ignore
//! use booking_db::pool::{create_pool, DatabaseConfig};
//! use booking_db::repositories::PgBookingRepository;
//! use booking_core::traits::BookingRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     let bookings = PgBookingRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

/// Apply all pending schema migrations
///
/// # Errors
/// Returns an error if a migration fails to apply
pub async fn run_migrations(pool: &sqlx::PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, DatabaseConfig, PgPool};
pub use repositories::{
    PgBookingRepository, PgCoachRepository, PgCourseRepository, PgCreditPackageRepository,
    PgCreditPurchaseRepository, PgSkillRepository, PgUserRepository,
};
