//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in
//! booking-core. Each repository handles database operations for a specific
//! domain entity; `PgBookingRepository` additionally owns the transactional
//! booking ledger.

mod booking;
mod coach;
mod course;
mod credit_package;
mod credit_purchase;
mod error;
mod skill;
mod user;

pub use booking::PgBookingRepository;
pub use coach::PgCoachRepository;
pub use course::PgCourseRepository;
pub use credit_package::PgCreditPackageRepository;
pub use credit_purchase::PgCreditPurchaseRepository;
pub use skill::PgSkillRepository;
pub use user::PgUserRepository;
