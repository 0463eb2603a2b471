//! Repository traits (ports)

mod repositories;

pub use repositories::{
    BookingRepository, CoachRepository, CourseListing, CourseRepository, CreditPackageRepository,
    CreditPriceStats, CreditPurchaseRepository, OwnedCourse, PurchaseRecord, RepoResult,
    SkillRepository, UserRepository,
};
