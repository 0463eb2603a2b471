//! Credit purchase entity
//!
//! Append-only record of a user acquiring credits; never updated or deleted.
//! The credit amount and price are copied from the package at purchase time
//! so later package edits do not rewrite history.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// One acquisition of credits by a user
#[derive(Debug, Clone, PartialEq)]
pub struct CreditPurchase {
    pub id: Uuid,
    pub user_id: Uuid,
    pub credit_package_id: Uuid,
    pub purchased_credits: i32,
    pub price_paid: f64,
    pub purchase_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl CreditPurchase {
    #[must_use]
    pub fn new(
        id: Uuid,
        user_id: Uuid,
        credit_package_id: Uuid,
        purchased_credits: i32,
        price_paid: f64,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            user_id,
            credit_package_id,
            purchased_credits,
            price_paid,
            purchase_at: now,
            created_at: now,
        }
    }
}
