//! Credit package entity - a purchasable bundle of booking credits

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Admin-managed bundle of credits at a price
#[derive(Debug, Clone, PartialEq)]
pub struct CreditPackage {
    pub id: Uuid,
    pub name: String,
    pub credit_amount: i32,
    pub price: f64,
    pub created_at: DateTime<Utc>,
}

impl CreditPackage {
    #[must_use]
    pub fn new(id: Uuid, name: String, credit_amount: i32, price: f64) -> Self {
        Self {
            id,
            name,
            credit_amount,
            price,
            created_at: Utc::now(),
        }
    }
}
