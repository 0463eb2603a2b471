//! Credit purchase database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for credit_purchases table (append-only)
#[derive(Debug, Clone, FromRow)]
pub struct CreditPurchaseModel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub credit_package_id: Uuid,
    pub purchased_credits: i32,
    pub price_paid: f64,
    pub purchase_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Purchase-history row joined with the package name
#[derive(Debug, Clone, FromRow)]
pub struct PurchaseRecordModel {
    pub purchased_credits: i32,
    pub price_paid: f64,
    pub name: String,
    pub purchase_at: DateTime<Utc>,
}
