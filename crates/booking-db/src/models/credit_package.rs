//! Credit package database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for credit_packages table
#[derive(Debug, Clone, FromRow)]
pub struct CreditPackageModel {
    pub id: Uuid,
    pub name: String,
    pub credit_amount: i32,
    pub price: f64,
    pub created_at: DateTime<Utc>,
}
