//! Models for the tables the board only reads

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub nickname: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Database model for categories table
#[derive(Debug, Clone, FromRow)]
pub struct CategoryModel {
    pub id: i64,
    pub name: String,
}

/// Database model for parts table
#[derive(Debug, Clone, FromRow)]
pub struct PartModel {
    pub id: i64,
    pub name: String,
}
