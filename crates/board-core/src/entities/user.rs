//! User entity - the account that writes posts
//!
//! Users are owned by the account subsystem; the board only reads them.

use chrono::{DateTime, Utc};

use crate::value_objects::UserId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub nickname: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with required fields
    pub fn new(id: UserId, nickname: String, email: String) -> Self {
        Self {
            id,
            nickname,
            email,
            created_at: Utc::now(),
        }
    }
}
