//! API models for request and response payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod exercise;

/// User record as held by the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

/// Request for user registration
#[derive(Debug, Default, Deserialize)]
pub struct CreateUserRequest {
    pub username: Option<String>,
}

/// Response for user operations
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub username: String,
    pub id: Uuid,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
            id: user.id,
        }
    }
}
