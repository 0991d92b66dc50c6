//! Repositories for store operations
//!
//! The handlers only see the [`UserRepository`] and [`ExerciseRepository`]
//! traits. [`postgres`] backs them with PostgreSQL and [`memory`] keeps
//! everything in process.

use async_trait::async_trait;
use common::error::DatabaseResult;
use uuid::Uuid;

use crate::models::{
    User,
    exercise::{Exercise, LogFilter, NewExercise},
};

pub mod memory;
pub mod postgres;

/// User collection
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user; fails with `DatabaseError::Conflict` if the username is taken
    async fn create(&self, username: &str) -> DatabaseResult<User>;

    /// Get all users in creation order
    async fn get_all(&self) -> DatabaseResult<Vec<User>>;

    /// Find a user by ID
    async fn find_by_id(&self, id: Uuid) -> DatabaseResult<Option<User>>;
}

/// Exercise collection
#[async_trait]
pub trait ExerciseRepository: Send + Sync {
    /// Insert a new exercise
    async fn create(&self, exercise: &NewExercise) -> DatabaseResult<Exercise>;

    /// Exercises matching `filter`, ordered by date then insertion, capped by `filter.limit` when set
    async fn find_by_user(&self, filter: &LogFilter) -> DatabaseResult<Vec<Exercise>>;
}
