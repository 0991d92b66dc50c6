//! In-process repositories
//!
//! Both collections live behind one lock so that the username uniqueness
//! check and the insert happen atomically.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use common::error::{DatabaseError, DatabaseResult};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{ExerciseRepository, UserRepository};
use crate::models::{
    User,
    exercise::{Exercise, LogFilter, NewExercise},
};

#[derive(Default)]
struct Collections {
    users: Vec<User>,
    exercises: Vec<Exercise>,
}

/// Memory store implementing both repositories
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Collections>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn create(&self, username: &str) -> DatabaseResult<User> {
        let mut collections = self.inner.write().await;

        if collections.users.iter().any(|u| u.username == username) {
            return Err(DatabaseError::Conflict("users_username_key".to_string()));
        }

        let user = User {
            id: Uuid::new_v4(),
            username: username.to_string(),
            created_at: Utc::now(),
        };
        collections.users.push(user.clone());

        Ok(user)
    }

    async fn get_all(&self) -> DatabaseResult<Vec<User>> {
        Ok(self.inner.read().await.users.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> DatabaseResult<Option<User>> {
        let collections = self.inner.read().await;
        Ok(collections.users.iter().find(|u| u.id == id).cloned())
    }
}

#[async_trait]
impl ExerciseRepository for MemoryStore {
    async fn create(&self, exercise: &NewExercise) -> DatabaseResult<Exercise> {
        let exercise = Exercise {
            id: Uuid::new_v4(),
            user_id: exercise.user_id,
            description: exercise.description.clone(),
            duration: exercise.duration,
            date: exercise.date,
            created_at: Utc::now(),
        };
        self.inner.write().await.exercises.push(exercise.clone());

        Ok(exercise)
    }

    async fn find_by_user(&self, filter: &LogFilter) -> DatabaseResult<Vec<Exercise>> {
        let collections = self.inner.read().await;

        let mut matching: Vec<Exercise> = collections
            .exercises
            .iter()
            .filter(|e| e.user_id == filter.user_id && filter.contains(e.date))
            .cloned()
            .collect();
        // Stable sort keeps insertion order for equal dates
        matching.sort_by_key(|e| e.date);
        if let Some(limit) = filter.limit {
            matching.truncate(limit);
        }

        Ok(matching)
    }
}
