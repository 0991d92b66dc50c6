//! PostgreSQL backed repositories

use async_trait::async_trait;
use chrono::Utc;
use common::error::{DatabaseError, DatabaseResult};
use sqlx::{PgPool, Row, postgres::PgRow};
use tracing::info;
use uuid::Uuid;

use super::{ExerciseRepository, UserRepository};
use crate::models::{
    User,
    exercise::{Exercise, LogFilter, NewExercise},
};

/// User repository for database operations
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new user repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn user_from_row(row: &PgRow) -> User {
    User {
        id: row.get("id"),
        username: row.get("username"),
        created_at: row.get("created_at"),
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, username: &str) -> DatabaseResult<User> {
        info!("Creating new user: {}", username);

        let row = sqlx::query(
            r#"
            INSERT INTO users (id, username, created_at)
            VALUES ($1, $2, $3)
            RETURNING id, username, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(username)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(DatabaseError::from_query)?;

        Ok(user_from_row(&row))
    }

    async fn get_all(&self) -> DatabaseResult<Vec<User>> {
        let rows = sqlx::query(
            r#"
            SELECT id, username, created_at
            FROM users
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(DatabaseError::Query)?;

        Ok(rows.iter().map(user_from_row).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> DatabaseResult<Option<User>> {
        let row = sqlx::query(
            r#"
            SELECT id, username, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::Query)?;

        Ok(row.as_ref().map(user_from_row))
    }
}

/// Exercise repository for database operations
#[derive(Clone)]
pub struct PgExerciseRepository {
    pool: PgPool,
}

impl PgExerciseRepository {
    /// Create a new exercise repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn exercise_from_row(row: &PgRow) -> Exercise {
    Exercise {
        id: row.get("id"),
        user_id: row.get("user_id"),
        description: row.get("description"),
        duration: row.get("duration"),
        date: row.get("date"),
        created_at: row.get("created_at"),
    }
}

#[async_trait]
impl ExerciseRepository for PgExerciseRepository {
    async fn create(&self, exercise: &NewExercise) -> DatabaseResult<Exercise> {
        let row = sqlx::query(
            r#"
            INSERT INTO exercises (id, user_id, description, duration, date, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, user_id, description, duration, date, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(exercise.user_id)
        .bind(&exercise.description)
        .bind(exercise.duration)
        .bind(exercise.date)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(DatabaseError::from_query)?;

        Ok(exercise_from_row(&row))
    }

    async fn find_by_user(&self, filter: &LogFilter) -> DatabaseResult<Vec<Exercise>> {
        // LIMIT NULL is LIMIT ALL
        let limit: Option<i64> = filter
            .limit
            .map(|limit| i64::try_from(limit).unwrap_or(i64::MAX));

        let rows = sqlx::query(
            r#"
            SELECT id, user_id, description, duration, date, created_at
            FROM exercises
            WHERE user_id = $1
              AND ($2::date IS NULL OR date >= $2)
              AND ($3::date IS NULL OR date <= $3)
            ORDER BY date ASC, created_at ASC
            LIMIT $4
            "#,
        )
        .bind(filter.user_id)
        .bind(filter.from)
        .bind(filter.to)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(DatabaseError::Query)?;

        Ok(rows.iter().map(exercise_from_row).collect())
    }
}
