//! Application state shared across handlers

use std::sync::Arc;

use common::{
    database::{self, DatabaseConfig},
    error::DatabaseResult,
};
use sqlx::PgPool;
use tracing::info;

use crate::{
    config::StoreBackend,
    repositories::{
        ExerciseRepository, UserRepository,
        memory::MemoryStore,
        postgres::{PgExerciseRepository, PgUserRepository},
    },
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub backend: StoreBackend,
    /// Present only for the Postgres backend
    pub db_pool: Option<PgPool>,
    pub user_repository: Arc<dyn UserRepository>,
    pub exercise_repository: Arc<dyn ExerciseRepository>,
}

impl AppState {
    /// State backed by PostgreSQL
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            backend: StoreBackend::Postgres,
            user_repository: Arc::new(PgUserRepository::new(pool.clone())),
            exercise_repository: Arc::new(PgExerciseRepository::new(pool.clone())),
            db_pool: Some(pool),
        }
    }

    /// State backed by a fresh in-process store
    pub fn memory() -> Self {
        let store = MemoryStore::new();
        Self {
            backend: StoreBackend::Memory,
            db_pool: None,
            user_repository: Arc::new(store.clone()),
            exercise_repository: Arc::new(store),
        }
    }

    /// Connect to the configured store
    pub async fn connect(backend: StoreBackend) -> anyhow::Result<Self> {
        match backend {
            StoreBackend::Memory => {
                info!("Using in-memory store");
                Ok(Self::memory())
            }
            StoreBackend::Postgres => {
                let db_config = DatabaseConfig::from_env()?;
                let pool = database::init_pool(&db_config).await?;

                if !database::health_check(&pool).await? {
                    anyhow::bail!("Failed to connect to database");
                }
                info!("Database connection successful");

                database::run_migrations(&pool).await?;
                Ok(Self::postgres(pool))
            }
        }
    }

    /// Whether the store is reachable
    pub async fn is_healthy(&self) -> DatabaseResult<bool> {
        match &self.db_pool {
            Some(pool) => database::health_check(pool).await,
            None => Ok(true),
        }
    }
}
