//! Integration tests for the store bootstrap
//!
//! These tests need a reachable PostgreSQL instance behind `DATABASE_URL` and
//! are ignored by default. Run them with `cargo test -- --ignored`.

use common::database::{DatabaseConfig, health_check, init_pool, run_migrations};
use sqlx::Row;

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_migrations_create_tables() -> Result<(), Box<dyn std::error::Error>> {
    let db_config = DatabaseConfig::from_env()?;
    let pool = init_pool(&db_config).await?;

    assert!(health_check(&pool).await?, "Database health check failed");

    run_migrations(&pool).await?;
    // Applying twice is a no-op
    run_migrations(&pool).await?;

    let row = sqlx::query(
        r#"
        SELECT COUNT(*) AS tables
        FROM information_schema.tables
        WHERE table_name IN ('users', 'exercises')
        "#,
    )
    .fetch_one(&pool)
    .await?;

    let tables: i64 = row.get("tables");
    assert_eq!(tables, 2, "users and exercises tables should exist");

    Ok(())
}
