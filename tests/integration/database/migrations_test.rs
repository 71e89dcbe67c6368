//! Database migration tests
//!
//! Tests to ensure migrations run correctly and the schema enforces what the
//! stores rely on.

use chrono::Utc;
use inkpost::backend::server::run_migrations;
use uuid::Uuid;

use crate::common::create_test_pool;

async fn insert_user(pool: &sqlx::SqlitePool, username: &str) -> Result<Uuid, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();
    sqlx::query(
        "INSERT INTO users (id, username, password_hash, created_at, updated_at) VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(id)
    .bind(username)
    .bind("hash")
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;
    Ok(id)
}

#[tokio::test]
async fn test_migrations_are_idempotent() {
    let pool = create_test_pool().await;
    let result = run_migrations(&pool).await;
    assert!(result.is_ok(), "Running migrations twice should succeed");
}

#[tokio::test]
async fn test_tables_exist() {
    let pool = create_test_pool().await;

    for table in ["users", "posts"] {
        let result = sqlx::query(&format!("SELECT 1 FROM {} LIMIT 1", table))
            .execute(&pool)
            .await;
        assert!(result.is_ok(), "{} table should exist", table);
    }
}

#[tokio::test]
async fn test_username_is_unique() {
    let pool = create_test_pool().await;

    insert_user(&pool, "alice").await.unwrap();
    let duplicate = insert_user(&pool, "alice").await;

    match duplicate {
        Err(sqlx::Error::Database(db_err)) => assert!(db_err.is_unique_violation()),
        other => panic!("Expected a unique violation, got {:?}", other),
    }
}
