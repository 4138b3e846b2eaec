//! Integration tests for on-disk database initialization
//!
//! Covers:
//! - Automatic creation of the database file and parent directories
//! - Reopening an existing database without error or data loss

use drape_common::db::init_database;
use tempfile::TempDir;

#[tokio::test]
async fn test_database_creation_when_missing() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("nested").join("drape.db");

    let result = init_database(&db_path).await;

    assert!(result.is_ok(), "Database initialization failed: {:?}", result.err());
    assert!(db_path.exists(), "Database file was not created");
}

#[tokio::test]
async fn test_database_reopen_keeps_rows() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("drape.db");

    let pool = init_database(&db_path).await.unwrap();
    sqlx::query("INSERT INTO profiles (profile_id, version, created_at, body) VALUES (?, ?, ?, ?)")
        .bind("local")
        .bind(1_i64)
        .bind("2026-01-01T00:00:00+00:00")
        .bind("{}")
        .execute(&pool)
        .await
        .unwrap();
    pool.close().await;

    let reopened = init_database(&db_path).await.unwrap();
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM profiles")
        .fetch_one(&reopened)
        .await
        .unwrap();

    assert_eq!(count, 1, "Existing rows should survive reopening");
}
