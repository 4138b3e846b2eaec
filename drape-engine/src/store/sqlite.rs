//! SQLite-backed stores

use async_trait::async_trait;
use chrono::SecondsFormat;
use drape_common::Result;
use sqlx::SqlitePool;
use tracing::debug;

use super::{HistoryStore, ProfileStore};
use crate::models::{Profile, ProfileId, RecommendationBundle};

#[derive(Clone)]
pub struct SqliteProfileStore {
    pool: SqlitePool,
}

impl SqliteProfileStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileStore for SqliteProfileStore {
    async fn load(&self, id: &ProfileId) -> Result<Option<Profile>> {
        let body: Option<String> = sqlx::query_scalar(
            r#"
            SELECT body FROM profiles
            WHERE profile_id = ?
            ORDER BY version DESC
            LIMIT 1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        body.map(|b| serde_json::from_str(&b).map_err(Into::into))
            .transpose()
    }

    async fn save(&self, profile: &Profile) -> Result<()> {
        let body = serde_json::to_string(profile)?;
        sqlx::query(
            r#"
            INSERT INTO profiles (profile_id, version, created_at, body)
            VALUES (?, ?, ?, ?)
            ON CONFLICT(profile_id, version) DO UPDATE SET
                created_at = excluded.created_at,
                body = excluded.body
            "#,
        )
        .bind(profile.profile_id.as_str())
        .bind(i64::from(profile.version))
        .bind(profile.created_at.to_rfc3339_opts(SecondsFormat::Micros, true))
        .bind(body)
        .execute(&self.pool)
        .await?;

        debug!(profile_id = %profile.profile_id, version = profile.version, "Profile saved");
        Ok(())
    }
}

#[derive(Clone)]
pub struct SqliteHistoryStore {
    pool: SqlitePool,
}

impl SqliteHistoryStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HistoryStore for SqliteHistoryStore {
    async fn append(&self, bundle: &RecommendationBundle) -> Result<()> {
        let body = serde_json::to_string(bundle)?;
        sqlx::query(
            r#"
            INSERT INTO history (id, profile_id, created_at, remark_count, critical_count, overall_score, body)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(bundle.id.to_string())
        .bind(bundle.profile_id.as_str())
        .bind(bundle.created_at.to_rfc3339_opts(SecondsFormat::Micros, true))
        .bind(bundle.remarks.len() as i64)
        .bind(bundle.critical_count() as i64)
        .bind(bundle.scores.overall)
        .bind(body)
        .execute(&self.pool)
        .await?;

        debug!(bundle_id = %bundle.id, profile_id = %bundle.profile_id, "Bundle appended to history");
        Ok(())
    }

    async fn list(&self, id: &ProfileId, limit: usize) -> Result<Vec<RecommendationBundle>> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let bodies: Vec<String> = sqlx::query_scalar(
            r#"
            SELECT body FROM history
            WHERE profile_id = ?
            ORDER BY created_at DESC, seq DESC
            LIMIT ?
            "#,
        )
        .bind(id.as_str())
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        bodies
            .iter()
            .map(|b| serde_json::from_str(b).map_err(Into::into))
            .collect()
    }
}
