//! Profile and history persistence
//!
//! Two implementations of each store: SQLite (sqlx, JSON bodies) for the CLI
//! and in-memory maps for tests and embedding.

pub mod memory;
pub mod sqlite;

use async_trait::async_trait;
use drape_common::Result;

use crate::models::{Profile, ProfileId, RecommendationBundle};

pub use memory::{MemoryHistoryStore, MemoryProfileStore};
pub use sqlite::{SqliteHistoryStore, SqliteProfileStore};

/// Versioned profile storage, keyed by profile id
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Latest stored version, if any
    async fn load(&self, id: &ProfileId) -> Result<Option<Profile>>;

    /// Store a version; writing the same (id, version) again replaces it
    async fn save(&self, profile: &Profile) -> Result<()>;
}

/// Append-only log of recommendation bundles
#[async_trait]
pub trait HistoryStore: Send + Sync {
    async fn append(&self, bundle: &RecommendationBundle) -> Result<()>;

    /// Most recent first
    async fn list(&self, id: &ProfileId, limit: usize) -> Result<Vec<RecommendationBundle>>;
}
