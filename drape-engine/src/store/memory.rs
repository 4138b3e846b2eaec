//! In-memory stores

use async_trait::async_trait;
use drape_common::Result;
use std::collections::{BTreeMap, HashMap};
use tokio::sync::RwLock;

use super::{HistoryStore, ProfileStore};
use crate::models::{Profile, ProfileId, RecommendationBundle};

#[derive(Default)]
pub struct MemoryProfileStore {
    profiles: RwLock<HashMap<ProfileId, BTreeMap<u32, Profile>>>,
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored versions for a profile
    pub async fn version_count(&self, id: &ProfileId) -> usize {
        self.profiles.read().await.get(id).map(BTreeMap::len).unwrap_or(0)
    }
}

#[async_trait]
impl ProfileStore for MemoryProfileStore {
    async fn load(&self, id: &ProfileId) -> Result<Option<Profile>> {
        let profiles = self.profiles.read().await;
        Ok(profiles
            .get(id)
            .and_then(|versions| versions.values().next_back())
            .cloned())
    }

    async fn save(&self, profile: &Profile) -> Result<()> {
        self.profiles
            .write()
            .await
            .entry(profile.profile_id.clone())
            .or_default()
            .insert(profile.version, profile.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryHistoryStore {
    entries: RwLock<Vec<RecommendationBundle>>,
}

impl MemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HistoryStore for MemoryHistoryStore {
    async fn append(&self, bundle: &RecommendationBundle) -> Result<()> {
        self.entries.write().await.push(bundle.clone());
        Ok(())
    }

    async fn list(&self, id: &ProfileId, limit: usize) -> Result<Vec<RecommendationBundle>> {
        let entries = self.entries.read().await;
        // later appends first, then a stable sort keeps them ahead of equal timestamps
        let mut matching: Vec<RecommendationBundle> = entries
            .iter()
            .rev()
            .filter(|b| &b.profile_id == id)
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        matching.truncate(limit);
        Ok(matching)
    }
}
