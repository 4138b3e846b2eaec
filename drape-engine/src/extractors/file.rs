//! File-backed extractor
//!
//! Each "photo" is a JSON file already holding what a vision model would
//! return: an observation array for onboarding photos, a breakdown object
//! for outfit photos.

use anyhow::Context;
use async_trait::async_trait;
use std::path::Path;
use tracing::debug;

use super::Extractor;
use crate::models::{Observation, Occasion, OutfitBreakdown, PhotoKind};

#[derive(Debug, Clone, Copy, Default)]
pub struct FileExtractor;

impl FileExtractor {
    pub fn new() -> Self {
        Self
    }
}

async fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

#[async_trait]
impl Extractor for FileExtractor {
    async fn observations(&self, photo: &Path, kind: PhotoKind) -> anyhow::Result<Vec<Observation>> {
        let observations: Vec<Observation> = read_json(photo).await?;
        debug!(photo = %photo.display(), kind = %kind, count = observations.len(), "Observations loaded");
        Ok(observations)
    }

    async fn breakdown(&self, photo: &Path, occasion: Option<Occasion>) -> anyhow::Result<OutfitBreakdown> {
        let breakdown: OutfitBreakdown = read_json(photo).await?;
        debug!(
            photo = %photo.display(),
            items = breakdown.items.len(),
            detected = %breakdown.occasion_detected,
            requested = ?occasion,
            "Breakdown loaded"
        );
        Ok(breakdown)
    }
}
