//! Vision capability seams
//!
//! The engine never looks at pixels. An [`Extractor`] turns a photo into
//! attribute observations or an outfit breakdown, and an optional
//! [`Generator`] renders a styled preview. Failures surface as
//! `PipelineError::Extraction`; a failed generation only loses the preview.

pub mod file;

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::models::{Observation, Occasion, OutfitBreakdown, PhotoKind};

pub use file::FileExtractor;

#[async_trait]
pub trait Extractor: Send + Sync {
    /// Attribute observations from one onboarding photo
    async fn observations(&self, photo: &Path, kind: PhotoKind) -> anyhow::Result<Vec<Observation>>;

    /// Structured breakdown of one outfit photo
    async fn breakdown(&self, photo: &Path, occasion: Option<Occasion>) -> anyhow::Result<OutfitBreakdown>;
}

#[async_trait]
pub trait Generator: Send + Sync {
    /// Render an artifact for the photo and return where it was written
    async fn generate(&self, photo: &Path) -> anyhow::Result<PathBuf>;
}
