//! Error types for drape-engine

use thiserror::Error;

use crate::fusion::ProfileDraft;
use crate::models::{Attribute, ProfileId};

/// Attribute fusion failure
#[derive(Debug, Error)]
pub enum FusionError {
    /// Fewer distinct source photos than the fuser requires
    #[error("Insufficient data: {photos} distinct photo(s), at least {required} required")]
    InsufficientData { photos: usize, required: usize },

    /// Required attributes left unresolved with too few photos to default them
    ///
    /// The draft holds everything that did resolve; `draft.with_defaults()`
    /// completes it with neutral fallbacks.
    #[error("Incomplete profile: unresolved {}", format_attributes(.missing))]
    IncompleteProfile {
        missing: Vec<Attribute>,
        draft: Box<ProfileDraft>,
    },
}

fn format_attributes(attributes: &[Attribute]) -> String {
    attributes
        .iter()
        .map(Attribute::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Outfit analysis failure
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    /// The breakdown lists no garments
    #[error("Empty outfit: the breakdown contains no garments")]
    EmptyOutfit,
}

/// Pipeline failure (fusion, analysis, extraction or storage)
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Fusion(#[from] FusionError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    /// Extraction capability failed before reaching the core
    #[error("Extraction failed: {0}")]
    Extraction(String),

    #[error("Store error: {0}")]
    Store(#[from] drape_common::Error),

    /// Analysis requested before onboarding
    #[error("No profile stored for '{0}'; run onboarding first")]
    NoProfile(ProfileId),

    /// Onboarding without refresh over an existing profile
    #[error("Profile '{0}' already exists; use refresh to build a new version")]
    ProfileExists(ProfileId),
}
