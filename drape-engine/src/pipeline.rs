//! Onboarding and analysis pipeline
//!
//! Wires the extraction capability, the pure core and the stores together.
//! The core stays synchronous; only extraction, generation and storage are
//! awaited. Outfit extraction and preview generation run concurrently.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;
use tracing::{info, warn};

use crate::error::{FusionError, PipelineError};
use crate::extractors::{Extractor, Generator};
use crate::fusion::AttributeFuser;
use crate::models::{Occasion, PhotoKind, Profile, ProfileId, RecommendationBundle};
use crate::store::{HistoryStore, ProfileStore};
use crate::synthesis::Synthesizer;

/// One onboarding photo and its kind, written `kind=path` on the command line
#[derive(Debug, Clone, PartialEq)]
pub struct PhotoInput {
    pub kind: PhotoKind,
    pub path: PathBuf,
}

impl PhotoInput {
    pub fn new(kind: PhotoKind, path: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            path: path.into(),
        }
    }
}

impl FromStr for PhotoInput {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, path) = s
            .split_once('=')
            .ok_or_else(|| format!("expected <kind>=<path>, got '{}'", s))?;
        if path.trim().is_empty() {
            return Err(format!("missing path in '{}'", s));
        }
        Ok(Self::new(kind.parse()?, path.trim()))
    }
}

impl fmt::Display for PhotoInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.kind, self.path.display())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct OnboardOptions {
    /// Build a new version over an existing profile
    pub refresh: bool,
    /// Accept neutral defaults for required attributes that did not resolve
    pub allow_incomplete: bool,
}

pub struct Pipeline {
    extractor: Arc<dyn Extractor>,
    generator: Option<Arc<dyn Generator>>,
    profiles: Arc<dyn ProfileStore>,
    history: Arc<dyn HistoryStore>,
    fuser: AttributeFuser,
    synthesizer: Synthesizer,
    profile_id: ProfileId,
}

impl Pipeline {
    pub fn new(
        extractor: Arc<dyn Extractor>,
        profiles: Arc<dyn ProfileStore>,
        history: Arc<dyn HistoryStore>,
    ) -> Self {
        Self {
            extractor,
            generator: None,
            profiles,
            history,
            fuser: AttributeFuser::default(),
            synthesizer: Synthesizer::default(),
            profile_id: ProfileId::default(),
        }
    }

    pub fn with_generator(mut self, generator: Arc<dyn Generator>) -> Self {
        self.generator = Some(generator);
        self
    }

    pub fn with_synthesizer(mut self, synthesizer: Synthesizer) -> Self {
        self.synthesizer = synthesizer;
        self
    }

    pub fn with_profile_id(mut self, profile_id: ProfileId) -> Self {
        self.profile_id = profile_id;
        self
    }

    pub fn profile_id(&self) -> &ProfileId {
        &self.profile_id
    }

    /// Extract, fuse and store a profile from onboarding photos
    ///
    /// Photo indexes follow the order of `photos`.
    pub async fn onboard(
        &self,
        photos: &[PhotoInput],
        options: OnboardOptions,
    ) -> Result<Profile, PipelineError> {
        let existing = self.profiles.load(&self.profile_id).await?;
        if existing.is_some() && !options.refresh {
            return Err(PipelineError::ProfileExists(self.profile_id.clone()));
        }

        let mut observations = Vec::new();
        for (index, photo) in photos.iter().enumerate() {
            let mut extracted = self
                .extractor
                .observations(&photo.path, photo.kind)
                .await
                .map_err(|e| extraction_error(&photo.path, e))?;
            for obs in &mut extracted {
                obs.source_photo_index = index;
                obs.photo_kind = photo.kind;
            }
            observations.extend(extracted);
        }

        let fused = match &existing {
            Some(previous) => self.fuser.refresh(previous, &observations),
            None => self.fuser.fuse_versioned(
                &observations,
                self.profile_id.clone(),
                1,
                drape_common::time::now(),
            ),
        };
        let profile = match fused {
            Ok(profile) => profile,
            Err(FusionError::IncompleteProfile { missing, draft }) if options.allow_incomplete => {
                warn!(
                    profile_id = %self.profile_id,
                    missing = ?missing,
                    "Proceeding with neutral defaults for unresolved attributes"
                );
                draft.with_defaults()
            }
            Err(e) => return Err(e.into()),
        };

        self.profiles.save(&profile).await?;
        info!(
            profile_id = %profile.profile_id,
            version = profile.version,
            photos = photos.len(),
            observations = observations.len(),
            "Onboarding complete"
        );
        Ok(profile)
    }

    /// Analyze one outfit photo against the stored profile and record the result
    pub async fn analyze(
        &self,
        photo: &Path,
        occasion: Option<Occasion>,
    ) -> Result<RecommendationBundle, PipelineError> {
        let profile = self
            .profiles
            .load(&self.profile_id)
            .await?
            .ok_or_else(|| PipelineError::NoProfile(self.profile_id.clone()))?;

        let extraction = self.extractor.breakdown(photo, occasion);
        let generation = async {
            let generator = self.generator.as_ref()?;
            match generator.generate(photo).await {
                Ok(path) => Some(path),
                Err(e) => {
                    warn!(photo = %photo.display(), error = %e, "Preview generation failed");
                    None
                }
            }
        };
        let (breakdown, artifact) = tokio::join!(extraction, generation);
        let breakdown = breakdown.map_err(|e| extraction_error(photo, e))?;

        let bundle = self
            .synthesizer
            .analyze(&profile, &breakdown, occasion)?
            .with_artifact(artifact);
        self.history.append(&bundle).await?;
        Ok(bundle)
    }

    /// Most recent bundles first
    pub async fn history(&self, limit: usize) -> Result<Vec<RecommendationBundle>, PipelineError> {
        Ok(self.history.list(&self.profile_id, limit).await?)
    }

    pub async fn profile(&self) -> Result<Option<Profile>, PipelineError> {
        Ok(self.profiles.load(&self.profile_id).await?)
    }
}

fn extraction_error(photo: &Path, e: anyhow::Error) -> PipelineError {
    PipelineError::Extraction(format!("{}: {:#}", photo.display(), e))
}
