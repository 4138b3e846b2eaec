//! Pipeline integration tests
//!
//! Drives onboarding and analysis through a scripted extractor and the
//! in-memory stores.
//!
//! Covers:
//! - First onboarding, duplicate onboarding and refresh
//! - Incomplete profiles with and without neutral defaults
//! - Analysis before onboarding
//! - Extraction failures and tolerated preview failures
//! - History recording

mod helpers;

use anyhow::{anyhow, bail};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use drape_engine::extractors::{Extractor, Generator};
use drape_engine::models::{
    Attribute, GarmentCategory, Observation, Occasion, OutfitBreakdown, PhotoKind, ProfileId,
};
use drape_engine::store::{MemoryHistoryStore, MemoryProfileStore};
use drape_engine::{FusionError, OnboardOptions, PhotoInput, Pipeline, PipelineError};
use helpers::{clean_casual_outfit, garment};

/// Extractor that answers from canned readings keyed by file name
#[derive(Default)]
struct ScriptedExtractor {
    observations: HashMap<PathBuf, Vec<Observation>>,
    breakdowns: HashMap<PathBuf, OutfitBreakdown>,
}

impl ScriptedExtractor {
    fn with_photo(mut self, path: &str, readings: &[(Attribute, &str)]) -> Self {
        let observations = readings
            .iter()
            .map(|(attribute, value)| Observation::new(*attribute, *value, 0.75, 0, PhotoKind::Outfit))
            .collect();
        self.observations.insert(PathBuf::from(path), observations);
        self
    }

    fn with_outfit(mut self, path: &str, breakdown: OutfitBreakdown) -> Self {
        self.breakdowns.insert(PathBuf::from(path), breakdown);
        self
    }
}

#[async_trait]
impl Extractor for ScriptedExtractor {
    async fn observations(&self, photo: &Path, _kind: PhotoKind) -> anyhow::Result<Vec<Observation>> {
        match self.observations.get(photo) {
            Some(observations) => Ok(observations.clone()),
            None => bail!("no face detected"),
        }
    }

    async fn breakdown(&self, photo: &Path, _occasion: Option<Occasion>) -> anyhow::Result<OutfitBreakdown> {
        self.breakdowns
            .get(photo)
            .cloned()
            .ok_or_else(|| anyhow!("unreadable outfit photo"))
    }
}

struct FailingGenerator;

#[async_trait]
impl Generator for FailingGenerator {
    async fn generate(&self, _photo: &Path) -> anyhow::Result<PathBuf> {
        bail!("renderer offline")
    }
}

struct FixedGenerator;

#[async_trait]
impl Generator for FixedGenerator {
    async fn generate(&self, photo: &Path) -> anyhow::Result<PathBuf> {
        Ok(photo.with_extension("preview.png"))
    }
}

fn extractor() -> ScriptedExtractor {
    ScriptedExtractor::default()
        .with_photo(
            "face.json",
            &[(Attribute::SkinUndertone, "warm"), (Attribute::FaceShape, "oval")],
        )
        .with_photo("side.json", &[(Attribute::FaceShape, "oval"), (Attribute::Build, "average")])
        .with_photo(
            "body.json",
            &[(Attribute::BodyShape, "rectangle"), (Attribute::Height, "average")],
        )
        .with_photo("body-slim.json", &[(Attribute::BodyShape, "triangle")])
        .with_outfit("casual.json", clean_casual_outfit())
        .with_outfit(
            "ivory.json",
            OutfitBreakdown::new(
                Occasion::IndianCasual,
                vec![garment(GarmentCategory::EthnicTop, "kurta", "ivory")],
            ),
        )
}

fn photos() -> Vec<PhotoInput> {
    vec![
        PhotoInput::new(PhotoKind::FaceFront, "face.json"),
        PhotoInput::new(PhotoKind::FaceSide, "side.json"),
        PhotoInput::new(PhotoKind::BodyFront, "body.json"),
    ]
}

fn pipeline(extractor: ScriptedExtractor) -> Pipeline {
    Pipeline::new(
        Arc::new(extractor),
        Arc::new(MemoryProfileStore::new()),
        Arc::new(MemoryHistoryStore::new()),
    )
}

#[tokio::test]
async fn test_onboard_creates_first_version() {
    let pipeline = pipeline(extractor());

    let profile = pipeline.onboard(&photos(), OnboardOptions::default()).await.unwrap();

    assert_eq!(profile.version, 1);
    assert_eq!(profile.photos_used, 3);
    assert_eq!(profile.profile_id, ProfileId::default());
    assert_eq!(profile.value(Attribute::BodyShape), Some("rectangle"));
    assert_eq!(pipeline.profile().await.unwrap(), Some(profile));
}

#[tokio::test]
async fn test_second_onboarding_needs_refresh() {
    let pipeline = pipeline(extractor()).with_profile_id(ProfileId::new("alice"));
    pipeline.onboard(&photos(), OnboardOptions::default()).await.unwrap();

    let err = pipeline.onboard(&photos(), OnboardOptions::default()).await.unwrap_err();
    assert!(matches!(err, PipelineError::ProfileExists(ref id) if id == &ProfileId::new("alice")));

    let mut refreshed_photos = photos();
    refreshed_photos.push(PhotoInput::new(PhotoKind::BodySide, "body-slim.json"));
    let refresh = OnboardOptions {
        refresh: true,
        ..Default::default()
    };
    let second = pipeline.onboard(&refreshed_photos, refresh).await.unwrap();

    assert_eq!(second.version, 2);
    assert_eq!(second.photos_used, 4);
    // body_front is the diagnostic view for body shape
    assert_eq!(second.value(Attribute::BodyShape), Some("rectangle"));
    assert_eq!(pipeline.profile().await.unwrap().unwrap().version, 2);
}

#[tokio::test]
async fn test_incomplete_onboarding() {
    let partial = ScriptedExtractor::default()
        .with_photo("a.json", &[(Attribute::SkinUndertone, "cool")])
        .with_photo("b.json", &[(Attribute::FaceShape, "square")])
        .with_photo("c.json", &[(Attribute::BodyShape, "oval")]);
    let inputs = vec![
        PhotoInput::new(PhotoKind::FaceFront, "a.json"),
        PhotoInput::new(PhotoKind::FaceSide, "b.json"),
        PhotoInput::new(PhotoKind::BodyFront, "c.json"),
    ];
    let pipeline = pipeline(partial);

    let err = pipeline.onboard(&inputs, OnboardOptions::default()).await.unwrap_err();
    let missing = match err {
        PipelineError::Fusion(FusionError::IncompleteProfile { missing, .. }) => missing,
        other => panic!("expected an incomplete profile, got {:?}", other),
    };
    assert_eq!(missing, vec![Attribute::Height, Attribute::Build]);
    assert!(pipeline.profile().await.unwrap().is_none());

    let lenient = OnboardOptions {
        allow_incomplete: true,
        ..Default::default()
    };
    let profile = pipeline.onboard(&inputs, lenient).await.unwrap();
    assert_eq!(profile.value(Attribute::Height), Some("average"));
    assert_eq!(profile.value(Attribute::SkinUndertone), Some("cool"));
}

#[tokio::test]
async fn test_too_few_photos() {
    let pipeline = pipeline(extractor());

    let err = pipeline
        .onboard(&photos()[..2], OnboardOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        PipelineError::Fusion(FusionError::InsufficientData { photos: 2, .. })
    ));
}

#[tokio::test]
async fn test_onboarding_extraction_failure() {
    let pipeline = pipeline(extractor());
    let mut inputs = photos();
    inputs[1] = PhotoInput::new(PhotoKind::FaceSide, "blurry.json");

    let err = pipeline.onboard(&inputs, OnboardOptions::default()).await.unwrap_err();

    let message = match err {
        PipelineError::Extraction(message) => message,
        other => panic!("expected an extraction error, got {:?}", other),
    };
    assert!(message.contains("blurry.json"));
    assert!(message.contains("no face detected"));
}

#[tokio::test]
async fn test_analyze_requires_profile() {
    let pipeline = pipeline(extractor());

    let err = pipeline.analyze(Path::new("casual.json"), None).await.unwrap_err();

    assert!(matches!(err, PipelineError::NoProfile(_)));
    assert!(pipeline.history(10).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_analyze_records_history() {
    let pipeline = pipeline(extractor()).with_generator(Arc::new(FixedGenerator));
    pipeline.onboard(&photos(), OnboardOptions::default()).await.unwrap();

    let clean = pipeline.analyze(Path::new("casual.json"), None).await.unwrap();
    let ivory = pipeline.analyze(Path::new("ivory.json"), None).await.unwrap();

    assert!(clean.remarks.is_empty());
    assert_eq!(clean.artifact_path, Some(PathBuf::from("casual.preview.png")));
    assert_eq!(ivory.critical_count(), 1);
    assert_eq!(ivory.profile.version, 1);

    let history = pipeline.history(10).await.unwrap();
    assert_eq!(history.len(), 2);
    assert!(history.iter().any(|b| b.id == clean.id));
    assert!(history.iter().any(|b| b.id == ivory.id));
    assert_eq!(pipeline.history(1).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_generator_failure_keeps_analysis() {
    let pipeline = pipeline(extractor()).with_generator(Arc::new(FailingGenerator));
    pipeline.onboard(&photos(), OnboardOptions::default()).await.unwrap();

    let bundle = pipeline
        .analyze(Path::new("ivory.json"), Some(Occasion::Festival))
        .await
        .unwrap();

    assert_eq!(bundle.artifact_path, None);
    assert_eq!(bundle.occasion, Occasion::Festival);
    // both critical; color ranks ahead of the occasion mismatch
    let rules: Vec<_> = bundle.remarks.iter().map(|r| r.rule_id.as_str()).collect();
    assert_eq!(rules, vec!["color.undertone_avoid", "occasion.mismatch"]);
    assert_eq!(pipeline.history(10).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_analysis_extraction_failure_records_nothing() {
    let pipeline = pipeline(extractor());
    pipeline.onboard(&photos(), OnboardOptions::default()).await.unwrap();

    let err = pipeline.analyze(Path::new("missing.json"), None).await.unwrap_err();

    assert!(matches!(err, PipelineError::Extraction(ref m) if m.contains("unreadable outfit photo")));
    assert!(pipeline.history(10).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_empty_outfit_is_an_analysis_error() {
    let empty = extractor().with_outfit("empty.json", OutfitBreakdown::new(Occasion::Casual, Vec::new()));
    let pipeline = pipeline(empty);
    pipeline.onboard(&photos(), OnboardOptions::default()).await.unwrap();

    let err = pipeline.analyze(Path::new("empty.json"), None).await.unwrap_err();

    assert!(matches!(err, PipelineError::Analysis(_)));
    assert!(pipeline.history(10).await.unwrap().is_empty());
}
