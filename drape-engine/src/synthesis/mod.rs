//! Remark synthesis
//!
//! Turns raw findings into the final recommendation bundle:
//! 1. Deduplicate on (dimension, body zone, element)
//! 2. Escalate hard-fail conditions to critical
//! 3. Stable-sort by (severity, dimension priority) and number densely from 1
//! 4. Assemble palette, wardrobe gaps and scores
//! 5. Attach standing grooming and print-scale guidance from the profile

pub mod gaps;
pub mod grooming;
pub mod palette;
pub mod ranking;
pub mod scoring;

use std::path::PathBuf;
use tracing::info;
use uuid::Uuid;

use crate::error::AnalysisError;
use crate::knowledge::body;
use crate::models::{Finding, Occasion, OutfitBreakdown, Profile, RecommendationBundle};
use crate::rules;

pub use scoring::{ScoreWeights, ScoringConfig};

/// Remark synthesizer
#[derive(Debug, Clone, Default)]
pub struct Synthesizer {
    pub config: ScoringConfig,
}

impl Synthesizer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Evaluate and synthesize in one step
    ///
    /// `occasion` overrides the breakdown's own requested occasion. The
    /// bundle's breakdown snapshot is the breakdown exactly as supplied.
    pub fn analyze(
        &self,
        profile: &Profile,
        breakdown: &OutfitBreakdown,
        occasion: Option<Occasion>,
    ) -> Result<RecommendationBundle, AnalysisError> {
        if breakdown.items.is_empty() {
            return Err(AnalysisError::EmptyOutfit);
        }
        let findings = rules::evaluate(profile, breakdown, occasion);
        self.assemble(findings, profile, breakdown, breakdown.authoritative_occasion(occasion))
    }

    /// Rank findings and build the bundle
    pub fn synthesize(
        &self,
        findings: Vec<Finding>,
        profile: &Profile,
        breakdown: &OutfitBreakdown,
    ) -> Result<RecommendationBundle, AnalysisError> {
        if breakdown.items.is_empty() {
            return Err(AnalysisError::EmptyOutfit);
        }
        self.assemble(findings, profile, breakdown, breakdown.authoritative_occasion(None))
    }

    fn assemble(
        &self,
        findings: Vec<Finding>,
        profile: &Profile,
        breakdown: &OutfitBreakdown,
        occasion: Occasion,
    ) -> Result<RecommendationBundle, AnalysisError> {
        let raw = findings.len();

        let findings = ranking::dedup(findings);
        let palette = palette::build(profile.undertone(), occasion, &findings);
        let remarks = ranking::rank(findings);
        let wardrobe_gaps = gaps::rank(&remarks);
        let scores = scoring::score(&self.config, &remarks);

        let bundle = RecommendationBundle {
            id: Uuid::new_v4(),
            profile_id: profile.profile_id.clone(),
            created_at: drape_common::time::now(),
            occasion,
            profile: profile.clone(),
            breakdown: breakdown.clone(),
            remarks,
            palette,
            wardrobe_gaps,
            scores,
            grooming: grooming::build(profile),
            pattern_scale: body::pattern_scale(profile.build(), profile.height()),
            artifact_path: None,
        };

        info!(
            bundle_id = %bundle.id,
            occasion = %occasion,
            findings = raw,
            remarks = bundle.remarks.len(),
            critical = bundle.critical_count(),
            gaps = bundle.wardrobe_gaps.len(),
            pattern_scale = %bundle.pattern_scale,
            overall = bundle.scores.overall,
            "Outfit analyzed"
        );
        Ok(bundle)
    }
}

impl RecommendationBundle {
    /// Same bundle with the generated artifact attached
    pub fn with_artifact(mut self, path: Option<PathBuf>) -> Self {
        self.artifact_path = path;
        self
    }
}

/// Evaluate and synthesize with default scoring
pub fn analyze(
    profile: &Profile,
    breakdown: &OutfitBreakdown,
    occasion: Option<Occasion>,
) -> Result<RecommendationBundle, AnalysisError> {
    Synthesizer::default().analyze(profile, breakdown, occasion)
}
