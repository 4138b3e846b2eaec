//! Group and overall scores

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::{Remark, RemarkGroup, Scores, Severity};

/// Relative weight of each group in the overall score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    pub outfit: f64,
    pub grooming: f64,
    pub accessory: f64,
    pub footwear: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            outfit: 0.4,
            grooming: 0.2,
            accessory: 0.2,
            footwear: 0.2,
        }
    }
}

impl ScoreWeights {
    fn weight(&self, group: RemarkGroup) -> f64 {
        match group {
            RemarkGroup::Outfit => self.outfit,
            RemarkGroup::Grooming => self.grooming,
            RemarkGroup::Accessory => self.accessory,
            RemarkGroup::Footwear => self.footwear,
        }
    }

    fn sum(&self) -> f64 {
        self.outfit + self.grooming + self.accessory + self.footwear
    }
}

/// `[scoring]` section of the TOML config
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub weights: ScoreWeights,
    pub critical_penalty: f64,
    pub moderate_penalty: f64,
    pub minor_penalty: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: ScoreWeights::default(),
            critical_penalty: 2.0,
            moderate_penalty: 1.0,
            minor_penalty: 0.5,
        }
    }
}

impl ScoringConfig {
    fn penalty(&self, severity: Severity) -> f64 {
        match severity {
            Severity::Critical => self.critical_penalty,
            Severity::Moderate => self.moderate_penalty,
            Severity::Minor => self.minor_penalty,
        }
    }

    /// Weights actually applied; non-positive or non-finite sums fall back to the defaults
    fn effective_weights(&self) -> ScoreWeights {
        let sum = self.weights.sum();
        if sum.is_finite() && sum > 0.0 {
            self.weights
        } else {
            warn!(sum = sum, "Score weights unusable; falling back to defaults");
            ScoreWeights::default()
        }
    }
}

/// Unrounded group score: 10 minus penalties, floored at 1
fn raw_group_score(config: &ScoringConfig, remarks: &[Remark], group: RemarkGroup) -> f64 {
    let penalty: f64 = remarks
        .iter()
        .filter(|r| r.group == group)
        .map(|r| config.penalty(r.severity))
        .sum();
    (10.0 - penalty).clamp(1.0, 10.0)
}

pub fn score(config: &ScoringConfig, remarks: &[Remark]) -> Scores {
    let weights = config.effective_weights();
    let group = |g| raw_group_score(config, remarks, g).round() as u8;
    let outfit = group(RemarkGroup::Outfit);
    let grooming = group(RemarkGroup::Grooming);
    let accessory = group(RemarkGroup::Accessory);
    let footwear = group(RemarkGroup::Footwear);

    let scores = Scores {
        overall: 0.0,
        outfit,
        grooming,
        accessory,
        footwear,
    };
    let weighted: f64 = RemarkGroup::ALL
        .iter()
        .map(|g| f64::from(scores.group(*g)) * weights.weight(*g))
        .sum();
    let overall = (weighted / weights.sum() * 10.0).round() / 10.0;

    Scores { overall, ..scores }
}
