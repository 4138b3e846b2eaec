//! Findings, remarks and the recommendation bundle

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use uuid::Uuid;

use super::outfit::{Occasion, OutfitBreakdown};
use super::profile::{FaceShape, PatternScale, Profile, ProfileId};

/// Rule family a finding was produced by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Color,
    Silhouette,
    OccasionFabric,
    Accessory,
    Footwear,
    Condition,
    Grooming,
}

impl Dimension {
    /// Ranking position within one severity band (lower ranks first)
    pub fn priority(&self) -> u8 {
        match self {
            Dimension::Color => 0,
            Dimension::OccasionFabric => 1,
            Dimension::Silhouette => 2,
            Dimension::Footwear => 3,
            Dimension::Accessory => 4,
            Dimension::Condition => 5,
            Dimension::Grooming => 6,
        }
    }
}

/// Severity of a finding; declaration order is ranking order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Critical,
    Moderate,
    Minor,
}

impl Severity {
    /// The more severe of two severities
    pub fn most_severe(self, other: Severity) -> Severity {
        std::cmp::min(self, other)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BodyZone {
    Head,
    Face,
    Neck,
    UpperBody,
    LowerBody,
    Feet,
    FullLook,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemarkCategory {
    Color,
    Fit,
    Fabric,
    Occasion,
    Proportion,
    Accessory,
    Footwear,
    GroomingHair,
    GroomingBeard,
    GroomingSkin,
    Layering,
    Pattern,
    Length,
    Condition,
    Posture,
}

/// Presentation group and score bucket of a remark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemarkGroup {
    Outfit,
    Grooming,
    Accessory,
    Footwear,
}

impl RemarkGroup {
    pub const ALL: [RemarkGroup; 4] = [
        RemarkGroup::Outfit,
        RemarkGroup::Grooming,
        RemarkGroup::Accessory,
        RemarkGroup::Footwear,
    ];

    pub fn of(dimension: Dimension, zone: BodyZone) -> RemarkGroup {
        match dimension {
            Dimension::Color | Dimension::Silhouette | Dimension::OccasionFabric => RemarkGroup::Outfit,
            Dimension::Grooming => RemarkGroup::Grooming,
            Dimension::Accessory => RemarkGroup::Accessory,
            Dimension::Footwear => RemarkGroup::Footwear,
            Dimension::Condition if zone == BodyZone::Feet => RemarkGroup::Footwear,
            Dimension::Condition => RemarkGroup::Outfit,
        }
    }
}

/// One raw rule-evaluation result, before ranking
#[derive(Debug, Clone, PartialEq)]
pub struct Finding {
    pub dimension: Dimension,
    pub rule_id: &'static str,
    pub severity_hint: Severity,
    pub category: RemarkCategory,
    pub body_zone: BodyZone,
    pub element: String,
    pub issue: String,
    pub fix: String,
    pub why: String,
    /// Condition reading this finding was raised on, checked by escalation
    pub condition: Option<String>,
    /// Item the fix asks the user to own
    pub acquisition: Option<String>,
    /// Worn colors this finding judges wrong for the user
    pub colors: Vec<String>,
}

impl Finding {
    pub fn new(
        dimension: Dimension,
        rule_id: &'static str,
        severity_hint: Severity,
        category: RemarkCategory,
        body_zone: BodyZone,
        element: impl Into<String>,
    ) -> Self {
        Self {
            dimension,
            rule_id,
            severity_hint,
            category,
            body_zone,
            element: element.into(),
            issue: String::new(),
            fix: String::new(),
            why: String::new(),
            condition: None,
            acquisition: None,
            colors: Vec::new(),
        }
    }

    pub fn issue(mut self, issue: impl Into<String>) -> Self {
        self.issue = issue.into();
        self
    }

    pub fn fix(mut self, fix: impl Into<String>) -> Self {
        self.fix = fix.into();
        self
    }

    pub fn why(mut self, why: impl Into<String>) -> Self {
        self.why = why.into();
        self
    }

    pub fn condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }

    pub fn acquire(mut self, item: impl Into<String>) -> Self {
        self.acquisition = Some(item.into());
        self
    }

    pub fn colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors.extend(colors.into_iter().map(Into::into));
        self
    }

    /// Identity used for deduplication
    pub fn key(&self) -> (Dimension, BodyZone, String) {
        (self.dimension, self.body_zone, self.element.to_lowercase())
    }
}

/// Finalized, ranked correction shown to the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Remark {
    pub priority_order: usize,
    pub severity: Severity,
    pub category: RemarkCategory,
    pub group: RemarkGroup,
    pub dimension: Dimension,
    pub rule_id: String,
    pub body_zone: BodyZone,
    pub element: String,
    pub issue: String,
    pub fix: String,
    pub why: String,
    #[serde(default)]
    pub acquisition: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorPalette {
    #[serde(rename = "do")]
    pub do_colors: Vec<String>,
    #[serde(rename = "avoid")]
    pub avoid_colors: Vec<String>,
    #[serde(rename = "occasion")]
    pub occasion_colors: Vec<String>,
}

/// Standing grooming guidance for the profile's face shape and hair
///
/// The first entry of each recommendation table is the headline pick; the
/// rest are alternatives.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroomingProfile {
    pub face_shape: FaceShape,
    pub recommended_haircut: String,
    pub alternative_haircuts: Vec<String>,
    pub haircuts_to_avoid: Vec<String>,
    pub recommended_beard: String,
    pub alternative_beards: Vec<String>,
    pub beards_to_avoid: Vec<String>,
    pub eyebrow_recommendation: String,
    pub styling_products: Vec<String>,
    pub skincare_categories: Vec<String>,
}

/// Item worth buying, with the occasions it would cover
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WardrobeGap {
    pub item: String,
    pub occasions: Vec<Occasion>,
    pub severity: Severity,
    pub source_rule: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scores {
    pub overall: f64,
    pub outfit: u8,
    pub grooming: u8,
    pub accessory: u8,
    pub footwear: u8,
}

impl Scores {
    pub fn group(&self, group: RemarkGroup) -> u8 {
        match group {
            RemarkGroup::Outfit => self.outfit,
            RemarkGroup::Grooming => self.grooming,
            RemarkGroup::Accessory => self.accessory,
            RemarkGroup::Footwear => self.footwear,
        }
    }
}

/// Complete output of one analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationBundle {
    pub id: Uuid,
    pub profile_id: ProfileId,
    pub created_at: DateTime<Utc>,
    pub occasion: Occasion,
    pub profile: Profile,
    pub breakdown: OutfitBreakdown,
    pub remarks: Vec<Remark>,
    pub palette: ColorPalette,
    pub wardrobe_gaps: Vec<WardrobeGap>,
    pub scores: Scores,
    /// Absent from bundles recorded before grooming guidance existed
    #[serde(default)]
    pub grooming: GroomingProfile,
    #[serde(default)]
    pub pattern_scale: PatternScale,
    #[serde(default)]
    pub artifact_path: Option<PathBuf>,
}

impl RecommendationBundle {
    pub fn remarks_in(&self, group: RemarkGroup) -> impl Iterator<Item = &Remark> {
        self.remarks.iter().filter(move |r| r.group == group)
    }

    pub fn critical_count(&self) -> usize {
        self.remarks
            .iter()
            .filter(|r| r.severity == Severity::Critical)
            .count()
    }
}
