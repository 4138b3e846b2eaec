//! Structured breakdown of one outfit photo
//!
//! Supplied whole by the vision capability and treated as read-only input.

use serde::{Deserialize, Serialize};

use super::profile::{normalize_token, vocabulary};

/// Occasions the rule tables are conditioned on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Occasion {
    IndianFormal,
    IndianCasual,
    EthnicFusion,
    #[serde(alias = "western_formal")]
    WesternBusinessFormal,
    #[serde(alias = "business_casual")]
    WesternBusinessCasual,
    #[serde(alias = "streetwear")]
    WesternStreetwear,
    SmartCasual,
    Party,
    WeddingGuestIndian,
    Festival,
    Travel,
    Gym,
    Beach,
    Lounge,
    Casual,
}

vocabulary!(Occasion {
    IndianFormal => "indian_formal",
    IndianCasual => "indian_casual",
    EthnicFusion => "ethnic_fusion",
    WesternBusinessFormal => "western_business_formal",
    WesternBusinessCasual => "western_business_casual",
    WesternStreetwear => "western_streetwear",
    SmartCasual => "smart_casual",
    Party => "party",
    WeddingGuestIndian => "wedding_guest_indian",
    Festival => "festival",
    Travel => "travel",
    Gym => "gym",
    Beach => "beach",
    Lounge => "lounge",
    Casual => "casual",
} aliases {
    "western_formal" => WesternBusinessFormal,
    "business_casual" => WesternBusinessCasual,
    "streetwear" => WesternStreetwear,
});

impl Occasion {
    /// Human-readable form for remark text ("wedding guest indian")
    pub fn label(&self) -> String {
        self.as_str().replace('_', " ")
    }
}

/// Garment slot within the outfit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GarmentCategory {
    Top,
    Bottom,
    Outerwear,
    Layer,
    Inner,
    EthnicTop,
    EthnicBottom,
    FullGarment,
}

impl GarmentCategory {
    pub fn is_upper(&self) -> bool {
        !matches!(self, GarmentCategory::Bottom | GarmentCategory::EthnicBottom)
    }

    pub fn is_bottom(&self) -> bool {
        matches!(self, GarmentCategory::Bottom | GarmentCategory::EthnicBottom)
    }

    /// Base layer worn closest to the body on top
    pub fn is_base(&self) -> bool {
        matches!(self, GarmentCategory::Top | GarmentCategory::Inner)
    }

    pub fn is_outer(&self) -> bool {
        matches!(self, GarmentCategory::Outerwear | GarmentCategory::Layer)
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GarmentItem {
    pub category: GarmentCategory,
    pub garment_type: String,
    pub color: String,
    #[serde(default)]
    pub pattern: Option<String>,
    #[serde(default, alias = "fabric_estimate")]
    pub fabric: Option<String>,
    #[serde(default)]
    pub fit: Option<String>,
    #[serde(default)]
    pub length: Option<String>,
    #[serde(default)]
    pub collar_type: Option<String>,
    #[serde(default)]
    pub sleeve_type: Option<String>,
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default = "default_true")]
    pub occasion_appropriate: bool,
    #[serde(default)]
    pub issue: Option<String>,
    #[serde(default)]
    pub fix: Option<String>,
}

impl GarmentItem {
    pub fn new(category: GarmentCategory, garment_type: &str, color: &str) -> Self {
        Self {
            category,
            garment_type: garment_type.to_string(),
            color: color.to_string(),
            pattern: None,
            fabric: None,
            fit: None,
            length: None,
            collar_type: None,
            sleeve_type: None,
            condition: None,
            occasion_appropriate: true,
            issue: None,
            fix: None,
        }
    }

    /// Collar type when the garment actually has one
    pub fn collar(&self) -> Option<&str> {
        self.collar_type
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty() && !matches!(c.to_lowercase().as_str(), "n/a" | "none"))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessoryItem {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub material: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default = "default_true")]
    pub occasion_appropriate: bool,
    #[serde(default)]
    pub issue: Option<String>,
    #[serde(default)]
    pub fix: Option<String>,
}

impl AccessoryItem {
    pub fn new(kind: &str) -> Self {
        Self {
            kind: kind.to_string(),
            color: None,
            material: None,
            style: None,
            occasion_appropriate: true,
            issue: None,
            fix: None,
        }
    }

    pub fn is(&self, kind: &str) -> bool {
        normalize_token(&self.kind) == normalize_token(kind)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FootwearAnalysis {
    pub visible: bool,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub color: Option<String>,
    pub material: Option<String>,
    pub condition: Option<String>,
    pub style_category: Option<String>,
    pub issue: Option<String>,
    pub recommended_instead: Option<String>,
}

impl FootwearAnalysis {
    pub fn kind_or_default(&self) -> &str {
        self.kind.as_deref().unwrap_or("footwear")
    }
}

/// Grooming state as seen in this photo; overrides the profile when present
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroomingVisible {
    pub haircut_style: Option<String>,
    pub hair_condition: Option<String>,
    pub beard_style: Option<String>,
    pub beard_grooming: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorAssessment {
    pub clash_detected: bool,
    pub overall_harmony: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutfitBreakdown {
    #[serde(default)]
    pub items: Vec<GarmentItem>,
    #[serde(default)]
    pub accessories: Vec<AccessoryItem>,
    #[serde(default)]
    pub footwear: FootwearAnalysis,
    #[serde(default)]
    pub grooming_visible: GroomingVisible,
    #[serde(default)]
    pub color_assessment: ColorAssessment,
    #[serde(default)]
    pub silhouette_assessment: Option<String>,
    #[serde(default)]
    pub formality_level: Option<u8>,
    pub occasion_detected: Occasion,
    #[serde(default)]
    pub occasion_requested: Option<Occasion>,
}

impl OutfitBreakdown {
    pub fn new(occasion_detected: Occasion, items: Vec<GarmentItem>) -> Self {
        Self {
            items,
            accessories: Vec::new(),
            footwear: FootwearAnalysis::default(),
            grooming_visible: GroomingVisible::default(),
            color_assessment: ColorAssessment::default(),
            silhouette_assessment: None,
            formality_level: None,
            occasion_detected,
            occasion_requested: None,
        }
    }

    /// Occasion used for every occasion-conditioned lookup
    ///
    /// An explicit request beats the breakdown's own request, which beats detection.
    pub fn authoritative_occasion(&self, requested: Option<Occasion>) -> Occasion {
        requested
            .or(self.occasion_requested)
            .unwrap_or(self.occasion_detected)
    }
}
