//! Data models for the style engine
//!
//! - Observations and the fused profile
//! - Outfit breakdowns supplied by the vision capability
//! - Findings, remarks and the recommendation bundle

pub mod outfit;
pub mod profile;
pub mod remark;

pub use outfit::{
    AccessoryItem, ColorAssessment, FootwearAnalysis, GarmentCategory, GarmentItem,
    GroomingVisible, Occasion, OutfitBreakdown,
};
pub use profile::{
    normalize_token, Attribute, BodyShape, Confidence, FaceShape, Height, Observation, PatternScale,
    PhotoKind, Profile, ProfileId, Season, Undertone,
};
pub use remark::{
    BodyZone, ColorPalette, Dimension, Finding, GroomingProfile, RecommendationBundle, Remark,
    RemarkCategory, RemarkGroup, Scores, Severity, WardrobeGap,
};
