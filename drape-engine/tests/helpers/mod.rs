//! Test Helper Utilities
//!
//! Shared builders for profiles, observations and outfit breakdowns

#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use std::collections::BTreeMap;

use drape_engine::models::{
    Attribute, GarmentCategory, GarmentItem, Observation, Occasion, OutfitBreakdown, PhotoKind,
    Profile, ProfileId, Season,
};

/// Fixed timestamp so fused profiles compare equal across runs
pub fn fixed_time() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
}

/// Profile with every required attribute resolved
pub fn profile(undertone: &str, body_shape: &str, face_shape: &str) -> Profile {
    let attributes = BTreeMap::from([
        (Attribute::SkinUndertone, undertone.to_string()),
        (Attribute::BodyShape, body_shape.to_string()),
        (Attribute::FaceShape, face_shape.to_string()),
        (Attribute::Height, "average".to_string()),
        (Attribute::Build, "average".to_string()),
    ]);
    let confidence_scores = attributes.keys().map(|a| (*a, 0.75)).collect();
    Profile {
        profile_id: ProfileId::default(),
        attributes,
        confidence_scores,
        photos_used: 3,
        created_at: fixed_time(),
        version: 1,
        seasonal_type: Season::Autumn,
    }
}

pub fn warm_profile() -> Profile {
    profile("warm", "rectangle", "oval")
}

pub fn garment(category: GarmentCategory, garment_type: &str, color: &str) -> GarmentItem {
    GarmentItem::new(category, garment_type, color)
}

/// Cream shirt and navy trousers; nothing for a warm rectangle profile to object to
pub fn clean_casual_outfit() -> OutfitBreakdown {
    OutfitBreakdown::new(
        Occasion::Casual,
        vec![
            garment(GarmentCategory::Top, "shirt", "cream"),
            garment(GarmentCategory::Bottom, "trousers", "navy"),
        ],
    )
}

/// Observations for the five required attributes spread over photos 0..3
pub fn required_observations() -> Vec<Observation> {
    vec![
        Observation::new(Attribute::SkinUndertone, "warm", 0.75, 0, PhotoKind::FaceFront),
        Observation::new(Attribute::FaceShape, "oval", 0.75, 0, PhotoKind::FaceFront),
        Observation::new(Attribute::BodyShape, "rectangle", 0.75, 2, PhotoKind::BodyFront),
        Observation::new(Attribute::Height, "average", 0.5, 2, PhotoKind::BodyFront),
        Observation::new(Attribute::Build, "athletic", 0.5, 1, PhotoKind::FaceSide),
    ]
}
