//! Grooming guidance assembly

use crate::knowledge::grooming;
use crate::models::{Attribute, GroomingProfile, Profile};

fn owned(entries: &[&str]) -> Vec<String> {
    entries.iter().map(|e| e.to_string()).collect()
}

/// Grooming guidance for the profile's face shape, hair and skin readings
pub fn build(profile: &Profile) -> GroomingProfile {
    let face = profile.face_shape();
    let haircuts = grooming::haircuts_recommended(face);
    let beards = grooming::beards_recommended(face);
    let texture = profile.value(Attribute::HairTexture).unwrap_or_default();
    let density = profile.value(Attribute::HairDensity).unwrap_or_default();

    GroomingProfile {
        face_shape: face,
        recommended_haircut: haircuts.first().copied().unwrap_or_default().to_string(),
        alternative_haircuts: owned(haircuts.get(1..).unwrap_or_default()),
        haircuts_to_avoid: owned(grooming::haircuts_to_avoid(face)),
        recommended_beard: beards.first().copied().unwrap_or_default().to_string(),
        alternative_beards: owned(beards.get(1..).unwrap_or_default()),
        beards_to_avoid: owned(grooming::beards_to_avoid(face)),
        eyebrow_recommendation: grooming::eyebrow_recommendation(face).to_string(),
        styling_products: owned(&grooming::styling_products(texture, density)),
        skincare_categories: owned(&grooming::skincare_categories(
            profile.value(Attribute::SkinTexture),
        )),
    }
}
