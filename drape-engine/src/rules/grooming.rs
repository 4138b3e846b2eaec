//! Grooming rules; what the photo shows overrides the stored profile

use super::RuleContext;
use crate::knowledge::{contains_any, grooming};
use crate::models::{Attribute, BodyZone, Dimension, Finding, RemarkCategory, Severity};

/// Visible reading if present, else the profile's
fn current<'a>(visible: Option<&'a str>, ctx: &'a RuleContext<'_>, attribute: Attribute) -> Option<String> {
    visible
        .or_else(|| ctx.profile.value(attribute))
        .map(|v| v.trim().to_lowercase())
        .filter(|v| !v.is_empty())
}

pub(super) fn evaluate(ctx: &RuleContext<'_>, out: &mut Vec<Finding>) {
    let seen = &ctx.breakdown.grooming_visible;
    let face = ctx.profile.face_shape();

    let beard_grooming = current(seen.beard_grooming.as_deref(), ctx, Attribute::BeardGrooming);
    if let Some(state) = beard_grooming.filter(|s| contains_any(s, grooming::UNKEMPT_BEARD)) {
        out.push(
            Finding::new(
                Dimension::Grooming,
                "grooming.beard_unkempt",
                Severity::Moderate,
                RemarkCategory::GroomingBeard,
                BodyZone::Face,
                "beard",
            )
            .issue(format!("The beard looks {}.", state))
            .fix("Trim to an even length and clean up the cheek and neck lines.")
            .why("A sharp beard line does for the face what a pressed collar does for a shirt."),
        );
    }

    let haircut = current(seen.haircut_style.as_deref(), ctx, Attribute::HaircutStyle);
    if let Some(cut) = haircut.filter(|c| contains_any(c, grooming::haircuts_to_avoid(face))) {
        out.push(
            Finding::new(
                Dimension::Grooming,
                "grooming.haircut_face",
                Severity::Moderate,
                RemarkCategory::GroomingHair,
                BodyZone::Head,
                "haircut",
            )
            .issue(format!("A {} works against a {} face.", cut, face))
            .fix(format!(
                "Ask for a {}.",
                grooming::haircuts_recommended(face).join(", or a ")
            ))
            .why("The haircut shapes the face's proportions more than anything you wear."),
        );
    }

    let beard = current(seen.beard_style.as_deref(), ctx, Attribute::BeardStyle);
    if let Some(style) = beard.filter(|b| contains_any(b, grooming::beards_to_avoid(face))) {
        out.push(
            Finding::new(
                Dimension::Grooming,
                "grooming.beard_face",
                Severity::Minor,
                RemarkCategory::GroomingBeard,
                BodyZone::Face,
                "beard shape",
            )
            .issue(format!("A {} beard exaggerates a {} face.", style, face))
            .fix(format!("Consider a {}.", grooming::beards_recommended(face).join(", or a ")))
            .why("Beard shape can add or remove length and width from the jaw."),
        );
    }

    let hair = current(seen.hair_condition.as_deref(), ctx, Attribute::HairCondition);
    if let Some(state) = hair.filter(|h| contains_any(h, grooming::POOR_HAIR_CONDITIONS)) {
        out.push(
            Finding::new(
                Dimension::Grooming,
                "grooming.hair_condition",
                Severity::Minor,
                RemarkCategory::GroomingHair,
                BodyZone::Head,
                "hair condition",
            )
            .issue(format!("Hair looks {}.", state))
            .fix("A little product and a fresh trim will tidy it up.")
            .why("Hair is at eye level; it is noticed before the outfit."),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GroomingVisible, Occasion, OutfitBreakdown, Profile, Season};
    use std::collections::BTreeMap;

    fn profile(pairs: &[(Attribute, &str)]) -> Profile {
        Profile {
            profile_id: Default::default(),
            attributes: pairs.iter().map(|(a, v)| (*a, v.to_string())).collect(),
            confidence_scores: BTreeMap::new(),
            photos_used: 3,
            created_at: chrono::Utc::now(),
            version: 1,
            seasonal_type: Season::Summer,
        }
    }

    fn run(profile: &Profile, breakdown: &OutfitBreakdown) -> Vec<Finding> {
        let ctx = RuleContext {
            profile,
            breakdown,
            occasion: breakdown.occasion_detected,
        };
        let mut out = Vec::new();
        evaluate(&ctx, &mut out);
        out
    }

    #[test]
    fn test_visible_grooming_overrides_profile() {
        let p = profile(&[
            (Attribute::FaceShape, "round"),
            (Attribute::HaircutStyle, "bowl cut"),
        ]);
        let mut breakdown = OutfitBreakdown::new(Occasion::Casual, Vec::new());
        assert_eq!(run(&p, &breakdown).len(), 1);

        breakdown.grooming_visible = GroomingVisible {
            haircut_style: Some("textured quiff".to_string()),
            ..Default::default()
        };
        assert!(run(&p, &breakdown).is_empty());
    }

    #[test]
    fn test_unkempt_beard_and_poor_hair() {
        let p = profile(&[(Attribute::FaceShape, "oval")]);
        let mut breakdown = OutfitBreakdown::new(Occasion::Casual, Vec::new());
        breakdown.grooming_visible.beard_grooming = Some("Unkempt".to_string());
        breakdown.grooming_visible.hair_condition = Some("frizzy".to_string());
        let findings = run(&p, &breakdown);
        let rules: Vec<_> = findings.iter().map(|f| (f.rule_id, f.severity_hint)).collect();
        assert_eq!(
            rules,
            vec![
                ("grooming.beard_unkempt", Severity::Moderate),
                ("grooming.hair_condition", Severity::Minor),
            ]
        );
    }

    #[test]
    fn test_beard_shape_against_face() {
        let p = profile(&[(Attribute::FaceShape, "oblong"), (Attribute::BeardStyle, "goatee")]);
        let findings = run(&p, &OutfitBreakdown::new(Occasion::Casual, Vec::new()));
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].element, "beard shape");
        assert_eq!(findings[0].severity_hint, Severity::Minor);
    }
}
