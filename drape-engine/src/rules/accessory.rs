//! Accessory rules

use super::RuleContext;
use crate::knowledge::accessory::{self as table, BELTLESS_GARMENTS, CASUAL_STRAP_MATERIALS, MAX_RINGS};
use crate::knowledge::{color, contains_any, occasion};
use crate::models::{AccessoryItem, BodyZone, Dimension, Finding, RemarkCategory, Severity};

/// Color families that belts and leather shoes come in
const LEATHER_FAMILIES: &[&str] = &["black", "brown", "burgundy", "beige"];

fn finding(rule_id: &'static str, severity: Severity, element: impl Into<String>) -> Finding {
    Finding::new(
        Dimension::Accessory,
        rule_id,
        severity,
        RemarkCategory::Accessory,
        BodyZone::FullLook,
        element,
    )
}

fn lower(value: &Option<String>) -> String {
    value.as_deref().unwrap_or_default().to_lowercase()
}

fn is_ring(a: &AccessoryItem) -> bool {
    let kind = a.kind.to_lowercase();
    kind.contains("ring") && !kind.contains("earring")
}

pub(super) fn evaluate(ctx: &RuleContext<'_>, out: &mut Vec<Finding>) {
    let occ = ctx.occasion;
    let accessories = &ctx.breakdown.accessories;
    let formal = occasion::is_formal(occ);

    for a in accessories {
        let kind = a.kind.to_lowercase();

        if formal && kind.contains("watch") && contains_any(&lower(&a.material), CASUAL_STRAP_MATERIALS) {
            out.push(
                finding("accessory.watch_strap", Severity::Moderate, a.kind.clone())
                    .issue(format!("A {} strap reads sporty at {}.", lower(&a.material), occ.label()))
                    .fix("Wear a leather or metal strap dress watch.")
                    .why("The watch is often the only jewelry; it sets the formality of the wrist.")
                    .acquire("dress watch"),
            );
        }

        if (kind.contains("backpack") || kind.contains("jhola")) && !table::bag_allowed(&kind, occ) {
            out.push(
                finding("accessory.bag", Severity::Moderate, a.kind.clone())
                    .issue(format!("A {} is out of place at {}.", kind, occ.label()))
                    .fix("Carry a leather messenger or briefcase instead.")
                    .why("Bags are read as part of the outfit, not luggage."),
            );
        }

        if kind.contains("belt") {
            if let Some(garment) = ctx
                .garments()
                .iter()
                .find(|g| contains_any(&g.garment_type.to_lowercase(), BELTLESS_GARMENTS))
            {
                out.push(
                    finding("accessory.belt_with_ethnic", Severity::Moderate, a.kind.clone())
                        .issue(format!("A belt breaks the line of the {}.", garment.garment_type))
                        .fix("Remove the belt; the garment is designed to fall uninterrupted.")
                        .why("Structured ethnic garments carry their own waist shaping."),
                );
            }
        }

        if kind.contains("sunglass") {
            let frame = format!("{} {}", lower(&a.style), kind);
            let face = ctx.profile.face_shape();
            if contains_any(&frame, table::frames_to_avoid(face)) {
                out.push(
                    finding("accessory.sunglasses_frame", Severity::Minor, a.kind.clone())
                        .issue(format!("These frames repeat the lines of a {} face.", face))
                        .fix(format!("Try {} frames.", table::frames_recommended(face).join(", ")))
                        .why("Frames should contrast the face shape, not echo it."),
                );
            }
        }

        if !a.occasion_appropriate {
            out.push(
                finding("accessory.vision_flag", Severity::Moderate, a.kind.clone())
                    .issue(a.issue.clone().unwrap_or_else(|| {
                        format!("The {} does not suit {}.", a.kind, occ.label())
                    }))
                    .fix(a.fix.clone().unwrap_or_else(|| "Leave it at home for this one.".to_string()))
                    .why("Accessories should support the outfit's register."),
            );
        }
    }

    let rings = accessories.iter().filter(|a| is_ring(a)).count();
    if rings > MAX_RINGS {
        out.push(
            finding("accessory.ring_count", Severity::Minor, "rings")
                .issue(format!("{} rings crowd the hands.", rings))
                .fix(format!("Keep it to {} at most.", MAX_RINGS))
                .why("Fewer, better pieces look deliberate."),
        );
    }

    belt_shoe_match(ctx, out);

    let missing: Vec<&str> = table::essentials(occ)
        .iter()
        .copied()
        .filter(|essential| !accessories.iter().any(|a| table::covers(&a.kind, essential)))
        .take(2)
        .collect();
    let severity = if formal { Severity::Moderate } else { Severity::Minor };
    for essential in missing {
        out.push(
            finding("accessory.missing_essential", severity, essential)
                .issue(format!("No {} for {}.", essential, occ.label()))
                .fix(format!("Add a {}.", essential))
                .why("Finishing pieces are what separate dressed from dressed up.")
                .acquire(essential),
        );
    }
}

fn belt_shoe_match(ctx: &RuleContext<'_>, out: &mut Vec<Finding>) {
    let footwear = &ctx.breakdown.footwear;
    if !footwear.visible {
        return;
    }
    let Some(shoe_color) = footwear.color.as_deref() else {
        return;
    };
    let Some(belt_color) = ctx
        .breakdown
        .accessories
        .iter()
        .find(|a| a.kind.to_lowercase().contains("belt"))
        .and_then(|a| a.color.as_deref())
    else {
        return;
    };
    let leather = |c: &str| {
        color::family(&color::normalize_color(c))
            .map(|f| LEATHER_FAMILIES.contains(&f))
            .unwrap_or(false)
    };
    if !leather(shoe_color) || !leather(belt_color) || color::same_color(shoe_color, belt_color) {
        return;
    }
    out.push(
        finding("accessory.belt_shoe_match", Severity::Minor, "belt and shoes")
            .issue(format!("A {} belt with {} shoes splits the leathers.", belt_color, shoe_color))
            .fix("Match the belt to the shoes.")
            .why("Matched leathers tie the top and bottom of the outfit together."),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GarmentCategory, GarmentItem, Occasion, OutfitBreakdown, Profile, Season};
    use std::collections::BTreeMap;

    fn run(breakdown: &OutfitBreakdown) -> Vec<Finding> {
        let profile = Profile {
            profile_id: Default::default(),
            attributes: BTreeMap::from([(crate::models::Attribute::FaceShape, "round".to_string())]),
            confidence_scores: BTreeMap::new(),
            photos_used: 3,
            created_at: chrono::Utc::now(),
            version: 1,
            seasonal_type: Season::Summer,
        };
        let ctx = RuleContext {
            profile: &profile,
            breakdown,
            occasion: breakdown.occasion_detected,
        };
        let mut out = Vec::new();
        evaluate(&ctx, &mut out);
        out
    }

    fn shirt() -> GarmentItem {
        GarmentItem::new(GarmentCategory::Top, "shirt", "white")
    }

    #[test]
    fn test_missing_essentials_at_formal() {
        let breakdown = OutfitBreakdown::new(Occasion::WesternBusinessFormal, vec![shirt()]);
        let findings = run(&breakdown);
        let missing: Vec<_> = findings.iter().map(|f| f.element.as_str()).collect();
        assert_eq!(missing, vec!["pocket square", "dress watch"]);
        assert!(findings.iter().all(|f| f.severity_hint == Severity::Moderate));
        assert_eq!(findings[1].acquisition.as_deref(), Some("dress watch"));
    }

    #[test]
    fn test_rubber_strap_at_formal() {
        let mut breakdown = OutfitBreakdown::new(Occasion::WesternBusinessFormal, vec![shirt()]);
        let mut watch = AccessoryItem::new("watch");
        watch.material = Some("Rubber".to_string());
        breakdown.accessories.push(watch);
        let mut square = AccessoryItem::new("pocket square");
        square.color = Some("navy".to_string());
        breakdown.accessories.push(square);
        let findings = run(&breakdown);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].rule_id, "accessory.watch_strap");
    }

    #[test]
    fn test_rings_frames_and_belt() {
        let mut breakdown = OutfitBreakdown::new(
            Occasion::Casual,
            vec![GarmentItem::new(GarmentCategory::EthnicTop, "sherwani", "gold")],
        );
        for _ in 0..3 {
            breakdown.accessories.push(AccessoryItem::new("ring"));
        }
        let mut shades = AccessoryItem::new("sunglasses");
        shades.style = Some("round frames".to_string());
        breakdown.accessories.push(shades);
        breakdown.accessories.push(AccessoryItem::new("belt"));

        let rules: Vec<_> = run(&breakdown).iter().map(|f| f.rule_id).collect();
        assert_eq!(
            rules,
            vec!["accessory.sunglasses_frame", "accessory.belt_with_ethnic", "accessory.ring_count"]
        );
    }

    #[test]
    fn test_belt_shoe_mismatch() {
        let mut breakdown = OutfitBreakdown::new(Occasion::Casual, vec![shirt()]);
        let mut belt = AccessoryItem::new("belt");
        belt.color = Some("black".to_string());
        breakdown.accessories.push(belt);
        breakdown.footwear.visible = true;
        breakdown.footwear.color = Some("cognac".to_string());
        let findings = run(&breakdown);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].element, "belt and shoes");

        breakdown.footwear.color = Some("white".to_string());
        assert!(run(&breakdown).is_empty());
    }
}
