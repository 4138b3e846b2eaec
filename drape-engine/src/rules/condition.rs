//! Condition rules for footwear and garments

use super::{garment_zone, RuleContext};
use crate::knowledge::{contains_any, footwear};
use crate::models::{BodyZone, Dimension, Finding, RemarkCategory, Severity};
use crate::synthesis::ranking::is_hard_fail;

/// Wear that is visible but not disqualifying
const SOFT_WEAR: &[&str] = &["worn", "faded", "pilling"];

/// A garment reading worth a remark: any hard-fail keyword or soft wear
fn is_poor_garment(reading: &str) -> bool {
    is_hard_fail(reading) || contains_any(reading, SOFT_WEAR)
}

pub(super) fn evaluate(ctx: &RuleContext<'_>, out: &mut Vec<Finding>) {
    let shoes = &ctx.breakdown.footwear;
    if shoes.visible {
        if let Some(condition) = shoes.condition.as_deref() {
            let grade = footwear::grade_condition(condition);
            if let Some(severity) = grade.severity {
                out.push(
                    Finding::new(
                        Dimension::Condition,
                        "condition.footwear",
                        severity,
                        RemarkCategory::Condition,
                        BodyZone::Feet,
                        shoes.kind_or_default(),
                    )
                    .issue(grade.issue)
                    .fix(grade.care_note)
                    .why("People read shoe care as a proxy for attention to detail.")
                    .condition(condition),
                );
            }
        }
    }

    for item in ctx.garments() {
        let Some(condition) = item.condition.as_deref() else {
            continue;
        };
        let reading = condition.to_lowercase();
        if !is_poor_garment(&reading) {
            continue;
        }
        out.push(
            Finding::new(
                Dimension::Condition,
                "condition.garment",
                Severity::Moderate,
                RemarkCategory::Condition,
                garment_zone(item),
                item.garment_type.clone(),
            )
            .issue(format!("The {} looks {}.", item.garment_type, reading))
            .fix("Repair or retire it; condition shows before cut or color does.")
            .why("Visible wear makes even a well-chosen outfit look careless.")
            .condition(condition),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        FootwearAnalysis, GarmentCategory, GarmentItem, Occasion, OutfitBreakdown, Profile, Season,
    };
    use std::collections::BTreeMap;

    fn run(breakdown: &OutfitBreakdown) -> Vec<Finding> {
        let profile = Profile {
            profile_id: Default::default(),
            attributes: BTreeMap::new(),
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

    #[test]
    fn test_footwear_condition_carries_tag() {
        let mut breakdown = OutfitBreakdown::new(Occasion::Casual, Vec::new());
        breakdown.footwear = FootwearAnalysis {
            visible: true,
            kind: Some("sneakers".to_string()),
            condition: Some("sole peeling".to_string()),
            ..Default::default()
        };
        let findings = run(&breakdown);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity_hint, Severity::Critical);
        assert_eq!(findings[0].condition.as_deref(), Some("sole peeling"));
        assert_eq!(findings[0].body_zone, BodyZone::Feet);
    }

    #[test]
    fn test_clean_footwear_and_garments_pass() {
        let mut shirt = GarmentItem::new(GarmentCategory::Top, "shirt", "white");
        shirt.condition = Some("good".to_string());
        let mut breakdown = OutfitBreakdown::new(Occasion::Casual, vec![shirt]);
        breakdown.footwear = FootwearAnalysis {
            visible: true,
            condition: Some("polished".to_string()),
            ..Default::default()
        };
        assert!(run(&breakdown).is_empty());
    }

    #[test]
    fn test_faded_garment_is_moderate() {
        let mut tee = GarmentItem::new(GarmentCategory::Top, "t-shirt", "black");
        tee.condition = Some("Faded".to_string());
        let findings = run(&OutfitBreakdown::new(Occasion::Casual, vec![tee]));
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity_hint, Severity::Moderate);
        assert_eq!(findings[0].body_zone, BodyZone::UpperBody);
    }

    #[test]
    fn test_hard_fail_garment_readings_are_flagged() {
        for reading in ["visibly dirty", "paint peeling at the hem", "small hole", "coffee stain"] {
            let mut shirt = GarmentItem::new(GarmentCategory::Top, "shirt", "white");
            shirt.condition = Some(reading.to_string());
            let findings = run(&OutfitBreakdown::new(Occasion::Casual, vec![shirt]));
            assert_eq!(findings.len(), 1, "{} should be flagged", reading);
            assert_eq!(findings[0].rule_id, "condition.garment");
            assert_eq!(findings[0].condition.as_deref(), Some(reading));
        }
    }
}
