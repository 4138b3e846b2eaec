//! Occasion and fabric rules

use super::{garment_zone, RuleContext};
use crate::knowledge::occasion::{self, FabricVerdict};
use crate::models::{BodyZone, Dimension, Finding, GarmentItem, Occasion, RemarkCategory, Severity};

/// Occasions whose fabric table is enforced on garments
fn judges_fabric(occ: Occasion) -> bool {
    occasion::is_indian(occ) || occ == Occasion::Party
}

/// Fabric table outcome for a garment, `None` when acceptable or not judged
fn fabric_problem(item: &GarmentItem, occ: Occasion) -> Option<(String, Vec<&'static str>)> {
    if !judges_fabric(occ) {
        return None;
    }
    let fabric = item.fabric.as_deref()?;
    match occasion::fabric_verdict(fabric, occ) {
        FabricVerdict::Suitable => None,
        FabricVerdict::TooCasual { upgrade } => Some((
            format!(
                "{} is too casual a fabric for {}.",
                capitalize_first(fabric),
                occ.label()
            ),
            upgrade,
        )),
        FabricVerdict::Unsuitable { recommended } => Some((
            format!("{} does not suit {}.", capitalize_first(fabric), occ.label()),
            recommended,
        )),
    }
}

pub(super) fn evaluate(ctx: &RuleContext<'_>, out: &mut Vec<Finding>) {
    let occ = ctx.occasion;

    for item in ctx.garments() {
        let problem = fabric_problem(item, occ);
        let acquisition = problem
            .as_ref()
            .and_then(|(_, better)| better.first())
            .map(|fabric| format!("{} {}", fabric, item.garment_type.to_lowercase()));

        if !item.occasion_appropriate {
            // vision flag and fabric rejection together escalate to one critical finding
            let severity = if problem.is_some() {
                Severity::Critical
            } else {
                Severity::Moderate
            };
            let issue = item.issue.clone().unwrap_or_else(|| {
                format!("The {} is not right for {}.", item.garment_type, occ.label())
            });
            let issue = match &problem {
                Some((fabric_issue, _)) => format!("{} {}", issue, fabric_issue),
                None => issue,
            };
            let mut finding = Finding::new(
                Dimension::OccasionFabric,
                "occasion.vision_flag",
                severity,
                RemarkCategory::Occasion,
                garment_zone(item),
                item.garment_type.clone(),
            )
            .issue(issue)
            .fix(item.fix.clone().unwrap_or_else(|| {
                format!("Swap it for a piece made for {}.", occ.label())
            }))
            .why("Dressing to the occasion shows respect for the hosts and the setting.");
            if let Some(item) = acquisition {
                finding = finding.acquire(item);
            }
            out.push(finding);
            continue;
        }

        if let Some((issue, better)) = problem {
            let mut finding = Finding::new(
                Dimension::OccasionFabric,
                "occasion.fabric",
                Severity::Moderate,
                RemarkCategory::Fabric,
                garment_zone(item),
                item.garment_type.clone(),
            )
            .issue(issue)
            .fix(format!("Upgrade to {}.", better.join(" or ")))
            .why("Fabric carries formality; the wrong weave undercuts a good cut.");
            if let Some(item) = acquisition {
                finding = finding.acquire(item);
            }
            out.push(finding);
        }
    }

    for item in ctx.garments() {
        let Some(forbidden) = occasion::garment_forbidden(&item.garment_type, occ) else {
            continue;
        };
        out.push(
            Finding::new(
                Dimension::OccasionFabric,
                "occasion.forbidden_garment",
                Severity::Moderate,
                RemarkCategory::Occasion,
                garment_zone(item),
                item.garment_type.clone(),
            )
            .issue(format!("A {} does not belong at {}.", forbidden, occ.label()))
            .fix(format!("Replace the {} with something dressier.", item.garment_type))
            .why("Some garments read as off-duty no matter how they are styled."),
        );
    }

    for top in ctx.uppers() {
        for bottom in ctx.bottoms() {
            let Some((t, b)) = occasion::invalid_fusion(&top.garment_type, &bottom.garment_type) else {
                continue;
            };
            out.push(
                Finding::new(
                    Dimension::OccasionFabric,
                    "occasion.invalid_fusion",
                    Severity::Moderate,
                    RemarkCategory::Occasion,
                    BodyZone::FullLook,
                    format!("{} with {}", top.garment_type, bottom.garment_type),
                )
                .issue(format!("A {} over {} mixes two dress codes that do not meet.", t, b))
                .fix(format!("Pair the {} with churidar, straight pants or tailored trousers.", top.garment_type))
                .why("Fusion works when both halves share a formality level."),
            );
        }
    }
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GarmentCategory, OutfitBreakdown, Profile, Season};
    use std::collections::BTreeMap;

    fn run(breakdown: &OutfitBreakdown, occ: Occasion) -> Vec<Finding> {
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
            occasion: occ,
        };
        let mut out = Vec::new();
        evaluate(&ctx, &mut out);
        out
    }

    fn cotton_kurta() -> GarmentItem {
        let mut kurta = GarmentItem::new(GarmentCategory::EthnicTop, "kurta", "rust");
        kurta.fabric = Some("plain cotton".to_string());
        kurta
    }

    #[test]
    fn test_cotton_kurta_at_wedding_needs_upgrade() {
        let breakdown = OutfitBreakdown::new(Occasion::IndianCasual, vec![cotton_kurta()]);
        let findings = run(&breakdown, Occasion::WeddingGuestIndian);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].rule_id, "occasion.fabric");
        assert!(findings[0].issue.contains("wedding guest indian"));
        assert_eq!(findings[0].acquisition.as_deref(), Some("chanderi kurta"));
    }

    #[test]
    fn test_same_kurta_is_fine_casually() {
        let breakdown = OutfitBreakdown::new(Occasion::IndianCasual, vec![cotton_kurta()]);
        assert!(run(&breakdown, Occasion::IndianCasual).is_empty());
    }

    #[test]
    fn test_vision_flag_with_bad_fabric_is_critical() {
        let mut kurta = cotton_kurta();
        kurta.occasion_appropriate = false;
        let breakdown = OutfitBreakdown::new(Occasion::IndianCasual, vec![kurta]);
        let findings = run(&breakdown, Occasion::WeddingGuestIndian);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity_hint, Severity::Critical);
        assert!(findings[0].acquisition.is_some());
    }

    #[test]
    fn test_forbidden_garment_and_fusion() {
        let breakdown = OutfitBreakdown::new(
            Occasion::WeddingGuestIndian,
            vec![
                GarmentItem::new(GarmentCategory::EthnicTop, "sherwani", "gold"),
                GarmentItem::new(GarmentCategory::Bottom, "jeans", "navy"),
            ],
        );
        let rules: Vec<_> = run(&breakdown, Occasion::WesternBusinessFormal)
            .iter()
            .map(|f| f.rule_id)
            .collect();
        assert_eq!(rules, vec!["occasion.forbidden_garment", "occasion.invalid_fusion"]);
    }
}
