//! Rule evaluator
//!
//! Evaluates a profile and an outfit breakdown against the knowledge base
//! and emits raw findings. Stages run in a fixed order and each appends to
//! the same list, so the output order is deterministic:
//!
//! occasion mismatch → color → silhouette → occasion/fabric → accessory →
//! footwear → condition → grooming
//!
//! Every occasion-conditioned lookup uses the authoritative occasion.

mod accessory;
mod color;
mod condition;
mod footwear;
mod grooming;
mod occasion;
mod silhouette;

use tracing::debug;

use crate::models::{
    BodyZone, Dimension, Finding, GarmentItem, Occasion, OutfitBreakdown, Profile, RemarkCategory,
    Severity,
};

/// Inputs shared by every rule stage
pub struct RuleContext<'a> {
    pub profile: &'a Profile,
    pub breakdown: &'a OutfitBreakdown,
    /// Authoritative occasion
    pub occasion: Occasion,
}

impl RuleContext<'_> {
    pub fn garments(&self) -> &[GarmentItem] {
        &self.breakdown.items
    }

    pub fn bottoms(&self) -> impl Iterator<Item = &GarmentItem> {
        self.breakdown.items.iter().filter(|i| i.category.is_bottom())
    }

    pub fn uppers(&self) -> impl Iterator<Item = &GarmentItem> {
        self.breakdown.items.iter().filter(|i| i.category.is_upper())
    }
}

/// Body zone a garment sits in
pub fn garment_zone(item: &GarmentItem) -> BodyZone {
    if item.category.is_upper() {
        BodyZone::UpperBody
    } else {
        BodyZone::LowerBody
    }
}

/// Evaluate every rule stage and return the findings in stage order
///
/// `occasion` is the caller's requested occasion; when `None` the breakdown's
/// own request, then its detected occasion, is used.
pub fn evaluate(
    profile: &Profile,
    breakdown: &OutfitBreakdown,
    occasion: Option<Occasion>,
) -> Vec<Finding> {
    let requested = occasion.or(breakdown.occasion_requested);
    let ctx = RuleContext {
        profile,
        breakdown,
        occasion: breakdown.authoritative_occasion(requested),
    };

    let mut findings = Vec::new();
    if let Some(requested) = requested {
        if requested != breakdown.occasion_detected {
            findings.push(mismatch(breakdown.occasion_detected, requested));
        }
    }

    let stages: [(&str, fn(&RuleContext<'_>, &mut Vec<Finding>)); 7] = [
        ("color", color::evaluate),
        ("silhouette", silhouette::evaluate),
        ("occasion", occasion::evaluate),
        ("accessory", accessory::evaluate),
        ("footwear", footwear::evaluate),
        ("condition", condition::evaluate),
        ("grooming", grooming::evaluate),
    ];
    for (name, stage) in stages {
        let before = findings.len();
        stage(&ctx, &mut findings);
        debug!(stage = name, findings = findings.len() - before, "Rule stage evaluated");
    }

    if !breakdown.footwear.visible {
        findings.retain(|f| f.body_zone != BodyZone::Feet);
    }
    findings
}

fn mismatch(detected: Occasion, requested: Occasion) -> Finding {
    Finding::new(
        Dimension::OccasionFabric,
        "occasion.mismatch",
        Severity::Critical,
        RemarkCategory::Occasion,
        BodyZone::FullLook,
        "outfit",
    )
    .issue(format!(
        "This outfit reads as {}, but you are dressing for {}.",
        detected.label(),
        requested.label()
    ))
    .fix(format!("Rebuild the look around {} staples.", requested.label()))
    .why("The occasion sets the baseline every other choice is judged against.")
}
