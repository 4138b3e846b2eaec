//! Footwear rules; evaluated only when the feet are in frame

use super::RuleContext;
use crate::knowledge::{footwear, occasion};
use crate::models::{BodyZone, Dimension, Finding, RemarkCategory, Severity};

pub(super) fn evaluate(ctx: &RuleContext<'_>, out: &mut Vec<Finding>) {
    let shoes = &ctx.breakdown.footwear;
    if !shoes.visible {
        return;
    }
    let occ = ctx.occasion;
    let kind = shoes.kind_or_default();
    let rules = footwear::rules(occ);

    if let Some(forbidden) = footwear::forbidden_entry(kind, occ) {
        let mut finding = Finding::new(
            Dimension::Footwear,
            "footwear.forbidden",
            Severity::Critical,
            RemarkCategory::Footwear,
            BodyZone::Feet,
            kind,
        )
        .issue(format!("{} are not worn at {}.", capitalize(forbidden), occ.label()))
        .fix(format!("Switch to {}.", rules.allowed.join(", ")))
        .why(if rules.notes.is_empty() {
            "Shoes are the first thing people notice when judging formality."
        } else {
            rules.notes
        });
        if let Some(allowed) = rules.allowed.first() {
            finding = finding.acquire(*allowed);
        }
        out.push(finding);
    }

    if let Some(issue) = shoes.issue.as_deref() {
        out.push(
            Finding::new(
                Dimension::Footwear,
                "footwear.vision_issue",
                Severity::Moderate,
                RemarkCategory::Footwear,
                BodyZone::Feet,
                kind,
            )
            .issue(issue)
            .fix(
                shoes
                    .recommended_instead
                    .as_deref()
                    .map(|r| format!("Wear {} instead.", r))
                    .unwrap_or_else(|| format!("Choose from {}.", rules.allowed.join(", "))),
            )
            .why("Footwear finishes the outfit; a mismatch undoes the rest."),
        );
    }

    if !occasion::is_western(occ) {
        return;
    }
    let shoe = kind.to_lowercase();
    for bottom in ctx.bottoms() {
        let trouser = format!(
            "{} {}",
            bottom.garment_type,
            bottom.fit.as_deref().unwrap_or_default()
        );
        let Some(clash) = footwear::forbidden_with_trouser(&trouser)
            .iter()
            .find(|f| shoe.contains(*f))
        else {
            continue;
        };
        out.push(
            Finding::new(
                Dimension::Footwear,
                "footwear.trouser_pairing",
                Severity::Minor,
                RemarkCategory::Footwear,
                BodyZone::Feet,
                format!("{} with {}", kind, bottom.garment_type),
            )
            .issue(format!("{} fight the line of the {}.", capitalize(clash), bottom.garment_type))
            .fix(format!(
                "Pair these trousers with {}.",
                footwear::pairs_with_trouser(&trouser).join(", ")
            ))
            .why("Trouser cut and shoe weight need to agree."),
        );
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
