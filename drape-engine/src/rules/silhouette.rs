//! Silhouette rules: body-shape predicates, kurta length, trouser break,
//! layering order and collar/face fit

use super::{garment_zone, RuleContext};
use crate::knowledge::{body, contains_any, occasion};
use crate::models::{BodyZone, Dimension, Finding, Height, PatternScale, RemarkCategory, Severity};

pub(super) fn evaluate(ctx: &RuleContext<'_>, out: &mut Vec<Finding>) {
    body_shape(ctx, out);
    pattern_scale(ctx, out);
    if occasion::is_indian(ctx.occasion) {
        kurta_length(ctx, out);
    }
    if occasion::is_western(ctx.occasion) {
        trouser_break(ctx, out);
        layering(ctx, out);
    }
    collars(ctx, out);
}

fn body_shape(ctx: &RuleContext<'_>, out: &mut Vec<Finding>) {
    let shape = ctx.profile.body_shape();
    let items = ctx.garments();
    for check in body::checks(shape) {
        let Some(idx) = (check.test)(items) else {
            continue;
        };
        let (zone, element) = match items.get(idx) {
            Some(item) if idx != body::WHOLE_LOOK => (garment_zone(item), item.garment_type.clone()),
            _ => (BodyZone::FullLook, "outfit silhouette".to_string()),
        };
        out.push(
            Finding::new(
                Dimension::Silhouette,
                check.rule_id,
                Severity::Moderate,
                RemarkCategory::Proportion,
                zone,
                element,
            )
            .issue(check.issue)
            .fix(check.fix)
            .why(check.why),
        );
    }
}

/// Prints whose scale is at the far end from what the frame carries
fn pattern_scale(ctx: &RuleContext<'_>, out: &mut Vec<Finding>) {
    let suited = body::pattern_scale(ctx.profile.build(), ctx.profile.height());
    for item in ctx.garments() {
        let Some(worn) = item.pattern.as_deref().and_then(body::print_scale_of) else {
            continue;
        };
        let (issue, fix) = match (suited, worn) {
            (PatternScale::SmallPrint, PatternScale::LargePrint) => (
                "A large print overwhelms your frame.",
                "Choose a small or medium print.",
            ),
            (PatternScale::LargePrint, PatternScale::SmallPrint) => (
                "A tiny print reads as flat texture on your frame.",
                "Step up to a medium or large print.",
            ),
            _ => continue,
        };
        out.push(
            Finding::new(
                Dimension::Silhouette,
                "silhouette.pattern_scale",
                Severity::Minor,
                RemarkCategory::Proportion,
                garment_zone(item),
                item.garment_type.clone(),
            )
            .issue(format!("{} ({})", issue, item.pattern.as_deref().unwrap_or_default()))
            .fix(fix)
            .why("Print scale should match body scale."),
        );
    }
}

fn kurta_length(ctx: &RuleContext<'_>, out: &mut Vec<Finding>) {
    let height = ctx.profile.height();
    let recommended = body::kurta_length(ctx.profile.body_shape(), height);
    for item in ctx.uppers() {
        if !item.garment_type.to_lowercase().contains("kurta") {
            continue;
        }
        let Some(length) = item.length.as_deref().map(str::to_lowercase) else {
            continue;
        };
        let too_short = recommended.starts_with("mid-thigh")
            && length.contains("hip")
            && !length.contains("thigh");
        let too_long = height == Height::Petite && contains_any(&length, body::PETITE_TOO_LONG);
        if !(too_short || too_long) {
            continue;
        }
        out.push(
            Finding::new(
                Dimension::Silhouette,
                "silhouette.kurta_length",
                Severity::Moderate,
                RemarkCategory::Length,
                garment_zone(item),
                item.garment_type.clone(),
            )
            .issue(format!("A {}-length kurta is off for your frame.", length))
            .fix(format!("Choose a kurta that falls {}.", recommended))
            .why("Kurta length sets where the eye divides the body."),
        );
    }
}

fn trouser_break(ctx: &RuleContext<'_>, out: &mut Vec<Finding>) {
    let recommended = body::trouser_break(ctx.profile.height());
    for item in ctx.bottoms() {
        let length = item.length.as_deref().unwrap_or_default().to_lowercase();
        if !length.contains("full break") {
            continue;
        }
        out.push(
            Finding::new(
                Dimension::Silhouette,
                "silhouette.trouser_break",
                Severity::Minor,
                RemarkCategory::Length,
                garment_zone(item),
                item.garment_type.clone(),
            )
            .issue("Fabric pooling at the ankle shortens the leg line.")
            .fix(format!("Have the hem taken up to a {}.", recommended))
            .why("A clean break keeps the leg looking long."),
        );
    }
}

/// At most one layering finding per outfit
fn layering(ctx: &RuleContext<'_>, out: &mut Vec<Finding>) {
    let items = ctx.garments();
    let bases: Vec<_> = items.iter().filter(|i| i.category.is_base()).collect();
    for outer in items.iter().filter(|i| i.category.is_outer()) {
        let outer_weight = occasion::fabric_weight(outer.fabric.as_deref());
        let outer_fit = body::fit_rank(outer.fit.as_deref().unwrap_or_default());
        for base in &bases {
            let lighter = outer_weight < occasion::fabric_weight(base.fabric.as_deref());
            let slimmer = outer_fit < body::fit_rank(base.fit.as_deref().unwrap_or_default());
            if !(lighter || slimmer) {
                continue;
            }
            let issue = if lighter {
                format!("The {} is lighter than the {} under it.", outer.garment_type, base.garment_type)
            } else {
                format!("The {} fits closer than the {} under it.", outer.garment_type, base.garment_type)
            };
            out.push(
                Finding::new(
                    Dimension::Silhouette,
                    "silhouette.layering_order",
                    Severity::Minor,
                    RemarkCategory::Layering,
                    garment_zone(outer),
                    outer.garment_type.clone(),
                )
                .issue(issue)
                .fix("Layer light to heavy and fitted to relaxed, from the inside out.")
                .why("Outer layers should drape over what they cover, not cling to it."),
            );
            return;
        }
    }
}

fn collars(ctx: &RuleContext<'_>, out: &mut Vec<Finding>) {
    let face = ctx.profile.face_shape();
    let indian = occasion::is_indian(ctx.occasion);
    for item in ctx.uppers() {
        let Some(collar) = item.collar() else {
            continue;
        };
        let Some(better) = occasion::collar_alternatives(collar, face, indian) else {
            continue;
        };
        if better.is_empty() {
            continue;
        }
        let collar = collar.to_lowercase();
        let element = if collar.contains("collar") {
            collar.clone()
        } else {
            format!("{} collar", collar)
        };
        out.push(
            Finding::new(
                Dimension::Silhouette,
                "silhouette.collar_face",
                Severity::Minor,
                RemarkCategory::Fit,
                BodyZone::Neck,
                element,
            )
            .issue(format!("A {} collar exaggerates a {} face.", collar, face))
            .fix(format!("Try a {} instead.", better.join(" or ")))
            .why("The collar frames the face; its lines should balance the face shape."),
        );
    }
}
