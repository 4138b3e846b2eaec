//! Color rules: undertone avoid list, vision clash flag, clash pairs

use super::{garment_zone, RuleContext};
use crate::knowledge::color;
use crate::models::{BodyZone, Dimension, Finding, RemarkCategory, Severity};

/// One colored thing being worn
struct Worn<'a> {
    element: &'a str,
    color: &'a str,
    zone: BodyZone,
}

pub(super) fn evaluate(ctx: &RuleContext<'_>, out: &mut Vec<Finding>) {
    let undertone = ctx.profile.undertone();
    let palette = color::palette(undertone);

    let mut worn: Vec<Worn<'_>> = ctx
        .garments()
        .iter()
        .map(|i| Worn {
            element: &i.garment_type,
            color: &i.color,
            zone: garment_zone(i),
        })
        .collect();
    worn.extend(ctx.breakdown.accessories.iter().filter_map(|a| {
        a.color.as_deref().map(|c| Worn {
            element: &a.kind,
            color: c,
            zone: BodyZone::FullLook,
        })
    }));

    let suggestions = palette.do_colors.iter().take(3).copied().collect::<Vec<_>>().join(", ");
    for item in &worn {
        if !color::is_avoided(undertone, item.color) {
            continue;
        }
        out.push(
            Finding::new(
                Dimension::Color,
                "color.undertone_avoid",
                Severity::Critical,
                RemarkCategory::Color,
                item.zone,
                item.element,
            )
            .issue(format!(
                "{} {} works against your {} undertone.",
                capitalize(item.color),
                item.element,
                undertone.as_str().replace('_', " ")
            ))
            .fix(format!("Swap it for {}.", suggestions))
            .why("Colors outside your undertone wash out the complexion and make skin look dull.")
            .colors([item.color]),
        );
    }

    if ctx.breakdown.color_assessment.clash_detected {
        let harmony = ctx
            .breakdown
            .color_assessment
            .overall_harmony
            .as_deref()
            .unwrap_or("The colors compete with each other.");
        out.push(
            Finding::new(
                Dimension::Color,
                "color.vision_clash",
                Severity::Moderate,
                RemarkCategory::Color,
                BodyZone::FullLook,
                "color combination",
            )
            .issue(harmony)
            .fix("Anchor the look with one neutral and keep a single accent color.")
            .why("A clear color story reads as intentional."),
        );
    }

    for (i, a) in worn.iter().enumerate() {
        for b in worn.iter().skip(i + 1) {
            let Some((x, y)) = color::clash_between(a.color, b.color) else {
                continue;
            };
            out.push(
                Finding::new(
                    Dimension::Color,
                    "color.clash_pair",
                    Severity::Critical,
                    RemarkCategory::Color,
                    BodyZone::FullLook,
                    format!("{} and {}", a.element, b.element),
                )
                .issue(format!(
                    "{} {} against {} {} is a known clash ({} with {}).",
                    capitalize(a.color),
                    a.element,
                    b.color,
                    b.element,
                    x,
                    y
                ))
                .fix(format!("Replace one of them with a neutral such as {}.", suggestions))
                .why("Clashing hues fight for attention and cheapen the whole outfit."),
            );
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
