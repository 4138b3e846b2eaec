//! Body-shape silhouette predicates and length recommendations
//!
//! Each body shape carries a list of declarative checks over the garment
//! list. A check that fires names the offending garment (or `None` for a
//! whole-outfit problem) and supplies the remark text.

use super::color;
use super::contains_any;
use crate::models::{BodyShape, GarmentItem, Height, PatternScale};

/// One avoid predicate for a body shape
pub struct SilhouetteCheck {
    pub rule_id: &'static str,
    /// Returns the index of the offending garment, or `usize::MAX` for the whole look
    pub test: fn(&[GarmentItem]) -> Option<usize>,
    pub issue: &'static str,
    pub fix: &'static str,
    pub why: &'static str,
}

/// Sentinel index for findings about the whole outfit
pub const WHOLE_LOOK: usize = usize::MAX;

fn text(value: &Option<String>) -> String {
    value.as_deref().unwrap_or_default().to_lowercase()
}

fn first_upper(items: &[GarmentItem], pred: impl Fn(&GarmentItem) -> bool) -> Option<usize> {
    items.iter().position(|i| i.category.is_upper() && pred(i))
}

fn first_bottom(items: &[GarmentItem], pred: impl Fn(&GarmentItem) -> bool) -> Option<usize> {
    items.iter().position(|i| i.category.is_bottom() && pred(i))
}

fn is_tight(item: &GarmentItem) -> bool {
    contains_any(&text(&item.fit), &["tight", "skinny"])
}

fn is_clingy(item: &GarmentItem) -> bool {
    contains_any(&text(&item.fabric), &["jersey", "lycra", "spandex"]) || is_tight(item)
}

fn inverted_horizontal_top(items: &[GarmentItem]) -> Option<usize> {
    first_upper(items, |i| text(&i.pattern).contains("horizontal"))
}

fn inverted_shoulder_volume(items: &[GarmentItem]) -> Option<usize> {
    first_upper(items, |i| {
        let detail = format!("{} {}", i.garment_type.to_lowercase(), text(&i.sleeve_type));
        contains_any(&detail, &["shoulder pad", "epaulette", "wide lapel", "puff"])
    })
}

fn inverted_bold_top(items: &[GarmentItem]) -> Option<usize> {
    first_upper(items, |i| text(&i.pattern).contains("bold"))
}

fn oval_crop(items: &[GarmentItem]) -> Option<usize> {
    first_upper(items, |i| {
        i.garment_type.to_lowercase().contains("crop") || text(&i.length).contains("crop")
    })
}

fn oval_clingy_top(items: &[GarmentItem]) -> Option<usize> {
    first_upper(items, is_clingy)
}

fn oval_horizontal(items: &[GarmentItem]) -> Option<usize> {
    first_upper(items, |i| text(&i.pattern).contains("horizontal"))
}

fn triangle_tight_both(items: &[GarmentItem]) -> Option<usize> {
    let top = first_upper(items, is_tight)?;
    first_bottom(items, is_tight).map(|_| top)
}

fn triangle_horizontal_bottom(items: &[GarmentItem]) -> Option<usize> {
    first_bottom(items, |i| text(&i.pattern).contains("horizontal"))
}

fn triangle_wide_bottom_alone(items: &[GarmentItem]) -> Option<usize> {
    if items.iter().any(|i| i.category.is_outer()) {
        return None;
    }
    first_bottom(items, |i| {
        let detail = format!("{} {}", i.garment_type.to_lowercase(), text(&i.fit));
        contains_any(&detail, &["cargo", "wide-leg", "wide leg"])
    })
}

fn rectangle_boxy_top(items: &[GarmentItem]) -> Option<usize> {
    first_upper(items, |i| text(&i.fit).contains("boxy"))
}

fn rectangle_monochrome(items: &[GarmentItem]) -> Option<usize> {
    if items.len() < 2 || items.iter().any(|i| i.garment_type.to_lowercase().contains("belt")) {
        return None;
    }
    let first = &items[0].color;
    items
        .iter()
        .skip(1)
        .all(|i| color::same_color(first, &i.color))
        .then_some(WHOLE_LOOK)
}

fn trapezoid_oversized_both(items: &[GarmentItem]) -> Option<usize> {
    let baggy = |i: &GarmentItem| contains_any(&text(&i.fit), &["oversized", "baggy"]);
    let top = first_upper(items, baggy)?;
    first_bottom(items, baggy).map(|_| top)
}

static INVERTED_TRIANGLE: &[SilhouetteCheck] = &[
    SilhouetteCheck {
        rule_id: "silhouette.inverted_triangle.horizontal_top",
        test: inverted_horizontal_top,
        issue: "Horizontal stripes across the chest widen already broad shoulders.",
        fix: "Switch to vertical stripes or a solid top.",
        why: "Horizontal lines add visual width where the frame is already widest.",
    },
    SilhouetteCheck {
        rule_id: "silhouette.inverted_triangle.shoulder_volume",
        test: inverted_shoulder_volume,
        issue: "Shoulder detailing adds bulk to the widest part of the frame.",
        fix: "Choose natural shoulders and a slimmer lapel.",
        why: "Balance comes from adding volume below the waist, not above it.",
    },
    SilhouetteCheck {
        rule_id: "silhouette.inverted_triangle.bold_top",
        test: inverted_bold_top,
        issue: "A bold pattern on top pulls the eye to the shoulders.",
        fix: "Keep the top plain and move pattern to the trousers.",
        why: "Pattern draws attention; place it where you want width.",
    },
];

static OVAL: &[SilhouetteCheck] = &[
    SilhouetteCheck {
        rule_id: "silhouette.oval.crop",
        test: oval_crop,
        issue: "A cropped top cuts the body at the midsection.",
        fix: "Wear a top that falls below the belt line.",
        why: "Breaking the line at the waist emphasizes the midsection.",
    },
    SilhouetteCheck {
        rule_id: "silhouette.oval.clingy_top",
        test: oval_clingy_top,
        issue: "Clingy fabric traces the midsection.",
        fix: "Choose structured fabrics with a straight drape.",
        why: "Structure skims the body instead of outlining it.",
    },
    SilhouetteCheck {
        rule_id: "silhouette.oval.horizontal",
        test: oval_horizontal,
        issue: "Horizontal stripes widen the torso.",
        fix: "Go for vertical detail or a solid color.",
        why: "Vertical lines lengthen and slim the torso.",
    },
];

static TRIANGLE: &[SilhouetteCheck] = &[
    SilhouetteCheck {
        rule_id: "silhouette.triangle.tight_both",
        test: triangle_tight_both,
        issue: "Tight on top and bottom shows the narrow shoulders against fuller hips.",
        fix: "Keep the trousers tight or the top, not both; add structure at the shoulder.",
        why: "Structure on top balances a wider lower half.",
    },
    SilhouetteCheck {
        rule_id: "silhouette.triangle.horizontal_bottom",
        test: triangle_horizontal_bottom,
        issue: "Horizontal pattern on the trousers widens the hips.",
        fix: "Choose plain, dark trousers.",
        why: "Dark plain bottoms recede and balance the frame.",
    },
    SilhouetteCheck {
        rule_id: "silhouette.triangle.wide_bottom",
        test: triangle_wide_bottom_alone,
        issue: "Volume below the waist with nothing to balance it on top.",
        fix: "Add a structured jacket or overshirt, or switch to a straight leg.",
        why: "An outer layer builds the shoulder line that this frame lacks.",
    },
];

static RECTANGLE: &[SilhouetteCheck] = &[
    SilhouetteCheck {
        rule_id: "silhouette.rectangle.boxy_top",
        test: rectangle_boxy_top,
        issue: "A boxy top erases the waist.",
        fix: "Pick a tapered or slim fit.",
        why: "Shape at the waist creates definition on a straight frame.",
    },
    SilhouetteCheck {
        rule_id: "silhouette.rectangle.monochrome",
        test: rectangle_monochrome,
        issue: "Head-to-toe single color with no break flattens the frame.",
        fix: "Add a belt or contrast layer to break the line.",
        why: "A visual break suggests a waist.",
    },
];

static TRAPEZOID: &[SilhouetteCheck] = &[SilhouetteCheck {
    rule_id: "silhouette.trapezoid.oversized_both",
    test: trapezoid_oversized_both,
    issue: "Oversized on top and bottom hides a naturally balanced frame.",
    fix: "Keep one piece fitted.",
    why: "Double volume reads shapeless.",
}];

pub fn checks(shape: BodyShape) -> &'static [SilhouetteCheck] {
    match shape {
        BodyShape::InvertedTriangle => INVERTED_TRIANGLE,
        BodyShape::Oval => OVAL,
        BodyShape::Triangle => TRIANGLE,
        BodyShape::Rectangle => RECTANGLE,
        BodyShape::Trapezoid => TRAPEZOID,
    }
}

/// Kurta length that suits the body and height
pub fn kurta_length(shape: BodyShape, height: Height) -> &'static str {
    match (height, shape) {
        (Height::Petite, _) => "at or just above hip",
        (_, BodyShape::InvertedTriangle) => "mid-thigh or longer",
        (Height::Tall, _) => "mid-thigh or below",
        (_, BodyShape::Rectangle) => "hip to mid-thigh",
        _ => "mid-thigh",
    }
}

/// Hem lengths that are too long for a petite frame
pub const PETITE_TOO_LONG: &[&str] = &["knee", "calf"];

/// Trouser break recommendation by height
pub fn trouser_break(height: Height) -> &'static str {
    match height {
        Height::Tall => "half break",
        Height::Average => "quarter break",
        Height::Petite => "no break",
    }
}

const BROAD_BUILDS: &[&str] = &["broad", "stocky", "athletic", "heavy"];
const SLIGHT_BUILDS: &[&str] = &["slim", "lean", "thin", "slight"];

/// Print scale that suits a frame
///
/// Petite or slight frames get small prints; only a tall, broad frame
/// carries large ones.
pub fn pattern_scale(build: &str, height: Height) -> PatternScale {
    let build = build.to_lowercase();
    if height == Height::Petite || contains_any(&build, SLIGHT_BUILDS) {
        PatternScale::SmallPrint
    } else if height == Height::Tall && contains_any(&build, BROAD_BUILDS) {
        PatternScale::LargePrint
    } else {
        PatternScale::MediumPrint
    }
}

/// Pattern words that mark a print as large or small in scale
pub const LARGE_PRINT_WORDS: &[&str] = &["large", "oversized", "big", "wide stripe", "jumbo"];
pub const SMALL_PRINT_WORDS: &[&str] = &["micro", "small", "tiny", "ditsy", "pinstripe", "pin dot"];

/// Scale a pattern reading describes, if it says
pub fn print_scale_of(pattern: &str) -> Option<PatternScale> {
    let pattern = pattern.to_lowercase();
    if contains_any(&pattern, LARGE_PRINT_WORDS) {
        Some(PatternScale::LargePrint)
    } else if contains_any(&pattern, SMALL_PRINT_WORDS) {
        Some(PatternScale::SmallPrint)
    } else {
        None
    }
}

/// Relative fit looseness; higher is looser
pub fn fit_rank(fit: &str) -> u8 {
    let fit = fit.to_lowercase();
    if fit.contains("oversized") {
        4
    } else if fit.contains("relaxed") {
        3
    } else if fit.contains("slim") || fit.contains("fitted") {
        1
    } else {
        2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GarmentCategory;

    fn striped_tee() -> GarmentItem {
        let mut tee = GarmentItem::new(GarmentCategory::Top, "t-shirt", "navy");
        tee.pattern = Some("horizontal stripes".to_string());
        tee
    }

    #[test]
    fn test_inverted_triangle_flags_horizontal_top() {
        let items = vec![
            striped_tee(),
            GarmentItem::new(GarmentCategory::Bottom, "chinos", "stone"),
        ];
        let fired: Vec<_> = checks(BodyShape::InvertedTriangle)
            .iter()
            .filter_map(|c| (c.test)(&items).map(|idx| (c.rule_id, idx)))
            .collect();
        assert_eq!(fired, vec![("silhouette.inverted_triangle.horizontal_top", 0)]);
    }

    #[test]
    fn test_horizontal_bottom_is_not_a_top_problem() {
        let mut shorts = GarmentItem::new(GarmentCategory::Bottom, "shorts", "navy");
        shorts.pattern = Some("horizontal stripes".to_string());
        let items = vec![GarmentItem::new(GarmentCategory::Top, "shirt", "white"), shorts];
        assert_eq!(inverted_horizontal_top(&items), None);
        assert_eq!(triangle_horizontal_bottom(&items), Some(1));
    }

    #[test]
    fn test_pattern_scale_follows_frame() {
        assert_eq!(pattern_scale("athletic", Height::Petite), PatternScale::SmallPrint);
        assert_eq!(pattern_scale("Lean", Height::Tall), PatternScale::SmallPrint);
        assert_eq!(pattern_scale("broad", Height::Tall), PatternScale::LargePrint);
        assert_eq!(pattern_scale("broad", Height::Average), PatternScale::MediumPrint);
        assert_eq!(pattern_scale("average", Height::Tall), PatternScale::MediumPrint);
    }

    #[test]
    fn test_print_scale_of() {
        assert_eq!(print_scale_of("Large floral print"), Some(PatternScale::LargePrint));
        assert_eq!(print_scale_of("micro check"), Some(PatternScale::SmallPrint));
        assert_eq!(print_scale_of("navy pinstripe"), Some(PatternScale::SmallPrint));
        assert_eq!(print_scale_of("horizontal stripes"), None);
    }

    #[test]
    fn test_monochrome_broken_by_belt() {
        let mut items = vec![
            GarmentItem::new(GarmentCategory::Top, "shirt", "black"),
            GarmentItem::new(GarmentCategory::Bottom, "trousers", "jet black"),
        ];
        assert_eq!(rectangle_monochrome(&items), Some(WHOLE_LOOK));
        items.push(GarmentItem::new(GarmentCategory::Layer, "leather belt", "brown"));
        assert_eq!(rectangle_monochrome(&items), None);
    }

    #[test]
    fn test_wide_bottom_balanced_by_layer() {
        let mut items = vec![
            GarmentItem::new(GarmentCategory::Top, "t-shirt", "white"),
            GarmentItem::new(GarmentCategory::Bottom, "cargo pants", "olive"),
        ];
        assert_eq!(triangle_wide_bottom_alone(&items), Some(1));
        items.push(GarmentItem::new(GarmentCategory::Outerwear, "overshirt", "navy"));
        assert_eq!(triangle_wide_bottom_alone(&items), None);
    }

    #[test]
    fn test_lengths_and_breaks() {
        assert_eq!(kurta_length(BodyShape::InvertedTriangle, Height::Petite), "at or just above hip");
        assert_eq!(kurta_length(BodyShape::InvertedTriangle, Height::Average), "mid-thigh or longer");
        assert_eq!(kurta_length(BodyShape::Oval, Height::Average), "mid-thigh");
        assert_eq!(trouser_break(Height::Petite), "no break");
    }

    #[test]
    fn test_fit_rank() {
        assert!(fit_rank("Slim Fit") < fit_rank("regular"));
        assert!(fit_rank("relaxed") < fit_rank("oversized"));
    }
}
