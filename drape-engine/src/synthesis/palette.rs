//! Color palette assembly

use crate::knowledge::{color, occasion};
use crate::models::{ColorPalette, Finding, Occasion, Undertone};

/// Palette for the undertone, minus colors the outfit wore wrongly
///
/// `do` drops anything semantically equal to a worn-and-wrong color;
/// `occasion` keeps the remaining `do` entries the occasion traditionally wears.
pub fn build(undertone: Undertone, occ: Occasion, findings: &[Finding]) -> ColorPalette {
    let table = color::palette(undertone);
    let flagged: Vec<&str> = findings
        .iter()
        .flat_map(|f| f.colors.iter().map(String::as_str))
        .collect();

    let do_colors: Vec<String> = table
        .do_colors
        .iter()
        .filter(|c| !flagged.iter().any(|w| color::same_color(c, w)))
        .map(|c| c.to_string())
        .collect();

    let traditional = occasion::traditional_colors(occ);
    let occasion_colors = do_colors
        .iter()
        .filter(|c| color::matches_any(c, traditional))
        .cloned()
        .collect();

    ColorPalette {
        do_colors,
        avoid_colors: table.avoid.iter().map(|c| c.to_string()).collect(),
        occasion_colors,
    }
}
