//! Color compatibility by undertone
//!
//! Colors are compared semantically: two names match when they are the same
//! after normalization or belong to the same color family. "ivory" and
//! "icy white" are one family; "cream" is a separate, warmer one.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::models::Undertone;

/// Do/avoid lists for one undertone
#[derive(Debug)]
pub struct UndertonePalette {
    pub undertone: Undertone,
    pub do_colors: &'static [&'static str],
    pub avoid: &'static [&'static str],
}

static PALETTES: [UndertonePalette; 6] = [
    UndertonePalette {
        undertone: Undertone::Warm,
        do_colors: &[
            "rust", "terracotta", "camel", "warm beige", "mustard", "peach", "coral", "warm red",
            "burnt orange", "olive green", "warm brown", "cream", "gold",
        ],
        avoid: &["cool grey", "icy white", "lavender", "cobalt blue", "cool pink", "silver"],
    },
    UndertonePalette {
        undertone: Undertone::Cool,
        do_colors: &[
            "navy", "burgundy", "cool grey", "emerald", "cobalt", "cool white", "rose", "mauve",
            "icy blue", "charcoal", "silver", "cool teal",
        ],
        avoid: &["warm yellows", "orange", "rust", "warm beige", "gold"],
    },
    UndertonePalette {
        undertone: Undertone::Neutral,
        do_colors: &[
            "muted rust", "muted navy", "soft grey", "dusty rose", "warm taupe", "desaturated teal",
            "soft burgundy", "stone", "sage", "blush",
        ],
        avoid: &["neon yellow", "neon orange", "electric blue", "hot pink"],
    },
    UndertonePalette {
        undertone: Undertone::DeepWarm,
        do_colors: &[
            "sapphire", "emerald", "deep burgundy", "royal purple", "warm earth tones", "gold",
            "rust", "deep teal", "forest green", "rich burgundy",
        ],
        avoid: &[
            "pastel pink", "pastel yellow", "pastel blue", "pastel lavender", "neon",
            "very light neutrals", "cream",
        ],
    },
    UndertonePalette {
        undertone: Undertone::DeepCool,
        do_colors: &[
            "jewel tones", "cobalt blue", "fuchsia", "royal purple", "silver", "cool emerald",
            "icy white", "deep teal", "charcoal",
        ],
        avoid: &["rust", "warm earth tones", "gold", "warm orange", "camel"],
    },
    UndertonePalette {
        undertone: Undertone::OliveWarm,
        do_colors: &[
            "warm earth tones", "muted greens", "warm tans", "terracotta", "deep blues", "mustard",
            "rust", "forest green", "warm navy",
        ],
        avoid: &["nude beige", "cool pastels", "stark white", "icy pink"],
    },
];

/// Color families; a name belongs to at most one
static FAMILIES: &[(&str, &[&str])] = &[
    ("white", &["white", "icy white", "ivory", "stark white", "cool white", "optic white", "snow white", "pure white"]),
    ("cream", &["cream", "warm cream", "ecru", "off white", "eggshell", "vanilla"]),
    ("beige", &["beige", "warm beige", "sand", "khaki", "tan", "warm tan", "warm tans", "camel", "biscuit", "fawn"]),
    ("taupe", &["taupe", "warm taupe", "stone", "greige", "mushroom"]),
    ("grey", &["grey", "gray", "cool grey", "cool gray", "soft grey", "light grey", "slate", "ash grey", "heather grey"]),
    ("charcoal", &["charcoal", "charcoal grey", "graphite", "dark grey", "dark gray"]),
    ("silver", &["silver", "metallic silver", "chrome"]),
    ("gold", &["gold", "golden", "antique gold", "metallic gold", "brass"]),
    ("rust", &["rust", "burnt orange", "copper", "muted rust"]),
    ("terracotta", &["terracotta", "brick", "clay"]),
    ("orange", &["orange", "warm orange", "tangerine"]),
    ("yellow", &["yellow", "warm yellow", "warm yellows", "mustard", "mustard yellow", "ochre"]),
    ("coral", &["coral", "peach", "salmon", "apricot"]),
    ("red", &["red", "warm red", "cherry", "crimson", "scarlet", "tomato red"]),
    ("burgundy", &["burgundy", "maroon", "wine", "oxblood", "deep burgundy", "rich burgundy", "soft burgundy"]),
    ("pink", &["pink", "cool pink", "rose", "dusty rose", "blush", "icy pink", "baby pink"]),
    ("fuchsia", &["fuchsia", "hot pink", "magenta"]),
    ("lavender", &["lavender", "lilac", "mauve"]),
    ("purple", &["purple", "royal purple", "plum", "violet", "aubergine"]),
    ("navy", &["navy", "navy blue", "midnight blue", "muted navy", "warm navy", "dark blue", "deep blues", "indigo"]),
    ("blue", &["blue", "cobalt", "cobalt blue", "royal blue", "sapphire", "electric blue"]),
    ("light_blue", &["icy blue", "light blue", "sky blue", "powder blue", "baby blue"]),
    ("teal", &["teal", "cool teal", "deep teal", "desaturated teal", "petrol"]),
    ("emerald", &["emerald", "cool emerald", "bottle green", "jewel green"]),
    ("forest", &["forest green", "hunter green", "dark green"]),
    ("olive", &["olive", "olive green", "army green", "muted greens"]),
    ("sage", &["sage", "sage green"]),
    ("green", &["green", "kelly green", "bright green", "grass green"]),
    ("brown", &["brown", "warm brown", "chocolate", "coffee", "chestnut", "warm earth tones", "earth tones", "cognac"]),
    ("pastel", &["pastel", "pastel pink", "pastel yellow", "pastel blue", "pastel lavender", "pastel green", "cool pastels", "mint"]),
    ("neon", &["neon", "neon yellow", "neon orange", "neon pink", "neon green"]),
    ("black", &["black", "jet black"]),
];

/// Shade words that can be dropped without changing the family
const SHADE_MODIFIERS: &[&str] = &[
    "light", "dark", "deep", "pale", "muted", "soft", "bright", "rich", "dusty", "faded", "washed",
];

static FAMILY_INDEX: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut index = HashMap::new();
    for (family, members) in FAMILIES {
        for member in *members {
            index.insert(*member, *family);
        }
    }
    index
});

/// Pairs that clash when worn together
pub const CLASH_PAIRS: &[(&str, &str)] = &[
    ("rust", "cool grey"),
    ("terracotta", "cobalt blue"),
    ("mustard", "lavender"),
    ("orange", "pink"),
    ("red", "green"),
    ("yellow", "purple"),
    ("icy white", "warm beige"),
    ("neon yellow", "neon pink"),
    ("royal purple", "warm orange"),
];

pub fn palette(undertone: Undertone) -> &'static UndertonePalette {
    PALETTES
        .iter()
        .find(|p| p.undertone == undertone)
        .unwrap_or(&PALETTES[2])
}

/// Lowercase, treat '-' and '_' as spaces, collapse whitespace
pub fn normalize_color(raw: &str) -> String {
    raw.to_lowercase()
        .replace(['-', '_'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn strip_shade(color: &str) -> Option<&str> {
    let (first, rest) = color.split_once(' ')?;
    SHADE_MODIFIERS.contains(&first).then_some(rest)
}

/// Family of a normalized color name, retrying once without a leading shade word
pub fn family(color: &str) -> Option<&'static str> {
    FAMILY_INDEX
        .get(color)
        .or_else(|| strip_shade(color).and_then(|base| FAMILY_INDEX.get(base)))
        .copied()
}

/// Semantic color equality
pub fn same_color(a: &str, b: &str) -> bool {
    let a = normalize_color(a);
    let b = normalize_color(b);
    if a.is_empty() || b.is_empty() {
        return false;
    }
    if a == b {
        return true;
    }
    match (family(&a), family(&b)) {
        (Some(fa), Some(fb)) => fa == fb,
        _ => strip_shade(&a).unwrap_or(&a) == strip_shade(&b).unwrap_or(&b),
    }
}

pub fn matches_any(color: &str, list: &[&str]) -> bool {
    list.iter().any(|entry| same_color(color, entry))
}

/// Avoid-listed for the undertone and not rescued by the Do list
pub fn is_avoided(undertone: Undertone, color: &str) -> bool {
    let palette = palette(undertone);
    !matches_any(color, palette.do_colors) && matches_any(color, palette.avoid)
}

/// The clash pair two colors form, if any
pub fn clash_between(a: &str, b: &str) -> Option<(&'static str, &'static str)> {
    CLASH_PAIRS.iter().copied().find(|(x, y)| {
        (same_color(a, x) && same_color(b, y)) || (same_color(a, y) && same_color(b, x))
    })
}
