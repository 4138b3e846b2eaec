//! Occasion-conditioned tables: formality, fabrics, garments, fusions, colors

use crate::models::{FaceShape, Occasion};

use super::{accessory, footwear};

/// Formality level 1 (most casual) to 5 (most formal)
pub fn formality(occasion: Occasion) -> u8 {
    match occasion {
        Occasion::Gym | Occasion::Beach => 1,
        Occasion::Casual
        | Occasion::WesternStreetwear
        | Occasion::Travel
        | Occasion::IndianCasual
        | Occasion::Festival
        | Occasion::Lounge => 2,
        Occasion::SmartCasual | Occasion::Party | Occasion::EthnicFusion => 3,
        Occasion::WesternBusinessCasual => 4,
        Occasion::WesternBusinessFormal | Occasion::IndianFormal | Occasion::WeddingGuestIndian => 5,
    }
}

pub fn is_formal(occasion: Occasion) -> bool {
    formality(occasion) >= 4
}

/// Occasions judged against Indian wear tables (fabric, collar, kurta length)
pub fn is_indian(occasion: Occasion) -> bool {
    matches!(
        occasion,
        Occasion::IndianFormal
            | Occasion::IndianCasual
            | Occasion::EthnicFusion
            | Occasion::WeddingGuestIndian
            | Occasion::Festival
    )
}

/// Occasions judged against Western wear tables (collar, trouser break, layering)
pub fn is_western(occasion: Occasion) -> bool {
    matches!(
        occasion,
        Occasion::WesternBusinessFormal
            | Occasion::WesternBusinessCasual
            | Occasion::WesternStreetwear
            | Occasion::SmartCasual
            | Occasion::Party
            | Occasion::Travel
            | Occasion::Gym
            | Occasion::Beach
            | Occasion::Lounge
    )
}

// =============================================================================
// Fabrics
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FabricWeight {
    Light,
    Medium,
    Heavy,
}

#[derive(Debug)]
pub struct FabricProfile {
    pub name: &'static str,
    pub formality: u8,
    pub weight: FabricWeight,
}

static FABRICS: &[FabricProfile] = &[
    FabricProfile { name: "silk-cotton blend", formality: 4, weight: FabricWeight::Medium },
    FabricProfile { name: "linen-cotton blend", formality: 3, weight: FabricWeight::Light },
    FabricProfile { name: "cotton poplin", formality: 3, weight: FabricWeight::Light },
    FabricProfile { name: "oxford cloth", formality: 3, weight: FabricWeight::Medium },
    FabricProfile { name: "wool blend", formality: 4, weight: FabricWeight::Medium },
    FabricProfile { name: "raw silk", formality: 4, weight: FabricWeight::Medium },
    FabricProfile { name: "chanderi", formality: 5, weight: FabricWeight::Light },
    FabricProfile { name: "brocade", formality: 5, weight: FabricWeight::Heavy },
    FabricProfile { name: "velvet", formality: 5, weight: FabricWeight::Heavy },
    FabricProfile { name: "denim", formality: 2, weight: FabricWeight::Heavy },
    FabricProfile { name: "jersey", formality: 1, weight: FabricWeight::Light },
    FabricProfile { name: "linen", formality: 2, weight: FabricWeight::Light },
    FabricProfile { name: "silk", formality: 5, weight: FabricWeight::Medium },
    FabricProfile { name: "wool", formality: 5, weight: FabricWeight::Heavy },
    FabricProfile { name: "cotton", formality: 2, weight: FabricWeight::Light },
];

/// Most specific profile whose name appears in the fabric description
pub fn fabric_profile(fabric: &str) -> Option<&'static FabricProfile> {
    let fabric = fabric.to_lowercase();
    FABRICS.iter().find(|p| fabric.contains(p.name))
}

/// Weight used for layering checks; unknown fabrics count as medium
pub fn fabric_weight(fabric: Option<&str>) -> FabricWeight {
    fabric
        .and_then(fabric_profile)
        .map(|p| p.weight)
        .unwrap_or(FabricWeight::Medium)
}

/// Fabrics suitable for an occasion; `None` means no ruling
pub fn fabrics_for(occasion: Occasion) -> Option<&'static [&'static str]> {
    let fabrics: &'static [&'static str] = match occasion {
        Occasion::WeddingGuestIndian | Occasion::IndianFormal => {
            &["chanderi", "silk-cotton blend", "raw silk", "brocade"]
        }
        Occasion::WesternBusinessCasual | Occasion::SmartCasual => {
            &["cotton-silk blend", "linen-cotton", "structured cotton"]
        }
        Occasion::IndianCasual | Occasion::Casual => &["plain cotton", "block print", "linen", "cotton"],
        Occasion::EthnicFusion => &["cotton-silk blend", "structured cotton", "linen-cotton"],
        Occasion::Party => &["silk", "raw silk", "chanderi", "velvet"],
        _ => return None,
    };
    Some(fabrics)
}

/// Outcome of checking a fabric against an occasion's fabric table
#[derive(Debug, Clone, PartialEq)]
pub enum FabricVerdict {
    Suitable,
    /// Plain cotton where silk-weight fabric is expected
    TooCasual { upgrade: Vec<&'static str> },
    Unsuitable { recommended: Vec<&'static str> },
}

pub fn fabric_verdict(fabric: &str, occasion: Occasion) -> FabricVerdict {
    let Some(suitable) = fabrics_for(occasion) else {
        return FabricVerdict::Suitable;
    };
    let fab = fabric.trim().to_lowercase();
    if fab.is_empty() || suitable.iter().any(|s| fab.contains(s) || s.contains(fab.as_str())) {
        return FabricVerdict::Suitable;
    }
    let dressy = matches!(
        occasion,
        Occasion::WeddingGuestIndian | Occasion::IndianFormal | Occasion::Party
    );
    if dressy && fab.contains("cotton") && !fab.contains("silk") {
        FabricVerdict::TooCasual {
            upgrade: suitable.iter().take(2).copied().collect(),
        }
    } else {
        FabricVerdict::Unsuitable {
            recommended: suitable.iter().take(3).copied().collect(),
        }
    }
}

// =============================================================================
// Garments
// =============================================================================

/// Garment types that do not belong at an occasion
pub fn forbidden_garments(occasion: Occasion) -> &'static [&'static str] {
    match occasion {
        Occasion::WeddingGuestIndian | Occasion::IndianFormal => {
            &["t-shirt", "hoodie", "shorts", "track pants", "joggers", "tank top", "cargo"]
        }
        Occasion::WesternBusinessFormal => {
            &["t-shirt", "hoodie", "shorts", "jeans", "track pants", "joggers", "cargo", "polo"]
        }
        Occasion::WesternBusinessCasual => &["hoodie", "shorts", "track pants", "tank top", "joggers"],
        Occasion::Gym => &["blazer", "suit", "sherwani", "kurta", "jeans", "oxford shirt"],
        _ => &[],
    }
}

const INVALID_FUSIONS: &[(&str, &str)] = &[
    ("sherwani", "jeans"),
    ("kurta", "track pants"),
    ("kurta", "gym"),
    ("formal kurta", "cargo shorts"),
    ("bandhgala", "track pants"),
];

/// The invalid ethnic/western pairing formed by a top and a bottom, if any
pub fn invalid_fusion(top: &str, bottom: &str) -> Option<(&'static str, &'static str)> {
    let top = top.to_lowercase();
    let bottom = bottom.to_lowercase();
    INVALID_FUSIONS
        .iter()
        .copied()
        .find(|(t, b)| top.contains(t) && bottom.contains(b))
}

// =============================================================================
// Collars
// =============================================================================

static INDIAN_COLLARS: &[(&str, &[FaceShape])] = &[
    ("bandhgala", &[FaceShape::Square, FaceShape::Oval, FaceShape::Oblong]),
    ("nehru", &[FaceShape::Oval, FaceShape::Heart, FaceShape::Diamond]),
    ("angrakha", &[FaceShape::Oval, FaceShape::Heart]),
    (
        "mandarin",
        &[
            FaceShape::Oval,
            FaceShape::Square,
            FaceShape::Round,
            FaceShape::Oblong,
            FaceShape::Heart,
            FaceShape::Diamond,
        ],
    ),
];

static WESTERN_COLLARS: &[(&str, &[FaceShape])] = &[
    ("spread collar", &[FaceShape::Square, FaceShape::Oval, FaceShape::Oblong]),
    ("button-down", &[FaceShape::Oval, FaceShape::Heart, FaceShape::Oblong]),
    ("band collar", &[FaceShape::Oval, FaceShape::Oblong]),
    ("cutaway collar", &[FaceShape::Square, FaceShape::Oval]),
    ("club collar", &[FaceShape::Oval, FaceShape::Heart]),
    (
        "point collar",
        &[
            FaceShape::Oval,
            FaceShape::Square,
            FaceShape::Round,
            FaceShape::Oblong,
            FaceShape::Heart,
            FaceShape::Diamond,
        ],
    ),
];

/// Better collars for the face when `collar` does not suit it
///
/// Returns `None` when the collar suits the face or is not in the table.
pub fn collar_alternatives(collar: &str, face: FaceShape, indian: bool) -> Option<Vec<&'static str>> {
    let table = if indian { INDIAN_COLLARS } else { WESTERN_COLLARS };
    let collar = collar.trim().to_lowercase();
    let (_, shapes) = table.iter().find(|(name, _)| collar.contains(name))?;
    if shapes.contains(&face) {
        return None;
    }
    Some(
        table
            .iter()
            .filter(|(name, shapes)| shapes.contains(&face) && !collar.contains(name))
            .map(|(name, _)| *name)
            .take(3)
            .collect(),
    )
}

// =============================================================================
// Colors and gaps
// =============================================================================

/// Colors traditionally worn at an occasion
pub fn traditional_colors(occasion: Occasion) -> &'static [&'static str] {
    match occasion {
        Occasion::WeddingGuestIndian => &[
            "gold", "deep burgundy", "emerald", "royal purple", "rust", "mustard", "sapphire",
            "deep teal", "peach", "cream",
        ],
        Occasion::IndianFormal => &["gold", "cream", "ivory", "deep burgundy", "emerald", "navy", "royal purple"],
        Occasion::IndianCasual => &["mustard", "olive green", "rust", "white", "sage", "peach", "terracotta"],
        Occasion::EthnicFusion => &["rust", "olive green", "navy", "mustard", "cream", "deep teal"],
        Occasion::WesternBusinessFormal => &["navy", "charcoal", "cool grey", "white", "burgundy"],
        Occasion::WesternBusinessCasual => &["navy", "camel", "stone", "soft grey", "olive green", "burgundy", "cream"],
        Occasion::WesternStreetwear => &["black", "olive green", "rust", "cream", "charcoal", "navy"],
        Occasion::SmartCasual => &["navy", "camel", "olive green", "rust", "stone", "cream", "burgundy"],
        Occasion::Party => &["emerald", "burgundy", "royal purple", "navy", "black", "gold", "silver"],
        Occasion::Festival => &["mustard", "coral", "rust", "emerald", "royal purple", "gold", "fuchsia"],
        Occasion::Travel => &["navy", "olive green", "stone", "grey", "camel"],
        Occasion::Gym => &["black", "charcoal", "navy", "grey"],
        Occasion::Beach => &["white", "coral", "sage", "icy blue", "terracotta", "sand"],
        Occasion::Lounge => &["soft grey", "navy", "sage", "cream", "stone"],
        Occasion::Casual => &["navy", "olive green", "rust", "cream", "grey", "sage"],
    }
}

/// Occasions an item to acquire would serve, in table order
///
/// An occasion counts when the item names one of its allowed footwear,
/// suitable fabrics or essential accessories.
pub fn occasions_served(item: &str) -> Vec<Occasion> {
    let item = item.to_lowercase();
    let names = |entries: &[&str]| {
        entries
            .iter()
            .any(|e| item.contains(e) || e.contains(item.as_str()))
    };
    Occasion::ALL
        .iter()
        .copied()
        .filter(|occ| {
            names(footwear::rules(*occ).allowed)
                || fabrics_for(*occ).map(|f| names(f)).unwrap_or(false)
                || names(accessory::essentials(*occ))
        })
        .collect()
}

/// Whether a garment type is named by any of the forbidden entries
pub fn garment_forbidden(garment_type: &str, occasion: Occasion) -> Option<&'static str> {
    let garment = garment_type.to_lowercase();
    forbidden_garments(occasion)
        .iter()
        .copied()
        .find(|f| garment.contains(f))
}
