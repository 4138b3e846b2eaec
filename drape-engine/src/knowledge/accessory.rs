//! Accessory tables: straps, bags, belts, rings, frames and essentials

use crate::models::{FaceShape, Occasion};

/// Strap materials that read as sporty at formal occasions
pub const CASUAL_STRAP_MATERIALS: &[&str] = &["rubber", "silicone", "plastic"];

/// Bags acceptable at formality 4 and above
pub const FORMAL_BAGS: &[&str] = &["briefcase", "leather messenger", "leather tote", "laptop bag", "clutch"];

/// Garments worn without a belt
pub const BELTLESS_GARMENTS: &[&str] = &["sherwani", "bandhgala", "formal kurta", "achkan", "angrakha"];

/// Ring count above which the hands look cluttered
pub const MAX_RINGS: usize = 2;

/// Accessories the occasion expects
pub fn essentials(occasion: Occasion) -> &'static [&'static str] {
    match occasion {
        Occasion::WesternBusinessFormal | Occasion::WesternBusinessCasual => &["pocket square", "dress watch"],
        Occasion::IndianFormal | Occasion::WeddingGuestIndian => &["dress watch"],
        Occasion::Party | Occasion::SmartCasual => &["watch"],
        _ => &[],
    }
}

/// Sunglasses frame keywords that fight each face shape
pub fn frames_to_avoid(face: FaceShape) -> &'static [&'static str] {
    match face {
        FaceShape::Round => &["round", "oval"],
        FaceShape::Square => &["square", "rectangular"],
        FaceShape::Oblong => &["narrow", "small"],
        FaceShape::Heart => &["cat eye"],
        FaceShape::Diamond => &["narrow", "small"],
        FaceShape::Oval => &[],
    }
}

/// Frames that flatter each face shape
pub fn frames_recommended(face: FaceShape) -> &'static [&'static str] {
    match face {
        FaceShape::Round => &["rectangular", "wayfarer", "geometric"],
        FaceShape::Square => &["round", "aviator", "oval"],
        FaceShape::Oblong => &["oversized", "wraparound", "deep aviator"],
        FaceShape::Heart => &["aviator", "round", "light rimless"],
        FaceShape::Diamond => &["oval", "cat eye", "rimless"],
        FaceShape::Oval => &["wayfarer", "aviator", "round"],
    }
}

/// Whether a worn accessory covers an essential entry
///
/// "dress watch" is covered by any watch; the strap check judges its formality.
pub fn covers(worn: &str, essential: &str) -> bool {
    let worn = worn.to_lowercase();
    let essential = essential.to_lowercase();
    if worn.contains(&essential) || essential.contains(&worn) {
        return true;
    }
    essential
        .rsplit(' ')
        .next()
        .map(|noun| worn.contains(noun))
        .unwrap_or(false)
}

/// Bag types tolerated at an occasion
pub fn bag_allowed(bag: &str, occasion: Occasion) -> bool {
    let bag = bag.to_lowercase();
    if bag.contains("jhola") {
        return matches!(
            occasion,
            Occasion::IndianCasual | Occasion::Festival | Occasion::EthnicFusion | Occasion::Casual
        );
    }
    if bag.contains("backpack") && super::occasion::formality(occasion) >= 4 {
        return FORMAL_BAGS.iter().any(|b| bag.contains(b));
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_essentials_by_occasion() {
        assert_eq!(essentials(Occasion::WesternBusinessFormal), &["pocket square", "dress watch"]);
        assert_eq!(essentials(Occasion::WeddingGuestIndian), &["dress watch"]);
        assert!(essentials(Occasion::Gym).is_empty());
    }

    #[test]
    fn test_any_watch_covers_dress_watch() {
        assert!(covers("watch", "dress watch"));
        assert!(covers("Smart Watch", "dress watch"));
        assert!(covers("pocket square", "pocket square"));
        assert!(!covers("belt", "pocket square"));
    }

    #[test]
    fn test_bag_rules() {
        assert!(!bag_allowed("backpack", Occasion::WesternBusinessFormal));
        assert!(bag_allowed("backpack", Occasion::Casual));
        assert!(!bag_allowed("jhola", Occasion::WesternBusinessCasual));
        assert!(bag_allowed("cotton jhola", Occasion::Festival));
        assert!(bag_allowed("briefcase", Occasion::WesternBusinessFormal));
    }

    #[test]
    fn test_oval_face_avoids_no_frames() {
        assert!(frames_to_avoid(FaceShape::Oval).is_empty());
        assert!(frames_to_avoid(FaceShape::Round).contains(&"round"));
    }
}
