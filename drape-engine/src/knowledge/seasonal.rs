//! Seasonal color typing

use crate::models::{Season, Undertone};

const LIGHT_DEPTHS: &[&str] = &["light", "fair", "medium", "light medium", "light_medium"];

const LIGHT_HAIR: &[&str] = &["blonde", "light", "golden", "auburn", "red", "brown"];

fn is_light_depth(depth: Option<&str>) -> bool {
    depth
        .map(|d| {
            let d = d.trim().to_lowercase();
            LIGHT_DEPTHS.contains(&d.as_str())
        })
        .unwrap_or(false)
}

fn is_light_hair(hair: Option<&str>) -> bool {
    hair.map(|h| {
        let h = h.to_lowercase();
        !h.contains("dark") && !h.contains("black") && LIGHT_HAIR.iter().any(|l| h.contains(l))
    })
    .unwrap_or(false)
}

/// Season from undertone, skin depth and hair color
pub fn derive_season(undertone: Undertone, skin_depth: Option<&str>, hair_color: Option<&str>) -> Season {
    let light = is_light_depth(skin_depth);
    match undertone {
        Undertone::DeepWarm | Undertone::OliveWarm => Season::Autumn,
        Undertone::DeepCool => Season::Winter,
        Undertone::Warm if light && is_light_hair(hair_color) => Season::Spring,
        Undertone::Warm => Season::Autumn,
        Undertone::Cool if light => Season::Summer,
        Undertone::Cool => Season::Winter,
        Undertone::Neutral if light => Season::Summer,
        Undertone::Neutral => Season::Autumn,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deep_undertones_ignore_depth() {
        assert_eq!(derive_season(Undertone::DeepWarm, Some("light"), None), Season::Autumn);
        assert_eq!(derive_season(Undertone::OliveWarm, None, None), Season::Autumn);
        assert_eq!(derive_season(Undertone::DeepCool, Some("light"), Some("blonde")), Season::Winter);
    }

    #[test]
    fn test_warm_needs_light_depth_and_hair_for_spring() {
        assert_eq!(derive_season(Undertone::Warm, Some("medium"), Some("light brown")), Season::Spring);
        assert_eq!(derive_season(Undertone::Warm, Some("medium"), Some("dark brown")), Season::Autumn);
        assert_eq!(derive_season(Undertone::Warm, Some("deep"), Some("blonde")), Season::Autumn);
    }

    #[test]
    fn test_cool_and_neutral_split_on_depth() {
        assert_eq!(derive_season(Undertone::Cool, Some("Light"), None), Season::Summer);
        assert_eq!(derive_season(Undertone::Cool, Some("deep"), None), Season::Winter);
        assert_eq!(derive_season(Undertone::Neutral, Some("medium"), None), Season::Summer);
        assert_eq!(derive_season(Undertone::Neutral, None, None), Season::Autumn);
    }
}
