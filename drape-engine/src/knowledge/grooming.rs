//! Haircut, beard and eyebrow compatibility by face shape, plus product
//! and skincare defaults

use super::contains_any;
use crate::models::FaceShape;

/// Haircut keywords that fight each face shape
pub fn haircuts_to_avoid(face: FaceShape) -> &'static [&'static str] {
    match face {
        FaceShape::Round => &["bowl", "curtain", "full volume sides"],
        FaceShape::Square => &["boxy", "bowl", "blunt fringe"],
        FaceShape::Oblong => &["pompadour", "tall quiff", "slicked back", "high top"],
        FaceShape::Heart => &["high fade", "top heavy"],
        FaceShape::Diamond => &["slicked back"],
        FaceShape::Oval => &["tall quiff"],
    }
}

pub fn haircuts_recommended(face: FaceShape) -> &'static [&'static str] {
    match face {
        FaceShape::Round => &["textured quiff", "side part with short sides", "pompadour"],
        FaceShape::Square => &["textured crop", "side part", "soft fringe"],
        FaceShape::Oblong => &["side-swept fringe", "classic taper", "crew cut with fullness at sides"],
        FaceShape::Heart => &["medium-length textured", "side part", "fringe"],
        FaceShape::Diamond => &["textured fringe", "side-swept", "medium length with volume at forehead"],
        FaceShape::Oval => &["classic taper", "side part", "textured crop"],
    }
}

/// Beard keywords that fight each face shape
pub fn beards_to_avoid(face: FaceShape) -> &'static [&'static str] {
    match face {
        FaceShape::Round => &["full round", "mutton chop"],
        FaceShape::Square => &["square", "boxed"],
        FaceShape::Oblong => &["chin extension", "goatee", "chin strap"],
        FaceShape::Heart => &["mutton chop"],
        FaceShape::Diamond => &["chin only", "goatee"],
        FaceShape::Oval => &[],
    }
}

pub fn beards_recommended(face: FaceShape) -> &'static [&'static str] {
    match face {
        FaceShape::Round => &["extended goatee", "anchor", "short boxed with length at chin"],
        FaceShape::Square => &["rounded full beard", "circle beard", "light stubble"],
        FaceShape::Oblong => &["full beard kept short at chin", "mutton chops", "stubble"],
        FaceShape::Heart => &["full beard", "boxed", "chin-strap with fullness"],
        FaceShape::Diamond => &["full beard", "stubble", "balbo"],
        FaceShape::Oval => &["any well-groomed style", "stubble", "short boxed"],
    }
}

pub fn eyebrow_recommendation(face: FaceShape) -> &'static str {
    match face {
        FaceShape::Oval => "Keep a groomed natural arch with a slight angle.",
        FaceShape::Square => "Soften the arch to offset the jaw; avoid flat brows.",
        FaceShape::Round => "Lift the arch to add length; avoid flat or rounded brows.",
        FaceShape::Oblong => "Keep brows flat to lightly arched so the face does not read longer.",
        FaceShape::Heart => "Keep a soft natural arch; avoid over-thinning.",
        FaceShape::Diamond => "Follow a curved arch to soften the cheekbones.",
    }
}

/// Styling products for the hair texture and density readings
///
/// Scalp sun protection is always last.
pub fn styling_products(texture: &str, density: &str) -> Vec<&'static str> {
    let texture = texture.to_lowercase();
    let mut products = Vec::new();
    if texture.contains("straight") {
        products.push(if density.to_lowercase().contains("thick") {
            "matte clay"
        } else {
            "light pomade"
        });
    } else if texture.contains("wavy") {
        products.push("curl-enhancing cream");
    } else if contains_any(&texture, &["curly", "coily"]) {
        products.extend(["curl cream", "leave-in conditioner"]);
    }
    products.push("scalp spf");
    products
}

/// Skincare categories; the basics come first, then any skin-texture extras
pub fn skincare_categories(skin_texture: Option<&str>) -> Vec<&'static str> {
    let mut categories = vec!["moisturiser", "spf"];
    let texture = skin_texture.unwrap_or_default().to_lowercase();
    for &(reading, category) in SKIN_TEXTURE_CARE {
        if texture.contains(reading) && !categories.contains(&category) {
            categories.push(category);
        }
    }
    categories
}

const SKIN_TEXTURE_CARE: &[(&str, &str)] = &[
    ("oily", "oil-control cleanser"),
    ("acne", "salicylic acid cleanser"),
    ("dry", "hydrating cleanser"),
    ("uneven", "vitamin c serum"),
];

/// Visible hair conditions worth a remark
pub const POOR_HAIR_CONDITIONS: &[&str] = &["frizzy", "greasy", "unkempt", "dry", "overgrown"];

/// Beard grooming readings that count as unkempt
pub const UNKEMPT_BEARD: &[&str] = &["unkempt", "patchy", "overgrown", "untrimmed", "scraggly"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oval_face_has_no_beard_restrictions() {
        assert!(beards_to_avoid(FaceShape::Oval).is_empty());
        assert!(!haircuts_to_avoid(FaceShape::Oval).is_empty());
    }

    #[test]
    fn test_recommendations_do_not_repeat_avoid_entries() {
        for face in FaceShape::ALL {
            for cut in haircuts_recommended(*face) {
                assert!(!haircuts_to_avoid(*face).contains(cut), "{} for {}", cut, face);
            }
            for beard in beards_recommended(*face) {
                assert!(!beards_to_avoid(*face).contains(beard), "{} for {}", beard, face);
            }
        }
    }

    #[test]
    fn test_styling_products_by_texture() {
        assert_eq!(styling_products("Straight", "thick"), vec!["matte clay", "scalp spf"]);
        assert_eq!(styling_products("straight", "fine"), vec!["light pomade", "scalp spf"]);
        assert_eq!(
            styling_products("tight curly", "medium"),
            vec!["curl cream", "leave-in conditioner", "scalp spf"]
        );
        assert_eq!(styling_products("", ""), vec!["scalp spf"]);
    }

    #[test]
    fn test_skincare_basics_always_present() {
        assert_eq!(skincare_categories(None), vec!["moisturiser", "spf"]);
        assert_eq!(
            skincare_categories(Some("Oily with some acne")),
            vec!["moisturiser", "spf", "oil-control cleanser", "salicylic acid cleanser"]
        );
    }
}
