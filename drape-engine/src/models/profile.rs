//! Observations and the fused user profile

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Confidence score (0.0 to 1.0)
pub type Confidence = f64;

/// Lowercase, trim, and turn spaces/hyphens into underscores
pub fn normalize_token(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

/// Implements `as_str`, `Display` and a forgiving `FromStr` for closed vocabularies
///
/// An optional `aliases` block maps extra spellings onto variants.
macro_rules! vocabulary {
    (
        $name:ident { $($variant:ident => $text:literal),+ $(,)? }
        $(aliases { $($alias:literal => $target:ident),+ $(,)? })?
    ) => {
        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match $crate::models::profile::normalize_token(s).as_str() {
                    $($text => Ok($name::$variant),)+
                    $($($alias => Ok($name::$target),)+)?
                    other => Err(format!("unknown {} '{}'", stringify!($name), other)),
                }
            }
        }
    };
}

pub(crate) use vocabulary;

// =============================================================================
// Photos and observations
// =============================================================================

/// Which onboarding photo an observation came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhotoKind {
    FaceFront,
    FaceSide,
    BodyFront,
    BodySide,
    Outfit,
    Unclear,
}

vocabulary!(PhotoKind {
    FaceFront => "face_front",
    FaceSide => "face_side",
    BodyFront => "body_front",
    BodySide => "body_side",
    Outfit => "outfit",
    Unclear => "unclear",
});

/// Durable user attributes read from onboarding photos
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    SkinUndertone,
    SkinToneDepth,
    SkinTexture,
    BodyShape,
    Height,
    Build,
    ShoulderWidth,
    TorsoLength,
    LegProportion,
    Posture,
    BellyProfile,
    FaceShape,
    JawType,
    Forehead,
    HairColor,
    HairTexture,
    HairDensity,
    HaircutStyle,
    HaircutLength,
    HairCondition,
    BeardStyle,
    BeardDensity,
    BeardColor,
    MustacheStyle,
    BeardGrooming,
}

vocabulary!(Attribute {
    SkinUndertone => "skin_undertone",
    SkinToneDepth => "skin_tone_depth",
    SkinTexture => "skin_texture",
    BodyShape => "body_shape",
    Height => "height",
    Build => "build",
    ShoulderWidth => "shoulder_width",
    TorsoLength => "torso_length",
    LegProportion => "leg_proportion",
    Posture => "posture",
    BellyProfile => "belly_profile",
    FaceShape => "face_shape",
    JawType => "jaw_type",
    Forehead => "forehead",
    HairColor => "hair_color",
    HairTexture => "hair_texture",
    HairDensity => "hair_density",
    HaircutStyle => "haircut_style",
    HaircutLength => "haircut_length",
    HairCondition => "hair_condition",
    BeardStyle => "beard_style",
    BeardDensity => "beard_density",
    BeardColor => "beard_color",
    MustacheStyle => "mustache_style",
    BeardGrooming => "beard_grooming",
});

impl Attribute {
    /// Attributes every valid profile must resolve
    pub const REQUIRED: [Attribute; 5] = [
        Attribute::SkinUndertone,
        Attribute::BodyShape,
        Attribute::FaceShape,
        Attribute::Height,
        Attribute::Build,
    ];

    /// Photo kind whose reading wins a tied vote for this attribute
    pub fn diagnostic_photo(&self) -> PhotoKind {
        use Attribute::*;
        match self {
            SkinUndertone | SkinToneDepth | SkinTexture | FaceShape | JawType | Forehead => {
                PhotoKind::FaceFront
            }
            BeardStyle | BeardDensity | BeardColor | MustacheStyle | BeardGrooming => {
                PhotoKind::FaceFront
            }
            BodyShape | Height | Build | ShoulderWidth | TorsoLength | LegProportion => {
                PhotoKind::BodyFront
            }
            Posture | BellyProfile => PhotoKind::BodySide,
            HairColor | HairTexture | HairDensity | HaircutStyle | HaircutLength | HairCondition => {
                PhotoKind::Outfit
            }
        }
    }

    /// Whether the attribute draws from a closed vocabulary
    pub fn is_enumerated(&self) -> bool {
        matches!(
            self,
            Attribute::SkinUndertone | Attribute::BodyShape | Attribute::FaceShape | Attribute::Height
        )
    }

    /// Canonical spelling of `value` for this attribute, or `None` when it is out of vocabulary
    pub fn canonical_value(&self, value: &str) -> Option<String> {
        if !self.is_enumerated() {
            let cleaned = value.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase();
            return (!cleaned.is_empty()).then_some(cleaned);
        }
        let canonical = match self {
            Attribute::SkinUndertone => value.parse::<Undertone>().map(|v| v.as_str()),
            Attribute::BodyShape => value.parse::<BodyShape>().map(|v| v.as_str()),
            Attribute::FaceShape => value.parse::<FaceShape>().map(|v| v.as_str()),
            Attribute::Height => value.parse::<Height>().map(|v| v.as_str()),
            other => Err(format!("{} has no vocabulary", other)),
        };
        canonical.ok().map(str::to_string)
    }

    /// Neutral fallback used when a required attribute cannot be resolved
    pub fn fallback_value(&self) -> Option<&'static str> {
        match self {
            Attribute::SkinUndertone => Some(Undertone::Neutral.as_str()),
            Attribute::BodyShape => Some(BodyShape::Rectangle.as_str()),
            Attribute::FaceShape => Some(FaceShape::Oval.as_str()),
            Attribute::Height => Some(Height::Average.as_str()),
            Attribute::Build => Some("average"),
            _ => None,
        }
    }
}

/// One attribute reading from one photo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub attribute: Attribute,
    pub value: String,
    pub confidence: Confidence,
    #[serde(default)]
    pub source_photo_index: usize,
    #[serde(default = "default_photo_kind")]
    pub photo_kind: PhotoKind,
}

fn default_photo_kind() -> PhotoKind {
    PhotoKind::Unclear
}

impl Observation {
    pub fn new(
        attribute: Attribute,
        value: impl Into<String>,
        confidence: Confidence,
        source_photo_index: usize,
        photo_kind: PhotoKind,
    ) -> Self {
        Self {
            attribute,
            value: value.into(),
            confidence,
            source_photo_index,
            photo_kind,
        }
    }
}

// =============================================================================
// Closed vocabularies
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Undertone {
    Warm,
    Cool,
    #[default]
    Neutral,
    DeepWarm,
    DeepCool,
    OliveWarm,
}

vocabulary!(Undertone {
    Warm => "warm",
    Cool => "cool",
    Neutral => "neutral",
    DeepWarm => "deep_warm",
    DeepCool => "deep_cool",
    OliveWarm => "olive_warm",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyShape {
    #[default]
    Rectangle,
    Triangle,
    InvertedTriangle,
    Oval,
    Trapezoid,
}

vocabulary!(BodyShape {
    Rectangle => "rectangle",
    Triangle => "triangle",
    InvertedTriangle => "inverted_triangle",
    Oval => "oval",
    Trapezoid => "trapezoid",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaceShape {
    #[default]
    Oval,
    Square,
    Round,
    Oblong,
    Heart,
    Diamond,
}

vocabulary!(FaceShape {
    Oval => "oval",
    Square => "square",
    Round => "round",
    Oblong => "oblong",
    Heart => "heart",
    Diamond => "diamond",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Height {
    Tall,
    #[default]
    Average,
    Petite,
}

vocabulary!(Height {
    Tall => "tall",
    Average => "average",
    Petite => "petite",
});

/// Print scale that suits a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternScale {
    SmallPrint,
    #[default]
    MediumPrint,
    LargePrint,
}

vocabulary!(PatternScale {
    SmallPrint => "small_print",
    MediumPrint => "medium_print",
    LargePrint => "large_print",
});

/// Seasonal color type derived from undertone, skin depth and hair color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

vocabulary!(Season {
    Spring => "spring",
    Summer => "summer",
    Autumn => "autumn",
    Winter => "winter",
});

// =============================================================================
// Profile
// =============================================================================

/// Identity a profile and its history are stored under
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileId(String);

impl ProfileId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ProfileId {
    fn default() -> Self {
        Self("local".to_string())
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fused, versioned set of durable user attributes
///
/// Built only by the attribute fuser; a refresh produces a new value with a
/// higher version instead of editing this one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub profile_id: ProfileId,
    pub attributes: BTreeMap<Attribute, String>,
    pub confidence_scores: BTreeMap<Attribute, Confidence>,
    pub photos_used: usize,
    pub created_at: DateTime<Utc>,
    pub version: u32,
    pub seasonal_type: Season,
}

impl Profile {
    pub fn value(&self, attribute: Attribute) -> Option<&str> {
        self.attributes.get(&attribute).map(String::as_str)
    }

    pub fn confidence(&self, attribute: Attribute) -> Option<Confidence> {
        self.confidence_scores.get(&attribute).copied()
    }

    pub fn undertone(&self) -> Undertone {
        self.parsed(Attribute::SkinUndertone)
    }

    pub fn body_shape(&self) -> BodyShape {
        self.parsed(Attribute::BodyShape)
    }

    pub fn face_shape(&self) -> FaceShape {
        self.parsed(Attribute::FaceShape)
    }

    pub fn height(&self) -> Height {
        self.parsed(Attribute::Height)
    }

    /// Free-text build reading, or the neutral fallback
    pub fn build(&self) -> &str {
        self.value(Attribute::Build)
            .or(Attribute::Build.fallback_value())
            .unwrap_or_default()
    }

    fn parsed<T: FromStr + Default>(&self, attribute: Attribute) -> T {
        self.value(attribute)
            .and_then(|v| v.parse().ok())
            .unwrap_or_default()
    }
}
