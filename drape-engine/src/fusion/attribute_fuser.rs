//! Attribute fuser
//!
//! Collapses per-photo observations into one versioned profile.
//!
//! For each attribute:
//! 1. Discard empty, "unknown", non-finite and out-of-vocabulary readings
//! 2. Unanimous values win at the highest observed confidence
//! 3. Otherwise the value with the largest confidence sum wins
//! 4. Ties go to the attribute's diagnostic photo kind, then the lowest photo index

use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, info, warn};

use crate::error::FusionError;
use crate::knowledge::seasonal;
use crate::models::{Attribute, Confidence, Observation, Profile, ProfileId, Season, Undertone};

/// Confidence assigned to a neutral fallback value
pub const FALLBACK_CONFIDENCE: Confidence = 0.4;

/// Confidence sums closer than this are a tie
const TIE_EPSILON: f64 = 1e-9;

/// Partially fused profile returned with `FusionError::IncompleteProfile`
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileDraft {
    pub profile_id: ProfileId,
    pub attributes: BTreeMap<Attribute, String>,
    pub confidence_scores: BTreeMap<Attribute, Confidence>,
    pub photos_used: usize,
    pub created_at: DateTime<Utc>,
    pub version: u32,
    /// Required attributes that did not resolve
    pub missing: Vec<Attribute>,
}

impl ProfileDraft {
    /// Complete the draft with neutral fallbacks for every missing required attribute
    pub fn with_defaults(mut self) -> Profile {
        for attribute in Attribute::REQUIRED {
            if self.attributes.contains_key(&attribute) {
                continue;
            }
            if let Some(fallback) = attribute.fallback_value() {
                self.attributes.insert(attribute, fallback.to_string());
                self.confidence_scores.insert(attribute, FALLBACK_CONFIDENCE);
            }
        }
        let seasonal_type = season_of(&self.attributes);
        Profile {
            profile_id: self.profile_id,
            attributes: self.attributes,
            confidence_scores: self.confidence_scores,
            photos_used: self.photos_used,
            created_at: self.created_at,
            version: self.version,
            seasonal_type,
        }
    }
}

fn season_of(attributes: &BTreeMap<Attribute, String>) -> Season {
    let undertone = attributes
        .get(&Attribute::SkinUndertone)
        .and_then(|v| v.parse::<Undertone>().ok())
        .unwrap_or_default();
    seasonal::derive_season(
        undertone,
        attributes.get(&Attribute::SkinToneDepth).map(String::as_str),
        attributes.get(&Attribute::HairColor).map(String::as_str),
    )
}

/// Running vote total for one candidate value
#[derive(Debug, Clone, Copy)]
struct Tally {
    sum: f64,
    max: f64,
    diagnostic: bool,
    min_index: usize,
}

impl Tally {
    /// Whether this tally wins over `other`
    fn beats(&self, other: &Tally) -> bool {
        if (self.sum - other.sum).abs() > TIE_EPSILON {
            return self.sum > other.sum;
        }
        if self.diagnostic != other.diagnostic {
            return self.diagnostic;
        }
        self.min_index < other.min_index
    }
}

/// Attribute fuser
pub struct AttributeFuser {
    /// Distinct photos below which fusion refuses to run
    pub min_photos: usize,
    /// Distinct photos at which unresolved required attributes are defaulted instead of rejected
    pub complete_photos: usize,
}

impl Default for AttributeFuser {
    fn default() -> Self {
        Self {
            min_photos: 3,
            complete_photos: 5,
        }
    }
}

impl AttributeFuser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fuse onboarding observations into version 1 of the default profile
    pub fn fuse(&self, observations: &[Observation]) -> Result<Profile, FusionError> {
        self.fuse_at(observations, drape_common::time::now())
    }

    /// Same as [`fuse`](Self::fuse) with a fixed creation time
    pub fn fuse_at(
        &self,
        observations: &[Observation],
        created_at: DateTime<Utc>,
    ) -> Result<Profile, FusionError> {
        self.fuse_versioned(observations, ProfileId::default(), 1, created_at)
    }

    /// Build the next version of `previous` from fresh observations
    ///
    /// `previous` is left untouched; the result keeps its id.
    pub fn refresh(
        &self,
        previous: &Profile,
        observations: &[Observation],
    ) -> Result<Profile, FusionError> {
        self.fuse_versioned(
            observations,
            previous.profile_id.clone(),
            previous.version + 1,
            drape_common::time::now(),
        )
    }

    pub fn fuse_versioned(
        &self,
        observations: &[Observation],
        profile_id: ProfileId,
        version: u32,
        created_at: DateTime<Utc>,
    ) -> Result<Profile, FusionError> {
        // only readings that survive hygiene count toward the photo minimum
        let cleaned: Vec<(&Observation, String)> = observations
            .iter()
            .filter_map(|o| clean_value(o).map(|value| (o, value)))
            .collect();
        let photos: BTreeSet<usize> = cleaned.iter().map(|(o, _)| o.source_photo_index).collect();
        let photos_used = photos.len();
        if photos_used < self.min_photos {
            return Err(FusionError::InsufficientData {
                photos: photos_used,
                required: self.min_photos,
            });
        }

        let mut tallies: BTreeMap<Attribute, BTreeMap<String, Tally>> = BTreeMap::new();
        for (obs, value) in cleaned {
            let confidence = obs.confidence.clamp(0.0, 1.0);
            let diagnostic = obs.photo_kind == obs.attribute.diagnostic_photo();
            tallies
                .entry(obs.attribute)
                .or_default()
                .entry(value)
                .and_modify(|t| {
                    t.sum += confidence;
                    t.max = t.max.max(confidence);
                    t.diagnostic |= diagnostic;
                    t.min_index = t.min_index.min(obs.source_photo_index);
                })
                .or_insert(Tally {
                    sum: confidence,
                    max: confidence,
                    diagnostic,
                    min_index: obs.source_photo_index,
                });
        }

        let mut attributes = BTreeMap::new();
        let mut confidence_scores = BTreeMap::new();
        for (attribute, candidates) in tallies {
            if let Some((value, confidence)) = resolve(&candidates) {
                debug!(
                    attribute = %attribute,
                    value = %value,
                    confidence = confidence,
                    candidates = candidates.len(),
                    "Attribute resolved"
                );
                attributes.insert(attribute, value);
                confidence_scores.insert(attribute, confidence);
            }
        }

        let missing: Vec<Attribute> = Attribute::REQUIRED
            .into_iter()
            .filter(|a| !attributes.contains_key(a))
            .collect();

        let draft = ProfileDraft {
            profile_id,
            attributes,
            confidence_scores,
            photos_used,
            created_at,
            version,
            missing: missing.clone(),
        };

        if !missing.is_empty() {
            if photos_used < self.complete_photos {
                return Err(FusionError::IncompleteProfile {
                    missing,
                    draft: Box::new(draft),
                });
            }
            for attribute in &missing {
                warn!(
                    attribute = %attribute,
                    fallback = attribute.fallback_value().unwrap_or_default(),
                    "Required attribute unresolved; using neutral default"
                );
            }
        }

        let profile = draft.with_defaults();
        info!(
            profile_id = %profile.profile_id,
            version = profile.version,
            photos = photos_used,
            attributes = profile.attributes.len(),
            defaulted = missing.len(),
            season = %profile.seasonal_type,
            "Profile fused"
        );
        Ok(profile)
    }
}

/// Canonical value of an observation, or `None` when it must not vote
fn clean_value(obs: &Observation) -> Option<String> {
    if !obs.confidence.is_finite() {
        warn!(attribute = %obs.attribute, photo = obs.source_photo_index, "Dropping observation with non-finite confidence");
        return None;
    }
    let raw = obs.value.trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case("unknown") {
        return None;
    }
    let value = obs.attribute.canonical_value(raw);
    if value.is_none() {
        warn!(
            attribute = %obs.attribute,
            value = %obs.value,
            photo = obs.source_photo_index,
            "Dropping out-of-vocabulary observation"
        );
    }
    value
}

/// Winning value and its confidence
fn resolve(candidates: &BTreeMap<String, Tally>) -> Option<(String, Confidence)> {
    let mut iter = candidates.iter();
    let (first_value, first) = iter.next()?;
    if candidates.len() == 1 {
        return Some((first_value.clone(), first.max));
    }

    let (mut best_value, mut best) = (first_value, first);
    for (value, tally) in iter {
        if tally.beats(best) {
            best_value = value;
            best = tally;
        }
    }

    let total: f64 = candidates.values().map(|t| t.sum).sum();
    let confidence = if total > 0.0 {
        (best.sum / total).clamp(0.0, 1.0)
    } else {
        0.0
    };
    Some((best_value.clone(), confidence))
}
