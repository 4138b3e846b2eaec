//! drape-engine: style recommendation core
//!
//! - `fusion`: onboarding observations → versioned profile
//! - `rules`: profile + outfit breakdown → raw findings
//! - `synthesis`: findings → ranked remarks, palette, wardrobe gaps, scores
//! - `store`, `extractors`, `pipeline`: the async shell around the pure core

pub mod config;
pub mod error;
pub mod extractors;
pub mod fusion;
pub mod knowledge;
pub mod models;
pub mod pipeline;
pub mod rules;
pub mod store;
pub mod synthesis;

pub use crate::error::{AnalysisError, FusionError, PipelineError};
pub use crate::fusion::{AttributeFuser, ProfileDraft};
pub use crate::pipeline::{OnboardOptions, PhotoInput, Pipeline};
pub use crate::rules::evaluate;
pub use crate::synthesis::{analyze, Synthesizer};
