//! Attribute fusion
//!
//! Turns raw per-photo observations into the durable user profile.

pub mod attribute_fuser;

pub use attribute_fuser::{AttributeFuser, ProfileDraft, FALLBACK_CONFIDENCE};
