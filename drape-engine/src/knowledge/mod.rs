//! Read-only style knowledge base
//!
//! Static tables keyed by undertone, body shape, face shape and occasion.
//! Everything here is immutable; lookup indexes are built lazily once.

pub mod accessory;
pub mod body;
pub mod color;
pub mod footwear;
pub mod grooming;
pub mod occasion;
pub mod seasonal;

/// Whether `text` contains any of the keywords (`text` is expected lowercase)
pub fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}
