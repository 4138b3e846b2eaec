//! # Drape Common Library
//!
//! Shared code for the drape workspace including:
//! - Error and result types
//! - Configuration loading and root folder resolution
//! - Database initialization
//! - Timestamp helpers

pub mod config;
#[cfg(feature = "sqlx")]
pub mod db;
pub mod error;
pub mod time;

pub use error::{Error, Result};
