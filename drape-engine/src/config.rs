//! Engine configuration
//!
//! Loaded from the TOML config file; every section is optional.
//!
//! ```toml
//! root_folder = "/home/me/.local/share/drape"
//!
//! [logging]
//! level = "drape_engine=debug"
//!
//! [scoring]
//! critical_penalty = 2.0
//!
//! [scoring.weights]
//! outfit = 0.4
//! grooming = 0.2
//! accessory = 0.2
//! footwear = 0.2
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use drape_common::config::LoggingConfig;

use crate::synthesis::ScoringConfig;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrapeConfig {
    /// Root folder; the resolver gives the CLI and environment priority over this
    pub root_folder: Option<PathBuf>,
    pub logging: LoggingConfig,
    pub scoring: ScoringConfig,
}

impl DrapeConfig {
    /// Load from `path`, or the platform config file when `None`
    ///
    /// No file at all yields the defaults.
    pub fn load(path: Option<&Path>) -> drape_common::Result<Self> {
        match path {
            Some(path) => drape_common::config::load_toml_config(path),
            None => match drape_common::config::config_file_path() {
                Ok(path) => drape_common::config::load_toml_config(&path),
                Err(_) => Ok(Self::default()),
            },
        }
    }
}
