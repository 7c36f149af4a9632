//! Configuration System
//!
//! Produces the inputs of a run: the roots to scan, the database location and
//! the debug flag, plus logging settings. Values are layered from defaults,
//! `fsfingerprint.{json,toml,yaml}` files in `$HOME` and the working directory,
//! and `FSF_*` environment variables; the CLI applies its flags last.

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use merge::merge_policy::DEFAULT_DATABASE;
pub use merge::service::MergeService;
pub use sources::config_file::CONFIG_FILE_STEM;
pub use sources::environment::ENV_PREFIX;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FingerprintConfig {
    /// SQLite database file; created if absent
    #[serde(default = "default_database")]
    pub database: PathBuf,

    /// Enables debug-level diagnostics
    #[serde(default)]
    pub debug: bool,

    /// Filesystem roots, scanned in order
    #[serde(default)]
    pub roots: Vec<PathBuf>,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_database() -> PathBuf {
    PathBuf::from(DEFAULT_DATABASE)
}

impl Default for FingerprintConfig {
    fn default() -> Self {
        Self {
            database: default_database(),
            debug: false,
            roots: Vec::new(),
            logging: LoggingConfig::default(),
        }
    }
}

impl FingerprintConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.database.as_os_str().is_empty() {
            return Err("Database path cannot be empty".to_string());
        }
        if let Some(index) = self.roots.iter().position(|r| r.as_os_str().is_empty()) {
            return Err(format!("Root #{} is empty", index + 1));
        }
        Ok(())
    }
}
