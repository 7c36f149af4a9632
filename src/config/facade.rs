//! ConfigLoader facade delegating to merge service.

use super::merge::service::MergeService;
use super::sources::config_file;
use super::FingerprintConfig;
use config::ConfigError;
use std::path::{Path, PathBuf};

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from files and environment.
    pub fn load(search_dir: &Path) -> Result<FingerprintConfig, ConfigError> {
        MergeService::load(search_dir)
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &Path) -> Result<FingerprintConfig, ConfigError> {
        MergeService::load_from_file(path, None)
    }

    /// Config files `load` would read for `search_dir`, lowest precedence first.
    pub fn config_files(search_dir: &Path) -> Vec<PathBuf> {
        let home = config_file::home_dir();
        config_file::discover(search_dir, home.as_deref())
    }

    /// Create default configuration.
    pub fn default() -> FingerprintConfig {
        FingerprintConfig::default()
    }
}
