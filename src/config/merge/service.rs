//! MergeService: orchestrates sources, applies merge policy, deserializes to FingerprintConfig.

use crate::config::sources::{config_file, environment};
use crate::config::FingerprintConfig;
use config::ConfigError;
use config::File;
use config::Map;
use std::path::Path;

use super::merge_policy;

/// Merge service for config composition.
pub struct MergeService;

impl MergeService {
    /// Load config from the standard sources.
    /// Precedence: defaults (lowest) -> home file -> local file -> environment (highest).
    pub fn load(search_dir: &Path) -> Result<FingerprintConfig, ConfigError> {
        let home = config_file::home_dir();
        Self::load_with(search_dir, home.as_deref(), None)
    }

    /// Load config with an explicit home directory and environment map.
    pub fn load_with(
        search_dir: &Path,
        home: Option<&Path>,
        vars: Option<Map<String, String>>,
    ) -> Result<FingerprintConfig, ConfigError> {
        let files = config_file::discover(search_dir, home);

        let builder = merge_policy::builder_with_defaults()?;
        let builder = config_file::add_to_builder(builder, &files)?;
        let builder = environment::add_to_builder(builder, vars)?;

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Load config from a specific file with environment overlay.
    pub fn load_from_file(
        path: &Path,
        vars: Option<Map<String, String>>,
    ) -> Result<FingerprintConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = builder.add_source(File::from(path));
        let builder = environment::add_to_builder(builder, vars)?;

        let config = builder.build()?;
        config.try_deserialize()
    }
}
