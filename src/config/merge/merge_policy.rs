//! Merge rules: defaults, override order, conflict handling.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Default database file, relative to the working directory
pub const DEFAULT_DATABASE: &str = "fsfingerprint.sqlite3";

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("database", DEFAULT_DATABASE)?
        .set_default("debug", false)?
        .set_default("roots", Vec::<String>::new())
}
