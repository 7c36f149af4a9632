//! Environment variable source: FSF_* prefix with __ separator for nested keys

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::Map;

pub const ENV_PREFIX: &str = "FSF";

/// Add environment variable overlay to builder.
///
/// `FSF_DATABASE`, `FSF_DEBUG` and `FSF_ROOTS` (comma separated) map to top-level
/// keys; `FSF_LOGGING__LEVEL` maps to `logging.level`. Passing `vars` replaces
/// the process environment as the source.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    vars: Option<Map<String, String>>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("roots")
            .try_parsing(true)
            .source(vars),
    );
    Ok(builder)
}
