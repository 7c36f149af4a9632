//! Config file sources: `$HOME/fsfingerprint.*` and `./fsfingerprint.*`

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Base name of the config file, without extension
pub const CONFIG_FILE_STEM: &str = "fsfingerprint";

/// Extensions probed in order; the first existing file in a directory wins.
const EXTENSIONS: &[&str] = &["json", "toml", "yaml", "yml"];

/// Home directory from `$HOME`, if set.
pub fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .filter(|home| !home.is_empty())
        .map(PathBuf::from)
}

/// Find `fsfingerprint.<ext>` in `dir`.
pub fn find_in(dir: &Path) -> Option<PathBuf> {
    EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{}.{}", CONFIG_FILE_STEM, ext)))
        .find(|candidate| candidate.is_file())
}

/// Config files that apply for `search_dir`, lowest precedence first.
///
/// The home file is listed before the local one; when both directories are
/// the same the file is listed once.
pub fn discover(search_dir: &Path, home: Option<&Path>) -> Vec<PathBuf> {
    let mut files = Vec::new();
    if let Some(home_file) = home.and_then(find_in) {
        files.push(home_file);
    }
    if let Some(local_file) = find_in(search_dir) {
        if !files.contains(&local_file) {
            files.push(local_file);
        }
    }
    files
}

/// Add discovered config files to builder.
pub fn add_to_builder(
    mut builder: ConfigBuilder<DefaultState>,
    files: &[PathBuf],
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    for path in files {
        debug!(config_path = %path.display(), "Adding config file source");
        builder = builder.add_source(File::from(path.as_path()).required(true));
    }
    Ok(builder)
}
