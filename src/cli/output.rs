//! CLI output: progress lines and error mapping to a stable CLI surface.

use crate::error::ApiError;
use std::path::Path;

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &ApiError) -> String {
    e.to_string()
}

pub fn format_using_config(path: &Path) -> String {
    format!("using config {}", path.display())
}

pub fn format_opening_db(path: &Path) -> String {
    format!("Opening db {}", path.display())
}

pub fn format_scanning_root(root: &Path) -> String {
    format!("Scanning root {}", root.display())
}
