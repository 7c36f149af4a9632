//! CLI parse: clap types for fsfingerprint. No behavior; definitions only.

use clap::Parser;
use std::path::PathBuf;

/// fsfingerprint - mirror filesystem trees into SQLite with SHA-256 fingerprints
#[derive(Parser, Debug)]
#[command(name = "fsfingerprint")]
#[command(about = "Mirror filesystem trees into SQLite with per-file SHA-256 fingerprints")]
pub struct Cli {
    /// SQLite database filename
    #[arg(long = "db", value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Filesystem root to scan (repeatable; replaces configured roots)
    #[arg(long = "root", value_name = "PATH")]
    pub roots: Vec<PathBuf>,

    /// Enable debug diagnostics
    #[arg(long)]
    pub debug: bool,

    /// Configuration file path (overrides config file discovery)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable logging (progress lines are still printed)
    #[arg(long)]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
