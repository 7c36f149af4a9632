//! CLI route: run context owning the node store for one invocation.

use crate::cli::output::{format_opening_db, format_scanning_root};
use crate::config::FingerprintConfig;
use crate::error::ApiError;
use crate::store::SqliteNodeStore;
use crate::tree::{ScanStats, TreeScanner};
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, warn};

/// Per-root results of a run, in scan order
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub roots: Vec<(PathBuf, ScanStats)>,
}

impl RunSummary {
    /// Sum of all per-root counters
    pub fn totals(&self) -> ScanStats {
        self.roots
            .iter()
            .fold(ScanStats::default(), |mut acc, (_, stats)| {
                acc.directories += stats.directories;
                acc.files_hashed += stats.files_hashed;
                acc.files_failed += stats.files_failed;
                acc.entries_skipped += stats.entries_skipped;
                acc.unreadable += stats.unreadable;
                acc.bytes_hashed += stats.bytes_hashed;
                acc
            })
    }
}

/// Runtime context for one CLI invocation: the open store and the roots to scan.
///
/// The store is opened once and closed when the context is dropped.
pub struct RunContext {
    store: SqliteNodeStore,
    roots: Vec<PathBuf>,
}

impl RunContext {
    /// Open the configured database, announcing it on `out`.
    pub fn open(config: &FingerprintConfig, out: &mut dyn Write) -> Result<Self, ApiError> {
        writeln!(out, "{}", format_opening_db(&config.database))?;
        let store = SqliteNodeStore::open(&config.database)?;
        Ok(Self {
            store,
            roots: config.roots.clone(),
        })
    }

    pub fn store(&self) -> &SqliteNodeStore {
        &self.store
    }

    /// Scan every configured root in order.
    ///
    /// Stops at the first storage error; unreadable entries only show up in the stats.
    pub fn execute(&self, out: &mut dyn Write) -> Result<RunSummary, ApiError> {
        if self.roots.is_empty() {
            warn!("No roots configured; nothing to scan");
        }

        let scanner = TreeScanner::new(&self.store);
        let mut summary = RunSummary::default();

        for root in &self.roots {
            writeln!(out, "{}", format_scanning_root(root))?;
            let stats = scanner.scan_root(root)?;
            summary.roots.push((root.clone(), stats));
        }

        let totals = summary.totals();
        info!(
            roots = summary.roots.len(),
            files_hashed = totals.files_hashed,
            files_failed = totals.files_failed,
            "Run completed"
        );
        Ok(summary)
    }
}
