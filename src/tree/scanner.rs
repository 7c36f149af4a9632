//! Depth-first scanner mirroring a filesystem root into the node store

use crate::error::StorageError;
use crate::store::{NodeOutcome, NodeStore};
use crate::tree::hasher;
use crate::tree::path::{anchor_segments, segment_name};
use crate::types::NodeId;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, instrument, trace, warn};
use walkdir::WalkDir;

/// Counters for one scanned root
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Directories upserted below the root
    pub directories: u64,
    /// Regular files hashed and recorded with a digest
    pub files_hashed: u64,
    /// Regular files recorded with an error instead of a digest
    pub files_failed: u64,
    /// Symlinks, pipes, sockets and devices left out of the store
    pub entries_skipped: u64,
    /// Walk errors: the root, directories that could not be listed, or
    /// entries whose type could not be read
    pub unreadable: u64,
    pub bytes_hashed: u64,
}

/// What a walk error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WalkFailure {
    /// The scan root itself is missing or unreadable
    Root,
    /// A directory whose listing failed; its subtree is lost
    Directory,
    /// A single entry whose type could not be determined
    Entry,
}

impl WalkFailure {
    fn classify(depth: usize, is_dir: bool) -> Self {
        if depth == 0 {
            WalkFailure::Root
        } else if is_dir {
            WalkFailure::Directory
        } else {
            WalkFailure::Entry
        }
    }
}

/// Tree scanner bound to a node store
///
/// Per-entry read failures are recorded or logged and the walk continues.
/// Storage failures stop the scan and are returned to the caller.
pub struct TreeScanner<'a, S: NodeStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: NodeStore + ?Sized> TreeScanner<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Scan `root`, resolving relative roots against the current directory
    pub fn scan_root(&self, root: &Path) -> Result<ScanStats, StorageError> {
        let cwd = if root.is_relative() {
            std::env::current_dir()?
        } else {
            PathBuf::from("/")
        };
        self.scan_root_in(root, &cwd)
    }

    /// Scan `root` as if the working directory were `cwd`
    #[instrument(skip(self, root), fields(root = %root.display()))]
    pub fn scan_root_in(&self, root: &Path, cwd: &Path) -> Result<ScanStats, StorageError> {
        let start = Instant::now();

        let anchor = self.resolve_anchor(root, cwd)?;
        let walk_root = if root.is_relative() {
            cwd.join(root)
        } else {
            root.to_path_buf()
        };
        let stats = self.descend(&walk_root, anchor)?;

        info!(
            directories = stats.directories,
            files_hashed = stats.files_hashed,
            files_failed = stats.files_failed,
            entries_skipped = stats.entries_skipped,
            unreadable = stats.unreadable,
            bytes_hashed = stats.bytes_hashed,
            duration_ms = start.elapsed().as_millis() as u64,
            "Root scan completed"
        );
        Ok(stats)
    }

    /// Create or resolve the directory chain from the filesystem root to `root`
    ///
    /// Returns the id of the last segment, or None when the root is `/`.
    pub fn resolve_anchor(
        &self,
        root: &Path,
        cwd: &Path,
    ) -> Result<Option<NodeId>, StorageError> {
        let mut parent = None;
        for segment in anchor_segments(root, cwd)? {
            let id = self.store.upsert(parent, &segment, &NodeOutcome::Directory)?;
            trace!(segment = %segment, id, "Resolved anchor segment");
            parent = Some(id);
        }
        debug!(anchor = ?parent, "Anchor resolved");
        Ok(parent)
    }

    fn descend(&self, walk_root: &Path, anchor: Option<NodeId>) -> Result<ScanStats, StorageError> {
        let mut stats = ScanStats::default();
        // Index d holds the node id of the directory whose children sit at depth d + 1.
        let mut parents: Vec<Option<NodeId>> = vec![anchor];

        let walker = WalkDir::new(walk_root).min_depth(1).follow_links(false);

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    stats.unreadable += 1;
                    let path = err.path().map(Path::to_path_buf).unwrap_or_default();
                    let is_dir = std::fs::symlink_metadata(&path)
                        .map(|meta| meta.is_dir())
                        .unwrap_or(false);
                    match WalkFailure::classify(err.depth(), is_dir) {
                        WalkFailure::Root => {
                            warn!(path = %path.display(), error = %err, "Cannot read scan root")
                        }
                        WalkFailure::Directory => warn!(
                            path = %path.display(),
                            error = %err,
                            "Cannot read directory, skipping subtree"
                        ),
                        WalkFailure::Entry => {
                            warn!(path = %path.display(), error = %err, "Cannot read entry, skipping")
                        }
                    }
                    continue;
                }
            };

            let depth = entry.depth();
            parents.truncate(depth);
            let Some(&parent) = parents.get(depth - 1) else {
                warn!(path = %entry.path().display(), "Entry has no resolved parent, skipping");
                continue;
            };

            let name = segment_name(entry.file_name());
            let file_type = entry.file_type();

            if file_type.is_file() {
                let outcome = match hasher::digest_file(entry.path()) {
                    Ok(digest) => {
                        stats.files_hashed += 1;
                        stats.bytes_hashed += digest.size;
                        NodeOutcome::File {
                            size: digest.size,
                            digest: digest.to_hex(),
                        }
                    }
                    Err(err) => {
                        stats.files_failed += 1;
                        warn!(path = %entry.path().display(), error = %err, "Failed to hash file");
                        NodeOutcome::Failed {
                            error: failure_text(entry.path(), &err),
                        }
                    }
                };
                let id = self.store.upsert(parent, &name, &outcome)?;
                debug!(path = %entry.path().display(), id, digest = ?outcome.digest(), "File recorded");
            } else if file_type.is_dir() {
                let id = self.store.upsert(parent, &name, &NodeOutcome::Directory)?;
                stats.directories += 1;
                parents.push(Some(id));
                debug!(path = %entry.path().display(), id, "Directory recorded");
            } else {
                stats.entries_skipped += 1;
                trace!(path = %entry.path().display(), "Skipping non-regular entry");
            }
        }

        Ok(stats)
    }
}

/// Stored error text for a file that could not be hashed
fn failure_text(path: &Path, err: &std::io::Error) -> String {
    format!("{}: {}", path.display(), err)
}
