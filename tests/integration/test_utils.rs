//! Shared helpers for integration tests

use fsfingerprint::store::{NodeRecord, NodeStore};
use fsfingerprint::tree::path::anchor_segments;
use std::path::Path;

/// Walk the stored chain for an absolute `path`, one segment at a time.
pub fn find_path<S: NodeStore>(store: &S, path: &Path) -> Option<NodeRecord> {
    let mut parent = None;
    let mut record = None;
    for segment in anchor_segments(path, Path::new("/")).unwrap() {
        let found = store.lookup(parent, &segment).unwrap()?;
        parent = Some(found.id);
        record = Some(found);
    }
    record
}

/// Every stored record, depth first from the filesystem root.
pub fn all_records<S: NodeStore>(store: &S) -> Vec<NodeRecord> {
    let mut out = Vec::new();
    let mut pending = store.children(None).unwrap();
    while let Some(record) = pending.pop() {
        pending.extend(store.children(Some(record.id)).unwrap());
        out.push(record);
    }
    out
}

/// Hex SHA-256 of `content`
pub fn sha256_hex(content: &[u8]) -> String {
    hex::encode(fsfingerprint::tree::hasher::digest_bytes(content))
}
