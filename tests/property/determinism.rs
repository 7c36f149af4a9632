//! Property-based tests for determinism guarantees

use fsfingerprint::store::{NodeOutcome, NodeStore, SqliteNodeStore};
use fsfingerprint::tree::hasher;
use proptest::prelude::*;
use proptest::test_runner::{Config, TestRunner};
use std::collections::HashMap;
use std::fs;
use tempfile::TempDir;

/// Upserting any sequence of keys yields one node per distinct key,
/// and repeated keys always get the id they were first given
#[test]
fn test_upsert_uniqueness_property() {
    let mut runner = TestRunner::new(Config::with_cases(64));

    let key = (0usize..4, "[a-c]{1,2}");
    runner
        .run(&proptest::collection::vec(key, 1..40), |keys| {
            let store = SqliteNodeStore::open_in_memory().unwrap();
            let parents = [
                None,
                Some(store.upsert(None, "p1", &NodeOutcome::Directory).unwrap()),
                Some(store.upsert(None, "p2", &NodeOutcome::Directory).unwrap()),
                Some(store.upsert(None, "p3", &NodeOutcome::Directory).unwrap()),
            ];

            let mut seen: HashMap<(Option<i64>, String), i64> = HashMap::new();
            for (parent_index, name) in keys {
                let parent = parents[parent_index];
                let id = store.upsert(parent, &name, &NodeOutcome::Directory).unwrap();
                let first = *seen.entry((parent, name.clone())).or_insert(id);
                prop_assert_eq!(first, id);
            }

            // Generated names never collide with the three fixed parents
            prop_assert_eq!(store.count().unwrap(), (seen.len() + 3) as u64);
            Ok(())
        })
        .unwrap();
}

/// Hashing a file gives the digest of its bytes and counts every byte
#[test]
fn test_file_digest_property() {
    let mut runner = TestRunner::new(Config::with_cases(32));
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("content");

    runner
        .run(&proptest::collection::vec(any::<u8>(), 0..20_000), |content| {
            fs::write(&path, &content).unwrap();
            let result = hasher::digest_file(&path).unwrap();

            prop_assert_eq!(result.size, content.len() as u64);
            prop_assert_eq!(result.digest, hasher::digest_bytes(&content));
            prop_assert_eq!(result.to_hex().len(), 64);
            Ok(())
        })
        .unwrap();
}

/// The last outcome written for a key is the one read back
#[test]
fn test_last_write_wins_property() {
    let mut runner = TestRunner::default();

    let outcome = prop_oneof![
        Just(NodeOutcome::Directory),
        (any::<u32>(), "[0-9a-f]{64}").prop_map(|(size, digest)| NodeOutcome::File {
            size: size as u64,
            digest,
        }),
        "[ -~]{1,30}".prop_map(|error| NodeOutcome::Failed { error }),
    ];

    runner
        .run(&proptest::collection::vec(outcome, 1..10), |outcomes| {
            let store = SqliteNodeStore::open_in_memory().unwrap();
            let mut id = None;
            for outcome in &outcomes {
                let next = store.upsert(None, "entry", outcome).unwrap();
                prop_assert!(id.map_or(true, |prev| prev == next));
                id = Some(next);
            }

            let record = store.lookup(None, "entry").unwrap().unwrap();
            prop_assert_eq!(Some(&record.outcome), outcomes.last());
            Ok(())
        })
        .unwrap();
}
