//! Integration tests for entries the scanner leaves out or cannot read

use super::test_utils::find_path;
use fsfingerprint::store::{NodeStore, SqliteNodeStore};
use fsfingerprint::tree::TreeScanner;
use std::fs;
use tempfile::TempDir;

/// Symlinks, sockets and named pipes are never stored; links are never followed
#[cfg(unix)]
#[test]
fn test_non_regular_entries_are_skipped() {
    use std::os::unix::net::UnixListener;
    use std::process::Command;

    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("root");
    let elsewhere = temp_dir.path().join("elsewhere");
    fs::create_dir_all(&root).unwrap();
    fs::create_dir_all(&elsewhere).unwrap();
    fs::write(elsewhere.join("outside.txt"), "outside").unwrap();
    fs::write(root.join("kept.txt"), "kept").unwrap();

    std::os::unix::fs::symlink(&elsewhere, root.join("dir_link")).unwrap();
    std::os::unix::fs::symlink(root.join("kept.txt"), root.join("file_link")).unwrap();
    let _listener = UnixListener::bind(root.join("sock")).unwrap();
    let status = Command::new("mkfifo").arg(root.join("pipe")).status().unwrap();
    assert!(status.success(), "mkfifo failed");

    let store = SqliteNodeStore::open_in_memory().unwrap();
    let stats = TreeScanner::new(&store).scan_root(&root).unwrap();

    assert_eq!(stats.files_hashed, 1);
    assert_eq!(stats.entries_skipped, 4);

    let root_node = find_path(&store, &root).unwrap();
    let names: Vec<_> = store
        .children(Some(root_node.id))
        .unwrap()
        .into_iter()
        .map(|r| r.name)
        .collect();
    assert_eq!(names, vec!["kept.txt"]);
    assert!(find_path(&store, &elsewhere).is_none());
}

/// An unreadable directory is recorded but its subtree is skipped
#[cfg(unix)]
#[test]
fn test_unreadable_directory_does_not_abort_scan() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("root");
    let locked = root.join("locked");
    fs::create_dir_all(&locked).unwrap();
    fs::write(locked.join("hidden"), "hidden").unwrap();
    fs::write(root.join("visible"), "visible").unwrap();

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
    if fs::read_dir(&locked).is_ok() {
        // Running with privileges that bypass permission checks
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let store = SqliteNodeStore::open_in_memory().unwrap();
    let result = TreeScanner::new(&store).scan_root(&root);
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
    let stats = result.unwrap();

    assert_eq!(stats.unreadable, 1);
    assert_eq!(stats.files_hashed, 1);
    assert!(find_path(&store, &locked).unwrap().outcome.is_directory());
    assert!(find_path(&store, &locked.join("hidden")).is_none());
    assert!(find_path(&store, &root.join("visible")).is_some());
}

/// An unreadable file is recorded with an error instead of a digest
#[cfg(unix)]
#[test]
fn test_unreadable_file_records_error() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("root");
    fs::create_dir_all(&root).unwrap();
    let secret = root.join("secret");
    fs::write(&secret, "secret").unwrap();
    fs::write(root.join("open"), "open").unwrap();

    fs::set_permissions(&secret, fs::Permissions::from_mode(0o000)).unwrap();
    if fs::File::open(&secret).is_ok() {
        return;
    }

    let store = SqliteNodeStore::open_in_memory().unwrap();
    let stats = TreeScanner::new(&store).scan_root(&root).unwrap();

    assert_eq!(stats.files_failed, 1);
    assert_eq!(stats.files_hashed, 1);

    let record = find_path(&store, &secret).unwrap();
    assert_eq!(record.outcome.digest(), None);
    assert_eq!(record.outcome.size(), None);
    let error = record.outcome.error().unwrap();
    assert!(error.contains(&secret.display().to_string()), "error was: {}", error);
}

/// A root that does not exist leaves only its ancestor chain behind
#[test]
fn test_missing_root_continues() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing");
    let present = temp_dir.path().join("present");
    fs::create_dir_all(&present).unwrap();
    fs::write(present.join("f"), "f").unwrap();

    let store = SqliteNodeStore::open_in_memory().unwrap();
    let scanner = TreeScanner::new(&store);
    let missing_stats = scanner.scan_root(&missing).unwrap();
    let present_stats = scanner.scan_root(&present).unwrap();

    assert_eq!(missing_stats.unreadable, 1);
    assert_eq!(present_stats.files_hashed, 1);
    assert!(find_path(&store, &present.join("f")).is_some());
}
