//! fsfingerprint: Filesystem Fingerprint Store
//!
//! Mirrors one or more filesystem trees into a SQLite database, recording
//! every directory and regular file as a node keyed by (parent, name) and
//! fingerprinting file content with SHA-256. Re-scans update nodes in place,
//! so node ids stay stable across runs.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod store;
pub mod tree;
pub mod types;
