//! Filesystem tree mirroring
//!
//! Walks filesystem roots depth-first and maps every path segment onto a
//! persistent node, attaching SHA-256 digests to regular files.

pub mod hasher;
pub mod path;
pub mod scanner;

pub use scanner::{ScanStats, TreeScanner};
