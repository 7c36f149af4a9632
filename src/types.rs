//! Core types for the filesystem fingerprint store.

/// NodeId: Store-assigned identifier of a node, stable across re-scans
pub type NodeId = i64;

/// Digest: Raw 256-bit content digest of a regular file
pub type Digest = [u8; 32];
