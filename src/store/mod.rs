//! Node Store
//!
//! Persistent mapping from a path segment, scoped by its parent, to a stable
//! node identifier. Each node carries the outcome of its last observation:
//! a directory, a hashed file, or a file that could not be hashed.

pub mod persistence;

pub use persistence::SqliteNodeStore;

use crate::error::StorageError;
use crate::types::NodeId;

/// Outcome recorded for a node on its most recent observation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeOutcome {
    /// Directory or ancestor-chain segment: no size, digest or error
    Directory,
    /// Regular file hashed successfully
    File { size: u64, digest: String },
    /// Regular file whose content could not be read
    Failed { error: String },
}

impl NodeOutcome {
    pub fn is_directory(&self) -> bool {
        matches!(self, NodeOutcome::Directory)
    }

    pub fn digest(&self) -> Option<&str> {
        match self {
            NodeOutcome::File { digest, .. } => Some(digest),
            _ => None,
        }
    }

    pub fn size(&self) -> Option<u64> {
        match self {
            NodeOutcome::File { size, .. } => Some(*size),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            NodeOutcome::Failed { error } => Some(error),
            _ => None,
        }
    }
}

/// NodeRecord: A node as read back from the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeRecord {
    pub id: NodeId,
    /// None for nodes directly under the filesystem root
    pub parent: Option<NodeId>,
    pub name: String,
    pub outcome: NodeOutcome,
}

/// Node Store interface
pub trait NodeStore {
    /// Insert the node for `(parent, name)` or refresh its outcome in place.
    ///
    /// Returns the node's id, which is the same on every call for the same key.
    fn upsert(
        &self,
        parent: Option<NodeId>,
        name: &str,
        outcome: &NodeOutcome,
    ) -> Result<NodeId, StorageError>;

    fn get(&self, id: NodeId) -> Result<Option<NodeRecord>, StorageError>;

    /// Find the node named `name` under `parent`
    fn lookup(&self, parent: Option<NodeId>, name: &str)
        -> Result<Option<NodeRecord>, StorageError>;

    /// Direct children of `parent`, ordered by name
    fn children(&self, parent: Option<NodeId>) -> Result<Vec<NodeRecord>, StorageError>;

    /// All file nodes carrying the given hex digest, ordered by id
    fn find_by_digest(&self, digest: &str) -> Result<Vec<NodeRecord>, StorageError>;

    /// Total number of nodes
    fn count(&self) -> Result<u64, StorageError>;
}
