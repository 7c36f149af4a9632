//! Persistence layer for the Node Store

use crate::error::StorageError;
use crate::store::{NodeOutcome, NodeRecord, NodeStore};
use crate::types::NodeId;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use tracing::{debug, info};

/// On-disk parent value for nodes directly under the filesystem root.
///
/// SQLite treats NULLs as distinct in unique indexes, so the sentinel is a
/// real value that no store-assigned id can take.
const ROOT_PARENT: NodeId = 0;

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS node (
    id      INTEGER NOT NULL PRIMARY KEY,
    parent  INTEGER NULL,
    size    INTEGER NULL,
    digest  TEXT NULL,
    name    TEXT NOT NULL,
    error   TEXT NULL
);
CREATE UNIQUE INDEX IF NOT EXISTS node_parent_name ON node (parent, name);
CREATE INDEX IF NOT EXISTS node_digest ON node (digest);
"#;

const UPSERT_SQL: &str = r#"
INSERT INTO node (parent, name, digest, size, error) VALUES (?1, ?2, ?3, ?4, ?5)
    ON CONFLICT (parent, name) DO UPDATE
    SET digest = excluded.digest, size = excluded.size, error = excluded.error
    RETURNING id
"#;

const SELECT_COLUMNS: &str = "SELECT id, parent, name, size, digest, error FROM node";

/// SQLite-based implementation of NodeStore
///
/// Owns its connection; dropping the store closes the database.
pub struct SqliteNodeStore {
    conn: Connection,
}

impl SqliteNodeStore {
    /// Open (or create) the database at `path` and ensure the schema exists
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| {
            row.get::<_, String>(0)
        })?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;

        let store = Self::with_connection(conn)?;
        info!(path = %path.display(), nodes = store.count()?, "Node store opened");
        Ok(store)
    }

    /// Open a private in-memory database (used by tests and benchmarks)
    pub fn open_in_memory() -> Result<Self, StorageError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, StorageError> {
        conn.execute_batch(SCHEMA_SQL)?;
        debug!("Node schema ensured");
        Ok(Self { conn })
    }

    /// Get the underlying connection (for ad-hoc queries)
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    fn query_records(
        &self,
        sql: &str,
        params: impl rusqlite::Params,
    ) -> Result<Vec<NodeRecord>, StorageError> {
        let mut stmt = self.conn.prepare_cached(sql)?;
        let rows = stmt.query_map(params, record_from_row)?;
        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }
}

impl NodeStore for SqliteNodeStore {
    fn upsert(
        &self,
        parent: Option<NodeId>,
        name: &str,
        outcome: &NodeOutcome,
    ) -> Result<NodeId, StorageError> {
        let (digest, size, error): (Option<&str>, Option<i64>, Option<&str>) = match outcome {
            NodeOutcome::Directory => (None, None, None),
            NodeOutcome::File { size, digest } => {
                (Some(digest.as_str()), Some(*size as i64), None)
            }
            NodeOutcome::Failed { error } => (None, None, Some(error.as_str())),
        };

        let mut stmt = self.conn.prepare_cached(UPSERT_SQL)?;
        let id = stmt.query_row(
            params![encode_parent(parent), name, digest, size, error],
            |row| row.get::<_, NodeId>(0),
        )?;
        Ok(id)
    }

    fn get(&self, id: NodeId) -> Result<Option<NodeRecord>, StorageError> {
        let sql = format!("{SELECT_COLUMNS} WHERE id = ?1");
        let mut stmt = self.conn.prepare_cached(&sql)?;
        let record = stmt.query_row(params![id], record_from_row).optional()?;
        Ok(record)
    }

    fn lookup(
        &self,
        parent: Option<NodeId>,
        name: &str,
    ) -> Result<Option<NodeRecord>, StorageError> {
        let sql = format!("{SELECT_COLUMNS} WHERE parent = ?1 AND name = ?2");
        let mut stmt = self.conn.prepare_cached(&sql)?;
        let record = stmt
            .query_row(params![encode_parent(parent), name], record_from_row)
            .optional()?;
        Ok(record)
    }

    fn children(&self, parent: Option<NodeId>) -> Result<Vec<NodeRecord>, StorageError> {
        let sql = format!("{SELECT_COLUMNS} WHERE parent = ?1 ORDER BY name");
        self.query_records(&sql, params![encode_parent(parent)])
    }

    fn find_by_digest(&self, digest: &str) -> Result<Vec<NodeRecord>, StorageError> {
        let sql = format!("{SELECT_COLUMNS} WHERE digest = ?1 ORDER BY id");
        self.query_records(&sql, params![digest])
    }

    fn count(&self) -> Result<u64, StorageError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM node", [], |row| row.get(0))?;
        Ok(count as u64)
    }
}

fn encode_parent(parent: Option<NodeId>) -> NodeId {
    parent.unwrap_or(ROOT_PARENT)
}

fn decode_parent(raw: Option<NodeId>) -> Option<NodeId> {
    raw.filter(|id| *id != ROOT_PARENT)
}

fn record_from_row(row: &Row<'_>) -> rusqlite::Result<NodeRecord> {
    let size: Option<i64> = row.get(3)?;
    let digest: Option<String> = row.get(4)?;
    let error: Option<String> = row.get(5)?;

    let outcome = match (digest, size, error) {
        (Some(digest), Some(size), _) => NodeOutcome::File {
            size: size as u64,
            digest,
        },
        (_, _, Some(error)) => NodeOutcome::Failed { error },
        _ => NodeOutcome::Directory,
    };

    Ok(NodeRecord {
        id: row.get(0)?,
        parent: decode_parent(row.get(1)?),
        name: row.get(2)?,
        outcome,
    })
}
