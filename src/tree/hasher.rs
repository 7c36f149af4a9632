//! Content digests for regular files using SHA-256

use crate::types::Digest;
use sha2::{Digest as _, Sha256};
use std::fs::File;
use std::io;
use std::path::Path;

/// Digest of a file's full content together with the number of bytes hashed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileDigest {
    pub digest: Digest,
    pub size: u64,
}

impl FileDigest {
    /// Lowercase hex form, as persisted in the node store
    pub fn to_hex(&self) -> String {
        hex::encode(self.digest)
    }
}

/// Stream a file through SHA-256
///
/// The content is copied through the hasher in chunks, so memory use does not
/// grow with file size. The file handle is closed before returning, on success
/// and on error alike.
pub fn digest_file(path: &Path) -> io::Result<FileDigest> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    let size = io::copy(&mut file, &mut hasher)?;

    Ok(FileDigest {
        digest: hasher.finalize().into(),
        size,
    })
}

/// Compute the digest of an in-memory buffer
pub fn digest_bytes(content: &[u8]) -> Digest {
    Sha256::digest(content).into()
}
