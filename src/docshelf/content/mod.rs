//! # Content Storage
//!
//! Document bytes live outside the record catalog, behind the
//! [`ContentStore`] trait. A blob is written before the record commit that
//! references it and removed only after the commit that drops the last
//! reference, so a crash can leave an orphaned blob but never a record
//! pointing at missing bytes. Orphans are logged, not surfaced.
//!
//! ## Implementations
//!
//! - [`fs::FileContent`]: content-addressable blob storage on disk,
//!   SHA-256-named and sharded by digest prefix
//! - [`memory::InMemoryContent`]: in-memory storage for testing, with
//!   injectable remove failure

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Abstract interface for document content storage.
pub trait ContentStore {
    /// Store raw bytes, returning an opaque location reference.
    fn store(&mut self, bytes: &[u8], suggested_name: &str) -> Result<String>;

    /// Remove previously stored bytes.
    fn remove(&mut self, location: &str) -> Result<()>;
}

/// Location for a blob: `<2-char digest prefix>/<sha256 hex><original ext>`.
/// Identical bytes with the same extension map to the same location, so
/// duplicate uploads share one blob.
pub(crate) fn blob_location(bytes: &[u8], suggested_name: &str) -> String {
    use sha2::{Digest, Sha256};

    let digest = hex::encode(Sha256::digest(bytes));
    let ext = std::path::Path::new(suggested_name)
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    format!("{}/{}{}", &digest[..2], digest, ext)
}
