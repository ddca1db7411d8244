use super::{blob_location, ContentStore};
use crate::error::{DocshelfError, Result};
use std::fs;
use std::path::PathBuf;

/// Content-addressable blob storage on the local file system.
///
/// Bytes are stored under their SHA-256 digest, sharded by the first two
/// hex characters: `<root>/ab/ab34...ef.pdf`. Re-storing identical bytes
/// overwrites the same blob, so duplicate uploads cost one file.
pub struct FileContent {
    root: PathBuf,
}

impl FileContent {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn blob_path(&self, location: &str) -> PathBuf {
        self.root.join(location)
    }
}

impl ContentStore for FileContent {
    fn store(&mut self, bytes: &[u8], suggested_name: &str) -> Result<String> {
        let location = blob_location(bytes, suggested_name);
        let path = self.blob_path(&location);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(DocshelfError::Io)?;
        }
        fs::write(&path, bytes).map_err(DocshelfError::Io)?;

        Ok(location)
    }

    fn remove(&mut self, location: &str) -> Result<()> {
        let path = self.blob_path(location);
        if !path.exists() {
            return Err(DocshelfError::Content(format!(
                "blob not found: {}",
                location
            )));
        }
        fs::remove_file(&path).map_err(DocshelfError::Io)?;

        // Prune the shard directory if this was its last blob
        if let Some(parent) = path.parent() {
            let is_empty = fs::read_dir(parent)
                .map(|mut entries| entries.next().is_none())
                .unwrap_or(false);
            if is_empty {
                let _ = fs::remove_dir(parent);
            }
        }

        Ok(())
    }
}
