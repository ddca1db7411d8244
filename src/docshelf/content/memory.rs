use super::{blob_location, ContentStore};
use crate::error::{DocshelfError, Result};
use std::collections::HashMap;

/// In-memory content storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryContent {
    blobs: HashMap<String, Vec<u8>>,
    fail_next_remove: bool,
}

impl InMemoryContent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next remove fail, leaving the blob in place.
    pub fn fail_next_remove(&mut self) {
        self.fail_next_remove = true;
    }

    pub fn blob_count(&self) -> usize {
        self.blobs.len()
    }

    pub fn contains(&self, location: &str) -> bool {
        self.blobs.contains_key(location)
    }
}

impl ContentStore for InMemoryContent {
    fn store(&mut self, bytes: &[u8], suggested_name: &str) -> Result<String> {
        let location = blob_location(bytes, suggested_name);
        self.blobs.insert(location.clone(), bytes.to_vec());
        Ok(location)
    }

    fn remove(&mut self, location: &str) -> Result<()> {
        if self.fail_next_remove {
            self.fail_next_remove = false;
            return Err(DocshelfError::Content(
                "injected remove failure".to_string(),
            ));
        }
        if self.blobs.remove(location).is_none() {
            return Err(DocshelfError::Content(format!(
                "blob not found: {}",
                location
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_bytes_share_a_location() {
        let mut content = InMemoryContent::new();
        let first = content.store(b"same bytes", "a.pdf").unwrap();
        let second = content.store(b"same bytes", "b.pdf").unwrap();

        assert_eq!(first, second);
        assert_eq!(content.blob_count(), 1);
    }

    #[test]
    fn remove_failure_leaves_the_blob() {
        let mut content = InMemoryContent::new();
        let location = content.store(b"bytes", "a.pdf").unwrap();

        content.fail_next_remove();
        assert!(content.remove(&location).is_err());
        assert!(content.contains(&location));

        content.remove(&location).unwrap();
        assert!(!content.contains(&location));
    }
}
