use super::{CommitBatch, PrimaryOp, RecordStore};
use crate::error::{DocshelfError, Result};
use crate::model::Document;
use std::collections::HashMap;
use uuid::Uuid;

/// In-memory catalog storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    documents: HashMap<Uuid, Document>,
    commits: usize,
    fail_next_commit: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of commits applied so far. Lets tests observe that a no-op
    /// issued zero writes.
    pub fn commits(&self) -> usize {
        self.commits
    }

    /// Make the next commit fail without applying anything.
    pub fn fail_next_commit(&mut self) {
        self.fail_next_commit = true;
    }
}

impl RecordStore for InMemoryStore {
    fn count(&self) -> Result<usize> {
        Ok(self.documents.len())
    }

    fn get_all(&self) -> Result<Vec<Document>> {
        let mut documents: Vec<Document> = self.documents.values().cloned().collect();
        documents.sort_by_key(|d| d.position);
        Ok(documents)
    }

    fn get(&self, id: &Uuid) -> Result<Document> {
        self.documents
            .get(id)
            .cloned()
            .ok_or(DocshelfError::DocumentNotFound(*id))
    }

    fn commit(&mut self, batch: CommitBatch) -> Result<()> {
        if self.fail_next_commit {
            self.fail_next_commit = false;
            return Err(DocshelfError::Store("injected commit failure".to_string()));
        }

        match batch.primary {
            PrimaryOp::Insert(document) | PrimaryOp::Update(document) => {
                self.documents.insert(document.id, document);
            }
            PrimaryOp::Delete(id) => {
                if self.documents.remove(&id).is_none() {
                    return Err(DocshelfError::DocumentNotFound(id));
                }
            }
        }

        for document in batch.affected {
            self.documents.insert(document.id, document);
        }

        self.commits += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct CatalogFixture {
        pub store: InMemoryStore,
    }

    impl Default for CatalogFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl CatalogFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Seeds documents at positions 1..=count, bypassing the commit
        /// counter so tests start from zero observed writes.
        pub fn with_documents(self, count: usize) -> Self {
            let names: Vec<String> = (1..=count).map(|i| format!("doc-{}.pdf", i)).collect();
            let names: Vec<&str> = names.iter().map(String::as_str).collect();
            self.with_named(&names)
        }

        /// Seeds named documents at positions 1..=N in the given order.
        pub fn with_named(mut self, names: &[&str]) -> Self {
            for (i, name) in names.iter().enumerate() {
                let document = Document::new(
                    name.to_string(),
                    format!("aa/{}", name),
                    1024,
                    i + 1,
                );
                self.store.documents.insert(document.id, document);
            }
            self
        }
    }
}
