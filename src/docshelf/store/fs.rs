use super::{CommitBatch, PrimaryOp, RecordStore};
use crate::error::{DocshelfError, Result};
use crate::model::Document;
use log::debug;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

const CATALOG_FILENAME: &str = "catalog.json";

/// File-backed catalog storage.
///
/// All records live in a single `catalog.json` under the root. A commit
/// loads the catalog, applies the whole batch in memory, then writes a temp
/// file and renames it over the catalog; readers see the old catalog or
/// the new one, never a partial batch.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn catalog_path(&self) -> PathBuf {
        self.root.join(CATALOG_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(DocshelfError::Io)?;
        }
        Ok(())
    }

    fn load_catalog(&self) -> Result<HashMap<Uuid, Document>> {
        let catalog_file = self.catalog_path();
        if !catalog_file.exists() {
            return Ok(HashMap::new());
        }
        let content = fs::read_to_string(catalog_file).map_err(DocshelfError::Io)?;
        let catalog: HashMap<Uuid, Document> =
            serde_json::from_str(&content).map_err(DocshelfError::Serialization)?;
        Ok(catalog)
    }

    fn save_catalog(&self, catalog: &HashMap<Uuid, Document>) -> Result<()> {
        self.ensure_dir()?;
        let content =
            serde_json::to_string_pretty(catalog).map_err(DocshelfError::Serialization)?;

        // Atomic write: the rename makes the whole batch visible at once
        let tmp_file = self.root.join(format!(".catalog-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(DocshelfError::Io)?;
        fs::rename(&tmp_file, self.catalog_path()).map_err(DocshelfError::Io)?;

        Ok(())
    }
}

impl RecordStore for FileStore {
    fn count(&self) -> Result<usize> {
        Ok(self.load_catalog()?.len())
    }

    fn get_all(&self) -> Result<Vec<Document>> {
        let mut documents: Vec<Document> = self.load_catalog()?.into_values().collect();
        documents.sort_by_key(|d| d.position);
        Ok(documents)
    }

    fn get(&self, id: &Uuid) -> Result<Document> {
        self.load_catalog()?
            .remove(id)
            .ok_or(DocshelfError::DocumentNotFound(*id))
    }

    fn commit(&mut self, batch: CommitBatch) -> Result<()> {
        let mut catalog = self.load_catalog()?;

        debug!(
            "committing batch with {} affected update(s)",
            batch.affected.len()
        );

        match batch.primary {
            PrimaryOp::Insert(document) | PrimaryOp::Update(document) => {
                catalog.insert(document.id, document);
            }
            PrimaryOp::Delete(id) => {
                if catalog.remove(&id).is_none() {
                    return Err(DocshelfError::DocumentNotFound(id));
                }
            }
        }

        for document in batch.affected {
            catalog.insert(document.id, document);
        }

        self.save_catalog(&catalog)
    }
}
