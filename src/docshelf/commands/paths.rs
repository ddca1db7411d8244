use crate::commands::helpers::resolve_positions;
use crate::commands::{CatalogPaths, CmdResult};
use crate::config::DocshelfConfig;
use crate::error::Result;
use crate::store::RecordStore;
use std::path::PathBuf;

/// Prints where the stored bytes of the selected documents live on disk.
pub fn run<S: RecordStore>(
    store: &S,
    paths: &CatalogPaths,
    positions: &[usize],
) -> Result<CmdResult> {
    let config = DocshelfConfig::load(&paths.root)?;
    let blob_root = paths.root.join(config.get_content_dir());

    let resolved = resolve_positions(store, positions)?;
    let mut blob_paths: Vec<PathBuf> = Vec::with_capacity(resolved.len());
    for (_, id) in resolved {
        let document = store.get(&id)?;
        blob_paths.push(blob_root.join(&document.location));
    }

    Ok(CmdResult::default().with_document_paths(blob_paths))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::CatalogFixture;

    #[test]
    fn joins_blob_root_and_location() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = CatalogFixture::new().with_named(&["a", "b"]).store;
        let paths = CatalogPaths::new(temp_dir.path().to_path_buf());

        let result = run(&store, &paths, &[2]).unwrap();

        assert_eq!(result.document_paths.len(), 1);
        assert_eq!(
            result.document_paths[0],
            temp_dir.path().join("blobs").join("aa/b")
        );
    }
}
