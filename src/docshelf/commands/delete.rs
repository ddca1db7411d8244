use crate::commands::{CmdMessage, CmdResult};
use crate::content::ContentStore;
use crate::error::Result;
use crate::ordering::shift_for_delete;
use crate::store::{CommitBatch, RecordStore};
use log::{debug, warn};
use uuid::Uuid;

/// Deletes documents, closing the gap each one leaves.
///
/// Each deletion commits the record removal together with the displaced
/// position updates as one batch, then removes the blob. Blob removal
/// happens after the commit and is never allowed to fail the operation:
/// the catalog is already consistent, so a leftover blob is just logged.
pub fn run<S: RecordStore, C: ContentStore>(
    record: &mut S,
    content: &mut C,
    ids: &[Uuid],
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for id in ids {
        let document = record.get(id)?;
        let documents = record.get_all()?;
        let displaced = shift_for_delete(&documents, document.position);

        record.commit(CommitBatch::delete(document.id).with_affected(displaced))?;

        let shared = documents
            .iter()
            .any(|d| d.id != document.id && d.location == document.location);
        if shared {
            debug!(
                "keeping blob {} still referenced by another document",
                document.location
            );
        } else if let Err(err) = content.remove(&document.location) {
            warn!(
                "could not remove blob {} for deleted document {}: {}",
                document.location, document.id, err
            );
        }

        result.add_message(CmdMessage::success(format!(
            "Deleted {} (was position {})",
            document.name, document.position
        )));
        result.affected_documents.push(document);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::memory::InMemoryContent;
    use crate::error::DocshelfError;
    use crate::ordering::is_contiguous;
    use crate::store::memory::fixtures::CatalogFixture;

    #[test]
    fn delete_closes_the_gap() {
        let mut store = CatalogFixture::new().with_named(&["a", "b", "c", "d"]).store;
        let mut content = InMemoryContent::new();
        let target = store.get_all().unwrap()[1].id;

        run(&mut store, &mut content, &[target]).unwrap();

        let remaining = store.get_all().unwrap();
        let names: Vec<&str> = remaining.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c", "d"]);
        assert!(is_contiguous(&remaining));
    }

    #[test]
    fn delete_of_last_position_touches_nobody_else() {
        let mut store = CatalogFixture::new().with_named(&["a", "b", "c"]).store;
        let mut content = InMemoryContent::new();
        let target = store.get_all().unwrap()[2].id;

        run(&mut store, &mut content, &[target]).unwrap();

        let remaining = store.get_all().unwrap();
        assert_eq!(remaining.len(), 2);
        assert!(is_contiguous(&remaining));
        assert_eq!(store.commits(), 1);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let mut store = CatalogFixture::new().with_documents(1).store;
        let mut content = InMemoryContent::new();

        let err = run(&mut store, &mut content, &[Uuid::new_v4()]);
        assert!(matches!(err, Err(DocshelfError::DocumentNotFound(_))));
    }

    #[test]
    fn blob_remove_failure_is_swallowed() {
        let mut store = CatalogFixture::new().with_documents(2).store;
        let mut content = InMemoryContent::new();
        let target = store.get_all().unwrap()[0].id;

        content.fail_next_remove();
        let result = run(&mut store, &mut content, &[target]);

        assert!(result.is_ok());
        assert_eq!(store.count().unwrap(), 1);
        assert!(is_contiguous(&store.get_all().unwrap()));
    }

    #[test]
    fn shared_blob_survives_until_its_last_reference_goes() {
        let mut store = CatalogFixture::new().store;
        let mut content = InMemoryContent::new();

        crate::commands::upload::run(&mut store, &mut content, "a.pdf", b"shared").unwrap();
        crate::commands::upload::run(&mut store, &mut content, "b.pdf", b"shared").unwrap();
        assert_eq!(content.blob_count(), 1);
        let location = store.get_all().unwrap()[0].location.clone();

        let first = store.get_all().unwrap()[0].id;
        run(&mut store, &mut content, &[first]).unwrap();
        assert!(content.contains(&location));

        let last = store.get_all().unwrap()[0].id;
        run(&mut store, &mut content, &[last]).unwrap();
        assert!(!content.contains(&location));
        assert_eq!(content.blob_count(), 0);
    }

    #[test]
    fn multi_delete_stays_contiguous() {
        let mut store = CatalogFixture::new()
            .with_named(&["a", "b", "c", "d", "e"])
            .store;
        let mut content = InMemoryContent::new();
        let documents = store.get_all().unwrap();
        let ids = vec![documents[1].id, documents[3].id];

        run(&mut store, &mut content, &ids).unwrap();

        let remaining = store.get_all().unwrap();
        let names: Vec<&str> = remaining.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c", "e"]);
        assert!(is_contiguous(&remaining));
    }
}
