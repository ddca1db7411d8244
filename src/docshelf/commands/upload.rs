use crate::commands::{CmdMessage, CmdResult};
use crate::content::ContentStore;
use crate::error::Result;
use crate::model::Document;
use crate::ordering::append_position;
use crate::store::{CommitBatch, RecordStore};
use log::warn;

/// Adds a new document at the end of the shelf.
///
/// The bytes go to the content store first; the record commit is then a
/// single insert with `position = count + 1`. No existing document moves.
pub fn run<S: RecordStore, C: ContentStore>(
    record: &mut S,
    content: &mut C,
    name: &str,
    bytes: &[u8],
) -> Result<CmdResult> {
    let location = content.store(bytes, name)?;
    let count = record.count()?;
    let document = Document::new(
        name.to_string(),
        location.clone(),
        bytes.len() as u64,
        append_position(count),
    );

    if let Err(err) = record.commit(CommitBatch::insert(document.clone())) {
        // The record never became visible; drop the blob we just wrote,
        // unless an existing document already shares it.
        let referenced = record
            .get_all()
            .map(|docs| docs.iter().any(|d| d.location == location))
            .unwrap_or(true);
        if !referenced {
            if let Err(cleanup) = content.remove(&location) {
                warn!(
                    "could not remove blob {} after failed commit: {}",
                    location, cleanup
                );
            }
        }
        return Err(err);
    }

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Added {} at position {}",
        document.name, document.position
    )));
    result.affected_documents.push(document);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::memory::InMemoryContent;
    use crate::store::memory::fixtures::CatalogFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn upload_appends_at_the_end() {
        let mut store = CatalogFixture::new().with_documents(4).store;
        let mut content = InMemoryContent::new();

        let result = run(&mut store, &mut content, "new.pdf", b"new bytes").unwrap();

        assert_eq!(result.affected_documents[0].position, 5);
        assert_eq!(store.commits(), 1);

        let documents = store.get_all().unwrap();
        assert_eq!(documents.len(), 5);
        // nobody else moved
        for (i, document) in documents.iter().enumerate() {
            assert_eq!(document.position, i + 1);
        }
    }

    #[test]
    fn first_upload_lands_at_position_one() {
        let mut store = InMemoryStore::new();
        let mut content = InMemoryContent::new();

        let result = run(&mut store, &mut content, "only.pdf", b"bytes").unwrap();

        assert_eq!(result.affected_documents[0].position, 1);
        assert_eq!(result.affected_documents[0].file_size, 5);
    }

    #[test]
    fn failed_commit_cleans_up_the_blob() {
        let mut store = InMemoryStore::new();
        let mut content = InMemoryContent::new();

        store.fail_next_commit();
        let err = run(&mut store, &mut content, "doomed.pdf", b"bytes");

        assert!(err.is_err());
        assert_eq!(store.count().unwrap(), 0);
        assert_eq!(content.blob_count(), 0);
    }

    #[test]
    fn failed_commit_keeps_a_blob_another_document_shares() {
        let mut store = InMemoryStore::new();
        let mut content = InMemoryContent::new();

        run(&mut store, &mut content, "kept.pdf", b"shared bytes").unwrap();

        store.fail_next_commit();
        let err = run(&mut store, &mut content, "dupe.pdf", b"shared bytes");

        assert!(err.is_err());
        assert_eq!(content.blob_count(), 1);
    }
}
