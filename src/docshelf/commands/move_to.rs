use crate::commands::{CmdMessage, CmdResult};
use crate::error::{DocshelfError, Result};
use crate::ordering::shift_for_move;
use crate::store::{CommitBatch, RecordStore};
use uuid::Uuid;

/// Moves a document to a new position, shifting exactly the documents in
/// between by one step each.
///
/// Moving a document onto its own position is a no-op that issues no
/// commit. An out-of-range target is rejected before the document set is
/// read. Otherwise the moved document and its displaced neighbours are
/// committed as one batch.
pub fn run<S: RecordStore>(record: &mut S, id: &Uuid, new_position: usize) -> Result<CmdResult> {
    let document = record.get(id)?;
    let mut result = CmdResult::default();

    if document.position == new_position {
        result.add_message(CmdMessage::info(format!(
            "{} is already at position {}",
            document.name, new_position
        )));
        return Ok(result);
    }

    let count = record.count()?;
    if new_position < 1 || new_position > count {
        return Err(DocshelfError::PositionOutOfRange {
            position: new_position,
            count,
        });
    }

    let documents = record.get_all()?;
    let displaced = shift_for_move(&documents, document.position, new_position);

    let old_position = document.position;
    let mut moved = document;
    moved.position = new_position;
    record.commit(CommitBatch::update(moved.clone()).with_affected(displaced))?;

    result.add_message(CmdMessage::success(format!(
        "Moved {} from position {} to {}",
        moved.name, old_position, new_position
    )));
    result.affected_documents.push(moved);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ordering::is_contiguous;
    use crate::store::memory::fixtures::CatalogFixture;

    fn names_in_order<S: RecordStore>(store: &S) -> Vec<String> {
        store
            .get_all()
            .unwrap()
            .into_iter()
            .map(|d| d.name)
            .collect()
    }

    #[test]
    fn move_first_to_third() {
        let mut store = CatalogFixture::new().with_named(&["a", "b", "c", "d"]).store;
        let id = store.get_all().unwrap()[0].id;

        run(&mut store, &id, 3).unwrap();

        assert_eq!(names_in_order(&store), vec!["b", "c", "a", "d"]);
        assert!(is_contiguous(&store.get_all().unwrap()));
    }

    #[test]
    fn move_last_to_first() {
        let mut store = CatalogFixture::new().with_named(&["a", "b", "c", "d"]).store;
        let id = store.get_all().unwrap()[3].id;

        run(&mut store, &id, 1).unwrap();

        assert_eq!(names_in_order(&store), vec!["d", "a", "b", "c"]);
        assert!(is_contiguous(&store.get_all().unwrap()));
    }

    #[test]
    fn move_to_own_position_issues_no_commit() {
        let mut store = CatalogFixture::new().with_named(&["a", "b"]).store;
        let id = store.get_all().unwrap()[1].id;

        let result = run(&mut store, &id, 2).unwrap();

        assert_eq!(store.commits(), 0);
        assert!(result.affected_documents.is_empty());
        assert_eq!(names_in_order(&store), vec!["a", "b"]);
    }

    #[test]
    fn out_of_range_targets_are_rejected() {
        let mut store = CatalogFixture::new().with_named(&["a", "b", "c"]).store;
        let id = store.get_all().unwrap()[0].id;

        for target in [0, 4] {
            let err = run(&mut store, &id, target);
            assert!(matches!(
                err,
                Err(DocshelfError::PositionOutOfRange { count: 3, .. })
            ));
        }
        assert_eq!(store.commits(), 0);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let mut store = CatalogFixture::new().with_documents(2).store;

        let err = run(&mut store, &Uuid::new_v4(), 1);
        assert!(matches!(err, Err(DocshelfError::DocumentNotFound(_))));
    }

    #[test]
    fn failed_commit_changes_no_positions() {
        let mut store = CatalogFixture::new().with_named(&["a", "b", "c", "d"]).store;
        let before = names_in_order(&store);
        let id = store.get_all().unwrap()[0].id;

        store.fail_next_commit();
        let err = run(&mut store, &id, 4);

        assert!(matches!(err, Err(DocshelfError::Store(_))));
        assert_eq!(names_in_order(&store), before);
        assert!(is_contiguous(&store.get_all().unwrap()));
    }

    #[test]
    fn any_move_keeps_the_catalog_contiguous() {
        for old in 1..=5 {
            for new in 1..=5 {
                let mut store = CatalogFixture::new().with_documents(5).store;
                let id = store.get_all().unwrap()[old - 1].id;

                run(&mut store, &id, new).unwrap();

                let documents = store.get_all().unwrap();
                assert!(is_contiguous(&documents), "move {} -> {}", old, new);
                assert_eq!(documents[new - 1].id, id, "move {} -> {}", old, new);
            }
        }
    }
}
