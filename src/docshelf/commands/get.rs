use crate::commands::CmdResult;
use crate::error::{DocshelfError, Result};
use crate::store::RecordStore;

pub fn run<S: RecordStore>(store: &S, position: usize) -> Result<CmdResult> {
    let documents = store.get_all()?;
    let count = documents.len();

    let document = documents
        .into_iter()
        .find(|d| d.position == position)
        .ok_or(DocshelfError::PositionOutOfRange { position, count })?;

    Ok(CmdResult::default().with_listed_documents(vec![document]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::CatalogFixture;

    #[test]
    fn finds_the_document_at_a_position() {
        let store = CatalogFixture::new().with_named(&["a", "b", "c"]).store;

        let result = run(&store, 2).unwrap();
        assert_eq!(result.listed_documents.len(), 1);
        assert_eq!(result.listed_documents[0].name, "b");
    }

    #[test]
    fn missing_position_is_out_of_range() {
        let store = CatalogFixture::new().with_documents(2).store;

        let err = run(&store, 3);
        assert!(matches!(
            err,
            Err(DocshelfError::PositionOutOfRange {
                position: 3,
                count: 2
            })
        ));
    }
}
