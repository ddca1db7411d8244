use crate::error::{DocshelfError, Result};
use crate::store::RecordStore;
use uuid::Uuid;

/// Resolves user-facing positions to document ids against one snapshot, so
/// a multi-document operation keeps referring to the listing the user saw
/// even as earlier steps renumber the catalog.
pub fn resolve_positions<S: RecordStore>(
    store: &S,
    positions: &[usize],
) -> Result<Vec<(usize, Uuid)>> {
    let documents = store.get_all()?;

    positions
        .iter()
        .map(|&position| {
            documents
                .iter()
                .find(|d| d.position == position)
                .map(|d| (position, d.id))
                .ok_or(DocshelfError::PositionOutOfRange {
                    position,
                    count: documents.len(),
                })
        })
        .collect()
}
