//! # Shelf Ordering
//!
//! Pure computation of the renumbering a catalog mutation requires. Given
//! the full catalog sorted by position, these functions return exactly the
//! documents whose position must change (the "displaced set") with their
//! new positions already applied. They never touch a store; callers commit
//! the displaced set together with the primary mutation as one batch.
//!
//! Precondition for the slice arguments: the catalog is complete and sorted,
//! so `documents[i].position == i + 1`. Stores return snapshots in exactly
//! this shape.

use crate::model::Document;

/// Returns true when `documents` (sorted by position) occupy exactly the
/// contiguous positions 1..=N.
pub fn is_contiguous(documents: &[Document]) -> bool {
    documents
        .iter()
        .enumerate()
        .all(|(i, d)| d.position == i + 1)
}

/// Computes the documents displaced by moving the document at `old_position`
/// to `new_position` (both 1-based).
///
/// The moved document itself is excluded; the caller repositions it. Moving
/// later shifts the documents at `old_position+1..=new_position` down by
/// one; moving earlier shifts those at `new_position..=old_position-1` up by
/// one. Exactly `|new_position - old_position|` documents are returned, each
/// shifted a single step, so once the moved document lands on `new_position`
/// the catalog is again a contiguous 1..=N permutation.
pub fn shift_for_move(
    documents: &[Document],
    old_position: usize,
    new_position: usize,
) -> Vec<Document> {
    debug_assert!(is_contiguous(documents));
    debug_assert!(old_position >= 1 && old_position <= documents.len());
    debug_assert!(new_position >= 1 && new_position <= documents.len());

    let mut displaced = Vec::new();

    if old_position < new_position {
        // shifting documents down toward the vacated slot
        for document in &documents[old_position..new_position] {
            let mut document = document.clone();
            document.position -= 1;
            displaced.push(document);
        }
    } else if old_position > new_position {
        // shifting documents up to make room
        for document in &documents[new_position - 1..old_position - 1] {
            let mut document = document.clone();
            document.position += 1;
            displaced.push(document);
        }
    }

    displaced
}

/// Computes the documents displaced by deleting the document at `position`:
/// everything above it shifts down by one, leaving a contiguous 1..=N-1
/// catalog once the document is removed.
pub fn shift_for_delete(documents: &[Document], position: usize) -> Vec<Document> {
    shift_for_move(documents, position, documents.len())
}

/// Position for a newly added document: the end of the shelf. No existing
/// document is displaced by an append.
pub fn append_position(count: usize) -> usize {
    count + 1
}
