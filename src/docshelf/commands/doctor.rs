use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Document;
use crate::ordering::is_contiguous;
use crate::store::{CommitBatch, RecordStore};

/// Verifies the shelf order and repairs it if broken.
///
/// Normal operation can never produce gaps or duplicates, but a hand-edited
/// or partially restored catalog can. Records are renumbered in their
/// stored order (ties broken by upload time) and the fixes committed as one
/// batch.
pub fn run<S: RecordStore>(record: &mut S) -> Result<CmdResult> {
    let mut documents = record.get_all()?;
    documents.sort_by(|a, b| {
        a.position
            .cmp(&b.position)
            .then_with(|| a.uploaded_at.cmp(&b.uploaded_at))
    });

    let mut result = CmdResult::default();

    if is_contiguous(&documents) {
        result.add_message(CmdMessage::info("Catalog order is intact".to_string()));
        return Ok(result);
    }

    let fixes: Vec<Document> = documents
        .iter()
        .enumerate()
        .filter(|&(i, document)| document.position != i + 1)
        .map(|(i, document)| {
            let mut fixed = document.clone();
            fixed.position = i + 1;
            fixed
        })
        .collect();

    let repaired = fixes.len();
    let mut fixes = fixes.into_iter();
    if let Some(first) = fixes.next() {
        record.commit(CommitBatch::update(first).with_affected(fixes.collect()))?;
    }

    result.add_message(CmdMessage::warning(format!(
        "Renumbered {} document(s) to restore shelf order",
        repaired
    )));
    Ok(result)
}
