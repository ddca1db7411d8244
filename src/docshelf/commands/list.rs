use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::RecordStore;

pub fn run<S: RecordStore>(store: &S, filter: Option<&str>) -> Result<CmdResult> {
    let documents = store.get_all()?;

    let listed = match filter {
        Some(term) => {
            let term = term.to_lowercase();
            documents
                .into_iter()
                .filter(|d| d.name.to_lowercase().contains(&term))
                .collect()
        }
        None => documents,
    };

    Ok(CmdResult::default().with_listed_documents(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::CatalogFixture;

    #[test]
    fn lists_in_shelf_order() {
        let store = CatalogFixture::new().with_named(&["b", "a", "c"]).store;

        let result = run(&store, None).unwrap();
        let names: Vec<&str> = result
            .listed_documents
            .iter()
            .map(|d| d.name.as_str())
            .collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn filters_by_name_case_insensitively() {
        let store = CatalogFixture::new()
            .with_named(&["Report.pdf", "notes.md", "report-v2.pdf"])
            .store;

        let result = run(&store, Some("report")).unwrap();
        assert_eq!(result.listed_documents.len(), 2);
    }
}
