use crate::commands::{CatalogPaths, CmdMessage, CmdResult};
use crate::config::DocshelfConfig;
use crate::error::{DocshelfError, Result};
use std::fs;

pub fn run(paths: &CatalogPaths) -> Result<CmdResult> {
    if !paths.root.exists() {
        fs::create_dir_all(&paths.root).map_err(DocshelfError::Io)?;
    }

    let config = DocshelfConfig::load(&paths.root)?;
    config.save(&paths.root)?;
    fs::create_dir_all(paths.root.join(config.get_content_dir())).map_err(DocshelfError::Io)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Initialized catalog at {}",
        paths.root.display()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_root_config_and_blob_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path().join("catalog");
        let paths = CatalogPaths::new(root.clone());

        run(&paths).unwrap();

        assert!(root.join("config.json").exists());
        assert!(root.join("blobs").is_dir());
    }

    #[test]
    fn keeps_an_existing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path().to_path_buf();

        let mut config = DocshelfConfig::default();
        config.set_content_dir("content").unwrap();
        config.save(&root).unwrap();

        run(&CatalogPaths::new(root.clone())).unwrap();

        let loaded = DocshelfConfig::load(&root).unwrap();
        assert_eq!(loaded.get_content_dir(), "content");
        assert!(root.join("content").is_dir());
    }
}
