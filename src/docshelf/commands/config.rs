use crate::commands::{CatalogPaths, CmdMessage, CmdResult};
use crate::config::DocshelfConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    SetContentDir(String),
}

pub fn run(paths: &CatalogPaths, action: ConfigAction) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll | ConfigAction::ShowKey(_) => {
            let config = DocshelfConfig::load(&paths.root)?;
            result = result.with_config(config);
        }
        ConfigAction::SetContentDir(dir) => {
            let mut config = DocshelfConfig::load(&paths.root)?;
            config.set_content_dir(&dir)?;
            config.save(&paths.root)?;
            result.add_message(CmdMessage::success(format!("content-dir set to {}", dir)));
            result = result.with_config(config);
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_persists_the_content_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let paths = CatalogPaths::new(temp_dir.path().to_path_buf());

        run(&paths, ConfigAction::SetContentDir("content".to_string())).unwrap();

        let result = run(&paths, ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config.unwrap().get_content_dir(), "content");
    }
}
