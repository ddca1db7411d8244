use crate::error::{DocshelfError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_CONTENT_DIR: &str = "blobs";

/// Configuration for a catalog root, stored in `config.json` beside the
/// catalog file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocshelfConfig {
    /// Directory under the catalog root where document blobs are stored
    #[serde(default = "default_content_dir")]
    pub content_dir: String,
}

fn default_content_dir() -> String {
    DEFAULT_CONTENT_DIR.to_string()
}

impl Default for DocshelfConfig {
    fn default() -> Self {
        Self {
            content_dir: DEFAULT_CONTENT_DIR.to_string(),
        }
    }
}

impl DocshelfConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(DocshelfError::Io)?;
        let config: DocshelfConfig =
            serde_json::from_str(&content).map_err(DocshelfError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(DocshelfError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(DocshelfError::Serialization)?;
        fs::write(config_path, content).map_err(DocshelfError::Io)?;
        Ok(())
    }

    pub fn get_content_dir(&self) -> &str {
        &self.content_dir
    }

    /// Set the blob directory name. Must be a single path component so the
    /// blobs stay under the catalog root.
    pub fn set_content_dir(&mut self, dir: &str) -> Result<()> {
        let dir = dir.trim();
        if dir.is_empty() || dir.contains(['/', '\\']) || dir == "." || dir == ".." {
            return Err(DocshelfError::Api(format!(
                "Invalid content directory name: '{}'",
                dir
            )));
        }
        self.content_dir = dir.to_string();
        Ok(())
    }
}
