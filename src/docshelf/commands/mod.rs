use crate::config::DocshelfConfig;
use crate::model::Document;
use std::path::PathBuf;

pub mod config;
pub mod delete;
pub mod doctor;
pub mod get;
pub mod helpers;
pub mod init;
pub mod list;
pub mod move_to;
pub mod paths;
pub mod upload;

/// Filesystem layout of a catalog: everything lives under one root
/// (catalog file, config, blob directory).
#[derive(Debug, Clone)]
pub struct CatalogPaths {
    pub root: PathBuf,
}

impl CatalogPaths {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_documents: Vec<Document>,
    pub listed_documents: Vec<Document>,
    pub document_paths: Vec<PathBuf>,
    pub config: Option<DocshelfConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_documents(mut self, documents: Vec<Document>) -> Self {
        self.listed_documents = documents;
        self
    }

    pub fn with_document_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.document_paths = paths;
        self
    }

    pub fn with_config(mut self, config: DocshelfConfig) -> Self {
        self.config = Some(config);
        self
    }
}
