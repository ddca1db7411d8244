use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum DocshelfError {
    #[error("Document not found: {0}")]
    DocumentNotFound(Uuid),

    #[error("Position {position} is out of range (catalog holds {count} document(s))")]
    PositionOutOfRange { position: usize, count: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Content store error: {0}")]
    Content(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, DocshelfError>;
