use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum DaybookError {
    #[error("Entry not found: {0}")]
    EntryNotFound(Uuid),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Selector error: {0}")]
    Selector(String),
}

pub type Result<T> = std::result::Result<T, DaybookError>;
