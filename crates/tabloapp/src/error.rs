use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("Record not found: {0}")]
    NotFound(Uuid),

    #[error("Unknown repeat unit: {0:?}")]
    InvalidRepeatUnit(String),

    #[error("Due date out of range after adding {value} {unit}")]
    DueDateOverflow { value: u32, unit: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, BoardError>;
