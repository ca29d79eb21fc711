use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("record id must not be blank")]
    BlankRecordId,
    #[error("unknown sort key: {0}")]
    UnknownSortKey(String),
    #[error("unknown sort direction: {0}")]
    UnknownSortDirection(String),
    #[error("unknown view mode: {0}")]
    UnknownViewMode(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
