use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Encode error: {0}")]
    Encode(serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RecordError>;
