#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    #[error("corrupt value: {0}")]
    Corrupt(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[derive(thiserror::Error, Debug)]
pub enum WriteError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[derive(thiserror::Error, Debug)]
pub enum SaveError {
    #[error(transparent)]
    Validation(#[from] crate::ValidationError),
    #[error(transparent)]
    Write(#[from] WriteError),
}

impl From<StorageError> for SaveError {
    fn from(value: StorageError) -> Self {
        SaveError::Write(WriteError::Storage(value))
    }
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("storage quota exceeded")]
    QuotaExceeded,
    #[error("storage unavailable")]
    Unavailable,
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}
