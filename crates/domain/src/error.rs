#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    #[error("workout has no exercises")]
    EmptyDraft,
    #[error("another workout is already active")]
    AlreadyActive,
    #[error("no workout is active")]
    NoActiveWorkout,
}

#[derive(thiserror::Error, Debug)]
pub enum ReadError {
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

impl From<ReadError> for WriteError {
    fn from(value: ReadError) -> Self {
        match value {
            ReadError::Storage(storage) => WriteError::Storage(storage),
            ReadError::Other(other) => WriteError::Other(other),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("corrupt data: {0}")]
    Corrupt(String),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}
