#[derive(Debug, thiserror::Error)]
pub enum MovieError {
    #[error("movie not found")]
    NotFound,
    #[error("invalid record id: {0}")]
    InvalidId(String),
    #[error("failed to create storage directory: {0}")]
    StorageDirCreation(std::io::Error),
    #[error("failed to create record directory: {0}")]
    RecordDirCreation(std::io::Error),
    #[error("failed to write movie document: {0}")]
    FileWrite(std::io::Error),
    #[error("failed to read movie document: {0}")]
    FileRead(std::io::Error),
    #[error("failed to remove movie document: {0}")]
    RecordRemoval(std::io::Error),
    #[error("failed to serialize movie: {0}")]
    Serialization(serde_json::Error),
    #[error("failed to deserialize movie: {0}")]
    Deserialization(serde_json::Error),
}

pub type MovieResult<T> = std::result::Result<T, MovieError>;
