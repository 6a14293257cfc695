#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
