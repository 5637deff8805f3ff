use diesel::r2d2::PoolError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,
    #[error("connection error: {0}")]
    Connection(#[from] PoolError),
    #[error("query error: {0}")]
    Query(diesel::result::Error),
}

impl From<diesel::result::Error> for RepositoryError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => RepositoryError::NotFound,
            other => RepositoryError::Query(other),
        }
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
