use thiserror::Error;

pub type Result<T> = std::result::Result<T, TillError>;

/// Failure kinds reported by the transaction store port.
///
/// Returned explicitly from `TransactionStore::insert` so the request handler
/// pattern-matches the outcome instead of inspecting backend exceptions.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    #[error("A transaction with the same ID already exists")]
    DuplicateId,
    #[error("{0}")]
    Backend(String),
}

#[derive(Error, Debug)]
pub enum TillError {
    #[error("The amount cannot be zero or negative, please enter the correct amount")]
    InvalidAmount,
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("missing required environment variable {0}")]
    MissingEnv(&'static str),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("metrics recorder error: {0}")]
    Metrics(String),
}
