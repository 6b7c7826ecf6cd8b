use thiserror::Error;

/// Failure taxonomy for the data-access layer.
///
/// Driver and pool failures are wrapped transparently so callers can still
/// match on the underlying `tokio_postgres` error (e.g. a unique constraint
/// violation on user creation). Nothing is retried or swallowed here; every
/// failure is logged with its statement and parameters, then re-raised.
#[derive(Debug, Error)]
pub enum DataAccessError {
    #[error(transparent)]
    Postgres(#[from] tokio_postgres::Error),

    #[error(transparent)]
    Pool(#[from] deadpool_postgres::PoolError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("connection error: {0}")]
    Connection(String),

    #[error("row decode error: {0}")]
    Decode(String),
}
