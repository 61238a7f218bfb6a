// shopcart/src/error.rs
use crate::model::ItemKey;
use thiserror::Error;

/// Reasons a JSON payload cannot be decoded into a `ShopcartItem`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("Invalid shopcart item: missing {field}")]
    MissingField { field: &'static str },

    #[error("Invalid shopcart item: body of request contained bad or no data")]
    WrongShape,

    #[error("Invalid shopcart item: '{field}' must be {expected}")]
    WrongFieldType {
        field: &'static str,
        expected: &'static str,
    },
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Data validation failed: {0}")]
    Validation(String),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("Shopcart item {key} already exists")]
    Duplicate { key: ItemKey },

    #[error("Shopcart item {key} was not found")]
    NotFound { key: ItemKey },

    #[error("Database connection error: {0}")]
    Connection(#[source] sqlx::Error),

    #[error("Database error: {0}")]
    Database(#[source] sqlx::Error),
}

impl StoreError {
    /// Classifies an error raised by an INSERT, turning unique-key violations
    /// into `Duplicate` for the given key.
    pub(crate) fn on_insert(err: sqlx::Error, key: ItemKey) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return StoreError::Duplicate { key };
            }
        }
        StoreError::from(err)
    }

    /// True when the backing store could not be reached at all.
    pub fn is_connection(&self) -> bool {
        matches!(self, StoreError::Connection(_))
    }
}

impl From<sqlx::Error> for StoreError {
  fn from(err: sqlx::Error) -> Self {
    match err {
      sqlx::Error::Io(_)
      | sqlx::Error::Tls(_)
      | sqlx::Error::Configuration(_)
      | sqlx::Error::PoolTimedOut
      | sqlx::Error::PoolClosed
      | sqlx::Error::WorkerCrashed => StoreError::Connection(err),
      other => StoreError::Database(other),
    }
  }
}

pub type StoreResult<T, E = StoreError> = std::result::Result<T, E>;
