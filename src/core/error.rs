//! Typed errors of the validation-and-persistence core
//!
//! - [`StorageError`]: the backing store could not complete an operation
//! - [`WriteError`]: outcome of a rejected or failed write through the pipeline
//!
//! "Not found" is never an error here: stores and the pipeline report it as
//! `Ok(None)`. Translating these into HTTP responses is the job of
//! `crate::server::error`.

use crate::core::validation::Violations;
use thiserror::Error;

/// Errors related to storage backends
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend could not be reached
    #[error("Failed to connect to {backend}: {message}")]
    Connection { backend: String, message: String },

    /// A statement or lookup failed
    #[error("{backend} query error: {message}")]
    Query { backend: String, message: String },

    /// A relational constraint was violated (missing or still-referenced row)
    #[error("Data integrity error: {message}")]
    Integrity { message: String },

    /// The in-process lock guarding the tables was poisoned
    #[error("Storage lock poisoned: {message}")]
    Poisoned { message: String },
}

impl StorageError {
    pub fn integrity(message: impl Into<String>) -> Self {
        StorageError::Integrity {
            message: message.into(),
        }
    }

    /// Whether the failure is a constraint violation rather than an outage
    pub fn is_integrity(&self) -> bool {
        matches!(self, StorageError::Integrity { .. })
    }
}

#[cfg(feature = "postgres")]
impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        const BACKEND: &str = "PostgreSQL";

        match err {
            sqlx::Error::Database(db) if db.constraint().is_some() => StorageError::Integrity {
                message: db.message().to_string(),
            },
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed => StorageError::Connection {
                backend: BACKEND.to_string(),
                message: err.to_string(),
            },
            other => StorageError::Query {
                backend: BACKEND.to_string(),
                message: other.to_string(),
            },
        }
    }
}

/// Failure of a create or update going through the write pipeline
#[derive(Debug, Error)]
pub enum WriteError {
    /// Field and/or reference validation produced violations; nothing was written
    #[error("Validation errors: {0}")]
    Rejected(Violations),

    /// The store failed while checking references or persisting
    #[error(transparent)]
    Store(#[from] StorageError),
}

impl WriteError {
    /// The reported violations, if the write was rejected
    pub fn violations(&self) -> Option<&Violations> {
        match self {
            WriteError::Rejected(violations) => Some(violations),
            WriteError::Store(_) => None,
        }
    }
}
