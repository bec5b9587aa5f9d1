//! Persistence error taxonomy.

use sqlx::error::ErrorKind;
use thiserror::Error;

/// Errors surfaced by the persistence layer.
///
/// Storage errors are classified once, here, so callers can distinguish a
/// dead database from a violated constraint without parsing driver messages.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Storage cannot be reached or opened. Fatal at startup.
    #[error("failed to reach storage: {0}")]
    Connectivity(#[source] sqlx::Error),

    /// A write violated a uniqueness or foreign-key constraint.
    /// Surfaced to the caller, never retried.
    #[error("constraint violation: {0}")]
    Constraint(#[source] sqlx::Error),

    /// Schema validation found the database in an unexpected shape.
    #[error("schema validation failed: {0}")]
    SchemaMismatch(String),

    /// Any other storage error, propagated unchanged.
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),
}

impl From<sqlx::Error> for PersistenceError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) => match db_err.kind() {
                ErrorKind::UniqueViolation
                | ErrorKind::ForeignKeyViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation => PersistenceError::Constraint(err),
                _ => PersistenceError::Database(err),
            },
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed => PersistenceError::Connectivity(err),
            _ => PersistenceError::Database(err),
        }
    }
}

impl PersistenceError {
    /// True when the error is a constraint violation.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, PersistenceError::Constraint(_))
    }
}
