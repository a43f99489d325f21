use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

/// Any failure originating from the persistence layer: constraint
/// violations, connectivity loss, malformed statements.
#[derive(Debug, ThisError)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] SqlxError),
}
