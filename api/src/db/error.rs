// Error types for database operations

use thiserror::Error;

/// Error types for database connection and query operations
#[derive(Debug, Error)]
pub enum DbError {
    /// Error occurred during database connection attempt
    #[error("Database connection error: {0}")]
    ConnectionError(String),

    /// Error occurred during database query execution
    #[error("Database query error: {0}")]
    QueryError(String),

    /// Schema could not be brought up to date
    #[error("Database migration error: {0}")]
    MigrationError(String),
}

impl DbError {
    /// Underlying driver message without the variant prefix
    pub fn details(&self) -> &str {
        match self {
            DbError::ConnectionError(msg)
            | DbError::QueryError(msg)
            | DbError::MigrationError(msg) => msg,
        }
    }
}

impl From<sea_orm::DbErr> for DbError {
    fn from(err: sea_orm::DbErr) -> Self {
        match err {
            sea_orm::DbErr::Conn(_) | sea_orm::DbErr::ConnectionAcquire(_) => {
                DbError::ConnectionError(err.to_string())
            }
            _ => DbError::QueryError(err.to_string()),
        }
    }
}
