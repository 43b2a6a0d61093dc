// Error handling framework

use thiserror::Error;

/// Database-specific errors
#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Database connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Database health check failed: {0}")]
    HealthCheckFailed(String),

    #[error("Query execution failed: {0}")]
    QueryFailed(String),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Duplicate key violation: {0}")]
    DuplicateKey(String),

    #[error("Migration failed: {0}")]
    MigrationFailed(String),
}

impl DatabaseError {
    /// True for store-level rule rejections (duplicate email, missing row),
    /// as opposed to connectivity or query failures.
    pub fn is_constraint(&self) -> bool {
        matches!(
            self,
            DatabaseError::DuplicateKey(_) | DatabaseError::NotFound(_)
        )
    }
}

// Implement From for common external errors
impl From<sqlx::Error> for DatabaseError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => DatabaseError::NotFound("Record not found".to_string()),
            sqlx::Error::Io(_) | sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                DatabaseError::ConnectionFailed(err.to_string())
            }
            sqlx::Error::Database(db_err) => {
                // Check for specific database error codes
                if let Some(code) = db_err.code() {
                    match code.as_ref() {
                        "23505" => DatabaseError::DuplicateKey(db_err.message().to_string()),
                        _ => DatabaseError::QueryFailed(db_err.message().to_string()),
                    }
                } else {
                    DatabaseError::QueryFailed(db_err.message().to_string())
                }
            }
            _ => DatabaseError::QueryFailed(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DatabaseError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DatabaseError::MigrationFailed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_key_display() {
        let err = DatabaseError::DuplicateKey(
            "duplicate key value violates unique constraint \"students_email_key\"".to_string(),
        );
        assert!(err.to_string().contains("Duplicate key violation"));
    }

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let err: DatabaseError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, DatabaseError::NotFound(_)));
    }

    #[test]
    fn test_io_error_maps_to_connection_failed() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err: DatabaseError = sqlx::Error::from(io).into();
        assert!(matches!(err, DatabaseError::ConnectionFailed(_)));
    }

    #[test]
    fn test_constraint_classification() {
        assert!(DatabaseError::DuplicateKey("email".to_string()).is_constraint());
        assert!(DatabaseError::NotFound("student 7".to_string()).is_constraint());
        assert!(!DatabaseError::ConnectionFailed("refused".to_string()).is_constraint());
        assert!(!DatabaseError::QueryFailed("syntax".to_string()).is_constraint());
    }
}
