//! Error types for filedrop.

use thiserror::Error;

/// Common error type for filedrop.
#[derive(Error, Debug)]
pub enum FiledropError {
    /// Database error.
    ///
    /// Wraps errors from the metadata store. Errors from sqlx are
    /// automatically converted.
    #[error("database error: {0}")]
    Database(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Validation error for user input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

// Conversion from sqlx errors
impl From<sqlx::Error> for FiledropError {
    fn from(e: sqlx::Error) -> Self {
        FiledropError::Database(e.to_string())
    }
}

/// Result type alias for filedrop operations.
pub type Result<T> = std::result::Result<T, FiledropError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_error_display() {
        let err = FiledropError::Database("UNIQUE constraint failed".to_string());
        assert_eq!(err.to_string(), "database error: UNIQUE constraint failed");
    }

    #[test]
    fn test_validation_error_display() {
        let err = FiledropError::Validation("filename too long".to_string());
        assert_eq!(err.to_string(), "validation error: filename too long");
    }

    #[test]
    fn test_not_found_error_display() {
        let err = FiledropError::NotFound("file".to_string());
        assert_eq!(err.to_string(), "file not found");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: FiledropError = io_err.into();
        assert!(matches!(err, FiledropError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_result_alias() {
        fn sample_ok() -> Result<i32> {
            Ok(42)
        }

        fn sample_err() -> Result<i32> {
            Err(FiledropError::Validation("test".to_string()))
        }

        assert_eq!(sample_ok().unwrap(), 42);
        assert!(sample_err().is_err());
    }
}
