//! Error types for pk
//!
//! Exit codes:
//! - 0: Success
//! - 2: User error (bad arguments, unknown task id)
//! - 4: Operation failed (I/O error, malformed store file)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the pk CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const USER_ERROR: i32 = 2;
    pub const OPERATION_FAILED: i32 = 4;
}

/// Main error type for pk operations
#[derive(Error, Debug)]
pub enum Error {
    // User errors (exit code 2)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Task with id {0} not found")]
    TaskNotFound(u64),

    // Operation failures (exit code 4)
    #[error("Store file not found: {0}")]
    StoreNotFound(PathBuf),

    #[error("Store file is not valid JSON: {0}")]
    CorruptStore(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidArgument(_) | Error::TaskNotFound(_) => exit_codes::USER_ERROR,

            Error::StoreNotFound(_)
            | Error::CorruptStore(_)
            | Error::Io(_)
            | Error::Json(_) => exit_codes::OPERATION_FAILED,
        }
    }
}

/// Result type alias for pk operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_errors_exit_with_2() {
        assert_eq!(
            Error::InvalidArgument("bad".to_string()).exit_code(),
            exit_codes::USER_ERROR
        );
        assert_eq!(Error::TaskNotFound(7).exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn operation_failures_exit_with_4() {
        assert_eq!(
            Error::CorruptStore(PathBuf::from("data/.pk.json")).exit_code(),
            exit_codes::OPERATION_FAILED
        );
        assert_eq!(
            Error::Io(std::io::Error::other("boom")).exit_code(),
            exit_codes::OPERATION_FAILED
        );
    }
}
