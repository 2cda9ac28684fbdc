pub mod backend;
pub mod config;
pub mod controller;
pub mod messages;
pub mod render;
pub mod speech;
pub mod ui;

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum VyomError {
    /// Backend transport failure or non-success HTTP status
    #[error("Backend error: {0}")]
    BackendError(String),

    /// Thread spawn or other OS-level failure
    #[error("IO error: {0}")]
    IOError(String),
}

impl From<std::io::Error> for VyomError {
    fn from(e: std::io::Error) -> Self {
        VyomError::IOError(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, VyomError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = VyomError::BackendError("connection refused".to_string());
        assert_eq!(err.to_string(), "Backend error: connection refused");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "out of threads");
        let err: VyomError = io.into();
        assert!(matches!(err, VyomError::IOError(_)));
    }
}
