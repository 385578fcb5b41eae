//! Infrastructure error types.
//!
//! I/O failures from the log file are carried as messages so the error stays
//! `Clone` and comparable in tests; the originating path is part of the text.

use thiserror::Error;

/// Failure raised by the logging collaborator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LogError {
    /// A log entry could not be stored.
    #[error("Log write failed: {0}")]
    WriteFailed(String),

    /// The log file could not be read.
    #[error("Log read failed: {0}")]
    ReadFailed(String),

    /// A severity name did not match any level.
    #[error("Invalid log level: {0}")]
    InvalidLevel(String),
}

impl LogError {
    pub fn write_failed(msg: impl Into<String>) -> Self {
        Self::WriteFailed(msg.into())
    }

    pub fn read_failed(msg: impl Into<String>) -> Self {
        Self::ReadFailed(msg.into())
    }

    pub fn invalid_level(msg: impl Into<String>) -> Self {
        Self::InvalidLevel(msg.into())
    }
}
