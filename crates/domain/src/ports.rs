//! Port traits for the domain boundary.
//!
//! The domain never performs I/O. Where output has to leave the core it goes
//! through one of these traits, implemented by the engine (console, file) or by
//! plain buffers in tests.

use thiserror::Error;

/// Failure reported by a render sink.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The sink could not accept a line
    #[error("Write failed: {0}")]
    WriteFailed(String),
}

impl RenderError {
    pub fn write_failed(msg: impl Into<String>) -> Self {
        Self::WriteFailed(msg.into())
    }
}

/// Destination for rendered report lines.
///
/// `write` is called once per output line, in render order. Lines carry no
/// trailing newline; framing is the sink's concern.
#[cfg_attr(test, mockall::automock)]
pub trait RenderSink {
    fn write(&mut self, line: &str) -> Result<(), RenderError>;
}

/// In-memory sink collecting each line as an owned string.
impl RenderSink for Vec<String> {
    fn write(&mut self, line: &str) -> Result<(), RenderError> {
        self.push(line.to_string());
        Ok(())
    }
}
