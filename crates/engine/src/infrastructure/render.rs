//! Render sinks backed by `std::io::Write`.

use std::io::{self, Stdout, Write};

use patternsmith_domain::{RenderError, RenderSink};

/// Writes each rendered line to `W`, newline terminated.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterSink<Stdout> {
    /// Console sink.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> RenderSink for WriterSink<W> {
    fn write(&mut self, line: &str) -> Result<(), RenderError> {
        writeln!(self.writer, "{line}").map_err(|e| RenderError::write_failed(e.to_string()))
    }
}
