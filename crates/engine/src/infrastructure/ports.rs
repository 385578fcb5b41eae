//! Port traits for infrastructure boundaries.
//!
//! The logger only knows how to gate and format entries. Where they end up is
//! behind [`LogStore`], so the same logger can write to a flat file in the
//! binary and to memory in tests.

use super::error::LogError;

/// Destination for formatted log entries.
#[cfg_attr(test, mockall::automock)]
pub trait LogStore {
    /// Persist one entry. `line` carries no trailing newline.
    fn append(&mut self, line: &str) -> Result<(), LogError>;
}
