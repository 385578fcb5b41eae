//! Validated name newtypes for report content
//!
//! These newtypes ensure that names are valid by construction: a value that
//! exists has already passed validation.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

// ============================================================================
// SectionName
// ============================================================================

/// A validated, non-empty section name
///
/// The accepted text is stored exactly as given so the rendered
/// `"<name>: <content>"` line reflects what the caller passed in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SectionName(String);

impl SectionName {
    /// Create a new validated section name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidArgument` if the name is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::invalid_argument(
                "Section name cannot be empty",
            ));
        }
        Ok(Self(name))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for SectionName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<SectionName> for String {
    fn from(name: SectionName) -> String {
        name.0
    }
}
