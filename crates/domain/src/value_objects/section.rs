//! Named report section

use serde::{Deserialize, Serialize};

use super::names::SectionName;

/// A named block of report body text
///
/// Sections are ordered inside a report; two sections may share a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub name: SectionName,
    pub content: String,
}

impl Section {
    pub fn new(name: SectionName, content: impl Into<String>) -> Self {
        Self {
            name,
            content: content.into(),
        }
    }

    /// Rendered form used by report exports: `"<name>: <content>"`.
    pub fn render(&self) -> String {
        format!("{}: {}", self.name, self.content)
    }
}
