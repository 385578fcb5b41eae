//! Report aggregate - a styled document assembled by a builder
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: mutation is crate-private and only reachable through
//!   a [`ReportBuilder`](crate::builders::ReportBuilder)
//! - **Owned parts**: sections and style are owned values, never shared
//! - **Pure rendering**: [`Report::lines`] depends only on current state

use serde::{Deserialize, Serialize};

use crate::ports::{RenderError, RenderSink};
use crate::value_objects::{ReportStyle, Section};

/// A document with header, body, ordered sections, footer and optional style
///
/// # Invariants
///
/// - Section order is insertion order
/// - Every section name is non-empty (enforced by `SectionName`)
///
/// # Example
///
/// ```
/// use patternsmith_domain::builders::{ReportBuilder, TextReportBuilder};
///
/// let mut builder = TextReportBuilder::new();
/// builder.set_header("Monthly report");
/// builder.add_section("Sales", "Up 4%").unwrap();
/// builder.set_footer("End");
///
/// let mut lines: Vec<String> = Vec::new();
/// builder.build().export(&mut lines).unwrap();
/// assert_eq!(lines, vec!["Monthly report", "", "Sales: Up 4%", "End"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    header: String,
    content: String,
    footer: String,
    sections: Vec<Section>,
    style: Option<ReportStyle>,
}

impl Report {
    /// Create an empty report: empty text fields, no sections, no style.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Accessors (read-only)
    // =========================================================================

    #[inline]
    pub fn header(&self) -> &str {
        &self.header
    }

    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[inline]
    pub fn footer(&self) -> &str {
        &self.footer
    }

    /// Returns the sections in insertion order.
    #[inline]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    #[inline]
    pub fn style(&self) -> Option<&ReportStyle> {
        self.style.as_ref()
    }

    // =========================================================================
    // Mutation (builder only)
    // =========================================================================

    pub(crate) fn set_header(&mut self, header: String) {
        self.header = header;
    }

    pub(crate) fn set_content(&mut self, content: String) {
        self.content = content;
    }

    pub(crate) fn set_footer(&mut self, footer: String) {
        self.footer = footer;
    }

    pub(crate) fn push_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    pub(crate) fn set_style(&mut self, style: ReportStyle) {
        self.style = Some(style);
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Render the report as text lines.
    ///
    /// Order is fixed: header, content, one `"<name>: <content>"` line per
    /// section, footer, then the style summary. Header, content and footer are
    /// always emitted (empty when unset); the style line only when a style is
    /// set.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.sections.len() + 4);
        lines.push(self.header.clone());
        lines.push(self.content.clone());
        lines.extend(self.sections.iter().map(Section::render));
        lines.push(self.footer.clone());
        if let Some(style) = &self.style {
            lines.push(style.to_string());
        }
        lines
    }

    /// Forward the rendering to `sink`, one `write` per line.
    ///
    /// Stops at the first sink failure and returns it; lines already written
    /// stay written.
    pub fn export(&self, sink: &mut dyn RenderSink) -> Result<(), RenderError> {
        for line in self.lines() {
            sink.write(&line)?;
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
