//! Report builders
//!
//! [`ReportBuilder`] is the capability set every output variant implements.
//! [`TextReportBuilder`] is the plain-text variant; further formats are added
//! as new implementations without touching [`Report`] or its callers.

use crate::aggregates::Report;
use crate::error::DomainError;
use crate::value_objects::{ReportStyle, Section, SectionName};

/// Incrementally assembles a [`Report`].
///
/// Object safe, so callers can hold `Box<dyn ReportBuilder>` and pick the
/// variant at runtime.
pub trait ReportBuilder {
    /// Replace the header. Last write wins.
    fn set_header(&mut self, header: &str);

    /// Replace the body text. Last write wins.
    fn set_content(&mut self, content: &str);

    /// Replace the footer. Last write wins.
    fn set_footer(&mut self, footer: &str);

    /// Append a section after all existing ones. Duplicate names are kept.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidArgument` if `name` is empty; the report
    /// is left unchanged.
    fn add_section(&mut self, name: &str, content: &str) -> Result<(), DomainError>;

    /// Replace the style wholesale.
    fn set_style(&mut self, style: ReportStyle);

    /// Snapshot of the report assembled so far.
    ///
    /// Repeated calls without mutation in between return equal reports.
    fn build(&self) -> Report;
}

/// Plain-text report builder
#[derive(Debug, Clone, Default)]
pub struct TextReportBuilder {
    report: Report,
}

impl TextReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Fluent helpers (consume and return self)
    // =========================================================================

    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.report.set_header(header.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.report.set_content(content.into());
        self
    }

    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.report.set_footer(footer.into());
        self
    }

    /// Append a section, failing on an empty name.
    pub fn with_section(
        mut self,
        name: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let name = SectionName::new(name)?;
        self.report.push_section(Section::new(name, content));
        Ok(self)
    }

    pub fn with_style(mut self, style: ReportStyle) -> Self {
        self.report.set_style(style);
        self
    }

    /// Consume the builder and hand over the report without copying.
    pub fn into_report(self) -> Report {
        self.report
    }
}

impl ReportBuilder for TextReportBuilder {
    fn set_header(&mut self, header: &str) {
        self.report.set_header(header.to_string());
    }

    fn set_content(&mut self, content: &str) {
        self.report.set_content(content.to_string());
    }

    fn set_footer(&mut self, footer: &str) {
        self.report.set_footer(footer.to_string());
    }

    fn add_section(&mut self, name: &str, content: &str) -> Result<(), DomainError> {
        // Validate before touching the report so a failure leaves it intact.
        let name = SectionName::new(name)?;
        self.report.push_section(Section::new(name, content));
        Ok(())
    }

    fn set_style(&mut self, style: ReportStyle) {
        self.report.set_style(style);
    }

    fn build(&self) -> Report {
        self.report.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style(size: u32) -> ReportStyle {
        ReportStyle::new("white", "black", size).unwrap()
    }

    mod setters {
        use super::*;

        #[test]
        fn last_write_wins() {
            let mut builder = TextReportBuilder::new();
            builder.set_header("first");
            builder.set_header("second");
            builder.set_content("body 1");
            builder.set_content("body 2");
            builder.set_footer("end 1");
            builder.set_footer("end 2");
            builder.set_style(style(10));
            builder.set_style(style(14));

            let report = builder.build();
            assert_eq!(report.header(), "second");
            assert_eq!(report.content(), "body 2");
            assert_eq!(report.footer(), "end 2");
            assert_eq!(report.style(), Some(&style(14)));
        }

        #[test]
        fn empty_strings_are_accepted() {
            let mut builder = TextReportBuilder::new();
            builder.set_header("H");
            builder.set_header("");
            assert_eq!(builder.build().header(), "");
        }
    }

    mod sections {
        use super::*;

        #[test]
        fn sections_keep_call_order() {
            let mut builder = TextReportBuilder::new();
            builder.add_section("B", "2").unwrap();
            builder.add_section("A", "1").unwrap();
            builder.add_section("C", "3").unwrap();

            let report = builder.build();
            let names: Vec<&str> = report.sections().iter().map(|s| s.name.as_str()).collect();
            assert_eq!(names, vec!["B", "A", "C"]);
        }

        #[test]
        fn duplicate_names_are_kept() {
            let mut builder = TextReportBuilder::new();
            builder.add_section("Notes", "one").unwrap();
            builder.add_section("Notes", "two").unwrap();

            let report = builder.build();
            assert_eq!(report.sections().len(), 2);
            assert_eq!(report.sections()[0].content, "one");
            assert_eq!(report.sections()[1].content, "two");
        }

        #[test]
        fn empty_name_fails_and_leaves_sections_unchanged() {
            let mut builder = TextReportBuilder::new();
            builder.add_section("S1", "a").unwrap();

            let err = builder.add_section("", "x").unwrap_err();
            assert!(matches!(err, DomainError::InvalidArgument(_)));
            assert_eq!(builder.build().sections().len(), 1);
        }

        #[test]
        fn whitespace_name_is_accepted() {
            let mut builder = TextReportBuilder::new();
            builder.add_section("   ", "x").unwrap();

            let report = builder.build();
            assert_eq!(report.sections().len(), 1);
            assert_eq!(report.sections()[0].render(), "   : x");
        }
    }

    mod build {
        use super::*;

        #[test]
        fn build_is_repeatable() {
            let mut builder = TextReportBuilder::new();
            builder.set_header("H");
            builder.add_section("S1", "a").unwrap();

            assert_eq!(builder.build(), builder.build());
        }

        #[test]
        fn build_returns_independent_snapshot() {
            let mut builder = TextReportBuilder::new();
            builder.set_header("H");
            let snapshot = builder.build();

            builder.set_header("H2");
            assert_eq!(snapshot.header(), "H");
            assert_eq!(builder.build().header(), "H2");
        }

        #[test]
        fn full_example_exports_expected_lines() {
            let mut builder = TextReportBuilder::new();
            builder.set_header("H");
            builder.set_content("C");
            builder.add_section("S1", "a").unwrap();
            builder.add_section("S2", "b").unwrap();
            builder.set_footer("F");
            builder.set_style(style(12));

            let mut lines: Vec<String> = Vec::new();
            builder.build().export(&mut lines).unwrap();
            assert_eq!(
                lines,
                vec![
                    "H",
                    "C",
                    "S1: a",
                    "S2: b",
                    "F",
                    "backgroundColor=white, fontColor=black, fontSize=12",
                ]
            );
        }
    }

    mod fluent {
        use super::*;

        #[test]
        fn fluent_helpers_match_trait_setters() {
            let fluent = TextReportBuilder::new()
                .with_header("H")
                .with_content("C")
                .with_section("S1", "a")
                .unwrap()
                .with_footer("F")
                .with_style(style(12))
                .into_report();

            let mut stepwise = TextReportBuilder::new();
            stepwise.set_header("H");
            stepwise.set_content("C");
            stepwise.add_section("S1", "a").unwrap();
            stepwise.set_footer("F");
            stepwise.set_style(style(12));

            assert_eq!(fluent, stepwise.build());
        }

        #[test]
        fn with_section_rejects_empty_name() {
            let result = TextReportBuilder::new().with_section("", "x");
            assert!(matches!(result, Err(DomainError::InvalidArgument(_))));
        }

        #[test]
        fn works_through_trait_object() {
            let mut builder: Box<dyn ReportBuilder> = Box::new(TextReportBuilder::new());
            builder.set_header("Boxed");
            builder.add_section("S", "c").unwrap();
            assert_eq!(builder.build().lines(), vec!["Boxed", "", "S: c", ""]);
        }
    }
}
