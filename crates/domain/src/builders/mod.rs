//! Builders that assemble aggregates step by step

pub mod report_builder;

pub use report_builder::{ReportBuilder, TextReportBuilder};
