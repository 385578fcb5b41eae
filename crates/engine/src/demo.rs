//! Walkthrough of both subsystems: leveled logging, report building and
//! character prototyping.

use std::path::Path;

use anyhow::Context;
use patternsmith_domain::{
    Armor, Attributes, Character, Prototype, RenderSink, Report, ReportBuilder, ReportStyle,
    TextReportBuilder, Weapon,
};

use crate::infrastructure::{LogLevel, LogReader, LogStore, Logger};

/// What the walkthrough produced, for callers that want to inspect it.
#[derive(Debug, Clone)]
pub struct DemoOutcome {
    pub error_entries: Vec<String>,
    pub report: Report,
    pub knight: Character,
    pub clone: Character,
}

/// Run the walkthrough, writing all console output to `out`.
///
/// `log_path` is where `logger` stores its entries; the `ERROR` entries are
/// read back from it.
pub fn run<S: LogStore>(
    logger: &mut Logger<S>,
    log_path: &Path,
    out: &mut dyn RenderSink,
) -> anyhow::Result<DemoOutcome> {
    logger.log("Application started", LogLevel::Info)?;
    logger.log("A warning occurred", LogLevel::Warning)?;
    logger.log("An error occurred", LogLevel::Error)?;

    let error_entries = LogReader::new(log_path)
        .read_logs(LogLevel::Error)
        .context("reading error entries back from the log")?;
    for entry in &error_entries {
        out.write(entry)?;
    }

    let report = build_monthly_report()?;
    report.export(out)?;

    let knight = Character::new(
        "Knight",
        Attributes::new(100, 20, 15, 10),
        Weapon::new("Sword", 50),
        Armor::new("Shield", 30),
    );
    let clone = knight.try_clone()?;
    tracing::debug!(name = clone.name(), "Cloned character");

    out.write(&format!("Cloned character: {clone}"))?;
    let json = serde_json::to_string_pretty(&clone).context("serializing cloned character")?;
    for line in json.lines() {
        out.write(line)?;
    }

    Ok(DemoOutcome {
        error_entries,
        report,
        knight,
        clone,
    })
}

fn build_monthly_report() -> anyhow::Result<Report> {
    let style = ReportStyle::new("white", "black", 12)?;

    let mut builder = TextReportBuilder::new();
    builder.set_header("Monthly report");
    builder.set_content("This is the main content of the report.");
    builder.add_section("Section 1", "Content for section 1")?;
    builder.set_footer("End of report");
    builder.set_style(style);
    Ok(builder.build())
}
