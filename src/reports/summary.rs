//! Plain-text change notice for a human recipient.

use super::{ReportError, ReportGenerator, ReportMetadata};
use crate::diff::PageDiff;
use std::fmt::Write as _;

/// Renders the daily change notice: a greeting, the three key lists, and a
/// signature.
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryReporter;

impl SummaryReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

fn write_section(out: &mut String, title: &str, keys: &[String]) -> std::fmt::Result {
    writeln!(out, "{title} {{")?;
    for key in keys {
        writeln!(out, "{key}")?;
    }
    writeln!(out, "}}")
}

impl ReportGenerator for SummaryReporter {
    fn generate(&self, diff: &PageDiff, metadata: &ReportMetadata) -> Result<String, ReportError> {
        let mut out = String::new();

        writeln!(out, "Hello, {}", metadata.recipient)?;
        writeln!(out)?;
        writeln!(
            out,
            "Over the last day the following changes happened on your sites:"
        )?;
        writeln!(out)?;
        write_section(&mut out, "Disappeared pages:", &diff.disappeared)?;
        write_section(&mut out, "Appeared pages:", &diff.appeared)?;
        write_section(&mut out, "Changed pages:", &diff.changed)?;
        writeln!(out)?;
        writeln!(out, "Regards,")?;
        write!(out, "automated monitoring system.")?;

        Ok(out)
    }

    fn format(&self) -> super::ReportFormat {
        super::ReportFormat::Text
    }
}
