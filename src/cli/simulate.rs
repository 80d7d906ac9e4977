//! CLI handler for the `simulate` subcommand.

use super::output::{write_output, OutputTarget};
use crate::config::AppConfig;
use crate::reports::{create_reporter, ReportMetadata};
use crate::simulation::run_simulation;
use crate::state::SiteState;
use anyhow::{Context, Result};

/// Run one simulated day and render the resulting report.
pub fn render_simulation(config: &AppConfig) -> Result<String> {
    let state = SiteState::new(config.generator.clone())
        .context("failed to initialize page state")?;
    let outcome =
        run_simulation(&state, &config.simulation).context("simulation did not complete")?;

    let mut metadata = ReportMetadata::new(config.output.recipient.clone());
    if let Some(snapshot) = state.previous_snapshot() {
        metadata = metadata.with_baseline(&snapshot);
    }

    let reporter = create_reporter(config.output.format);
    let report = reporter
        .generate(&outcome.diff, &metadata)
        .context("failed to render report")?;
    Ok(report)
}

/// Run the simulate command with the given configuration.
pub fn run_simulate(config: &AppConfig, quiet: bool) -> Result<()> {
    let report = render_simulation(config)?;
    let target = OutputTarget::from_option(config.output.file.clone());
    write_output(&report, &target, quiet)
}
