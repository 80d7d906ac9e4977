//! One day of simulated site activity between two snapshots.

use crate::config::SimulationConfig;
use crate::diff::PageDiff;
use crate::error::Result;
use crate::state::SiteState;
use serde::Serialize;

/// What a simulation run did and the diff it produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationOutcome {
    /// Sequence number of the baseline commit
    pub baseline_sequence: u64,
    /// Keys removed after the commit
    pub removed: Vec<String>,
    /// Keys added after the commit
    pub added: Vec<String>,
    /// Keys whose payload was regenerated after the commit
    pub updated: Vec<String>,
    /// Classification of the live pages against the baseline
    pub diff: PageDiff,
}

/// Populate `state`, commit a baseline, apply the configured removals,
/// additions and updates, then diff against the baseline.
///
/// Removals stop early once the state is empty. Updates are skipped
/// entirely when fewer pages remain than requested.
pub fn run_simulation(state: &SiteState, config: &SimulationConfig) -> Result<SimulationOutcome> {
    for _ in 0..config.initial_pages {
        state.add_page()?;
    }
    let baseline_sequence = state.commit_snapshot();
    tracing::info!(
        pages = state.len(),
        sequence = baseline_sequence,
        "baseline committed"
    );

    let removed: Vec<String> = (0..config.removals)
        .map_while(|_| state.remove_random_page())
        .collect();
    if removed.len() < config.removals {
        tracing::warn!(
            requested = config.removals,
            removed = removed.len(),
            "ran out of pages to remove"
        );
    }

    let added = (0..config.additions)
        .map(|_| state.add_page())
        .collect::<Result<Vec<_>>>()?;

    let updated = state.update_random_pages(config.updates)?;

    let diff = state.diff()?;
    tracing::info!(
        removed = removed.len(),
        added = added.len(),
        updated = updated.len(),
        "simulation finished"
    );

    Ok(SimulationOutcome {
        baseline_sequence,
        removed,
        added,
        updated,
        diff,
    })
}
