//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand.

mod config;
mod output;
mod simulate;

pub use config::{init_config_file, render_effective_config};
pub use output::{write_output, OutputTarget};
pub use simulate::{render_simulation, run_simulate};
