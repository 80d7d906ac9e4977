//! pagewatch: page change monitoring simulator
//!
//! Tracks a set of pages, commits daily snapshots, and reports which pages
//! disappeared, appeared, or changed since the last commit.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use pagewatch::{
    cli,
    config::{
        config_search_dirs, load_or_default, AppConfig, ConfigPreset, Validatable,
        CONFIG_FILE_NAMES,
    },
    reports::ReportFormat,
};
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "pagewatch")]
#[command(version)]
#[command(about = "Track page snapshots and report what changed", long_about = None)]
#[command(after_help = "EXAMPLES:
    # Simulate a day of changes and print the notice
    pagewatch simulate

    # Reproducible JSON output for pipelines
    pagewatch simulate --preset ci-cd --seed 42 -o json > report.json")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `simulate` subcommand
#[derive(Parser)]
struct SimulateArgs {
    /// Start from a named preset (default, compact, ci-cd) instead of a config file.
    /// Cannot be combined with --config.
    #[arg(long)]
    preset: Option<String>,

    /// Output format
    #[arg(short, long)]
    output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Seed the generator for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Name used in the report greeting
    #[arg(long)]
    recipient: Option<String>,

    /// Pages created before the baseline commit
    #[arg(long)]
    initial_pages: Option<usize>,

    /// Random pages removed after the commit
    #[arg(long)]
    removals: Option<usize>,

    /// Fresh pages added after the commit
    #[arg(long)]
    additions: Option<usize>,

    /// Random pages regenerated after the commit
    #[arg(long)]
    updates: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate one day of page changes and print the change report
    Simulate(SimulateArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .pagewatch.yaml in the current directory
    Init,
}

/// Merge the config file (or a preset) with command-line overrides.
fn resolve_simulate_config(args: SimulateArgs, explicit: Option<&Path>) -> Result<AppConfig> {
    if let (Some(name), Some(path)) = (args.preset.as_deref(), explicit) {
        anyhow::bail!(
            "--preset {name} cannot be combined with --config {}; a preset replaces the config file",
            path.display()
        );
    }

    let mut config = match args.preset.as_deref() {
        Some(name) => {
            let preset = ConfigPreset::from_name(name).with_context(|| {
                let names: Vec<_> = ConfigPreset::all().iter().map(|p| p.name()).collect();
                format!("unknown preset '{name}'. Valid options: {}", names.join(", "))
            })?;
            AppConfig::from_preset(preset)
        }
        None => {
            let (config, loaded_from) = load_or_default(explicit);
            if let Some(path) = loaded_from {
                tracing::debug!("Using config file {}", path.display());
            }
            config
        }
    };

    if let Some(format) = args.output {
        config.output.format = format;
    }
    if args.output_file.is_some() {
        config.output.file = args.output_file;
    }
    if let Some(recipient) = args.recipient {
        config.output.recipient = recipient;
    }
    if args.seed.is_some() {
        config.generator.seed = args.seed;
    }
    if let Some(n) = args.initial_pages {
        config.simulation.initial_pages = n;
    }
    if let Some(n) = args.removals {
        config.simulation.removals = n;
    }
    if let Some(n) = args.additions {
        config.simulation.additions = n;
    }
    if let Some(n) = args.updates {
        config.simulation.updates = n;
    }

    let errors = config.validate();
    if !errors.is_empty() {
        let message = errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n  ");
        anyhow::bail!("invalid configuration:\n  {message}");
    }
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    match cli.command {
        Commands::Simulate(args) => {
            let config = resolve_simulate_config(args, cli.config.as_deref())?;
            cli::run_simulate(&config, cli.quiet)
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "pagewatch", &mut io::stdout());
            Ok(())
        }

        Commands::ConfigSchema { output } => {
            let schema = pagewatch::config::generate_json_schema()
                .context("failed to generate config schema")?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(())
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (yaml, loaded_from) = cli::render_effective_config(cli.config.as_deref())?;
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                print!("{yaml}");
                Ok(())
            }
            ConfigAction::Path => {
                eprintln!("Config file search paths (in order):");
                for path in config_search_dirs() {
                    eprintln!("  {}", path.display());
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in CONFIG_FILE_NAMES {
                    eprintln!("  {name}");
                }
                eprintln!();
                match pagewatch::config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(())
            }
            ConfigAction::Init => {
                let cwd = std::env::current_dir().context("cannot determine current directory")?;
                let target = cli::init_config_file(&cwd)?;
                eprintln!("Created {}", target.display());
                Ok(())
            }
        },
    }
}
