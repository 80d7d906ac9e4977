//! **Snapshot-based change tracking for monitored pages.**
//!
//! `pagewatch` keeps a live set of pages (a URL-like key mapped to page
//! content), lets you commit the live set as a baseline, and answers which
//! pages disappeared, appeared, or changed since that commit.
//!
//! ## Core Concepts & Modules
//!
//! - **[`state`]**: [`SiteState`] holds the live pages and the last committed
//!   [`Snapshot`] behind a single lock. Its [`IdentifierGenerator`] produces
//!   unique random keys and payloads.
//! - **[`diff`]**: [`DiffEngine`] classifies every key of two page maps into
//!   a [`PageDiff`].
//! - **[`reports`]**: renders a `PageDiff` as the text notice for a human
//!   recipient or as JSON.
//! - **[`simulation`]**: one simulated day of activity, see [`run_simulation`].
//! - **[`config`]**: typed, validated settings with YAML file discovery.
//!
//! ## Getting Started
//!
//! ```
//! use pagewatch::{GeneratorConfig, SiteState};
//!
//! let state = SiteState::new(GeneratorConfig::compact().with_seed(42))?;
//! let first = state.add_page()?;
//! let second = state.add_page()?;
//! state.commit_snapshot();
//!
//! state.remove_page(&first);
//! state.update_page(&second)?;
//! let added = state.add_page()?;
//!
//! let diff = state.diff()?;
//! assert_eq!(diff.disappeared, vec![first]);
//! assert_eq!(diff.changed, vec![second]);
//! assert_eq!(diff.appeared, vec![added]);
//! # Ok::<(), pagewatch::PageWatchError>(())
//! ```
//!
//! ### Rendering a Report
//!
//! ```
//! use pagewatch::reports::{ReportGenerator, ReportMetadata, SummaryReporter};
//! use pagewatch::PageDiff;
//!
//! let diff = PageDiff {
//!     appeared: vec!["https://dns-name/news".to_string()],
//!     ..PageDiff::default()
//! };
//! let text = SummaryReporter::new().generate(&diff, &ReportMetadata::new("Ops"))?;
//! assert!(text.contains("Appeared pages: {\nhttps://dns-name/news\n}"));
//! # Ok::<(), pagewatch::reports::ReportError>(())
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // Variable names like `old`/`new` are clear in context
    clippy::similar_names
)]

pub mod cli;
pub mod config;
pub mod diff;
pub mod error;
pub mod reports;
pub mod simulation;
pub mod state;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigPreset, GeneratorConfig, SimulationConfig};
pub use config::{ConfigError, Validatable};
pub use diff::{ChangeKind, DiffEngine, DiffSummary, PageDiff};
pub use error::{PageWatchError, Result};
pub use reports::{ReportFormat, ReportGenerator};
pub use simulation::{run_simulation, SimulationOutcome};
pub use state::{IdentifierGenerator, PageMap, SiteState, Snapshot};
