//! Change detection between a committed snapshot and the live pages.
//!
//! Every key found in either page set lands in exactly one of four groups:
//!
//! - **appeared**: only in the live pages
//! - **disappeared**: only in the baseline
//! - **changed**: in both, payload differs
//! - **unchanged**: in both, payload identical
//!
//! # Example
//!
//! ```
//! use pagewatch::diff::DiffEngine;
//! use pagewatch::state::PageMap;
//!
//! let mut previous = PageMap::new();
//! previous.insert("https://dns-name/a".into(), "<p>".into());
//! let mut current = PageMap::new();
//! current.insert("https://dns-name/b".into(), "<p>".into());
//!
//! let diff = DiffEngine::new().diff(&previous, &current);
//! assert_eq!(diff.disappeared, vec!["https://dns-name/a"]);
//! assert_eq!(diff.appeared, vec!["https://dns-name/b"]);
//! ```

mod engine;
mod result;

pub use engine::{appeared, changed, disappeared, unchanged, DiffEngine};
pub use result::{ChangeKind, DiffSummary, PageDiff};
