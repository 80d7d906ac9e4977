//! Committed point-in-time copies of the page set.

use super::PageMap;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A committed copy of every page at one instant.
///
/// Snapshots own their pages; later mutation of the live set is never
/// visible through a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pages: PageMap,
    sequence: u64,
    committed_at: DateTime<Utc>,
}

impl Snapshot {
    pub(crate) fn new(pages: PageMap, sequence: u64) -> Self {
        Self {
            pages,
            sequence,
            committed_at: Utc::now(),
        }
    }

    /// The committed pages, keyed by page key.
    #[must_use]
    pub fn pages(&self) -> &PageMap {
        &self.pages
    }

    /// Commit number, starting at 1 for the first commit.
    #[must_use]
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// When the snapshot was taken.
    #[must_use]
    pub fn committed_at(&self) -> DateTime<Utc> {
        self.committed_at
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.pages.contains_key(key)
    }

    /// Payload recorded for `key`, if the page existed at commit time.
    #[must_use]
    pub fn payload(&self, key: &str) -> Option<&str> {
        self.pages.get(key).map(String::as_str)
    }
}
