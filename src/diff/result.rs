//! Diff result types.

use serde::{Deserialize, Serialize};

/// How a page key relates across the baseline and the live pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    /// Present now, absent from the baseline
    Appeared,
    /// Present in the baseline, absent now
    Disappeared,
    /// Present in both with different payloads
    Changed,
    /// Present in both with identical payloads
    Unchanged,
}

impl std::fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Appeared => write!(f, "appeared"),
            Self::Disappeared => write!(f, "disappeared"),
            Self::Changed => write!(f, "changed"),
            Self::Unchanged => write!(f, "unchanged"),
        }
    }
}

/// Classification of every key across two page sets.
///
/// Each list is sorted and duplicate-free, and no key appears in more than
/// one list. `unchanged` is only filled when the engine was asked for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageDiff {
    pub appeared: Vec<String>,
    pub disappeared: Vec<String>,
    pub changed: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unchanged: Vec<String>,
}

impl PageDiff {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether anything appeared, disappeared or changed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.appeared.is_empty() && self.disappeared.is_empty() && self.changed.is_empty()
    }

    /// Number of keys that appeared, disappeared or changed.
    #[must_use]
    pub fn total(&self) -> usize {
        self.appeared.len() + self.disappeared.len() + self.changed.len()
    }

    /// Look up which list holds `key`.
    #[must_use]
    pub fn kind_of(&self, key: &str) -> Option<ChangeKind> {
        let lists = [
            (&self.appeared, ChangeKind::Appeared),
            (&self.disappeared, ChangeKind::Disappeared),
            (&self.changed, ChangeKind::Changed),
            (&self.unchanged, ChangeKind::Unchanged),
        ];
        lists
            .into_iter()
            .find_map(|(keys, kind)| keys.iter().any(|k| k == key).then_some(kind))
    }

    #[must_use]
    pub fn summary(&self) -> DiffSummary {
        DiffSummary {
            appeared: self.appeared.len(),
            disappeared: self.disappeared.len(),
            changed: self.changed.len(),
            unchanged: self.unchanged.len(),
        }
    }

    pub(crate) fn sort(&mut self) {
        self.appeared.sort_unstable();
        self.disappeared.sort_unstable();
        self.changed.sort_unstable();
        self.unchanged.sort_unstable();
    }
}

/// Counts per classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSummary {
    pub appeared: usize,
    pub disappeared: usize,
    pub changed: usize,
    pub unchanged: usize,
}

impl DiffSummary {
    #[must_use]
    pub fn has_changes(&self) -> bool {
        self.appeared > 0 || self.disappeared > 0 || self.changed > 0
    }
}
