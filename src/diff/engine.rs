//! Three-way page diff.

use super::PageDiff;
use crate::state::PageMap;

/// Keys in `previous` that are missing from `current`.
#[must_use]
pub fn disappeared(previous: &PageMap, current: &PageMap) -> Vec<String> {
    sorted(
        previous
            .keys()
            .filter(|key| !current.contains_key(*key))
            .cloned()
            .collect(),
    )
}

/// Keys in `current` that are missing from `previous`.
#[must_use]
pub fn appeared(previous: &PageMap, current: &PageMap) -> Vec<String> {
    disappeared(current, previous)
}

/// Keys in both maps whose payloads differ.
#[must_use]
pub fn changed(previous: &PageMap, current: &PageMap) -> Vec<String> {
    sorted(
        current
            .iter()
            .filter(|(key, payload)| previous.get(*key).is_some_and(|old| old != *payload))
            .map(|(key, _)| key.clone())
            .collect(),
    )
}

/// Keys in both maps with identical payloads.
#[must_use]
pub fn unchanged(previous: &PageMap, current: &PageMap) -> Vec<String> {
    sorted(
        current
            .iter()
            .filter(|(key, payload)| previous.get(*key).is_some_and(|old| old == *payload))
            .map(|(key, _)| key.clone())
            .collect(),
    )
}

fn sorted(mut keys: Vec<String>) -> Vec<String> {
    keys.sort_unstable();
    keys
}

/// Classifies every key across a baseline and the live pages.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiffEngine {
    include_unchanged: bool,
}

impl DiffEngine {
    /// Create a new diff engine with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Also list keys whose payload did not change
    #[must_use]
    pub fn include_unchanged(mut self, include: bool) -> Self {
        self.include_unchanged = include;
        self
    }

    /// Classify every key of `previous` and `current`.
    ///
    /// One pass over `current` sorts keys into appeared, changed and
    /// unchanged; one pass over `previous` collects what disappeared.
    #[must_use]
    pub fn diff(&self, previous: &PageMap, current: &PageMap) -> PageDiff {
        let mut result = PageDiff::new();

        for (key, payload) in current {
            match previous.get(key) {
                None => result.appeared.push(key.clone()),
                Some(old) if old != payload => result.changed.push(key.clone()),
                Some(_) => {
                    if self.include_unchanged {
                        result.unchanged.push(key.clone());
                    }
                }
            }
        }

        result.disappeared = previous
            .keys()
            .filter(|key| !current.contains_key(*key))
            .cloned()
            .collect();

        result.sort();
        result
    }
}
