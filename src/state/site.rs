//! Live page state with snapshot commits and change queries.

use super::{IdentifierGenerator, PageMap, Snapshot};
use crate::config::GeneratorConfig;
use crate::diff::{self, DiffEngine, PageDiff};
use crate::error::{PageWatchError, Result};
use parking_lot::Mutex;

/// Tracks the live page set (`current`) and the last committed snapshot
/// (`previous`).
///
/// Every operation runs under one exclusive lock covering both maps and the
/// identifier generator, so operations are linearized: all effects of one
/// call are visible to the next, and a commit is a consistent point-in-time
/// copy. Mutations only ever touch `current`.
///
/// # Example
///
/// ```
/// use pagewatch::{GeneratorConfig, SiteState};
///
/// let state = SiteState::new(GeneratorConfig::compact().with_seed(1))?;
/// let home = state.add_page()?;
/// state.commit_snapshot();
///
/// state.update_page(&home)?;
/// assert_eq!(state.changed()?, vec![home]);
/// # Ok::<(), pagewatch::PageWatchError>(())
/// ```
#[derive(Debug)]
pub struct SiteState {
    inner: Mutex<Pages>,
}

#[derive(Debug)]
struct Pages {
    current: PageMap,
    previous: Option<Snapshot>,
    commits: u64,
    generator: IdentifierGenerator,
}

impl Pages {
    fn baseline(&self, operation: &str) -> Result<&Snapshot> {
        self.previous
            .as_ref()
            .ok_or_else(|| PageWatchError::no_baseline(operation))
    }
}

impl SiteState {
    /// Create an empty state whose generator uses `config`.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        Ok(Self::with_generator(IdentifierGenerator::new(config)?))
    }

    /// Create an empty state around an existing generator.
    #[must_use]
    pub fn with_generator(generator: IdentifierGenerator) -> Self {
        Self {
            inner: Mutex::new(Pages {
                current: PageMap::new(),
                previous: None,
                commits: 0,
                generator,
            }),
        }
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Add a page under a freshly generated key with a fresh payload.
    ///
    /// Returns the new key, which was absent before the call.
    pub fn add_page(&self) -> Result<String> {
        let mut guard = self.inner.lock();
        let Pages {
            current, generator, ..
        } = &mut *guard;

        let key = generator.generate_key(current)?;
        let payload = generator.generate_payload(current)?;
        tracing::debug!(%key, payload_len = payload.len(), "page added");
        current.insert(key.clone(), payload);
        Ok(key)
    }

    /// Store a freshly generated payload under `key`.
    ///
    /// An existing page is overwritten. Returns whether a page was replaced.
    pub fn add_page_at(&self, key: impl Into<String>) -> Result<bool> {
        let key = key.into();
        let mut guard = self.inner.lock();
        let Pages {
            current, generator, ..
        } = &mut *guard;

        let payload = generator.generate_payload(current)?;
        let replaced = current.insert(key.clone(), payload).is_some();
        tracing::debug!(%key, replaced, "page stored");
        Ok(replaced)
    }

    /// Store an observed payload under `key`, overwriting any existing page.
    ///
    /// Returns the payload that was replaced, if any.
    pub fn put_page(&self, key: impl Into<String>, payload: impl Into<String>) -> Option<String> {
        let key = key.into();
        let mut guard = self.inner.lock();
        let replaced = guard.current.insert(key.clone(), payload.into());
        tracing::debug!(%key, replaced = replaced.is_some(), "page content applied");
        replaced
    }

    /// Remove `key` if present. Returns whether a page was removed.
    pub fn remove_page(&self, key: &str) -> bool {
        let mut guard = self.inner.lock();
        let removed = guard.current.shift_remove(key).is_some();
        if removed {
            tracing::debug!(key, "page removed");
        }
        removed
    }

    /// Remove one page chosen uniformly at random.
    ///
    /// Returns the removed key, or `None` when there are no pages.
    pub fn remove_random_page(&self) -> Option<String> {
        let mut guard = self.inner.lock();
        let Pages {
            current, generator, ..
        } = &mut *guard;

        let index = generator.pick_index(current.len())?;
        let (key, _) = current.shift_remove_index(index)?;
        tracing::debug!(%key, remaining = current.len(), "random page removed");
        Some(key)
    }

    /// Replace the payload of `key` with a freshly generated one.
    ///
    /// Returns `false` without changing anything when `key` is absent.
    pub fn update_page(&self, key: &str) -> Result<bool> {
        let mut guard = self.inner.lock();
        let Pages {
            current, generator, ..
        } = &mut *guard;

        if !current.contains_key(key) {
            return Ok(false);
        }
        let payload = generator.generate_payload(current)?;
        if let Some(slot) = current.get_mut(key) {
            *slot = payload;
        }
        tracing::debug!(key, "page updated");
        Ok(true)
    }

    /// Regenerate the payload of `count` distinct pages chosen at random.
    ///
    /// Does nothing and returns an empty list when fewer than `count` pages
    /// exist. Payloads are generated before any page is touched, so an error
    /// leaves the state unchanged. Returns the updated keys.
    pub fn update_random_pages(&self, count: usize) -> Result<Vec<String>> {
        let mut guard = self.inner.lock();
        let Pages {
            current, generator, ..
        } = &mut *guard;

        if count == 0 || current.len() < count {
            tracing::debug!(count, available = current.len(), "random update skipped");
            return Ok(Vec::new());
        }

        let payloads = generator.generate_payloads(current, count)?;
        let indices = generator.sample_indices(current.len(), count);

        let mut updated = Vec::with_capacity(count);
        for (index, payload) in indices.into_iter().zip(payloads) {
            if let Some((key, slot)) = current.get_index_mut(index) {
                *slot = payload;
                updated.push(key.clone());
            }
        }
        tracing::debug!(count = updated.len(), "random pages updated");
        Ok(updated)
    }

    /// Copy `current` into `previous`, replacing the old baseline.
    ///
    /// Returns the sequence number of the new snapshot.
    pub fn commit_snapshot(&self) -> u64 {
        let mut guard = self.inner.lock();
        guard.commits += 1;
        let snapshot = Snapshot::new(guard.current.clone(), guard.commits);
        let sequence = snapshot.sequence();
        tracing::debug!(sequence, pages = snapshot.len(), "snapshot committed");
        guard.previous = Some(snapshot);
        sequence
    }

    // ------------------------------------------------------------------
    // Change queries
    // ------------------------------------------------------------------

    /// Keys committed in the baseline but no longer present.
    pub fn disappeared(&self) -> Result<Vec<String>> {
        let guard = self.inner.lock();
        let baseline = guard.baseline("disappeared")?;
        Ok(diff::disappeared(baseline.pages(), &guard.current))
    }

    /// Keys present now but absent from the baseline.
    pub fn appeared(&self) -> Result<Vec<String>> {
        let guard = self.inner.lock();
        let baseline = guard.baseline("appeared")?;
        Ok(diff::appeared(baseline.pages(), &guard.current))
    }

    /// Keys present in both whose payload differs.
    pub fn changed(&self) -> Result<Vec<String>> {
        let guard = self.inner.lock();
        let baseline = guard.baseline("changed")?;
        Ok(diff::changed(baseline.pages(), &guard.current))
    }

    /// Keys present in both with an identical payload.
    pub fn unchanged(&self) -> Result<Vec<String>> {
        let guard = self.inner.lock();
        let baseline = guard.baseline("unchanged")?;
        Ok(diff::unchanged(baseline.pages(), &guard.current))
    }

    /// Full classification against the baseline in one consistent read.
    pub fn diff(&self) -> Result<PageDiff> {
        self.diff_with(&DiffEngine::new())
    }

    /// Like [`diff`](Self::diff), with a configured engine.
    pub fn diff_with(&self, engine: &DiffEngine) -> Result<PageDiff> {
        let guard = self.inner.lock();
        let baseline = guard.baseline("diff")?;
        Ok(engine.diff(baseline.pages(), &guard.current))
    }

    // ------------------------------------------------------------------
    // Inspection
    // ------------------------------------------------------------------

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().current.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().current.is_empty()
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.inner.lock().current.contains_key(key)
    }

    /// Current payload of `key`.
    #[must_use]
    pub fn payload(&self, key: &str) -> Option<String> {
        self.inner.lock().current.get(key).cloned()
    }

    /// Whether a snapshot has been committed.
    #[must_use]
    pub fn has_baseline(&self) -> bool {
        self.inner.lock().previous.is_some()
    }

    /// A copy of the live pages.
    #[must_use]
    pub fn current_pages(&self) -> PageMap {
        self.inner.lock().current.clone()
    }

    /// A copy of the last committed snapshot.
    #[must_use]
    pub fn previous_snapshot(&self) -> Option<Snapshot> {
        self.inner.lock().previous.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> SiteState {
        SiteState::new(GeneratorConfig::compact().with_seed(3)).unwrap()
    }

    #[test]
    fn test_add_page_grows_by_one() {
        let state = state();
        let key = state.add_page().unwrap();
        assert_eq!(state.len(), 1);
        assert!(state.contains(&key));
        assert!(key.starts_with("https://dns-name/"));
    }

    #[test]
    fn test_add_page_at_overwrites() {
        let state = state();
        assert!(!state.add_page_at("https://dns-name/home").unwrap());
        let first = state.payload("https://dns-name/home").unwrap();

        assert!(state.add_page_at("https://dns-name/home").unwrap());
        let second = state.payload("https://dns-name/home").unwrap();
        assert_ne!(first, second);
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let state = state();
        state.add_page().unwrap();
        assert!(!state.remove_page("https://dns-name/missing"));
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn test_remove_random_on_empty() {
        let state = state();
        assert_eq!(state.remove_random_page(), None);
    }

    #[test]
    fn test_remove_random_removes_live_key() {
        let state = state();
        let keys: Vec<String> = (0..5).map(|_| state.add_page().unwrap()).collect();
        let removed = state.remove_random_page().unwrap();
        assert!(keys.contains(&removed));
        assert!(!state.contains(&removed));
        assert_eq!(state.len(), 4);
    }

    #[test]
    fn test_update_absent_is_noop() {
        let state = state();
        assert!(!state.update_page("https://dns-name/missing").unwrap());
        assert!(state.is_empty());
    }

    #[test]
    fn test_update_random_requires_enough_pages() {
        let state = state();
        state.add_page().unwrap();
        state.add_page().unwrap();
        let before = state.current_pages();

        assert!(state.update_random_pages(3).unwrap().is_empty());
        assert!(state.update_random_pages(0).unwrap().is_empty());
        assert_eq!(state.current_pages(), before);
    }

    #[test]
    fn test_update_random_touches_distinct_pages() {
        let state = state();
        for _ in 0..4 {
            state.add_page().unwrap();
        }
        let before = state.current_pages();

        let mut updated = state.update_random_pages(4).unwrap();
        updated.sort();
        updated.dedup();
        assert_eq!(updated.len(), 4);

        let after = state.current_pages();
        for key in &updated {
            assert_ne!(before.get(key), after.get(key));
        }
    }

    #[test]
    fn test_commit_sequence_increments() {
        let state = state();
        assert!(!state.has_baseline());
        assert_eq!(state.commit_snapshot(), 1);
        assert_eq!(state.commit_snapshot(), 2);
        assert_eq!(state.previous_snapshot().unwrap().sequence(), 2);
    }

    #[test]
    fn test_snapshot_is_independent_copy() {
        let state = state();
        let key = state.add_page().unwrap();
        state.commit_snapshot();
        let committed = state.payload(&key).unwrap();

        state.update_page(&key).unwrap();
        state.remove_page(&key);

        let snapshot = state.previous_snapshot().unwrap();
        assert_eq!(snapshot.payload(&key), Some(committed.as_str()));
    }

    #[test]
    fn test_queries_require_baseline() {
        let state = state();
        state.add_page().unwrap();

        assert!(state.appeared().unwrap_err().is_no_baseline());
        assert!(state.disappeared().unwrap_err().is_no_baseline());
        assert!(state.changed().unwrap_err().is_no_baseline());
        assert!(state.unchanged().unwrap_err().is_no_baseline());
        assert!(state.diff().unwrap_err().is_no_baseline());
    }

    #[test]
    fn test_put_page_same_payload_is_not_a_change() {
        let state = state();
        state.put_page("https://dns-name/a", "<p>same</p>");
        state.commit_snapshot();

        let old = state.put_page("https://dns-name/a", "<p>same</p>");
        assert_eq!(old.as_deref(), Some("<p>same</p>"));
        assert!(state.changed().unwrap().is_empty());
        assert_eq!(state.unchanged().unwrap(), vec!["https://dns-name/a".to_string()]);
    }
}
