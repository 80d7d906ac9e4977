//! Property-based tests for page state and diff classification.
//!
//! Random operation sequences are replayed against a plain `HashMap` model
//! and the live state must agree with it after every run.

use pagewatch::{DiffEngine, GeneratorConfig, PageMap, SiteState};
use proptest::prelude::*;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone)]
enum Op {
    Add,
    AddAt(u8),
    Remove(u8),
    Update(u8),
    RemoveRandom,
    UpdateRandom(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => Just(Op::Add),
        1 => any::<u8>().prop_map(Op::AddAt),
        2 => any::<u8>().prop_map(Op::Remove),
        2 => any::<u8>().prop_map(Op::Update),
        1 => Just(Op::RemoveRandom),
        1 => (0usize..4).prop_map(Op::UpdateRandom),
    ]
}

fn pinned_key(n: u8) -> String {
    format!("https://dns-name/pinned-{}", n % 16)
}

/// Apply `op` to the state and mirror its effect in the model.
fn apply(state: &SiteState, model: &mut HashMap<String, String>, op: &Op) {
    match op {
        Op::Add => {
            let key = state.add_page().unwrap();
            assert!(!model.contains_key(&key));
            model.insert(key.clone(), state.payload(&key).unwrap());
        }
        Op::AddAt(n) => {
            let key = pinned_key(*n);
            let replaced = state.add_page_at(key.clone()).unwrap();
            assert_eq!(replaced, model.contains_key(&key));
            model.insert(key.clone(), state.payload(&key).unwrap());
        }
        Op::Remove(n) => {
            let key = pinned_key(*n);
            assert_eq!(state.remove_page(&key), model.remove(&key).is_some());
        }
        Op::Update(n) => {
            let key = pinned_key(*n);
            let updated = state.update_page(&key).unwrap();
            assert_eq!(updated, model.contains_key(&key));
            if updated {
                model.insert(key.clone(), state.payload(&key).unwrap());
            }
        }
        Op::RemoveRandom => match state.remove_random_page() {
            Some(key) => assert!(model.remove(&key).is_some()),
            None => assert!(model.is_empty()),
        },
        Op::UpdateRandom(count) => {
            let updated = state.update_random_pages(*count).unwrap();
            if *count == 0 || model.len() < *count {
                assert!(updated.is_empty());
            } else {
                assert_eq!(updated.len(), *count);
            }
            for key in updated {
                assert!(model.contains_key(&key));
                model.insert(key.clone(), state.payload(&key).unwrap());
            }
        }
    }
}

fn page_map() -> impl Strategy<Value = PageMap> {
    prop::collection::vec(("[a-e]{1,3}", "[xy]{0,2}"), 0..24)
        .prop_map(|pairs| pairs.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn state_matches_model(
        seed in any::<u64>(),
        before in prop::collection::vec(op_strategy(), 0..30),
        after in prop::collection::vec(op_strategy(), 0..30),
    ) {
        let state = SiteState::new(GeneratorConfig::compact().with_seed(seed)).unwrap();
        let mut model = HashMap::new();

        for op in &before {
            apply(&state, &mut model, op);
        }
        state.commit_snapshot();
        let baseline = model.clone();

        for op in &after {
            apply(&state, &mut model, op);
        }

        let live: HashMap<String, String> = state.current_pages().into_iter().collect();
        prop_assert_eq!(&live, &model);

        let disappeared: HashSet<_> = state.disappeared().unwrap().into_iter().collect();
        let appeared: HashSet<_> = state.appeared().unwrap().into_iter().collect();
        let changed: HashSet<_> = state.changed().unwrap().into_iter().collect();

        let expected_disappeared: HashSet<_> = baseline
            .keys()
            .filter(|k| !model.contains_key(*k))
            .cloned()
            .collect();
        let expected_appeared: HashSet<_> = model
            .keys()
            .filter(|k| !baseline.contains_key(*k))
            .cloned()
            .collect();
        let expected_changed: HashSet<_> = model
            .iter()
            .filter(|(k, v)| baseline.get(*k).is_some_and(|old| old != *v))
            .map(|(k, _)| k.clone())
            .collect();

        prop_assert_eq!(disappeared, expected_disappeared);
        prop_assert_eq!(appeared, expected_appeared);
        prop_assert_eq!(changed, expected_changed);
    }

    #[test]
    fn diff_partitions_all_keys(previous in page_map(), current in page_map()) {
        let diff = DiffEngine::new().include_unchanged(true).diff(&previous, &current);

        let all: HashSet<&String> = previous.keys().chain(current.keys()).collect();
        prop_assert_eq!(diff.total() + diff.unchanged.len(), all.len());

        for key in all {
            let hits = [&diff.appeared, &diff.disappeared, &diff.changed, &diff.unchanged]
                .iter()
                .filter(|list| list.contains(key))
                .count();
            prop_assert_eq!(hits, 1, "key {} classified {} times", key, hits);
            prop_assert!(diff.kind_of(key).is_some());
        }
    }

    #[test]
    fn diff_lists_are_sorted(previous in page_map(), current in page_map()) {
        let diff = DiffEngine::new().include_unchanged(true).diff(&previous, &current);
        for list in [&diff.appeared, &diff.disappeared, &diff.changed, &diff.unchanged] {
            prop_assert!(list.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn self_diff_has_no_changes(pages in page_map()) {
        let diff = DiffEngine::new().diff(&pages, &pages);
        prop_assert!(diff.is_empty());
        prop_assert!(!diff.summary().has_changes());
    }
}
