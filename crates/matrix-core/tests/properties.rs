use std::collections::BTreeSet;

use matrix_core::{filter_store, order_for_store, resolve_category_order, select};
use matrix_model::{FilterState, NATIONAL, Organization, RecordId, RecordStore};
use proptest::prelude::*;
use proptest::test_runner::Config;

const CATEGORIES: [&str; 5] = [
    "Law Firms",
    "Contractors",
    "Appraisers",
    "Capital Providers",
    "Zoning Boards",
];
const STATES: [&str; 5] = ["Ohio", "Texas", "Utah", NATIONAL, "Maine"];
const NAMES: [&str; 6] = ["Acme", "Beta Law", "GreenAdmin", "acme west", "Delta", "Echo"];

fn category() -> impl Strategy<Value = String> {
    proptest::sample::select(CATEGORIES.to_vec()).prop_map(str::to_string)
}

fn record() -> impl Strategy<Value = (String, bool, Vec<String>)> {
    (
        proptest::sample::select(NAMES.to_vec()).prop_map(str::to_string),
        any::<bool>(),
        proptest::sample::subsequence(STATES.to_vec(), 0..=3)
            .prop_map(|states| states.into_iter().map(str::to_string).collect()),
    )
}

fn store() -> impl Strategy<Value = RecordStore> {
    proptest::collection::btree_map(category(), proptest::collection::vec(record(), 0..6), 0..5)
        .prop_map(|groups| {
            RecordStore::from_groups(groups.into_iter().map(|(category, records)| {
                let records = records
                    .into_iter()
                    .enumerate()
                    .map(|(index, (name, verified, states))| {
                        Organization::new(RecordId::synthesized(&category, index), name, "")
                            .with_verified(verified)
                            .with_states(states)
                    })
                    .collect();
                (category, records)
            }))
        })
}

fn string_set(values: &'static [&'static str], max: usize) -> impl Strategy<Value = BTreeSet<String>> {
    proptest::collection::btree_set(
        proptest::sample::select(values.to_vec()).prop_map(str::to_string),
        0..=max,
    )
}

fn filter_state() -> impl Strategy<Value = FilterState> {
    (
        string_set(&CATEGORIES, 5),
        string_set(&STATES, 3),
        any::<bool>(),
        proptest::sample::select(vec!["", "acme", " law ", "zzz", "o"]),
    )
        .prop_map(|(categories, states, include_national, search)| FilterState {
            categories,
            states,
            include_national,
            search: search.to_string(),
        })
}

fn count(store: &RecordStore, filter: &FilterState) -> usize {
    let order = order_for_store(store, &[]);
    select(store, &order, filter).record_count()
}

proptest! {
    #![proptest_config(Config::with_cases(128))]

    #[test]
    fn category_order_is_deterministic_and_complete(
        present in string_set(&CATEGORIES, 5),
        preferred in proptest::collection::vec(category(), 0..8),
    ) {
        let first = resolve_category_order(present.iter().map(String::as_str), &preferred);
        let second = resolve_category_order(present.iter().map(String::as_str), &preferred);
        prop_assert_eq!(&first, &second);

        let again = resolve_category_order(first.iter(), &preferred);
        prop_assert_eq!(&again, &first);

        prop_assert_eq!(first.len(), present.len());
        let listed: BTreeSet<String> = first.iter().map(str::to_string).collect();
        prop_assert_eq!(listed, present);
    }

    #[test]
    fn narrowing_categories_never_adds_records(
        store in store(),
        filter in filter_state(),
        keep in proptest::collection::vec(any::<bool>(), 5),
    ) {
        let mut narrowed = filter.clone();
        narrowed.categories = filter
            .categories
            .iter()
            .zip(keep.iter().cycle())
            .filter(|(_, keep)| **keep)
            .map(|(category, _)| category.clone())
            .collect();
        prop_assert!(count(&store, &narrowed) <= count(&store, &filter));
    }

    #[test]
    fn narrowing_states_never_adds_records(
        store in store(),
        filter in filter_state(),
        subset in string_set(&STATES, 2),
    ) {
        let mut wide = filter.clone();
        wide.states.clear();
        let mut narrowed = filter.clone();
        narrowed.states = subset;
        prop_assert!(count(&store, &narrowed) <= count(&store, &wide));

        // An empty state set applies no state filter at all.
        prop_assume!(!narrowed.states.is_empty());
        let mut superset = narrowed.clone();
        superset.states.extend(filter.states.iter().cloned());
        prop_assert!(count(&store, &narrowed) <= count(&store, &superset));
    }

    #[test]
    fn searching_never_adds_records(
        store in store(),
        filter in filter_state(),
        suffix in "[a-z]{0,3}",
    ) {
        let mut open = filter.clone();
        open.search.clear();
        prop_assert!(count(&store, &filter) <= count(&store, &open));

        let mut longer = filter.clone();
        longer.search = format!("{}{}", filter.search.trim(), suffix);
        let mut base = filter.clone();
        base.search = filter.search.trim().to_string();
        prop_assert!(count(&store, &longer) <= count(&store, &base));
    }

    #[test]
    fn empty_category_filter_yields_empty_output(
        store in store(),
        mut filter in filter_state(),
    ) {
        filter.categories.clear();
        let order = order_for_store(&store, &[]);
        prop_assert!(filter_store(&store, &order, &filter).is_empty());
    }

    #[test]
    fn output_never_holds_empty_sections(
        store in store(),
        filter in filter_state(),
    ) {
        let order = order_for_store(&store, &[]);
        let sections = filter_store(&store, &order, &filter);
        prop_assert!(sections.iter().all(|section| !section.records.is_empty()));
        let positions: Vec<usize> = sections
            .iter()
            .filter_map(|section| order.position(section.category))
            .collect();
        prop_assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
