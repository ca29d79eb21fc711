//! End-to-end checks of the filter and sort engines.

use std::collections::BTreeSet;

use matrix_core::{
    EmptyReason, ViewBody, derive_view, filter_store, order_for_store, select,
};
use matrix_model::{
    CategoryConfig, FilterState, NATIONAL, Organization, RecordId, RecordStore, SortDirection,
    SortKey, SortState, ViewMode,
};

fn org(id: &str, name: &str, verified: bool, states: &[&str]) -> Organization {
    Organization::new(RecordId::new(id).unwrap(), name, "")
        .with_verified(verified)
        .with_states(states.iter().copied())
}

fn set(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn scenario_store() -> RecordStore {
    RecordStore::from_groups([
        (
            "Law Firms".to_string(),
            vec![
                org("1", "Acme Law", true, &["NY"]),
                org("2", "Beta Law", false, &[NATIONAL]),
            ],
        ),
        (
            "Consultants".to_string(),
            vec![org("3", "Gamma Co", false, &["CA"])],
        ),
    ])
}

fn section_ids(sections: &[matrix_core::CategorySection<'_>]) -> Vec<(String, Vec<String>)> {
    sections
        .iter()
        .map(|s| {
            (
                s.category.to_string(),
                s.records.iter().map(|r| r.id.to_string()).collect(),
            )
        })
        .collect()
}

#[test]
fn state_filter_keeps_national_records_and_drops_empty_categories() {
    let store = scenario_store();
    let order = order_for_store(&store, &[]);
    let filter = FilterState {
        categories: set(&["Law Firms", "Consultants"]),
        states: set(&["NY"]),
        include_national: true,
        search: String::new(),
    };

    let sections = filter_store(&store, &order, &filter);
    assert_eq!(
        section_ids(&sections),
        vec![("Law Firms".to_string(), vec!["1".to_string(), "2".to_string()])]
    );
}

#[test]
fn empty_category_filter_selects_nothing() {
    let store = scenario_store();
    let order = order_for_store(&store, &[]);
    let filter = FilterState::default();
    let selection = select(&store, &order, &filter);
    assert!(selection.sections.is_empty());
    assert_eq!(selection.empty, Some(EmptyReason::NoCategoriesSelected));

    // Selecting only categories the store lacks is the same empty state.
    let filter = FilterState::with_categories(["Mortgage Holders"]);
    assert_eq!(
        select(&store, &order, &filter).empty,
        Some(EmptyReason::NoCategoriesSelected)
    );
}

#[test]
fn empty_states_are_distinguished() {
    let store = scenario_store();
    let order = order_for_store(&store, &[]);

    let mut filter = FilterState::with_categories(["Law Firms", "Consultants"]);
    filter.states = set(&["TX"]);
    filter.include_national = false;
    assert_eq!(
        select(&store, &order, &filter).empty,
        Some(EmptyReason::NoStateMatches)
    );

    let mut filter = FilterState::with_categories(["Law Firms", "Consultants"]);
    filter.search = "  zebra ".to_string();
    assert_eq!(
        select(&store, &order, &filter).empty,
        Some(EmptyReason::NoSearchMatches {
            term: "zebra".to_string()
        })
    );
}

#[test]
fn search_is_case_insensitive_and_trimmed() {
    let store = RecordStore::from_groups([(
        "C-PACE Administrators".to_string(),
        vec![
            org("1", "GreenAdmin Co", false, &[]),
            org("2", "EcoProperty Managers", false, &[]),
        ],
    )]);
    let order = order_for_store(&store, &[]);
    for term in ["greenadmin", "greenadmin ", "  GREENADMIN"] {
        let mut filter = FilterState::with_categories(["C-PACE Administrators"]);
        filter.search = term.to_string();
        let sections = filter_store(&store, &order, &filter);
        assert_eq!(sections.len(), 1, "term {term:?}");
        assert_eq!(sections[0].records.len(), 1);
        assert_eq!(sections[0].records[0].name, "GreenAdmin Co");
    }
}

#[test]
fn sections_follow_category_order_not_key_order() {
    let store = RecordStore::from_groups([
        ("Appraisers".to_string(), vec![org("1", "A", false, &[])]),
        ("Law Firms".to_string(), vec![org("2", "B", false, &[])]),
        ("Capital Providers".to_string(), vec![org("3", "C", false, &[])]),
    ]);
    let config = CategoryConfig::default();
    let order = order_for_store(&store, &config.order);
    let filter = FilterState::with_categories(["Appraisers", "Law Firms", "Capital Providers"]);

    let categories: Vec<String> = filter_store(&store, &order, &filter)
        .iter()
        .map(|s| s.category.to_string())
        .collect();
    assert_eq!(categories, ["Law Firms", "Capital Providers", "Appraisers"]);
}

#[test]
fn grid_and_table_share_survivors() {
    let store = RecordStore::from_groups([
        (
            "Law Firms".to_string(),
            vec![
                org("a", "Zeta Law", false, &["NY"]),
                org("b", "Alpha Law", true, &["NY"]),
                org("c", "Mid Law", false, &["CA"]),
            ],
        ),
        (
            "Contractors".to_string(),
            vec![org("d", "Builder", true, &["NY"])],
        ),
    ]);
    let config = CategoryConfig::default();
    let order = order_for_store(&store, &config.order);
    let mut filter = FilterState::with_categories(["Law Firms", "Contractors"]);
    filter.states = set(&["NY"]);

    let grid = derive_view(
        &store,
        &order,
        &filter,
        SortState::default(),
        ViewMode::Grid,
        &config,
    );
    let ViewBody::Grid(sections) = &grid.body else {
        panic!("expected grid body");
    };
    let grid_ids: Vec<&str> = sections
        .iter()
        .flat_map(|s| s.records.iter().map(|r| r.id.as_str()))
        .collect();
    assert_eq!(grid_ids, ["b", "a", "d"]);

    let table = derive_view(
        &store,
        &order,
        &filter,
        SortState::new(SortKey::Name, SortDirection::Ascending),
        ViewMode::Table,
        &config,
    );
    let ViewBody::Table(rows) = &table.body else {
        panic!("expected table body");
    };
    let table_ids: Vec<&str> = rows.iter().map(|r| r.record.id.as_str()).collect();
    assert_eq!(table_ids, ["b", "d", "a"]);
    assert_eq!(grid.record_count(), table.record_count());
}

#[test]
fn default_table_sort_is_verified_first_then_store_order() {
    let store = RecordStore::from_groups([
        (
            "Law Firms".to_string(),
            vec![org("1", "One", false, &[]), org("2", "Two", true, &[])],
        ),
        (
            "Contractors".to_string(),
            vec![org("3", "Three", true, &[]), org("4", "Four", false, &[])],
        ),
    ]);
    let config = CategoryConfig::default();
    let order = order_for_store(&store, &config.order);
    let filter = FilterState::with_categories(["Law Firms", "Contractors"]);

    let table = derive_view(
        &store,
        &order,
        &filter,
        SortState::default(),
        ViewMode::Table,
        &config,
    );
    let ViewBody::Table(rows) = &table.body else {
        panic!("expected table body");
    };
    let ids: Vec<&str> = rows.iter().map(|r| r.record.id.as_str()).collect();
    assert_eq!(ids, ["2", "3", "1", "4"]);
    assert_eq!(rows[1].category, "Contractors");
}

#[test]
fn multi_category_duplicates_filter_independently() {
    let shared = |category: &str, states: &[&str]| {
        Organization::new(RecordId::new("shared").unwrap(), "Shared Co", category)
            .with_states(states.iter().copied())
            .with_all_categories(["Law Firms", "Contractors"])
    };
    let store = RecordStore::from_groups([
        ("Law Firms".to_string(), vec![shared("Law Firms", &["Ohio"])]),
        ("Contractors".to_string(), vec![shared("Contractors", &["Utah"])]),
    ]);
    let order = order_for_store(&store, &[]);
    let mut filter = FilterState::with_categories(["Law Firms", "Contractors"]);
    filter.states = set(&["Ohio"]);

    let sections = filter_store(&store, &order, &filter);
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].category, "Law Firms");
}

#[test]
fn layout_hints_reach_the_grid() {
    let store = scenario_store();
    let mut config = CategoryConfig::default();
    config.layout.column_count = 1;
    config
        .hints
        .insert("Law Firms".to_string(), matrix_model::CategoryHint { wide: true });
    let order = order_for_store(&store, &config.order);
    let filter = FilterState::with_categories(["Law Firms", "Consultants"]);

    let model = derive_view(
        &store,
        &order,
        &filter,
        SortState::default(),
        ViewMode::Grid,
        &config,
    );
    assert_eq!(model.column_count, 1);
    let ViewBody::Grid(sections) = &model.body else {
        panic!("expected grid body");
    };
    assert!(sections[0].wide);
    assert!(!sections[1].wide);
}

#[test]
fn render_model_serializes_for_renderers() {
    let store = scenario_store();
    let order = order_for_store(&store, &[]);
    let model = derive_view(
        &store,
        &order,
        &FilterState::default(),
        SortState::default(),
        ViewMode::Grid,
        &CategoryConfig::default(),
    );
    let json = serde_json::to_value(&model).expect("serialize model");
    assert_eq!(json["mode"], "grid");
    assert_eq!(json["body"]["kind"], "empty");
    assert_eq!(json["body"]["value"]["reason"], "noCategoriesSelected");
}
