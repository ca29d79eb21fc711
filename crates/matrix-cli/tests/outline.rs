//! Text output of the view command, driven through the same session code.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use matrix_cli::outline::render_outline;
use matrix_cli::session::{ViewRequest, apply_request, open_session};
use matrix_model::{SortDirection, SortKey, ViewMode};
use matrix_state::MatrixState;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn render(state: &mut MatrixState, request: &ViewRequest) -> String {
    let rejected = apply_request(state, request);
    assert!(rejected.is_empty(), "rejected: {rejected:?}");
    render_outline(&state.view())
}

fn sample() -> MatrixState {
    open_session(&fixture("sample.json"), None).expect("open sample")
}

#[test]
fn default_grid_outline() {
    let output = render(&mut sample(), &ViewRequest::default());
    insta::assert_snapshot!(output, @r"
grid view, 2 column(s), 6 organization(s)

C-PACE Administrators (1)
  [x] GreenAdmin Co (Texas)

Law Firms (2)
  [x] Beta Law (National)
  [ ] Acme Law (New York)

Program Consultants (2)
  [x] GreenAdmin Co (Texas)
  [ ] Nameless Partners

Appraisers (1)
  [ ] Gamma Appraisal (California, Nevada)
");
}

#[test]
fn table_outline_with_state_filter_and_focus() {
    let request = ViewRequest {
        mode: ViewMode::Table,
        states: vec!["New York".to_string()],
        sort: Some(SortKey::Name),
        focus: Some("1".to_string()),
        ..ViewRequest::default()
    };
    let output = render(&mut sample(), &request);
    insta::assert_snapshot!(output, @r"
table view by name ascending, 2 organization(s)
>  1. [ ] Acme Law | Law Firms | New York
        contact: info@acme.test
        website: https://acme.test
   2. [x] Beta Law | Law Firms | National
");
}

#[test]
fn national_exclusion_and_descending_sort() {
    let request = ViewRequest {
        mode: ViewMode::Table,
        states: vec!["New York".to_string(), "Texas".to_string()],
        exclude_national: true,
        sort: Some(SortKey::Name),
        direction: Some(SortDirection::Descending),
        ..ViewRequest::default()
    };
    let output = render(&mut sample(), &request);
    insta::assert_snapshot!(output, @r"
table view by name descending, 3 organization(s)
   1. [x] GreenAdmin Co | C-PACE Administrators | Texas
   2. [x] GreenAdmin Co | Program Consultants | Texas
   3. [ ] Acme Law | Law Firms | New York
");
}

#[test]
fn search_with_focus_expands_every_copy() {
    let request = ViewRequest {
        search: Some("  greenadmin ".to_string()),
        focus: Some("4".to_string()),
        ..ViewRequest::default()
    };
    let output = render(&mut sample(), &request);
    insta::assert_snapshot!(output, @r"
grid view, 2 column(s), 2 organization(s)

C-PACE Administrators (1)
  [x] GreenAdmin Co (Texas)
        also in: Program Consultants

Program Consultants (1)
  [x] GreenAdmin Co (Texas)
        also in: C-PACE Administrators
");
}

#[test]
fn empty_outline_names_the_search_term() {
    let request = ViewRequest {
        search: Some("zebra".to_string()),
        ..ViewRequest::default()
    };
    let output = render(&mut sample(), &request);
    assert_eq!(output, "No organizations match \"zebra\".\n");
}

#[test]
fn configured_order_and_layout() {
    let dir = TempDir::new().expect("create temp dir");
    let config = dir.path().join("market-matrix.toml");
    fs::write(
        &config,
        r#"
[categories]
order = ["Appraisers", "Mortgage Holders"]

[categories.layout]
column_count = 1

[categories.hints."Appraisers"]
wide = true
"#,
    )
    .expect("write config");

    let mut state = open_session(&fixture("sample.json"), Some(config.as_path())).expect("open sample");
    let request = ViewRequest {
        categories: vec!["Appraisers".to_string(), "Law Firms".to_string()],
        ..ViewRequest::default()
    };
    let output = render(&mut state, &request);
    insta::assert_snapshot!(output, @r"
grid view, 1 column(s), 3 organization(s)

Appraisers (1) [wide]
  [ ] Gamma Appraisal (California, Nevada)

Law Firms (2)
  [x] Beta Law (National)
  [ ] Acme Law (New York)
");
}

#[test]
fn tabular_fixture_loads_with_uncategorized_group() {
    let mut state = open_session(&fixture("tabular.json"), None).expect("open tabular");
    let order: Vec<String> = state
        .order()
        .expect("ready")
        .iter()
        .map(str::to_string)
        .collect();
    assert_eq!(
        order,
        ["Technical Service Providers", "Contractors", "Uncategorized"]
    );
    let output = render(
        &mut state,
        &ViewRequest {
            categories: vec!["Uncategorized".to_string()],
            ..ViewRequest::default()
        },
    );
    assert!(output.contains("[ ] Loose Ends LLC\n"));
}

#[test]
fn missing_data_file_fails_the_load() {
    let state = open_session(&fixture("does-not-exist.json"), None).expect("session opens");
    let error = state.error().expect("failed phase");
    assert!(error.message().contains("does-not-exist.json"));
}

#[test]
fn malformed_config_is_an_error() {
    let dir = TempDir::new().expect("create temp dir");
    let config = dir.path().join("broken.toml");
    fs::write(&config, "[categories\norder = 1").expect("write config");
    let error = open_session(&fixture("sample.json"), Some(config.as_path())).unwrap_err();
    assert!(format!("{error:#}").contains("load configuration"));
}
