use anyhow::{Context, Result, bail};
use tracing::info_span;

use matrix_cli::outline::render_outline;
use matrix_cli::session::{ViewRequest, apply_request, open_session, write_rejected};
use matrix_core::ViewBody;
use matrix_model::US_STATES;
use matrix_state::{LoadView, MatrixState};

use crate::cli::{SourceArgs, ViewArgs};
use crate::summary::{print_categories, print_states, print_table_view};

pub fn run_view(args: &ViewArgs) -> Result<()> {
    let span = info_span!("view", data = %args.source.data.display());
    let _guard = span.enter();
    let mut state = load(&args.source)?;
    let request = ViewRequest {
        mode: args.mode.into(),
        categories: args.categories.clone(),
        states: args.states.clone(),
        exclude_national: args.no_national,
        search: args.search.clone(),
        sort: args.sort.map(Into::into),
        direction: args.direction(),
        focus: args.focus.clone(),
    };
    let rejected = apply_request(&mut state, &request);
    write_rejected(&mut std::io::stderr().lock(), &rejected).context("report ignored choices")?;

    let view = state.view();
    if args.json {
        let json = serde_json::to_string_pretty(&view).context("serialize view")?;
        println!("{json}");
        return Ok(());
    }
    if let LoadView::Ready { model, focus } = &view
        && let ViewBody::Table(rows) = &model.body
    {
        print_table_view(model, rows, *focus);
    } else {
        print!("{}", render_outline(&view));
    }
    Ok(())
}

pub fn run_categories(args: &SourceArgs) -> Result<()> {
    let state = load(args)?;
    let (Some(store), Some(order)) = (state.store(), state.order()) else {
        bail!("organization data is not loaded");
    };
    print_categories(store, order, state.config());
    Ok(())
}

pub fn run_states() -> Result<()> {
    print_states(&US_STATES);
    Ok(())
}

/// Open the session; a failed fetch is a command error.
fn load(source: &SourceArgs) -> Result<MatrixState> {
    let state = open_session(&source.data, source.config.as_deref())?;
    if let Some(error) = state.error() {
        bail!("{}", error.message());
    }
    Ok(state)
}
