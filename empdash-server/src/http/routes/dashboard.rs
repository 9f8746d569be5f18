//! GET / - the employee dashboard page.
//!
//! Every request runs the full fetch (connect, query, close) and renders the
//! result. Rows are only written once the whole table is in memory.

use axum::extract::State;
use axum::response::Html;
use axum::{routing::get, Router};
use tracing::info;

use crate::http::page::HtmlPage;
use crate::http::{AppState, PageError};

/// GET /
async fn dashboard(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let records = state.source().fetch_all().await?;
    info!(rows = records.len(), "Rendering employee dashboard");

    let mut page = HtmlPage::new();
    empdash_core::present(&records, &mut page)?;
    Ok(Html(page.finish()))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(dashboard))
}
