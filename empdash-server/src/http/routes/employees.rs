//! GET /api/employees - the same lines as the dashboard, as JSON.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use empdash_core::{render_lines, Record, HEADER};
use serde::Serialize;

use crate::http::{ApiError, AppState};

#[derive(Debug, Serialize)]
pub struct EmployeesResponse {
    pub header: &'static str,
    /// Header followed by one line per row
    pub lines: Vec<String>,
    pub rows: Vec<Record>,
}

/// GET /api/employees
async fn list_employees(State(state): State<AppState>) -> Result<Json<EmployeesResponse>, ApiError> {
    let rows = state.source().fetch_all().await?;
    Ok(Json(EmployeesResponse {
        header: HEADER,
        lines: render_lines(&rows),
        rows,
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/employees", get(list_employees))
}
