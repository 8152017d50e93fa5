//! Route table inspection endpoints.

use axum::extract::{Query, State};
use axum::response::Json;
use serde::{Deserialize, Serialize};
use tracker_ui::routes::{RouteTable, View};

use crate::state::AppState;

/// One table entry as exposed over JSON. Exactly one of `view` and
/// `redirect` is present.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct RouteSummary {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<View>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ResolveQuery {
    pub path: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ResolveResponse {
    pub requested: String,
    pub path: String,
    pub view: View,
    pub redirected: bool,
}

pub fn summarize(table: &RouteTable) -> Vec<RouteSummary> {
    table
        .entries()
        .iter()
        .map(|entry| RouteSummary {
            path: entry.path().to_owned(),
            view: entry.view(),
            redirect: entry.redirect().map(str::to_owned),
        })
        .collect()
}

pub fn resolve(table: &RouteTable, path: &str) -> ResolveResponse {
    let resolution = table.resolve(path);
    if resolution.redirected {
        tracing::debug!(requested = %resolution.requested, to = %resolution.path, "path redirected");
    }
    ResolveResponse {
        requested: resolution.requested,
        path: resolution.path,
        view: resolution.view,
        redirected: resolution.redirected,
    }
}

/// `GET /api/routes` — entries in evaluation order, catch-all last.
pub async fn list_routes(State(state): State<AppState>) -> Json<Vec<RouteSummary>> {
    Json(summarize(state.routes()))
}

/// `GET /api/routes/resolve?path=...` — what navigating to `path` renders.
pub async fn resolve_route(
    State(state): State<AppState>,
    Query(query): Query<ResolveQuery>,
) -> Json<ResolveResponse> {
    Json(resolve(state.routes(), &query.path))
}

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;
