//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the JSON inspection endpoints and Leptos SSR rendering
//! under a single Axum router. Every page path is rendered by the Leptos app,
//! which resolves it through the shared route table (unknown paths redirect
//! to `/login`). Compiled WASM/CSS assets are served under `/pkg`.

pub mod table;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ConfigError;
use crate::state::AppState;

/// JSON endpoints that do not need the Leptos runtime.
fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/routes", get(table::list_routes))
        .route("/api/routes/resolve", get(table::resolve_route))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Leptos SSR for every page path. The shell from `state` is provided as
/// context, so pages resolve against the same table the API reports.
fn page_routes(state: &AppState, leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(tracker_ui::app::App);

    Router::new()
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            {
                let shell = state.shell.clone();
                move || provide_context(shell.clone())
            },
            {
                let opts = leptos_options.clone();
                move || tracker_ui::app::shell(opts.clone())
            },
        )
        .with_state(leptos_options)
}

/// API routes, page routes and static assets at `/pkg`.
fn site(state: AppState, leptos_options: LeptosOptions) -> Router {
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    api_routes(state.clone())
        .merge(page_routes(&state, leptos_options))
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
}

/// The full application router, traced.
///
/// # Errors
///
/// Returns [`ConfigError::Leptos`] if the Leptos configuration cannot be
/// loaded (missing or malformed `[workspace.metadata.leptos]` section and no
/// `LEPTOS_*` environment overrides).
pub fn app(state: AppState) -> Result<Router, ConfigError> {
    let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
    Ok(site(state, conf.leptos_options).layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
