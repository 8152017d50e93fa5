//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! shell (plugins + route table) is built once at startup and only read
//! afterwards. The same shell is handed to SSR rendering as Leptos context, so
//! the JSON endpoints and the rendered pages always agree.

use tracker_ui::app::Shell;
use tracker_ui::routes::RouteTable;

#[derive(Clone)]
pub struct AppState {
    pub shell: Shell,
}

impl AppState {
    #[must_use]
    pub fn new(shell: Shell) -> Self {
        Self { shell }
    }

    #[must_use]
    pub fn routes(&self) -> &RouteTable {
        self.shell.routes()
    }
}
