//! Root application component, shell bootstrap, and the route outlet.
//!
//! DESIGN
//! ======
//! `leptos_router` owns history and link interception, but every location is
//! handed to a single [`RouteOutlet`], which asks the [`RouteTable`] what to
//! render. The table, not the router's declaration order, decides matches and
//! the catch-all redirect.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment, WildcardSegment,
    components::{Redirect, Route, Router, Routes},
    hooks::use_location,
};

use crate::pages;
use crate::plugins::{Capability, PluginError, Plugins};
use crate::routes::{RouteError, RouteTable, join_location};

#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error(transparent)]
    Plugin(#[from] PluginError),

    #[error(transparent)]
    Route(#[from] RouteError),
}

/// Installed plugins plus the route table, provided as context to the app.
#[derive(Clone, Debug)]
pub struct Shell {
    plugins: Arc<Plugins>,
    routes: Arc<RouteTable>,
}

impl Shell {
    /// Bootstrap with the standard plugins and route table.
    ///
    /// # Errors
    ///
    /// Propagates any plugin or route table validation failure.
    pub fn standard() -> Result<Self, ShellError> {
        bootstrap(Plugins::standard()?, RouteTable::standard()?)
    }

    #[must_use]
    pub fn plugins(&self) -> &Plugins {
        &self.plugins
    }

    #[must_use]
    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }
}

/// One-time shell initialization. Routing must be among the installed
/// capabilities.
///
/// # Errors
///
/// Returns [`ShellError::Plugin`] if no router plugin is installed.
pub fn bootstrap(plugins: Plugins, routes: RouteTable) -> Result<Shell, ShellError> {
    plugins.require(Capability::Router)?;
    log::debug!(
        "shell ready: {} stylesheets, {} routes, fallback {}",
        plugins.stylesheets().count(),
        routes.entries().len(),
        routes.fallback_target()
    );
    Ok(Shell { plugins: Arc::new(plugins), routes: Arc::new(routes) })
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component. Uses the [`Shell`] the host provided as
/// context, or bootstraps the standard one (hydration in the browser).
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    match use_context::<Shell>().map_or_else(Shell::standard, Ok) {
        Ok(shell) => view! { <ShellRoot shell/> }.into_any(),
        Err(err) => {
            log::error!("shell bootstrap failed: {err}");
            view! { <p class="shell-error">{err.to_string()}</p> }.into_any()
        }
    }
}

#[component]
fn ShellRoot(shell: Shell) -> impl IntoView {
    let stylesheets = shell
        .plugins()
        .stylesheets()
        .map(|href| view! { <Stylesheet href=href/> })
        .collect_view();
    provide_context(shell);

    view! {
        <Stylesheet id="leptos" href="/pkg/tracker.css"/>
        {stylesheets}
        <Title text="Activity Tracker"/>

        <Router>
            <main class="container">
                <Routes fallback=|| view! { <RouteOutlet/> }>
                    <Route path=StaticSegment("") view=RouteOutlet/>
                    <Route path=WildcardSegment("any") view=RouteOutlet/>
                </Routes>
            </main>
        </Router>
    }
}

/// Renders whatever the route table resolves the current location to.
#[component]
pub fn RouteOutlet() -> impl IntoView {
    let shell = expect_context::<Shell>();
    let location = use_location();

    move || {
        let target = join_location(&location.pathname.get(), &location.search.get(), &location.hash.get());
        let resolution = shell.routes().resolve(&target);
        if resolution.redirected {
            log::debug!("redirecting {} to {}", resolution.requested, resolution.path);
            view! { <Redirect path=resolution.path/> }.into_any()
        } else {
            pages::render(resolution.view)
        }
    }
}
