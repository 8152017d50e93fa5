//! Route table mapping browser paths to views.
//!
//! DESIGN
//! ======
//! Specific routes are exact-match entries keyed by their normalized path.
//! The catch-all `*` entry is held apart as the table's default, so it is
//! evaluated last no matter where it was declared. Redirect targets are
//! checked at build time to land on a rendered view, which bounds resolution
//! to a single hop.
//!
//! MATCHING
//! ========
//! Query string and fragment are ignored, one trailing slash is ignored, and
//! comparison is ASCII case-insensitive. There is no prefix matching:
//! `/profile/x` does not match `/profile`.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

/// Path pattern of the catch-all entry.
pub const WILDCARD: &str = "*";

// =============================================================================
// VIEWS
// =============================================================================

/// Renderable views known to the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum View {
    Home,
    Login,
    Register,
    EditEmail,
    ViewUser,
    Details,
}

impl View {
    pub const ALL: [View; 6] = [
        View::Home,
        View::Login,
        View::Register,
        View::EditEmail,
        View::ViewUser,
        View::Details,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Login => "Login",
            View::Register => "Register",
            View::EditEmail => "EditEmail",
            View::ViewUser => "ViewUser",
            View::Details => "Details",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// ENTRIES
// =============================================================================

/// What an entry does when its path matches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target {
    Render(View),
    Redirect(String),
}

/// One declared route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    path: String,
    target: Target,
}

impl RouteEntry {
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The rendered view, or `None` for redirect entries.
    #[must_use]
    pub fn view(&self) -> Option<View> {
        match self.target {
            Target::Render(view) => Some(view),
            Target::Redirect(_) => None,
        }
    }

    /// The redirect target, or `None` for render entries.
    #[must_use]
    pub fn redirect(&self) -> Option<&str> {
        match &self.target {
            Target::Render(_) => None,
            Target::Redirect(to) => Some(to),
        }
    }

    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        self.path == WILDCARD
    }
}

/// Outcome of matching a single path, before any redirect is followed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Match<'a> {
    Render(View),
    Redirect(&'a str),
}

/// Outcome of a full navigation, after the redirect (if any) is followed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    /// Path the browser asked for.
    pub requested: String,
    /// Path that ends up rendered; differs from `requested` after a redirect,
    /// which keeps the requested query string and fragment.
    pub path: String,
    pub view: View,
    pub redirected: bool,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("route path must start with '/': {0:?}")]
    InvalidPath(String),

    #[error("duplicate route path: {0}")]
    DuplicatePath(String),

    #[error("route table has no '*' entry")]
    MissingWildcard,

    #[error("route table has more than one '*' entry")]
    DuplicateWildcard,

    #[error("'*' entry must redirect, but renders {0}")]
    WildcardRenders(View),

    #[error("redirect from {from} to {to} does not reach a rendered view")]
    UnresolvedRedirect { from: String, to: String },
}

// =============================================================================
// BUILDER
// =============================================================================

/// Collects entries in declaration order; [`RouteTableBuilder::build`]
/// validates them into a [`RouteTable`].
#[derive(Debug, Default)]
pub struct RouteTableBuilder {
    entries: Vec<RouteEntry>,
}

impl RouteTableBuilder {
    #[must_use]
    pub fn route(mut self, path: impl Into<String>, view: View) -> Self {
        self.entries.push(RouteEntry { path: path.into(), target: Target::Render(view) });
        self
    }

    #[must_use]
    pub fn redirect(mut self, path: impl Into<String>, to: impl Into<String>) -> Self {
        self.entries.push(RouteEntry { path: path.into(), target: Target::Redirect(to.into()) });
        self
    }

    /// Validate the declared entries and freeze them into a table.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError`] when a path is malformed or duplicated, when the
    /// table does not have exactly one redirecting `*` entry, or when a
    /// redirect target is not a rendered route.
    pub fn build(self) -> Result<RouteTable, RouteError> {
        let mut routes = Vec::with_capacity(self.entries.len());
        let mut index = HashMap::new();
        let mut wildcard = None;

        for entry in self.entries {
            if entry.is_wildcard() {
                if let Target::Render(view) = entry.target {
                    return Err(RouteError::WildcardRenders(view));
                }
                if wildcard.is_some() {
                    return Err(RouteError::DuplicateWildcard);
                }
                wildcard = Some(entry);
                continue;
            }

            if !entry.path.starts_with('/') {
                return Err(RouteError::InvalidPath(entry.path));
            }
            let key = normalize(&entry.path);
            if index.contains_key(&key) {
                return Err(RouteError::DuplicatePath(entry.path));
            }
            index.insert(key, routes.len());
            routes.push(entry);
        }

        let wildcard = wildcard.ok_or(RouteError::MissingWildcard)?;
        routes.push(wildcard);

        // Every redirect, the catch-all included, must land on a render entry.
        let mut landings = Vec::with_capacity(routes.len());
        for entry in &routes {
            let landing = match &entry.target {
                Target::Render(view) => *view,
                Target::Redirect(to) => index
                    .get(&normalize(to))
                    .and_then(|&i| routes[i].view())
                    .ok_or_else(|| RouteError::UnresolvedRedirect { from: entry.path.clone(), to: to.clone() })?,
            };
            landings.push(landing);
        }

        Ok(RouteTable { routes, landings, index })
    }
}

// =============================================================================
// TABLE
// =============================================================================

/// Immutable path-to-view table. The catch-all entry is always last.
#[derive(Clone, Debug)]
pub struct RouteTable {
    routes: Vec<RouteEntry>,
    /// View each entry ends up rendering, parallel to `routes`.
    landings: Vec<View>,
    /// Normalized path -> position in `routes`, catch-all excluded.
    index: HashMap<String, usize>,
}

impl RouteTable {
    #[must_use]
    pub fn builder() -> RouteTableBuilder {
        RouteTableBuilder::default()
    }

    /// The application's route table.
    ///
    /// # Errors
    ///
    /// Never fails in practice; the result mirrors [`RouteTableBuilder::build`].
    pub fn standard() -> Result<Self, RouteError> {
        Self::builder()
            .route("/", View::Home)
            .route("/login", View::Login)
            .route("/register", View::Register)
            .route("/editemail", View::EditEmail)
            .route("/profile", View::ViewUser)
            .route("/profile/details", View::Details)
            .redirect(WILDCARD, "/login")
            .build()
    }

    /// Match `path` against the table without following redirects.
    #[must_use]
    pub fn match_path(&self, path: &str) -> Match<'_> {
        let entry = &self.routes[self.position(path)];
        match &entry.target {
            Target::Render(view) => Match::Render(*view),
            Target::Redirect(to) => Match::Redirect(to),
        }
    }

    /// Match `path` and follow the redirect, if any, to the rendered view.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Resolution {
        let position = self.position(path);
        let view = self.landings[position];
        match self.routes[position].redirect() {
            Some(to) => Resolution { requested: path.to_owned(), path: redirect_path(to, path), view, redirected: true },
            None => Resolution { requested: path.to_owned(), path: path.to_owned(), view, redirected: false },
        }
    }

    /// Entries in declaration order, followed by the catch-all.
    #[must_use]
    pub fn entries(&self) -> &[RouteEntry] {
        &self.routes
    }

    /// Redirect target of the catch-all entry.
    #[must_use]
    pub fn fallback_target(&self) -> &str {
        match &self.fallback().target {
            Target::Redirect(to) => to,
            Target::Render(_) => unreachable!("build() rejects a rendering '*' entry"),
        }
    }

    #[must_use]
    pub fn fallback(&self) -> &RouteEntry {
        // build() always pushes the catch-all last.
        &self.routes[self.routes.len() - 1]
    }

    /// First declared path that renders `view`.
    #[must_use]
    pub fn path_for(&self, view: View) -> Option<&str> {
        self.routes
            .iter()
            .find(|entry| entry.view() == Some(view))
            .map(RouteEntry::path)
    }

    fn position(&self, path: &str) -> usize {
        self.index
            .get(&normalize(path))
            .copied()
            .unwrap_or(self.routes.len() - 1)
    }
}

/// Join the pieces of a browser location back into one path. `search` and
/// `hash` are accepted with or without their leading `?` / `#`.
#[must_use]
pub fn join_location(pathname: &str, search: &str, hash: &str) -> String {
    let mut out = pathname.to_owned();
    let search = search.trim_start_matches('?');
    if !search.is_empty() {
        out.push('?');
        out.push_str(search);
    }
    let hash = hash.trim_start_matches('#');
    if !hash.is_empty() {
        out.push('#');
        out.push_str(hash);
    }
    out
}

/// Redirect target for `requested`. The query string and fragment carry over
/// unless the target declares its own.
fn redirect_path(to: &str, requested: &str) -> String {
    if to.contains(['?', '#']) {
        return to.to_owned();
    }
    let suffix = requested.find(['?', '#']).map_or("", |i| &requested[i..]);
    format!("{to}{suffix}")
}

/// Reduce a browser path to its lookup key.
fn normalize(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let path = path.strip_suffix('/').unwrap_or(path);
    if path.is_empty() {
        "/".to_owned()
    } else {
        path.to_ascii_lowercase()
    }
}
