use super::*;

fn table() -> RouteTable {
    RouteTable::standard().unwrap()
}

// =============================================================
// Registered paths
// =============================================================

#[test]
fn registered_paths_render_their_views() {
    let table = table();
    let cases = [
        ("/", View::Home),
        ("/login", View::Login),
        ("/register", View::Register),
        ("/editemail", View::EditEmail),
        ("/profile", View::ViewUser),
        ("/profile/details", View::Details),
    ];
    for (path, view) in cases {
        assert_eq!(table.match_path(path), Match::Render(view), "path {path}");
        let resolution = table.resolve(path);
        assert_eq!(resolution.view, view, "path {path}");
        assert!(!resolution.redirected, "path {path} should not redirect");
        assert_eq!(resolution.path, path);
    }
}

#[test]
fn every_view_is_reachable() {
    let table = table();
    for view in View::ALL {
        assert!(table.path_for(view).is_some(), "{view} has no path");
    }
}

// =============================================================
// Catch-all
// =============================================================

#[test]
fn unknown_paths_redirect_to_login() {
    let table = table();
    for path in ["/nonexistent", "/foo/bar", "/profile/details/extra", "/logins"] {
        assert_eq!(table.match_path(path), Match::Redirect("/login"), "path {path}");
        let resolution = table.resolve(path);
        assert!(resolution.redirected, "path {path}");
        assert_eq!(resolution.path, "/login");
        assert_eq!(resolution.view, View::Login);
        assert_eq!(resolution.requested, path);
    }
}

#[test]
fn profile_is_not_a_prefix_match() {
    let table = table();
    assert_eq!(table.match_path("/profile/settings"), Match::Redirect("/login"));
}

#[test]
fn login_twice_renders_login_without_loop() {
    let table = table();
    let first = table.resolve("/login");
    let second = table.resolve(&first.path);
    assert_eq!(first.view, View::Login);
    assert_eq!(second.view, View::Login);
    assert!(!first.redirected);
    assert!(!second.redirected);
}

#[test]
fn redirect_target_resolves_to_render() {
    let table = table();
    let Match::Redirect(to) = table.match_path("/missing") else {
        panic!("expected redirect");
    };
    assert_eq!(table.match_path(to), Match::Render(View::Login));
}

#[test]
fn redirect_keeps_query_and_fragment() {
    let table = table();
    let resolution = table.resolve("/old?next=/profile");
    assert_eq!(resolution.path, "/login?next=/profile");
    assert_eq!(resolution.view, View::Login);

    assert_eq!(table.resolve("/x#top").path, "/login#top");
    assert_eq!(table.resolve("/x?a=1#top").path, "/login?a=1#top");
}

#[test]
fn redirect_target_with_own_query_is_kept_as_declared() {
    let table = RouteTable::builder()
        .route("/login", View::Login)
        .redirect("*", "/login?expired=1")
        .build()
        .unwrap();
    assert_eq!(table.resolve("/gone?next=/me").path, "/login?expired=1");
}

#[test]
fn join_location_accepts_pieces_with_or_without_markers() {
    assert_eq!(join_location("/x", "", ""), "/x");
    assert_eq!(join_location("/x", "?a=1", "#top"), "/x?a=1#top");
    assert_eq!(join_location("/x", "a=1", "top"), "/x?a=1#top");
    assert_eq!(join_location("/x", "?", "#"), "/x");
    assert_eq!(join_location("/x", "", "#top"), "/x#top");
}

// =============================================================
// Normalization
// =============================================================

#[test]
fn trailing_slash_is_ignored() {
    let table = table();
    assert_eq!(table.match_path("/login/"), Match::Render(View::Login));
    assert_eq!(table.match_path("/profile/details/"), Match::Render(View::Details));
}

#[test]
fn query_and_fragment_are_ignored() {
    let table = table();
    assert_eq!(table.match_path("/register?ref=mail"), Match::Render(View::Register));
    assert_eq!(table.match_path("/profile#top"), Match::Render(View::ViewUser));
    assert_eq!(table.match_path("/?next=/profile"), Match::Render(View::Home));
}

#[test]
fn matching_is_case_insensitive() {
    let table = table();
    assert_eq!(table.match_path("/EditEmail"), Match::Render(View::EditEmail));
    assert_eq!(table.match_path("/LOGIN"), Match::Render(View::Login));
}

#[test]
fn empty_path_is_root() {
    assert_eq!(table().match_path(""), Match::Render(View::Home));
}

#[test]
fn double_trailing_slash_falls_through() {
    assert_eq!(table().match_path("/login//"), Match::Redirect("/login"));
}

// =============================================================
// Structure
// =============================================================

#[test]
fn exactly_one_entry_redirects_and_it_is_the_wildcard() {
    let table = table();
    let redirects: Vec<_> = table.entries().iter().filter(|e| e.view().is_none()).collect();
    assert_eq!(redirects.len(), 1);
    assert!(redirects[0].is_wildcard());
    assert_eq!(redirects[0].redirect(), Some("/login"));
}

#[test]
fn wildcard_is_last_entry() {
    let table = table();
    assert_eq!(table.entries().len(), 7);
    assert!(table.fallback().is_wildcard());
    assert_eq!(table.entries().last(), Some(table.fallback()));
    assert_eq!(table.fallback_target(), "/login");
}

#[test]
fn entries_keep_declaration_order() {
    let table = table();
    let paths: Vec<_> = table.entries().iter().map(RouteEntry::path).collect::<Vec<_>>();
    assert_eq!(
        paths,
        ["/", "/login", "/register", "/editemail", "/profile", "/profile/details", "*"]
    );
}

#[test]
fn route_declared_after_wildcard_still_matches() {
    let table = RouteTable::builder()
        .route("/", View::Home)
        .route("/login", View::Login)
        .redirect(WILDCARD, "/login")
        .route("/register", View::Register)
        .build()
        .unwrap();
    assert_eq!(table.match_path("/register"), Match::Render(View::Register));
    assert!(table.fallback().is_wildcard());
    assert_eq!(table.entries().last().map(RouteEntry::path), Some(WILDCARD));
}

#[test]
fn path_for_returns_first_declared_path() {
    let table = RouteTable::builder()
        .route("/profile", View::ViewUser)
        .route("/me", View::ViewUser)
        .route("/login", View::Login)
        .redirect(WILDCARD, "/login")
        .build()
        .unwrap();
    assert_eq!(table.path_for(View::ViewUser), Some("/profile"));
    assert_eq!(table.path_for(View::Details), None);
}

#[test]
fn specific_redirect_entries_follow_one_hop() {
    let table = RouteTable::builder()
        .route("/login", View::Login)
        .route("/profile", View::ViewUser)
        .redirect("/me", "/profile")
        .redirect(WILDCARD, "/login")
        .build()
        .unwrap();
    let resolution = table.resolve("/me");
    assert!(resolution.redirected);
    assert_eq!(resolution.path, "/profile");
    assert_eq!(resolution.view, View::ViewUser);
}

// =============================================================
// Validation
// =============================================================

#[test]
fn build_requires_wildcard() {
    let err = RouteTable::builder().route("/login", View::Login).build().unwrap_err();
    assert_eq!(err, RouteError::MissingWildcard);
}

#[test]
fn build_rejects_second_wildcard() {
    let err = RouteTable::builder()
        .route("/login", View::Login)
        .redirect(WILDCARD, "/login")
        .redirect(WILDCARD, "/login")
        .build()
        .unwrap_err();
    assert_eq!(err, RouteError::DuplicateWildcard);
}

#[test]
fn build_rejects_rendering_wildcard() {
    let err = RouteTable::builder()
        .route("/login", View::Login)
        .route(WILDCARD, View::Home)
        .build()
        .unwrap_err();
    assert_eq!(err, RouteError::WildcardRenders(View::Home));
}

#[test]
fn build_rejects_relative_path() {
    let err = RouteTable::builder()
        .route("login", View::Login)
        .redirect(WILDCARD, "/login")
        .build()
        .unwrap_err();
    assert_eq!(err, RouteError::InvalidPath("login".to_owned()));
}

#[test]
fn build_rejects_duplicate_after_normalization() {
    let err = RouteTable::builder()
        .route("/login", View::Login)
        .route("/Login/", View::Register)
        .redirect(WILDCARD, "/login")
        .build()
        .unwrap_err();
    assert_eq!(err, RouteError::DuplicatePath("/Login/".to_owned()));
}

#[test]
fn build_rejects_redirect_to_unknown_path() {
    let err = RouteTable::builder()
        .route("/", View::Home)
        .redirect(WILDCARD, "/login")
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        RouteError::UnresolvedRedirect { from: "*".to_owned(), to: "/login".to_owned() }
    );
}

#[test]
fn build_rejects_redirect_chain() {
    let err = RouteTable::builder()
        .route("/login", View::Login)
        .redirect("/signin", "/login")
        .redirect(WILDCARD, "/signin")
        .build()
        .unwrap_err();
    assert!(matches!(err, RouteError::UnresolvedRedirect { ref to, .. } if to == "/signin"));
}

#[test]
fn route_error_messages_are_readable() {
    assert_eq!(RouteError::MissingWildcard.to_string(), "route table has no '*' entry");
    assert_eq!(
        RouteError::WildcardRenders(View::Details).to_string(),
        "'*' entry must redirect, but renders Details"
    );
}

// =============================================================
// View
// =============================================================

#[test]
fn view_display_matches_name() {
    for view in View::ALL {
        assert_eq!(view.to_string(), view.name());
    }
}

#[test]
fn view_serializes_as_name() {
    assert_eq!(serde_json::to_value(View::EditEmail).unwrap(), serde_json::json!("EditEmail"));
}
