//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page is an opaque renderable unit; the route table only names it by
//! [`View`]. [`render`] is the one place that maps a name to a component.

pub mod details;
pub mod edit_email;
pub mod home;
pub mod login;
pub mod register;
pub mod view_user;

use leptos::prelude::*;

use crate::app::Shell;
use crate::routes::View;

/// Build the component for `view`.
pub fn render(view: View) -> AnyView {
    match view {
        View::Home => view! { <home::HomePage/> }.into_any(),
        View::Login => view! { <login::LoginPage/> }.into_any(),
        View::Register => view! { <register::RegisterPage/> }.into_any(),
        View::EditEmail => view! { <edit_email::EditEmailPage/> }.into_any(),
        View::ViewUser => view! { <view_user::ViewUserPage/> }.into_any(),
        View::Details => view! { <details::DetailsPage/> }.into_any(),
    }
}

/// Link target for `view`, taken from the route table in context.
fn href(view: View) -> String {
    use_context::<Shell>()
        .and_then(|shell| shell.routes().path_for(view).map(str::to_owned))
        .unwrap_or_else(|| "/".to_owned())
}
