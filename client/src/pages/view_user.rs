//! Profile overview for the current user.

use leptos::prelude::*;
use leptos_router::components::A;

use super::href;
use crate::routes::View;

#[component]
pub fn ViewUserPage() -> impl IntoView {
    view! {
        <section class="page page--profile">
            <h1>"Profile"</h1>
            <ul class="page__links">
                <li><A href=href(View::Details)>"Edit details"</A></li>
                <li><A href=href(View::EditEmail)>"Manage email addresses"</A></li>
                <li><A href=href(View::Home)>"Home"</A></li>
            </ul>
        </section>
    }
}
