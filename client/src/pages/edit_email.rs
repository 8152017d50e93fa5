//! Email address management page.

use leptos::prelude::*;
use leptos_router::components::A;

use super::href;
use crate::routes::View;

#[component]
pub fn EditEmailPage() -> impl IntoView {
    view! {
        <section class="page page--edit-email">
            <h1>"Email addresses"</h1>
            <p>"Your primary address is used to log in. Additional addresses can be added here."</p>
            <A href=href(View::ViewUser)>"Back to profile"</A>
        </section>
    }
}
