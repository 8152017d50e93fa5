//! Landing page for signed-in users.

use leptos::prelude::*;
use leptos_router::components::A;

use super::href;
use crate::routes::View;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="page page--home">
            <h1>"Activity Tracker"</h1>
            <p class="lead">"Track your activities and keep your profile up to date."</p>
            <nav class="page__links">
                <A href=href(View::ViewUser)>
                    <i class="bi bi-person"></i>
                    " My profile"
                </A>
                <A href=href(View::EditEmail)>
                    <i class="bi bi-envelope"></i>
                    " Email addresses"
                </A>
            </nav>
        </section>
    }
}
