//! Profile details (name, bio, fitness level) settings page.

use leptos::prelude::*;
use leptos_router::components::A;

use super::href;
use crate::routes::View;

#[component]
pub fn DetailsPage() -> impl IntoView {
    view! {
        <section class="page page--details">
            <h1>"Profile details"</h1>
            <p>"Name, nickname, bio, date of birth, gender and fitness level."</p>
            <A href=href(View::ViewUser)>"Back to profile"</A>
        </section>
    }
}
