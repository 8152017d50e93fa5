//! Login page.

use leptos::prelude::*;
use leptos_router::components::A;

use super::href;
use crate::routes::View;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <section class="page page--login">
            <div class="login-card">
                <h1>"Log in"</h1>
                <p class="login-card__subtitle">"Sign in to continue to your activities."</p>
                <p>
                    "No account yet? "
                    <A href=href(View::Register)>"Register"</A>
                </p>
            </div>
        </section>
    }
}
