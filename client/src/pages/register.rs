//! Account registration page.

use leptos::prelude::*;
use leptos_router::components::A;

use super::href;
use crate::routes::View;

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <section class="page page--register">
            <div class="login-card">
                <h1>"Create an account"</h1>
                <p class="login-card__subtitle">"Join to start logging activities."</p>
                <p>
                    "Already registered? "
                    <A href=href(View::Login)>"Log in"</A>
                </p>
            </div>
        </section>
    }
}
