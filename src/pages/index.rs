//! Public landing page.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::util::guard::{DASHBOARD_ROUTE, LOGIN_ROUTE};

#[component]
pub fn IndexPage() -> impl IntoView {
    let auth = expect_context::<ReadSignal<AuthState>>();
    let cta = move || {
        if auth.with(AuthState::is_authenticated) {
            (DASHBOARD_ROUTE, "Go to dashboard")
        } else {
            (LOGIN_ROUTE, "Get started")
        }
    };

    view! {
        <main class="index-page">
            <h1>"EduLearn"</h1>
            <p>"Classes, lectures and assignments in one place."</p>
            <a class="btn btn--primary" href=move || cta().0>
                {move || cta().1}
            </a>
        </main>
    }
}
