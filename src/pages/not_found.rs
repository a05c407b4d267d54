//! Fallback for unknown routes.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <main class="not-found-page">
            <h1>"404"</h1>
            <p>"Page not found."</p>
            <a href="/">"Back home"</a>
        </main>
    }
}
