//! Dashboard page with a role-specific greeting.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::net::types::UserRole;
use crate::services::catalog;
use crate::services::enrollment::BrowserEnrollmentLedger;
use crate::state::auth::AuthState;

fn dashboard_subtitle(role: UserRole) -> &'static str {
    match role {
        UserRole::Student => "Pick up where you left off in your enrolled classes.",
        UserRole::Teacher => "Manage your classes, lectures and assignments.",
    }
}

fn class_href(class_id: &str) -> String {
    format!("/classes/{class_id}")
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<ReadSignal<AuthState>>();
    let enrolled = RwSignal::new(Vec::<String>::new());

    // Storage is browser-only; reading it in an effect keeps SSR markup stable.
    Effect::new(move || enrolled.set(BrowserEnrollmentLedger::default().enrolled()));

    move || {
        let user = auth.with(|s| s.user.clone())?;
        let is_student = user.role == UserRole::Student;

        Some(view! {
            <main class="dashboard-page">
                <header class="dashboard-page__header">
                    <h1>{format!("Welcome back, {}!", user.name)}</h1>
                    <p>{dashboard_subtitle(user.role)}</p>
                </header>
                <Show when=move || is_student>
                    <section class="dashboard-page__classes">
                        <h2>"Enrolled classes"</h2>
                        <Show
                            when=move || !enrolled.with(Vec::is_empty)
                            fallback=|| view! { <p>"You have not enrolled in any classes yet."</p> }
                        >
                            <ul>
                                {move || {
                                    enrolled
                                        .get()
                                        .into_iter()
                                        .map(|id| {
                                            let href = class_href(&id);
                                            view! { <li><a href=href>{catalog::title(&id)}</a></li> }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </ul>
                        </Show>
                    </section>
                </Show>
                <section class="dashboard-page__catalog">
                    <h2>"Browse classes"</h2>
                    <ul>
                        {move || {
                            enrolled
                                .with(|ids| catalog::available(ids))
                                .into_iter()
                                .map(|class| {
                                    let href = class_href(class.id);
                                    view! {
                                        <li>
                                            <a href=href>{class.title}</a>
                                            <span class="dashboard-page__teacher">{class.teacher_name}</span>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </section>
            </main>
        })
    }
}
