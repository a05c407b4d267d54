//! Class detail page with local enrollment.

#[cfg(test)]
#[path = "class_detail_test.rs"]
mod class_detail_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::types::UserRole;
use crate::services::catalog;
use crate::services::enrollment::BrowserEnrollmentLedger;
use crate::state::auth::AuthState;
use crate::state::notice::Notice;

fn enroll_label(enrolled: bool) -> &'static str {
    if enrolled { "Enrolled" } else { "Enroll in this class" }
}

#[component]
pub fn ClassDetailPage() -> impl IntoView {
    let auth = expect_context::<ReadSignal<AuthState>>();
    let notice = expect_context::<RwSignal<Option<Notice>>>();
    let params = use_params_map();
    let class_id = move || params.with(|p| p.get("id")).unwrap_or_default();
    let enrolled = RwSignal::new(false);

    Effect::new(move || {
        let id = class_id();
        enrolled.set(BrowserEnrollmentLedger::default().is_enrolled(&id));
    });

    let on_enroll = move |_: leptos::ev::MouseEvent| {
        let id = class_id();
        if BrowserEnrollmentLedger::default().enroll(&id) {
            notice.set(Some(Notice::success(
                "Enrolled successfully",
                format!("You are now enrolled in {}", catalog::title(&id)),
            )));
        }
        enrolled.set(true);
    };

    let is_student = move || auth.with(|s| s.user.as_ref().is_some_and(|u| u.role == UserRole::Student));

    view! {
        <main class="class-page">
            <h1>{move || catalog::title(&class_id())}</h1>
            <Show
                when=is_student
                fallback=|| view! { <p class="class-page__note">"Teachers manage classes from the dashboard."</p> }
            >
                <button class="btn btn--primary" disabled=move || enrolled.get() on:click=on_enroll>
                    {move || enroll_label(enrolled.get())}
                </button>
            </Show>
        </main>
    }
}
