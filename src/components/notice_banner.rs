//! Dismissible banner for the app-wide notice.

use leptos::prelude::*;

use crate::state::notice::Notice;

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let notice = expect_context::<RwSignal<Option<Notice>>>();

    move || {
        notice.get().map(|current| {
            view! {
                <div class=current.css_class() role="status">
                    <strong class="notice__title">{current.title.clone()}</strong>
                    <p class="notice__description">{current.description.clone()}</p>
                    <button class="notice__dismiss" on:click=move |_| notice.set(None)>
                        "Dismiss"
                    </button>
                </div>
            }
        })
    }
}
