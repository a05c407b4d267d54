//! Route wrappers that gate content on auth state.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;

use crate::state::auth::AuthState;
use crate::util::guard::{GuardDecision, RouteAccess, decide};

/// Full-screen placeholder shown while auth state is resolving.
#[component]
pub fn LoadingPlaceholder() -> impl IntoView {
    view! { <div class="loading-screen">"Loading..."</div> }
}

/// Render `children` only for signed-in users; others are sent to `/login`.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    guarded_view(RouteAccess::RequireAuth, children)
}

/// Render `children` only for signed-out users; others are sent to `/dashboard`.
#[component]
pub fn PublicOnly(children: ChildrenFn) -> impl IntoView {
    guarded_view(RouteAccess::PublicOnly, children)
}

fn guarded_view(access: RouteAccess, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<ReadSignal<AuthState>>();
    // Memoized so children are not rebuilt on auth changes that keep the decision.
    let decision = Memo::new(move |_| auth.with(|state| decide(access, state)));

    move || match decision.get() {
        GuardDecision::Placeholder => view! { <LoadingPlaceholder/> }.into_any(),
        GuardDecision::Redirect(path) => {
            let options = NavigateOptions { replace: true, ..NavigateOptions::default() };
            view! { <Redirect path=path options=options/> }.into_any()
        }
        GuardDecision::Render => children().into_any(),
    }
}
