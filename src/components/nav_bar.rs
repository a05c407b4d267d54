//! Top navigation bar for signed-in users.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::auth::{AppAuthContext, AuthState};
use crate::util::guard::DASHBOARD_ROUTE;

const NAV_ITEMS: &[(&str, &str)] = &[("Dashboard", DASHBOARD_ROUTE)];

/// Whether `pathname` is `path` itself or nested beneath it.
fn is_active(pathname: &str, path: &str) -> bool {
    pathname == path || pathname.strip_prefix(path).is_some_and(|rest| rest.starts_with('/'))
}

/// Up to two upper-cased initials from a display name.
fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

/// Navigation bar; renders nothing while signed out.
#[component]
pub fn NavBar() -> impl IntoView {
    let auth_state = expect_context::<ReadSignal<AuthState>>();
    let auth = expect_context::<AppAuthContext>();
    let location = use_location();

    let on_logout = move |_: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        {
            let auth = auth.clone();
            leptos::task::spawn_local(async move {
                auth.logout().await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &auth;
        }
    };

    move || {
        let user = auth_state.with(|s| s.user.clone())?;
        let pathname = location.pathname.get();
        let links = NAV_ITEMS
            .iter()
            .map(|(label, href)| {
                let class = if is_active(&pathname, href) { "nav-bar__link nav-bar__link--active" } else { "nav-bar__link" };
                view! { <a class=class href=*href>{*label}</a> }
            })
            .collect::<Vec<_>>();
        let on_logout = on_logout.clone();

        Some(view! {
            <nav class="nav-bar">
                <a class="nav-bar__brand" href=DASHBOARD_ROUTE>"EduLearn"</a>
                <div class="nav-bar__links">{links}</div>
                <div class="nav-bar__user">
                    <span class=format!("nav-bar__avatar nav-bar__avatar--{}", user.role.as_str())>
                        {initials(&user.name)}
                    </span>
                    <span class="nav-bar__name">{user.name.clone()}</span>
                    <button class="btn nav-bar__logout" on:click=on_logout>
                        "Log out"
                    </button>
                </div>
            </nav>
        })
    }
}
