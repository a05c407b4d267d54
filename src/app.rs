//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::components::notice_banner::NoticeBanner;
use crate::components::route_guard::{PublicOnly, RequireAuth};
use crate::config::AppConfig;
use crate::net::api::HttpAuthApi;
use crate::pages::{
    class_detail::ClassDetailPage, dashboard::DashboardPage, index::IndexPage, login::LoginPage,
    not_found::NotFoundPage,
};
use crate::services::auth::AuthService;
use crate::services::credentials::CredentialStrategy;
use crate::state::auth::{AppAuthContext, AuthContext};
use crate::state::notice::Notice;
use crate::state::session_store::BrowserSessionStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

fn build_auth_context(config: &AppConfig) -> AppAuthContext {
    let service = AuthService::new(
        BrowserSessionStore::default(),
        HttpAuthApi::new(config.api_url.clone()),
        CredentialStrategy::from_demo_flag(config.demo_logins),
    );
    AuthContext::new(service, config.rehydrate_timeout_ms)
}

/// Root application component.
///
/// Provides the auth context, its read-only state signal and the notice slot,
/// then sets up client-side routing behind the route guards.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::from_build_env().unwrap_or_else(|e| {
        log::warn!("invalid build configuration, using defaults: {e}");
        AppConfig::default()
    });

    let auth = build_auth_context(&config);
    provide_context(auth.state());
    provide_context(RwSignal::new(None::<Notice>));
    provide_context(auth.clone());

    // Storage and the identity API exist only in the browser; SSR renders the
    // rehydrating placeholder.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        auth.rehydrate().await;
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = auth;

    view! {
        <Stylesheet id="leptos" href="/pkg/edulearn.css"/>
        <Title text="EduLearn"/>

        <Router>
            <NavBar/>
            <NoticeBanner/>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=IndexPage/>
                <Route
                    path=StaticSegment("login")
                    view=|| view! { <PublicOnly><LoginPage/></PublicOnly> }
                />
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <RequireAuth><DashboardPage/></RequireAuth> }
                />
                <Route
                    path=(StaticSegment("classes"), ParamSegment("id"))
                    view=|| view! { <RequireAuth><ClassDetailPage/></RequireAuth> }
                />
            </Routes>
        </Router>
    }
}
