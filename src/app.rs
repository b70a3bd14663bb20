//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Redirect, Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::components::route_guard::{AdminRoute, RequireAuth};
use crate::config::ClientConfig;
use crate::pages::{admin::AdminDashboardPage, dashboard::DashboardPage, home::HomePage, login::LoginPage};
use crate::state::auth::provide_session;

/// Root application component.
///
/// Provides config and session contexts and sets up client-side routing.
/// Unknown paths redirect home.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env().unwrap_or_else(|e| {
        leptos::logging::warn!("invalid client config, using defaults: {e}");
        ClientConfig::default()
    });
    provide_context(config.clone());
    provide_session(&config);

    view! {
        <Title text="Kalaa Setu"/>

        <Router>
            <Navbar/>
            <main class="container">
                <Routes fallback=|| view! { <Redirect path="/"/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| view! { <RequireAuth><DashboardPage/></RequireAuth> }
                    />
                    <ParentRoute path=StaticSegment("admin") view=AdminRoute>
                        <Route path=StaticSegment("") view=AdminDashboardPage/>
                    </ParentRoute>
                </Routes>
            </main>
        </Router>
    }
}
