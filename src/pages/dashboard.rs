//! Dashboard page for signed-in users.
//!
//! Rendered inside `RequireAuth`, so a resolved user is present whenever this
//! view is built.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use session::{Role, UserProfile};

use crate::state::auth::use_session;

fn role_label(user: &UserProfile) -> &'static str {
    match user.role {
        Role::Admin => "Administrator",
        Role::Artist => "Artist",
        Role::User if user.artist.is_some() => "Artist",
        Role::User => "Customer",
        Role::Unknown => "Member",
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let (session, state) = use_session();
    let user = move || state.with(|s| s.user.clone());

    let on_refresh = move |_| session.refresh_user();

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Dashboard"</h1>
                <button class="btn" on:click=on_refresh>"Refresh profile"</button>
            </header>
            {move || {
                user()
                    .map(|u| {
                        let artist = u.artist.as_ref().and_then(|a| a.artist_name.clone());
                        view! {
                            <dl class="dashboard-page__profile">
                                <dt>"Name"</dt>
                                <dd>{u.display_name()}</dd>
                                <dt>"Account"</dt>
                                <dd>{role_label(&u)}</dd>
                                <dt>"Email"</dt>
                                <dd>{u.email.clone().unwrap_or_else(|| "Not provided".to_owned())}</dd>
                                <dt>"Mobile"</dt>
                                <dd>{u.mobile_number.clone().unwrap_or_default()}</dd>
                                {artist
                                    .map(|name| {
                                        view! {
                                            <dt>"Stage name"</dt>
                                            <dd>{name}</dd>
                                        }
                                    })}
                            </dl>
                        }
                    })
            }}
        </div>
    }
}
