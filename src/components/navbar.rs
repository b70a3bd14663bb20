//! Top navigation bar with session-aware links.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use session::HOME_PATH;

use crate::state::auth::use_session;
use crate::state::nav::{NavItem, account_label, nav_items};

/// Navbar: brand, menu entries from [`nav_items`], and a mobile toggle.
///
/// Logging out clears the session and returns to the home page.
#[component]
pub fn Navbar() -> impl IntoView {
    let (handle, state) = use_session();
    let navigate = use_navigate();
    let menu_open = RwSignal::new(false);

    let logout = move || {
        handle.logout();
        menu_open.set(false);
        navigate(HOME_PATH, NavigateOptions::default());
    };

    let entries = move || {
        state
            .with(nav_items)
            .into_iter()
            .map(|item: NavItem| match item.href() {
                Some(href) => view! {
                    <a href=href class="navbar__link" on:click=move |_| menu_open.set(false)>
                        {item.label()}
                    </a>
                }
                .into_any(),
                None => {
                    let logout = logout.clone();
                    view! {
                        <button class="navbar__link navbar__link--logout" on:click=move |_| logout()>
                            {item.label()}
                        </button>
                    }
                    .into_any()
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <nav class="navbar" class:open=move || menu_open.get()>
            <a href=HOME_PATH class="navbar__brand">"Kalaa Setu"</a>
            <button
                class="navbar__toggle"
                aria-label="Toggle menu"
                on:click=move |_| menu_open.update(|open| *open = !*open)
            >
                {move || if menu_open.get() { "✕" } else { "☰" }}
            </button>
            <div class="navbar__links">{entries}</div>
            <span class="navbar__account">{move || state.with(account_label)}</span>
        </nav>
    }
}
