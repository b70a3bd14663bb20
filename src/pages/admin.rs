//! Admin dashboard, the index of the guarded `/admin` section.

use leptos::prelude::*;

use crate::state::auth::use_session;
use crate::state::nav::account_label;

const SECTIONS: [(&str, &str); 4] = [
    ("Users", "Review and moderate customer accounts."),
    ("Artists", "Verify artist profiles and portfolios."),
    ("Articles", "Publish and edit editorial content."),
    ("Payouts", "Settle completed bookings with artists."),
];

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let (_, state) = use_session();

    view! {
        <div class="admin-page">
            <header class="admin-page__header">
                <h1>"Admin"</h1>
                <p>{move || state.with(account_label).map(|name| format!("Signed in as {name}"))}</p>
            </header>
            <ul class="admin-page__sections">
                {SECTIONS
                    .iter()
                    .map(|(title, blurb)| {
                        view! {
                            <li class="admin-page__section">
                                <h2>{*title}</h2>
                                <p>{*blurb}</p>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}
