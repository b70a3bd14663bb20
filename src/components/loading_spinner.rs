//! Neutral pending indicator.

use leptos::prelude::*;

/// Spinner shown while a guarded section waits for identity resolution.
#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="loading-spinner" role="status" aria-live="polite">
            <div class="loading-spinner__ring"></div>
        </div>
    }
}
