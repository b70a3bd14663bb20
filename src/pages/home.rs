//! Home page. Artists see their own profile summary; everyone else sees the
//! marketplace welcome.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use session::ArtistSummary;

use crate::state::auth::use_session;
use crate::state::nav::DASHBOARD_PATH;

/// One-line summary such as "Kathak · Pune".
fn artist_headline(artist: &ArtistSummary) -> String {
    [&artist.art_form, &artist.location]
        .into_iter()
        .flatten()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" · ")
}

#[component]
pub fn HomePage() -> impl IntoView {
    let (_, state) = use_session();
    let artist = move || state.with(|s| s.user.as_ref().and_then(|u| u.artist.clone()));

    view! {
        <section class="home-page">
            {move || match artist() {
                Some(artist) => {
                    let name = artist.artist_name.clone().unwrap_or_else(|| "Your artist profile".to_owned());
                    let headline = artist_headline(&artist);
                    view! {
                        <div class="home-page__artist">
                            <h1>{name}</h1>
                            <p class="home-page__headline">{headline}</p>
                            <p>{artist.short_bio.clone().unwrap_or_default()}</p>
                            <a href=DASHBOARD_PATH class="btn btn--primary">"Go to dashboard"</a>
                        </div>
                    }
                        .into_any()
                }
                None => view! {
                    <div class="home-page__welcome">
                        <h1>"Kalaa Setu"</h1>
                        <p>"Discover, book, and support performing artists."</p>
                    </div>
                }
                    .into_any(),
            }}
        </section>
    }
}
