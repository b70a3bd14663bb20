//! Route guard components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both guards read the session signal, render a spinner while identity is
//! resolving, and redirect (replacing the history entry) once the guard
//! denies. These are UX guards only; the API still authorizes every request.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_navigate;
use session::{Navigator, RouteGuard, Session, Verdict};

use crate::components::loading_spinner::LoadingSpinner;
use crate::state::auth::use_session;

/// [`Navigator`] backed by the router's `use_navigate`.
struct RouterNavigator<F>(F);

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn redirect(&self, path: &str) {
        (self.0)(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
    }
}

/// What a guard component shows for a verdict.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum GuardView {
    Spinner,
    Content,
    Nothing,
}

fn guard_view(verdict: Verdict) -> GuardView {
    match verdict {
        Verdict::Pending => GuardView::Spinner,
        Verdict::Allowed => GuardView::Content,
        Verdict::Denied => GuardView::Nothing,
    }
}

/// One run of the redirect effect. `previous` is what the prior run returned,
/// so a route that stays denied redirects once.
fn redirect_step(
    guard: RouteGuard,
    previous: Option<Verdict>,
    session: &Session,
    navigator: &impl Navigator,
) -> Verdict {
    guard.enforce(previous, session, navigator)
}

/// Track `guard` against the session: returns the reactive view and installs
/// the redirect effect.
fn install_guard(guard: RouteGuard, state: RwSignal<Session>) -> Memo<GuardView> {
    let navigator = RouterNavigator(use_navigate());
    Effect::new(move |previous: Option<Verdict>| state.with(|session| redirect_step(guard, previous, session, &navigator)));
    Memo::new(move |_| state.with(|session| guard_view(guard.evaluate(session))))
}

/// Parent route for the admin section; renders nested routes for admins only.
#[component]
pub fn AdminRoute() -> impl IntoView {
    let (_, state) = use_session();
    let shown = install_guard(RouteGuard::admin(), state);

    move || match shown.get() {
        GuardView::Spinner => view! { <LoadingSpinner/> }.into_any(),
        GuardView::Content => view! { <Outlet/> }.into_any(),
        GuardView::Nothing => ().into_any(),
    }
}

/// Renders `children` for any signed-in user; sends visitors to `/login`.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (_, state) = use_session();
    let shown = install_guard(RouteGuard::authenticated(), state);

    move || match shown.get() {
        GuardView::Spinner => view! { <LoadingSpinner/> }.into_any(),
        GuardView::Content => children(),
        GuardView::Nothing => ().into_any(),
    }
}
