//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! One [`SessionHandle`] is created when the app mounts. It owns the session
//! store and mirrors every change into a `RwSignal<Session>` context, which
//! route guards, the navbar, and pages read reactively.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

use leptos::prelude::*;
use session::{Resolution, Session, SessionStore};

use crate::config::ClientConfig;
use crate::net::api::HttpIdentityClient;
use crate::util::storage::BrowserTokenStore;

pub type AppSessionStore = SessionStore<BrowserTokenStore, HttpIdentityClient>;

/// Shared handle to the application's session store.
///
/// Every mutation updates the session before returning, so it is ordered
/// against other calls made in the same tick. Only the identity request is
/// spawned onto the local executor.
#[derive(Clone)]
pub struct SessionHandle {
    store: Arc<AppSessionStore>,
}

impl SessionHandle {
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        let store = SessionStore::new(
            BrowserTokenStore::new(config.token_storage_key.clone()),
            HttpIdentityClient::new(config),
        );
        Self { store: Arc::new(store) }
    }

    #[must_use]
    pub fn snapshot(&self) -> Session {
        self.store.snapshot()
    }

    /// Adopt a freshly issued bearer token.
    pub fn login(&self, token: String) {
        let ticket = self.store.begin_login(token);
        self.spawn_resolve(ticket);
    }

    pub fn logout(&self) {
        self.store.logout();
    }

    /// Re-fetch the current user after a profile or role change.
    pub fn refresh_user(&self) {
        let ticket = self.store.begin_refresh();
        self.spawn_resolve(ticket);
    }

    fn restore(&self) {
        self.refresh_user();
    }

    fn spawn_resolve(&self, ticket: Resolution) {
        let store = Arc::clone(&self.store);
        leptos::task::spawn_local(async move { store.resolve(ticket).await });
    }
}

/// Create the session, install it and its mirror signal as context, and start
/// resolving the persisted token.
pub fn provide_session(config: &ClientConfig) -> SessionHandle {
    let handle = SessionHandle::new(config);
    let state = RwSignal::new(handle.snapshot());

    let subscription = handle.store.subscribe(move |session| state.set(session.clone()));
    let cleanup = handle.clone();
    on_cleanup(move || {
        cleanup.store.unsubscribe(subscription);
    });

    provide_context(handle.clone());
    provide_context(state);
    handle.restore();
    handle
}

/// The session handle and its reactive snapshot from context.
pub fn use_session() -> (SessionHandle, RwSignal<Session>) {
    (expect_context::<SessionHandle>(), expect_context::<RwSignal<Session>>())
}
