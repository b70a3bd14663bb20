//! Session store: the single source of truth for the current user.
//!
//! ARCHITECTURE
//! ============
//! The store owns a [`Session`] snapshot behind a mutex and two seams: a
//! [`TokenStore`] holding the persisted bearer token and an
//! [`IdentityClient`] that exchanges it for a [`UserProfile`]. Every token
//! change (login, logout) and every explicit refresh starts a new identity
//! resolution.
//!
//! ORDERING
//! ========
//! Each mutation bumps a generation counter. A resolution remembers the
//! generation it started under and applies its result only if that
//! generation is still current, so the most recently started resolution
//! always decides the final state. Superseded resolutions are ignored, not
//! aborted.
//!
//! The mutex is never held across an `.await`, and listeners run after it is
//! released.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::types::{IdentityError, LoadingState, Session, UserProfile};

// =============================================================================
// SEAMS
// =============================================================================

/// Durable key-value slot holding the bearer token.
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// Remote identity endpoint. Enables mocking in tests.
#[async_trait::async_trait(?Send)]
pub trait IdentityClient {
    /// Exchange a bearer token for the profile of its owner.
    ///
    /// # Errors
    ///
    /// Returns an [`IdentityError`] if the request fails, the token is
    /// rejected, or the response is malformed.
    async fn fetch_identity(&self, token: &str) -> Result<UserProfile, IdentityError>;
}

/// In-process token slot. Clones share the same slot, which lets a test play
/// the part of a second tab writing the same key.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self { slot: Arc::new(Mutex::new(Some(token.to_owned()))) }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn save(&self, token: &str) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

// =============================================================================
// STORE
// =============================================================================

/// Handle returned by [`SessionStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// A started identity resolution, returned by the `begin_*` methods.
///
/// Pass it to [`SessionStore::resolve`] to perform the request. The state
/// change that produced it has already been applied.
#[must_use = "the identity is only resolved once the ticket is passed to `resolve`"]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolution(u64);

type Listener = Arc<dyn Fn(&Session) + Send + Sync>;

struct Inner {
    session: Session,
    generation: u64,
    next_subscription: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
}

/// Process-wide holder of the bearer token and the identity resolved from it.
pub struct SessionStore<S, C> {
    storage: S,
    client: C,
    inner: Mutex<Inner>,
}

impl<S: TokenStore, C: IdentityClient> SessionStore<S, C> {
    /// Create the store with the token found in `storage`.
    ///
    /// The session starts `Resolving`; call [`restore`](Self::restore) to
    /// resolve the seeded token.
    pub fn new(storage: S, client: C) -> Self {
        let token = storage.load();
        Self {
            storage,
            client,
            inner: Mutex::new(Inner {
                session: Session::seeded(token),
                generation: 0,
                next_subscription: 0,
                listeners: Vec::new(),
            }),
        }
    }

    /// Current session snapshot.
    pub fn snapshot(&self) -> Session {
        self.lock().session.clone()
    }

    /// Register `listener` to receive every session change.
    pub fn subscribe(&self, listener: impl Fn(&Session) + Send + Sync + 'static) -> SubscriptionId {
        let listener: Listener = Arc::new(listener);
        let mut inner = self.lock();
        let id = SubscriptionId(inner.next_subscription);
        inner.next_subscription += 1;
        inner.listeners.push((id, listener));
        id
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.lock();
        let before = inner.listeners.len();
        inner.listeners.retain(|(existing, _)| *existing != id);
        inner.listeners.len() != before
    }

    /// Resolve the token seeded from storage at construction.
    pub fn restore(&self) -> impl Future<Output = ()> + '_ {
        self.refresh_user()
    }

    /// Persist `token`, make it active, and start resolving its identity.
    ///
    /// The state change happens before this returns; the returned future
    /// performs the identity request.
    pub fn login(&self, token: impl Into<String>) -> impl Future<Output = ()> + '_ {
        let ticket = self.begin_login(token);
        self.resolve(ticket)
    }

    /// The synchronous half of [`login`](Self::login): persist `token`, make
    /// it active, and mark the session `Resolving`.
    ///
    /// Callers that spawn the resolution onto an executor use this so the new
    /// token is ordered against other operations at call time.
    pub fn begin_login(&self, token: impl Into<String>) -> Resolution {
        let token = token.into();
        self.storage.save(&token);
        let generation = self.mutate(|session| {
            session.token = Some(token);
            session.user = None;
            session.loading = LoadingState::Resolving;
        });
        tracing::debug!(generation, "login: resolving identity");
        Resolution(generation)
    }

    /// Drop the persisted token and the resolved user.
    ///
    /// Any resolution still in flight is superseded.
    pub fn logout(&self) {
        self.storage.clear();
        let generation = self.mutate(clear_session);
        tracing::debug!(generation, "logout");
    }

    /// Re-resolve the identity for the current token, e.g. after the user
    /// changed their own role or profile elsewhere.
    pub fn refresh_user(&self) -> impl Future<Output = ()> + '_ {
        let ticket = self.begin_refresh();
        self.resolve(ticket)
    }

    /// The synchronous half of [`refresh_user`](Self::refresh_user): mark the
    /// session `Resolving` and supersede any resolution in flight.
    pub fn begin_refresh(&self) -> Resolution {
        let generation = self.mutate(|session| session.loading = LoadingState::Resolving);
        tracing::debug!(generation, "refreshing identity");
        Resolution(generation)
    }

    /// Fetch the identity for the persisted token and apply it, unless a
    /// later operation has started since `ticket` was issued.
    pub async fn resolve(&self, ticket: Resolution) {
        let Resolution(generation) = ticket;
        if !self.is_current(generation) {
            tracing::debug!(generation, "resolution superseded before start");
            return;
        }

        // Storage is authoritative: another tab may have changed the token.
        let Some(token) = self.storage.load() else {
            self.settle(generation, clear_session);
            return;
        };

        match self.client.fetch_identity(&token).await {
            Ok(user) => {
                let user_id = user.id;
                let role = user.role;
                if self.settle(generation, move |session| {
                    session.token = Some(token);
                    session.user = Some(user);
                    session.loading = LoadingState::Ready;
                }) {
                    tracing::info!(user_id, ?role, "identity resolved");
                }
            }
            Err(e) => {
                if !self.is_current(generation) {
                    tracing::debug!(generation, error = %e, "discarding stale identity failure");
                    return;
                }
                tracing::warn!(error = %e, transient = e.is_transient(), "identity resolution failed; logging out");
                self.storage.clear();
                self.settle(generation, clear_session);
            }
        }
    }

    /// Apply `update` if `generation` is still current. Returns whether it
    /// was applied.
    fn settle(&self, generation: u64, update: impl FnOnce(&mut Session)) -> bool {
        let (snapshot, listeners) = {
            let mut inner = self.lock();
            if inner.generation != generation {
                tracing::debug!(generation, current = inner.generation, "discarding stale identity response");
                return false;
            }
            update(&mut inner.session);
            (inner.session.clone(), listeners_of(&inner))
        };
        notify(&snapshot, &listeners);
        true
    }

    /// Start a new generation, apply `update`, and notify listeners.
    fn mutate(&self, update: impl FnOnce(&mut Session)) -> u64 {
        let (generation, snapshot, listeners) = {
            let mut inner = self.lock();
            inner.generation += 1;
            update(&mut inner.session);
            (inner.generation, inner.session.clone(), listeners_of(&inner))
        };
        notify(&snapshot, &listeners);
        generation
    }

    fn is_current(&self, generation: u64) -> bool {
        self.lock().generation == generation
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn clear_session(session: &mut Session) {
    session.token = None;
    session.user = None;
    session.loading = LoadingState::Ready;
}

fn listeners_of(inner: &Inner) -> Vec<Listener> {
    inner.listeners.iter().map(|(_, l)| Arc::clone(l)).collect()
}

fn notify(session: &Session, listeners: &[Listener]) {
    for listener in listeners {
        listener(session);
    }
}
