//! Browser-session core for the Kalaa Setu client.
//!
//! This crate owns "who is the current user": the persisted bearer token, the
//! identity resolved from it, and the role-based route guard that consults
//! both. It has no browser dependencies; the client crate plugs `localStorage`,
//! HTTP, and the router in through the [`TokenStore`], [`IdentityClient`], and
//! [`Navigator`] seams.

pub mod guard;
pub mod store;
pub mod types;

pub use guard::{HOME_PATH, LOGIN_PATH, Navigator, Requirement, RouteGuard, Verdict};
pub use store::{IdentityClient, MemoryTokenStore, Resolution, SessionStore, SubscriptionId, TokenStore};
pub use types::{ArtistSummary, IdentityError, LoadingState, Role, Session, UserProfile};
