//! Session data model and identity wire types.
//!
//! DESIGN
//! ======
//! `UserProfile` mirrors the identity document served by `GET /users/me`
//! (camelCase JSON). GUEST is not a role on the wire: it is the absence of a
//! resolved user.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced while exchanging a bearer token for a user profile.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    /// The request never produced an HTTP response.
    #[error("identity request failed: {0}")]
    Transport(String),

    /// The identity endpoint answered with a non-success status.
    #[error("identity endpoint rejected token: status {status}")]
    Rejected { status: u16 },

    /// The identity document could not be deserialized.
    #[error("identity response parse failed: {0}")]
    Parse(String),
}

impl IdentityError {
    /// Whether the failure looks transient rather than a bad credential.
    ///
    /// The store still forces a logout for transient failures; this only
    /// feeds logging.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Rejected { status: 429 | 500..=599 })
    }
}

// =============================================================================
// USER PROFILE
// =============================================================================

/// Account role as reported by the identity endpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    #[default]
    User,
    Artist,
    Admin,
    /// Any role string this client does not know. Grants nothing.
    #[serde(other)]
    Unknown,
}

/// Artist-profile reference nested in the identity document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistSummary {
    pub id: i64,
    #[serde(default)]
    pub artist_name: Option<String>,
    #[serde(default)]
    pub art_form: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub short_bio: Option<String>,
}

/// Identity document for the bearer of the current token.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: i64,
    pub role: Role,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub mobile_number: Option<String>,
    #[serde(default)]
    pub artist: Option<ArtistSummary>,
}

impl UserProfile {
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// True once the account has an artist profile attached, whatever the
    /// role field says.
    #[must_use]
    pub fn is_artist(&self) -> bool {
        self.role == Role::Artist || self.artist.is_some()
    }

    /// Best human-readable label: full name, then email, then mobile number.
    #[must_use]
    pub fn display_name(&self) -> String {
        [&self.full_name, &self.email, &self.mobile_number]
            .into_iter()
            .flatten()
            .map(|s| s.trim())
            .find(|s| !s.is_empty())
            .map_or_else(|| format!("User #{}", self.id), str::to_owned)
    }
}

// =============================================================================
// SESSION
// =============================================================================

/// Whether an identity resolution is in flight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadingState {
    #[default]
    Resolving,
    Ready,
}

/// Snapshot of the current authentication state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<UserProfile>,
    pub loading: LoadingState,
}

impl Session {
    /// Session at application start: token seeded, identity not yet known.
    #[must_use]
    pub fn seeded(token: Option<String>) -> Self {
        Self { token, user: None, loading: LoadingState::Resolving }
    }

    #[must_use]
    pub fn is_resolving(&self) -> bool {
        self.loading == LoadingState::Resolving
    }

    /// A token is held, whether or not its identity has resolved yet.
    #[must_use]
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(UserProfile::is_admin)
    }
}
