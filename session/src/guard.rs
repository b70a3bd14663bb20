//! Role-gated route guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded sections consult the current [`Session`] on mount and on every
//! session change. The verdict is always recomputed from the snapshot, so a
//! logout while a guarded page is open redirects immediately. A failed
//! identity resolution shows up here as "no user" and is denied like any
//! anonymous visitor.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::types::{LoadingState, Role, Session};

/// Application home; where denied admin navigations land.
pub const HOME_PATH: &str = "/";

/// Login screen; where denied member-only navigations land.
pub const LOGIN_PATH: &str = "/login";

/// Something that can move the browser to another location.
pub trait Navigator {
    /// Replace the current location with `path`.
    fn redirect(&self, path: &str);
}

/// Capability a guarded section requires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Requirement {
    /// Any resolved user.
    Authenticated,
    /// A resolved user holding exactly this role.
    Role(Role),
}

/// Outcome of evaluating a guard against a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Identity still resolving: show a neutral indicator, do not redirect.
    Pending,
    Allowed,
    Denied,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteGuard {
    requirement: Requirement,
    redirect_to: &'static str,
}

impl RouteGuard {
    #[must_use]
    pub const fn new(requirement: Requirement, redirect_to: &'static str) -> Self {
        Self { requirement, redirect_to }
    }

    /// Admin-only sections; everyone else is sent home.
    #[must_use]
    pub const fn admin() -> Self {
        Self::new(Requirement::Role(Role::Admin), HOME_PATH)
    }

    /// Member sections; anonymous visitors are sent to the login screen.
    #[must_use]
    pub const fn authenticated() -> Self {
        Self::new(Requirement::Authenticated, LOGIN_PATH)
    }

    #[must_use]
    pub fn requirement(&self) -> Requirement {
        self.requirement
    }

    #[must_use]
    pub fn redirect_to(&self) -> &'static str {
        self.redirect_to
    }

    #[must_use]
    pub fn evaluate(&self, session: &Session) -> Verdict {
        if session.loading == LoadingState::Resolving {
            return Verdict::Pending;
        }
        let Some(user) = &session.user else {
            return Verdict::Denied;
        };
        let allowed = match self.requirement {
            Requirement::Authenticated => true,
            Requirement::Role(Role::Unknown) => false,
            Requirement::Role(role) => user.role == role,
        };
        if allowed { Verdict::Allowed } else { Verdict::Denied }
    }

    /// Evaluate `session` and redirect when the verdict newly becomes
    /// [`Verdict::Denied`].
    ///
    /// `previous` is the verdict returned by the last call for the same
    /// mounted section (`None` on mount). Returns the new verdict so callers
    /// can thread it into the next call.
    pub fn enforce(&self, previous: Option<Verdict>, session: &Session, navigator: &impl Navigator) -> Verdict {
        let verdict = self.evaluate(session);
        if verdict == Verdict::Denied && previous != Some(Verdict::Denied) {
            tracing::debug!(requirement = ?self.requirement, to = self.redirect_to, "route guard denied");
            navigator.redirect(self.redirect_to);
        }
        verdict
    }
}
