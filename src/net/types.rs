//! Wire DTOs for the auth endpoints.
//!
//! The identity document itself (`UserProfile`) lives in the `session` crate
//! and is re-exported here.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

pub use session::{ArtistSummary, Role, UserProfile};

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OtpRequest<'a> {
    pub email: &'a str,
}

/// Body of `POST /auth/verify-otp`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OtpVerification<'a> {
    pub email: &'a str,
    pub otp: &'a str,
}

/// Response of `POST /auth/verify-otp`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtpResponse {
    /// Bearer token for the verified account.
    pub token: String,
    /// Set when the account was created by this login.
    #[serde(default)]
    pub new_user: bool,
}
