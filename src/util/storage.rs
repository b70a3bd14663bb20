//! Bearer-token persistence in `localStorage`.
//!
//! Reads and writes go straight to the browser on every call so the session
//! store always sees what other tabs last wrote. Outside a browser the slot
//! behaves as permanently empty.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use session::TokenStore;

/// `localStorage`-backed [`TokenStore`] using a single key.
#[derive(Clone, Debug)]
pub struct BrowserTokenStore {
    key: String,
}

impl BrowserTokenStore {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

/// Log a failed storage write. Returns whether `result` was a failure.
#[cfg(any(test, feature = "csr"))]
fn warn_on_failure<E>(result: Result<(), E>, action: &str) -> bool {
    let failed = result.is_err();
    if failed {
        leptos::logging::warn!("failed to {action} session token");
    }
    failed
}

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl TokenStore for BrowserTokenStore {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(&self.key).ok().flatten().filter(|t| !t.is_empty())
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn save(&self, token: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                warn_on_failure(storage.set_item(&self.key, token), "persist");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                warn_on_failure(storage.remove_item(&self.key), "remove");
            }
        }
    }
}
