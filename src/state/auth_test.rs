use super::*;
use session::LoadingState;

// =============================================================
// SessionHandle outside the browser
// =============================================================

#[test]
fn new_handle_starts_resolving_without_token() {
    let handle = SessionHandle::new(&ClientConfig::default());
    let session = handle.snapshot();
    assert!(session.token.is_none());
    assert!(session.user.is_none());
    assert_eq!(session.loading, LoadingState::Resolving);
}

#[test]
fn logout_settles_ready_and_clones_share_state() {
    let handle = SessionHandle::new(&ClientConfig::default());
    let other = handle.clone();
    handle.logout();
    assert_eq!(other.snapshot().loading, LoadingState::Ready);
    assert!(other.snapshot().token.is_none());
}
