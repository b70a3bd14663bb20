use super::*;
use session::{HOME_PATH, LOGIN_PATH, LoadingState, Role, UserProfile};
use std::cell::RefCell;

#[derive(Default)]
struct RecordingNavigator {
    visits: RefCell<Vec<String>>,
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, path: &str) {
        self.visits.borrow_mut().push(path.to_owned());
    }
}

fn resolving(token: &str) -> Session {
    Session::seeded(Some(token.to_owned()))
}

fn signed_in(role: Role) -> Session {
    Session {
        token: Some("tok".to_owned()),
        user: Some(UserProfile { id: 1, role, ..UserProfile::default() }),
        loading: LoadingState::Ready,
    }
}

fn signed_out() -> Session {
    Session { token: None, user: None, loading: LoadingState::Ready }
}

/// Feed each session to the redirect effect in order, threading the
/// returned verdict into the next run.
fn drive(guard: RouteGuard, sessions: &[Session], navigator: &RecordingNavigator) -> Vec<Verdict> {
    let mut previous = None;
    sessions
        .iter()
        .map(|session| {
            let verdict = redirect_step(guard, previous, session, navigator);
            previous = Some(verdict);
            verdict
        })
        .collect()
}

// =============================================================
// guard_view
// =============================================================

#[test]
fn view_follows_verdict() {
    assert_eq!(guard_view(Verdict::Pending), GuardView::Spinner);
    assert_eq!(guard_view(Verdict::Allowed), GuardView::Content);
    assert_eq!(guard_view(Verdict::Denied), GuardView::Nothing);
}

// =============================================================
// redirect effect
// =============================================================

#[test]
fn admin_route_waits_then_shows_content_without_redirect() {
    let nav = RecordingNavigator::default();
    let verdicts = drive(RouteGuard::admin(), &[resolving("tok"), signed_in(Role::Admin)], &nav);
    assert_eq!(verdicts, vec![Verdict::Pending, Verdict::Allowed]);
    assert!(nav.visits.borrow().is_empty());
}

#[test]
fn repeated_denials_redirect_once() {
    let nav = RecordingNavigator::default();
    let sessions = [resolving("tok"), signed_in(Role::User), signed_in(Role::Artist), signed_in(Role::User)];
    let verdicts = drive(RouteGuard::admin(), &sessions, &nav);
    assert_eq!(verdicts.last(), Some(&Verdict::Denied));
    assert_eq!(*nav.visits.borrow(), vec![HOME_PATH.to_owned()]);
}

#[test]
fn denial_after_allowed_redirects_again() {
    let nav = RecordingNavigator::default();
    let sessions = [signed_out(), resolving("new"), signed_in(Role::User), signed_out()];
    let verdicts = drive(RouteGuard::authenticated(), &sessions, &nav);
    assert_eq!(verdicts, vec![Verdict::Denied, Verdict::Pending, Verdict::Allowed, Verdict::Denied]);
    assert_eq!(*nav.visits.borrow(), vec![LOGIN_PATH.to_owned(), LOGIN_PATH.to_owned()]);
}

#[test]
fn fresh_login_before_navigation_does_not_bounce() {
    let nav = RecordingNavigator::default();
    let verdicts = drive(RouteGuard::authenticated(), &[resolving("new"), signed_in(Role::User)], &nav);
    assert_eq!(verdicts.iter().map(|v| guard_view(*v)).collect::<Vec<_>>(), vec![GuardView::Spinner, GuardView::Content]);
    assert!(nav.visits.borrow().is_empty());
}
