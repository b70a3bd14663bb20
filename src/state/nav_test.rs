use super::*;
use session::{LoadingState, Role, UserProfile};

fn signed_in(role: Role) -> Session {
    Session {
        token: Some("tok".to_owned()),
        user: Some(UserProfile { id: 5, role, full_name: Some("Meera".to_owned()), ..UserProfile::default() }),
        loading: LoadingState::Ready,
    }
}

#[test]
fn guest_sees_home_and_login() {
    let session = Session { loading: LoadingState::Ready, ..Session::default() };
    assert_eq!(nav_items(&session), vec![NavItem::Home, NavItem::Login]);
}

#[test]
fn member_sees_dashboard_and_logout_but_not_admin() {
    assert_eq!(
        nav_items(&signed_in(Role::User)),
        vec![NavItem::Home, NavItem::Dashboard, NavItem::Logout]
    );
}

#[test]
fn admin_sees_admin_entry() {
    assert_eq!(
        nav_items(&signed_in(Role::Admin)),
        vec![NavItem::Home, NavItem::Admin, NavItem::Dashboard, NavItem::Logout]
    );
}

#[test]
fn token_without_resolved_user_keeps_signed_in_menu() {
    let session = Session::seeded(Some("tok".to_owned()));
    assert_eq!(nav_items(&session), vec![NavItem::Home, NavItem::Dashboard, NavItem::Logout]);
}

#[test]
fn role_change_is_reflected_without_reload() {
    let before = nav_items(&signed_in(Role::User));
    let after = nav_items(&signed_in(Role::Admin));
    assert!(!before.contains(&NavItem::Admin));
    assert!(after.contains(&NavItem::Admin));
}

#[test]
fn logout_is_a_button_not_a_link() {
    assert_eq!(NavItem::Logout.href(), None);
    assert_eq!(NavItem::Admin.href(), Some("/admin"));
    assert_eq!(NavItem::Login.href(), Some("/login"));
    assert_eq!(NavItem::Dashboard.label(), "Dashboard");
}

#[test]
fn account_label_uses_display_name() {
    assert_eq!(account_label(&signed_in(Role::User)).as_deref(), Some("Meera"));
    assert_eq!(account_label(&Session::default()), None);
}
