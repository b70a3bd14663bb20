use super::*;
use session::ArtistSummary;

fn user(role: Role) -> UserProfile {
    UserProfile { id: 1, role, ..UserProfile::default() }
}

#[test]
fn role_label_names_each_role() {
    assert_eq!(role_label(&user(Role::Admin)), "Administrator");
    assert_eq!(role_label(&user(Role::Artist)), "Artist");
    assert_eq!(role_label(&user(Role::User)), "Customer");
    assert_eq!(role_label(&user(Role::Unknown)), "Member");
}

#[test]
fn role_label_treats_attached_artist_profile_as_artist() {
    let mut u = user(Role::User);
    u.artist = Some(ArtistSummary { id: 4, ..ArtistSummary::default() });
    assert_eq!(role_label(&u), "Artist");
}
