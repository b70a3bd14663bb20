use super::*;

#[test]
fn normalize_otp_input_keeps_six_digits() {
    assert_eq!(normalize_otp_input("12 34-56"), "123456");
    assert_eq!(normalize_otp_input("1234567"), "123456");
    assert_eq!(normalize_otp_input("abc"), "");
}

#[test]
fn validate_email_input_trims_and_requires_value() {
    assert_eq!(validate_email_input("  user@example.com  "), Ok("user@example.com".to_owned()));
    assert_eq!(validate_email_input("   "), Err("Enter an email first."));
    assert_eq!(validate_email_input("user.example.com"), Err("Enter a valid email address."));
}

#[test]
fn validate_verify_input_requires_six_digits() {
    assert_eq!(
        validate_verify_input(" a@b.com ", " 123456 "),
        Ok(("a@b.com".to_owned(), "123456".to_owned()))
    );
    assert_eq!(validate_verify_input("a@b.com", "12345"), Err("Enter the 6-digit code from your email."));
    assert_eq!(validate_verify_input("a@b.com", "12345a"), Err("Enter the 6-digit code from your email."));
}

#[test]
fn validate_verify_input_checks_email_first() {
    assert_eq!(validate_verify_input("", "123456"), Err("Enter an email first."));
}

#[test]
fn new_users_land_on_dashboard() {
    assert_eq!(post_login_path(true), "/dashboard");
    assert_eq!(post_login_path(false), "/");
}
