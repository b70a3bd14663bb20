use super::*;

#[test]
fn verify_otp_response_reads_new_user_flag() {
    let body: VerifyOtpResponse =
        serde_json::from_str(r#"{"token":"abc","newUser":true}"#).expect("response");
    assert_eq!(body.token, "abc");
    assert!(body.new_user);
}

#[test]
fn verify_otp_response_new_user_defaults_false() {
    let body: VerifyOtpResponse = serde_json::from_str(r#"{"token":"abc"}"#).expect("response");
    assert!(!body.new_user);
}

#[test]
fn otp_verification_serializes_email_and_otp() {
    let json = serde_json::to_value(OtpVerification { email: "a@b.com", otp: "123456" }).expect("json");
    assert_eq!(json, serde_json::json!({"email": "a@b.com", "otp": "123456"}));
}
