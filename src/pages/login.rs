//! Login page: email one-time-password flow.
//!
//! Step one emails a 6-digit code; step two exchanges it for a bearer token
//! and hands the token to the session store.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use session::HOME_PATH;

use crate::config::ClientConfig;
use crate::state::auth::use_session;
use crate::state::nav::DASHBOARD_PATH;

const OTP_LEN: usize = 6;

/// Keep digits only, at most six of them.
fn normalize_otp_input(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).take(OTP_LEN).collect()
}

fn validate_email_input(raw: &str) -> Result<String, &'static str> {
    let email = raw.trim();
    if email.is_empty() {
        return Err("Enter an email first.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok(email.to_owned())
}

fn validate_verify_input(email: &str, otp: &str) -> Result<(String, String), &'static str> {
    let email = validate_email_input(email)?;
    let otp = otp.trim();
    if otp.len() != OTP_LEN || !otp.chars().all(|c| c.is_ascii_digit()) {
        return Err("Enter the 6-digit code from your email.");
    }
    Ok((email, otp.to_owned()))
}

/// Where to land after a successful login.
fn post_login_path(new_user: bool) -> &'static str {
    if new_user { DASHBOARD_PATH } else { HOME_PATH }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let (session, _) = use_session();
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let otp = RwSignal::new(String::new());
    let otp_sent = RwSignal::new(false);
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let request_config = config.clone();
    let on_request_code = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = match validate_email_input(&email.get()) {
            Ok(value) => value,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Sending code...".to_owned());

        let config = request_config.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::request_login_otp(&config, &email_value).await {
                Ok(()) => {
                    let message = if otp_sent.get_untracked() {
                        "A new code has been sent."
                    } else {
                        "A code has been sent to your email."
                    };
                    otp_sent.set(true);
                    info.set(message.to_owned());
                }
                Err(e) => {
                    leptos::logging::warn!("OTP request failed: {e}");
                    info.set(e.user_message("Failed to send code. Please check the email."));
                }
            }
            busy.set(false);
        });
    };

    let on_verify_code = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, otp_value) = match validate_verify_input(&email.get(), &otp.get()) {
            Ok(values) => values,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Verifying code...".to_owned());

        let config = config.clone();
        let session = session.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::verify_login_otp(&config, &email_value, &otp_value).await {
                Ok(resp) => {
                    session.login(resp.token);
                    navigate(post_login_path(resp.new_user), NavigateOptions::default());
                }
                Err(e) => {
                    leptos::logging::warn!("OTP verification failed: {e}");
                    info.set(e.user_message("Invalid code. Please try again."));
                    busy.set(false);
                }
            }
        });
    };

    let use_different_email = move |_| {
        otp_sent.set(false);
        otp.set(String::new());
        info.set(String::new());
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Kalaa Setu"</h1>
                <p class="login-card__subtitle">"Welcome back to the Art Bridge"</p>
                <form class="login-form" on:submit=on_request_code>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="artist@example.com"
                        prop:value=move || email.get()
                        prop:disabled=move || otp_sent.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if otp_sent.get() { "Resend Code" } else { "Get Code" }}
                    </button>
                </form>
                <Show when=move || otp_sent.get()>
                    <form class="login-form" on:submit=on_verify_code.clone()>
                        <input
                            class="login-input login-input--code"
                            type="text"
                            inputmode="numeric"
                            maxlength="6"
                            placeholder="• • • • • •"
                            prop:value=move || otp.get()
                            on:input=move |ev| otp.set(normalize_otp_input(&event_target_value(&ev)))
                        />
                        <button
                            class="login-button"
                            type="submit"
                            disabled=move || busy.get() || otp.get().len() != OTP_LEN
                        >
                            "Verify & Login"
                        </button>
                        <button class="login-link" type="button" on:click=use_different_email>
                            "Use a different email"
                        </button>
                    </form>
                </Show>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
