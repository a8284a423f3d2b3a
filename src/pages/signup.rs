//! Signup page linking to the external managed signup.

use leptos::prelude::*;

use crate::config;

/// Signup page — the button navigates to the external managed signup
/// page.
#[component]
pub fn SignupPage() -> impl IntoView {
    view! {
        <div class="signup-page">
            <h1>{config::APP_NAME}</h1>
            <p>"Create an account to start writing."</p>
            {match config::managed_signup_url() {
                Some(url) => {
                    view! {
                        <a href=url class="signup-button">
                            "Sign up"
                        </a>
                    }
                        .into_any()
                }
                None => {
                    view! { <p class="signup-page__unavailable">"Signup is not configured for this build."</p> }
                        .into_any()
                }
            }}
            <p class="signup-page__alt">
                <a href="/login">"Already registered? Sign in"</a>
            </p>
        </div>
    }
}
