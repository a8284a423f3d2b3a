//! Login page linking to the external managed login.

use leptos::prelude::*;

use crate::config;

/// Login page — the button navigates to the external managed login
/// page, which redirects back with an authorization code.
#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <h1>{config::APP_NAME}</h1>
            <p>"Sign in to create and edit articles."</p>
            {match config::managed_login_url() {
                Some(url) => {
                    view! {
                        <a href=url class="login-button">
                            "Sign in"
                        </a>
                    }
                        .into_any()
                }
                None => {
                    view! { <p class="login-page__unavailable">"Sign-in is not configured for this build."</p> }
                        .into_any()
                }
            }}
            <p class="login-page__alt">
                <a href="/signup">"No account? Sign up"</a>
            </p>
        </div>
    }
}
