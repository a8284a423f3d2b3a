//! Top navigation bar with session display and logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config;
use crate::state::session::{self, SessionState};
use crate::state::ui::UiState;

/// Application navbar.
///
/// Shows the sign-in links while unauthenticated and the username plus
/// authoring links once a session is active. Logout clears local state
/// even when the server call fails.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let on_toggle = move |_| ui.update(UiState::toggle_sidebar);

    let on_logout = move |_| {
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            session::logout(session).await;
            navigate(config::LOGIN_ROUTE, NavigateOptions::default());
        });
    };

    let username = move || session.get().username().unwrap_or("").to_owned();

    view! {
        <nav class="navbar">
            <button class="navbar__burger" on:click=on_toggle title="Toggle sidebar">
                "☰"
            </button>
            <a class="navbar__brand" href="/">
                {config::APP_NAME}
            </a>
            <span class="navbar__spacer"></span>
            <Show
                when=move || session.get().authenticated
                fallback=|| {
                    view! {
                        <a class="navbar__link" href="/login">
                            "Login"
                        </a>
                        <a class="navbar__link" href="/signup">
                            "Signup"
                        </a>
                    }
                }
            >
                <a class="navbar__link" href="/create">
                    "New Article"
                </a>
                <a class="navbar__link" href="/storage">
                    "Files"
                </a>
                <span class="navbar__user">{username}</span>
                <button class="navbar__logout" on:click=on_logout.clone()>
                    "Logout"
                </button>
            </Show>
        </nav>
    }
}
