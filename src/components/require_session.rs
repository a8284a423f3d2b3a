//! Page-level gate for protected routes.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::config;
use crate::router::guard::{self, GuardCheck, GuardOutcome};
use crate::state::session::{self, SessionState};

/// Wraps protected page content and withholds it until the navigation
/// guard resolves.
///
/// On every navigation into the wrapped page the guard decision is
/// re-evaluated; a required session check goes to the server each time.
/// Unauthenticated navigations are redirected to the login route, so
/// the children never render without an active session (or a
/// code-bearing URL, which the guard lets through for the page-level
/// exchange).
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let location = use_location();
    let navigate = use_navigate();
    let resolved = RwSignal::new(false);

    Effect::new(move || {
        let path = location.pathname.get();
        let query = location.search.get();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let check = guard::evaluate(&path, &query);
            let authenticated = match check {
                GuardCheck::CheckSession => {
                    session::check_status(session).await.is_authenticated()
                }
                GuardCheck::Allowed | GuardCheck::AllowedWithCode => true,
            };
            match guard::outcome(check, authenticated) {
                GuardOutcome::Allowed => resolved.set(true),
                GuardOutcome::RedirectToLogin => {
                    resolved.set(false);
                    navigate(config::LOGIN_ROUTE, NavigateOptions::default());
                }
            }
        });
    });

    view! {
        <Show
            when=move || resolved.get()
            fallback=|| view! { <p class="guard-pending">"Checking session..."</p> }
        >
            {children()}
        </Show>
    }
}
