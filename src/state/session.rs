//! Session store: the client-side mirror of the server's cookie session.
//!
//! The server is the only authority on login state; this store caches
//! its last answer and is re-derived from the network on every check.
//! All failure modes (transport errors, 401s, explicit
//! `authenticated: false`) collapse to the same observable state —
//! unauthenticated — differing only in the outcome message.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::{RwSignal, Update};

use crate::net::api;
use crate::net::types::{StatusResponse, User};

/// Authentication state tracking the current user and loading status.
///
/// Created unauthenticated at startup; mutated only through the
/// operations in this module.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub user: Option<User>,
    pub authenticated: bool,
    pub loading: bool,
}

impl SessionState {
    /// Username claim of the current user, for display.
    pub fn username(&self) -> Option<&str> {
        self.user.as_ref().and_then(User::username)
    }

    /// Mirror a status response into local state.
    pub fn apply_status(&mut self, status: &StatusResponse) {
        if status.authenticated {
            self.user = status.user.clone();
            self.authenticated = true;
        } else {
            self.clear();
        }
    }

    /// Drop to the unauthenticated state.
    pub fn clear(&mut self) {
        self.user = None;
        self.authenticated = false;
    }
}

/// Result of a session reconciliation attempt.
///
/// `NotAuthenticated` and `Failed` leave the session in the same state;
/// only the diagnostic differs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StatusOutcome {
    Authenticated,
    NotAuthenticated,
    Failed(String),
}

impl StatusOutcome {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated)
    }
}

/// Reconcile local session state with the server.
///
/// Never fails from the caller's point of view: a negative answer and a
/// failed request both clear the session and report an outcome. Checks
/// are not cancelled when superseded; if two overlap, the last response
/// to arrive wins.
pub async fn check_status(session: RwSignal<SessionState>) -> StatusOutcome {
    session.update(|s| s.loading = true);
    let outcome = match api::fetch_status().await {
        Ok(status) => {
            let authenticated = status.authenticated;
            session.update(|s| s.apply_status(&status));
            if authenticated {
                StatusOutcome::Authenticated
            } else {
                StatusOutcome::NotAuthenticated
            }
        }
        Err(message) => {
            session.update(SessionState::clear);
            StatusOutcome::Failed(message)
        }
    };
    session.update(|s| s.loading = false);
    outcome
}

/// Exchange an authorization code for a session, then reconcile.
///
/// The exchange endpoint is not trusted to return the user profile, so
/// success is followed by [`check_status`] to populate it. On failure
/// the session is left untouched and the message is returned for
/// display. The code is single-use server-side; callers must not
/// replay a consumed one.
///
/// # Errors
///
/// Returns the exchange endpoint's error message when the code is
/// rejected or the request fails.
pub async fn exchange_code(session: RwSignal<SessionState>, code: &str) -> Result<(), String> {
    let resp = api::exchange_code(code).await?;
    if resp.message == "success" {
        check_status(session).await;
        Ok(())
    } else {
        Err("authentication failed".to_owned())
    }
}

/// Log out: best-effort server call, unconditional local clear.
///
/// The local session is cleared even when the network call fails, so
/// a user-initiated logout is never stale locally.
pub async fn logout(session: RwSignal<SessionState>) {
    if let Err(e) = api::logout().await {
        leptos::logging::warn!("logout request failed: {e}");
    }
    session.update(SessionState::clear);
}
