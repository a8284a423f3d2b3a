//! Navigation guard: decides whether a route may render.
//!
//! The decision is split into two pure steps so it is testable without
//! a browser or a network:
//!
//! 1. [`evaluate`] maps (path, query) to a [`GuardCheck`] — a
//!    code-bearing URL is always let through (the destination page owns
//!    the exchange), an unprotected route is allowed immediately, and a
//!    protected route requires a session check.
//! 2. [`outcome`] maps the check plus the resolved session snapshot to
//!    the final [`GuardOutcome`].
//!
//! The network call between the steps lives in
//! `state::session::check_status` and is re-run on every protected
//! navigation; the guard itself caches nothing.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::config;

/// First-stage decision for a navigation attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardCheck {
    /// URL carries an authorization code; proceed unconditionally.
    AllowedWithCode,
    /// Route is not protected; proceed.
    Allowed,
    /// Route is protected; a session check must resolve first.
    CheckSession,
}

/// Final decision after any required session check resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Allowed,
    RedirectToLogin,
}

/// Whether `path` names a protected route.
///
/// A path is protected when it equals one of the configured prefixes or
/// continues one at a `/` boundary.
pub fn requires_auth(path: &str) -> bool {
    config::PROTECTED_ROUTE_PREFIXES.iter().any(|prefix| {
        path == *prefix
            || path
                .strip_prefix(prefix)
                .is_some_and(|rest| rest.starts_with('/'))
    })
}

/// Whether the query string carries a non-empty `code` parameter.
///
/// Accepts the query with or without its leading `?`.
pub fn has_auth_code(query: &str) -> bool {
    crate::util::auth_code::code_from_query(query).is_some()
}

/// First guard stage: pure decision over the target URL.
///
/// The code check wins over route metadata even for protected routes;
/// the exchange must happen at the destination page, not here.
pub fn evaluate(path: &str, query: &str) -> GuardCheck {
    if has_auth_code(query) {
        GuardCheck::AllowedWithCode
    } else if requires_auth(path) {
        GuardCheck::CheckSession
    } else {
        GuardCheck::Allowed
    }
}

/// Second guard stage: fold in the resolved session snapshot.
pub fn outcome(check: GuardCheck, authenticated: bool) -> GuardOutcome {
    match check {
        GuardCheck::AllowedWithCode | GuardCheck::Allowed => GuardOutcome::Allowed,
        GuardCheck::CheckSession => {
            if authenticated {
                GuardOutcome::Allowed
            } else {
                GuardOutcome::RedirectToLogin
            }
        }
    }
}
