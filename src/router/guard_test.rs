use super::*;

// =============================================================
// requires_auth route metadata
// =============================================================

#[test]
fn create_route_is_protected() {
    assert!(requires_auth("/create"));
}

#[test]
fn edit_routes_are_protected() {
    assert!(requires_auth("/edit/alice/home"));
    assert!(requires_auth("/edit/alice/notes/2024"));
}

#[test]
fn storage_route_is_protected() {
    assert!(requires_auth("/storage"));
}

#[test]
fn public_routes_are_not_protected() {
    assert!(!requires_auth("/"));
    assert!(!requires_auth("/login"));
    assert!(!requires_auth("/signup"));
    assert!(!requires_auth("/wiki/alice/home"));
    assert!(!requires_auth("/share/abc"));
    assert!(!requires_auth("/share/abc/edit"));
}

#[test]
fn prefix_match_requires_segment_boundary() {
    assert!(!requires_auth("/editorial"));
    assert!(!requires_auth("/storages"));
}

// =============================================================
// has_auth_code
// =============================================================

#[test]
fn detects_code_parameter() {
    assert!(has_auth_code("code=abc123"));
    assert!(has_auth_code("?code=abc123"));
    assert!(has_auth_code("state=x&code=abc123"));
}

#[test]
fn ignores_missing_or_empty_code() {
    assert!(!has_auth_code(""));
    assert!(!has_auth_code("state=x"));
    assert!(!has_auth_code("code="));
    assert!(!has_auth_code("decode=abc"));
}

// =============================================================
// evaluate decision table
// =============================================================

#[test]
fn code_bearing_url_is_allowed_unconditionally() {
    // Rule 1 wins even when the target route is protected.
    assert_eq!(evaluate("/", "code=abc123"), GuardCheck::AllowedWithCode);
    assert_eq!(evaluate("/create", "code=abc123"), GuardCheck::AllowedWithCode);
    assert_eq!(
        evaluate("/edit/alice/home", "?code=abc123"),
        GuardCheck::AllowedWithCode
    );
}

#[test]
fn unprotected_route_is_allowed_immediately() {
    assert_eq!(evaluate("/", ""), GuardCheck::Allowed);
    assert_eq!(evaluate("/wiki/alice/home", ""), GuardCheck::Allowed);
}

#[test]
fn protected_route_requires_session_check() {
    assert_eq!(evaluate("/create", ""), GuardCheck::CheckSession);
    assert_eq!(evaluate("/edit/alice/home", ""), GuardCheck::CheckSession);
    assert_eq!(evaluate("/storage", ""), GuardCheck::CheckSession);
}

// =============================================================
// outcome
// =============================================================

#[test]
fn allowed_checks_never_redirect() {
    assert_eq!(outcome(GuardCheck::Allowed, false), GuardOutcome::Allowed);
    assert_eq!(
        outcome(GuardCheck::AllowedWithCode, false),
        GuardOutcome::Allowed
    );
}

#[test]
fn session_check_redirects_when_unauthenticated() {
    assert_eq!(
        outcome(GuardCheck::CheckSession, false),
        GuardOutcome::RedirectToLogin
    );
}

#[test]
fn session_check_allows_when_authenticated() {
    assert_eq!(outcome(GuardCheck::CheckSession, true), GuardOutcome::Allowed);
}

// =============================================================
// Scenarios
// =============================================================

#[test]
fn unauthenticated_edit_navigation_ends_at_login() {
    // Visit /edit/alice/home without a code: the guard demands a check;
    // the server answers "authenticated: false"; final route is /login.
    let check = evaluate("/edit/alice/home", "");
    assert_eq!(check, GuardCheck::CheckSession);
    assert_eq!(outcome(check, false), GuardOutcome::RedirectToLogin);
}

#[test]
fn code_landing_navigation_is_let_through() {
    // Visit /?code=abc123: allowed regardless of session state; the
    // page-level handler performs the exchange.
    let check = evaluate("/", "code=abc123");
    assert_eq!(check, GuardCheck::AllowedWithCode);
    assert_eq!(outcome(check, false), GuardOutcome::Allowed);
}
