use super::*;

fn user(name: &str) -> User {
    serde_json::from_value(serde_json::json!({ "cognito:username": name })).expect("user")
}

fn authenticated_status(name: &str) -> StatusResponse {
    StatusResponse {
        authenticated: true,
        user: Some(user(name)),
    }
}

fn negative_status() -> StatusResponse {
    StatusResponse {
        authenticated: false,
        user: None,
    }
}

// =============================================================
// SessionState defaults
// =============================================================

#[test]
fn session_default_is_unauthenticated() {
    let state = SessionState::default();
    assert!(state.user.is_none());
    assert!(!state.authenticated);
}

#[test]
fn session_default_not_loading() {
    let state = SessionState::default();
    assert!(!state.loading);
}

// =============================================================
// apply_status / clear transitions
// =============================================================

#[test]
fn apply_positive_status_sets_user_and_flag() {
    let mut state = SessionState::default();
    state.apply_status(&authenticated_status("alice"));
    assert!(state.authenticated);
    assert_eq!(state.username(), Some("alice"));
}

#[test]
fn apply_negative_status_clears_session() {
    let mut state = SessionState::default();
    state.apply_status(&authenticated_status("alice"));

    state.apply_status(&negative_status());
    assert!(!state.authenticated);
    assert!(state.user.is_none());
}

#[test]
fn apply_positive_status_without_user_still_authenticates() {
    // The server is the authority; a missing profile does not override it.
    let mut state = SessionState::default();
    state.apply_status(&StatusResponse {
        authenticated: true,
        user: None,
    });
    assert!(state.authenticated);
    assert!(state.username().is_none());
}

#[test]
fn clear_drops_user_and_flag() {
    let mut state = SessionState::default();
    state.apply_status(&authenticated_status("bob"));

    state.clear();
    assert!(!state.authenticated);
    assert!(state.user.is_none());
}

#[test]
fn negative_status_and_clear_are_indistinguishable() {
    // Network failure (handled via clear) and an explicit negative
    // response must land in the same observable state.
    let mut via_status = SessionState::default();
    via_status.apply_status(&authenticated_status("alice"));
    via_status.apply_status(&negative_status());

    let mut via_clear = SessionState::default();
    via_clear.apply_status(&authenticated_status("alice"));
    via_clear.clear();

    assert_eq!(via_status.authenticated, via_clear.authenticated);
    assert_eq!(via_status.user, via_clear.user);
}

// =============================================================
// username claim lookup
// =============================================================

#[test]
fn username_reads_cognito_claim() {
    let u = user("carol");
    assert_eq!(u.username(), Some("carol"));
}

#[test]
fn username_falls_back_to_plain_claim() {
    let u: User = serde_json::from_value(serde_json::json!({ "username": "dave" })).expect("user");
    assert_eq!(u.username(), Some("dave"));
}

#[test]
fn username_absent_when_no_claim() {
    let u: User = serde_json::from_value(serde_json::json!({ "sub": "123" })).expect("user");
    assert_eq!(u.username(), None);
}

// =============================================================
// StatusOutcome
// =============================================================

#[test]
fn only_authenticated_outcome_is_authenticated() {
    assert!(StatusOutcome::Authenticated.is_authenticated());
    assert!(!StatusOutcome::NotAuthenticated.is_authenticated());
    assert!(!StatusOutcome::Failed("timeout".to_owned()).is_authenticated());
}
