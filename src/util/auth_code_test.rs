use super::*;

// =============================================================
// code_from_query
// =============================================================

#[test]
fn extracts_code_value() {
    assert_eq!(code_from_query("code=abc123"), Some("abc123".to_owned()));
}

#[test]
fn accepts_leading_question_mark() {
    assert_eq!(code_from_query("?code=abc123"), Some("abc123".to_owned()));
}

#[test]
fn finds_code_among_other_params() {
    assert_eq!(
        code_from_query("state=xyz&code=abc123&foo=1"),
        Some("abc123".to_owned())
    );
}

#[test]
fn empty_code_is_absent() {
    assert_eq!(code_from_query("code="), None);
}

#[test]
fn similarly_named_params_do_not_match() {
    assert_eq!(code_from_query("decode=abc&codex=def"), None);
}

#[test]
fn no_query_no_code() {
    assert_eq!(code_from_query(""), None);
}

// =============================================================
// strip_code_param
// =============================================================

#[test]
fn strip_removes_only_code() {
    assert_eq!(strip_code_param("state=xyz&code=abc123&foo=1"), "state=xyz&foo=1");
}

#[test]
fn strip_of_lone_code_leaves_empty_query() {
    assert_eq!(strip_code_param("?code=abc123"), "");
}

#[test]
fn strip_preserves_query_without_code() {
    assert_eq!(strip_code_param("a=1&b=2"), "a=1&b=2");
}

#[test]
fn strip_keeps_similarly_named_params() {
    assert_eq!(strip_code_param("decode=abc&code=x"), "decode=abc");
}
