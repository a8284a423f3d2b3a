use super::*;

// =============================================================
// resolve
// =============================================================

#[test]
fn resolve_substitutes_named_placeholder() {
    let path = resolve("/api/wiki/articles/:id", &[("id", "42")]);
    assert_eq!(path, "/api/wiki/articles/42");
}

#[test]
fn resolve_substitutes_multiple_placeholders() {
    let path = resolve("/api/:kind/:id", &[("kind", "wiki"), ("id", "7")]);
    assert_eq!(path, "/api/wiki/7");
}

#[test]
fn resolve_leaves_unmatched_placeholder_literal() {
    let path = resolve("/api/wiki/articles/:id", &[]);
    assert_eq!(path, "/api/wiki/articles/:id");
}

#[test]
fn resolve_ignores_extra_params() {
    let path = resolve("/api/wiki/articles/:id", &[("id", "42"), ("other", "x")]);
    assert_eq!(path, "/api/wiki/articles/42");
}

#[test]
fn resolve_does_not_url_encode_values() {
    let path = resolve("/api/share/:shareId", &[("shareId", "a b/c")]);
    assert_eq!(path, "/api/share/a b/c");
}

#[test]
fn resolve_share_template() {
    let path = resolve(crate::config::endpoints::SHARE_ARTICLE, &[("shareId", "xyz")]);
    assert_eq!(path, "/api/share/xyz");
}

#[test]
fn resolve_file_detail_template() {
    let path = resolve(
        crate::config::endpoints::STORAGE_FILE_DETAIL,
        &[("fileId", "f-9")],
    );
    assert_eq!(path, "/api/storage/files/f-9");
}

// =============================================================
// absolute
// =============================================================

#[test]
fn absolute_prefixes_base_url() {
    // Base URL is empty (same-origin), so the path passes through.
    assert_eq!(absolute("/api/auth/status"), "/api/auth/status");
}
