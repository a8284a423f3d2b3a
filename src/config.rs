//! Application configuration fixed at build time.
//!
//! The API is served from the same origin as the client (CDN routing),
//! so the base URL is empty and every request path is relative. The
//! session rides on a cookie, which is why credentials are forced on
//! for every request in `net::http`.

/// Application name shown in the navbar and the document title.
pub const APP_NAME: &str = "WikiProject";

/// Base address prefixed to every endpoint path. Empty means same origin.
pub const API_BASE_URL: &str = "";

/// Per-request timeout in milliseconds.
pub const REQUEST_TIMEOUT_MS: u32 = 10_000;

/// Endpoint path templates. `:name` placeholders are substituted by
/// [`crate::net::endpoints::resolve`].
pub mod endpoints {
    pub const AUTH_TOKEN_EXCHANGE: &str = "/api/auth/token";
    pub const AUTH_STATUS: &str = "/api/auth/status";
    pub const AUTH_LOGOUT: &str = "/api/auth/logout";

    pub const WIKI_ARTICLES: &str = "/api/wiki/articles";
    pub const WIKI_ARTICLE_DETAIL: &str = "/api/wiki/articles/:id";

    pub const SHARE_ARTICLE: &str = "/api/share/:shareId";

    pub const STORAGE_UPLOAD: &str = "/api/storage/upload";
    pub const STORAGE_FILE_DETAIL: &str = "/api/storage/files/:fileId";
}

/// Route path prefixes that require an active session.
///
/// A path matches if it equals the prefix or continues it at a `/`
/// boundary, so `/edit/alice/home` is protected but `/editorial` is not.
pub const PROTECTED_ROUTE_PREFIXES: &[&str] = &["/create", "/edit", "/storage"];

/// Where the guard sends unauthenticated navigations.
pub const LOGIN_ROUTE: &str = "/login";

/// Default landing route after a successful code exchange.
pub const REDIRECT_AFTER_LOGIN: &str = "/";

/// Maximum accepted upload size in bytes (10 MiB).
pub const MAX_UPLOAD_BYTES: f64 = 10.0 * 1024.0 * 1024.0;

/// MIME types accepted by the storage uploader.
pub const ALLOWED_UPLOAD_TYPES: &[&str] = &[
    "image/jpeg",
    "image/png",
    "image/gif",
    "image/webp",
    "application/pdf",
    "text/plain",
    "text/markdown",
    "application/json",
    "text/csv",
];

/// URL of the external managed login page, baked in at build time.
///
/// Returns `None` when the build did not set `WIKI_LOGIN_URL`; the login
/// page renders a disabled state instead of a broken link.
pub fn managed_login_url() -> Option<&'static str> {
    option_env!("WIKI_LOGIN_URL")
}

/// URL of the external managed signup page, baked in at build time.
pub fn managed_signup_url() -> Option<&'static str> {
    option_env!("WIKI_SIGNUP_URL")
}
