//! Authorization code extraction and URL cleansing.
//!
//! The external login page redirects back with `?code=...` appended.
//! The code is read once and the parameter is stripped from the address
//! bar with `history.replaceState`, so a later reconciliation pass never
//! sees a consumed code.

#[cfg(test)]
#[path = "auth_code_test.rs"]
mod auth_code_test;

/// Pull a non-empty `code` parameter out of a query string.
///
/// Accepts the query with or without its leading `?`. The value is
/// returned as it appears in the URL (codes are URL-safe tokens).
pub fn code_from_query(query: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(name, value)| *name == "code" && !value.is_empty())
        .map(|(_, value)| value.to_owned())
}

/// Rebuild a query string with the `code` parameter removed.
///
/// Other parameters are preserved in order. Returns an empty string
/// when nothing remains.
pub fn strip_code_param(query: &str) -> String {
    let query = query.strip_prefix('?').unwrap_or(query);
    query
        .split('&')
        .filter(|pair| !pair.is_empty() && pair.split_once('=').map_or(*pair, |(n, _)| n) != "code")
        .collect::<Vec<_>>()
        .join("&")
}

/// Read the authorization code from the current URL and cleanse it.
///
/// Returns `None` outside the browser or when no code is present. When
/// a code is found, the address bar is rewritten without it before the
/// code is handed to the caller.
pub fn take_code_from_url() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        let location = window.location();
        let search = location.search().ok()?;
        let code = code_from_query(&search)?;

        let pathname = location.pathname().unwrap_or_else(|_| "/".to_owned());
        let remaining = strip_code_param(&search);
        let cleansed = if remaining.is_empty() {
            pathname
        } else {
            format!("{pathname}?{remaining}")
        };
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(
                &wasm_bindgen::JsValue::NULL,
                "",
                Some(&cleansed),
            );
        }

        Some(code)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
