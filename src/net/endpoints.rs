//! Endpoint template resolution.
//!
//! Path templates carry `:name` placeholders (`/api/wiki/articles/:id`)
//! that are substituted textually before a request is issued. Values are
//! NOT URL-encoded here; callers that interpolate user-controlled text
//! into a path segment encode it themselves.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

use crate::config;

/// Substitute `:name` placeholders in `template` with values from `params`.
///
/// Placeholders with no matching entry are left as-is; entries with no
/// matching placeholder are ignored.
pub fn resolve(template: &str, params: &[(&str, &str)]) -> String {
    let mut path = template.to_owned();
    for (name, value) in params {
        path = path.replace(&format!(":{name}"), value);
    }
    path
}

/// Prefix a resolved path with the configured base address.
pub fn absolute(path: &str) -> String {
    format!("{}{path}", config::API_BASE_URL)
}
