//! Small browser-facing helpers.

pub mod auth_code;
