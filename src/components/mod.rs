//! Reusable UI components.

pub mod article_card;
pub mod navbar;
pub mod require_session;
pub mod toast_host;
