//! Network layer: endpoint templates, the HTTP wrapper, and typed API
//! calls.

pub mod api;
pub mod endpoints;
pub mod http;
pub mod types;
