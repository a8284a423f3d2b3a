//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `wiki`, `storage`, ...) so
//! individual pages can depend on small focused models. Each struct is
//! provided as an `RwSignal` context from the root component and only
//! mutated through its module's operations.

pub mod notifications;
pub mod session;
pub mod storage;
pub mod ui;
pub mod wiki;
