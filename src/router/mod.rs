//! Route metadata and the navigation guard.

pub mod guard;
