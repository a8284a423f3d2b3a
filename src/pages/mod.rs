//! Routed page components.

pub mod create;
pub mod edit;
pub mod home;
pub mod login;
pub mod share;
pub mod signup;
pub mod storage;
pub mod wiki;
