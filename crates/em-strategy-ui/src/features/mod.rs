//! Feature surfaces mounted by the router.

pub mod auth;
