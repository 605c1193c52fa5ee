#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! EM Strategy Web UI.
//!
//! Presentational components (atoms through page templates), the shared style
//! tokens they are drawn with, the responsive `use_is_mobile` hook, and the
//! client-side router. The crate builds natively for tests and server-side
//! rendering; the browser entry point is only compiled for wasm32.

pub mod app;
pub mod attrs;
pub mod breakpoints;
pub mod components;
pub mod config;
pub mod error;
pub mod features;
pub mod style;
pub mod theme;
pub mod viewport;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod test_support;

pub use app::{AppRouter, EmStrategyApp, Route};
#[cfg(target_arch = "wasm32")]
pub use app::run_app;
pub use viewport::use_is_mobile;
