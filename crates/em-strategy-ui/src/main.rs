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
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! EM Strategy UI wasm entry point and native stub fallback.

#[cfg(target_arch = "wasm32")]
fn main() -> Result<(), std::io::Error> {
    em_strategy_ui::run_app();
    Ok(())
}

/// Printed when the binary is started outside a browser.
#[cfg(not(target_arch = "wasm32"))]
const NATIVE_HINT: &str = "em-strategy-ui mounts into the `#root` element of a browser page \
(optionally configured by a `#em-strategy-config` JSON script); \
build it for wasm32 with `trunk build`.\n";

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), std::io::Error> {
    use std::io::{self, Write};

    io::stderr().lock().write_all(NATIVE_HINT.as_bytes())
}
