//! Responsive breakpoint definitions for the Web UI.

/// Viewport widths strictly below this many pixels use the mobile layout.
pub const MOBILE_THRESHOLD: u32 = 768;

/// Whether `width` falls in the mobile range.
#[must_use]
pub const fn is_mobile_width(width: u32) -> bool {
    width < MOBILE_THRESHOLD
}

/// Classifies an optional viewport width; an unknown width is treated as desktop.
#[must_use]
pub const fn classify(width: Option<u32>) -> bool {
    match width {
        Some(width) => is_mobile_width(width),
        None => false,
    }
}
