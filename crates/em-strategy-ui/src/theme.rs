//! Brand palette and design tokens for the EM Strategy Web UI.
//!
//! Tokens are defined once here and imported by value into the per-component
//! style functions; nothing else in the crate spells out a hex value or pixel size.

/// A single color token with a stable name and hex value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorToken {
    /// Semantic identifier (e.g., "primary").
    pub name: &'static str,
    /// Hex RGB value.
    pub hex: &'static str,
}

/// Shared color palette consumed by every styled component.
pub mod colors {
    use super::ColorToken;

    /// Brand accent used for primary actions and the logo mark.
    pub const PRIMARY: ColorToken = ColorToken {
        name: "primary",
        hex: "#1F4FD8",
    };
    /// Hover shade of [`PRIMARY`].
    pub const PRIMARY_DARK: ColorToken = ColorToken {
        name: "primary-dark",
        hex: "#173BA3",
    };
    /// Tinted background for icon badges.
    pub const PRIMARY_SOFT: ColorToken = ColorToken {
        name: "primary-soft",
        hex: "#E8EEFC",
    };
    /// Body text.
    pub const TEXT: ColorToken = ColorToken {
        name: "text",
        hex: "#111827",
    };
    /// Secondary text and captions.
    pub const TEXT_MUTED: ColorToken = ColorToken {
        name: "text-muted",
        hex: "#6B7280",
    };
    /// Hairlines and control outlines.
    pub const BORDER: ColorToken = ColorToken {
        name: "border",
        hex: "#E5E7EB",
    };
    /// Page background.
    pub const BACKGROUND: ColorToken = ColorToken {
        name: "background",
        hex: "#F9FAFB",
    };
    /// Card and header surface.
    pub const SURFACE: ColorToken = ColorToken {
        name: "surface",
        hex: "#FFFFFF",
    };
    /// Foreground on top of [`PRIMARY`].
    pub const ON_PRIMARY: ColorToken = ColorToken {
        name: "on-primary",
        hex: "#FFFFFF",
    };

    /// Every palette entry, in declaration order.
    pub const ALL: [ColorToken; 9] = [
        PRIMARY,
        PRIMARY_DARK,
        PRIMARY_SOFT,
        TEXT,
        TEXT_MUTED,
        BORDER,
        BACKGROUND,
        SURFACE,
        ON_PRIMARY,
    ];
}

/// Spacing scale in pixels.
pub const SPACING: [u8; 6] = [4, 8, 12, 16, 24, 32];
/// Corner radius tokens in pixels.
pub const RADII: [u8; 3] = [4, 8, 12];
/// Radius used for pill-shaped controls.
pub const RADIUS_PILL: u16 = 999;

/// Font weights used by the type scale.
pub mod weights {
    /// Body copy.
    pub const REGULAR: u16 = 400;
    /// Navigation and compact controls.
    pub const MEDIUM: u16 = 500;
    /// Form actions and headings.
    pub const SEMIBOLD: u16 = 600;
}

/// Font stack shared by all text.
pub const FONT_FAMILY: &str = "Inter, system-ui, -apple-system, 'Segoe UI', sans-serif";

/// Pixel value from the spacing scale, clamped to the largest step.
#[must_use]
pub fn space(step: usize) -> u8 {
    SPACING
        .get(step)
        .copied()
        .unwrap_or(SPACING[SPACING.len() - 1])
}

/// Pixel value from the radius scale, clamped to the largest step.
#[must_use]
pub fn radius(step: usize) -> u8 {
    RADII.get(step).copied().unwrap_or(RADII[RADII.len() - 1])
}
