//! Inline style objects built from the theme tokens.

use std::fmt::Write as _;

use crate::theme::ColorToken;

/// Ordered CSS declarations rendered into an inline `style` attribute.
///
/// Setting a property twice replaces the earlier value in place, so callers can
/// layer overrides on top of a base style without producing duplicate
/// declarations.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleSheet {
    rules: Vec<(&'static str, String)>,
}

impl StyleSheet {
    /// Empty declaration list.
    #[must_use]
    pub const fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Sets `property` to `value`.
    #[must_use]
    pub fn set(mut self, property: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        if let Some(rule) = self.rules.iter_mut().find(|(name, _)| *name == property) {
            rule.1 = value;
        } else {
            self.rules.push((property, value));
        }
        self
    }

    /// Sets `property` to a pixel length.
    #[must_use]
    pub fn px(self, property: &'static str, value: u32) -> Self {
        self.set(property, format!("{value}px"))
    }

    /// Sets `property` to a palette color.
    #[must_use]
    pub fn color(self, property: &'static str, token: ColorToken) -> Self {
        self.set(property, token.hex)
    }

    /// Current value of `property`, if set.
    #[must_use]
    pub fn get(&self, property: &str) -> Option<&str> {
        self.rules
            .iter()
            .find(|(name, _)| *name == property)
            .map(|(_, value)| value.as_str())
    }

    /// Whether no declarations were set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Renders `prop: value;` pairs separated by single spaces.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (idx, (property, value)) in self.rules.iter().enumerate() {
            if idx > 0 {
                out.push(' ');
            }
            let _ = write!(out, "{property}: {value};");
        }
        out
    }
}
