//! Site configuration: brand copy and link targets for the page shell.
//!
//! # Design
//! - [`SiteConfig::default`] carries the shipped copy, so the shell renders with
//!   no configuration at all.
//! - The host page may embed a JSON document in
//!   `<script id="em-strategy-config" type="application/json">`; any subset of
//!   fields overrides the defaults.
//! - Invalid documents are reported through [`ConfigError`] and the defaults are
//!   used instead; configuration problems never surface in the UI.

use serde::Deserialize;
use serde_json::Value;

use crate::components::atoms::IconName;
use crate::error::{ConfigError, ConfigResult};

/// Element id of the embedded configuration document.
pub const CONFIG_ELEMENT_ID: &str = "em-strategy-config";

const DOCUMENT_FIELD: &str = "<document>";

/// Header navigation entry.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct NavItem {
    /// Link text.
    pub label: String,
    /// Link target.
    pub href: String,
}

/// Icon-only link shown in the footer.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SocialLink {
    /// Glyph.
    pub icon: IconName,
    /// Accessible name.
    pub label: String,
    /// Link target.
    pub href: String,
}

/// Brand copy and links consumed by the page shell.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Brand name shown beside the logo mark.
    pub brand: String,
    /// Target of the brand link.
    pub home_href: String,
    /// Header navigation.
    pub nav: Vec<NavItem>,
    /// Label of the header call-to-action button.
    pub cta_label: String,
    /// Footer copyright line.
    pub footer_note: String,
    /// Footer icon links.
    pub social: Vec<SocialLink>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: "EM Strategy".to_string(),
            home_href: "/".to_string(),
            nav: vec![
                NavItem {
                    label: "Services".to_string(),
                    href: "#services".to_string(),
                },
                NavItem {
                    label: "Approach".to_string(),
                    href: "#approach".to_string(),
                },
                NavItem {
                    label: "Contact".to_string(),
                    href: "#contact".to_string(),
                },
            ],
            cta_label: "Book a consultation".to_string(),
            footer_note: "© EM Strategy. All rights reserved.".to_string(),
            social: vec![
                SocialLink {
                    icon: IconName::Mail,
                    label: "Email EM Strategy".to_string(),
                    href: "mailto:contact@emstrategy.com".to_string(),
                },
                SocialLink {
                    icon: IconName::Linkedin,
                    label: "EM Strategy on LinkedIn".to_string(),
                    href: "https://www.linkedin.com/company/em-strategy".to_string(),
                },
            ],
        }
    }
}

impl SiteConfig {
    /// Parses a JSON override document on top of the defaults and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields and
    /// [`ConfigError::InvalidField`] when the document is not an object or a
    /// value fails validation.
    pub fn from_json(raw: &str) -> ConfigResult<Self> {
        // Serde also accepts a struct as a positional array.
        let Value::Object(fields) = serde_json::from_str::<Value>(raw)? else {
            return Err(ConfigError::InvalidField {
                field: DOCUMENT_FIELD.to_string(),
                reason: "must be a JSON object",
            });
        };
        let config: Self = serde_json::from_value(Value::Object(fields))?;
        config.validate()?;
        Ok(config)
    }

    /// Resolves the optional embedded document; blank or missing means defaults.
    ///
    /// # Errors
    ///
    /// Propagates [`SiteConfig::from_json`] failures.
    pub fn resolve(raw: Option<&str>) -> ConfigResult<Self> {
        match raw.map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some(raw) => Self::from_json(raw),
        }
    }

    /// Checks the values the shell cannot render sensibly.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidField`] naming the first offending field.
    pub fn validate(&self) -> ConfigResult<()> {
        require("brand", &self.brand)?;
        require("home_href", &self.home_href)?;
        require("cta_label", &self.cta_label)?;
        for (idx, item) in self.nav.iter().enumerate() {
            require_indexed("nav", idx, "label", &item.label)?;
            require_indexed("nav", idx, "href", &item.href)?;
        }
        for (idx, link) in self.social.iter().enumerate() {
            require_indexed("social", idx, "label", &link.label)?;
            require_indexed("social", idx, "href", &link.href)?;
        }
        Ok(())
    }
}

fn require(field: &str, value: &str) -> ConfigResult<()> {
    if value.trim().is_empty() {
        return Err(ConfigError::InvalidField {
            field: field.to_string(),
            reason: "must not be empty",
        });
    }
    Ok(())
}

fn require_indexed(list: &str, idx: usize, field: &str, value: &str) -> ConfigResult<()> {
    require(&format!("{list}[{idx}].{field}"), value)
}

/// Reads the embedded configuration document, falling back to defaults.
#[cfg(target_arch = "wasm32")]
#[must_use]
pub fn load_from_document() -> SiteConfig {
    let raw = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());
    match SiteConfig::resolve(raw.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            gloo::console::error!("site configuration ignored", err.to_string());
            SiteConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = SiteConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.brand, "EM Strategy");
        assert_eq!(config.nav.len(), 3);
    }

    #[test]
    fn partial_document_overrides_only_named_fields() {
        let config = SiteConfig::from_json(
            r#"{"cta_label":"Get started","nav":[{"label":"Pricing","href":"/pricing"}]}"#,
        )
        .expect("valid override");
        assert_eq!(config.cta_label, "Get started");
        assert_eq!(
            config.nav,
            [NavItem {
                label: "Pricing".into(),
                href: "/pricing".into()
            }]
        );
        assert_eq!(config.brand, SiteConfig::default().brand);
        assert_eq!(config.social, SiteConfig::default().social);
    }

    #[test]
    fn social_icons_use_icon_identifiers() {
        let config = SiteConfig::from_json(
            r#"{"social":[{"icon":"shield-check","label":"Security","href":"/security"}]}"#,
        )
        .expect("valid social override");
        assert_eq!(config.social[0].icon, IconName::ShieldCheck);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = SiteConfig::from_json("{brand:").expect_err("must fail");
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = SiteConfig::from_json(r#"{"theme":"dark"}"#).expect_err("must fail");
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn empty_values_name_the_offending_field() {
        let err = SiteConfig::from_json(r#"{"nav":[{"label":"Blog","href":" "}]}"#)
            .expect_err("must fail");
        match err {
            ConfigError::InvalidField { field, reason } => {
                assert_eq!(field, "nav[0].href");
                assert_eq!(reason, "must not be empty");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(SiteConfig::from_json(r#"{"brand":""}"#).is_err());
    }

    #[test]
    fn blank_or_missing_document_means_defaults() {
        assert_eq!(SiteConfig::resolve(None).ok(), Some(SiteConfig::default()));
        assert_eq!(
            SiteConfig::resolve(Some("  \n ")).ok(),
            Some(SiteConfig::default())
        );
        assert!(SiteConfig::resolve(Some("[]")).is_err());
    }

    #[test]
    fn positional_arrays_are_not_documents() {
        for raw in [r#"["Acme Advisory", "/home"]"#, "[]", r#""EM""#, "42", "null"] {
            match SiteConfig::from_json(raw) {
                Err(ConfigError::InvalidField { field, reason }) => {
                    assert_eq!(field, DOCUMENT_FIELD, "{raw}");
                    assert_eq!(reason, "must be a JSON object", "{raw}");
                }
                other => panic!("{raw} accepted or misreported: {other:?}"),
            }
        }
    }
}
