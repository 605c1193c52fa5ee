use yew::prelude::*;

use super::icon::{Icon, IconName};
use crate::attrs::NativeAttrs;
use crate::style::StyleSheet;
use crate::theme::{colors, radius, space};

/// Props for [`IconLink`].
#[derive(Properties, PartialEq)]
pub struct IconLinkProps {
    /// Link target.
    pub href: AttrValue,
    /// Glyph shown in place of text.
    pub icon: IconName,
    /// Accessible name of the link.
    pub label: AttrValue,
    /// Opens in a new browsing context without leaking the opener.
    #[prop_or_default]
    pub external: bool,
    /// Glyph size in pixels.
    #[prop_or(20)]
    pub size: u32,
    /// Additional CSS classes.
    #[prop_or_default]
    pub class: Classes,
    /// Attributes forwarded to the `<a>` element.
    #[prop_or_default]
    pub attrs: NativeAttrs,
}

fn icon_link_style() -> StyleSheet {
    StyleSheet::new()
        .set("display", "inline-flex")
        .set("align-items", "center")
        .set("justify-content", "center")
        .px("padding", u32::from(space(1)))
        .px("border-radius", u32::from(radius(1)))
        .color("color", colors::TEXT_MUTED)
}

/// Icon-only anchor whose accessible name comes from `label`.
#[function_component(IconLink)]
pub fn icon_link(props: &IconLinkProps) -> Html {
    let target = props.external.then_some(AttrValue::Static("_blank"));
    let rel = props
        .external
        .then_some(AttrValue::Static("noreferrer noopener"));
    let node = html! {
        <a
            class={classes!("em-icon-link", props.class.clone())}
            href={props.href.clone()}
            aria-label={props.label.clone()}
            title={props.label.clone()}
            target={target}
            rel={rel}
            style={icon_link_style().render()}
        >
            <Icon name={props.icon} size={props.size} />
        </a>
    };
    props.attrs.apply(node)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::test_support::render;

    #[tokio::test]
    async fn label_becomes_the_accessible_name() {
        let html = render(|| {
            html! { <IconLink href="mailto:hello@example.com" icon={IconName::Mail} label="Email us" /> }
        })
        .await;
        assert!(html.contains(r#"aria-label="Email us""#), "{html}");
        assert!(html.contains(r#"title="Email us""#), "{html}");
        assert!(html.contains(r#"aria-hidden="true""#), "{html}");
        assert!(!html.contains("target="), "{html}");
    }

    #[tokio::test]
    async fn external_links_open_safely() {
        let html = render(|| {
            html! {
                <IconLink href="https://www.linkedin.com" icon={IconName::Linkedin} label="LinkedIn" external={true} />
            }
        })
        .await;
        assert!(html.contains(r#"target="_blank""#), "{html}");
        assert!(html.contains(r#"rel="noreferrer noopener""#), "{html}");
    }
}
