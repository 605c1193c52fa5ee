use yew::prelude::*;

use crate::components::atoms::{IconLink, LogoMark};
use crate::config::SocialLink;
use crate::style::StyleSheet;
use crate::theme::{colors, space};

/// Props for [`Footer`].
#[derive(Properties, PartialEq)]
pub struct FooterProps {
    /// Brand name used as the logo's accessible name.
    pub brand: AttrValue,
    /// Copyright line.
    pub note: AttrValue,
    /// Icon links.
    #[prop_or_default]
    pub social: Vec<SocialLink>,
    /// Additional CSS classes.
    #[prop_or_default]
    pub class: Classes,
}

fn footer_style() -> StyleSheet {
    StyleSheet::new()
        .set("display", "flex")
        .set("flex-wrap", "wrap")
        .set("align-items", "center")
        .set("justify-content", "space-between")
        .px("gap", u32::from(space(3)))
        .set("padding", format!("{}px {}px", space(4), space(5)))
        .set("border-top", format!("1px solid {}", colors::BORDER.hex))
        .color("color", colors::TEXT_MUTED)
        .px("font-size", 14)
}

/// Page footer with the brand line and contact links.
#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let external = |href: &str| href.starts_with("http://") || href.starts_with("https://");
    html! {
        <footer class={classes!("em-footer", props.class.clone())} style={footer_style().render()}>
            <div class="em-footer__brand">
                <LogoMark size={24} title={props.brand.clone()} />
                <small>{props.note.clone()}</small>
            </div>
            <div class="em-footer__links">
                { for props.social.iter().map(|link| html! {
                    <IconLink
                        key={link.href.clone()}
                        href={link.href.clone()}
                        icon={link.icon}
                        label={link.label.clone()}
                        external={external(&link.href)}
                    />
                }) }
            </div>
        </footer>
    }
}
