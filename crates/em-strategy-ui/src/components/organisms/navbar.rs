use yew::prelude::*;

use crate::components::atoms::{ButtonVariant, LogoMark, NavLink, PrimaryButton};
use crate::config::NavItem;
use crate::style::StyleSheet;
use crate::theme::{colors, space, weights};

/// Props for [`Navbar`].
#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    /// Brand name beside the logo mark.
    pub brand: AttrValue,
    /// Target of the brand link.
    #[prop_or(AttrValue::Static("/"))]
    pub home_href: AttrValue,
    /// Navigation entries.
    #[prop_or_default]
    pub links: Vec<NavItem>,
    /// Entry rendered as the current page.
    #[prop_or_default]
    pub active_href: Option<AttrValue>,
    /// Call-to-action label.
    pub cta_label: AttrValue,
    /// Call-to-action click handler.
    #[prop_or_default]
    pub on_cta: Callback<MouseEvent>,
    /// Hides the link list (narrow viewports).
    #[prop_or_default]
    pub compact: bool,
    /// Additional CSS classes.
    #[prop_or_default]
    pub class: Classes,
}

fn header_style(compact: bool) -> StyleSheet {
    let (vertical, horizontal) = if compact {
        (space(2), space(3))
    } else {
        (space(3), space(5))
    };
    StyleSheet::new()
        .set("display", "flex")
        .set("align-items", "center")
        .set("justify-content", "space-between")
        .px("gap", u32::from(space(3)))
        .set("padding", format!("{vertical}px {horizontal}px"))
        .color("background-color", colors::SURFACE)
        .set("border-bottom", format!("1px solid {}", colors::BORDER.hex))
}

fn brand_style() -> StyleSheet {
    StyleSheet::new()
        .set("display", "inline-flex")
        .set("align-items", "center")
        .px("gap", u32::from(space(1)))
        .set("text-decoration", "none")
        .color("color", colors::TEXT)
        .set("font-weight", weights::SEMIBOLD.to_string())
        .px("font-size", 18)
}

fn links_style() -> StyleSheet {
    StyleSheet::new()
        .set("display", "flex")
        .set("align-items", "center")
        .px("gap", u32::from(space(4)))
}

/// Page header: brand, navigation links, and a call-to-action.
#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let links = (!props.compact).then(|| {
        html! {
            <nav class="em-navbar__links" aria-label="Primary" style={links_style().render()}>
                { for props.links.iter().map(|item| {
                    let active = props.active_href.as_deref() == Some(item.href.as_str());
                    html! {
                        <NavLink key={item.href.clone()} href={item.href.clone()} active={active}>
                            {item.label.clone()}
                        </NavLink>
                    }
                }) }
            </nav>
        }
    });

    html! {
        <header
            class={classes!("em-navbar", props.compact.then_some("em-navbar--compact"), props.class.clone())}
            style={header_style(props.compact).render()}
        >
            <a class="em-navbar__brand" href={props.home_href.clone()} style={brand_style().render()}>
                <LogoMark title={props.brand.clone()} />
                <span>{props.brand.clone()}</span>
            </a>
            {links.unwrap_or_default()}
            <PrimaryButton variant={ButtonVariant::Navbar} onclick={props.on_cta.clone()}>
                {props.cta_label.clone()}
            </PrimaryButton>
        </header>
    }
}
