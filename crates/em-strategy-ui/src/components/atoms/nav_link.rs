use yew::prelude::*;

use crate::attrs::NativeAttrs;
use crate::style::StyleSheet;
use crate::theme::{colors, space, weights};

/// Inline style for a header navigation link.
#[must_use]
pub fn nav_link_style(active: bool) -> StyleSheet {
    StyleSheet::new()
        .color(
            "color",
            if active {
                colors::PRIMARY
            } else {
                colors::TEXT_MUTED
            },
        )
        .set("text-decoration", "none")
        .set(
            "font-weight",
            if active {
                weights::SEMIBOLD.to_string()
            } else {
                weights::MEDIUM.to_string()
            },
        )
        .px("font-size", 15)
        .set("padding", format!("{}px {}px", space(0), space(1)))
}

/// Props for [`NavLink`].
#[derive(Properties, PartialEq)]
pub struct NavLinkProps {
    /// Link target.
    pub href: AttrValue,
    /// Marks the link as the current page (`aria-current="page"`).
    #[prop_or_default]
    pub active: bool,
    /// Link text.
    #[prop_or_default]
    pub children: Children,
    /// Additional CSS classes.
    #[prop_or_default]
    pub class: Classes,
    /// Attributes forwarded to the `<a>` element.
    #[prop_or_default]
    pub attrs: NativeAttrs,
}

/// Plain anchor styled for the header navigation.
#[function_component(NavLink)]
pub fn nav_link(props: &NavLinkProps) -> Html {
    let current = props.active.then_some(AttrValue::Static("page"));
    let node = html! {
        <a
            class={classes!("em-nav-link", props.active.then_some("em-nav-link--active"), props.class.clone())}
            href={props.href.clone()}
            aria-current={current}
            style={nav_link_style(props.active).render()}
        >
            { for props.children.iter() }
        </a>
    };
    props.attrs.apply(node)
}
