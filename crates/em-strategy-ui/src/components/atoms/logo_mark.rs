use yew::prelude::*;

use crate::style::StyleSheet;
use crate::theme::colors;

/// Accessible name used when no title is supplied.
pub const DEFAULT_LOGO_TITLE: &str = "EM Strategy";
/// Edge length in pixels used when no size is supplied.
pub const DEFAULT_LOGO_SIZE: u32 = 32;

/// Props for [`LogoMark`].
#[derive(Properties, PartialEq)]
pub struct LogoMarkProps {
    /// Edge length in pixels.
    #[prop_or(DEFAULT_LOGO_SIZE)]
    pub size: u32,
    /// Accessible name.
    #[prop_or(AttrValue::Static(DEFAULT_LOGO_TITLE))]
    pub title: AttrValue,
    /// Additional CSS classes.
    #[prop_or_default]
    pub class: Classes,
}

/// Inline box style for a mark of `size` pixels.
#[must_use]
pub fn logo_style(size: u32) -> StyleSheet {
    StyleSheet::new()
        .px("width", size)
        .px("height", size)
        .set("display", "inline-block")
        .set("flex-shrink", "0")
}

/// Brand mark used in the navbar and footer.
#[function_component(LogoMark)]
pub fn logo_mark(props: &LogoMarkProps) -> Html {
    let size = props.size.to_string();
    html! {
        <svg
            class={classes!("em-logo", props.class.clone())}
            width={size.clone()}
            height={size}
            style={logo_style(props.size).render()}
            viewBox="0 0 64 64"
            role="img"
            aria-label={props.title.clone()}
        >
            <title>{props.title.clone()}</title>
            <rect width="64" height="64" rx="14" fill={colors::PRIMARY.hex} />
            <path
                d="M14 18h20v6H21v5h11v6H21v5h13v6H14z"
                fill={colors::ON_PRIMARY.hex}
            />
            <path
                d="M37 46V18h6l4 10l4-10h6v28h-6V31l-4 9l-4-9v15z"
                fill={colors::ON_PRIMARY.hex}
            />
        </svg>
    }
}
