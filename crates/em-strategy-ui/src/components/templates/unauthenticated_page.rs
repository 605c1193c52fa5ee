use yew::prelude::*;

use crate::components::organisms::{Footer, Navbar};
use crate::config::SiteConfig;
use crate::style::StyleSheet;
use crate::theme::{FONT_FAMILY, colors, space};
use crate::viewport::use_is_mobile;

/// Props for [`UnauthenticatedPage`].
#[derive(Properties, PartialEq)]
pub struct UnauthenticatedPageProps {
    /// Page body placed between header and footer.
    #[prop_or_default]
    pub children: Children,
    /// Header call-to-action handler.
    #[prop_or_default]
    pub on_cta: Callback<MouseEvent>,
    /// Navigation entry rendered as the current page.
    #[prop_or_default]
    pub active_href: Option<AttrValue>,
}

fn page_style() -> StyleSheet {
    StyleSheet::new()
        .set("display", "flex")
        .set("flex-direction", "column")
        .set("min-height", "100vh")
        .color("background-color", colors::BACKGROUND)
        .color("color", colors::TEXT)
        .set("font-family", FONT_FAMILY)
}

fn main_style(is_mobile: bool) -> StyleSheet {
    let padding = if is_mobile { space(3) } else { space(5) };
    StyleSheet::new()
        .set("flex", "1")
        .set("width", "100%")
        .set("max-width", "1120px")
        .set("margin", "0 auto")
        .set("box-sizing", "border-box")
        .px("padding", u32::from(padding))
}

/// Header + content + footer frame for pages shown before sign-in.
#[function_component(UnauthenticatedPage)]
pub fn unauthenticated_page(props: &UnauthenticatedPageProps) -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let is_mobile = use_is_mobile();

    html! {
        <div class={classes!("em-page", is_mobile.then_some("em-page--mobile"))} style={page_style().render()}>
            <Navbar
                brand={config.brand.clone()}
                home_href={config.home_href.clone()}
                links={config.nav.clone()}
                active_href={props.active_href.clone()}
                cta_label={config.cta_label.clone()}
                on_cta={props.on_cta.clone()}
                compact={is_mobile}
            />
            <main class="em-page__main" style={main_style(is_mobile).render()}>
                { for props.children.iter() }
            </main>
            <Footer brand={config.brand.clone()} note={config.footer_note.clone()} social={config.social.clone()} />
        </div>
    }
}
