use yew::prelude::*;

use super::primary_button::button_base;
use crate::attrs::NativeAttrs;
use crate::style::StyleSheet;
use crate::theme::{colors, radius, space, weights};

/// Inline style for an outlined secondary button.
#[must_use]
pub fn secondary_button_style(disabled: bool) -> StyleSheet {
    button_base(disabled)
        .set("border", format!("1px solid {}", colors::BORDER.hex))
        .color("background-color", colors::SURFACE)
        .color("color", colors::TEXT)
        .set("padding", format!("{}px {}px", space(2) - 2, space(4) - 4))
        .px("border-radius", u32::from(radius(1)))
        .set("font-weight", weights::MEDIUM.to_string())
        .px("font-size", 15)
}

/// Props for [`SecondaryButton`].
#[derive(Properties, PartialEq)]
pub struct SecondaryButtonProps {
    /// Node rendered before the label.
    #[prop_or_default]
    pub icon: Option<Html>,
    /// Button label.
    #[prop_or_default]
    pub children: Children,
    /// Native `disabled` flag.
    #[prop_or_default]
    pub disabled: bool,
    /// Native `type` attribute.
    #[prop_or(AttrValue::Static("button"))]
    pub button_type: AttrValue,
    /// Click handler.
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    /// Additional CSS classes.
    #[prop_or_default]
    pub class: Classes,
    /// Attributes forwarded to the `<button>` element.
    #[prop_or_default]
    pub attrs: NativeAttrs,
}

/// Outlined button for alternative actions (e.g., third-party sign in).
#[function_component(SecondaryButton)]
pub fn secondary_button(props: &SecondaryButtonProps) -> Html {
    let node = html! {
        <button
            class={classes!("em-button", "em-button--secondary", props.class.clone())}
            type={props.button_type.clone()}
            disabled={props.disabled}
            style={secondary_button_style(props.disabled).render()}
            onclick={props.onclick.clone()}
        >
            {props.icon.clone().unwrap_or_default()}
            { for props.children.iter() }
        </button>
    };
    props.attrs.apply(node)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::test_support::{count, render};

    #[tokio::test]
    async fn supplied_icon_is_a_descendant() {
        let html = render(|| {
            html! {
                <SecondaryButton icon={html! { <img class="provider-logo" src="/g.svg" alt="" /> }}>
                    {"Continue with Google"}
                </SecondaryButton>
            }
        })
        .await;
        assert!(html.starts_with("<button"), "{html}");
        let button_end = html.rfind("</button>").expect("closing tag");
        let icon_at = html.find("provider-logo").expect("icon rendered");
        assert!(icon_at < button_end, "{html}");
        assert_eq!(count(&html, "provider-logo"), 1);
    }

    #[tokio::test]
    async fn omitted_icon_renders_only_the_label() {
        let html = render(|| html! { <SecondaryButton>{"Cancel"}</SecondaryButton> }).await;
        assert!(!html.contains("<img"), "{html}");
        assert!(!html.contains("<svg"), "{html}");
        assert!(html.contains(">Cancel</button>"), "{html}");
    }

    #[tokio::test]
    async fn forwards_aria_attributes() {
        let html = render(|| {
            html! {
                <SecondaryButton attrs={NativeAttrs::from([("aria-pressed", "true")])}>{"Toggle"}</SecondaryButton>
            }
        })
        .await;
        assert!(html.contains(r#"aria-pressed="true""#), "{html}");
    }

    #[test]
    fn outlined_style_uses_surface_tokens() {
        let style = secondary_button_style(false);
        assert_eq!(style.get("border"), Some("1px solid #E5E7EB"));
        assert_eq!(style.get("background-color"), Some(colors::SURFACE.hex));
        assert_eq!(style.get("padding"), Some("10px 20px"));
    }
}
