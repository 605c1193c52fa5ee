use yew::prelude::*;

use crate::attrs::NativeAttrs;
use crate::style::StyleSheet;
use crate::theme::{FONT_FAMILY, RADIUS_PILL, colors, radius, space, weights};

/// Visual presets for [`PrimaryButton`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Compact pill used as the header call-to-action.
    #[default]
    Navbar,
    /// Full-width block used to submit forms.
    Form,
}

impl ButtonVariant {
    /// Modifier used in the `em-button--*` class.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Navbar => "navbar",
            Self::Form => "form",
        }
    }
}

/// Declarations shared by every button atom.
pub(crate) fn button_base(disabled: bool) -> StyleSheet {
    StyleSheet::new()
        .set("display", "inline-flex")
        .set("align-items", "center")
        .set("justify-content", "center")
        .px("gap", u32::from(space(1)))
        .set("font-family", FONT_FAMILY)
        .set("line-height", "1.25")
        .set("cursor", if disabled { "not-allowed" } else { "pointer" })
        .set("opacity", if disabled { "0.6" } else { "1" })
}

/// Inline style for a primary button in `variant`.
#[must_use]
pub fn primary_button_style(variant: ButtonVariant, disabled: bool) -> StyleSheet {
    let base = button_base(disabled)
        .set("border", "none")
        .color("background-color", colors::PRIMARY)
        .color("color", colors::ON_PRIMARY);
    match variant {
        ButtonVariant::Navbar => base
            .set("padding", format!("{}px {}px", space(1), space(3)))
            .px("border-radius", u32::from(RADIUS_PILL))
            .set("font-weight", weights::MEDIUM.to_string())
            .px("font-size", 14),
        ButtonVariant::Form => base
            .set("padding", format!("{}px {}px", space(2), space(4)))
            .px("border-radius", u32::from(radius(1)))
            .set("font-weight", weights::SEMIBOLD.to_string())
            .px("font-size", 16)
            .set("width", "100%"),
    }
}

/// Props for [`PrimaryButton`].
#[derive(Properties, PartialEq)]
pub struct PrimaryButtonProps {
    /// Visual preset.
    #[prop_or_default]
    pub variant: ButtonVariant,
    /// Leading icon.
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
    /// Click handler; the browser suppresses it while disabled.
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    /// Additional CSS classes.
    #[prop_or_default]
    pub class: Classes,
    /// Attributes forwarded to the `<button>` element.
    #[prop_or_default]
    pub attrs: NativeAttrs,
}

/// Filled button for the main action of a header or form.
#[function_component(PrimaryButton)]
pub fn primary_button(props: &PrimaryButtonProps) -> Html {
    let classes = classes!(
        "em-button",
        "em-button--primary",
        format!("em-button--{}", props.variant.as_str()),
        props.class.clone()
    );
    let node = html! {
        <button
            class={classes}
            type={props.button_type.clone()}
            disabled={props.disabled}
            style={primary_button_style(props.variant, props.disabled).render()}
            onclick={props.onclick.clone()}
        >
            {props.icon.clone().map(|icon| html! {
                <span class="em-button__icon" aria-hidden="true">{icon}</span>
            }).unwrap_or_default()}
            { for props.children.iter() }
        </button>
    };
    props.attrs.apply(node)
}
