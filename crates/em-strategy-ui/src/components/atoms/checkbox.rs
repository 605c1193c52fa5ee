use yew::prelude::*;

use crate::attrs::NativeAttrs;
use crate::style::StyleSheet;
use crate::theme::{colors, space};

/// Props for [`Checkbox`].
#[derive(Properties, PartialEq)]
pub struct CheckboxProps {
    /// Visible label; also the accessible name of the input.
    pub label: AttrValue,
    /// Checked state.
    #[prop_or_default]
    pub checked: bool,
    /// Native `disabled` flag.
    #[prop_or_default]
    pub disabled: bool,
    /// Form field name.
    #[prop_or_default]
    pub name: Option<AttrValue>,
    /// Emits the new checked state.
    #[prop_or_default]
    pub onchange: Callback<bool>,
    /// Additional CSS classes on the wrapping label.
    #[prop_or_default]
    pub class: Classes,
    /// Attributes forwarded to the `<input>` element.
    #[prop_or_default]
    pub attrs: NativeAttrs,
}

fn label_style() -> StyleSheet {
    StyleSheet::new()
        .set("display", "inline-flex")
        .set("align-items", "center")
        .px("gap", u32::from(space(1)))
        .color("color", colors::TEXT)
        .px("font-size", 14)
        .set("cursor", "pointer")
}

fn input_style() -> StyleSheet {
    StyleSheet::new()
        .px("width", 16)
        .px("height", 16)
        .set("accent-color", colors::PRIMARY.hex)
}

/// Labelled checkbox input.
#[function_component(Checkbox)]
pub fn checkbox(props: &CheckboxProps) -> Html {
    let onchange = {
        let onchange = props.onchange.clone();
        Callback::from(move |event: Event| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                onchange.emit(input.checked());
            }
        })
    };

    let input = props.attrs.apply(html! {
        <input
            type="checkbox"
            class="em-checkbox__input"
            name={props.name.clone()}
            checked={props.checked}
            disabled={props.disabled}
            style={input_style().render()}
            onchange={onchange}
        />
    });

    html! {
        <label class={classes!("em-checkbox", props.class.clone())} style={label_style().render()}>
            {input}
            <span class="em-checkbox__label">{props.label.clone()}</span>
        </label>
    }
}
