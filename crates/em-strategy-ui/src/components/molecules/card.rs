use yew::prelude::*;

use crate::style::StyleSheet;
use crate::theme::{colors, radius, space};

/// Surface style shared by every card.
#[must_use]
pub fn card_style() -> StyleSheet {
    StyleSheet::new()
        .color("background-color", colors::SURFACE)
        .set("border", format!("1px solid {}", colors::BORDER.hex))
        .px("border-radius", u32::from(radius(2)))
        .px("padding", u32::from(space(4)))
        .set("box-shadow", "0 1px 2px rgba(17, 24, 39, 0.06)")
}

/// Props for [`Card`].
#[derive(Properties, PartialEq)]
pub struct CardProps {
    /// Additional CSS classes.
    #[prop_or_default]
    pub class: Classes,
    /// Card body.
    #[prop_or_default]
    pub children: Children,
}

/// Bordered surface container.
#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    html! {
        <div class={classes!("em-card", props.class.clone())} style={card_style().render()}>
            { for props.children.iter() }
        </div>
    }
}
