use yew::prelude::*;

use super::card::Card;
use crate::components::atoms::{Icon, IconName};
use crate::style::StyleSheet;
use crate::theme::{colors, radius, space, weights};

/// Props for [`InfoCard`].
#[derive(Properties, PartialEq)]
pub struct InfoCardProps {
    /// Badge glyph.
    pub icon: IconName,
    /// Heading.
    pub title: AttrValue,
    /// Supporting copy.
    pub description: AttrValue,
    /// Additional CSS classes.
    #[prop_or_default]
    pub class: Classes,
    /// Extra content below the description.
    #[prop_or_default]
    pub children: Children,
}

fn badge_style() -> StyleSheet {
    StyleSheet::new()
        .set("display", "inline-flex")
        .set("align-items", "center")
        .set("justify-content", "center")
        .px("width", 40)
        .px("height", 40)
        .px("border-radius", u32::from(radius(1)))
        .color("background-color", colors::PRIMARY_SOFT)
        .color("color", colors::PRIMARY)
        .px("margin-bottom", u32::from(space(2)))
}

fn title_style() -> StyleSheet {
    StyleSheet::new()
        .set("margin", "0")
        .px("font-size", 18)
        .set("font-weight", weights::SEMIBOLD.to_string())
        .color("color", colors::TEXT)
}

fn description_style() -> StyleSheet {
    StyleSheet::new()
        .set("margin", format!("{}px 0 0", space(1)))
        .px("font-size", 15)
        .set("font-weight", weights::REGULAR.to_string())
        .set("line-height", "1.5")
        .color("color", colors::TEXT_MUTED)
}

/// Card with an icon badge, a heading, and a short description.
#[function_component(InfoCard)]
pub fn info_card(props: &InfoCardProps) -> Html {
    html! {
        <Card class={classes!("em-info-card", props.class.clone())}>
            <span class="em-info-card__badge" style={badge_style().render()}>
                <Icon name={props.icon} size={22} />
            </span>
            <h3 class="em-info-card__title" style={title_style().render()}>{props.title.clone()}</h3>
            <p class="em-info-card__description" style={description_style().render()}>
                {props.description.clone()}
            </p>
            { for props.children.iter() }
        </Card>
    }
}
