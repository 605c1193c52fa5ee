//! Stroke icon set shared by buttons, links, and cards.

use serde::Deserialize;
use yew::prelude::*;

/// Glyphs available to [`Icon`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconName {
    /// Right-pointing arrow for forward actions.
    ArrowRight,
    /// Rising line chart.
    ChartLine,
    /// Compass rose.
    Compass,
    /// Padlock.
    Lock,
    /// Envelope.
    Mail,
    /// `LinkedIn` wordmark square.
    Linkedin,
    /// Shield with a check mark.
    ShieldCheck,
    /// Two people.
    Users,
}

impl IconName {
    /// Stable identifier used in class names and configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ArrowRight => "arrow-right",
            Self::ChartLine => "chart-line",
            Self::Compass => "compass",
            Self::Lock => "lock",
            Self::Mail => "mail",
            Self::Linkedin => "linkedin",
            Self::ShieldCheck => "shield-check",
            Self::Users => "users",
        }
    }

    fn body(self) -> Html {
        match self {
            Self::ArrowRight => html! { <path d="M5 12h14m-6-6l6 6l-6 6" /> },
            Self::ChartLine => html! { <>
                <path d="M3 3v16a2 2 0 0 0 2 2h16" />
                <path d="m19 9l-5 5l-4-4l-3 3" />
            </> },
            Self::Compass => html! { <>
                <circle cx="12" cy="12" r="10" />
                <path d="m16.24 7.76l-2.12 6.36l-6.36 2.12l2.12-6.36z" />
            </> },
            Self::Lock => html! { <>
                <rect x="3" y="11" width="18" height="11" rx="2" ry="2" />
                <path d="M7 11V7a5 5 0 0 1 10 0v4" />
            </> },
            Self::Mail => html! { <>
                <rect x="2" y="4" width="20" height="16" rx="2" />
                <path d="m22 7l-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" />
            </> },
            Self::Linkedin => html! { <>
                <path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6M2 9h4v12H2z" />
                <circle cx="4" cy="4" r="2" />
            </> },
            Self::ShieldCheck => html! { <>
                <path d="M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z" />
                <path d="m9 12l2 2l4-4" />
            </> },
            Self::Users => html! { <>
                <path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2M16 3.128a4 4 0 0 1 0 7.744M22 21v-2a4 4 0 0 0-3-3.87" />
                <circle cx="9" cy="7" r="4" />
            </> },
        }
    }
}

/// Props for [`Icon`].
#[derive(Properties, PartialEq)]
pub struct IconProps {
    /// Glyph to draw.
    pub name: IconName,
    /// Edge length in pixels.
    #[prop_or(20)]
    pub size: u32,
    /// Accessible name; decorative when omitted.
    #[prop_or_default]
    pub title: Option<AttrValue>,
    /// Additional CSS classes.
    #[prop_or_default]
    pub class: Classes,
}

/// Inline SVG icon drawn with `currentColor` strokes.
#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    let size = props.size.to_string();
    let title = props.title.clone();
    let aria_hidden = title.is_none().then_some(AttrValue::from("true"));
    let role = title.is_some().then_some(AttrValue::from("img"));
    html! {
        <svg
            class={classes!("em-icon", format!("em-icon--{}", props.name.as_str()), props.class.clone())}
            width={size.clone()}
            height={size}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-linecap="round"
            stroke-linejoin="round"
            stroke-width="2"
            role={role}
            aria-hidden={aria_hidden}
            aria-label={title.clone()}
            focusable="false"
        >
            {title.map(|text| html! { <title>{text}</title> }).unwrap_or_default()}
            {props.name.body()}
        </svg>
    }
}
