//! Server-side rendering helpers for markup assertions in unit tests.

use yew::prelude::*;
use yew::ServerRenderer;

#[derive(Properties, PartialEq)]
pub(crate) struct ProbeProps {
    pub(crate) view: Html,
}

#[function_component(Probe)]
fn probe(props: &ProbeProps) -> Html {
    props.view.clone()
}

/// Renders the markup produced by `view` to an HTML string without hydration markers.
pub(crate) async fn render(view: fn() -> Html) -> String {
    ServerRenderer::<Probe>::with_props(move || ProbeProps { view: view() })
        .hydratable(false)
        .render()
        .await
}

/// Number of non-overlapping occurrences of `needle` in `haystack`.
pub(crate) fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}
