use std::fmt;
use std::rc::Rc;

use yew::prelude::*;

use super::{BrowserViewport, ViewportSource, ViewportWatcher};
use crate::breakpoints::classify;

/// Viewport source shared with a component subtree.
#[derive(Clone)]
pub struct ViewportContext {
    source: Rc<dyn ViewportSource>,
}

impl ViewportContext {
    /// Context backed by `source`.
    pub fn new(source: impl ViewportSource + 'static) -> Self {
        Self {
            source: Rc::new(source),
        }
    }

    /// Context sharing an existing source handle.
    #[must_use]
    pub fn from_rc(source: Rc<dyn ViewportSource>) -> Self {
        Self { source }
    }

    /// Context backed by the page window.
    #[must_use]
    pub fn browser() -> Self {
        Self::new(BrowserViewport)
    }

    /// Underlying source.
    #[must_use]
    pub const fn source(&self) -> &Rc<dyn ViewportSource> {
        &self.source
    }
}

impl PartialEq for ViewportContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.source, &other.source)
    }
}

impl fmt::Debug for ViewportContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewportContext")
            .field("width", &self.source.width())
            .finish()
    }
}

/// Props for [`ViewportProvider`].
#[derive(Properties, PartialEq)]
pub struct ViewportProviderProps {
    /// Source handed to every [`use_is_mobile`] call below this provider.
    pub context: ViewportContext,
    /// Subtree.
    #[prop_or_default]
    pub children: Children,
}

/// Overrides the viewport source for a subtree.
#[function_component(ViewportProvider)]
pub fn viewport_provider(props: &ViewportProviderProps) -> Html {
    html! {
        <ContextProvider<ViewportContext> context={props.context.clone()}>
            { for props.children.iter() }
        </ContextProvider<ViewportContext>>
    }
}

/// Whether the viewport is narrower than the mobile threshold.
///
/// Reads the nearest [`ViewportProvider`] and falls back to the browser window.
/// A resize listener is held for as long as the calling component is mounted.
#[hook]
pub fn use_is_mobile() -> bool {
    let fallback = use_memo(|_| ViewportContext::browser(), ());
    let context = use_context::<ViewportContext>().unwrap_or_else(|| (*fallback).clone());
    let is_mobile = {
        let source = Rc::clone(context.source());
        use_state(move || classify(source.width()))
    };

    {
        let is_mobile = is_mobile.clone();
        use_effect_with_deps(
            move |context: &ViewportContext| {
                let seed = *is_mobile;
                let watcher = ViewportWatcher::attach(context.source(), seed, move |next| {
                    is_mobile.set(next);
                });
                move || drop(watcher)
            },
            context,
        );
    }

    *is_mobile
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::test_support::render;
    use crate::viewport::ManualViewport;

    #[function_component(MobileFlag)]
    fn mobile_flag() -> Html {
        let is_mobile = use_is_mobile();
        html! { <span data-mobile={is_mobile.to_string()} /> }
    }

    #[tokio::test]
    async fn narrow_provider_reports_mobile() {
        let html = render(|| {
            html! {
                <ViewportProvider context={ViewportContext::new(ManualViewport::with_width(375))}>
                    <MobileFlag />
                </ViewportProvider>
            }
        })
        .await;
        assert!(html.contains(r#"data-mobile="true""#), "{html}");
    }

    #[tokio::test]
    async fn threshold_width_reports_desktop() {
        let html = render(|| {
            html! {
                <ViewportProvider context={ViewportContext::new(ManualViewport::with_width(768))}>
                    <MobileFlag />
                </ViewportProvider>
            }
        })
        .await;
        assert!(html.contains(r#"data-mobile="false""#), "{html}");
    }

    #[tokio::test]
    async fn without_window_defaults_to_desktop() {
        let html = render(|| html! { <MobileFlag /> }).await;
        assert!(html.contains(r#"data-mobile="false""#), "{html}");
    }

    #[test]
    fn contexts_compare_by_source_identity() {
        let shared: Rc<dyn ViewportSource> = Rc::new(ManualViewport::with_width(10));
        let a = ViewportContext::from_rc(Rc::clone(&shared));
        let b = ViewportContext::from_rc(shared);
        assert_eq!(a, b);
        assert_ne!(a, ViewportContext::browser());
    }
}
