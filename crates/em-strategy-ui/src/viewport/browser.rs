use std::rc::Rc;

use super::{ResizeSubscription, ViewportSource};

/// The page's `window`, read through `innerWidth` and the `resize` event.
///
/// Off wasm32 (and in any context without a global `window`) the width is
/// unknown and subscriptions are inert.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserViewport;

#[cfg(target_arch = "wasm32")]
impl ViewportSource for BrowserViewport {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn width(&self) -> Option<u32> {
        let window = web_sys::window()?;
        match window.inner_width() {
            Ok(value) => value.as_f64().map(|width| width.max(0.0) as u32),
            Err(err) => {
                gloo::console::error!("viewport width unavailable", err);
                None
            }
        }
    }

    fn on_resize(&self, callback: Rc<dyn Fn()>) -> ResizeSubscription {
        let Some(window) = web_sys::window() else {
            return ResizeSubscription::inert();
        };
        let listener = gloo::events::EventListener::new(&window, "resize", move |_event| {
            callback();
        });
        ResizeSubscription::new(move || drop(listener))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl ViewportSource for BrowserViewport {
    fn width(&self) -> Option<u32> {
        None
    }

    fn on_resize(&self, _callback: Rc<dyn Fn()>) -> ResizeSubscription {
        ResizeSubscription::inert()
    }
}
