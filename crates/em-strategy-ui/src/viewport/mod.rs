//! Viewport size capability and the mobile classification built on top of it.
//!
//! # Design
//! - [`ViewportSource`] abstracts the two things the layout needs from the
//!   window: the current width and a resize subscription. The browser window is
//!   one implementation; [`ManualViewport`] drives the same contract by hand.
//! - [`ViewportWatcher`] owns one subscription and reclassifies synchronously on
//!   every resize event, reporting only transitions.
//! - [`use_is_mobile`] ties a watcher to a component's lifetime.

mod browser;
mod hook;
mod manual;

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use crate::breakpoints::classify;

pub use browser::BrowserViewport;
pub use hook::{ViewportContext, ViewportProvider, ViewportProviderProps, use_is_mobile};
pub use manual::ManualViewport;

/// Width query plus resize notifications.
pub trait ViewportSource {
    /// Current layout width in CSS pixels, or `None` when no viewport exists.
    fn width(&self) -> Option<u32>;

    /// Registers `callback` to run after every resize. The listener stays
    /// registered until the returned subscription is dropped.
    fn on_resize(&self, callback: Rc<dyn Fn()>) -> ResizeSubscription;
}

/// Guard for a registered resize listener; dropping it deregisters the listener.
#[must_use = "dropping the subscription removes the listener immediately"]
pub struct ResizeSubscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl ResizeSubscription {
    /// Subscription that runs `release` when dropped.
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Subscription with nothing to release (no viewport to listen to).
    pub const fn inert() -> Self {
        Self { release: None }
    }
}

impl Drop for ResizeSubscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl fmt::Debug for ResizeSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResizeSubscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

/// Keeps a mobile/desktop classification in sync with a [`ViewportSource`].
#[derive(Debug)]
pub struct ViewportWatcher {
    current: Rc<Cell<bool>>,
    _subscription: ResizeSubscription,
}

impl ViewportWatcher {
    /// Subscribes to `source` starting from the `seed` classification.
    ///
    /// `on_change` runs synchronously inside the resize notification, and only
    /// when the new classification differs from the previous one. The source is
    /// re-read once right after subscribing so a resize that landed between
    /// seeding and attaching is not lost.
    pub fn attach<F>(source: &Rc<dyn ViewportSource>, seed: bool, on_change: F) -> Self
    where
        F: Fn(bool) + 'static,
    {
        let current = Rc::new(Cell::new(seed));
        let reclassify: Rc<dyn Fn()> = {
            let current = Rc::clone(&current);
            let source = Rc::downgrade(source);
            Rc::new(move || {
                let Some(source) = source.upgrade() else {
                    return;
                };
                let next = classify(source.width());
                if current.replace(next) != next {
                    on_change(next);
                }
            })
        };
        let subscription = source.on_resize(Rc::clone(&reclassify));
        reclassify();
        Self {
            current,
            _subscription: subscription,
        }
    }

    /// Latest classification.
    #[must_use]
    pub fn is_mobile(&self) -> bool {
        self.current.get()
    }
}
