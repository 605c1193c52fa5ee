use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::{ResizeSubscription, ViewportSource};

type Listeners = Rc<RefCell<Vec<(u64, Rc<dyn Fn()>)>>>;

/// Viewport whose width is set by the caller.
///
/// Used to embed the components outside a browser window and to simulate
/// resize events.
#[derive(Default)]
pub struct ManualViewport {
    width: Cell<Option<u32>>,
    listeners: Listeners,
    next_id: Cell<u64>,
}

impl ManualViewport {
    /// Viewport reporting `width`.
    #[must_use]
    pub fn with_width(width: u32) -> Self {
        let viewport = Self::default();
        viewport.width.set(Some(width));
        viewport
    }

    /// Viewport with no width at all, like a page without a window.
    #[must_use]
    pub fn detached() -> Self {
        Self::default()
    }

    /// Changes the width and fires a resize event.
    pub fn set_width(&self, width: u32) {
        self.width.set(Some(width));
        self.notify();
    }

    /// Fires a resize event without changing the width.
    pub fn notify(&self) {
        // Snapshot so listeners may subscribe or unsubscribe while being notified.
        let callbacks: Vec<Rc<dyn Fn()>> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, callback)| Rc::clone(callback))
            .collect();
        for callback in callbacks {
            callback();
        }
    }

    /// Number of registered resize listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl ViewportSource for ManualViewport {
    fn width(&self) -> Option<u32> {
        self.width.get()
    }

    fn on_resize(&self, callback: Rc<dyn Fn()>) -> ResizeSubscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.listeners.borrow_mut().push((id, callback));
        let listeners = Rc::clone(&self.listeners);
        ResizeSubscription::new(move || {
            listeners.borrow_mut().retain(|(entry, _)| *entry != id);
        })
    }
}
