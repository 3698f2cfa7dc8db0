//! Holds back navigation away from a form with unsaved edits.
//!
//! Form pages mark the shared [`LeaveGuard`] dirty, the navbar and the forms' cancel buttons
//! route through [`LeaveGuard::request`], and the layout asks for confirmation while a
//! request is pending. The web build also hooks `beforeunload` for reloads and closed tabs.

use dioxus::prelude::*;

use crate::client::router::Route;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LeaveGuard {
    pub dirty: bool,
    pub pending: Option<Route>,
}

impl LeaveGuard {
    /// Returns the route to go to right away, or keeps it pending while there are unsaved edits
    pub fn request(&mut self, to: Route) -> Option<Route> {
        if self.dirty {
            self.pending = Some(to);
            return None;
        }

        Some(to)
    }

    /// Discards the edits and releases the pending route
    pub fn confirm(&mut self) -> Option<Route> {
        self.dirty = false;
        self.pending.take()
    }

    /// Stays on the form
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

pub fn use_leave_guard() -> Signal<LeaveGuard> {
    use_context::<Signal<LeaveGuard>>()
}

/// Navigates unless the guard holds the route back
pub fn leave(mut guard: Signal<LeaveGuard>, to: Route) {
    if let Some(to) = guard.write().request(to) {
        navigator().push(to);
    }
}

/// Keeps the guard's dirty flag in step with a form for as long as it is mounted
pub fn use_dirty_form(dirty: Memo<bool>) {
    let mut guard = use_leave_guard();

    use_effect(move || {
        let dirty = dirty();
        guard.write().dirty = dirty;
    });

    use_drop(move || {
        guard.write().dirty = false;
    });
}

/// Asks the browser to confirm reloads and tab closes while the guard is dirty
#[cfg(feature = "web")]
pub fn listen_before_unload(guard: Signal<LeaveGuard>) {
    use dioxus_logger::tracing;
    use wasm_bindgen::{closure::Closure, JsCast};

    let Some(window) = web_sys::window() else {
        return;
    };

    let on_before_unload =
        Closure::<dyn FnMut(web_sys::BeforeUnloadEvent)>::new(move |evt: web_sys::BeforeUnloadEvent| {
            if guard.peek().dirty {
                evt.prevent_default();
                evt.set_return_value("You have unsaved changes.");
            }
        });

    if let Err(err) = window
        .add_event_listener_with_callback("beforeunload", on_before_unload.as_ref().unchecked_ref())
    {
        tracing::warn!("Failed to register beforeunload listener: {:?}", err);
    }

    // Lives as long as the app
    on_before_unload.forget();
}
