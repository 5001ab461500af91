use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget};
use yew::NodeRef;

/// An event listener that removes itself from its target when dropped.
///
/// Effects hand one of these to their cleanup closure so the listener is
/// gone as soon as the effect is torn down, whichever way that happens.
pub struct ScopedListener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl ScopedListener {
    pub fn attach(
        target: &EventTarget,
        kind: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Option<Self> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        match target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref()) {
            Ok(()) => Some(Self {
                target: target.clone(),
                kind,
                callback,
            }),
            Err(err) => {
                warn!("failed to register {} listener: {:?}", kind, err);
                None
            }
        }
    }

    /// Runs the handler once right away, the way a scroll listener wants an
    /// initial check before the first scroll happens.
    pub fn fire(&self) {
        if let Ok(event) = Event::new(self.kind) {
            let _ = self
                .callback
                .as_ref()
                .unchecked_ref::<js_sys::Function>()
                .call1(&self.target, &event);
        }
    }
}

impl Drop for ScopedListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref());
    }
}

pub fn document_target() -> Option<EventTarget> {
    web_sys::window()
        .and_then(|w| w.document())
        .map(|d| d.unchecked_into::<EventTarget>())
}

pub fn window_target() -> Option<EventTarget> {
    web_sys::window().map(|w| w.unchecked_into::<EventTarget>())
}

/// Horizontal extent of a rendered element as `(left, width)`.
pub fn horizontal_extent(node: &NodeRef) -> Option<(f64, f64)> {
    let rect = node.cast::<web_sys::Element>()?.get_bounding_client_rect();
    Some((rect.left(), rect.width()))
}

/// True once the top of the element has scrolled above the bottom of the
/// viewport, pulled in by `margin` pixels.
pub fn is_in_viewport(node: &NodeRef, margin: f64) -> bool {
    let Some(element) = node.cast::<web_sys::Element>() else {
        return false;
    };
    let viewport_height = web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    let rect = element.get_bounding_client_rect();
    rect.top() < viewport_height - margin && rect.bottom() > 0.0
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use wasm_bindgen_test::*;

    use super::*;

    fn detached_target() -> EventTarget {
        let element = web_sys::window()
            .and_then(|w| w.document())
            .unwrap()
            .create_element("div")
            .unwrap();
        element.into()
    }

    fn counting_listener(target: &EventTarget, kind: &'static str) -> (ScopedListener, Rc<Cell<u32>>) {
        let calls = Rc::new(Cell::new(0));
        let listener = {
            let calls = calls.clone();
            ScopedListener::attach(target, kind, move |_| calls.set(calls.get() + 1)).unwrap()
        };
        (listener, calls)
    }

    #[wasm_bindgen_test]
    fn dropped_listener_no_longer_runs() {
        let target = detached_target();
        let (listener, calls) = counting_listener(&target, "ping");

        target.dispatch_event(&Event::new("ping").unwrap()).unwrap();
        assert_eq!(calls.get(), 1);

        drop(listener);
        target.dispatch_event(&Event::new("ping").unwrap()).unwrap();
        assert_eq!(calls.get(), 1);
    }

    #[wasm_bindgen_test]
    fn fire_runs_handler_once() {
        let target = detached_target();
        let (listener, calls) = counting_listener(&target, "scroll");
        listener.fire();
        assert_eq!(calls.get(), 1);
    }
}
