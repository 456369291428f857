//! One-shot viewport observation.

use wasm_bindgen::{JsCast, prelude::*};
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window,
};

use crate::{dom, error::Result};

/// Calls a handler the first time each observed element enters the viewport,
/// then stops watching it. Disconnects on drop.
pub struct EnterObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl EnterObserver {
    /// Whether the browser supports IntersectionObserver.
    pub fn supported(window: &Window) -> bool {
        dom::supports(window, "IntersectionObserver")
    }

    pub fn new(
        threshold: f64,
        root_margin: &str,
        mut on_enter: impl FnMut(&Element) + 'static,
    ) -> Result<Self> {
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if entry.is_intersecting() {
                        let target = entry.target();
                        on_enter(&target);
                        observer.unobserve(&target);
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        options.set_root_margin(root_margin);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }
}

impl Drop for EnterObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
