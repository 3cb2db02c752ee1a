//! On-screen visibility detection for mounted elements
//!
//! Wraps `IntersectionObserver`. The observer is disconnected when the guard
//! is dropped, so no notification reaches a component after teardown.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

type EntriesCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Live intersection observer watching a single element
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: EntriesCallback,
}

impl VisibilityObserver {
    /// Start watching `element`.
    ///
    /// `on_change` receives `true` whenever at least `threshold` of the
    /// element is on screen and `false` when it drops below again.
    pub fn observe(
        element: &Element,
        threshold: f64,
        mut on_change: impl FnMut(bool) + 'static,
    ) -> Result<Self, wasm_bindgen::JsValue> {
        let callback: EntriesCallback =
            Closure::new(move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    on_change(entry.is_intersecting());
                }
            });

        let init = IntersectionObserverInit::new();
        init.set_threshold(&wasm_bindgen::JsValue::from_f64(threshold));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        observer.observe(element);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
