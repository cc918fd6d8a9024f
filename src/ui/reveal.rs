//! Scroll-triggered reveal animations
//!
//! A single IntersectionObserver adds the `visible` class to every
//! `.scroll-reveal` element as it enters the viewport. Sections are observed
//! once on mount; the review list calls [`observe_reveals`] again after each
//! re-render so freshly created cards animate in too (re-observing an
//! already-observed element is a no-op).

#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

/// Class marking an element as reveal-animated
pub const REVEAL_CLASS: &str = "scroll-reveal";

/// Class the observer adds when the element enters the viewport
pub const REVEAL_VISIBLE_CLASS: &str = "visible";

#[cfg(not(feature = "ssr"))]
thread_local! {
    static OBSERVER: std::cell::RefCell<Option<web_sys::IntersectionObserver>> =
        const { std::cell::RefCell::new(None) };
}

/// Observe every `.scroll-reveal` element in the document.
///
/// Safe to call repeatedly; on the server it does nothing.
pub fn observe_reveals() {
    #[cfg(not(feature = "ssr"))]
    {
        use wasm_bindgen::JsCast;

        let Some(observer) = reveal_observer() else {
            return;
        };
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        let selector = format!(".{REVEAL_CLASS}");
        if let Ok(nodes) = document.query_selector_all(&selector) {
            for i in 0..nodes.length() {
                if let Some(node) = nodes.item(i) {
                    if let Ok(element) = node.dyn_into::<web_sys::Element>() {
                        observer.observe(&element);
                    }
                }
            }
        }
    }
}

/// The shared observer, created on first use
#[cfg(not(feature = "ssr"))]
fn reveal_observer() -> Option<web_sys::IntersectionObserver> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    OBSERVER.with(|cell| {
        if let Some(observer) = cell.borrow().as_ref() {
            return Some(observer.clone());
        }

        let callback = Closure::<dyn Fn(js_sys::Array, web_sys::IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                    if entry.is_intersecting() {
                        let _ = entry.target().class_list().add_1(REVEAL_VISIBLE_CLASS);
                    }
                }
            },
        );

        let options = web_sys::IntersectionObserverInit::new();
        options.set_threshold(&wasm_bindgen::JsValue::from_f64(0.1));
        options.set_root_margin("0px 0px -50px 0px");

        let observer = web_sys::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        )
        .ok()?;

        // Keep the closure alive
        callback.forget();

        *cell.borrow_mut() = Some(observer.clone());
        Some(observer)
    })
}
