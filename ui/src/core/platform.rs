//! Thin DOM glue. Everything here degrades to a no-op when the element (or
//! the whole browser) is missing, so callers never need to branch.

use super::prefs::{DisplayMode, Locale};
use super::reveal::RevealConfig;

/// Fragment id of a same-page link (`"#about"` -> `"about"`). Bare `#` and
/// links to other documents yield `None`.
pub fn fragment_of(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[cfg(target_arch = "wasm32")]
mod imp {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{
        IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
        ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    };

    use super::{DisplayMode, Locale, RevealConfig};

    fn document() -> Option<web_sys::Document> {
        web_sys::window()?.document()
    }

    pub fn apply_document_modes(mode: DisplayMode, locale: Locale) {
        let Some(body) = document().and_then(|doc| doc.body()) else {
            return;
        };
        let _ = body.set_attribute("data-theme", mode.data_theme());
        let _ = body.set_attribute("dir", locale.dir());
        let _ = body.set_attribute("lang", locale.lang());
    }

    pub fn scroll_to_fragment(fragment: &str) -> bool {
        let Some(target) = document().and_then(|doc| doc.get_element_by_id(fragment)) else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }

    pub fn scroll_y() -> f64 {
        web_sys::window()
            .and_then(|win| win.scroll_y().ok())
            .unwrap_or(0.0)
    }

    pub fn viewport_width() -> Option<f64> {
        web_sys::window()?.inner_width().ok()?.as_f64()
    }

    /// A `window` event subscription that unsubscribes when dropped.
    pub struct WindowListener {
        event: &'static str,
        callback: Closure<dyn FnMut()>,
    }

    impl WindowListener {
        pub fn attach(event: &'static str, handler: impl FnMut() + 'static) -> Option<Self> {
            let window = web_sys::window()?;
            let callback = Closure::<dyn FnMut()>::new(handler);
            window
                .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
                .ok()?;
            Some(Self { event, callback })
        }
    }

    impl Drop for WindowListener {
        fn drop(&mut self) {
            if let Some(window) = web_sys::window() {
                let _ = window.remove_event_listener_with_callback(
                    self.event,
                    self.callback.as_ref().unchecked_ref(),
                );
            }
        }
    }

    /// One-shot viewport observer for a single element.
    pub struct VisibilityObserver {
        observer: IntersectionObserver,
        _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
    }

    impl VisibilityObserver {
        pub fn observe_once(
            element_id: &str,
            config: &RevealConfig,
            on_visible: impl FnMut() + 'static,
        ) -> Option<Self> {
            let element = document()?.get_element_by_id(element_id)?;
            let mut on_visible = on_visible;
            let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
                move |entries: js_sys::Array, observer: IntersectionObserver| {
                    for entry in entries.iter() {
                        let entry: IntersectionObserverEntry = entry.unchecked_into();
                        if entry.is_intersecting() {
                            observer.unobserve(&entry.target());
                            on_visible();
                        }
                    }
                },
            );

            let options = IntersectionObserverInit::new();
            options.set_threshold(&JsValue::from_f64(config.threshold));
            options.set_root_margin(&config.root_margin);

            let observer = IntersectionObserver::new_with_options(
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .ok()?;
            observer.observe(&element);
            Some(Self {
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
}

#[cfg(not(target_arch = "wasm32"))]
mod imp {
    use super::{DisplayMode, Locale, RevealConfig};

    pub fn apply_document_modes(_mode: DisplayMode, _locale: Locale) {}

    pub fn scroll_to_fragment(_fragment: &str) -> bool {
        false
    }

    pub fn scroll_y() -> f64 {
        0.0
    }

    pub fn viewport_width() -> Option<f64> {
        None
    }

    pub struct WindowListener;

    impl WindowListener {
        pub fn attach(_event: &'static str, _handler: impl FnMut() + 'static) -> Option<Self> {
            None
        }
    }

    pub struct VisibilityObserver;

    impl VisibilityObserver {
        pub fn observe_once(
            _element_id: &str,
            _config: &RevealConfig,
            _on_visible: impl FnMut() + 'static,
        ) -> Option<Self> {
            None
        }
    }
}

pub use imp::{
    apply_document_modes, scroll_to_fragment, scroll_y, viewport_width, VisibilityObserver,
    WindowListener,
};
