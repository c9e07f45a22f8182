//! Browser glue for the client build.
//!
//! Each helper has a native counterpart that does nothing, so components can
//! call them unconditionally; they only ever run from effects and event
//! handlers, which the server renderer never fires.

use crate::i18n::Locale;

#[cfg(target_arch = "wasm32")]
pub use wasm::{ElementObserver, ScrollListener};

/// Current vertical scroll offset.
pub fn scroll_y() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        0.0
    }
}

/// Jump to the top of the page.
pub fn scroll_to_top() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}

/// Smooth-scroll to the element with `id`. Returns false when it is not on
/// the page.
pub fn scroll_to_anchor(id: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        else {
            tracing::debug!("No #{} on this page", id);
            return false;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = id;
        false
    }
}

/// Drop the selection of the `<input type=file>` with `id`, so choosing the
/// same file again fires `change`.
pub fn clear_file_input(id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        if let Some(input) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
            .and_then(|e| e.dyn_into::<web_sys::HtmlInputElement>().ok())
        {
            input.set_value("");
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = id;
    }
}

/// Mirror the locale onto `<html lang dir>`.
pub fn apply_locale_to_document(locale: Locale) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = root.set_attribute("lang", locale.code());
            let _ = root.set_attribute("dir", locale.direction().as_str());
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = locale;
    }
}

/// Load one image into the browser cache.
pub async fn preload_image(url: String) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        let image = web_sys::HtmlImageElement::new().map_err(|e| format!("{:?}", e))?;
        let promise = js_sys::Promise::new(&mut |resolve, reject| {
            image.set_onload(Some(&resolve));
            image.set_onerror(Some(&reject));
        });
        image.set_src(&url);
        let result = wasm_bindgen_futures::JsFuture::from(promise).await;
        image.set_onload(None);
        image.set_onerror(None);
        result
            .map(|_| ())
            .map_err(|_| format!("failed to load {}", url))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = url;
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
mod wasm {
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use crate::site::visibility::{IntersectionChange, VisibilityObserver};

    /// Window scroll listener, removed on drop.
    pub struct ScrollListener {
        window: web_sys::Window,
        callback: Closure<dyn FnMut()>,
    }

    impl ScrollListener {
        pub fn attach(mut on_scroll: impl FnMut(f64) + 'static) -> Option<Self> {
            let window = web_sys::window()?;
            let source = window.clone();
            let callback = Closure::<dyn FnMut()>::new(move || {
                on_scroll(source.scroll_y().unwrap_or(0.0));
            });
            if let Err(e) = window
                .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            {
                tracing::warn!("Failed to attach scroll listener: {:?}", e);
                return None;
            }
            Some(Self { window, callback })
        }
    }

    impl Drop for ScrollListener {
        fn drop(&mut self) {
            let _ = self.window.remove_event_listener_with_callback(
                "scroll",
                self.callback.as_ref().unchecked_ref(),
            );
        }
    }

    /// `IntersectionObserver` for a single element; disconnects on drop.
    #[derive(Default)]
    pub struct ElementObserver {
        observer: Option<IntersectionObserver>,
        // Owned so the JS callback stays alive exactly as long as the observer.
        callback: Option<Closure<dyn FnMut(js_sys::Array)>>,
    }

    impl VisibilityObserver for ElementObserver {
        type Target = web_sys::Element;

        fn observe(
            &mut self,
            target: &web_sys::Element,
            threshold: f64,
            mut on_change: Box<dyn FnMut(IntersectionChange)>,
        ) {
            self.disconnect();

            let callback = Closure::wrap(Box::new(move |entries: js_sys::Array| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    on_change(IntersectionChange {
                        ratio: entry.intersection_ratio(),
                        is_intersecting: entry.is_intersecting(),
                    });
                }
            }) as Box<dyn FnMut(js_sys::Array)>);

            let init = IntersectionObserverInit::new();
            init.set_threshold(&JsValue::from_f64(threshold));
            match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            {
                Ok(observer) => {
                    observer.observe(target);
                    self.observer = Some(observer);
                    self.callback = Some(callback);
                }
                Err(e) => tracing::warn!("IntersectionObserver unavailable: {:?}", e),
            }
        }

        fn disconnect(&mut self) {
            if let Some(observer) = self.observer.take() {
                observer.disconnect();
            }
            self.callback = None;
        }
    }

    impl Drop for ElementObserver {
        fn drop(&mut self) {
            self.disconnect();
        }
    }
}
