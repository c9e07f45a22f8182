//! Fade-in wrapper for page sections.

use dioxus::prelude::*;

use crate::site::visibility::RevealTrigger;

/// Renders children hidden until the wrapper first scrolls into view.
///
/// The observer lives in a hook slot and is dropped once the element has
/// revealed, or with the component.
#[component]
pub fn Reveal(#[props(default)] class: &'static str, children: Element) -> Element {
    #[cfg_attr(not(target_arch = "wasm32"), allow(unused_mut))]
    let mut trigger = use_signal(RevealTrigger::default);

    #[cfg(target_arch = "wasm32")]
    let observer = use_hook(|| {
        std::rc::Rc::new(std::cell::RefCell::new(
            None::<crate::app::browser::ElementObserver>,
        ))
    });

    #[cfg(target_arch = "wasm32")]
    {
        let observer = observer.clone();
        use_effect(move || {
            if trigger.read().is_revealed() {
                observer.borrow_mut().take();
            }
        });
    }

    let onmounted = move |evt: MountedEvent| {
        #[cfg(target_arch = "wasm32")]
        {
            use crate::site::visibility::VisibilityObserver;

            let Some(element) = evt.data().downcast::<web_sys::Element>() else {
                return;
            };
            let threshold = trigger.peek().threshold();
            let mut watcher = crate::app::browser::ElementObserver::default();
            watcher.observe(
                element,
                threshold,
                Box::new(move |change| {
                    let mut next = *trigger.peek();
                    if next.observe(change) {
                        trigger.set(next);
                    }
                }),
            );
            *observer.borrow_mut() = Some(watcher);
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = evt;
        }
    };

    let state = trigger.read().class();

    rsx! {
        div { class: "{class} {state}", onmounted: onmounted, {children} }
    }
}
