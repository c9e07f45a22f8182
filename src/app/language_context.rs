//! Language context for the active display locale.
//!
//! Created once at the app root and dropped with it. Memory-only: a reload
//! starts again in the default locale.

use dioxus::prelude::*;

use crate::i18n::{t, Locale, Text};

/// App-wide locale shared via context
#[derive(Clone, Copy)]
pub struct LanguageContext {
    current: Signal<Locale>,
}

impl LanguageContext {
    /// Get current locale
    pub fn get(&self) -> Locale {
        (self.current)()
    }

    /// Replace the locale; every subscribed component re-renders.
    pub fn set(&self, locale: Locale) {
        let mut current = self.current;
        if *current.peek() != locale {
            tracing::debug!("Locale changed to {}", locale);
        }
        current.set(locale);
    }

    /// Interface string in the current locale.
    pub fn text(&self, text: Text) -> &'static str {
        t(self.get(), text)
    }
}

/// Initialize language context provider - call once at app root
pub fn use_language_provider() -> LanguageContext {
    let current = use_signal(Locale::default);

    let ctx = LanguageContext { current };
    use_context_provider(|| ctx);

    // Keep <html lang dir> in step (client only; a no-op on the server)
    use_effect(move || {
        crate::app::browser::apply_locale_to_document(current());
    });

    ctx
}

/// Get language context - use in any component
pub fn use_language() -> LanguageContext {
    use_context::<LanguageContext>()
}

#[cfg(all(test, feature = "server"))]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::app::sections::features::Features;

    thread_local! {
        static PROVIDED: Cell<Option<LanguageContext>> = const { Cell::new(None) };
    }

    #[component]
    fn Harness() -> Element {
        let ctx = use_language_provider();
        use_hook(|| PROVIDED.with(|slot| slot.set(Some(ctx))));
        rsx! { Features {} }
    }

    #[test]
    fn test_switching_locale_rerenders_subscribed_sections() {
        let mut dom = VirtualDom::new(Harness);
        dom.rebuild_in_place();
        let english = dioxus::ssr::render(&dom);
        assert!(english.contains(t(Locale::En, Text::FeaturesHeading)));
        assert!(!english.contains(t(Locale::Ar, Text::FeaturesHeading)));

        let ctx = PROVIDED
            .with(Cell::get)
            .expect("provider ran during rebuild");
        dom.in_runtime(|| ctx.set(Locale::Ar));
        dom.render_immediate_to_vec();

        let arabic = dioxus::ssr::render(&dom);
        assert!(arabic.contains(t(Locale::Ar, Text::FeaturesHeading)), "{arabic}");
        assert!(arabic.contains(t(Locale::Ar, Text::FeaturesIntro)));
        assert!(!arabic.contains(t(Locale::En, Text::FeaturesHeading)));
    }
}
