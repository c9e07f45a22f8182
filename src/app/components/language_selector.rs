//! Locale dropdown in the navigation bar.

use dioxus::prelude::*;

use crate::app::language_context::use_language;
use crate::i18n::{Locale, Text};

#[component]
pub fn LanguageSelector() -> Element {
    let lang = use_language();
    let current = lang.get();
    let mut open = use_signal(|| false);

    rsx! {
        div { class: "lang-selector",
            button {
                r#type: "button",
                class: "lang-button",
                "aria-label": lang.text(Text::SelectLanguage),
                "aria-haspopup": "listbox",
                "aria-expanded": open(),
                onclick: move |_| open.set(!open()),
                {current.label()}
            }
            if open() {
                // Click-away layer
                div { class: "lang-overlay", onclick: move |_| open.set(false) }
                ul { class: "lang-menu", role: "listbox",
                    for locale in Locale::ALL {
                        li {
                            key: "{locale}",
                            role: "option",
                            "aria-selected": locale == current,
                            button {
                                r#type: "button",
                                class: if locale == current { "lang-option is-active" } else { "lang-option" },
                                lang: locale.code(),
                                "aria-label": format!("{}: {}", lang.text(Text::SwitchLanguage), locale.name()),
                                onclick: move |_| {
                                    lang.set(locale);
                                    open.set(false);
                                },
                                {locale.label()}
                            }
                        }
                    }
                }
            }
        }
    }
}
