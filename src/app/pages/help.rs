use dioxus::prelude::*;

use crate::app::components::RouteGuard;
use crate::app::language_context::use_language;
use crate::i18n::Text;
use crate::site::Page;

/// Member help center; `segments` is the sub-path below `/help`.
#[component]
pub fn HelpCenter(segments: Vec<String>) -> Element {
    let lang = use_language();
    let topic = segments.join("/");

    rsx! {
        RouteGuard { page: Page::HelpCenter,
            section { class: "page",
                h1 { {lang.text(Text::HelpTitle)} }
                if !topic.is_empty() {
                    p { class: "text-muted", code { "{topic}" } }
                }
                p { {lang.text(Text::HelpBody)} }
            }
        }
    }
}

/// Bare path without a topic.
#[component]
pub fn HelpIndex() -> Element {
    rsx! {
        HelpCenter { segments: Vec::new() }
    }
}
