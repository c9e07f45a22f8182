use dioxus::prelude::*;

use crate::app::components::RouteGuard;
use crate::app::language_context::use_language;
use crate::i18n::Text;
use crate::site::Page;

/// Member API reference; `segments` is the sub-path below `/api`.
#[component]
pub fn ApiReference(segments: Vec<String>) -> Element {
    let lang = use_language();
    let topic = segments.join("/");

    rsx! {
        RouteGuard { page: Page::ApiReference,
            section { class: "page",
                h1 { {lang.text(Text::ApiTitle)} }
                if !topic.is_empty() {
                    p { class: "text-muted", code { "{topic}" } }
                }
                p { {lang.text(Text::ApiBody)} }
            }
        }
    }
}

/// Bare path without a topic.
#[component]
pub fn ApiIndex() -> Element {
    rsx! {
        ApiReference { segments: Vec::new() }
    }
}
