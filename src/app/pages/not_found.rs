use dioxus::prelude::*;

use crate::app::language_context::use_language;
use crate::app::Route;
use crate::i18n::Text;

/// Fallback for every unmatched path.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let lang = use_language();
    let path = format!("/{}", route.join("/"));

    rsx! {
        section { class: "page page-narrow",
            h1 { {lang.text(Text::NotFoundTitle)} }
            p { class: "text-muted", {lang.text(Text::NotFoundBody)} }
            p { code { "{path}" } }
            Link { to: Route::Home {}, class: "btn btn-primary", {lang.text(Text::BackHome)} }
        }
    }
}
