//! Dismissable error alert component.

use dioxus::prelude::*;

use crate::app::language_context::use_language;
use crate::i18n::Text;

/// Inline form error with a close button.
#[component]
pub fn ErrorAlert(
    /// The error message to display
    message: String,
    /// Called when the dismiss button is clicked
    on_dismiss: EventHandler<()>,
) -> Element {
    let lang = use_language();

    rsx! {
        div { class: "alert alert-error", role: "alert",
            span { "{message}" }
            button {
                r#type: "button",
                class: "alert-dismiss",
                "aria-label": lang.text(Text::Dismiss),
                onclick: move |_| on_dismiss.call(()),
                "×"
            }
        }
    }
}
