use dioxus::prelude::*;

use crate::app::components::Reveal;
use crate::app::language_context::use_language;
use crate::content::FEATURES;
use crate::i18n::Text;

#[component]
pub fn Features() -> Element {
    let lang = use_language();
    let locale = lang.get();

    rsx! {
        section { class: "section section-muted",
            Reveal { class: "container",
                div { class: "section-header",
                    h2 { {lang.text(Text::FeaturesHeading)} }
                    p { class: "section-intro", {lang.text(Text::FeaturesIntro)} }
                }
                div { class: "card-grid card-grid-3",
                    for card in FEATURES.iter() {
                        article { key: "{card.title.en}", class: "card",
                            h3 { class: "card-title", {card.title.get(locale)} }
                            p { class: "card-body", {card.body.get(locale)} }
                        }
                    }
                }
            }
        }
    }
}
