use dioxus::prelude::*;

use crate::app::components::Reveal;
use crate::app::language_context::use_language;
use crate::content::VISION_STATS;
use crate::i18n::Text;
use crate::site::nav::ANCHOR_VISION;

/// Vision 2030 figures.
#[component]
pub fn Vision() -> Element {
    let lang = use_language();
    let locale = lang.get();

    rsx! {
        section { id: ANCHOR_VISION, class: "section section-dark",
            Reveal { class: "container",
                div { class: "section-header",
                    h2 { {lang.text(Text::VisionHeading)} }
                    p { class: "section-intro", {lang.text(Text::VisionIntro)} }
                    p { class: "section-intro", {lang.text(Text::VisionPartners)} }
                }
                h3 { class: "stats-heading", {lang.text(Text::VisionNumbers)} }
                div { class: "card-grid card-grid-3",
                    for stat in VISION_STATS.iter() {
                        div { key: "{stat.value}", class: "stat",
                            // Figures are written the same in both locales.
                            p { class: "stat-value", dir: "ltr", "{stat.value}" }
                            p { class: "stat-label", {stat.label.get(locale)} }
                            p { class: "stat-description", {stat.description.get(locale)} }
                        }
                    }
                }
            }
        }
    }
}
