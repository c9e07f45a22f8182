use dioxus::prelude::*;

use crate::app::components::Reveal;
use crate::app::language_context::use_language;
use crate::content::{CONTACT_EMAIL, CONTACT_LINKEDIN, LOCATIONS, MISSIONS};
use crate::i18n::Text;
use crate::site::nav::ANCHOR_ABOUT;

#[component]
pub fn About() -> Element {
    let lang = use_language();
    let locale = lang.get();

    rsx! {
        section { id: ANCHOR_ABOUT, class: "section",
            Reveal { class: "container",
                div { class: "section-header",
                    h2 { {lang.text(Text::AboutHeading)} }
                    p { class: "section-tagline", {lang.text(Text::AboutTagline)} }
                }
                div { class: "about-copy",
                    p { {lang.text(Text::AboutInfrastructure)} }
                    p { {lang.text(Text::AboutPlatform)} }
                }

                h3 { class: "about-subheading", {lang.text(Text::AboutMissionHeading)} }
                div { class: "card-grid card-grid-3",
                    for mission in MISSIONS.iter() {
                        article { key: "{mission.title.en}", class: "card",
                            h4 { class: "card-title", {mission.title.get(locale)} }
                            p { class: "card-body", {mission.body.get(locale)} }
                        }
                    }
                }
                p { class: "about-copy", {lang.text(Text::AboutReach)} }

                div { class: "about-footer",
                    ul { class: "locations",
                        for location in LOCATIONS.iter() {
                            li { key: "{location.en}", {location.get(locale)} }
                        }
                    }
                    p { class: "about-motto", {lang.text(Text::AboutMotto)} }
                    div { class: "about-contact",
                        h4 { {lang.text(Text::ContactUs)} }
                        a { href: "mailto:{CONTACT_EMAIL}", "{CONTACT_EMAIL}" }
                        a {
                            href: CONTACT_LINKEDIN,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "aria-label": lang.text(Text::LinkedinAria),
                            "LinkedIn"
                        }
                    }
                }
            }
        }
    }
}
