//! Privacy policy and terms of use pages.

use dioxus::prelude::*;

use crate::app::language_context::use_language;
use crate::content::legal::{LegalDocument, PRIVACY_POLICY, TERMS_OF_USE};
use crate::i18n::Text;

/// Renders a legal document section by section. The copy itself is English
/// in every locale; only the surrounding labels are translated.
#[component]
fn LegalPage(document: LegalDocument) -> Element {
    let lang = use_language();

    rsx! {
        article { class: "page legal", lang: "en", dir: "ltr",
            header { class: "legal-header",
                h1 { "{document.title}" }
                p { class: "text-muted",
                    {lang.text(Text::LastUpdated)}
                    ": {document.last_updated}"
                }
            }
            for part in document.sections.iter() {
                section { key: "{part.heading}", class: "legal-section",
                    h2 { "{part.heading}" }
                    for paragraph in part.paragraphs.iter() {
                        p { "{paragraph}" }
                    }
                    if !part.bullets.is_empty() {
                        ul {
                            for bullet in part.bullets.iter() {
                                li { "{bullet}" }
                            }
                        }
                    }
                    if let Some(footnote) = part.footnote {
                        p { "{footnote}" }
                    }
                }
            }
            footer { class: "legal-footer",
                p {
                    a { href: "mailto:{document.contact_email}", "{document.contact_email}" }
                }
                p { class: "legal-ack", "{document.acknowledgment}" }
            }
        }
    }
}

#[component]
pub fn PrivacyPolicy() -> Element {
    rsx! {
        LegalPage { document: PRIVACY_POLICY }
    }
}

#[component]
pub fn TermsOfUse() -> Element {
    rsx! {
        LegalPage { document: TERMS_OF_USE }
    }
}
