use dioxus::prelude::*;

use crate::app::components::Reveal;
use crate::app::language_context::use_language;
use crate::content::PRODUCTS;
use crate::i18n::Text;
use crate::site::nav::ANCHOR_PRODUCTS;

#[component]
pub fn Products() -> Element {
    let lang = use_language();
    let locale = lang.get();

    rsx! {
        section { id: ANCHOR_PRODUCTS, class: "section",
            Reveal { class: "container",
                div { class: "section-header",
                    h2 { {lang.text(Text::ProductsHeading)} }
                    p { class: "section-tagline", {lang.text(Text::ProductsTagline)} }
                    p { class: "section-intro", {lang.text(Text::ProductsIntro)} }
                }
                div { class: "card-grid card-grid-2",
                    for product in PRODUCTS.iter() {
                        article { key: "{product.title.en}", class: "card product-card",
                            h3 { class: "card-title", {product.title.get(locale)} }
                            p { class: "card-body", {product.description.get(locale)} }
                            ul { class: "check-list",
                                for point in product.points.iter() {
                                    li { key: "{point.en}", {point.get(locale)} }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
