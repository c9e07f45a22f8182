//! Site footer.

use chrono::Datelike;
use dioxus::prelude::*;

use super::layout::use_nav_handler;
use crate::app::language_context::use_language;
use crate::app::Route;
use crate::content::links;
use crate::i18n::Text;
use crate::site::nav::{NavState, NavTarget, ANCHOR_ABOUT};
use crate::site::Page;

#[component]
pub fn Footer() -> Element {
    let lang = use_language();
    let route = use_route::<Route>();
    let on_home = route.page() == Page::Home;
    let handle = use_nav_handler();
    let year = chrono::Utc::now().year();

    let about = NavTarget::Anchor(ANCHOR_ABOUT);

    rsx! {
        footer { class: "footer",
            div { class: "footer-grid",
                div { class: "footer-column",
                    h3 { {lang.text(Text::FooterCompany)} }
                    ul {
                        li {
                            a {
                                href: if on_home { format!("#{ANCHOR_ABOUT}") } else { about.href() },
                                onclick: move |evt: MouseEvent| {
                                    evt.prevent_default();
                                    handle.call(NavState::default().select(about, on_home));
                                },
                                {lang.text(Text::NavAboutUs)}
                            }
                        }
                        li {
                            Link { to: Route::Careers {}, {lang.text(Text::NavCareers)} }
                        }
                    }
                }

                div { class: "footer-column",
                    h3 { {lang.text(Text::FooterResources)} }
                    ul {
                        li {
                            Link { to: Route::HelpIndex {},
                                {lang.text(Text::FooterHelpCenter)}
                            }
                        }
                        li {
                            Link { to: Route::ApiIndex {},
                                {lang.text(Text::FooterApiReference)}
                            }
                        }
                    }
                }

                div { class: "footer-column",
                    h3 { {lang.text(Text::FooterLegal)} }
                    ul { class: "footer-small",
                        li {
                            Link { to: Route::PrivacyPolicy {}, {lang.text(Text::PrivacyPolicy)} }
                        }
                        li {
                            Link { to: Route::TermsOfUse {}, {lang.text(Text::TermsOfUse)} }
                        }
                    }
                }

                div { class: "footer-column",
                    h3 { {lang.text(Text::FooterMobileApps)} }
                    div { class: "footer-badges",
                        a {
                            href: links::APP_STORE,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "aria-label": lang.text(Text::AppStoreAria),
                            img { src: links::APP_STORE_BADGE, alt: "App Store", width: "135", height: "40" }
                        }
                        a {
                            href: links::GOOGLE_PLAY,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "aria-label": lang.text(Text::GooglePlayAria),
                            img { src: links::GOOGLE_PLAY_BADGE, alt: "Google Play", width: "135", height: "40" }
                        }
                    }
                }

                div { class: "footer-column",
                    h3 { {lang.text(Text::FooterFollow)} }
                    div { class: "footer-social",
                        a {
                            href: links::INSTAGRAM,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "aria-label": lang.text(Text::InstagramAria),
                            "Instagram"
                        }
                        a {
                            href: links::LINKEDIN,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "aria-label": lang.text(Text::LinkedinAria),
                            "LinkedIn"
                        }
                    }
                }
            }

            div { class: "footer-bottom",
                p { "© {year} Aidra. " {lang.text(Text::AllRightsReserved)} }
                div { class: "footer-bottom-links",
                    Link { to: Route::PrivacyPolicy {}, {lang.text(Text::PrivacyPolicy)} }
                    Link { to: Route::TermsOfUse {}, {lang.text(Text::TermsShort)} }
                }
            }
        }
    }
}
