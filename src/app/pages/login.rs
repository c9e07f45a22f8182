//! Sign-in surface. Credentials are handled by the external platform.

use dioxus::prelude::*;

use crate::app::language_context::use_language;
use crate::app::Route;
use crate::i18n::Text;
use crate::site::nav::platform_login_url;

#[component]
pub fn Login() -> Element {
    let lang = use_language();

    rsx! {
        section { class: "page page-narrow",
            h1 { {lang.text(Text::LoginTitle)} }
            p { class: "text-muted", {lang.text(Text::LoginBody)} }
            div { class: "page-actions",
                a {
                    href: platform_login_url(),
                    class: "btn btn-primary",
                    rel: "noopener noreferrer",
                    "aria-label": lang.text(Text::SignInAria),
                    {lang.text(Text::LoginContinue)}
                }
                Link { to: Route::Home {}, class: "btn btn-ghost", {lang.text(Text::BackHome)} }
            }
        }
    }
}
