//! Page shell wrapping every route: head metadata, navigation, footer.

use std::time::Duration;

use dioxus::prelude::*;

use super::footer::Footer;
use super::nav::Nav;
use crate::app::browser;
use crate::app::language_context::use_language;
use crate::app::Route;
use crate::content::IMAGE_ORIGIN;
use crate::platform;
use crate::site::nav::NavAction;
use crate::site::routes::SITE_DESCRIPTION;

const CONTENT_SECURITY_POLICY: &str = "default-src 'self' https:; \
    script-src 'self' 'unsafe-inline' 'unsafe-eval'; \
    style-src 'self' 'unsafe-inline' https:; \
    img-src 'self' https: data:; \
    font-src 'self' https:; \
    connect-src 'self' https:;";

/// Section to scroll to once the next route has rendered.
#[derive(Clone, Copy)]
struct PendingAnchor(Signal<Option<&'static str>>);

/// Carry out a [`NavAction`]: scroll in place, or change route and scroll
/// after the new page mounts.
pub fn use_nav_handler() -> Callback<NavAction> {
    let navigator = use_navigator();
    let PendingAnchor(mut pending) = use_context::<PendingAnchor>();

    use_callback(move |action: NavAction| match action {
        NavAction::ScrollTo(id) => {
            browser::scroll_to_anchor(id);
        }
        NavAction::Navigate { path, anchor } => match path.parse::<Route>() {
            Ok(route) => {
                pending.set(anchor);
                navigator.push(route);
            }
            Err(e) => tracing::warn!("Unroutable nav target {}: {}", path, e),
        },
    })
}

/// Layout route for the whole site.
#[component]
pub fn Shell() -> Element {
    let lang = use_language();
    let locale = lang.get();
    let route = use_route::<Route>();
    let title = route.page().document_title(locale);

    let pending = use_signal(|| None::<&'static str>);
    use_context_provider(|| PendingAnchor(pending));

    // New route: jump to the requested section, else to the top.
    use_effect(use_reactive((&route,), move |(route,)| {
        let mut pending = pending;
        let anchor = pending.write().take();
        tracing::debug!("Route changed to {}", route);
        spawn(async move {
            // Let the new page mount first.
            platform::sleep(Duration::ZERO).await;
            match anchor {
                Some(id) if browser::scroll_to_anchor(id) => {}
                _ => browser::scroll_to_top(),
            }
        });
    }));

    rsx! {
        document::Title { "{title}" }
        document::Meta { name: "description", content: SITE_DESCRIPTION }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1.0" }
        document::Meta { http_equiv: "Content-Security-Policy", content: CONTENT_SECURITY_POLICY }
        document::Link { rel: "preconnect", href: IMAGE_ORIGIN }
        document::Link { rel: "stylesheet", href: asset!("/public/main.css") }
        document::Link { rel: "icon", r#type: "image/svg+xml", href: asset!("/public/favicon.svg") }

        div {
            class: "site",
            lang: locale.code(),
            dir: locale.direction().as_str(),
            Nav {}
            main { class: "site-main", Outlet::<Route> {} }
            Footer {}
        }
    }
}
