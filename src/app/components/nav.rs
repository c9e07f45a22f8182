//! Top navigation bar with the mobile menu.

use dioxus::prelude::*;

use super::language_selector::LanguageSelector;
use super::layout::use_nav_handler;
use crate::app::language_context::use_language;
use crate::app::Route;
use crate::site::nav::{platform_login_url, NavItem, NavState, NavTarget, NAV_ITEMS};
use crate::site::{resolve, Page};
use crate::i18n::Text;

fn is_current(target: NavTarget, page: Page) -> bool {
    match target {
        NavTarget::Route(path) => resolve(path).is_some_and(|entry| entry.page == page),
        NavTarget::Anchor(_) => false,
    }
}

#[component]
fn NavEntry(item: NavItem, page: Page, mobile: bool, on_select: EventHandler<NavTarget>) -> Element {
    let lang = use_language();
    let current = is_current(item.target, page);
    let class = match (mobile, item.highlighted) {
        (false, false) => "nav-link",
        (false, true) => "nav-link nav-link-highlight",
        (true, false) => "nav-mobile-link",
        (true, true) => "nav-mobile-link nav-link-highlight",
    };

    rsx! {
        a {
            href: item.target.href(),
            class: class,
            "aria-label": item.aria_label.map(|text| lang.text(text)),
            "aria-current": current.then_some("page"),
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                on_select.call(item.target);
            },
            {lang.text(item.label)}
        }
    }
}

/// Fixed header. Turns solid once the page scrolls past the threshold.
#[component]
pub fn Nav() -> Element {
    let lang = use_language();
    let route = use_route::<Route>();
    let page = route.page();
    let on_home = page == Page::Home;
    let mut state = use_signal(NavState::default);
    let handle = use_nav_handler();

    // Listener is removed when the hook slot drops with the component.
    #[cfg(target_arch = "wasm32")]
    {
        use_hook(move || {
            std::rc::Rc::new(crate::app::browser::ScrollListener::attach(move |y| {
                let mut next = *state.peek();
                if next.on_scroll(y) {
                    state.set(next);
                }
            }))
        });
        use_effect(move || {
            let mut next = *state.peek();
            if next.on_scroll(crate::app::browser::scroll_y()) {
                state.set(next);
            }
        });
    }

    let select = move |target: NavTarget| {
        let action = state.write().select(target, on_home);
        handle.call(action);
    };

    let nav = state();
    let bar_class = if nav.is_scrolled() {
        "nav is-scrolled"
    } else {
        "nav"
    };

    rsx! {
        nav { class: bar_class,
            div { class: "nav-inner",
                Link { to: Route::Home {}, class: "nav-logo", "Aidra" }

                div { class: "nav-desktop",
                    for item in NAV_ITEMS.iter().copied() {
                        NavEntry {
                            key: "{item.target.href()}",
                            item,
                            page,
                            mobile: false,
                            on_select: select,
                        }
                    }
                    a {
                        href: platform_login_url(),
                        target: "_blank",
                        rel: "noopener noreferrer",
                        class: "nav-signin",
                        "aria-label": lang.text(Text::SignInAria),
                        {lang.text(Text::SignIn)}
                    }
                    LanguageSelector {}
                }

                div { class: "nav-mobile-controls",
                    LanguageSelector {}
                    button {
                        r#type: "button",
                        class: "nav-toggle",
                        "aria-controls": "mobile-menu",
                        "aria-expanded": nav.is_menu_open(),
                        "aria-label": lang.text(Text::ToggleMenu),
                        onclick: move |_| state.write().toggle_menu(),
                        if nav.is_menu_open() { "✕" } else { "☰" }
                    }
                }
            }

            if nav.is_menu_open() {
                div { id: "mobile-menu", class: "nav-mobile",
                    for item in NAV_ITEMS.iter().copied() {
                        NavEntry {
                            key: "{item.target.href()}",
                            item,
                            page,
                            mobile: true,
                            on_select: select,
                        }
                    }
                    a {
                        href: platform_login_url(),
                        target: "_blank",
                        rel: "noopener noreferrer",
                        class: "nav-signin nav-signin-mobile",
                        "aria-label": lang.text(Text::SignInAria),
                        onclick: move |_| state.write().close_menu(),
                        {lang.text(Text::SignIn)}
                    }
                }
            }
        }
    }
}
