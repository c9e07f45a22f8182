//! Session gate for member-only pages.

use dioxus::prelude::*;

use crate::app::language_context::use_language;
use crate::app::Route;
use crate::auth;
use crate::i18n::Text;
use crate::site::{decide, GuardDecision, Page, SessionStatus};

/// Renders `children` only once a live session has been found; otherwise
/// replaces the current entry with the login page.
#[component]
pub fn RouteGuard(page: Page, children: Element) -> Element {
    let navigator = use_navigator();
    let mut status = use_signal(|| SessionStatus::Unknown);

    // Storage is only readable after hydration; the server and the first
    // client frame both see Unknown.
    use_effect(move || {
        status.set(auth::current_session_status());
    });

    use_effect(move || {
        if decide(page.guard(), status()) == GuardDecision::RedirectToLogin {
            tracing::info!("No session for {:?}, redirecting to login", page);
            navigator.replace(Route::Login {});
        }
    });

    rsx! {
        GuardGate { decision: decide(page.guard(), status()), {children} }
    }
}

/// What the guard shows for a decision. Only `Render` lets children through.
#[component]
fn GuardGate(decision: GuardDecision, children: Element) -> Element {
    let lang = use_language();

    match decision {
        GuardDecision::Render => children,
        GuardDecision::Pending | GuardDecision::RedirectToLogin => rsx! {
            section { class: "page page-pending", "aria-busy": "true",
                p { class: "text-muted", {lang.text(Text::CheckingSession)} }
            }
        },
    }
}

#[cfg(all(test, feature = "server"))]
mod tests {
    use super::*;
    use crate::app::language_context::use_language_provider;
    use crate::i18n::{t, Locale};

    const MEMBER_ONLY: &str = "Member-only help article";

    #[component]
    fn GuardedHelp(status: SessionStatus) -> Element {
        use_language_provider();
        rsx! {
            GuardGate { decision: decide(Page::HelpCenter.guard(), status),
                p { "{MEMBER_ONLY}" }
            }
        }
    }

    fn render(status: SessionStatus) -> String {
        let mut dom = VirtualDom::new_with_props(GuardedHelp, GuardedHelpProps { status });
        dom.rebuild_in_place();
        dioxus::ssr::render(&dom)
    }

    #[test]
    fn test_unchecked_session_never_shows_guarded_content() {
        let html = render(SessionStatus::Unknown);
        assert!(!html.contains(MEMBER_ONLY), "{html}");
        assert!(html.contains(t(Locale::En, Text::CheckingSession)), "{html}");
    }

    #[test]
    fn test_missing_session_never_shows_guarded_content() {
        let html = render(SessionStatus::Absent);
        assert!(!html.contains(MEMBER_ONLY), "{html}");
        assert!(html.contains("aria-busy"), "{html}");
    }

    #[test]
    fn test_live_session_shows_guarded_content() {
        let html = render(SessionStatus::Present);
        assert!(html.contains(MEMBER_ONLY), "{html}");
        assert!(!html.contains(t(Locale::En, Text::CheckingSession)), "{html}");
    }
}
