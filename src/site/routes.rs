//! Static route table and the session guard decision.
//!
//! The Dioxus router in `app` owns path parsing; this table carries what the
//! shell needs to know about each page (guard, document title) in a form that
//! can be checked without rendering anything.

use crate::i18n::{t, Locale, Text};

pub const SITE_NAME: &str = "Aidra";
pub const SITE_TITLE: &str = "Aidra - AI Innovation for Business";
pub const SITE_DESCRIPTION: &str =
    "Transform your business through AI innovation with Aidra's comprehensive solutions.";
pub const LOGIN_PATH: &str = "/login";

/// Content pages reachable through the router.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Login,
    PrivacyPolicy,
    TermsOfUse,
    Careers,
    HelpCenter,
    ApiReference,
    NotFound,
}

/// Access requirement of a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Guard {
    Public,
    SessionRequired,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub page: Page,
    /// Path pattern; a trailing `/*` matches any sub-path.
    pub pattern: &'static str,
    pub guard: Guard,
}

/// Declared routes, in match order. Unknown paths fall through to
/// [`Page::NotFound`], which is not part of the table.
pub const ROUTE_TABLE: &[RouteEntry] = &[
    RouteEntry { page: Page::Home, pattern: "/", guard: Guard::Public },
    RouteEntry { page: Page::Login, pattern: "/login", guard: Guard::Public },
    RouteEntry { page: Page::PrivacyPolicy, pattern: "/privacy-policy", guard: Guard::Public },
    RouteEntry { page: Page::TermsOfUse, pattern: "/terms-of-use", guard: Guard::Public },
    RouteEntry { page: Page::Careers, pattern: "/careers", guard: Guard::Public },
    RouteEntry { page: Page::HelpCenter, pattern: "/help/*", guard: Guard::SessionRequired },
    RouteEntry { page: Page::ApiReference, pattern: "/api/*", guard: Guard::SessionRequired },
];

impl RouteEntry {
    pub fn matches(&self, path: &str) -> bool {
        let path = normalize(path);
        match self.pattern.strip_suffix("/*") {
            Some(prefix) => {
                path == prefix || path.strip_prefix(prefix).is_some_and(|rest| rest.starts_with('/'))
            }
            None => path == self.pattern,
        }
    }
}

/// Drop query, fragment and a trailing slash.
fn normalize(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];
    if path.len() > 1 {
        path.trim_end_matches('/')
    } else if path.is_empty() {
        "/"
    } else {
        path
    }
}

/// First matching entry, if any.
pub fn resolve(path: &str) -> Option<&'static RouteEntry> {
    ROUTE_TABLE.iter().find(|entry| entry.matches(path))
}

impl Page {
    pub fn entry(&self) -> Option<&'static RouteEntry> {
        ROUTE_TABLE.iter().find(|entry| entry.page == *self)
    }

    pub fn guard(&self) -> Guard {
        self.entry().map(|e| e.guard).unwrap_or(Guard::Public)
    }

    fn title_text(&self) -> Option<Text> {
        match self {
            Page::Home => None,
            Page::Login => Some(Text::SignIn),
            Page::PrivacyPolicy => Some(Text::PrivacyPolicy),
            Page::TermsOfUse => Some(Text::TermsOfUse),
            Page::Careers => Some(Text::NavCareers),
            Page::HelpCenter => Some(Text::HelpTitle),
            Page::ApiReference => Some(Text::ApiTitle),
            Page::NotFound => Some(Text::NotFoundTitle),
        }
    }

    /// Browser tab title for this page.
    pub fn document_title(&self, locale: Locale) -> String {
        match self.title_text() {
            Some(text) => format!("{} | {}", t(locale, text), SITE_NAME),
            None => SITE_TITLE.to_string(),
        }
    }
}

/// What the session check currently knows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    /// Not checked yet (server render, first client frame).
    Unknown,
    Present,
    Absent,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Pending,
    RedirectToLogin,
}

/// Gate a page on the session status.
pub fn decide(guard: Guard, status: SessionStatus) -> GuardDecision {
    match (guard, status) {
        (Guard::Public, _) => GuardDecision::Render,
        (Guard::SessionRequired, SessionStatus::Present) => GuardDecision::Render,
        (Guard::SessionRequired, SessionStatus::Unknown) => GuardDecision::Pending,
        (Guard::SessionRequired, SessionStatus::Absent) => GuardDecision::RedirectToLogin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_table_paths() {
        let patterns: Vec<_> = ROUTE_TABLE.iter().map(|e| e.pattern).collect();
        assert_eq!(
            patterns,
            [
                "/",
                "/login",
                "/privacy-policy",
                "/terms-of-use",
                "/careers",
                "/help/*",
                "/api/*"
            ]
        );
    }

    #[test]
    fn test_only_help_and_api_are_guarded() {
        let guarded: Vec<_> = ROUTE_TABLE
            .iter()
            .filter(|e| e.guard == Guard::SessionRequired)
            .map(|e| e.page)
            .collect();
        assert_eq!(guarded, [Page::HelpCenter, Page::ApiReference]);
    }

    #[test]
    fn test_resolve_handles_wildcards_and_noise() {
        assert_eq!(resolve("/").map(|e| e.page), Some(Page::Home));
        assert_eq!(resolve("/careers/").map(|e| e.page), Some(Page::Careers));
        assert_eq!(resolve("/careers?ref=x").map(|e| e.page), Some(Page::Careers));
        assert_eq!(resolve("/help").map(|e| e.page), Some(Page::HelpCenter));
        assert_eq!(resolve("/help/billing/invoices").map(|e| e.page), Some(Page::HelpCenter));
        assert_eq!(resolve("/api/v1").map(|e| e.page), Some(Page::ApiReference));
        assert_eq!(resolve("/helpdesk"), None);
        assert_eq!(resolve("/apiary"), None);
        assert_eq!(resolve("/does-not-exist"), None);
    }

    #[test]
    fn test_guarded_paths_without_session_go_to_login() {
        for path in ["/help", "/api"] {
            let entry = resolve(path).expect("declared route");
            assert_eq!(
                decide(entry.guard, SessionStatus::Absent),
                GuardDecision::RedirectToLogin
            );
            assert_eq!(decide(entry.guard, SessionStatus::Present), GuardDecision::Render);
            // Never flash guarded content before the check completes.
            assert_eq!(decide(entry.guard, SessionStatus::Unknown), GuardDecision::Pending);
        }
    }

    #[test]
    fn test_public_pages_ignore_session() {
        for status in [SessionStatus::Unknown, SessionStatus::Present, SessionStatus::Absent] {
            assert_eq!(decide(Page::Careers.guard(), status), GuardDecision::Render);
        }
    }

    #[test]
    fn test_document_titles_follow_locale() {
        assert_eq!(Page::Home.document_title(Locale::En), SITE_TITLE);
        assert_eq!(Page::Careers.document_title(Locale::En), "Careers | Aidra");
        assert_eq!(Page::Careers.document_title(Locale::Ar), "الوظائف | Aidra");
        assert_eq!(Page::NotFound.guard(), Guard::Public);
    }
}
