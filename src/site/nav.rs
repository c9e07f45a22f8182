//! Navigation shell state: scroll shadow and mobile menu.

use std::sync::OnceLock;

use crate::i18n::Text;

/// Offset (px) past which the bar gets its solid background.
pub const SCROLL_THRESHOLD: f64 = 20.0;

pub const DEFAULT_PLATFORM_LOGIN_URL: &str = "https://dev.aidra.tech/login";

static PLATFORM_LOGIN_URL: OnceLock<String> = OnceLock::new();

/// Set the external sign-in target once at startup. Returns false if it was
/// already set.
pub fn set_platform_login_url(url: impl Into<String>) -> bool {
    PLATFORM_LOGIN_URL.set(url.into()).is_ok()
}

/// External sign-in target: runtime setting, then the value baked in at
/// build time, then the default.
pub fn platform_login_url() -> &'static str {
    PLATFORM_LOGIN_URL
        .get()
        .map(String::as_str)
        .or(option_env!("AIDRA_PLATFORM_LOGIN_URL"))
        .unwrap_or(DEFAULT_PLATFORM_LOGIN_URL)
}

/// Section anchors on the home page.
pub const ANCHOR_PRODUCTS: &str = "products";
pub const ANCHOR_VISION: &str = "saudi-2030-vision";
pub const ANCHOR_ABOUT: &str = "about-us";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavTarget {
    /// In-page section on the home page (`/#id`).
    Anchor(&'static str),
    /// Another route.
    Route(&'static str),
}

impl NavTarget {
    /// Parse an href the way the menu declares them (`/#id` or `/path`).
    pub fn parse(href: &'static str) -> Self {
        match href.strip_prefix("/#") {
            Some(id) => NavTarget::Anchor(id),
            None => NavTarget::Route(href),
        }
    }

    pub fn href(&self) -> String {
        match self {
            NavTarget::Anchor(id) => format!("/#{id}"),
            NavTarget::Route(path) => path.to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: Text,
    pub target: NavTarget,
    pub highlighted: bool,
    pub aria_label: Option<Text>,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        label: Text::NavWhatWeDo,
        target: NavTarget::Anchor(ANCHOR_PRODUCTS),
        highlighted: false,
        aria_label: None,
    },
    NavItem {
        label: Text::NavVision,
        target: NavTarget::Anchor(ANCHOR_VISION),
        highlighted: false,
        aria_label: None,
    },
    NavItem {
        label: Text::NavAboutUs,
        target: NavTarget::Anchor(ANCHOR_ABOUT),
        highlighted: false,
        aria_label: None,
    },
    NavItem {
        label: Text::NavCareers,
        target: NavTarget::Route("/careers"),
        highlighted: true,
        aria_label: Some(Text::NavCareersAria),
    },
];

/// Side effect the view must carry out after a selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavAction {
    /// Smooth-scroll to an element on the current page.
    ScrollTo(&'static str),
    /// Route change; `anchor` is scrolled to once the page has mounted.
    Navigate {
        path: &'static str,
        anchor: Option<&'static str>,
    },
}

/// Two independent flags; resets with the component.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    scrolled: bool,
    mobile_menu_open: bool,
}

impl NavState {
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    /// Apply a scroll position. Returns true when the flag flipped.
    pub fn on_scroll(&mut self, offset_y: f64) -> bool {
        let scrolled = offset_y > SCROLL_THRESHOLD;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn toggle_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    pub fn close_menu(&mut self) {
        self.mobile_menu_open = false;
    }

    /// Any selection closes the mobile menu.
    pub fn select(&mut self, target: NavTarget, on_home: bool) -> NavAction {
        self.close_menu();
        match target {
            NavTarget::Anchor(id) if on_home => NavAction::ScrollTo(id),
            NavTarget::Anchor(id) => NavAction::Navigate {
                path: "/",
                anchor: Some(id),
            },
            NavTarget::Route(path) => NavAction::Navigate { path, anchor: None },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_threshold_flips_both_ways() {
        let mut nav = NavState::default();
        assert!(!nav.on_scroll(0.0));
        assert!(!nav.on_scroll(20.0));
        assert!(!nav.is_scrolled());

        assert!(nav.on_scroll(20.5));
        assert!(nav.is_scrolled());
        assert!(!nav.on_scroll(400.0));

        assert!(nav.on_scroll(3.0));
        assert!(!nav.is_scrolled());
    }

    #[test]
    fn test_menu_toggle_is_independent_of_scroll() {
        let mut nav = NavState::default();
        nav.toggle_menu();
        nav.on_scroll(100.0);
        assert!(nav.is_menu_open());
        assert!(nav.is_scrolled());
        nav.toggle_menu();
        assert!(!nav.is_menu_open());
    }

    #[test]
    fn test_anchor_selection_scrolls_and_closes_menu() {
        let mut nav = NavState::default();
        nav.toggle_menu();
        let action = nav.select(NavTarget::parse("/#products"), true);
        assert_eq!(action, NavAction::ScrollTo("products"));
        assert!(!nav.is_menu_open());
    }

    #[test]
    fn test_anchor_from_other_page_navigates_home_first() {
        let mut nav = NavState::default();
        let action = nav.select(NavTarget::Anchor(ANCHOR_ABOUT), false);
        assert_eq!(
            action,
            NavAction::Navigate {
                path: "/",
                anchor: Some("about-us")
            }
        );
    }

    #[test]
    fn test_platform_login_url_is_absolute() {
        let url = url::Url::parse(platform_login_url()).unwrap();
        assert_eq!(url.scheme(), "https");
    }

    #[test]
    fn test_menu_items() {
        let highlighted: Vec<_> = NAV_ITEMS.iter().filter(|i| i.highlighted).collect();
        assert_eq!(highlighted.len(), 1);
        assert_eq!(highlighted[0].target, NavTarget::Route("/careers"));
        assert_eq!(NavTarget::Anchor(ANCHOR_VISION).href(), "/#saudi-2030-vision");
    }
}
