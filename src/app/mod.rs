//! Dioxus fullstack application entry point.
//!
//! This module provides the root `App` component and the route table. The
//! same tree renders on the server and hydrates in the browser.

use dioxus::prelude::*;

pub mod browser;
pub mod components;
pub mod language_context;
pub mod pages;
pub mod sections;

use components::Shell;
use language_context::use_language_provider;
use pages::{
    ApiIndex, ApiReference, Careers, HelpCenter, HelpIndex, Home, Login, NotFound, PrivacyPolicy,
    TermsOfUse,
};

use crate::site::Page;

/// Root app component with routing
#[component]
pub fn App() -> Element {
    // Locale lives for as long as the root does
    use_language_provider();

    rsx! {
        Router::<Route> {}
    }
}

/// Application routes
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/login")]
        Login {},
        #[route("/privacy-policy")]
        PrivacyPolicy {},
        #[route("/terms-of-use")]
        TermsOfUse {},
        #[route("/careers")]
        Careers {},
        #[route("/help")]
        HelpIndex {},
        #[route("/help/:..segments")]
        HelpCenter { segments: Vec<String> },
        #[route("/api")]
        ApiIndex {},
        #[route("/api/:..segments")]
        ApiReference { segments: Vec<String> },
        #[route("/:..route")]
        NotFound { route: Vec<String> },
}

impl Route {
    /// Page descriptor (guard, document title) for this route.
    pub fn page(&self) -> Page {
        match self {
            Route::Home {} => Page::Home,
            Route::Login {} => Page::Login,
            Route::PrivacyPolicy {} => Page::PrivacyPolicy,
            Route::TermsOfUse {} => Page::TermsOfUse,
            Route::Careers {} => Page::Careers,
            Route::HelpIndex {} | Route::HelpCenter { .. } => Page::HelpCenter,
            Route::ApiIndex {} | Route::ApiReference { .. } => Page::ApiReference,
            Route::NotFound { .. } => Page::NotFound,
        }
    }
}
