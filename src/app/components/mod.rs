//! Shared UI components.

pub mod error_alert;
pub mod footer;
pub mod form_inputs;
pub mod language_selector;
pub mod layout;
pub mod nav;
pub mod reveal;
pub mod route_guard;

pub use error_alert::ErrorAlert;
pub use footer::Footer;
pub use form_inputs::{ResumeUpload, TextAreaField, TextField};
pub use language_selector::LanguageSelector;
pub use layout::{use_nav_handler, Shell};
pub use nav::Nav;
pub use reveal::Reveal;
pub use route_guard::RouteGuard;
