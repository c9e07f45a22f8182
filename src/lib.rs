//! Aidra landing site
//!
//! Marketing site for Aidra, built as a Dioxus fullstack application: the
//! server renders every page and the wasm client hydrates it.
//!
//! This library provides:
//! - Page shell, home page sections, careers and legal pages (`app`)
//! - English/Arabic interface strings and locale model
//! - Form drafts with client-side validation
//! - Route table and the session guard decision
//! - Read-only session lookup for member pages
//! - Optional error reporting to a Sentry-compatible collector

pub mod app;
pub mod auth;
#[cfg(feature = "server")]
pub mod config;
pub mod content;
pub mod forms;
pub mod i18n;
pub mod platform;
pub mod site;
pub mod telemetry;
