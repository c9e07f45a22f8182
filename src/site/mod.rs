//! Render-independent model of the site shell: routes and guard, navigation
//! state, visibility reveal and the hero carousel.

pub mod carousel;
pub mod nav;
pub mod routes;
pub mod visibility;

pub use routes::{decide, resolve, Guard, GuardDecision, Page, SessionStatus};
