//! Landing page.

use dioxus::prelude::*;

use crate::app::sections::{About, Cta, Features, Hero, Products, Vision};

#[component]
pub fn Home() -> Element {
    rsx! {
        Hero {}
        Features {}
        Products {}
        Vision {}
        About {}
        Cta {}
    }
}
