//! Full-bleed hero carousel.

use dioxus::core::Task;
use dioxus::prelude::*;
use futures::stream::{FuturesUnordered, StreamExt};

use crate::app::browser;
use crate::app::language_context::use_language;
use crate::content::{hero_image_urls, HERO_SLIDES};
use crate::i18n::Text;
use crate::platform;
use crate::site::carousel::{Carousel, Preload, AUTOPLAY_INTERVAL, FADE_DURATION};

#[component]
pub fn Hero() -> Element {
    let lang = use_language();
    let locale = lang.get();
    let mut carousel = use_signal(|| Carousel::new(HERO_SLIDES.len()));
    let mut preload = use_signal(|| Preload::new(HERO_SLIDES.len()));

    let generation = use_memo(move || carousel.read().generation());
    let mut autoplay = use_signal(|| None::<Task>);

    // Both tasks belong to this scope and stop when the hero unmounts. A
    // manual move restarts the autoplay countdown.
    use_effect(move || {
        let since = generation();
        if let Some(previous) = *autoplay.peek() {
            previous.cancel();
        }
        let task = spawn(async move {
            loop {
                platform::sleep(AUTOPLAY_INTERVAL).await;
                let mut next = *carousel.peek();
                if next.tick(since) {
                    carousel.set(next);
                }
            }
        });
        autoplay.set(Some(task));
    });

    use_effect(move || {
        spawn(async move {
            let mut loads: FuturesUnordered<_> = hero_image_urls()
                .into_iter()
                .map(browser::preload_image)
                .collect();
            while let Some(result) = loads.next().await {
                match result {
                    Ok(()) => preload.write().on_loaded(),
                    Err(e) => {
                        tracing::error!("Error preloading hero images: {}", e);
                        preload.write().on_failed();
                        break;
                    }
                }
            }
        });
    });

    let state = carousel();
    let fade = format!("transition-duration: {}ms", FADE_DURATION.as_millis());

    rsx! {
        section {
            class: "hero",
            onmouseenter: move |_| carousel.write().set_hovered(true),
            onmouseleave: move |_| carousel.write().set_hovered(false),

            if preload.read().is_loading() {
                div { class: "hero-loading", role: "status", "aria-label": lang.text(Text::Loading),
                    div { class: "spinner" }
                }
            }

            for (index, slide) in HERO_SLIDES.iter().enumerate() {
                div {
                    key: "{slide.photo_id}",
                    class: if index == state.current() { "hero-slide is-active" } else { "hero-slide" },
                    style: "{fade}",
                    "aria-hidden": index != state.current(),
                    div { class: "hero-overlay" }
                    img {
                        class: "hero-image",
                        src: slide.image_url(),
                        alt: slide.alt.get(locale),
                        loading: if index == 0 { "eager" } else { "lazy" },
                    }
                    div { class: "hero-content",
                        h1 { class: "hero-title",
                            {slide.title.get(locale)}
                            br {}
                            span { class: "gradient-text", {slide.subtitle.get(locale)} }
                        }
                        p { class: "hero-description", {slide.description.get(locale)} }
                    }
                }
            }

            button {
                r#type: "button",
                class: "hero-arrow hero-arrow-prev",
                "aria-label": lang.text(Text::PreviousSlide),
                onclick: move |_| carousel.write().prev(),
                "‹"
            }
            button {
                r#type: "button",
                class: "hero-arrow hero-arrow-next",
                "aria-label": lang.text(Text::NextSlide),
                onclick: move |_| carousel.write().next(),
                "›"
            }

            div { class: "hero-pagination",
                for index in 0..state.len() {
                    button {
                        key: "{index}",
                        r#type: "button",
                        class: if index == state.current() { "hero-bullet is-active" } else { "hero-bullet" },
                        "aria-label": format!("{} {}", lang.text(Text::GoToSlide), index + 1),
                        "aria-current": (index == state.current()).then_some("true"),
                        onclick: move |_| carousel.write().go_to(index),
                    }
                }
            }
        }
    }
}
