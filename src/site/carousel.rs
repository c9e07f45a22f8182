//! Hero carousel state: looping slide index, autoplay and image preload.

use std::time::Duration;

/// Time each slide stays up before autoplay advances.
pub const AUTOPLAY_INTERVAL: Duration = Duration::from_millis(5000);

/// Cross-fade duration between slides.
pub const FADE_DURATION: Duration = Duration::from_millis(1000);

/// Looping slide cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
    hovered: bool,
    /// Bumped by every manual move; autoplay restarts its countdown on change.
    generation: u64,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            index: 0,
            hovered: false,
            generation: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current(&self) -> usize {
        self.index
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.advance();
            self.generation += 1;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
            self.generation += 1;
        }
    }

    /// Jump to a pagination bullet; out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
            self.generation += 1;
        }
    }

    fn advance(&mut self) {
        self.index = (self.index + 1) % self.len;
    }

    /// Pointer over the carousel pauses autoplay.
    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    pub fn is_paused(&self) -> bool {
        self.hovered
    }

    /// Autoplay tick for a countdown started at generation `since`.
    ///
    /// A manual move in the meantime voids the tick, so a slide picked by
    /// hand gets a full interval.
    pub fn tick(&mut self, since: u64) -> bool {
        if self.hovered || self.len < 2 || since != self.generation {
            return false;
        }
        self.advance();
        true
    }
}

/// Tracks hero image preloading.
///
/// Loading ends when every image has loaded, or at the first failure: the
/// carousel is shown either way.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Preload {
    total: usize,
    loaded: usize,
    failed: bool,
}

impl Preload {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            loaded: 0,
            failed: false,
        }
    }

    pub fn is_loading(&self) -> bool {
        !self.failed && self.loaded < self.total
    }

    pub fn on_loaded(&mut self) {
        self.loaded = (self.loaded + 1).min(self.total);
    }

    pub fn on_failed(&mut self) {
        self.failed = true;
    }

    pub fn has_failed(&self) -> bool {
        self.failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_loops_both_ways() {
        let mut carousel = Carousel::new(4);
        carousel.prev();
        assert_eq!(carousel.current(), 3);
        carousel.next();
        assert_eq!(carousel.current(), 0);
        carousel.go_to(2);
        assert_eq!(carousel.current(), 2);
        carousel.go_to(9);
        assert_eq!(carousel.current(), 2);
    }

    #[test]
    fn test_hover_pauses_autoplay() {
        let mut carousel = Carousel::new(4);
        assert!(carousel.tick(0));
        carousel.set_hovered(true);
        assert!(!carousel.tick(0));
        assert_eq!(carousel.current(), 1);
        carousel.set_hovered(false);
        assert!(carousel.tick(0));
        assert_eq!(carousel.current(), 2);
    }

    #[test]
    fn test_manual_navigation_restarts_countdown() {
        let mut carousel = Carousel::new(4);
        let started = carousel.generation();
        assert!(carousel.tick(started));
        assert_eq!(carousel.generation(), started, "autoplay is not a manual move");

        carousel.go_to(3);
        assert!(!carousel.tick(started), "stale countdown must not advance");
        assert_eq!(carousel.current(), 3);

        let restarted = carousel.generation();
        carousel.prev();
        carousel.next();
        assert_ne!(carousel.generation(), restarted);
        assert!(carousel.tick(carousel.generation()));
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn test_empty_carousel_is_inert() {
        let mut carousel = Carousel::new(0);
        carousel.next();
        carousel.prev();
        assert!(!carousel.tick(carousel.generation()));
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn test_preload_clears_after_all_images() {
        let mut preload = Preload::new(3);
        preload.on_loaded();
        preload.on_loaded();
        assert!(preload.is_loading());
        preload.on_loaded();
        assert!(!preload.is_loading());
    }

    #[test]
    fn test_preload_failure_clears_loading_anyway() {
        let mut preload = Preload::new(4);
        preload.on_loaded();
        preload.on_failed();
        assert!(!preload.is_loading());
        assert!(preload.has_failed());
    }
}
