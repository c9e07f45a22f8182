//! One-shot entrance reveal driven by element visibility.

/// Fraction of a section that must be on screen before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// A single intersection report.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionChange {
    /// Visible fraction in `0.0..=1.0`.
    pub ratio: f64,
    pub is_intersecting: bool,
}

/// Capability that reports visibility changes for one element.
///
/// The browser implementation wraps `IntersectionObserver`; tests drive it
/// by hand.
pub trait VisibilityObserver {
    type Target;

    /// Start reporting changes for `target` crossing `threshold`.
    fn observe(
        &mut self,
        target: &Self::Target,
        threshold: f64,
        on_change: Box<dyn FnMut(IntersectionChange)>,
    );

    /// Stop all reporting. Safe to call more than once.
    fn disconnect(&mut self);
}

/// Latches to revealed on the first qualifying change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealTrigger {
    threshold: f64,
    revealed: bool,
}

impl Default for RevealTrigger {
    fn default() -> Self {
        Self::new(REVEAL_THRESHOLD)
    }
}

impl RevealTrigger {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            revealed: false,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Feed a change. Returns true exactly once, when the element first
    /// reveals; the observer can be disconnected after that.
    pub fn observe(&mut self, change: IntersectionChange) -> bool {
        if self.revealed {
            return false;
        }
        if change.is_intersecting && change.ratio >= self.threshold {
            self.revealed = true;
            return true;
        }
        false
    }

    /// Markup class for the current state.
    pub fn class(&self) -> &'static str {
        if self.revealed {
            "reveal is-visible"
        } else {
            "reveal"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Observer driven by the test.
    #[derive(Default)]
    struct ManualObserver {
        callback: Option<Box<dyn FnMut(IntersectionChange)>>,
        disconnects: usize,
    }

    impl ManualObserver {
        fn emit(&mut self, ratio: f64) {
            if let Some(cb) = self.callback.as_mut() {
                cb(IntersectionChange {
                    ratio,
                    is_intersecting: ratio > 0.0,
                });
            }
        }
    }

    impl VisibilityObserver for ManualObserver {
        type Target = ();

        fn observe(
            &mut self,
            _target: &(),
            _threshold: f64,
            on_change: Box<dyn FnMut(IntersectionChange)>,
        ) {
            self.callback = Some(on_change);
        }

        fn disconnect(&mut self) {
            self.callback = None;
            self.disconnects += 1;
        }
    }

    fn change(ratio: f64) -> IntersectionChange {
        IntersectionChange {
            ratio,
            is_intersecting: ratio > 0.0,
        }
    }

    #[test]
    fn test_reveals_once_at_threshold() {
        let mut trigger = RevealTrigger::default();
        assert!(!trigger.observe(change(0.05)));
        assert!(trigger.observe(change(0.1)));
        assert!(trigger.is_revealed());
        // Scrolling away and back never re-fires.
        assert!(!trigger.observe(change(0.0)));
        assert!(!trigger.observe(change(0.8)));
        assert!(trigger.is_revealed());
        assert_eq!(trigger.class(), "reveal is-visible");
    }

    #[test]
    fn test_non_intersecting_report_does_not_reveal() {
        let mut trigger = RevealTrigger::new(0.0);
        assert!(!trigger.observe(IntersectionChange {
            ratio: 0.0,
            is_intersecting: false
        }));
    }

    #[test]
    fn test_observer_feeds_trigger() {
        let trigger = Rc::new(RefCell::new(RevealTrigger::default()));
        let fired = Rc::new(RefCell::new(0));
        let mut observer = ManualObserver::default();

        let (t, f) = (trigger.clone(), fired.clone());
        observer.observe(
            &(),
            REVEAL_THRESHOLD,
            Box::new(move |c| {
                if t.borrow_mut().observe(c) {
                    *f.borrow_mut() += 1;
                }
            }),
        );

        observer.emit(0.02);
        observer.emit(0.5);
        observer.emit(0.9);
        assert_eq!(*fired.borrow(), 1);
        assert!(trigger.borrow().is_revealed());

        observer.disconnect();
        observer.emit(0.5);
        assert_eq!(observer.disconnects, 1);
    }
}
