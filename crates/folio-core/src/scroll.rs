//! Smooth-scroll animation math
//!
//! The browser driver samples `ScrollAnimation::position_at` once per
//! animation frame. Landing position is the anchor's document offset plus the
//! trigger's `offset_px`.

use folio_types::ScrollRequest;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Ease-in-out quartic curve on `t` in `[0, 1]`
pub fn ease_in_out_quart(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        8.0 * t.powi(4)
    } else {
        let u = t - 1.0;
        1.0 - 8.0 * u.powi(4)
    }
}

/// Document-relative landing position for an anchor whose top edge sits at
/// `element_top` (viewport-relative) while the page is scrolled to `scroll_y`
pub fn landing_position(element_top: f64, scroll_y: f64, offset_px: i32) -> f64 {
    (element_top + scroll_y + f64::from(offset_px)).max(0.0)
}

/// One scroll from `start_y` to `target_y`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAnimation {
    pub start_y: f64,
    pub target_y: f64,
    pub duration_ms: f64,
}

impl ScrollAnimation {
    pub fn new(start_y: f64, target_y: f64, duration_ms: u32) -> Self {
        Self {
            start_y,
            target_y,
            duration_ms: f64::from(duration_ms),
        }
    }

    /// Animation for `request` once the anchor's position is known
    pub fn for_request(request: &ScrollRequest, scroll_y: f64, element_top: f64) -> Self {
        Self::new(
            scroll_y,
            landing_position(element_top, scroll_y, request.offset_px),
            request.duration_ms,
        )
    }

    pub fn position_at(&self, elapsed_ms: f64) -> f64 {
        if self.is_finished(elapsed_ms) {
            return self.target_y;
        }
        let progress = ease_in_out_quart(elapsed_ms / self.duration_ms);
        self.start_y + (self.target_y - self.start_y) * progress
    }

    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        self.duration_ms <= 0.0 || elapsed_ms >= self.duration_ms
    }
}

/// Latest-wins ownership of the page scroll
///
/// Each new animation takes a fresh token; frames of an animation whose token
/// is no longer current stop instead of fighting the newer one.
#[derive(Debug, Clone, Default)]
pub struct ScrollGeneration {
    current: Arc<AtomicU64>,
}

impl ScrollGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new animation, superseding any running one
    pub fn begin(&self) -> u64 {
        self.current.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.current.load(Ordering::SeqCst) == token
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_types::{Anchor, ScrollRequest};

    #[test]
    fn test_easing_endpoints() {
        assert_eq!(ease_in_out_quart(0.0), 0.0);
        assert_eq!(ease_in_out_quart(1.0), 1.0);
        assert!((ease_in_out_quart(0.5) - 0.5).abs() < 1e-9);
        assert_eq!(ease_in_out_quart(-3.0), 0.0);
        assert_eq!(ease_in_out_quart(7.0), 1.0);
    }

    #[test]
    fn test_easing_monotonic() {
        let mut last = 0.0;
        for step in 1..=100 {
            let value = ease_in_out_quart(f64::from(step) / 100.0);
            assert!(value >= last);
            last = value;
        }
    }

    #[test]
    fn test_landing_applies_offset() {
        // Anchor 1000px below current view top, page scrolled by 200
        let request = ScrollRequest::to(Anchor::Work);
        let anim = ScrollAnimation::for_request(&request, 200.0, 1000.0);
        assert_eq!(anim.start_y, 200.0);
        assert_eq!(anim.target_y, 1120.0);
        assert_eq!(anim.duration_ms, 500.0);

        let contact = ScrollAnimation::for_request(&ScrollRequest::to(Anchor::Contact), 0.0, 3000.0);
        assert_eq!(contact.target_y, 3050.0);
    }

    #[test]
    fn test_landing_never_negative() {
        assert_eq!(landing_position(20.0, 0.0, -80), 0.0);
    }

    #[test]
    fn test_position_over_time() {
        let anim = ScrollAnimation::new(0.0, 1000.0, 500);
        assert_eq!(anim.position_at(0.0), 0.0);
        assert!((anim.position_at(250.0) - 500.0).abs() < 1e-6);
        assert_eq!(anim.position_at(500.0), 1000.0);
        assert_eq!(anim.position_at(900.0), 1000.0);
        assert!(anim.is_finished(500.0));
        assert!(!anim.is_finished(499.0));
    }

    #[test]
    fn test_zero_duration_jumps() {
        let anim = ScrollAnimation::new(100.0, 400.0, 0);
        assert!(anim.is_finished(0.0));
        assert_eq!(anim.position_at(0.0), 400.0);
    }

    #[test]
    fn test_newer_animation_supersedes_older() {
        let generation = ScrollGeneration::new();
        let first = generation.begin();
        assert!(generation.is_current(first));

        let shared = generation.clone();
        let second = shared.begin();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }
}
