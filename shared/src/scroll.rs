//! # Scroll Math
//!
//! Platform-independent pieces of the smooth-scroll behaviour: easing curves, tweening,
//! inertial (lerp) smoothing and the landing header's hide-on-scroll rule. The browser glue
//! lives in `solutpag-web/src/state/scroll.rs`.

/// Default header height used to offset anchor jumps when the header is not measurable.
pub const DEFAULT_HEADER_HEIGHT: f64 = 72.0;

/// Gap between the sticky header and the top of the viewport.
pub const HEADER_GAP: f64 = 16.0;

/// Duration of an anchor jump.
pub const ANCHOR_SCROLL_MS: f64 = 1150.0;

/// Fraction of the distance covered per frame by inertial scrolling.
pub const LERP_FACTOR: f64 = 0.1;

/// Wheel delta multiplier for inertial scrolling.
pub const WHEEL_MULTIPLIER: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    OutCubic,
    InOutQuad,
}

impl Easing {
    /// Apply the curve to `t`, clamped to `[0, 1]`.
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::OutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

/// Where to scroll.
#[derive(Debug, Clone, PartialEq)]
pub enum ScrollTarget {
    /// Absolute document offset in pixels.
    Top(f64),
    /// CSS selector of an in-page anchor, e.g. `#recursos`.
    Anchor(String),
}

impl ScrollTarget {
    /// Anchor target from an `href`. Only `#fragment` links qualify.
    pub fn from_href(href: &str) -> Option<ScrollTarget> {
        (href.len() > 1 && href.starts_with('#')).then(|| ScrollTarget::Anchor(href.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollOptions {
    pub duration_ms: f64,
    pub easing: Easing,
    /// Subtracted from the target position (room for the sticky header).
    pub offset: f64,
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self {
            duration_ms: ANCHOR_SCROLL_MS,
            easing: Easing::OutCubic,
            offset: anchor_offset(None),
        }
    }
}

/// Offset that keeps an anchor clear of the sticky header.
pub fn anchor_offset(header_height: Option<f64>) -> f64 {
    let height = header_height
        .filter(|h| *h > 0.0)
        .unwrap_or(DEFAULT_HEADER_HEIGHT);
    height + HEADER_GAP
}

/// Linear interpolation from `from` toward `to` by `factor`.
pub fn lerp(from: f64, to: f64, factor: f64) -> f64 {
    from + (to - from) * factor
}

/// A time-based scroll animation from one offset to another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub start: f64,
    pub end: f64,
    pub duration_ms: f64,
    pub easing: Easing,
}

impl Tween {
    pub fn new(start: f64, end: f64, options: &ScrollOptions) -> Self {
        Self {
            start,
            end,
            duration_ms: options.duration_ms,
            easing: options.easing,
        }
    }

    /// Position after `elapsed_ms`.
    pub fn position(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return self.end;
        }
        let progress = self.easing.apply(elapsed_ms / self.duration_ms);
        self.start + (self.end - self.start) * progress
    }

    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.duration_ms
    }
}

/// Inertial wheel scrolling: wheel deltas move a target, the page eases toward it each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InertialScroll {
    pub current: f64,
    pub target: f64,
}

impl InertialScroll {
    /// Pixels under which the animation snaps to its target.
    const SETTLE_PX: f64 = 0.5;

    pub fn new(position: f64) -> Self {
        Self {
            current: position,
            target: position,
        }
    }

    /// Push the target by a wheel delta, clamped to `[0, max_scroll]`.
    pub fn push(&mut self, delta: f64, max_scroll: f64) {
        self.target = (self.target + delta * WHEEL_MULTIPLIER).clamp(0.0, max_scroll.max(0.0));
    }

    /// Advance one frame. Returns the new position.
    pub fn step(&mut self) -> f64 {
        self.current = lerp(self.current, self.target, LERP_FACTOR);
        if (self.target - self.current).abs() < Self::SETTLE_PX {
            self.current = self.target;
        }
        self.current
    }

    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }

    /// Resynchronise after something else moved the page.
    pub fn jump(&mut self, position: f64) {
        self.current = position;
        self.target = position;
    }
}

/// Hide-on-scroll rule for the landing header.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderVisibility {
    last_y: f64,
    hidden: bool,
}

impl HeaderVisibility {
    /// Scroll progress (0..1) past which scrolling down hides the header.
    pub const HIDE_AT: f64 = 0.15;
    /// Movements smaller than this are ignored.
    pub const DEAD_ZONE: f64 = 6.0;

    pub fn new() -> Self {
        Self {
            last_y: 0.0,
            hidden: false,
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Feed a new scroll position. `progress` is `y / (document height - viewport height)`.
    pub fn observe(&mut self, y: f64, progress: f64, menu_open: bool) -> bool {
        if menu_open {
            self.hidden = false;
            self.last_y = y;
            return self.hidden;
        }

        let delta = y - self.last_y;
        if delta.abs() < Self::DEAD_ZONE {
            return self.hidden;
        }

        let going_down = delta > 0.0;
        if going_down && progress >= Self::HIDE_AT {
            self.hidden = true;
        }
        if !going_down || progress <= Self::HIDE_AT * 0.9 {
            self.hidden = false;
        }

        self.last_y = y;
        self.hidden
    }

    /// Pointer entered the header.
    pub fn reveal(&mut self) {
        self.hidden = false;
    }
}

impl Default for HeaderVisibility {
    fn default() -> Self {
        Self::new()
    }
}

/// Scroll progress in `[0, 1]`.
pub fn scroll_progress(y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (y / scrollable).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_endpoints() {
        for easing in [Easing::Linear, Easing::OutCubic, Easing::InOutQuad] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
            assert_eq!(easing.apply(2.0), 1.0);
        }
        assert_eq!(Easing::InOutQuad.apply(0.5), 0.5);
        assert!(Easing::OutCubic.apply(0.5) > 0.5);
    }

    #[test]
    fn test_tween() {
        let options = ScrollOptions {
            duration_ms: 1000.0,
            easing: Easing::Linear,
            offset: 0.0,
        };
        let tween = Tween::new(100.0, 600.0, &options);
        assert_eq!(tween.position(0.0), 100.0);
        assert_eq!(tween.position(500.0), 350.0);
        assert_eq!(tween.position(5000.0), 600.0);
        assert!(tween.is_finished(1000.0));
        assert!(!tween.is_finished(999.0));
    }

    #[test]
    fn test_zero_duration_tween_jumps() {
        let options = ScrollOptions {
            duration_ms: 0.0,
            ..ScrollOptions::default()
        };
        assert_eq!(Tween::new(0.0, 300.0, &options).position(0.0), 300.0);
    }

    #[test]
    fn test_anchor_offset() {
        assert_eq!(anchor_offset(None), 88.0);
        assert_eq!(anchor_offset(Some(0.0)), 88.0);
        assert_eq!(anchor_offset(Some(64.0)), 80.0);
    }

    #[test]
    fn test_scroll_target_from_href() {
        assert_eq!(ScrollTarget::from_href("#recursos"), Some(ScrollTarget::Anchor("#recursos".into())));
        assert_eq!(ScrollTarget::from_href("#"), None);
        assert_eq!(ScrollTarget::from_href("/auth/login"), None);
    }

    #[test]
    fn test_inertial_scroll_converges_and_clamps() {
        let mut scroll = InertialScroll::new(0.0);
        scroll.push(100.0, 1000.0);
        let first = scroll.step();
        assert_eq!(first, 10.0);
        for _ in 0..200 {
            scroll.step();
        }
        assert!(scroll.is_settled());
        assert_eq!(scroll.current, 100.0);

        scroll.push(-500.0, 1000.0);
        assert_eq!(scroll.target, 0.0);
        scroll.push(5000.0, 1000.0);
        assert_eq!(scroll.target, 1000.0);
    }

    #[test]
    fn test_header_hides_when_scrolling_down_past_threshold() {
        let mut header = HeaderVisibility::new();
        assert!(!header.observe(50.0, 0.05, false));
        assert!(header.observe(400.0, 0.2, false));
        // jitter inside the dead zone changes nothing
        assert!(header.observe(397.0, 0.199, false));
        assert!(!header.observe(300.0, 0.18, false));
    }

    #[test]
    fn test_header_stays_visible_with_menu_open() {
        let mut header = HeaderVisibility::new();
        header.observe(400.0, 0.2, false);
        assert!(!header.observe(800.0, 0.4, true));
        assert!(header.observe(900.0, 0.45, false));
        header.reveal();
        assert!(!header.is_hidden());
    }

    #[test]
    fn test_scroll_progress() {
        assert_eq!(scroll_progress(0.0, 800.0, 800.0), 0.0);
        assert_eq!(scroll_progress(100.0, 1200.0, 800.0), 0.25);
        assert_eq!(scroll_progress(900.0, 1200.0, 800.0), 1.0);
    }
}
