//! Pure derivations behind the ambient effects
//!
//! The UI layer reads raw browser values (scroll offsets, pointer coordinates,
//! intersection ratios) and feeds them through these functions to get style
//! values. Nothing here touches the DOM, so it runs the same on the server and
//! in tests.

/// Scroll offset (px) above which the navbar switches to its solid style
pub const NAV_SCROLL_THRESHOLD_PX: f64 = 12.0;

/// Visible fraction of an element needed to trigger its reveal
pub const REVEAL_THRESHOLD: f64 = 0.4;

/// Delay added per item in a staggered list
pub const STAGGER_STEP_MS: u32 = 80;

/// Upper bound on a stagger delay so long lists don't lag behind the scroll
pub const STAGGER_MAX_MS: u32 = 480;

/// Fraction of the scroll offset the background decoration moves by
pub const PARALLAX_FACTOR: f64 = 0.3;

/// Default glow position before the first pointer event
pub const GLOW_ORIGIN: GlowPosition = GlowPosition { x: -1000.0, y: -1000.0 };

/// How far through the document the reader is, in `[0, 1]`
///
/// `scroll_top` is the window's vertical offset, `scroll_height` the full
/// document height and `viewport_height` the visible height. A document that
/// fits in the viewport has nothing to scroll and reports 0.
pub fn scroll_progress(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if !scrollable.is_finite() || scrollable <= 0.0 || !scroll_top.is_finite() {
        return 0.0;
    }
    (scroll_top / scrollable).clamp(0.0, 1.0)
}

/// CSS width for the progress bar, e.g. `"50%"`
pub fn progress_width(progress: f64) -> String {
    let percent = (progress.clamp(0.0, 1.0) * 100.0).round();
    format!("{}%", percent)
}

/// Whether the navbar should use its scrolled style (threshold is exclusive)
pub fn nav_is_scrolled(scroll_top: f64) -> bool {
    scroll_top > NAV_SCROLL_THRESHOLD_PX
}

/// Vertical translation for the background decoration layer
pub fn parallax_offset(scroll_top: f64) -> f64 {
    scroll_top.max(0.0) * PARALLAX_FACTOR
}

/// Transition delay for the item at `index` in a staggered group
pub fn stagger_delay_ms(index: usize) -> u32 {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    index.saturating_mul(STAGGER_STEP_MS).min(STAGGER_MAX_MS)
}

/// One-way latch for scroll-triggered reveals
///
/// Starts hidden and flips to revealed the first time an observation meets
/// the threshold. Once revealed it never goes back, however often the element
/// leaves and re-enters the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealLatch {
    threshold: f64,
    revealed: bool,
}

impl RevealLatch {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            revealed: false,
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Feed one intersection observation.
    ///
    /// Returns `true` only on the observation that triggers the reveal.
    pub fn observe(&mut self, is_intersecting: bool, ratio: f64) -> bool {
        if self.revealed || !is_intersecting {
            return false;
        }
        // Browsers report ratios like 0.3999 for a 0.4 threshold crossing.
        if ratio + 1e-3 >= self.threshold {
            self.revealed = true;
            return true;
        }
        false
    }
}

impl Default for RevealLatch {
    fn default() -> Self {
        Self::new(REVEAL_THRESHOLD)
    }
}

/// Inline style for a reveal wrapper in the given state
pub fn reveal_style(revealed: bool, delay_ms: u32) -> String {
    if revealed {
        format!(
            "opacity: 1; transform: translateY(0); transition: opacity 0.7s ease-out {delay_ms}ms, transform 0.7s ease-out {delay_ms}ms;"
        )
    } else {
        format!(
            "opacity: 0; transform: translateY(24px); transition: opacity 0.7s ease-out {delay_ms}ms, transform 0.7s ease-out {delay_ms}ms;"
        )
    }
}

/// Latest pointer position in viewport pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlowPosition {
    pub x: f64,
    pub y: f64,
}

impl GlowPosition {
    pub fn from_pointer(client_x: i32, client_y: i32) -> Self {
        Self {
            x: f64::from(client_x),
            y: f64::from(client_y),
        }
    }

    /// Radial gradient centered on this position
    pub fn background(&self) -> String {
        format!(
            "radial-gradient(600px circle at {}px {}px, rgba(255, 255, 255, 0.06), transparent 40%)",
            self.x, self.y
        )
    }
}

impl Default for GlowPosition {
    fn default() -> Self {
        GLOW_ORIGIN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_halfway() {
        // 3000px document, 1000px viewport: 2000px scrollable
        let progress = scroll_progress(1000.0, 3000.0, 1000.0);
        assert!((progress - 0.5).abs() < f64::EPSILON);
        assert_eq!(progress_width(progress), "50%");
    }

    #[test]
    fn test_progress_bounds() {
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(2000.0, 3000.0, 1000.0), 1.0);
        // Overscroll (rubber-banding) stays within [0, 1]
        assert_eq!(scroll_progress(2100.0, 3000.0, 1000.0), 1.0);
        assert_eq!(scroll_progress(-40.0, 3000.0, 1000.0), 0.0);
    }

    #[test]
    fn test_progress_unscrollable_document() {
        assert_eq!(scroll_progress(0.0, 800.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(0.0, 1000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(f64::NAN, 3000.0, 1000.0), 0.0);
    }

    #[test]
    fn test_progress_moves_when_page_grows_in_place() {
        // Same offset, but an expanded FAQ answer added 1000px below
        let before = scroll_progress(1000.0, 3000.0, 1000.0);
        let after = scroll_progress(1000.0, 4000.0, 1000.0);
        assert_eq!(progress_width(before), "50%");
        assert_eq!(progress_width(after), "33%");
    }

    #[test]
    fn test_progress_width_rounding() {
        assert_eq!(progress_width(0.0), "0%");
        assert_eq!(progress_width(0.333), "33%");
        assert_eq!(progress_width(0.996), "100%");
        assert_eq!(progress_width(1.5), "100%");
    }

    #[test]
    fn test_nav_threshold_is_exclusive() {
        assert!(!nav_is_scrolled(0.0));
        assert!(!nav_is_scrolled(12.0));
        assert!(nav_is_scrolled(13.0));
        assert!(nav_is_scrolled(12.5));
    }

    #[test]
    fn test_parallax_offset() {
        assert_eq!(parallax_offset(0.0), 0.0);
        assert!((parallax_offset(100.0) - 30.0).abs() < 1e-9);
        assert_eq!(parallax_offset(-50.0), 0.0);
    }

    #[test]
    fn test_stagger_delay() {
        assert_eq!(stagger_delay_ms(0), 0);
        assert_eq!(stagger_delay_ms(1), 80);
        assert_eq!(stagger_delay_ms(3), 240);
        assert_eq!(stagger_delay_ms(100), STAGGER_MAX_MS);
        assert_eq!(stagger_delay_ms(usize::MAX), STAGGER_MAX_MS);
    }

    #[test]
    fn test_reveal_fires_once() {
        let mut latch = RevealLatch::new(0.4);
        assert!(!latch.is_revealed());

        // Partially visible, below threshold
        assert!(!latch.observe(true, 0.2));
        assert!(!latch.is_revealed());

        // Crosses threshold
        assert!(latch.observe(true, 0.5));
        assert!(latch.is_revealed());

        // Leaves and re-enters several times: never fires again
        for _ in 0..5 {
            assert!(!latch.observe(false, 0.0));
            assert!(!latch.observe(true, 1.0));
        }
        assert!(latch.is_revealed());
    }

    #[test]
    fn test_reveal_ignores_non_intersecting_ratio() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(false, 0.9));
        assert!(!latch.is_revealed());
    }

    #[test]
    fn test_reveal_tolerates_ratio_just_under_threshold() {
        let mut latch = RevealLatch::new(0.4);
        assert!(latch.observe(true, 0.3995));
    }

    #[test]
    fn test_reveal_style_states() {
        let hidden = reveal_style(false, 160);
        assert!(hidden.contains("opacity: 0"));
        assert!(hidden.contains("160ms"));

        let shown = reveal_style(true, 0);
        assert!(shown.contains("opacity: 1"));
        assert!(shown.contains("translateY(0)"));
    }

    #[test]
    fn test_glow_follows_latest_pointer() {
        let first = GlowPosition::from_pointer(10, 20);
        let latest = GlowPosition::from_pointer(120, 340);
        assert_ne!(first, latest);
        assert_eq!(latest, GlowPosition { x: 120.0, y: 340.0 });
        assert!(latest.background().contains("at 120px 340px"));
    }

    #[test]
    fn test_glow_starts_off_screen() {
        let glow = GlowPosition::default();
        assert!(glow.x < 0.0 && glow.y < 0.0);
    }
}
