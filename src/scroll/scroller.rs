//! Scroller: owns one canvas and the state that slides across it.
//!
//! Content changes, scroll reset and dwell recomputation happen as one
//! operation here, so callers can never observe a fresh canvas with a
//! stale position.

use std::time::Instant;

use super::duration::{self, DurationBounds};
use super::state::ScrollState;
use super::window::visible_window;
use crate::buffer::{Compositor, PixelBuffer, Rgb};

/// Configuration for a [`Scroller`].
#[derive(Debug, Clone)]
pub struct ScrollerConfig {
    /// Scroll speed in pixels per second, clamped to `[1, 500]` on apply.
    pub speed_px_per_sec: f64,
    /// Fixed dwell in seconds used when dynamic duration is disabled.
    pub delay_hint_s: u32,
    /// Derive the dwell from content width and speed instead of the hint.
    pub dynamic_duration: bool,
    /// Bounds applied to the derived dwell.
    pub bounds: DurationBounds,
    /// Extra gap between consecutive content tiles, in pixels.
    pub item_gap: u32,
    /// Gap following every content tile, in pixels.
    pub element_gap: u32,
    /// Canvas background color.
    pub background: Rgb,
}

impl Default for ScrollerConfig {
    fn default() -> Self {
        Self {
            speed_px_per_sec: 50.0,
            delay_hint_s: 30,
            dynamic_duration: true,
            bounds: DurationBounds::default(),
            item_gap: 16,
            element_gap: 8,
            background: Rgb::OFF,
        }
    }
}

/// Point-in-time view of a scroller for external telemetry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSnapshot {
    /// Current fractional position in pixels.
    pub position: f64,
    /// Effective speed in pixels per second.
    pub speed_px_per_sec: f64,
    /// Canvas extent along the scroll axis.
    pub total_width: u32,
    /// Whether the canvas is wider than the display at all.
    pub scrolling: bool,
    /// Whether the last advance crossed the wrap boundary.
    pub wrap_complete: bool,
    /// Calculated dwell for the current content, in seconds.
    pub duration_s: u32,
    /// Canvas width in pixels (0 until content is set).
    pub buffer_width: u32,
    /// Canvas height in pixels (0 until content is set).
    pub buffer_height: u32,
}

/// Continuous wrap-around scroller for one display.
///
/// Owns the composite canvas and its [`ScrollState`]; a single logical
/// owner drives it from the display refresh loop. It holds no locks and
/// never sleeps.
pub struct Scroller {
    display_width: u32,
    display_height: u32,
    config: ScrollerConfig,
    compositor: Compositor,
    canvas: Option<PixelBuffer>,
    state: ScrollState,
    duration_s: u32,
}

impl Scroller {
    /// Create a scroller for a display of the given size.
    ///
    /// # Panics
    /// Panics if either display dimension is 0.
    pub fn new(display_width: u32, display_height: u32, config: ScrollerConfig) -> Self {
        let compositor = Compositor::new(
            display_width,
            display_height,
            config.item_gap,
            config.element_gap,
            config.background,
        );
        let state = ScrollState::new(0, config.speed_px_per_sec);
        let mut scroller = Self {
            display_width,
            display_height,
            config,
            compositor,
            canvas: None,
            state,
            duration_s: 0,
        };
        scroller.duration_s = scroller.computed_duration();
        scroller
    }

    /// Replace the content set.
    ///
    /// Rebuilds the canvas, restarts the scroll from position 0 with the
    /// wrap flag cleared, and recomputes the dwell, atomically from the
    /// caller's point of view. An empty list produces a blank
    /// display-sized canvas, not an error.
    pub fn set_content(&mut self, items: &[PixelBuffer]) {
        let canvas = self.compositor.compose(items);
        self.state.set_total_width(canvas.width());
        self.canvas = Some(canvas);
        self.duration_s = self.computed_duration();
    }

    /// Advance the scroll position to wall-clock `now`.
    ///
    /// A no-op until content has been set.
    pub fn advance(&mut self, now: Instant) {
        if self.canvas.is_some() {
            self.state.advance(now);
        }
    }

    /// The display-sized window at the current position.
    ///
    /// `None` until content has been set.
    pub fn visible_window(&self) -> Option<PixelBuffer> {
        self.canvas.as_ref().map(|canvas| {
            visible_window(
                canvas,
                self.state.position(),
                self.display_width,
                self.display_height,
            )
        })
    }

    /// Whether the current canvas actually needs to scroll.
    pub fn is_scrolling(&self) -> bool {
        self.canvas
            .as_ref()
            .is_some_and(|c| c.width() > self.display_width)
    }

    /// Whether the last advance crossed the wrap boundary.
    pub const fn is_wrap_complete(&self) -> bool {
        self.state.is_wrap_complete()
    }

    /// Calculated dwell for the current content, in seconds.
    pub const fn duration_s(&self) -> u32 {
        self.duration_s
    }

    /// Set the scroll speed, silently clamped to the accepted range.
    ///
    /// The dwell is recomputed since it depends on speed.
    pub fn set_speed(&mut self, speed_px_per_sec: f64) {
        self.state.set_speed(speed_px_per_sec);
        self.config.speed_px_per_sec = self.state.speed();
        self.duration_s = self.computed_duration();
    }

    /// Restart the scroll from position 0.
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Point-in-time view for external telemetry.
    pub fn snapshot(&self) -> ScrollSnapshot {
        ScrollSnapshot {
            position: self.state.position(),
            speed_px_per_sec: self.state.speed(),
            total_width: self.state.total_width(),
            scrolling: self.is_scrolling(),
            wrap_complete: self.state.is_wrap_complete(),
            duration_s: self.duration_s,
            buffer_width: self.canvas.as_ref().map_or(0, PixelBuffer::width),
            buffer_height: self.canvas.as_ref().map_or(0, PixelBuffer::height),
        }
    }

    /// The active configuration.
    pub const fn config(&self) -> &ScrollerConfig {
        &self.config
    }

    /// Display width in pixels.
    pub const fn display_width(&self) -> u32 {
        self.display_width
    }

    /// Display height in pixels.
    pub const fn display_height(&self) -> u32 {
        self.display_height
    }

    /// Content extent beyond the leading gap.
    fn content_width(&self) -> u32 {
        self.canvas
            .as_ref()
            .map_or(0, |c| c.width().saturating_sub(self.display_width))
    }

    fn computed_duration(&self) -> u32 {
        if self.config.dynamic_duration {
            duration::estimate(
                self.display_width,
                self.content_width(),
                self.config.speed_px_per_sec,
                &self.config.bounds,
            )
        } else {
            self.config.delay_hint_s
        }
    }
}

impl std::fmt::Debug for Scroller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scroller")
            .field("display", &(self.display_width, self.display_height))
            .field("position", &self.state.position())
            .field("total_width", &self.state.total_width())
            .field("duration_s", &self.duration_s)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn tiles(widths: &[u32]) -> Vec<PixelBuffer> {
        widths.iter().map(|&w| PixelBuffer::new(w, 32)).collect()
    }

    #[test]
    fn test_no_content_no_window() {
        let scroller = Scroller::new(64, 32, ScrollerConfig::default());
        assert!(scroller.visible_window().is_none());
        assert!(!scroller.is_scrolling());
    }

    #[test]
    fn test_set_content_resets_scroll() {
        let mut scroller = Scroller::new(64, 32, ScrollerConfig::default());
        scroller.set_content(&tiles(&[100]));

        let t0 = Instant::now();
        scroller.advance(t0);
        scroller.advance(t0 + Duration::from_secs(2));
        assert!(scroller.snapshot().position > 0.0);

        scroller.set_content(&tiles(&[200]));
        let snap = scroller.snapshot();
        assert_eq!(snap.position, 0.0);
        assert!(!snap.wrap_complete);
    }

    #[test]
    fn test_window_is_display_sized() {
        let mut scroller = Scroller::new(64, 32, ScrollerConfig::default());
        scroller.set_content(&tiles(&[100, 50]));
        let window = scroller.visible_window().unwrap();
        assert_eq!(window.width(), 64);
        assert_eq!(window.height(), 32);
    }

    #[test]
    fn test_empty_content_is_blank_not_scrolling() {
        let mut scroller = Scroller::new(64, 32, ScrollerConfig::default());
        scroller.set_content(&[]);
        let window = scroller.visible_window().unwrap();
        assert_eq!(window.width(), 64);
        assert!(!scroller.is_scrolling());
    }

    #[test]
    fn test_snapshot_reflects_canvas() {
        let config = ScrollerConfig {
            item_gap: 32,
            element_gap: 16,
            ..ScrollerConfig::default()
        };
        let mut scroller = Scroller::new(64, 32, config);
        scroller.set_content(&tiles(&[40, 60]));

        let snap = scroller.snapshot();
        assert_eq!(snap.buffer_width, 244);
        assert_eq!(snap.buffer_height, 32);
        assert_eq!(snap.total_width, 244);
        assert!(snap.scrolling);
    }

    #[test]
    fn test_dwell_uses_hint_when_dynamic_disabled() {
        let config = ScrollerConfig {
            dynamic_duration: false,
            delay_hint_s: 42,
            ..ScrollerConfig::default()
        };
        let mut scroller = Scroller::new(64, 32, config);
        scroller.set_content(&tiles(&[5000]));
        assert_eq!(scroller.duration_s(), 42);
    }

    #[test]
    fn test_dwell_derived_and_recomputed_on_speed_change() {
        let config = ScrollerConfig {
            speed_px_per_sec: 100.0,
            bounds: DurationBounds::new(1, 10_000, 0.0),
            item_gap: 0,
            element_gap: 0,
            ..ScrollerConfig::default()
        };
        let mut scroller = Scroller::new(64, 32, config);
        scroller.set_content(&tiles(&[936]));

        // content width 936, distance 64 + 936 = 1000 px at 100 px/s
        assert_eq!(scroller.duration_s(), 10);

        scroller.set_speed(500.0);
        assert_eq!(scroller.duration_s(), 2);
    }

    #[test]
    fn test_speed_clamp_reflected_in_config() {
        let mut scroller = Scroller::new(64, 32, ScrollerConfig::default());
        scroller.set_speed(10_000.0);
        assert_eq!(scroller.config().speed_px_per_sec, 500.0);
        assert_eq!(scroller.snapshot().speed_px_per_sec, 500.0);
    }
}
