//! Scroll state: fractional position against a wrap-around canvas.
//!
//! Position advances from measured wall-clock time, not from a fixed
//! per-call increment. The driving loop may call [`ScrollState::advance`]
//! at any cadence without changing the on-screen speed.

use std::time::Instant;

/// Minimum accepted scroll speed in pixels per second.
pub const MIN_SPEED: f64 = 1.0;
/// Maximum accepted scroll speed in pixels per second.
pub const MAX_SPEED: f64 = 500.0;

/// Fractional scroll position over a canvas of known total width.
///
/// Invariant: `0 <= position < total_width` after every update. The wrap
/// normalizes by modulo; it never clamps or truncates, so sub-pixel
/// progress survives the wrap.
#[derive(Debug, Clone)]
pub struct ScrollState {
    /// Current position in pixels, fractional.
    position: f64,
    /// Canvas extent along the scroll axis.
    total_width: u32,
    /// Speed in pixels per second, clamped to `[MIN_SPEED, MAX_SPEED]`.
    speed: f64,
    /// True only on the tick that crossed the wrap boundary.
    complete: bool,
    /// Timestamp of the previous `advance`; `None` until the first call.
    last_update: Option<Instant>,
}

impl ScrollState {
    /// Create a state at position 0 for a canvas of the given width.
    pub fn new(total_width: u32, speed_px_per_sec: f64) -> Self {
        Self {
            position: 0.0,
            total_width,
            speed: clamp_speed(speed_px_per_sec),
            complete: false,
            last_update: None,
        }
    }

    /// Advance the position by the wall-clock time since the last call.
    ///
    /// The first call after construction or [`reset`](Self::reset) only
    /// records `now` and moves nothing, so a freshly shown screen never
    /// jumps. A `now` earlier than the previous timestamp counts as zero
    /// elapsed time.
    pub fn advance(&mut self, now: Instant) {
        let elapsed = self
            .last_update
            .and_then(|last| now.checked_duration_since(last))
            .map_or(0.0, |d| d.as_secs_f64());
        self.last_update = Some(now);

        if self.total_width == 0 {
            self.position = 0.0;
            self.complete = false;
            return;
        }

        self.position += self.speed * elapsed;
        let total = f64::from(self.total_width);
        if self.position >= total {
            self.position %= total;
            self.complete = true;
        } else {
            self.complete = false;
        }
    }

    /// Current position in pixels.
    #[inline]
    pub const fn position(&self) -> f64 {
        self.position
    }

    /// Whether the last `advance` crossed the wrap boundary.
    ///
    /// This is a single-tick signal: it reports the crossing itself, not
    /// "has ever wrapped".
    #[inline]
    pub const fn is_wrap_complete(&self) -> bool {
        self.complete
    }

    /// Canvas extent along the scroll axis.
    #[inline]
    pub const fn total_width(&self) -> u32 {
        self.total_width
    }

    /// Current speed in pixels per second.
    #[inline]
    pub const fn speed(&self) -> f64 {
        self.speed
    }

    /// Set the speed, silently clamping to `[MIN_SPEED, MAX_SPEED]`.
    pub fn set_speed(&mut self, speed_px_per_sec: f64) {
        let clamped = clamp_speed(speed_px_per_sec);
        if (clamped - speed_px_per_sec).abs() > f64::EPSILON {
            tracing::debug!(
                requested = speed_px_per_sec,
                applied = clamped,
                "scroll speed out of range, clamped"
            );
        }
        self.speed = clamped;
    }

    /// Replace the canvas extent and restart from position 0.
    pub fn set_total_width(&mut self, total_width: u32) {
        self.total_width = total_width;
        self.reset();
    }

    /// Return to position 0 with no wrap flag and no recorded timestamp.
    pub fn reset(&mut self) {
        self.position = 0.0;
        self.complete = false;
        self.last_update = None;
    }
}

/// Clamp a requested speed into the accepted range.
///
/// Non-finite requests fall back to the minimum.
fn clamp_speed(speed: f64) -> f64 {
    if speed.is_finite() {
        speed.clamp(MIN_SPEED, MAX_SPEED)
    } else {
        MIN_SPEED
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_first_advance_moves_nothing() {
        let mut state = ScrollState::new(100, 50.0);
        state.advance(Instant::now());
        assert_eq!(state.position(), 0.0);
        assert!(!state.is_wrap_complete());
    }

    #[test]
    fn test_advance_tracks_wall_clock() {
        let mut state = ScrollState::new(1000, 100.0);
        let t0 = Instant::now();
        state.advance(t0);
        state.advance(t0 + Duration::from_millis(500));
        assert!((state.position() - 50.0).abs() < 1e-6);
    }

    #[test]
    fn test_cadence_does_not_change_speed() {
        let t0 = Instant::now();

        // One coarse step vs many fine steps over the same wall time
        let mut coarse = ScrollState::new(10_000, 200.0);
        coarse.advance(t0);
        coarse.advance(t0 + Duration::from_secs(2));

        let mut fine = ScrollState::new(10_000, 200.0);
        fine.advance(t0);
        for ms in (0..=2000).step_by(7) {
            fine.advance(t0 + Duration::from_millis(ms));
        }
        fine.advance(t0 + Duration::from_secs(2));

        assert!((coarse.position() - fine.position()).abs() < 1e-6);
    }

    #[test]
    fn test_wrap_normalizes_and_flags_once() {
        let mut state = ScrollState::new(100, 500.0);
        let t0 = Instant::now();
        state.advance(t0);

        // 0.3s at 500 px/s = 150 px: wraps to 50
        state.advance(t0 + Duration::from_millis(300));
        assert!((state.position() - 50.0).abs() < 1e-6);
        assert!(state.is_wrap_complete());

        // Next tick stays inside the canvas: flag drops
        state.advance(t0 + Duration::from_millis(310));
        assert!(!state.is_wrap_complete());
    }

    #[test]
    fn test_wrap_invariant_over_many_ticks() {
        let mut state = ScrollState::new(64, 500.0);
        let t0 = Instant::now();
        state.advance(t0);
        for step in 1..500u64 {
            // Deliberately uneven cadence, some steps wrapping multiple times
            state.advance(t0 + Duration::from_millis(step * 173));
            assert!(state.position() >= 0.0);
            assert!(state.position() < 64.0);
        }
    }

    #[test]
    fn test_speed_clamped_silently() {
        let mut state = ScrollState::new(100, 50.0);
        state.set_speed(0.0);
        assert_eq!(state.speed(), MIN_SPEED);
        state.set_speed(9_999.0);
        assert_eq!(state.speed(), MAX_SPEED);
        state.set_speed(f64::NAN);
        assert_eq!(state.speed(), MIN_SPEED);
        state.set_speed(250.0);
        assert_eq!(state.speed(), 250.0);
    }

    #[test]
    fn test_constructor_clamps_speed() {
        assert_eq!(ScrollState::new(100, -3.0).speed(), MIN_SPEED);
    }

    #[test]
    fn test_backwards_clock_is_zero_elapsed() {
        let mut state = ScrollState::new(100, 100.0);
        let t0 = Instant::now() + Duration::from_secs(10);
        state.advance(t0);
        state.advance(t0 - Duration::from_secs(5));
        assert_eq!(state.position(), 0.0);
    }

    #[test]
    fn test_zero_width_holds_at_origin() {
        let mut state = ScrollState::new(0, 100.0);
        let t0 = Instant::now();
        state.advance(t0);
        state.advance(t0 + Duration::from_secs(1));
        assert_eq!(state.position(), 0.0);
        assert!(!state.is_wrap_complete());
    }

    #[test]
    fn test_reset_clears_position_and_flag() {
        let mut state = ScrollState::new(100, 400.0);
        let t0 = Instant::now();
        state.advance(t0);
        state.advance(t0 + Duration::from_millis(400));
        assert!(state.position() > 0.0);

        state.reset();
        assert_eq!(state.position(), 0.0);
        assert!(!state.is_wrap_complete());

        // First advance after reset is again a zero-delta anchor
        state.advance(t0 + Duration::from_secs(60));
        assert_eq!(state.position(), 0.0);
    }
}
