//! Transition description types.
//!
//! A transition is fully described by its kind, an enable switch and
//! exactly one timing mode. The timing mode is a sum type on purpose:
//! a per-frame pixel speed and a wall-clock duration are contradictory
//! inputs, and the type makes holding both impossible.

/// How the display switches between two static frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TransitionKind {
    /// Replace the frame in a single step.
    Redraw,
    /// New frame slides in from the right, old frame exits left.
    #[default]
    ScrollLeft,
    /// New frame slides in from the left, old frame exits right.
    ScrollRight,
    /// New frame slides in from below, old frame exits upward.
    ScrollUp,
    /// New frame slides in from above, old frame exits downward.
    ScrollDown,
}

impl TransitionKind {
    /// Parse a kind from its configuration name.
    ///
    /// Unrecognized names map to [`Redraw`](Self::Redraw): an unknown
    /// transition must still leave a valid frame on the panel, never an
    /// error.
    pub fn parse(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "redraw" | "none" | "instant" => Self::Redraw,
            "scroll_left" | "left" => Self::ScrollLeft,
            "scroll_right" | "right" => Self::ScrollRight,
            "scroll_up" | "up" => Self::ScrollUp,
            "scroll_down" | "down" => Self::ScrollDown,
            other => {
                tracing::warn!(kind = other, "unknown transition kind, using redraw");
                Self::Redraw
            }
        }
    }

    /// Whether this kind scrolls along the horizontal axis.
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::ScrollLeft | Self::ScrollRight)
    }

    /// Whether this kind runs against the scroll direction of its axis.
    ///
    /// Reversed kinds slide the window from the far edge of the
    /// composite back toward its origin.
    pub const fn is_reversed(self) -> bool {
        matches!(self, Self::ScrollRight | Self::ScrollDown)
    }
}

/// When the animation's frames happen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransitionTiming {
    /// Fixed pixel step per frame; total time falls out of the frame
    /// count and achieved rate.
    Speed {
        /// Pixels advanced per emitted frame, clamped to at least 1.
        px_per_frame: f64,
    },
    /// Fixed wall-clock duration; the frame count falls out of the
    /// duration and the target frame rate, never out of a pixel step.
    Duration {
        /// Total animation length in seconds.
        seconds: f64,
    },
}

/// A complete transition request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionConfig {
    /// Which animation to run.
    pub kind: TransitionKind,
    /// Disabled transitions collapse to an instant redraw.
    pub enabled: bool,
    /// Exactly one active timing mode.
    pub timing: TransitionTiming,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            kind: TransitionKind::default(),
            enabled: true,
            timing: TransitionTiming::Duration { seconds: 1.0 },
        }
    }
}
