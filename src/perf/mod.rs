//! Performance profiles: named frame-rate tiers.
//!
//! A profile fixes a target frame rate and the per-frame time budget
//! derived from it. The transition engine paces its frame loop against
//! the budget, so switching tiers trades smoothness for headroom without
//! touching any animation math.

mod stats;

pub use stats::FrameRateStats;

use crate::transition::{TransitionConfig, TransitionKind, TransitionTiming};
use std::time::Duration;

/// Comfortable reading speed used to derive recommended durations.
const READING_SPEED_PX_PER_SEC: f64 = 40.0;

/// Shortest recommended transition, in seconds.
const MIN_RECOMMENDED_S: f64 = 0.5;

/// Longest recommended transition, in seconds.
const MAX_RECOMMENDED_S: f64 = 3.0;

/// A target frame rate and its derived per-frame budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PerformanceProfile {
    target_fps: u32,
    frame_budget: Duration,
}

impl PerformanceProfile {
    /// Build a profile for an arbitrary frame rate, clamped to at least
    /// 1 fps.
    pub fn from_fps(target_fps: u32) -> Self {
        let fps = target_fps.max(1);
        Self {
            target_fps: fps,
            frame_budget: Duration::from_secs(1) / fps,
        }
    }

    /// High tier: 120 fps.
    pub fn high() -> Self {
        Self::from_fps(120)
    }

    /// Balanced tier: 60 fps.
    pub fn balanced() -> Self {
        Self::from_fps(60)
    }

    /// Low tier: 30 fps.
    pub fn low() -> Self {
        Self::from_fps(30)
    }

    /// Look up a preset by its configuration name, case-insensitive.
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "high" => Some(Self::high()),
            "balanced" => Some(Self::balanced()),
            "low" => Some(Self::low()),
            _ => None,
        }
    }

    /// Target frames per second.
    #[inline]
    pub const fn target_fps(&self) -> u32 {
        self.target_fps
    }

    /// Time budget for one frame, `1s / target_fps`.
    #[inline]
    pub const fn frame_budget(&self) -> Duration {
        self.frame_budget
    }

    /// Aggregate view for external monitoring.
    pub const fn stats(&self) -> ProfileStats {
        ProfileStats {
            target_fps: self.target_fps,
            frame_budget: self.frame_budget,
        }
    }

    /// Derive a transition setup for content of the given pixel length.
    ///
    /// Longer content gets a longer duration-mode slide so it stays
    /// readable, clamped to a sane range, paired with the balanced tier.
    pub fn recommend_for_content(content_len_px: u32) -> (TransitionConfig, Self) {
        let seconds = (f64::from(content_len_px) / READING_SPEED_PX_PER_SEC)
            .clamp(MIN_RECOMMENDED_S, MAX_RECOMMENDED_S);
        let config = TransitionConfig {
            kind: TransitionKind::ScrollLeft,
            enabled: true,
            timing: TransitionTiming::Duration { seconds },
        };
        (config, Self::balanced())
    }
}

impl Default for PerformanceProfile {
    fn default() -> Self {
        Self::balanced()
    }
}

/// Configured pacing numbers, reported to external monitoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileStats {
    /// Target frames per second.
    pub target_fps: u32,
    /// Per-frame time budget.
    pub frame_budget: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        assert_eq!(PerformanceProfile::high().target_fps(), 120);
        assert_eq!(PerformanceProfile::balanced().target_fps(), 60);
        assert_eq!(PerformanceProfile::low().target_fps(), 30);
    }

    #[test]
    fn test_budget_derivation() {
        let profile = PerformanceProfile::from_fps(60);
        assert_eq!(profile.frame_budget(), Duration::from_secs(1) / 60);

        let high = PerformanceProfile::high();
        assert_eq!(high.frame_budget(), Duration::from_secs(1) / 120);
    }

    #[test]
    fn test_zero_fps_clamps_to_one() {
        let profile = PerformanceProfile::from_fps(0);
        assert_eq!(profile.target_fps(), 1);
        assert_eq!(profile.frame_budget(), Duration::from_secs(1));
    }

    #[test]
    fn test_by_name() {
        assert_eq!(
            PerformanceProfile::by_name("HIGH"),
            Some(PerformanceProfile::high())
        );
        assert_eq!(
            PerformanceProfile::by_name("balanced"),
            Some(PerformanceProfile::balanced())
        );
        assert!(PerformanceProfile::by_name("turbo").is_none());
    }

    #[test]
    fn test_stats_accessor() {
        let stats = PerformanceProfile::low().stats();
        assert_eq!(stats.target_fps, 30);
        assert_eq!(stats.frame_budget, Duration::from_secs(1) / 30);
    }

    #[test]
    fn test_recommendation_scales_with_content() {
        let (short, _) = PerformanceProfile::recommend_for_content(10);
        let (long, profile) = PerformanceProfile::recommend_for_content(10_000);

        let TransitionTiming::Duration { seconds: short_s } = short.timing else {
            panic!("expected duration mode");
        };
        let TransitionTiming::Duration { seconds: long_s } = long.timing else {
            panic!("expected duration mode");
        };

        assert_eq!(short_s, 0.5);
        assert_eq!(long_s, 3.0);
        assert_eq!(long.kind, TransitionKind::ScrollLeft);
        assert!(long.enabled);
        assert_eq!(profile.target_fps(), 60);
    }
}
