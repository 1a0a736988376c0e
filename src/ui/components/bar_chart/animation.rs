//! # Bar Reveal Animation
//!
//! Time-based state for the staggered grow-in of the chart bars.
//!
//! ## Schedule:
//! Bar `i` begins growing `i * 0.2s` after the chart is first shown and
//! tweens from zero to full height over `0.5s` with a cubic ease-out. The
//! schedule is derived from the mount time on every frame rather than from
//! accumulated ticks, so a late poll (a dropped frame, a backgrounded
//! window) lands on the correct height instead of replaying missed steps.
//! Dropping the chart drops the schedule with it; there is nothing to
//! cancel.

/// Delay between the reveal of consecutive bars, in seconds.
pub const REVEAL_STAGGER_SECONDS: f64 = 0.2;

/// Duration of a single bar's grow-in tween, in seconds.
pub const REVEAL_TWEEN_SECONDS: f64 = 0.5;

/// Cubic ease-out: fast start, soft landing.
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// Reveal schedule for a bar chart.
///
/// Holds only the mount time; every per-bar progress value is recomputed
/// from it on demand.
#[derive(Debug, Clone, Default)]
pub struct RevealAnimation {
    mount_time: Option<f64>,
}

impl RevealAnimation {
    pub fn new() -> Self {
        Self { mount_time: None }
    }

    /// Record the mount time on the first call; later calls are no-ops.
    pub fn ensure_started(&mut self, now: f64) {
        if self.mount_time.is_none() {
            self.mount_time = Some(now);
        }
    }

    /// Restart the schedule from `now`, collapsing all bars back to zero.
    pub fn restart(&mut self, now: f64) {
        self.mount_time = Some(now);
    }

    pub fn is_started(&self) -> bool {
        self.mount_time.is_some()
    }

    /// The absolute time at which bar `index` starts growing.
    pub fn reveal_time(&self, index: usize) -> Option<f64> {
        self.mount_time
            .map(|mount| mount + index as f64 * REVEAL_STAGGER_SECONDS)
    }

    /// Eased growth of bar `index` at time `now`, in `0.0..=1.0`.
    ///
    /// Zero before the bar's reveal time (and before the chart is shown at
    /// all), one once the tween has run its course.
    pub fn progress(&self, index: usize, now: f64) -> f32 {
        let Some(reveal) = self.reveal_time(index) else {
            return 0.0;
        };
        let elapsed = now - reveal;
        if elapsed <= 0.0 {
            return 0.0;
        }
        let linear = (elapsed / REVEAL_TWEEN_SECONDS).min(1.0) as f32;
        ease_out_cubic(linear)
    }

    /// Whether every one of `bar_count` bars has finished its tween.
    ///
    /// While this is false the chart needs repaints to keep the tween
    /// moving.
    pub fn is_settled(&self, bar_count: usize, now: f64) -> bool {
        if bar_count == 0 {
            return true;
        }
        match self.reveal_time(bar_count - 1) {
            Some(last_reveal) => now - last_reveal >= REVEAL_TWEEN_SECONDS,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_out_cubic_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        // Values outside the unit range are clamped.
        assert_eq!(ease_out_cubic(-0.5), 0.0);
        assert_eq!(ease_out_cubic(2.0), 1.0);
    }

    #[test]
    fn test_ease_out_cubic_midpoint() {
        // 1 - 0.5^3 = 0.875
        assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-6);
    }

    #[test]
    fn test_ease_out_cubic_runs_ahead_of_linear_then_decelerates() {
        for step in 1..10 {
            let t = step as f32 / 10.0;
            assert!(ease_out_cubic(t) > t);
        }
        let early = ease_out_cubic(0.2) - ease_out_cubic(0.1);
        let late = ease_out_cubic(0.9) - ease_out_cubic(0.8);
        assert!(late < early);
    }

    #[test]
    fn test_progress_zero_before_start() {
        let animation = RevealAnimation::new();
        assert!(!animation.is_started());
        assert_eq!(animation.progress(0, 100.0), 0.0);
        assert!(!animation.is_settled(4, 100.0));
    }

    #[test]
    fn test_ensure_started_is_idempotent() {
        let mut animation = RevealAnimation::new();
        animation.ensure_started(10.0);
        animation.ensure_started(50.0);
        assert_eq!(animation.reveal_time(0), Some(10.0));
    }

    #[test]
    fn test_stagger_delays_later_bars() {
        let mut animation = RevealAnimation::new();
        animation.ensure_started(0.0);

        // Bar 1 waits until 0.2s, bar 3 until 0.6s.
        assert_eq!(animation.progress(1, 0.1), 0.0);
        assert!(animation.progress(1, 0.3) > 0.0);
        assert_eq!(animation.progress(3, 0.5), 0.0);
        assert!(animation.progress(3, 0.7) > 0.0);
    }

    #[test]
    fn test_earlier_bars_never_behind_later_ones() {
        let mut animation = RevealAnimation::new();
        animation.ensure_started(0.0);

        for step in 0..30 {
            let now = step as f64 * 0.05;
            for index in 0..3 {
                assert!(
                    animation.progress(index, now) >= animation.progress(index + 1, now),
                    "bar {} fell behind bar {} at t={}",
                    index,
                    index + 1,
                    now
                );
            }
        }
    }

    #[test]
    fn test_progress_monotonic_over_time() {
        let mut animation = RevealAnimation::new();
        animation.ensure_started(0.0);

        let mut previous = 0.0;
        for step in 0..40 {
            let now = step as f64 * 0.025;
            let progress = animation.progress(2, now);
            assert!(progress >= previous);
            previous = progress;
        }
        assert_eq!(previous, 1.0);
    }

    #[test]
    fn test_late_poll_catches_up() {
        let mut animation = RevealAnimation::new();
        animation.ensure_started(0.0);

        // First poll long after the schedule finished: everything is full.
        for index in 0..4 {
            assert_eq!(animation.progress(index, 60.0), 1.0);
        }
        assert!(animation.is_settled(4, 60.0));
    }

    #[test]
    fn test_settle_time_for_four_bars() {
        let mut animation = RevealAnimation::new();
        animation.ensure_started(0.0);

        // Last bar reveals at 0.6s and finishes at 1.1s.
        assert!(!animation.is_settled(4, 1.09));
        assert!(animation.is_settled(4, 1.11));
        assert!(animation.is_settled(0, 0.0));
    }

    #[test]
    fn test_restart_collapses_bars() {
        let mut animation = RevealAnimation::new();
        animation.ensure_started(0.0);
        assert_eq!(animation.progress(0, 5.0), 1.0);

        animation.restart(5.0);
        assert_eq!(animation.progress(0, 5.0), 0.0);
        assert!(!animation.is_settled(4, 5.0));
    }
}
