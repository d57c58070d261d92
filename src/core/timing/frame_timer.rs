//=========================================================================
// Frame Timer
//
// Countdown/progress primitive used by every timed animation.
//
// A timer is a start instant plus a duration. It keeps no ticking state
// of its own: progress is derived from the monotonic clock on demand,
// so any number of reads per frame agree with each other.
//
// Notes:
// `progress` deliberately exceeds 1.0 after completion; callers clamp
// where presentation requires it. A disabled timer reports not-done
// forever without losing its configured duration, which is how
// animations are paused or parked.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::time::{Duration, Instant};

//=== FrameTimer ==========================================================

/// Monotonic countdown with derived progress.
#[derive(Debug, Clone)]
pub struct FrameTimer {
    start: Instant,
    length: Duration,
    disabled: bool,
}

impl FrameTimer {
    //--- Construction -----------------------------------------------------

    /// Starts a timer of `seconds` length at the current instant.
    ///
    /// # Panics
    ///
    /// Panics if `seconds <= 0.0`.
    pub fn new(seconds: f64) -> Self {
        assert!(seconds > 0.0, "Timer length must be positive, got {}", seconds);
        Self {
            start: Instant::now(),
            length: Duration::from_secs_f64(seconds),
            disabled: false,
        }
    }

    //--- Queries ----------------------------------------------------------

    /// Elapsed time over configured length. Exceeds 1.0 once complete.
    pub fn progress(&self) -> f64 {
        self.progress_at(Instant::now())
    }

    /// [`Self::progress`] evaluated at an explicit instant (simulation
    /// and tests).
    pub fn progress_at(&self, now: Instant) -> f64 {
        let elapsed = now.saturating_duration_since(self.start);
        elapsed.as_secs_f64() / self.length.as_secs_f64()
    }

    /// `true` once the configured length has elapsed, unless disabled.
    pub fn is_done(&self) -> bool {
        self.is_done_at(Instant::now())
    }

    /// [`Self::is_done`] evaluated at an explicit instant.
    pub fn is_done_at(&self, now: Instant) -> bool {
        !self.disabled && now.saturating_duration_since(self.start) >= self.length
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    //--- Control ----------------------------------------------------------

    /// Restarts the clock without changing the configured length. Also
    /// re-arms a disabled timer.
    pub fn reset(&mut self) {
        self.reset_at(Instant::now());
    }

    /// [`Self::reset`] anchored at an explicit instant.
    pub fn reset_at(&mut self, now: Instant) {
        self.disabled = false;
        self.start = now;
    }

    /// Changes the configured length without restarting the clock.
    ///
    /// # Panics
    ///
    /// Panics if `seconds <= 0.0`.
    pub fn set_length(&mut self, seconds: f64) {
        assert!(seconds > 0.0, "Timer length must be positive, got {}", seconds);
        self.length = Duration::from_secs_f64(seconds);
    }

    /// Forces [`Self::is_done`] to report `false` until the next reset.
    pub fn disable(&mut self) {
        self.disabled = true;
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn at(timer: &FrameTimer, seconds: f64) -> Instant {
        timer.start + Duration::from_secs_f64(seconds)
    }

    #[test]
    fn progress_is_elapsed_over_length() {
        let timer = FrameTimer::new(2.0);
        assert_eq!(timer.progress_at(at(&timer, 0.0)), 0.0);
        assert!((timer.progress_at(at(&timer, 1.0)) - 0.5).abs() < 1e-9);
        assert!((timer.progress_at(at(&timer, 2.0)) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn progress_exceeds_one_after_completion() {
        let timer = FrameTimer::new(1.0);
        assert!(timer.progress_at(at(&timer, 3.0)) > 2.9);
    }

    #[test]
    fn progress_is_monotonic() {
        let timer = FrameTimer::new(1.0);
        let mut last = -1.0;
        for step in 0..50 {
            let p = timer.progress_at(at(&timer, step as f64 * 0.05));
            assert!(p >= last, "progress decreased at step {}", step);
            last = p;
        }
    }

    #[test]
    fn done_exactly_at_length_and_stays_done() {
        let timer = FrameTimer::new(1.0);
        assert!(!timer.is_done_at(at(&timer, 0.999)));
        assert!(timer.is_done_at(at(&timer, 1.0)));
        assert!(timer.is_done_at(at(&timer, 100.0)));
    }

    #[test]
    fn reset_restarts_without_changing_length() {
        let mut timer = FrameTimer::new(1.0);
        let later = at(&timer, 5.0);

        timer.reset_at(later);
        assert!(!timer.is_done_at(later));
        assert!(timer.is_done_at(later + Duration::from_secs(1)));
    }

    #[test]
    fn disabled_timer_is_never_done() {
        let mut timer = FrameTimer::new(0.5);
        timer.disable();
        assert!(timer.is_disabled());
        assert!(!timer.is_done_at(at(&timer, 10.0)));
        // progress still advances while disabled
        assert!(timer.progress_at(at(&timer, 1.0)) > 1.9);
    }

    #[test]
    fn reset_rearms_a_disabled_timer() {
        let mut timer = FrameTimer::new(0.5);
        timer.disable();
        timer.reset();
        assert!(!timer.is_disabled());
        assert!(timer.is_done_at(at(&timer, 0.5)));
    }

    #[test]
    fn set_length_keeps_the_clock() {
        let mut timer = FrameTimer::new(10.0);
        timer.set_length(0.5);
        assert!(timer.is_done_at(at(&timer, 0.5)));
    }

    #[test]
    #[should_panic(expected = "Timer length must be positive")]
    fn zero_length_rejected() {
        FrameTimer::new(0.0);
    }

    #[test]
    #[should_panic(expected = "Timer length must be positive")]
    fn negative_set_length_rejected() {
        FrameTimer::new(1.0).set_length(-1.0);
    }
}
