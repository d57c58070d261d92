//=========================================================================
// Widgets
//
// Animatable UI elements shared by every screen.
//
// Architecture:
//   AnimationState          interpolation core (pose + timer)
//     ├─ AnimatedComponent  free-draw element (closure painter)
//     └─ Button             hover/click element with a press handler
//
// A widget's pose is an offset from its resting layout plus an opacity.
// Transitions configure a from→to pose pair on the shared
// AnimationState; each draw derives the current pose from timer
// progress, and completion snaps to the destination exactly once.
//
//=========================================================================

//=== Submodules ==========================================================

mod animated;
mod button;

//=== Public API ==========================================================

pub use animated::AnimatedComponent;
pub use button::Button;

//=== Standard Library Imports ============================================

use std::time::Instant;

//=== Internal Dependencies ===============================================

use crate::core::render::{LOGICAL_HEIGHT, LOGICAL_WIDTH};
use crate::core::timing::FrameTimer;

//=== AnimationType =======================================================

/// Off-screen direction an element slides toward (leaving) or arrives
/// from (entering) during a screen transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationType {
    Left,
    Right,
    Top,
    Bottom,
}

impl AnimationType {
    /// Offset that puts any on-screen element fully outside the logical
    /// surface.
    pub fn off_screen(self) -> (f32, f32) {
        match self {
            AnimationType::Left => (-LOGICAL_WIDTH, 0.0),
            AnimationType::Right => (LOGICAL_WIDTH, 0.0),
            AnimationType::Top => (0.0, -LOGICAL_HEIGHT),
            AnimationType::Bottom => (0.0, LOGICAL_HEIGHT),
        }
    }

    /// Pose parked at this direction's off-screen offset, invisible.
    pub fn off_screen_pose(self) -> Pose {
        let (dx, dy) = self.off_screen();
        Pose { dx, dy, opacity: 0.0 }
    }
}

//=== Pose ================================================================

/// A widget's offset from resting layout plus opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub dx: f32,
    pub dy: f32,
    pub opacity: f32,
}

impl Pose {
    /// Resting pose: in place, fully opaque.
    pub const REST: Pose = Pose { dx: 0.0, dy: 0.0, opacity: 1.0 };

    pub const fn new(dx: f32, dy: f32, opacity: f32) -> Self {
        Self { dx, dy, opacity }
    }

    /// Linear interpolation; exact at both endpoints.
    pub fn lerp(from: Pose, to: Pose, t: f32) -> Pose {
        if t <= 0.0 {
            return from;
        }
        if t >= 1.0 {
            return to;
        }
        Pose {
            dx: from.dx + (to.dx - from.dx) * t,
            dy: from.dy + (to.dy - from.dy) * t,
            opacity: from.opacity + (to.opacity - from.opacity) * t,
        }
    }
}

//=== AnimationState ======================================================

/// Interpolation core shared by all widget kinds.
///
/// Holds the committed pose, an optional in-flight from→to animation,
/// and the timer driving it. Reading the current pose while an
/// animation's timer has completed snaps the state to the destination
/// and ends the transition (one-time, observable via
/// [`Self::in_transition`]).
#[derive(Debug)]
pub struct AnimationState {
    pose: Pose,
    from: Pose,
    to: Pose,
    timer: FrameTimer,
    in_transition: bool,
}

impl Default for AnimationState {
    fn default() -> Self {
        // Parked timer: configured but disabled until an animation starts
        let mut timer = FrameTimer::new(1.0);
        timer.disable();
        Self {
            pose: Pose::REST,
            from: Pose::REST,
            to: Pose::REST,
            timer,
            in_transition: false,
        }
    }
}

impl AnimationState {
    pub fn new() -> Self {
        Self::default()
    }

    //--- Animation Control ------------------------------------------------

    /// Starts an interpolation from an explicit pose to `to`.
    pub fn animate(&mut self, from: Pose, to: Pose, seconds: f64) {
        self.from = from;
        self.to = to;
        self.timer.set_length(seconds);
        self.timer.reset();
        self.in_transition = true;
    }

    /// Starts an interpolation from the current pose to `to`.
    pub fn animate_to(&mut self, to: Pose, seconds: f64) {
        let from = self.pose;
        self.animate(from, to, seconds);
    }

    /// Jumps to a pose immediately, cancelling any animation. Used to
    /// park an element off-screen before sliding it in.
    pub fn set_pose(&mut self, pose: Pose) {
        self.pose = pose;
        self.in_transition = false;
        self.timer.disable();
    }

    /// Cancels any animation and returns to the resting pose.
    pub fn reset(&mut self) {
        self.set_pose(Pose::REST);
    }

    //--- Queries ----------------------------------------------------------

    pub fn in_transition(&self) -> bool {
        self.in_transition
    }

    /// Current pose at this instant; see [`Self::pose_at`].
    pub fn current_pose(&mut self) -> Pose {
        self.pose_at(Instant::now())
    }

    /// Current pose at an explicit instant.
    ///
    /// Mid-animation this interpolates with progress clamped to [0, 1].
    /// Once the timer completes, the state snaps to the destination pose
    /// and `in_transition` turns off.
    pub fn pose_at(&mut self, now: Instant) -> Pose {
        if !self.in_transition {
            return self.pose;
        }
        if self.timer.is_done_at(now) {
            self.pose = self.to;
            self.in_transition = false;
            return self.pose;
        }
        let t = self.timer.progress_at(now).clamp(0.0, 1.0) as f32;
        Pose::lerp(self.from, self.to, t)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn off_screen_offsets_leave_the_surface() {
        // An element anywhere on the surface, shifted by its off-screen
        // offset, must not intersect the surface.
        for kind in [
            AnimationType::Left,
            AnimationType::Right,
            AnimationType::Top,
            AnimationType::Bottom,
        ] {
            let (dx, dy) = kind.off_screen();
            assert!(
                dx.abs() >= LOGICAL_WIDTH || dy.abs() >= LOGICAL_HEIGHT,
                "{:?} offset too small: ({}, {})",
                kind,
                dx,
                dy
            );
        }
    }

    #[test]
    fn lerp_is_exact_at_endpoints() {
        let from = Pose::new(0.1, 0.2, 0.3);
        let to = Pose::new(100.7, -50.9, 1.0);
        assert_eq!(Pose::lerp(from, to, 0.0), from);
        assert_eq!(Pose::lerp(from, to, 1.0), to);
        assert_eq!(Pose::lerp(from, to, 1.5), to, "over-progress clamps to `to`");
    }

    #[test]
    fn lerp_midpoint() {
        let mid = Pose::lerp(Pose::new(0.0, 0.0, 0.0), Pose::new(10.0, 20.0, 1.0), 0.5);
        assert!((mid.dx - 5.0).abs() < 1e-6);
        assert!((mid.dy - 10.0).abs() < 1e-6);
        assert!((mid.opacity - 0.5).abs() < 1e-6);
    }

    #[test]
    fn idle_state_reports_rest() {
        let mut state = AnimationState::new();
        assert!(!state.in_transition());
        assert_eq!(state.current_pose(), Pose::REST);
    }

    #[test]
    fn animation_interpolates_then_snaps_once() {
        let mut state = AnimationState::new();
        let start = Instant::now();
        let target = Pose::new(100.0, 0.0, 0.0);

        state.animate(Pose::REST, target, 1.0);
        assert!(state.in_transition());

        let mid = state.pose_at(start + Duration::from_millis(500));
        assert!(mid.dx > 0.0 && mid.dx < 100.0);

        let done = state.pose_at(start + Duration::from_secs(2));
        assert_eq!(done, target, "snaps exactly to the destination");
        assert!(!state.in_transition(), "transition flag cleared");

        // Subsequent reads stay at the destination
        assert_eq!(state.pose_at(start + Duration::from_secs(3)), target);
    }

    #[test]
    fn round_trip_returns_to_origin() {
        // Animate A→B, complete, then B→A, complete: pose equals A.
        let mut state = AnimationState::new();
        let a = Pose::new(3.0, 4.0, 0.25);
        let b = Pose::new(-80.0, 12.0, 1.0);
        state.set_pose(a);

        let t0 = Instant::now();
        state.animate_to(b, 0.5);
        assert_eq!(state.pose_at(t0 + Duration::from_secs(1)), b);

        state.animate_to(a, 0.5);
        assert_eq!(state.pose_at(t0 + Duration::from_secs(2)), a);
    }

    #[test]
    fn set_pose_cancels_animation() {
        let mut state = AnimationState::new();
        state.animate(Pose::REST, Pose::new(50.0, 0.0, 0.5), 10.0);
        assert!(state.in_transition());

        let parked = AnimationType::Right.off_screen_pose();
        state.set_pose(parked);
        assert!(!state.in_transition());
        assert_eq!(state.current_pose(), parked);
    }

    #[test]
    fn reset_returns_to_rest() {
        let mut state = AnimationState::new();
        state.animate(Pose::REST, Pose::new(50.0, 60.0, 0.0), 10.0);
        state.reset();
        assert!(!state.in_transition());
        assert_eq!(state.current_pose(), Pose::REST);
    }
}
