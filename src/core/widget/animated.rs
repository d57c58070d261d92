//=========================================================================
// Animated Component
//
// Free-form drawable element: an AnimationState paired with a painter
// closure. Screens build these for panels, labels, decorations —
// anything that slides and fades during transitions but is not a
// button.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::time::Instant;

//=== Internal Dependencies ===============================================

use crate::core::render::Canvas;
use super::{AnimationState, AnimationType, Pose};

//=== Painter =============================================================

/// Draw capability stored by a component. Receives the canvas and the
/// component's current pose; the painter applies the pose offset and
/// opacity to everything it draws.
pub type Painter = Box<dyn Fn(&mut dyn Canvas, Pose) + Send>;

//=== AnimatedComponent ===================================================

/// Drawable UI element with position offset, opacity, and an
/// animation-in-progress state.
pub struct AnimatedComponent {
    animation: AnimationState,
    kind: AnimationType,
    painter: Painter,
}

impl AnimatedComponent {
    /// Creates a component with the given slide direction and painter.
    pub fn new(
        kind: AnimationType,
        painter: impl Fn(&mut dyn Canvas, Pose) + Send + 'static,
    ) -> Self {
        Self {
            animation: AnimationState::new(),
            kind,
            painter: Box::new(painter),
        }
    }

    //--- Animation --------------------------------------------------------

    /// Starts an interpolation from an explicit pose.
    pub fn animate(&mut self, from: Pose, to: Pose, seconds: f64) {
        self.animation.animate(from, to, seconds);
    }

    /// Starts an interpolation from the current pose.
    pub fn animate_to(&mut self, to: Pose, seconds: f64) {
        self.animation.animate_to(to, seconds);
    }

    /// Jumps to a pose without animating.
    pub fn set_pose(&mut self, pose: Pose) {
        self.animation.set_pose(pose);
    }

    /// Cancels any animation and returns to rest.
    pub fn reset(&mut self) {
        self.animation.reset();
    }

    pub fn in_transition(&self) -> bool {
        self.animation.in_transition()
    }

    pub fn animation_type(&self) -> AnimationType {
        self.kind
    }

    //--- Drawing ----------------------------------------------------------

    /// Draws at the current interpolated pose. The only operation with
    /// an externally visible effect.
    pub fn draw(&mut self, canvas: &mut dyn Canvas) {
        self.draw_at(canvas, Instant::now());
    }

    /// [`Self::draw`] at an explicit instant.
    pub fn draw_at(&mut self, canvas: &mut dyn Canvas, now: Instant) {
        let pose = self.animation.pose_at(now);
        (self.painter)(canvas, pose);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
