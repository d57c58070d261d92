//=========================================================================
// Button
//
// Animatable sprite button with hover detection and a two-phase
// press/release click protocol.
//
// Protocol:
//   press   → arms the button only if the pointer is over it
//   release → fires the handler only if armed AND still hovered,
//             then always disarms
//
// Pressing elsewhere and dragging onto the button, or pressing the
// button and dragging off before release, never fires. Hover always
// tests the *live animated* bounds, so buttons stay clickable-correct
// mid-transition.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::time::Instant;

//=== External Crates =====================================================

use log::trace;

//=== Internal Dependencies ===============================================

use crate::core::assets::Sprite;
use crate::core::render::{Canvas, Rect};
use crate::core::stage::FrameContext;
use super::{AnimationState, AnimationType, Pose};

//=== Constants ===========================================================

/// Horizontal nudge applied to the drawn sprite while hovered.
const HOVER_SHIFT: f32 = -8.0;

//=== PressHandler ========================================================

/// Callback attached to a button, run on a completed click.
pub type PressHandler = Box<dyn FnMut(&mut FrameContext) + Send>;

//=== Button ==============================================================

/// Sprite button: an animated element plus hit testing and a handler.
pub struct Button {
    animation: AnimationState,
    kind: AnimationType,

    /// Resting bounds; live bounds are these shifted by the pose.
    bounds: Rect,
    sprite: Sprite,
    hovered: bool,
    armed: bool,
    handler: PressHandler,
}

impl Button {
    /// Creates a button whose bounds match the sprite's natural size at
    /// the given resting position.
    pub fn new(
        x: f32,
        y: f32,
        sprite: Sprite,
        kind: AnimationType,
        handler: impl FnMut(&mut FrameContext) + Send + 'static,
    ) -> Self {
        Self {
            animation: AnimationState::new(),
            kind,
            bounds: Rect::new(x, y, sprite.width, sprite.height),
            sprite,
            hovered: false,
            armed: false,
            handler: Box::new(handler),
        }
    }

    //--- Geometry & Hover -------------------------------------------------

    /// Bounds at the current animated pose.
    pub fn current_bounds(&mut self) -> Rect {
        self.current_bounds_at(Instant::now())
    }

    fn current_bounds_at(&mut self, now: Instant) -> Rect {
        let pose = self.animation.pose_at(now);
        self.bounds.translated(pose.dx, pose.dy)
    }

    /// Re-tests the pointer against the live bounds and returns the new
    /// hover state.
    pub fn refresh_hover(&mut self, pointer: (f32, f32)) -> bool {
        self.hovered = self.current_bounds().contains(pointer.0, pointer.1);
        self.hovered
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    //--- Click Protocol ---------------------------------------------------

    /// Pointer went down: arms the button iff currently over it.
    pub fn pointer_pressed(&mut self, pointer: (f32, f32)) {
        if self.refresh_hover(pointer) {
            self.armed = true;
        }
    }

    /// Pointer came up: reports whether the click completed, and always
    /// disarms. The caller fires the handler via [`Self::fire`] so the
    /// context borrow stays outside the button list iteration.
    pub fn pointer_released(&mut self, pointer: (f32, f32)) -> bool {
        let fire = self.armed && self.refresh_hover(pointer);
        self.armed = false;
        fire
    }

    /// Runs the press handler.
    pub fn fire(&mut self, ctx: &mut FrameContext) {
        trace!(target: "stage", "Button at ({}, {}) fired", self.bounds.x, self.bounds.y);
        (self.handler)(ctx);
    }

    //--- Animation --------------------------------------------------------

    pub fn animate(&mut self, from: Pose, to: Pose, seconds: f64) {
        self.animation.animate(from, to, seconds);
    }

    pub fn animate_to(&mut self, to: Pose, seconds: f64) {
        self.animation.animate_to(to, seconds);
    }

    pub fn set_pose(&mut self, pose: Pose) {
        self.animation.set_pose(pose);
    }

    pub fn reset(&mut self) {
        self.animation.reset();
        self.hovered = false;
        self.armed = false;
    }

    pub fn in_transition(&self) -> bool {
        self.animation.in_transition()
    }

    pub fn animation_type(&self) -> AnimationType {
        self.kind
    }

    //--- Drawing ----------------------------------------------------------

    /// Draws the sprite at the current pose, nudged while hovered.
    pub fn draw(&mut self, canvas: &mut dyn Canvas) {
        self.draw_at(canvas, Instant::now());
    }

    pub fn draw_at(&mut self, canvas: &mut dyn Canvas, now: Instant) {
        let pose = self.animation.pose_at(now);
        let shift = if self.hovered { HOVER_SHIFT } else { 0.0 };
        canvas.draw_sprite(
            &self.sprite,
            self.bounds.x + pose.dx + shift,
            self.bounds.y + pose.dy,
            pose.opacity,
        );
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
