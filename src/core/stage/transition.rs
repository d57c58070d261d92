//=========================================================================
// Transition Screen
//
// Animates the outgoing screen's elements off the surface and the
// incoming screen's elements on, then swaps the active screen exactly
// once.
//
// State machine:
//   ANIMATING --timer done--> SWITCHED (terminal)
//
// Ownership:
//   Construction MOVES the widget lists out of both screens into this
//   one (no aliasing, one writer). The outgoing screen is consumed; the
//   incoming screen is held until completion, when its widgets are
//   reset to rest pose and moved back, the switch request is queued,
//   and the target is drawn for the same frame so no blank frame is
//   ever presented.
//
// Setup symmetry:
//   leaving widgets:  current pose → their off-screen pose
//   entering widgets: parked at off-screen pose → rest pose
// One interpolation primitive serves both directions.
//
//=========================================================================

//=== External Crates =====================================================

use log::warn;

//=== Internal Dependencies ===============================================

use crate::core::render::{Canvas, Color, Rect};
use crate::core::timing::FrameTimer;
use crate::core::widget::Pose;
use super::{FrameContext, Screen, ScreenContent, TransitionStyle};

//=== TransitionScreen ====================================================

/// Special screen that owns both sides' widgets while they slide.
pub struct TransitionScreen {
    /// Merged widget lists: outgoing first, then incoming.
    content: ScreenContent,

    /// Split points: widgets at these indices and beyond belong to the
    /// incoming screen and are handed back on completion.
    entering_components_at: usize,
    entering_buttons_at: usize,

    /// The screen to become active. Taken exactly once.
    target: Option<Box<dyn Screen>>,

    timer: FrameTimer,
    black_in: bool,
}

impl TransitionScreen {
    /// Builds the transition from the screen being left and the screen
    /// being entered.
    ///
    /// # Panics
    ///
    /// Panics if `style.seconds <= 0.0` (timer contract).
    pub fn new(
        mut from: Box<dyn Screen>,
        mut target: Box<dyn Screen>,
        style: TransitionStyle,
    ) -> Self {
        let seconds = style.seconds;
        let mut content = ScreenContent::new();

        // The transition wears the incoming screen's chrome
        content.top_bar = target.content().top_bar;
        content.bottom_bar = target.content().bottom_bar;

        //--- Outgoing widgets: slide away, fade out ----------------------
        for mut component in std::mem::take(&mut from.content_mut().components) {
            component.animate_to(component.animation_type().off_screen_pose(), seconds);
            content.components.push(component);
        }
        let entering_components_at = content.components.len();

        //--- Incoming widgets: park off-screen, slide to rest ------------
        for mut component in std::mem::take(&mut target.content_mut().components) {
            component.set_pose(component.animation_type().off_screen_pose());
            component.animate_to(Pose::REST, seconds);
            content.components.push(component);
        }

        for mut button in std::mem::take(&mut from.content_mut().buttons) {
            button.animate_to(button.animation_type().off_screen_pose(), seconds);
            content.buttons.push(button);
        }
        let entering_buttons_at = content.buttons.len();

        for mut button in std::mem::take(&mut target.content_mut().buttons) {
            button.set_pose(button.animation_type().off_screen_pose());
            button.animate_to(Pose::REST, seconds);
            content.buttons.push(button);
        }

        Self {
            content,
            entering_components_at,
            entering_buttons_at,
            target: Some(target),
            timer: FrameTimer::new(seconds),
            black_in: style.black_in,
        }
    }

    /// Hands the incoming widgets back at rest pose and queues the
    /// one-shot switch. Draws the target for the current frame.
    fn complete(&mut self, ctx: &mut FrameContext, canvas: &mut dyn Canvas) {
        let Some(mut target) = self.target.take() else {
            // Terminal state reached earlier; extra draws must neither
            // re-display nor render stale widgets
            warn!(target: "stage", "Transition drawn after completion; ignoring");
            return;
        };

        {
            let target_content = target.content_mut();
            for mut component in self.content.components.drain(self.entering_components_at..) {
                component.reset();
                target_content.components.push(component);
            }
            for mut button in self.content.buttons.drain(self.entering_buttons_at..) {
                button.reset();
                target_content.buttons.push(button);
            }
        }

        // Outgoing widgets die with this screen
        self.content.components.clear();
        self.content.buttons.clear();

        target.draw(ctx, canvas);
        ctx.screens.display(target);
    }
}

impl Screen for TransitionScreen {
    fn content(&self) -> &ScreenContent {
        &self.content
    }

    fn content_mut(&mut self) -> &mut ScreenContent {
        &mut self.content
    }

    fn draw(&mut self, ctx: &mut FrameContext, canvas: &mut dyn Canvas) {
        if self.timer.is_done() {
            self.complete(ctx, canvas);
            return;
        }

        self.content.draw(ctx, canvas);

        if self.black_in {
            let alpha = (255.0 * self.timer.progress().clamp(0.0, 1.0)) as u8;
            canvas.fill_rect(Rect::surface(), Color::rgba(0, 0, 0, alpha));
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
