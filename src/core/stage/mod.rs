//=========================================================================
// Stage System
//
// Polymorphic screens and the machinery that switches between them.
//
// Architecture:
//   Screen (trait)           uniform {draw, update, press, release}
//     └─ ScreenContent       chrome + components + buttons every
//                            screen variant composes
//   FrameContext             per-frame view of shared collaborators
//   ScreenRequests           command queue for switching screens
//   Stage                    owns the single active screen
//   TransitionScreen         animates one screen out, the next one in
//
// Flow:
//   loop → Screen::update/draw → requests queued → Stage::apply_requests
//
//=========================================================================

//=== Submodules ==========================================================

mod context;
mod host;
mod transition;

//=== Public API ==========================================================

pub use context::{FrameContext, ScreenRequest, ScreenRequests, TransitionStyle};
pub use host::Stage;
pub use transition::TransitionScreen;

//=== Internal Dependencies ===============================================

use crate::core::assets::Sprite;
use crate::core::input::KeyCode;
use crate::core::render::{Canvas, CursorIcon, LOGICAL_HEIGHT};
use crate::core::widget::{AnimatedComponent, Button};

//=== ScreenContent =======================================================

/// The element lists every screen variant composes: optional chrome
/// bars, ordered components, ordered buttons.
///
/// Lists are populated during a screen's construction and only borrowed
/// elsewhere — except by [`TransitionScreen`], which *moves* them out
/// for the duration of a transition and moves the incoming screen's
/// lists back when it completes.
#[derive(Default)]
pub struct ScreenContent {
    pub top_bar: Option<Sprite>,
    pub bottom_bar: Option<Sprite>,
    pub components: Vec<AnimatedComponent>,
    pub buttons: Vec<Button>,
}

impl ScreenContent {
    pub fn new() -> Self {
        Self::default()
    }

    //--- Drawing ----------------------------------------------------------

    /// Standard draw pass: backdrop, chrome, components in insertion
    /// order, buttons in insertion order, then the cursor style —
    /// pointing iff any button is hovered, recomputed every frame.
    pub fn draw(&mut self, ctx: &mut FrameContext, canvas: &mut dyn Canvas) {
        ctx.backdrop.draw(canvas);

        if let Some(bar) = self.top_bar {
            canvas.draw_sprite(&bar, 0.0, 0.0, 1.0);
        }
        if let Some(bar) = self.bottom_bar {
            canvas.draw_sprite(&bar, 0.0, LOGICAL_HEIGHT - bar.height, 1.0);
        }

        for component in &mut self.components {
            component.draw(canvas);
        }

        let pointer = ctx.input.pointer();
        let mut any_hovered = false;
        for button in &mut self.buttons {
            any_hovered |= button.refresh_hover(pointer);
            button.draw(canvas);
        }

        canvas.set_cursor(if any_hovered {
            CursorIcon::Pointer
        } else {
            CursorIcon::Default
        });
    }

    //--- Input Dispatch ---------------------------------------------------

    /// Forwards a primary-button press to every button.
    pub fn pointer_pressed(&mut self, ctx: &mut FrameContext) {
        let pointer = ctx.input.pointer();
        for button in &mut self.buttons {
            button.pointer_pressed(pointer);
        }
    }

    /// Forwards a primary-button release to every button, firing the
    /// handlers of completed clicks.
    pub fn pointer_released(&mut self, ctx: &mut FrameContext) {
        let pointer = ctx.input.pointer();
        for button in &mut self.buttons {
            if button.pointer_released(pointer) {
                button.fire(ctx);
            }
        }
    }
}

//=== Screen ==============================================================

/// A UI screen: welcome, menu, gameplay host, results, or a transition.
///
/// All variants satisfy the same contract, so the [`Stage`] treats them
/// uniformly through `Box<dyn Screen>`. The provided method bodies give
/// every screen the standard content behavior; override only where a
/// variant needs more (gameplay hosting, transition logic).
pub trait Screen: Send {
    fn content(&self) -> &ScreenContent;

    fn content_mut(&mut self) -> &mut ScreenContent;

    /// Per-simulation-tick hook. No-op for static menu screens.
    fn update(&mut self, _ctx: &mut FrameContext) {}

    /// Renders this screen into the logical surface.
    fn draw(&mut self, ctx: &mut FrameContext, canvas: &mut dyn Canvas) {
        self.content_mut().draw(ctx, canvas);
    }

    fn pointer_pressed(&mut self, ctx: &mut FrameContext) {
        self.content_mut().pointer_pressed(ctx);
    }

    fn pointer_released(&mut self, ctx: &mut FrameContext) {
        self.content_mut().pointer_released(ctx);
    }

    /// Key transition hooks for screens that care (gameplay, welcome).
    fn key_pressed(&mut self, _ctx: &mut FrameContext, _key: KeyCode) {}

    fn key_released(&mut self, _ctx: &mut FrameContext, _key: KeyCode) {}
}

//=========================================================================
// Unit Tests
//=========================================================================
