//=========================================================================
// Playfield Screen
//
// Hosts one round of the external gameplay collaborator: steps it once
// per simulation tick, renders it into a centered region, fades the
// whole screen in from black over the first second, and hands off to
// the results screen when the round reports its outcome.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::assets::{keys, AssetLibrary};
use crate::core::gameplay::Gameplay;
use crate::core::render::{Canvas, Color, Rect, LOGICAL_HEIGHT, LOGICAL_WIDTH};
use crate::core::stage::{FrameContext, Screen, ScreenContent};
use crate::core::timing::FrameTimer;
use crate::core::widget::{AnimationType, Button};
use super::{MainMenuScreen, ResultsScreen};

//=== Layout ==============================================================

/// Seconds of fade-from-black after entering the playfield.
const BLACK_IN_SECONDS: f64 = 1.0;

/// Backdrop opacity while a round is running.
const DIMMED_BACKDROP: f32 = 0.5;

const GAME_AREA_WIDTH: f32 = 680.0;
const GAME_AREA_HEIGHT: f32 = 960.0;

/// Centered region the gameplay collaborator paints into.
const GAME_AREA: Rect = Rect::new(
    (LOGICAL_WIDTH - GAME_AREA_WIDTH) / 2.0,
    (LOGICAL_HEIGHT - GAME_AREA_HEIGHT) / 2.0,
    GAME_AREA_WIDTH,
    GAME_AREA_HEIGHT,
);

//=== PlayfieldScreen =====================================================

/// Gameplay-hosting screen.
pub struct PlayfieldScreen {
    content: ScreenContent,
    gameplay: Box<dyn Gameplay>,
    black_in: FrameTimer,
    entered: bool,
    finished: bool,
}

impl PlayfieldScreen {
    pub fn new(assets: &AssetLibrary, gameplay: Box<dyn Gameplay>) -> Self {
        let mut content = ScreenContent::new();

        content.buttons.push(Button::new(
            40.0,
            120.0,
            assets.sprite(keys::BUTTON_BACK),
            AnimationType::Left,
            |ctx: &mut FrameContext| {
                ctx.audio.play(ctx.assets.sound(keys::SFX_CLICK_BACK));
                ctx.backdrop.set_opacity(1.0);
                let menu = MainMenuScreen::new(ctx.assets);
                ctx.screens.transition(Box::new(menu));
            },
        ));

        Self {
            content,
            gameplay,
            black_in: FrameTimer::new(BLACK_IN_SECONDS),
            entered: false,
            finished: false,
        }
    }
}

impl Screen for PlayfieldScreen {
    fn content(&self) -> &ScreenContent {
        &self.content
    }

    fn content_mut(&mut self) -> &mut ScreenContent {
        &mut self.content
    }

    fn update(&mut self, ctx: &mut FrameContext) {
        if !self.entered {
            self.entered = true;
            ctx.backdrop.shuffle();
            ctx.backdrop.set_opacity(DIMMED_BACKDROP);
        }

        self.gameplay.update(ctx.input);

        if !self.finished {
            if let Some(outcome) = self.gameplay.outcome() {
                self.finished = true;
                ctx.audio.stop();
                let results = ResultsScreen::new(ctx.assets, outcome);
                ctx.screens.transition(Box::new(results));
            }
        }
    }

    fn draw(&mut self, ctx: &mut FrameContext, canvas: &mut dyn Canvas) {
        self.content.draw(ctx, canvas);
        self.gameplay.render_into(canvas, GAME_AREA);

        // Fade in from black over the first second
        if !self.black_in.is_done() {
            let opacity = 1.0 - self.black_in.progress().clamp(0.0, 1.0);
            canvas.fill_rect(Rect::surface(), Color::BLACK.faded(opacity as f32));
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::gameplay::{GameMode, Outcome};
    use crate::core::input::InputFrame;
    use crate::core::render::{DrawCommand, TraceCanvas};
    use crate::core::stage::ScreenRequest;
    use crate::screens::test_kit::Harness;

    /// Gameplay stub that ends after a fixed number of updates.
    struct Rigged {
        updates_left: u32,
    }

    impl Rigged {
        fn boxed(updates_left: u32) -> Box<dyn Gameplay> {
            Box::new(Self { updates_left })
        }
    }

    impl Gameplay for Rigged {
        fn update(&mut self, _input: &InputFrame) {
            self.updates_left = self.updates_left.saturating_sub(1);
        }
        fn render_into(&self, canvas: &mut dyn Canvas, region: Rect) {
            canvas.fill_rect(region, Color::rgb(1, 2, 3));
        }
        fn outcome(&self) -> Option<Outcome> {
            (self.updates_left == 0).then_some(Outcome {
                mode: GameMode::Blitz,
                score: 12,
            })
        }
    }

    #[test]
    fn first_update_dims_and_shuffles_the_backdrop() {
        let mut harness = Harness::new();
        let mut screen = PlayfieldScreen::new(&harness.assets, Rigged::boxed(100));

        let mut ctx = harness.ctx();
        screen.update(&mut ctx);
        drop(ctx);

        assert_eq!(harness.backdrop.opacity(), DIMMED_BACKDROP);
    }

    #[test]
    fn gameplay_paints_the_centered_region() {
        let mut harness = Harness::new();
        let mut screen = PlayfieldScreen::new(&harness.assets, Rigged::boxed(100));

        let mut canvas = TraceCanvas::new();
        let mut ctx = harness.ctx();
        screen.draw(&mut ctx, &mut canvas);
        drop(ctx);

        let region = canvas.commands().iter().find_map(|c| match c {
            DrawCommand::FillRect { rect, color } if color.r == 1 => Some(*rect),
            _ => None,
        });
        assert_eq!(region, Some(GAME_AREA));
    }

    #[test]
    fn fresh_playfield_is_black_faded() {
        let mut harness = Harness::new();
        let mut screen = PlayfieldScreen::new(&harness.assets, Rigged::boxed(100));

        let mut canvas = TraceCanvas::new();
        let mut ctx = harness.ctx();
        screen.draw(&mut ctx, &mut canvas);
        drop(ctx);

        // The last command is the near-opaque black-in overlay
        match canvas.commands().last() {
            Some(DrawCommand::FillRect { color, .. }) => {
                assert_eq!((color.r, color.g, color.b), (0, 0, 0));
                assert!(color.a > 240, "fresh fade is near-opaque, got {}", color.a);
            }
            other => panic!("expected overlay, got {:?}", other),
        }
    }

    #[test]
    fn outcome_hands_off_to_results_once() {
        let mut harness = Harness::new();
        let mut screen = PlayfieldScreen::new(&harness.assets, Rigged::boxed(3));

        let mut ctx = harness.ctx();
        for _ in 0..6 {
            screen.update(&mut ctx);
        }
        drop(ctx);

        let requests = harness.screens.take();
        let transitions = requests
            .iter()
            .filter(|r| matches!(r, ScreenRequest::Transition { .. }))
            .count();
        assert_eq!(transitions, 1, "results requested exactly once");
        assert_eq!(harness.audio.stops, 1, "music stopped for results");
    }

    #[test]
    fn back_button_returns_to_menu_and_restores_backdrop() {
        let mut harness = Harness::new();
        let mut screen = PlayfieldScreen::new(&harness.assets, Rigged::boxed(100));

        let mut ctx = harness.ctx();
        screen.update(&mut ctx); // dims
        screen.content_mut().buttons[0].fire(&mut ctx);
        drop(ctx);

        assert_eq!(harness.backdrop.opacity(), 1.0);
        assert!(!harness.screens.is_empty());
    }
}
