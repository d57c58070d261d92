//=========================================================================
// Welcome Screen
//
// First screen shown after boot: title card, a start button, and the
// looping theme music. Any key or the start button moves on to the
// main menu.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::assets::{keys, AssetLibrary};
use crate::core::input::KeyCode;
use crate::core::render::Color;
use crate::core::stage::{FrameContext, Screen, ScreenContent};
use crate::core::widget::{AnimatedComponent, AnimationType, Button};
use super::MainMenuScreen;

//=== Layout ==============================================================

const TITLE_TEXT: &str = "CADENCE";
const TITLE_X: f32 = 660.0;
const TITLE_Y: f32 = 320.0;
const TITLE_SIZE: f32 = 140.0;

const START_X: f32 = 760.0;
const START_Y: f32 = 620.0;

//=== WelcomeScreen =======================================================

/// Title card; entry point of the screen flow.
pub struct WelcomeScreen {
    content: ScreenContent,
    music_started: bool,
}

impl WelcomeScreen {
    pub fn new(assets: &AssetLibrary) -> Self {
        let mut content = ScreenContent::new();

        let font = assets.font(keys::FONT_HEADING);
        content.components.push(AnimatedComponent::new(
            AnimationType::Top,
            move |canvas, pose| {
                canvas.draw_text(
                    TITLE_TEXT,
                    font,
                    TITLE_X + pose.dx,
                    TITLE_Y + pose.dy,
                    TITLE_SIZE,
                    Color::WHITE.faded(pose.opacity),
                );
            },
        ));

        content.buttons.push(Button::new(
            START_X,
            START_Y,
            assets.sprite(keys::BUTTON_START),
            AnimationType::Bottom,
            go_to_menu,
        ));

        Self { content, music_started: false }
    }
}

impl Screen for WelcomeScreen {
    fn content(&self) -> &ScreenContent {
        &self.content
    }

    fn content_mut(&mut self) -> &mut ScreenContent {
        &mut self.content
    }

    fn update(&mut self, ctx: &mut FrameContext) {
        // Theme starts with the first tick, once
        if !self.music_started {
            self.music_started = true;
            ctx.audio.set_looping(true);
            ctx.audio.play(ctx.assets.sound(keys::MUSIC_THEME));
        }
    }

    fn key_pressed(&mut self, ctx: &mut FrameContext, _key: KeyCode) {
        go_to_menu(ctx);
    }
}

//=== Helpers =============================================================

fn go_to_menu(ctx: &mut FrameContext) {
    ctx.audio.play(ctx.assets.sound(keys::SFX_CLICK));
    let menu = MainMenuScreen::new(ctx.assets);
    ctx.screens.transition(Box::new(menu));
}

//=========================================================================
// Unit Tests
//=========================================================================
