//=========================================================================
// Results Screen
//
// Post-round summary: a sliding results panel with the mode-dependent
// score line, plus retry / back-to-title navigation.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::assets::{keys, AssetLibrary};
use crate::core::gameplay::{GameMode, Outcome};
use crate::core::render::{Color, Rect};
use crate::core::stage::{FrameContext, Screen, ScreenContent, TransitionStyle};
use crate::core::widget::{AnimatedComponent, AnimationType, Button};
use super::{MainMenuScreen, PlayfieldScreen};

//=== Layout ==============================================================

const PANEL: Rect = Rect::new(300.0, 160.0, 1400.0, 280.0);
const PANEL_INNER: Rect = Rect::new(330.0, 240.0, 1340.0, 180.0);
const PANEL_COLOR: Color = Color::rgb(32, 30, 54);
const PANEL_INNER_COLOR: Color = Color::rgb(28, 26, 47);
const HEADING_COLOR: Color = Color::rgb(115, 101, 151);

const BUTTON_X: f32 = 760.0;
const RETRY_Y: f32 = 620.0;
const TO_TITLE_Y: f32 = 760.0;

//=== ResultsScreen =======================================================

/// Round summary and navigation back into the flow.
pub struct ResultsScreen {
    content: ScreenContent,
}

impl ResultsScreen {
    pub fn new(assets: &AssetLibrary, outcome: Outcome) -> Self {
        let mut content = ScreenContent::new();
        content.top_bar = Some(assets.sprite(keys::BAR_TOP_RESULTS));
        content.bottom_bar = Some(assets.sprite(keys::BAR_BOTTOM_RESULTS));

        let font = assets.font(keys::FONT_HEADING);
        let score_line = score_text(outcome);
        content.components.push(AnimatedComponent::new(
            AnimationType::Right,
            move |canvas, pose| {
                let fade = pose.opacity;
                canvas.fill_rect(
                    PANEL.translated(pose.dx, pose.dy),
                    PANEL_COLOR.faded(fade),
                );
                canvas.draw_text(
                    "RESULTS",
                    font,
                    PANEL.x + 20.0 + pose.dx,
                    PANEL.y + 70.0 + pose.dy,
                    50.0,
                    HEADING_COLOR.faded(fade),
                );
                canvas.fill_rect(
                    PANEL_INNER.translated(pose.dx, pose.dy),
                    PANEL_INNER_COLOR.faded(fade),
                );
                canvas.draw_text(
                    &score_line,
                    font,
                    PANEL_INNER.x + 30.0 + pose.dx,
                    PANEL_INNER.y + 115.0 + pose.dy,
                    60.0,
                    Color::WHITE.faded(fade),
                );
            },
        ));

        // Back to the main menu (top left)
        content.buttons.push(Button::new(
            40.0,
            120.0,
            assets.sprite(keys::BUTTON_BACK),
            AnimationType::Left,
            |ctx: &mut FrameContext| {
                ctx.audio.play(ctx.assets.sound(keys::SFX_CLICK_BACK));
                let menu = MainMenuScreen::new(ctx.assets);
                ctx.screens.transition(Box::new(menu));
            },
        ));

        // Retry: a fresh round, fading in like the first one
        content.buttons.push(Button::new(
            BUTTON_X,
            RETRY_Y,
            assets.sprite(keys::BUTTON_RETRY),
            AnimationType::Right,
            |ctx: &mut FrameContext| {
                ctx.audio.play(ctx.assets.sound(keys::SFX_CLICK));
                let playfield = PlayfieldScreen::new(ctx.assets, ctx.gameplay.spawn());
                ctx.screens
                    .transition_styled(Box::new(playfield), TransitionStyle::fade_in());
            },
        ));

        // Back to title: theme resumes
        content.buttons.push(Button::new(
            BUTTON_X,
            TO_TITLE_Y,
            assets.sprite(keys::BUTTON_TO_TITLE),
            AnimationType::Right,
            |ctx: &mut FrameContext| {
                ctx.audio.set_looping(true);
                ctx.audio.play(ctx.assets.sound(keys::MUSIC_THEME));
                let menu = MainMenuScreen::new(ctx.assets);
                ctx.screens.transition(Box::new(menu));
            },
        ));

        Self { content }
    }
}

impl Screen for ResultsScreen {
    fn content(&self) -> &ScreenContent {
        &self.content
    }

    fn content_mut(&mut self) -> &mut ScreenContent {
        &mut self.content
    }
}

//=== Helpers =============================================================

/// Mode-dependent score line.
fn score_text(outcome: Outcome) -> String {
    match outcome.mode {
        GameMode::Blitz => format!("Lines Cleared: {}", outcome.score),
        GameMode::FortyLines => {
            let minutes = outcome.score / 1000 / 60;
            let seconds = outcome.score / 1000 % 60;
            let millis = outcome.score % 1000;
            format!("Time: {}:{:02}.{:03}", minutes, seconds, millis)
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
