//=========================================================================
// Main Menu Screen
//
// Hub between the welcome card, the playfield, and process exit.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::assets::{keys, AssetLibrary};
use crate::core::stage::{FrameContext, Screen, ScreenContent, TransitionStyle};
use crate::core::widget::{AnimationType, Button};
use super::PlayfieldScreen;

//=== Layout ==============================================================

const BUTTON_X: f32 = 760.0;
const PLAY_Y: f32 = 420.0;
const EXIT_Y: f32 = 580.0;

//=== MainMenuScreen ======================================================

/// Menu hub with play and exit.
pub struct MainMenuScreen {
    content: ScreenContent,
}

impl MainMenuScreen {
    pub fn new(assets: &AssetLibrary) -> Self {
        let mut content = ScreenContent::new();
        content.top_bar = Some(assets.sprite(keys::BAR_TOP_MENU));
        content.bottom_bar = Some(assets.sprite(keys::BAR_BOTTOM_MENU));

        content.buttons.push(Button::new(
            BUTTON_X,
            PLAY_Y,
            assets.sprite(keys::BUTTON_PLAY),
            AnimationType::Right,
            |ctx: &mut FrameContext| {
                ctx.audio.play(ctx.assets.sound(keys::SFX_CLICK));
                let playfield = PlayfieldScreen::new(ctx.assets, ctx.gameplay.spawn());
                ctx.screens
                    .transition_styled(Box::new(playfield), TransitionStyle::fade_in());
            },
        ));

        content.buttons.push(Button::new(
            BUTTON_X,
            EXIT_Y,
            assets.sprite(keys::BUTTON_EXIT),
            AnimationType::Left,
            |ctx: &mut FrameContext| {
                ctx.audio.play(ctx.assets.sound(keys::SFX_CLICK_BACK));
                ctx.screens.exit();
            },
        ));

        Self { content }
    }
}

impl Screen for MainMenuScreen {
    fn content(&self) -> &ScreenContent {
        &self.content
    }

    fn content_mut(&mut self) -> &mut ScreenContent {
        &mut self.content
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::stage::ScreenRequest;
    use crate::screens::test_kit::Harness;

    #[test]
    fn wears_menu_chrome_and_two_buttons() {
        let harness = Harness::new();
        let screen = MainMenuScreen::new(&harness.assets);
        assert!(screen.content().top_bar.is_some());
        assert!(screen.content().bottom_bar.is_some());
        assert_eq!(screen.content().buttons.len(), 2);
    }

    #[test]
    fn play_button_fades_into_the_playfield() {
        let mut harness = Harness::new();
        let mut screen = MainMenuScreen::new(&harness.assets);

        let mut ctx = harness.ctx();
        screen.content_mut().buttons[0].fire(&mut ctx);
        drop(ctx);

        match &harness.screens.take()[..] {
            [ScreenRequest::Transition { style, .. }] => {
                assert!(style.black_in, "entering gameplay fades to black");
            }
            other => panic!("expected one transition, got {} requests", other.len()),
        }
    }

    #[test]
    fn exit_button_requests_shutdown() {
        let mut harness = Harness::new();
        let mut screen = MainMenuScreen::new(&harness.assets);

        let mut ctx = harness.ctx();
        screen.content_mut().buttons[1].fire(&mut ctx);
        drop(ctx);

        assert!(matches!(
            harness.screens.take()[..],
            [ScreenRequest::Exit]
        ));
    }
}
