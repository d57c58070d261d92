//=========================================================================
// Built-in Screens
//
// The menu-content glue: concrete screens assembled from the stage
// system's parts. Embedders can use these as-is (registering the asset
// keys they reference) or build their own Screen impls alongside them.
//
// Flow:
//   Welcome → MainMenu → Playfield → Results
//                ↑__________________/
//
//=========================================================================

//=== Submodules ==========================================================

mod main_menu;
mod playfield;
mod results;
mod welcome;

//=== Public API ==========================================================

pub use main_menu::MainMenuScreen;
pub use playfield::PlayfieldScreen;
pub use results::ResultsScreen;
pub use welcome::WelcomeScreen;

//=========================================================================
// Test Kit
//=========================================================================

#[cfg(test)]
pub(crate) mod test_kit {
    use crate::core::assets::{AssetLibrary, SoundHandle};
    use crate::core::audio::AudioSink;
    use crate::core::backdrop::Backdrop;
    use crate::core::gameplay::GameplaySpawner;
    use crate::core::input::InputFrame;
    use crate::core::settings::GameSettings;
    use crate::core::stage::{FrameContext, ScreenRequests};

    /// Audio sink that records every call for asserting.
    #[derive(Default)]
    pub struct RecordingAudio {
        pub played: Vec<SoundHandle>,
        pub stops: u32,
        pub looping: bool,
        pub volume: f32,
    }

    impl AudioSink for RecordingAudio {
        fn play(&mut self, sound: SoundHandle) {
            self.played.push(sound);
        }
        fn stop(&mut self) {
            self.stops += 1;
        }
        fn set_volume(&mut self, volume: f32) {
            self.volume = volume;
        }
        fn set_looping(&mut self, looping: bool) {
            self.looping = looping;
        }
    }

    /// Owns every collaborator a context borrows, so tests can inspect
    /// them after the context is gone.
    pub struct Harness {
        pub input: InputFrame,
        pub assets: AssetLibrary,
        pub audio: RecordingAudio,
        pub settings: GameSettings,
        pub backdrop: Backdrop,
        pub screens: ScreenRequests,
        pub gameplay: GameplaySpawner,
    }

    impl Harness {
        pub fn new() -> Self {
            Self {
                input: InputFrame::new(),
                assets: AssetLibrary::new(),
                audio: RecordingAudio::default(),
                settings: GameSettings::new(),
                backdrop: Backdrop::new(),
                screens: ScreenRequests::new(),
                gameplay: GameplaySpawner::none(),
            }
        }

        pub fn ctx(&mut self) -> FrameContext<'_> {
            FrameContext {
                input: &self.input,
                assets: &self.assets,
                audio: &mut self.audio,
                settings: &mut self.settings,
                backdrop: &mut self.backdrop,
                screens: &mut self.screens,
                gameplay: &self.gameplay,
            }
        }
    }
}
