//=========================================================================
// Frame Context & Screen Requests
//
// `FrameContext` is the per-frame window through which screens reach
// the shared collaborators: the input snapshot, assets, audio,
// settings, the backdrop, and the screen request queue. Everything a
// screen may touch during update/draw/input dispatch flows through
// here; there is no global state.
//
// `ScreenRequests` is the command queue that replaces a free-floating
// "active screen" pointer: screens queue display/transition/exit
// requests, and the loop applies them at phase boundaries via
// `Stage::apply_requests`.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::assets::AssetLibrary;
use crate::core::audio::AudioSink;
use crate::core::backdrop::Backdrop;
use crate::core::gameplay::GameplaySpawner;
use crate::core::input::InputFrame;
use crate::core::settings::GameSettings;
use super::Screen;

//=== TransitionStyle =====================================================

/// How an animated screen switch should look.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionStyle {
    /// Animation length in seconds.
    pub seconds: f64,

    /// Whether to fade the whole surface to black alongside the slide.
    pub black_in: bool,
}

impl Default for TransitionStyle {
    /// The quick menu-to-menu slide.
    fn default() -> Self {
        Self { seconds: 0.19, black_in: false }
    }
}

impl TransitionStyle {
    /// Slower fade used when entering gameplay.
    pub fn fade_in() -> Self {
        Self { seconds: 0.5, black_in: true }
    }
}

//=== ScreenRequest =======================================================

/// One queued screen switch command.
pub enum ScreenRequest {
    /// Make the screen active immediately, no animation. Used by a
    /// completing [`TransitionScreen`](super::TransitionScreen).
    Display(Box<dyn Screen>),

    /// Animate from the currently active screen to `target`.
    Transition {
        target: Box<dyn Screen>,
        style: TransitionStyle,
    },

    /// Shut the runtime down.
    Exit,
}

//=== ScreenRequests ======================================================

/// Queue of pending screen switches, drained at phase boundaries.
#[derive(Default)]
pub struct ScreenRequests {
    pending: Vec<ScreenRequest>,
}

impl ScreenRequests {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues an immediate, unanimated switch.
    pub fn display(&mut self, screen: Box<dyn Screen>) {
        self.pending.push(ScreenRequest::Display(screen));
    }

    /// Queues an animated switch with the default style.
    pub fn transition(&mut self, target: Box<dyn Screen>) {
        self.transition_styled(target, TransitionStyle::default());
    }

    /// Queues an animated switch with an explicit style.
    pub fn transition_styled(&mut self, target: Box<dyn Screen>, style: TransitionStyle) {
        self.pending.push(ScreenRequest::Transition { target, style });
    }

    /// Queues a runtime shutdown.
    pub fn exit(&mut self) {
        self.pending.push(ScreenRequest::Exit);
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Takes all pending requests, leaving the queue empty.
    pub(crate) fn take(&mut self) -> Vec<ScreenRequest> {
        std::mem::take(&mut self.pending)
    }
}

//=== FrameContext ========================================================

/// Per-frame view of the shared collaborators, handed to every screen
/// hook. Borrows live only for the duration of the hook call; the loop
/// owns all of the underlying state.
pub struct FrameContext<'a> {
    /// Input snapshot for this tick (read-only for screens).
    pub input: &'a InputFrame,

    /// Asset key resolution.
    pub assets: &'a AssetLibrary,

    /// Fire-and-forget audio.
    pub audio: &'a mut dyn AudioSink,

    /// In-memory settings.
    pub settings: &'a mut GameSettings,

    /// Shared background beneath every screen.
    pub backdrop: &'a mut Backdrop,

    /// Screen switch queue.
    pub screens: &'a mut ScreenRequests,

    /// Factory for fresh gameplay rounds.
    pub gameplay: &'a GameplaySpawner,
}

//=========================================================================
// Test Support
//=========================================================================

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::core::audio::NullAudio;

    /// Builds a throwaway context over default collaborators and hands
    /// it to `body`. Queued screen requests are returned for asserting.
    pub(crate) fn with_ctx(body: impl FnOnce(&mut FrameContext)) -> ScreenRequests {
        let input = InputFrame::new();
        with_ctx_input(&input, body)
    }

    /// Like [`with_ctx`] with a caller-prepared input snapshot.
    pub(crate) fn with_ctx_input(
        input: &InputFrame,
        body: impl FnOnce(&mut FrameContext),
    ) -> ScreenRequests {
        let assets = AssetLibrary::new();
        let mut audio = NullAudio;
        let mut settings = GameSettings::new();
        let mut backdrop = Backdrop::new();
        let mut screens = ScreenRequests::new();
        let spawner = GameplaySpawner::none();
        {
            let mut ctx = FrameContext {
                input,
                assets: &assets,
                audio: &mut audio,
                settings: &mut settings,
                backdrop: &mut backdrop,
                screens: &mut screens,
                gameplay: &spawner,
            };
            body(&mut ctx);
        }
        screens
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
