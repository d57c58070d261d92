//=========================================================================
// Core Runtime
//
// Central coordinator for everything running on the logic (non-platform)
// thread.
//
// Responsibilities:
// - Own the stage, the input snapshot, and the shared collaborators
// - Receive platform events via the channel and park them until the
//   next simulation tick
// - Pace simulation and rendering through the GameLoop accumulators
// - Drive the per-tick phases: input dispatch → updates → render,
//   applying queued screen switches at each phase boundary
//
// Notes:
// The runtime runs independently from the platform layer and owns every
// piece of mutable screen/loop state. Communication with the platform
// is message passing only: input batches in, one exit signal out. No
// input handler ever mutates screen state directly — events become
// snapshot flags consumed at the start of the next simulation update.
//
//=========================================================================

//=== Public Modules ======================================================

pub mod assets;
pub mod audio;
pub mod backdrop;
pub mod gameplay;
pub mod input;
pub mod render;
pub mod settings;
pub mod stage;
pub mod timing;
pub mod widget;

//=== Standard Library Imports ============================================

use std::thread;
use std::time::{Duration, Instant};

//=== External Crates =====================================================

use crossbeam_channel::{Receiver, RecvTimeoutError};
use log::info;

//=== Internal Dependencies ===============================================

use crate::platform::PlatformEvent;
use assets::AssetLibrary;
use audio::AudioSink;
use backdrop::Backdrop;
use gameplay::GameplaySpawner;
use input::{InputEvent, InputFrame, KeyCode};
use render::Canvas;
use settings::GameSettings;
use stage::{FrameContext, ScreenRequests, Stage};
use timing::GameLoop;

//=== Constants ===========================================================

/// Upper bound on one channel wait, so the loop re-checks pacing even
/// while the platform is quiet.
const MAX_EVENT_WAIT: Duration = Duration::from_millis(4);

//=== TickControl =========================================================

// Control flow for the core loop: each event-collection round either
// continues or ends the thread.
pub(crate) enum TickControl {
    Continue,
    Exit,
}

//=== Runtime =============================================================

/// Owns all logic-thread state and drives the engine loop.
pub(crate) struct Runtime {
    stage: Stage,
    input: InputFrame,
    game_loop: GameLoop,
    assets: AssetLibrary,
    audio: Box<dyn AudioSink>,
    settings: GameSettings,
    backdrop: Backdrop,
    spawner: GameplaySpawner,
    requests: ScreenRequests,

    /// Platform events parked until the next simulation tick.
    pending_events: Vec<InputEvent>,
}

impl Runtime {
    //--- Construction -----------------------------------------------------

    pub fn new(
        stage: Stage,
        game_loop: GameLoop,
        assets: AssetLibrary,
        audio: Box<dyn AudioSink>,
        settings: GameSettings,
        backdrop: Backdrop,
        spawner: GameplaySpawner,
    ) -> Self {
        Self {
            stage,
            input: InputFrame::new(),
            game_loop,
            assets,
            audio,
            settings,
            backdrop,
            spawner,
            requests: ScreenRequests::new(),
            pending_events: Vec::with_capacity(64),
        }
    }

    //--- spawn_core_thread() ---------------------------------------------
    //
    // Spawns the logic thread. `on_exit` fires if a screen requests
    // shutdown (the platform side turns it into an event-loop exit);
    // a closed channel ends the thread without firing it.
    //
    pub fn spawn_core_thread(
        self,
        receiver: Receiver<PlatformEvent>,
        canvas: Box<dyn Canvas + Send>,
        on_exit: Box<dyn FnOnce() + Send>,
    ) -> thread::JoinHandle<()> {
        thread::spawn(move || self.run(receiver, canvas, on_exit))
    }

    fn run(
        mut self,
        receiver: Receiver<PlatformEvent>,
        mut canvas: Box<dyn Canvas + Send>,
        on_exit: Box<dyn FnOnce() + Send>,
    ) {
        info!(target: "runtime", "Core thread running");

        loop {
            //--- Step 1: Gather platform events --------------------------
            let wait = self.game_loop.time_until_next_step().min(MAX_EVENT_WAIT);
            if let TickControl::Exit =
                Self::collect_platform_events(&receiver, &mut self.pending_events, wait)
            {
                info!(target: "runtime", "Platform gone; core thread exiting");
                return;
            }

            //--- Step 2: Pay out owed work -------------------------------
            let tick = self.game_loop.tick(Instant::now());
            let mut exit = false;

            if tick.updates > 0 {
                self.consume_pending_input();
                exit |= self.dispatch_input_phase();
                for _ in 0..tick.updates {
                    exit |= self.update_phase();
                }
                self.apply_settings();
            }

            if tick.render {
                exit |= self.render_phase(canvas.as_mut());
            }

            if exit {
                info!(target: "runtime", "Exit requested by a screen");
                on_exit();
                return;
            }
        }
    }

    //--- collect_platform_events() ---------------------------------------
    //
    // Blocks up to `wait` for the first event, then drains whatever else
    // is queued. Parked events are consumed by the next simulation tick.
    //
    fn collect_platform_events(
        receiver: &Receiver<PlatformEvent>,
        pending: &mut Vec<InputEvent>,
        wait: Duration,
    ) -> TickControl {
        match receiver.recv_timeout(wait) {
            Ok(PlatformEvent::Inputs(batch)) => pending.extend(batch),
            Ok(PlatformEvent::WindowClosed) => return TickControl::Exit,
            Err(RecvTimeoutError::Disconnected) => return TickControl::Exit,
            Err(RecvTimeoutError::Timeout) => {}
        }

        while let Ok(event) = receiver.try_recv() {
            match event {
                PlatformEvent::Inputs(batch) => pending.extend(batch),
                PlatformEvent::WindowClosed => return TickControl::Exit,
            }
        }

        TickControl::Continue
    }

    //--- Tick Phases ------------------------------------------------------

    /// Digests parked platform events into the snapshot.
    fn consume_pending_input(&mut self) {
        self.input.begin_tick();
        self.input.apply(&self.pending_events);
        self.pending_events.clear();
    }

    /// Forwards this tick's input transitions to the active screen.
    fn dispatch_input_phase(&mut self) -> bool {
        let pressed = self.input.pointer_pressed();
        let released = self.input.pointer_released();
        let keys_pressed: Vec<KeyCode> = self.input.keys_pressed().to_vec();
        let keys_released: Vec<KeyCode> = self.input.keys_released().to_vec();

        {
            let Self { stage, input, assets, audio, settings, backdrop, spawner, requests, .. } =
                self;
            let screen = stage.current_mut();
            let mut ctx = FrameContext {
                input,
                assets,
                audio: audio.as_mut(),
                settings,
                backdrop,
                screens: requests,
                gameplay: spawner,
            };

            if pressed {
                screen.pointer_pressed(&mut ctx);
            }
            if released {
                screen.pointer_released(&mut ctx);
            }
            for key in keys_pressed {
                screen.key_pressed(&mut ctx, key);
            }
            for key in keys_released {
                screen.key_released(&mut ctx, key);
            }
        }

        self.stage.apply_requests(&mut self.requests)
    }

    /// One simulation step of the active screen.
    fn update_phase(&mut self) -> bool {
        {
            let Self { stage, input, assets, audio, settings, backdrop, spawner, requests, .. } =
                self;
            let screen = stage.current_mut();
            let mut ctx = FrameContext {
                input,
                assets,
                audio: audio.as_mut(),
                settings,
                backdrop,
                screens: requests,
                gameplay: spawner,
            };
            screen.update(&mut ctx);
        }

        self.stage.apply_requests(&mut self.requests)
    }

    /// One render pass of the active screen.
    fn render_phase(&mut self, canvas: &mut dyn Canvas) -> bool {
        {
            let Self { stage, input, assets, audio, settings, backdrop, spawner, requests, .. } =
                self;
            let screen = stage.current_mut();
            let mut ctx = FrameContext {
                input,
                assets,
                audio: audio.as_mut(),
                settings,
                backdrop,
                screens: requests,
                gameplay: spawner,
            };
            screen.draw(&mut ctx, canvas);
        }
        canvas.present();

        self.stage.apply_requests(&mut self.requests)
    }

    /// Pushes dirty settings into the loop and the audio sink.
    fn apply_settings(&mut self) {
        if self.settings.take_dirty() {
            self.settings.apply_audio(self.audio.as_mut());
            self.game_loop.set_render_hz(self.settings.render_hz());
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
