//=========================================================================
// Cadence Engine
//
// Main entry point and coordinator for the runtime.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run(canvas)──>  [Runtime]
//         │                          │
//         ├─ with_physics_hz()       ├─ init(|systems| …)
//         ├─ with_render_hz()        └─ spawns logic thread,
//         └─ with_channel_capacity()    runs platform, blocks
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{bounded, Receiver, Sender};
use log::{error, info};
use winit::event_loop::EventLoop;

//=== Internal Dependencies ===============================================

use crate::core::assets::AssetLibrary;
use crate::core::audio::{AudioSink, NullAudio};
use crate::core::backdrop::Backdrop;
use crate::core::gameplay::{Gameplay, GameplaySpawner};
use crate::core::render::Canvas;
use crate::core::settings::GameSettings;
use crate::core::stage::{Screen, Stage};
use crate::core::timing::GameLoop;
use crate::core::Runtime;
use crate::platform::{EngineSignal, Platform, PlatformError, PlatformEvent};

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **Physics rate**: 60 Hz (simulation steps per second)
/// - **Render rate**: 60 Hz (render passes per second)
/// - **Channel capacity**: 128 event batches
/// - **Catch-up cap**: 5 simulation steps per tick
/// - **Title**: "Cadence"
///
/// # Examples
///
/// ```no_run
/// use cadence_engine::prelude::*;
///
/// let engine = EngineBuilder::new()
///     .with_physics_hz(120.0)
///     .with_render_hz(60.0)
///     .build();
/// ```
pub struct EngineBuilder {
    physics_hz: f64,
    render_hz: f64,
    channel_capacity: usize,
    max_catchup: u32,
    title: String,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            physics_hz: 60.0,
            render_hz: 60.0,
            channel_capacity: 128,
            max_catchup: 5,
            title: "Cadence".to_owned(),
        }
    }

    /// Sets the simulation step rate.
    ///
    /// # Panics
    ///
    /// Panics if `hz <= 0.0`.
    pub fn with_physics_hz(mut self, hz: f64) -> Self {
        assert!(hz > 0.0, "Physics rate must be positive, got {}", hz);
        self.physics_hz = hz;
        self
    }

    /// Sets the render pass rate.
    ///
    /// # Panics
    ///
    /// Panics if `hz <= 0.0`.
    pub fn with_render_hz(mut self, hz: f64) -> Self {
        assert!(hz > 0.0, "Render rate must be positive, got {}", hz);
        self.render_hz = hz;
        self
    }

    /// Sets the platform → core channel capacity.
    ///
    /// Larger values buffer more during frame spikes; smaller values
    /// reduce latency but may drop events if the logic thread stalls.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Bounds simulation catch-up after a stall.
    ///
    /// # Panics
    ///
    /// Panics if `cap == 0`.
    pub fn with_max_catchup(mut self, cap: u32) -> Self {
        assert!(cap > 0, "Catch-up cap must be at least 1");
        self.max_catchup = cap;
        self
    }

    /// Sets the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Builds the engine instance.
    pub fn build(self) -> Engine {
        info!(
            "Building engine (physics: {} Hz, render: {} Hz, channel: {})",
            self.physics_hz, self.render_hz, self.channel_capacity
        );

        Engine {
            systems: GameSystems::new(),
            physics_hz: self.physics_hz,
            render_hz: self.render_hz,
            channel_capacity: self.channel_capacity,
            max_catchup: self.max_catchup,
            title: self.title,
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== GameSystems =========================================================

/// Mutable view of the engine's collaborators during [`Engine::init`].
///
/// This is where the embedder registers decoded assets, the audio
/// backend, the gameplay factory, backdrop sprites, and the first
/// screen to display.
pub struct GameSystems {
    pub assets: AssetLibrary,
    pub settings: GameSettings,
    pub backdrop: Backdrop,
    audio: Box<dyn AudioSink>,
    spawner: GameplaySpawner,
    initial: Option<Box<dyn Screen>>,
}

impl GameSystems {
    fn new() -> Self {
        Self {
            assets: AssetLibrary::new(),
            settings: GameSettings::new(),
            backdrop: Backdrop::new(),
            audio: Box::new(NullAudio),
            spawner: GameplaySpawner::none(),
            initial: None,
        }
    }

    /// Registers the audio backend (default: a silent sink).
    pub fn set_audio(&mut self, audio: impl AudioSink + 'static) {
        self.audio = Box::new(audio);
    }

    /// Registers the factory that produces a fresh gameplay round each
    /// time the playfield is entered.
    pub fn set_gameplay(&mut self, factory: impl Fn() -> Box<dyn Gameplay> + Send + 'static) {
        self.spawner = GameplaySpawner::new(factory);
    }

    /// Sets the first screen to show. Required before [`Engine::run`].
    pub fn display(&mut self, screen: Box<dyn Screen>) {
        self.initial = Some(screen);
    }
}

//=== Engine ==============================================================

/// Cadence runtime.
///
/// Coordinates the platform event loop (main thread) and the logic
/// thread running screens, transitions, and gameplay at the configured
/// rates.
///
/// # Examples
///
/// ```no_run
/// use cadence_engine::prelude::*;
/// use cadence_engine::screens::WelcomeScreen;
///
/// EngineBuilder::new()
///     .with_title("My Arcade Game")
///     .build()
///     .init(|systems| {
///         // systems.assets.register_sprite(…);
///         let welcome = WelcomeScreen::new(&systems.assets);
///         systems.display(Box::new(welcome));
///     })
///     .run(Box::new(TraceCanvas::new()));
/// ```
pub struct Engine {
    systems: GameSystems,
    physics_hz: f64,
    render_hz: f64,
    channel_capacity: usize,
    max_catchup: u32,
    title: String,
}

impl Engine {
    //--- Initialization ---------------------------------------------------

    /// Initializes engine systems before execution: asset registration,
    /// audio backend, gameplay factory, and the initial screen.
    pub fn init<F>(mut self, init_fn: F) -> Self
    where
        F: FnOnce(&mut GameSystems),
    {
        info!("Initializing engine systems");
        init_fn(&mut self.systems);
        info!(
            "Engine initialization complete ({} sprites registered)",
            self.systems.assets.sprite_count()
        );
        self
    }

    //--- Execution --------------------------------------------------------

    /// Starts the runtime and blocks until the window closes or a
    /// screen requests exit.
    ///
    /// # Lifecycle
    ///
    /// 1. Creates the channel and the Winit event loop
    /// 2. Spawns the logic thread pacing updates and renders
    /// 3. Runs the platform event loop (blocks here)
    /// 4. On exit: channel disconnects → logic thread terminates → join
    ///
    /// # Panics
    ///
    /// Panics if no initial screen was displayed during [`Self::init`].
    pub fn run(mut self, canvas: Box<dyn Canvas + Send>) {
        info!(
            "Starting engine runtime (physics: {} Hz, render: {} Hz)",
            self.physics_hz, self.render_hz
        );

        let initial = self
            .systems
            .initial
            .take()
            .expect("No initial screen: call init() and display one before run()");

        //--- 1. Event loop + communication channel -----------------------
        let event_loop = match EventLoop::<EngineSignal>::with_user_event().build() {
            Ok(event_loop) => event_loop,
            Err(e) => {
                error!("{}", PlatformError::EventLoopCreation(e));
                return;
            }
        };
        let exit_proxy = event_loop.create_proxy();

        let (tx, rx): (Sender<PlatformEvent>, Receiver<PlatformEvent>) =
            bounded(self.channel_capacity);
        info!("Channel created (capacity: {})", self.channel_capacity);

        //--- 2. Spawn the core logic thread -------------------------------
        self.systems.settings.set_render_hz(self.render_hz);

        let mut game_loop = GameLoop::new(self.physics_hz, self.render_hz);
        game_loop.set_max_catchup(self.max_catchup);

        let runtime = Runtime::new(
            Stage::new(initial),
            game_loop,
            self.systems.assets,
            self.systems.audio,
            self.systems.settings,
            self.systems.backdrop,
            self.systems.spawner,
        );

        let core_handle = runtime.spawn_core_thread(
            rx,
            canvas,
            Box::new(move || {
                let _ = exit_proxy.send_event(EngineSignal::Exit);
            }),
        );
        info!("Core logic thread spawned");

        //--- 3. Run the platform subsystem --------------------------------
        let platform = Platform::new(tx, self.title);
        info!("Platform initialized, entering event loop");

        if let Err(e) = platform.run(event_loop) {
            error!("Platform error: {}", e);
        }

        info!("Platform event loop exited");

        //--- 4. Cleanup: wait for the logic thread ------------------------
        match core_handle.join() {
            Ok(()) => {
                info!("Core thread terminated cleanly");
            }
            Err(e) => {
                error!("Core thread panicked: {:?}", e);
            }
        }

        info!("Engine shutdown complete");
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    //=====================================================================
    // EngineBuilder Tests
    //=====================================================================

    #[test]
    fn builder_defaults() {
        let builder = EngineBuilder::new();
        assert_eq!(builder.physics_hz, 60.0);
        assert_eq!(builder.render_hz, 60.0);
        assert_eq!(builder.channel_capacity, 128);
        assert_eq!(builder.max_catchup, 5);
    }

    #[test]
    fn builder_fluent_api_chaining() {
        let engine = EngineBuilder::new()
            .with_physics_hz(120.0)
            .with_render_hz(30.0)
            .with_channel_capacity(256)
            .with_max_catchup(8)
            .with_title("Chained")
            .build();

        assert_eq!(engine.physics_hz, 120.0);
        assert_eq!(engine.render_hz, 30.0);
        assert_eq!(engine.channel_capacity, 256);
        assert_eq!(engine.max_catchup, 8);
        assert_eq!(engine.title, "Chained");
    }

    #[test]
    #[should_panic(expected = "Physics rate must be positive")]
    fn builder_rejects_zero_physics_rate() {
        EngineBuilder::new().with_physics_hz(0.0);
    }

    #[test]
    #[should_panic(expected = "Render rate must be positive")]
    fn builder_rejects_negative_render_rate() {
        EngineBuilder::new().with_render_hz(-60.0);
    }

    #[test]
    #[should_panic(expected = "Channel capacity must be positive")]
    fn builder_rejects_zero_channel_capacity() {
        EngineBuilder::new().with_channel_capacity(0);
    }

    #[test]
    #[should_panic(expected = "Catch-up cap must be at least 1")]
    fn builder_rejects_zero_catchup_cap() {
        EngineBuilder::new().with_max_catchup(0);
    }

    //=====================================================================
    // Engine Tests
    //=====================================================================

    #[test]
    fn init_reaches_the_systems() {
        use crate::core::assets::Sprite;

        let engine = EngineBuilder::new().build().init(|systems| {
            systems.assets.register_sprite("x", Sprite::new(1, 2.0, 3.0));
            systems.set_audio(NullAudio);
            systems.set_gameplay(|| {
                unreachable!("factory is registered, not invoked")
            });
        });

        assert_eq!(engine.systems.assets.sprite_count(), 1);
    }

    #[test]
    fn initial_screen_is_stored() {
        use crate::core::stage::ScreenContent;

        struct Stub(ScreenContent);
        impl Screen for Stub {
            fn content(&self) -> &ScreenContent {
                &self.0
            }
            fn content_mut(&mut self) -> &mut ScreenContent {
                &mut self.0
            }
        }

        let engine = EngineBuilder::new().build().init(|systems| {
            systems.display(Box::new(Stub(ScreenContent::new())));
        });
        assert!(engine.systems.initial.is_some());
    }
}
