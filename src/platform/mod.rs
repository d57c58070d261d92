//=========================================================================
// Platform Subsystem
//
// Bridges Winit (OS-level events) with the engine's core thread via the
// channel.
//
// Architecture:
// ```text
//  Main Thread:                     Logic Thread:
//  ┌──────────────────────────┐    ┌──────────────────┐
//  │  Winit Event Loop        │    │  Runtime         │
//  │   ↓                      │    │                  │
//  │  InputProcessor          │    │  InputFrame      │
//  │   ├─ Converts Winit      │    │  ↓               │
//  │   └─ Maps to logical     │    │  Stage / Screens │
//  │      coordinates         │    │  ↓               │
//  │   ↓                      │    │  GameLoop pacing │
//  │  InputBuffer             │    └──────────────────┘
//  │   ↓ (flush)              │       ↑           │
//  │  Channel ────────────────┼───────┘           │
//  │  EventLoopProxy ◄────────┼───────────────────┘
//  └──────────────────────────┘    exit signal
//
//  Frame Boundary: RedrawRequested
//    → All buffered input sent atomically
//    → Core consumes at its own tick rate (independent of refresh rate)
//    → Empty buffers NOT sent
// ```
//
// Key Design Decisions:
// - **RedrawRequested = frame boundary**: batches all input atomically,
//   keeping event order deterministic even at high event rates
// - **Logical coordinates at the boundary**: pointer positions are
//   mapped through the viewport before crossing the channel; the core
//   never sees physical pixels
// - **Graceful channel disconnect**: if the core thread dies, the
//   platform logs and keeps running so the user can close the window
// - **Main thread requirement**: Winit mandates the main thread on
//   macOS/iOS, so this runs on the thread that called `Engine::run()`
//
//=========================================================================

//=== Submodules ==========================================================

mod input_buffer;
mod input_processor;
mod viewport;

//=== External Crates =====================================================

use crossbeam_channel::Sender;
use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes},
};

//=== Internal Imports ====================================================

use crate::core::input::InputEvent;
use crate::core::render::{LOGICAL_HEIGHT, LOGICAL_WIDTH};
use input_buffer::InputBuffer;
use input_processor::InputProcessor;

//=== PlatformEvent =======================================================

/// Events sent from the platform layer to the core thread. The only
/// messages that cross that boundary.
#[derive(Debug, Clone)]
pub(crate) enum PlatformEvent {
    /// Batched input events for one platform frame, discrete first.
    /// Pointer coordinates are already logical. Empty batches are
    /// never sent.
    Inputs(Vec<InputEvent>),

    /// Window close requested by the user or the OS. The core thread
    /// terminates cleanly upon receiving this.
    WindowClosed,
}

//=== EngineSignal ========================================================

/// User events injected into the Winit loop from the core thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EngineSignal {
    /// A screen requested shutdown; exit the event loop.
    Exit,
}

//=== PlatformError =======================================================

/// Platform initialization and runtime errors. Typically fatal: without
/// an event loop the engine cannot run.
#[derive(Debug)]
pub(crate) enum PlatformError {
    /// Failed to create the event loop (rare, OS-level issue).
    EventLoopCreation(winit::error::EventLoopError),

    /// Event loop execution error (rare, indicates corruption).
    EventLoopExecution(winit::error::EventLoopError),
}

//--- Trait Implementations -----------------------------------------------

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EventLoopCreation(e) => write!(f, "Event loop creation failed: {}", e),
            Self::EventLoopExecution(e) => write!(f, "Event loop error: {}", e),
        }
    }
}

impl std::error::Error for PlatformError {}

//=== Platform ============================================================

/// Window manager and input event aggregator.
///
/// Runs on the main thread (Winit requirement on macOS/iOS) and sends
/// batched events to the core thread over the channel. The reverse
/// direction is a single user event: [`EngineSignal::Exit`].
///
/// # Lifecycle
///
/// 1. **Construction**: `Platform::new(sender, title)`
/// 2. **Execution**: `platform.run(event_loop)` (blocks)
/// 3. **Event processing**: Winit calls `ApplicationHandler` methods
/// 4. **Shutdown**: window close or engine exit signal → loop exits
pub(crate) struct Platform {
    /// OS window handle (None until `resumed()` is called).
    window: Option<Window>,

    /// Buffers input until the next frame boundary.
    buffer: InputBuffer,

    /// Channel to the core thread.
    event_sender: Sender<PlatformEvent>,

    /// Converts Winit events to engine InputEvents.
    input_processor: InputProcessor,

    /// Window title.
    title: String,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    /// Creates a platform instance. The window itself is created lazily
    /// in `resumed()`.
    pub fn new(event_sender: Sender<PlatformEvent>, title: impl Into<String>) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            window: None,
            buffer: InputBuffer::new(),
            event_sender,
            input_processor: InputProcessor::new(),
            title: title.into(),
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the event loop until window close or an engine exit signal.
    ///
    /// # Panics
    ///
    /// Panics if called off the main thread (macOS/iOS Winit
    /// requirement).
    pub fn run(mut self, event_loop: EventLoop<EngineSignal>) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting Winit event loop");
        event_loop
            .run_app(&mut self)
            .map_err(PlatformError::EventLoopExecution)
    }

    //--- Internal Helpers -------------------------------------------------

    /// Flushes buffered input to the core thread.
    ///
    /// If the channel is disconnected (core thread exited early), logs
    /// and drops the events: the platform must keep running so the user
    /// can still close the window.
    fn flush_input_buffer(&mut self) {
        if let Some(events) = self.buffer.drain() {
            let count = events.len();
            trace!(target: "platform::input", "Flushing {} event(s)", count);

            if self.event_sender.send(PlatformEvent::Inputs(events)).is_err() {
                warn!(
                    target: "platform::input",
                    "Channel disconnected, dropping {} event(s)",
                    count
                );
            }
        }
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler<EngineSignal> for Platform {
    /// Called when the app becomes active (startup or mobile resume).
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title(self.title.clone())
            .with_inner_size(LogicalSize::new(
                LOGICAL_WIDTH as f64 * 2.0 / 3.0,
                LOGICAL_HEIGHT as f64 * 2.0 / 3.0,
            ));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                let size = window.inner_size();
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    size.width,
                    size.height,
                    window.scale_factor()
                );
                self.input_processor.set_window_size(size.width, size.height);
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                // Notify core of fatal error
                let _ = self.event_sender.send(PlatformEvent::WindowClosed);
                event_loop.exit();
            }
        }
    }

    /// Handles per-window events.
    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        match &event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                let _ = self.event_sender.send(PlatformEvent::WindowClosed);
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                self.input_processor.set_window_size(size.width, size.height);
            }

            WindowEvent::CursorMoved { position, .. } => {
                let event = self
                    .input_processor
                    .process_cursor_moved(position.x, position.y);
                self.buffer.push_continuous(event);
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                if let Some(event) = self.input_processor.process_key_event(key_event) {
                    self.buffer.push_discrete(event);
                } else {
                    trace!(target: "platform::input", "Unmapped key ignored");
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let event = self.input_processor.process_pointer_button(*button, *state);
                self.buffer.push_discrete(event);
            }

            WindowEvent::RedrawRequested => {
                // Frame boundary: flush all buffered input
                self.flush_input_buffer();

                // Request the next frame
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {
                // Ignore: Focused, Moved, etc. (not needed for input)
            }
        }
    }

    /// Handles signals injected from the core thread.
    fn user_event(&mut self, event_loop: &ActiveEventLoop, event: EngineSignal) {
        match event {
            EngineSignal::Exit => {
                info!(target: "platform", "Engine exit signal received");
                event_loop.exit();
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::KeyCode;
    use crossbeam_channel::unbounded;

    //=====================================================================
    // PlatformEvent Tests
    //=====================================================================

    #[test]
    fn platform_event_is_cloneable_and_debug() {
        let event = PlatformEvent::Inputs(vec![InputEvent::KeyDown(KeyCode::Space)]);
        let cloned = event.clone();
        assert!(format!("{:?}", cloned).contains("Inputs"));

        let closed = PlatformEvent::WindowClosed;
        assert!(format!("{:?}", closed.clone()).contains("WindowClosed"));
    }

    //=====================================================================
    // Platform Tests
    //=====================================================================

    #[test]
    fn platform_creation_defers_the_window() {
        let (tx, _rx) = unbounded();
        let platform = Platform::new(tx, "Test");
        assert!(platform.window().is_none(), "window should be created lazily");
    }

    #[test]
    fn flush_empty_buffer_is_noop() {
        let (tx, rx) = unbounded();
        let mut platform = Platform::new(tx, "Test");

        platform.flush_input_buffer();

        assert!(rx.try_recv().is_err(), "no events should be sent for an empty buffer");
    }

    #[test]
    fn flush_sends_buffered_events() {
        let (tx, rx) = unbounded();
        let mut platform = Platform::new(tx, "Test");

        platform.buffer.push_discrete(InputEvent::KeyDown(KeyCode::Space));
        platform.flush_input_buffer();

        match rx.try_recv() {
            Ok(PlatformEvent::Inputs(events)) => assert_eq!(events.len(), 1),
            other => panic!("Expected Inputs event, got {:?}", other),
        }
    }

    #[test]
    fn flush_handles_disconnected_channel() {
        let (tx, rx) = unbounded();
        let mut platform = Platform::new(tx, "Test");

        platform.buffer.push_discrete(InputEvent::KeyDown(KeyCode::Space));
        drop(rx);

        // Must not panic, just log
        platform.flush_input_buffer();
    }

    #[test]
    fn multiple_flushes_clear_buffer() {
        let (tx, rx) = unbounded();
        let mut platform = Platform::new(tx, "Test");

        platform.buffer.push_discrete(InputEvent::KeyDown(KeyCode::KeyA));
        platform.flush_input_buffer();
        platform.flush_input_buffer(); // second flush is a no-op

        assert!(rx.try_recv().is_ok(), "first flush should send");
        assert!(rx.try_recv().is_err(), "second flush should not send");
    }

    //=====================================================================
    // PlatformError Tests
    //=====================================================================

    #[test]
    fn platform_error_implements_error_traits() {
        fn assert_error<T: std::error::Error + std::fmt::Display>() {}
        assert_error::<PlatformError>();
    }
}
