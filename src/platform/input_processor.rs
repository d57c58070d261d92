//=========================================================================
// Input Processor
//=========================================================================
//
// Converts platform-specific Winit events into engine InputEvents.
//
// Architecture:
//   Winit Events → InputProcessor → InputEvent → InputBuffer
//
// Carries the current viewport transform so pointer positions cross the
// channel already in logical surface coordinates. Unmapped keys
// (F13-F24, exotic keyboards) are filtered (returns None).
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;
use winit::{
    event::ElementState,
    event::{KeyEvent, MouseButton as WinitMouseButton},
    keyboard::{KeyCode as WinitKeyCode, PhysicalKey},
};

//=== Internal Dependencies ===============================================

use crate::core::input::{InputEvent, KeyCode, PointerButton};
use super::viewport::Viewport;

//=== InputProcessor ======================================================

/// Converts Winit events to engine InputEvents, mapping pointer
/// positions through the current viewport.
pub(crate) struct InputProcessor {
    viewport: Viewport,
}

impl InputProcessor {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new() -> Self {
        Self { viewport: Viewport::default() }
    }

    //--- Viewport Tracking ------------------------------------------------

    /// Recomputes the transform for a new physical window size.
    pub(crate) fn set_window_size(&mut self, width: u32, height: u32) {
        self.viewport = Viewport::from_physical(width, height);
        debug!(target: "platform", "Viewport updated for {}x{}", width, height);
    }

    //--- Event Processing -------------------------------------------------

    /// Converts a Winit key event (filters unmapped keys).
    pub(crate) fn process_key_event(&self, key_event: &KeyEvent) -> Option<InputEvent> {
        let key_code = match key_event.physical_key {
            PhysicalKey::Code(code) => KeyCode::from(code),
            _ => return None,
        };

        if matches!(key_code, KeyCode::Unidentified) {
            return None;
        }

        Some(match key_event.state {
            ElementState::Pressed => InputEvent::KeyDown(key_code),
            ElementState::Released => InputEvent::KeyUp(key_code),
        })
    }

    /// Converts a Winit mouse button event.
    pub(crate) fn process_pointer_button(
        &self,
        button: WinitMouseButton,
        state: ElementState,
    ) -> InputEvent {
        let button = PointerButton::from(button);
        match state {
            ElementState::Pressed => InputEvent::PointerDown(button),
            ElementState::Released => InputEvent::PointerUp(button),
        }
    }

    /// Converts a cursor move, physical window space → logical space.
    pub(crate) fn process_cursor_moved(&self, x: f64, y: f64) -> InputEvent {
        let (x, y) = self.viewport.to_logical(x, y);
        InputEvent::PointerMoved { x, y }
    }
}

//=========================================================================
// Winit Conversions
//=========================================================================

/// Converts Winit physical key codes to engine key codes.
///
/// Maps A-Z, 0-9, arrows, and common special keys. Unmapped keys
/// (F13-F24, numpad, media keys) return `KeyCode::Unidentified`.
impl From<WinitKeyCode> for KeyCode {
    fn from(code: WinitKeyCode) -> Self {
        use WinitKeyCode::*;
        match code {
            //--- Digits -------------------------------------------------------

            Digit0 => KeyCode::Digit0,
            Digit1 => KeyCode::Digit1,
            Digit2 => KeyCode::Digit2,
            Digit3 => KeyCode::Digit3,
            Digit4 => KeyCode::Digit4,
            Digit5 => KeyCode::Digit5,
            Digit6 => KeyCode::Digit6,
            Digit7 => KeyCode::Digit7,
            Digit8 => KeyCode::Digit8,
            Digit9 => KeyCode::Digit9,

            //--- Letters ------------------------------------------------------

            KeyA => KeyCode::KeyA,
            KeyB => KeyCode::KeyB,
            KeyC => KeyCode::KeyC,
            KeyD => KeyCode::KeyD,
            KeyE => KeyCode::KeyE,
            KeyF => KeyCode::KeyF,
            KeyG => KeyCode::KeyG,
            KeyH => KeyCode::KeyH,
            KeyI => KeyCode::KeyI,
            KeyJ => KeyCode::KeyJ,
            KeyK => KeyCode::KeyK,
            KeyL => KeyCode::KeyL,
            KeyM => KeyCode::KeyM,
            KeyN => KeyCode::KeyN,
            KeyO => KeyCode::KeyO,
            KeyP => KeyCode::KeyP,
            KeyQ => KeyCode::KeyQ,
            KeyR => KeyCode::KeyR,
            KeyS => KeyCode::KeyS,
            KeyT => KeyCode::KeyT,
            KeyU => KeyCode::KeyU,
            KeyV => KeyCode::KeyV,
            KeyW => KeyCode::KeyW,
            KeyX => KeyCode::KeyX,
            KeyY => KeyCode::KeyY,
            KeyZ => KeyCode::KeyZ,

            //--- Arrows -------------------------------------------------------

            ArrowUp => KeyCode::ArrowUp,
            ArrowDown => KeyCode::ArrowDown,
            ArrowLeft => KeyCode::ArrowLeft,
            ArrowRight => KeyCode::ArrowRight,

            //--- Special ------------------------------------------------------

            Space => KeyCode::Space,
            Enter => KeyCode::Enter,
            Escape => KeyCode::Escape,
            Tab => KeyCode::Tab,
            Backspace => KeyCode::Backspace,
            Delete => KeyCode::Delete,

            //--- Unmapped (return Unidentified) -------------------------------

            _ => KeyCode::Unidentified,
        }
    }
}

/// Converts Winit mouse buttons to engine pointer buttons.
impl From<WinitMouseButton> for PointerButton {
    fn from(button: WinitMouseButton) -> Self {
        match button {
            WinitMouseButton::Left => PointerButton::Primary,
            WinitMouseButton::Right => PointerButton::Secondary,
            WinitMouseButton::Middle => PointerButton::Middle,
            _ => PointerButton::Other,
        }
    }
}

//=========================================================================
// Tests
//=========================================================================
