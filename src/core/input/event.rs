//=========================================================================
// Input Event Types
//
// Engine-internal representation of low-level input, decoupled from the
// windowing backend. The platform layer converts its native events into
// these before they cross the channel to the logic thread.
//
// Responsibilities:
// - Represent keyboard and pointer input in a stable, portable way
// - Carry pointer coordinates already mapped to logical surface space
// - Provide equality/hashing semantics that let the platform buffer
//   coalesce continuous events (one PointerMoved per frame, last wins)
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::hash::{Hash, Hasher};

//=== PointerButton =======================================================

/// Pointer (mouse/touch) button identifier.
///
/// `Primary` is the button that presses UI buttons; everything the
/// runtime's click protocol cares about happens on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Primary button (typically left mouse / single touch).
    Primary,

    /// Secondary button (typically right mouse).
    Secondary,

    /// Middle button (wheel click).
    Middle,

    /// Side/thumb/macro buttons.
    Other,
}

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Represents the physical key location, not the produced character, so
/// bindings survive layout changes (QWERTY vs AZERTY).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Numeric Keys -----------------------------------------------------

    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    //--- Alphabetic Keys --------------------------------------------------

    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Arrow Keys -------------------------------------------------------

    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Special Keys -----------------------------------------------------

    Space,
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,

    /// Fallback for keys the platform layer does not map.
    Unidentified,
}

//=== InputEvent ==========================================================

/// One normalized input event from the platform layer.
///
/// Pointer coordinates are logical-surface coordinates (1920x1080
/// space); the platform applies viewport scaling before events are
/// buffered.
///
/// # Equality & Hashing
///
/// Discrete events compare by type and payload. `PointerMoved` events
/// compare equal regardless of coordinates so the platform buffer can
/// keep only the freshest position per frame.
#[derive(Debug, Clone)]
pub enum InputEvent {
    /// Key pressed down.
    KeyDown(KeyCode),

    /// Key released.
    KeyUp(KeyCode),

    /// Pointer button pressed.
    PointerDown(PointerButton),

    /// Pointer button released.
    PointerUp(PointerButton),

    /// Pointer moved, in logical coordinates.
    PointerMoved { x: f32, y: f32 },
}

impl PartialEq for InputEvent {
    fn eq(&self, other: &Self) -> bool {
        use InputEvent::*;
        match (self, other) {
            (KeyDown(a), KeyDown(b)) => a == b,
            (KeyUp(a), KeyUp(b)) => a == b,
            (PointerDown(a), PointerDown(b)) => a == b,
            (PointerUp(a), PointerUp(b)) => a == b,
            (PointerMoved { .. }, PointerMoved { .. }) => true,
            _ => false,
        }
    }
}

impl Eq for InputEvent {}

impl Hash for InputEvent {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Coalescing key: event type plus discrete payload, never the
        // pointer coordinates.
        std::mem::discriminant(self).hash(state);
        match self {
            InputEvent::KeyDown(key) | InputEvent::KeyUp(key) => key.hash(state),
            InputEvent::PointerDown(button) | InputEvent::PointerUp(button) => {
                button.hash(state)
            }
            InputEvent::PointerMoved { .. } => {}
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashSet;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn discrete_events_compare_by_payload() {
        assert_eq!(
            InputEvent::KeyDown(KeyCode::KeyA),
            InputEvent::KeyDown(KeyCode::KeyA)
        );
        assert_ne!(
            InputEvent::KeyDown(KeyCode::KeyA),
            InputEvent::KeyDown(KeyCode::KeyB)
        );
        assert_ne!(
            InputEvent::KeyDown(KeyCode::KeyA),
            InputEvent::KeyUp(KeyCode::KeyA)
        );
    }

    #[test]
    fn pointer_moves_are_equal_regardless_of_position() {
        let a = InputEvent::PointerMoved { x: 1.0, y: 2.0 };
        let b = InputEvent::PointerMoved { x: 300.0, y: 400.0 };
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn pointer_moves_coalesce_in_a_set() {
        let mut set = HashSet::new();
        set.insert(InputEvent::PointerMoved { x: 1.0, y: 1.0 });
        set.replace(InputEvent::PointerMoved { x: 9.0, y: 9.0 });

        assert_eq!(set.len(), 1);
        match set.iter().next() {
            Some(InputEvent::PointerMoved { x, y }) => assert_eq!((*x, *y), (9.0, 9.0)),
            other => panic!("expected PointerMoved, got {:?}", other),
        }
    }

    #[test]
    fn different_buttons_do_not_coalesce() {
        let mut set = HashSet::new();
        set.insert(InputEvent::PointerDown(PointerButton::Primary));
        set.insert(InputEvent::PointerDown(PointerButton::Secondary));
        assert_eq!(set.len(), 2);
    }
}
