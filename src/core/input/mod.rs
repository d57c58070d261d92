//=========================================================================
// Input Snapshot
//
// Per-tick input state for the logic thread.
//
// Platform input arrives asynchronously over the channel; nothing may
// touch screen or widget state from that side. Instead, events are
// parked until the next simulation tick and digested here into a plain
// snapshot: persistent held state plus this-tick deltas. Screens and
// gameplay read the snapshot; only the loop writes it.
//
// Tick lifecycle: begin_tick() → apply(events) → query.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod event;

//=== Standard Library Imports ============================================

use std::collections::HashSet;

//=== Public API ==========================================================

pub use event::{InputEvent, KeyCode, PointerButton};

//=== InputFrame ==========================================================

/// Input snapshot consumed at the start of each simulation tick.
#[derive(Debug, Default)]
pub struct InputFrame {
    //--- Persistent State (survives tick boundary) -----------------------
    pointer: (f32, f32),
    keys_down: HashSet<KeyCode>,
    buttons_down: HashSet<PointerButton>,

    //--- Tick Deltas (reset by begin_tick) -------------------------------
    keys_pressed: Vec<KeyCode>,
    keys_released: Vec<KeyCode>,
    pointer_pressed: bool,
    pointer_released: bool,
}

impl InputFrame {
    pub fn new() -> Self {
        Self::default()
    }

    //--- Tick Processing --------------------------------------------------

    /// Clears the per-tick deltas. Held state persists.
    pub fn begin_tick(&mut self) {
        self.keys_pressed.clear();
        self.keys_released.clear();
        self.pointer_pressed = false;
        self.pointer_released = false;
    }

    /// Digests a batch of platform events into the snapshot.
    pub fn apply(&mut self, events: &[InputEvent]) {
        for event in events {
            match *event {
                InputEvent::KeyDown(key) => {
                    // Key repeat arrives as repeated KeyDown; only a real
                    // up->down transition counts as pressed
                    if self.keys_down.insert(key) {
                        self.keys_pressed.push(key);
                    }
                }
                InputEvent::KeyUp(key) => {
                    if self.keys_down.remove(&key) {
                        self.keys_released.push(key);
                    }
                }
                InputEvent::PointerDown(button) => {
                    if self.buttons_down.insert(button) && button == PointerButton::Primary {
                        self.pointer_pressed = true;
                    }
                }
                InputEvent::PointerUp(button) => {
                    if self.buttons_down.remove(&button) && button == PointerButton::Primary {
                        self.pointer_released = true;
                    }
                }
                InputEvent::PointerMoved { x, y } => {
                    self.pointer = (x, y);
                }
            }
        }
    }

    //--- Query API - Pointer ----------------------------------------------

    /// Pointer position in logical surface coordinates.
    pub fn pointer(&self) -> (f32, f32) {
        self.pointer
    }

    /// `true` if the primary button went down this tick.
    pub fn pointer_pressed(&self) -> bool {
        self.pointer_pressed
    }

    /// `true` if the primary button came up this tick.
    pub fn pointer_released(&self) -> bool {
        self.pointer_released
    }

    /// `true` while the given button is held.
    pub fn is_button_down(&self, button: PointerButton) -> bool {
        self.buttons_down.contains(&button)
    }

    //--- Query API - Keyboard ---------------------------------------------

    /// `true` while the key is held. Use for continuous actions.
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    /// Keys that transitioned up -> down this tick, in arrival order.
    pub fn keys_pressed(&self) -> &[KeyCode] {
        &self.keys_pressed
    }

    /// Keys that transitioned down -> up this tick, in arrival order.
    pub fn keys_released(&self) -> &[KeyCode] {
        &self.keys_released
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
