//=========================================================================
// Input Buffer
//
// Collects and normalizes raw input events between platform frames.
// Acts as a transient aggregator: the window callbacks push here, and
// the whole batch is flushed to the core thread at the next frame
// boundary.
//
// Responsibilities:
// - Store incoming events for the current platform frame
// - Deduplicate repeated discrete inputs (e.g. identical KeyDown)
// - Coalesce continuous inputs (PointerMoved keeps only the latest)
// - Hand the batch over via `drain()`
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::collections::HashSet;

//=== Internal Dependencies ===============================================

use crate::core::input::InputEvent;

//=== InputBuffer =========================================================

/// Transient event store for one platform frame.
///
/// `discrete` keeps order (press/release sequences matter);
/// `continuous` keeps only the latest event of each kind, relying on
/// [`InputEvent`]'s coalescing equality.
pub(crate) struct InputBuffer {
    discrete: Vec<InputEvent>,
    continuous: HashSet<InputEvent>,
}

impl InputBuffer {
    //--- Construction -----------------------------------------------------

    pub fn new() -> Self {
        const DISCRETE_BASE: usize = 64;
        const CONTINUOUS_BASE: usize = 8;

        Self {
            discrete: Vec::with_capacity(DISCRETE_BASE),
            continuous: HashSet::with_capacity(CONTINUOUS_BASE),
        }
    }

    //--- Event Intake -----------------------------------------------------

    /// Appends a discrete input. Identical consecutive events are
    /// ignored to keep auto-repeat floods out of the channel.
    pub fn push_discrete(&mut self, event: InputEvent) {
        if self.discrete.last() != Some(&event) {
            self.discrete.push(event);
        }
    }

    /// Inserts or replaces a continuous input; the latest always wins.
    pub fn push_continuous(&mut self, event: InputEvent) {
        self.continuous.replace(event);
    }

    //--- Drain ------------------------------------------------------------

    /// Takes this frame's batch, discrete first, or `None` if nothing
    /// was buffered (empty batches never cross the channel).
    pub fn drain(&mut self) -> Option<Vec<InputEvent>> {
        if self.is_empty() {
            return None;
        }
        let mut events = std::mem::take(&mut self.discrete);
        events.extend(self.continuous.drain());
        Some(events)
    }

    //--- Utilities --------------------------------------------------------

    pub fn len(&self) -> usize {
        self.discrete.len() + self.continuous.len()
    }

    pub fn is_empty(&self) -> bool {
        self.discrete.is_empty() && self.continuous.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{KeyCode, PointerButton};

    fn key_down(key: KeyCode) -> InputEvent {
        InputEvent::KeyDown(key)
    }

    fn pointer_move(x: f32, y: f32) -> InputEvent {
        InputEvent::PointerMoved { x, y }
    }

    #[test]
    fn consecutive_duplicates_are_dropped() {
        let mut buffer = InputBuffer::new();
        buffer.push_discrete(key_down(KeyCode::KeyA));
        buffer.push_discrete(key_down(KeyCode::KeyA));
        buffer.push_discrete(key_down(KeyCode::KeyB));
        buffer.push_discrete(key_down(KeyCode::KeyA));
        assert_eq!(buffer.len(), 3, "only consecutive duplicates drop");
    }

    #[test]
    fn continuous_keeps_only_the_latest() {
        let mut buffer = InputBuffer::new();
        buffer.push_continuous(pointer_move(10.0, 10.0));
        buffer.push_continuous(pointer_move(20.0, 30.0));

        let events = buffer.drain().expect("buffer had events");
        assert_eq!(events.len(), 1);
        match &events[0] {
            InputEvent::PointerMoved { x, y } => assert_eq!((*x, *y), (20.0, 30.0)),
            other => panic!("expected PointerMoved, got {:?}", other),
        }
    }

    #[test]
    fn drain_orders_discrete_before_continuous() {
        let mut buffer = InputBuffer::new();
        buffer.push_continuous(pointer_move(5.0, 5.0));
        buffer.push_discrete(InputEvent::PointerDown(PointerButton::Primary));

        let events = buffer.drain().expect("buffer had events");
        assert!(matches!(events[0], InputEvent::PointerDown(_)));
        assert!(matches!(events[1], InputEvent::PointerMoved { .. }));
    }

    #[test]
    fn drain_empties_the_buffer() {
        let mut buffer = InputBuffer::new();
        buffer.push_discrete(key_down(KeyCode::Space));
        buffer.push_continuous(pointer_move(1.0, 1.0));

        assert!(buffer.drain().is_some());
        assert!(buffer.is_empty());
        assert!(buffer.drain().is_none(), "empty batches are not produced");
    }

    #[test]
    fn empty_buffer_drains_to_none() {
        let mut buffer = InputBuffer::new();
        assert!(buffer.drain().is_none());
    }
}
