//=========================================================================
// Gameplay Collaborator
//
// Seam between the runtime and the actual game rules. The runtime knows
// nothing about pieces, collision, or scoring: it steps the collaborator
// once per simulation tick and asks it to paint itself into a sub-region
// of the playfield screen.
//
// Notes:
// `render_into` must be a pure read of gameplay state. The presentation
// path may run while an update is not in progress, and the two must
// never race through this trait.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::InputFrame;
use crate::core::render::{Canvas, Rect};

//=== GameMode ============================================================

/// Scoring mode a finished round was played under. Determines how the
/// results screen formats the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Timed round; score is the number of lines cleared.
    Blitz,
    /// Race to a fixed line count; score is the elapsed milliseconds.
    FortyLines,
}

//=== Outcome =============================================================

/// Terminal result of a round, reported once the rules decide the game
/// is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub mode: GameMode,
    pub score: i64,
}

//=== Gameplay ============================================================

/// One round of the externally-implemented game rules.
pub trait Gameplay: Send {
    /// Advances the simulation by exactly one step.
    ///
    /// Receives the tick's input snapshot (read-only). Recoverable rule
    /// conditions must be absorbed here, never panicked on.
    fn update(&mut self, input: &InputFrame);

    /// Draws the current state into `region` of the logical surface.
    ///
    /// Pure read: must not mutate gameplay state.
    fn render_into(&self, canvas: &mut dyn Canvas, region: Rect);

    /// Reports the final result once the round has ended.
    ///
    /// Returning `Some` tells the hosting screen to move on to the
    /// results screen. Default: the round never ends on its own.
    fn outcome(&self) -> Option<Outcome> {
        None
    }
}

//=== GameplaySpawner =====================================================

/// Factory producing a fresh round each time the player enters (or
/// retries) the playfield.
pub struct GameplaySpawner(Box<dyn Fn() -> Box<dyn Gameplay> + Send>);

impl GameplaySpawner {
    pub fn new(factory: impl Fn() -> Box<dyn Gameplay> + Send + 'static) -> Self {
        Self(Box::new(factory))
    }

    /// Spawner producing inert rounds; placeholder until the embedder
    /// registers real rules.
    pub fn none() -> Self {
        Self::new(|| Box::new(IdleGameplay))
    }

    pub fn spawn(&self) -> Box<dyn Gameplay> {
        (self.0)()
    }
}

//=== IdleGameplay ========================================================

/// Rules object that does nothing. Keeps the playfield screen valid
/// when no gameplay factory was registered.
struct IdleGameplay;

impl Gameplay for IdleGameplay {
    fn update(&mut self, _input: &InputFrame) {}

    fn render_into(&self, _canvas: &mut dyn Canvas, _region: Rect) {}
}

//=========================================================================
// Unit Tests
//=========================================================================
