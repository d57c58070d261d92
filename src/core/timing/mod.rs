//=========================================================================
// Timing
//
// Time-domain primitives for the runtime:
// - `FrameTimer`: countdown/progress primitive behind every animation
// - `GameLoop`: fixed-update / variable-render accumulator pacing
//
//=========================================================================

//=== Submodules ==========================================================

mod frame_timer;
mod game_loop;

//=== Public API ==========================================================

pub use frame_timer::FrameTimer;
pub use game_loop::{GameLoop, Tick};
