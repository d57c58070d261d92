//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use cadence_engine::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine facade
pub use crate::engine::{Engine, EngineBuilder, GameSystems};

// Stage system
pub use crate::core::stage::{
    FrameContext, Screen, ScreenContent, ScreenRequests, TransitionScreen, TransitionStyle,
};

// Widgets
pub use crate::core::widget::{AnimatedComponent, AnimationType, Button, Pose};

// Timing
pub use crate::core::timing::{FrameTimer, GameLoop};

// Input
pub use crate::core::input::{InputFrame, KeyCode, PointerButton};

// Rendering
pub use crate::core::render::{
    Canvas, Color, CursorIcon, Rect, TraceCanvas, LOGICAL_HEIGHT, LOGICAL_WIDTH,
};

// Collaborator seams
pub use crate::core::assets::{AssetLibrary, FontHandle, SoundHandle, Sprite};
pub use crate::core::audio::{AudioSink, NullAudio};
pub use crate::core::backdrop::Backdrop;
pub use crate::core::gameplay::{GameMode, Gameplay, GameplaySpawner, Outcome};
pub use crate::core::settings::GameSettings;
