//=========================================================================
// Cadence Engine — Library Root
//
// This crate defines the public API surface of the Cadence runtime: a
// screen-driven arcade game engine with decoupled simulation and render
// pacing.
//
// Responsibilities:
// - Expose the engine facade (`Engine`/`EngineBuilder`) and the core
//   building blocks (screens, widgets, timing, render/asset/audio
//   collaborator seams)
// - Keep OS integration (`platform`) hidden from end users
//
// Typical usage:
// ```no_run
// use cadence_engine::prelude::*;
// use cadence_engine::screens::WelcomeScreen;
//
// EngineBuilder::new()
//     .build()
//     .init(|systems| {
//         let welcome = WelcomeScreen::new(&systems.assets);
//         systems.display(Box::new(welcome));
//     })
//     .run(Box::new(TraceCanvas::new()));
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` contains the runtime systems (timing, input, widgets, stage,
// collaborator seams). `screens` holds the built-in menu/gameplay/
// results screens assembled from those parts.
//
pub mod core;
pub mod screens;

//--- Internal Modules ----------------------------------------------------
//
// `platform` contains OS-specific logic (window, Winit integration,
// event pumping) and is kept private: it is not part of the public API
// surface.
//
// `engine` defines the main engine entry point and initialization.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub mod prelude;

pub use engine::{Engine, EngineBuilder, GameSystems};
