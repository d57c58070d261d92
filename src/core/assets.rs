//=========================================================================
// Asset Library
//
// Symbolic-key resolution for already-decoded assets.
//
// The runtime never parses raw asset bytes. The embedder decodes images
// and sounds with whatever pipeline it likes, then registers the
// resulting handles here under stable string keys. Screens look handles
// up by key when they are built.
//
// Notes:
// Lookups never fail loudly: a missing key is a content bug, not a
// runtime fault, so it is logged and a zero-sized placeholder is
// returned. Canvas implementations skip zero-sized sprites.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::collections::HashMap;

//=== External Crates =====================================================

use log::warn;

//=== Sprite ==============================================================

/// Handle to a decoded drawable image.
///
/// `id` identifies the texture to the embedder's `Canvas` backend; the
/// runtime only uses the logical dimensions for layout and hit testing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub id: u32,
    pub width: f32,
    pub height: f32,
}

impl Sprite {
    /// Placeholder returned for unresolved keys. Zero-sized, never drawn.
    pub const MISSING: Sprite = Sprite {
        id: u32::MAX,
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(id: u32, width: f32, height: f32) -> Self {
        Self { id, width, height }
    }
}

//=== SoundHandle =========================================================

/// Handle to a decoded audio clip, opaque to the runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoundHandle(pub u32);

impl SoundHandle {
    /// Placeholder for unresolved keys; audio sinks ignore it.
    pub const SILENT: SoundHandle = SoundHandle(u32::MAX);
}

//=== FontHandle ==========================================================

/// Handle to a loaded font face, opaque to the runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontHandle(pub u32);

impl FontHandle {
    /// Canvas backends substitute their built-in face for this.
    pub const FALLBACK: FontHandle = FontHandle(0);
}

//=== Asset Keys ==========================================================

/// Keys for the assets the built-in screens expect the embedder to
/// register. Backdrop sprites are registered directly on the
/// [`Backdrop`](crate::core::backdrop::Backdrop) instead.
pub mod keys {
    pub const BUTTON_PLAY: &str = "button/play";
    pub const BUTTON_RESULTS: &str = "button/results";
    pub const BUTTON_EXIT: &str = "button/exit";
    pub const BUTTON_BACK: &str = "button/back";
    pub const BUTTON_RETRY: &str = "button/retry";
    pub const BUTTON_TO_TITLE: &str = "button/to-title";
    pub const BUTTON_START: &str = "button/start";

    pub const BAR_TOP_MENU: &str = "bar/top-menu";
    pub const BAR_BOTTOM_MENU: &str = "bar/bottom-menu";
    pub const BAR_TOP_RESULTS: &str = "bar/top-results";
    pub const BAR_BOTTOM_RESULTS: &str = "bar/bottom-results";

    pub const SFX_CLICK: &str = "sfx/click";
    pub const SFX_CLICK_BACK: &str = "sfx/click-back";
    pub const MUSIC_THEME: &str = "music/theme";

    pub const FONT_HEADING: &str = "font/heading";
}

//=== AssetLibrary ========================================================

/// Registry mapping symbolic keys to decoded asset handles.
#[derive(Default)]
pub struct AssetLibrary {
    sprites: HashMap<String, Sprite>,
    sounds: HashMap<String, SoundHandle>,
    fonts: HashMap<String, FontHandle>,
}

impl AssetLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    //--- Registration -----------------------------------------------------

    /// Registers a sprite under `key`, replacing any previous entry.
    pub fn register_sprite(&mut self, key: impl Into<String>, sprite: Sprite) {
        let key = key.into();
        if self.sprites.insert(key.clone(), sprite).is_some() {
            warn!(target: "assets", "Sprite key {:?} re-registered", key);
        }
    }

    /// Registers a sound under `key`, replacing any previous entry.
    pub fn register_sound(&mut self, key: impl Into<String>, sound: SoundHandle) {
        let key = key.into();
        if self.sounds.insert(key.clone(), sound).is_some() {
            warn!(target: "assets", "Sound key {:?} re-registered", key);
        }
    }

    /// Registers a font under `key`, replacing any previous entry.
    pub fn register_font(&mut self, key: impl Into<String>, font: FontHandle) {
        let key = key.into();
        if self.fonts.insert(key.clone(), font).is_some() {
            warn!(target: "assets", "Font key {:?} re-registered", key);
        }
    }

    //--- Resolution -------------------------------------------------------

    /// Resolves a sprite key, or a zero-sized placeholder if unknown.
    pub fn sprite(&self, key: &str) -> Sprite {
        match self.sprites.get(key) {
            Some(sprite) => *sprite,
            None => {
                warn!(target: "assets", "Unresolved sprite key {:?}", key);
                Sprite::MISSING
            }
        }
    }

    /// Resolves a sound key, or a silent placeholder if unknown.
    pub fn sound(&self, key: &str) -> SoundHandle {
        match self.sounds.get(key) {
            Some(sound) => *sound,
            None => {
                warn!(target: "assets", "Unresolved sound key {:?}", key);
                SoundHandle::SILENT
            }
        }
    }

    /// Resolves a font key, or the backend fallback face if unknown.
    pub fn font(&self, key: &str) -> FontHandle {
        match self.fonts.get(key) {
            Some(font) => *font,
            None => {
                warn!(target: "assets", "Unresolved font key {:?}", key);
                FontHandle::FALLBACK
            }
        }
    }

    pub fn sprite_count(&self) -> usize {
        self.sprites.len()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
