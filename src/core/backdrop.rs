//=========================================================================
// Backdrop
//
// Shared full-surface background drawn beneath every screen.
//
// Screens do not own the backdrop; it survives transitions so the
// background never pops while buttons slide. Gameplay dims it, menus
// restore it, and entering the playfield reshuffles it.
//
//=========================================================================

//=== External Crates =====================================================

use log::debug;
use rand::Rng;

//=== Internal Dependencies ===============================================

use crate::core::assets::Sprite;
use crate::core::render::{Canvas, Color, Rect};

//=== Backdrop ============================================================

/// Rotating set of full-surface background sprites with an opacity dial.
pub struct Backdrop {
    sprites: Vec<Sprite>,
    current: usize,
    opacity: f32,
}

impl Default for Backdrop {
    fn default() -> Self {
        Self {
            sprites: Vec::new(),
            current: 0,
            opacity: 1.0,
        }
    }
}

impl Backdrop {
    pub fn new() -> Self {
        Self::default()
    }

    //--- Registration -----------------------------------------------------

    /// Adds a background sprite to the rotation.
    pub fn add_sprite(&mut self, sprite: Sprite) {
        self.sprites.push(sprite);
    }

    //--- Control ----------------------------------------------------------

    /// Picks a random background from the rotation.
    pub fn shuffle(&mut self) {
        if self.sprites.len() > 1 {
            self.current = rand::rng().random_range(0..self.sprites.len());
            debug!(target: "stage", "Backdrop shuffled to index {}", self.current);
        }
    }

    /// Sets the backdrop opacity, clamped to [0, 1].
    pub fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity.clamp(0.0, 1.0);
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    //--- Drawing ----------------------------------------------------------

    /// Fills the surface with the current background.
    ///
    /// With no sprites registered, or a dimmed backdrop, black shows
    /// through underneath.
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.fill_rect(Rect::surface(), Color::BLACK);
        if let Some(sprite) = self.sprites.get(self.current) {
            canvas.draw_sprite_in(sprite, Rect::surface(), self.opacity);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::render::{DrawCommand, TraceCanvas};

    #[test]
    fn empty_backdrop_paints_black() {
        let backdrop = Backdrop::new();
        let mut canvas = TraceCanvas::new();

        backdrop.draw(&mut canvas);

        assert_eq!(canvas.commands().len(), 1);
        assert!(matches!(
            canvas.commands()[0],
            DrawCommand::FillRect { color: Color::BLACK, .. }
        ));
    }

    #[test]
    fn draws_current_sprite_with_opacity() {
        let mut backdrop = Backdrop::new();
        backdrop.add_sprite(Sprite::new(9, 1920.0, 1080.0));
        backdrop.set_opacity(0.5);

        let mut canvas = TraceCanvas::new();
        backdrop.draw(&mut canvas);

        match &canvas.commands()[1] {
            DrawCommand::Sprite { id, opacity, .. } => {
                assert_eq!(*id, 9);
                assert_eq!(*opacity, 0.5);
            }
            other => panic!("expected sprite command, got {:?}", other),
        }
    }

    #[test]
    fn opacity_clamps() {
        let mut backdrop = Backdrop::new();
        backdrop.set_opacity(4.0);
        assert_eq!(backdrop.opacity(), 1.0);
    }

    #[test]
    fn shuffle_stays_in_bounds() {
        let mut backdrop = Backdrop::new();
        for id in 0..4 {
            backdrop.add_sprite(Sprite::new(id, 1.0, 1.0));
        }
        for _ in 0..32 {
            backdrop.shuffle();
            assert!(backdrop.current < 4);
        }
    }
}
