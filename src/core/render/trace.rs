//=========================================================================
// Trace Canvas
//
// Headless `Canvas` implementation that records draw commands instead of
// rasterizing them. Used by the unit tests to assert draw order and by
// embedders that want a windowless smoke-test of their screens.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::assets::{FontHandle, Sprite};
use super::{Canvas, Color, CursorIcon, Rect};

//=== DrawCommand =========================================================

/// One recorded canvas operation, in submission order.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        rect: Rect,
        color: Color,
    },
    Sprite {
        id: u32,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        opacity: f32,
    },
    Text {
        text: String,
        font: FontHandle,
        x: f32,
        y: f32,
        size: f32,
        color: Color,
    },
    Cursor(CursorIcon),
    Present,
}

//=== TraceCanvas =========================================================

/// Records every canvas call into a command list.
#[derive(Default)]
pub struct TraceCanvas {
    commands: Vec<DrawCommand>,
}

impl TraceCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded commands since construction or the last [`Self::take`].
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drains and returns the recorded commands.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Number of `present` calls recorded so far.
    pub fn present_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Present))
            .count()
    }

    /// Last cursor style requested, if any.
    pub fn last_cursor(&self) -> Option<CursorIcon> {
        self.commands.iter().rev().find_map(|c| match c {
            DrawCommand::Cursor(icon) => Some(*icon),
            _ => None,
        })
    }
}

impl Canvas for TraceCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn draw_sprite(&mut self, sprite: &Sprite, x: f32, y: f32, opacity: f32) {
        self.commands.push(DrawCommand::Sprite {
            id: sprite.id,
            x,
            y,
            width: sprite.width,
            height: sprite.height,
            opacity,
        });
    }

    fn draw_sprite_in(&mut self, sprite: &Sprite, region: Rect, opacity: f32) {
        self.commands.push(DrawCommand::Sprite {
            id: sprite.id,
            x: region.x,
            y: region.y,
            width: region.width,
            height: region.height,
            opacity,
        });
    }

    fn draw_text(&mut self, text: &str, font: FontHandle, x: f32, y: f32, size: f32, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            font,
            x,
            y,
            size,
            color,
        });
    }

    fn set_cursor(&mut self, icon: CursorIcon) {
        self.commands.push(DrawCommand::Cursor(icon));
    }

    fn present(&mut self) {
        self.commands.push(DrawCommand::Present);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
