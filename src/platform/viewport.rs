//=========================================================================
// Viewport
//
// Maps physical window coordinates to the 1920x1080 logical surface.
//
// The logical surface is scaled uniformly to fit the window; whatever
// the aspect ratio mismatch leaves over becomes letterbox padding,
// split evenly per axis. Pointer events are mapped through the inverse
// of that transform before they reach the core, so the core never sees
// physical pixels.
//
//=========================================================================

//=== External Crates =====================================================

use log::warn;

//=== Internal Dependencies ===============================================

use crate::core::render::{LOGICAL_HEIGHT, LOGICAL_WIDTH};

//=== Viewport ============================================================

/// Physical-to-logical coordinate transform for one window size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Viewport {
    /// Physical pixels per logical unit.
    scale: f64,

    /// Letterbox padding, physical pixels.
    pad_x: f64,
    pad_y: f64,
}

impl Default for Viewport {
    /// Identity transform (window exactly 1920x1080).
    fn default() -> Self {
        Self { scale: 1.0, pad_x: 0.0, pad_y: 0.0 }
    }
}

impl Viewport {
    /// Computes the transform for a physical window size.
    ///
    /// A degenerate (zero-area) size keeps the identity transform; the
    /// window manager reports those transiently while minimizing.
    pub fn from_physical(width: u32, height: u32) -> Self {
        if width == 0 || height == 0 {
            warn!(target: "platform", "Degenerate window size {}x{}", width, height);
            return Self::default();
        }

        let scale_x = width as f64 / LOGICAL_WIDTH as f64;
        let scale_y = height as f64 / LOGICAL_HEIGHT as f64;
        let scale = scale_x.min(scale_y);

        Self {
            scale,
            pad_x: (width as f64 - LOGICAL_WIDTH as f64 * scale) / 2.0,
            pad_y: (height as f64 - LOGICAL_HEIGHT as f64 * scale) / 2.0,
        }
    }

    /// Maps a physical window position into logical surface space.
    ///
    /// Positions over the letterbox map outside [0, 1920)x[0, 1080);
    /// hit testing then simply misses, which is the intended behavior.
    pub fn to_logical(&self, x: f64, y: f64) -> (f32, f32) {
        (
            ((x - self.pad_x) / self.scale) as f32,
            ((y - self.pad_y) / self.scale) as f32,
        )
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_surface_size_is_identity() {
        let viewport = Viewport::from_physical(1920, 1080);
        assert_eq!(viewport.to_logical(0.0, 0.0), (0.0, 0.0));
        assert_eq!(viewport.to_logical(960.0, 540.0), (960.0, 540.0));
    }

    #[test]
    fn integer_upscale_divides_back() {
        let viewport = Viewport::from_physical(3840, 2160);
        assert_eq!(viewport.to_logical(3840.0, 2160.0), (1920.0, 1080.0));
        assert_eq!(viewport.to_logical(192.0, 108.0), (96.0, 54.0));
    }

    #[test]
    fn ultrawide_letterboxes_horizontally() {
        // 2560x1080: scale 1.0, 320px side bars
        let viewport = Viewport::from_physical(2560, 1080);
        assert_eq!(viewport.to_logical(320.0, 0.0), (0.0, 0.0));
        assert_eq!(viewport.to_logical(2240.0, 1080.0), (1920.0, 1080.0));

        // Over the left letterbox: negative logical x
        let (x, _) = viewport.to_logical(0.0, 0.0);
        assert!(x < 0.0);
    }

    #[test]
    fn tall_window_letterboxes_vertically() {
        // 1920x1380: scale 1.0, 150px top/bottom bars
        let viewport = Viewport::from_physical(1920, 1380);
        assert_eq!(viewport.to_logical(0.0, 150.0), (0.0, 0.0));
        assert_eq!(viewport.to_logical(1920.0, 1230.0), (1920.0, 1080.0));
    }

    #[test]
    fn degenerate_size_falls_back_to_identity() {
        let viewport = Viewport::from_physical(0, 720);
        assert_eq!(viewport, Viewport::default());
    }

    #[test]
    fn fractional_scale_round_trips_center() {
        let viewport = Viewport::from_physical(1280, 720);
        let (x, y) = viewport.to_logical(640.0, 360.0);
        assert!((x - 960.0).abs() < 0.01);
        assert!((y - 540.0).abs() < 0.01);
    }
}
