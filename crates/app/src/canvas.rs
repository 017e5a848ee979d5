//! Canvas sizing policy: the logical surface the map is drawn onto.
//!
//! The engine only emits expansion hints; this policy owns the doubling,
//! mirroring the original canvas that doubled its width or height whenever
//! the explorer came within one tile of an edge.

use wander_core::{DEFAULT_VIEWPORT, ExpandDirection, Viewport};

/// Upper bound on drawn tile size, in pixels.
pub const MAX_TILE_SIZE: f32 = 20.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CanvasExtent {
    pub rows: i32,
    pub cols: i32,
}

impl Default for CanvasExtent {
    fn default() -> Self {
        Self { rows: DEFAULT_VIEWPORT.rows, cols: DEFAULT_VIEWPORT.cols }
    }
}

impl CanvasExtent {
    pub fn viewport(&self) -> Viewport {
        Viewport { rows: self.rows, cols: self.cols }
    }

    pub fn expand(&mut self, direction: ExpandDirection) {
        match direction {
            ExpandDirection::East => self.cols *= 2,
            ExpandDirection::South => self.rows *= 2,
        }
    }

    /// Tile size that fits the whole logical extent into the available
    /// screen area, capped so the map does not blow up on a large window.
    pub fn tile_size(&self, available_width: f32, available_height: f32) -> f32 {
        let fit_width = available_width / self.cols as f32;
        let fit_height = available_height / self.rows as f32;
        fit_width.min(fit_height).min(MAX_TILE_SIZE)
    }
}
