//! Entity footprints and the tiles they touch.

use crate::geom::{Range, Vec2};

/// Axis-aligned box an entity occupies, centered on its position.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Footprint {
    pub center: Vec2,
    pub width: u32,
    pub height: u32,
}

impl Footprint {
    pub fn new(center: Vec2, width: u32, height: u32) -> Self {
        Self {
            center,
            width,
            height,
        }
    }

    /// Square footprint of side `length`.
    pub fn square(center: Vec2, length: u32) -> Self {
        Self::new(center, length, length)
    }

    /// Bounding box as `(left, top, right, bottom)`, right/bottom exclusive.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        let half_w = f64::from(self.width) / 2.0;
        let half_h = f64::from(self.height) / 2.0;
        let cx = f64::from(self.center.x);
        let cy = f64::from(self.center.y);
        (cx - half_w, cy - half_h, cx + half_w, cy + half_h)
    }

    /// Grid cells (column, row) whose `tile_length`-sized tiles overlap the
    /// footprint, assuming tiles are aligned on multiples of `tile_length`.
    ///
    /// Overlap is half-open: a footprint edge lying exactly on a tile border
    /// does not touch the tile beyond it.
    pub fn touched_cells(&self, tile_length: i32) -> Range {
        if tile_length <= 0 {
            return Range::default();
        }
        let l = f64::from(tile_length);
        let (left, top, right, bottom) = self.bounds();
        let x0 = (left / l).floor() as i32;
        let y0 = (top / l).floor() as i32;
        let x1 = (right / l).ceil() as i32;
        let y1 = (bottom / l).ceil() as i32;
        // A zero-sized footprint still stands on the tile under its center.
        // Casts saturate, so far-off centers land on the i32 edges.
        Range::new(
            x0,
            y0,
            x1.max(x0.saturating_add(1)),
            y1.max(y0.saturating_add(1)),
        )
    }
}
