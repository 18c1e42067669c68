//! Start and end regions of a search, taken from entity footprints.
//!
//! An entity bigger than a tile, or one straddling tile borders, stands on
//! several tiles at once. Every one of them is a valid place to start (or
//! finish) a path, so regions are sets of vertices rather than single ones.

use cannonade_core::{Footprint, Tile, Vec2};

use crate::PathGraph;

impl<'a, T: Tile> PathGraph<'a, T> {
    /// Vertices whose tiles the footprint overlaps, row-major.
    pub fn touched_vertices(&self, footprint: Footprint) -> Vec<usize> {
        if self.vertices.is_empty() {
            return Vec::new();
        }
        let l = self.tile_length;
        footprint
            .touched_cells(l)
            .intersect(self.cells)
            .iter()
            .filter_map(|cell| self.lookup_vertex(cell * l))
            .collect()
    }

    /// Replace the start region with the tiles touched by an entity centered
    /// at `center` with the given size.
    pub fn set_search_start(&mut self, center: Vec2, width: u32, height: u32) {
        self.set_search_start_footprint(Footprint::new(center, width, height));
    }

    /// [`set_search_start`](Self::set_search_start) for a square entity.
    pub fn set_search_start_square(&mut self, center: Vec2, length: u32) {
        self.set_search_start_footprint(Footprint::square(center, length));
    }

    /// Replace the start region with the tiles `footprint` touches.
    pub fn set_search_start_footprint(&mut self, footprint: Footprint) {
        self.start = self.touched_vertices(footprint);
        log::trace!("search start {:?} -> vertices {:?}", footprint, self.start);
    }

    /// Replace the end region with the tiles touched by an entity centered
    /// at `center` with the given size.
    pub fn set_search_end(&mut self, center: Vec2, width: u32, height: u32) {
        self.set_search_end_footprint(Footprint::new(center, width, height));
    }

    /// [`set_search_end`](Self::set_search_end) for a square entity.
    pub fn set_search_end_square(&mut self, center: Vec2, length: u32) {
        self.set_search_end_footprint(Footprint::square(center, length));
    }

    /// Replace the end region with the tiles `footprint` touches.
    pub fn set_search_end_footprint(&mut self, footprint: Footprint) {
        self.end = self.touched_vertices(footprint);
        log::trace!("search end {:?} -> vertices {:?}", footprint, self.end);
    }

    pub fn search_start(&self) -> &[usize] {
        &self.start
    }

    pub fn search_end(&self) -> &[usize] {
        &self.end
    }
}
