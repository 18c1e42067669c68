//! Tile abstraction consumed by the pathfinding graph.
//!
//! The [`Tile`] trait lets any game tile type (drawable or not) feed the
//! graph, as long as it can report its rectangle on the pixel grid.

use crate::geom::{Point, Range};

/// A square cell of the playing field.
///
/// Tiles never move: the graph built from a slice of tiles borrows them for
/// its whole lifetime and assumes their rectangles stay fixed.
pub trait Tile {
    /// Pixel rectangle covered by the tile.
    fn rect(&self) -> Range;

    /// Whether entities can stand on the tile. Impassable tiles produce no
    /// graph vertex, exactly as if they were left out of the input.
    fn is_passable(&self) -> bool {
        true
    }

    /// Top-left corner of the tile.
    fn position(&self) -> Point {
        self.rect().min
    }
}

impl<T: Tile + ?Sized> Tile for &T {
    fn rect(&self) -> Range {
        (**self).rect()
    }

    fn is_passable(&self) -> bool {
        (**self).is_passable()
    }
}

/// What occupies a [`GridTile`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TileKind {
    #[default]
    Floor,
    Wall,
}

/// Plain tile with a rectangle and a kind.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridTile {
    rect: Range,
    kind: TileKind,
}

impl GridTile {
    /// Create a tile at (`left`, `top`) with the given size.
    pub fn new(left: i32, top: i32, width: i32, height: i32, kind: TileKind) -> Self {
        Self {
            rect: Range::with_size(left, top, width, height),
            kind,
        }
    }

    /// Create a square floor tile.
    pub fn floor(left: i32, top: i32, length: i32) -> Self {
        Self::new(left, top, length, length, TileKind::Floor)
    }

    /// Create a square wall tile.
    pub fn wall(left: i32, top: i32, length: i32) -> Self {
        Self::new(left, top, length, length, TileKind::Wall)
    }

    pub fn kind(&self) -> TileKind {
        self.kind
    }
}

impl Tile for GridTile {
    fn rect(&self) -> Range {
        self.rect
    }

    fn is_passable(&self) -> bool {
        self.kind == TileKind::Floor
    }
}
