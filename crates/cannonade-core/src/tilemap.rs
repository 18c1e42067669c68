//! Tile maps built from text.
//!
//! A [`TileMap`] parses an ASCII layout, one character per tile, into a
//! row-major list of [`GridTile`]s:
//!
//! ```text
//! 0000
//! 00w0
//! 000w
//! ```
//!
//! `0` or `.` is floor, `w` or `#` is wall. Wall tiles stay in the list and
//! report themselves impassable.

use thiserror::Error;

use crate::geom::{Point, Range};
use crate::tile::{GridTile, TileKind};

/// Errors that can occur when parsing a tile map.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TileMapError {
    #[error("tile map is empty")]
    Empty,
    #[error("tile length must be positive, got {0}")]
    InvalidTileLength(i32),
    #[error("tile map row {row} has {found} tiles, expected {expected}")]
    InconsistentWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("tile map contains invalid rune \u{201c}{ch}\u{201d} at column {}, row {}", .pos.x, .pos.y)]
    InvalidRune { ch: char, pos: Point },
}

/// A rectangular grid of square tiles anchored at the origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileMap {
    tiles: Vec<GridTile>,
    columns: i32,
    rows: i32,
    tile_length: i32,
}

impl TileMap {
    /// Build a map of `columns × rows` floor tiles.
    pub fn open(columns: i32, rows: i32, tile_length: i32) -> Result<Self, TileMapError> {
        if tile_length <= 0 {
            return Err(TileMapError::InvalidTileLength(tile_length));
        }
        if columns <= 0 || rows <= 0 {
            return Err(TileMapError::Empty);
        }
        let tiles = Range::new(0, 0, columns, rows)
            .iter()
            .map(|cell| GridTile::floor(cell.x * tile_length, cell.y * tile_length, tile_length))
            .collect();
        Ok(Self {
            tiles,
            columns,
            rows,
            tile_length,
        })
    }

    /// Parse a layout, one line per row of tiles.
    ///
    /// Leading/trailing whitespace is trimmed from the whole string and from
    /// each line, so layouts can be indented in source code.
    pub fn parse(s: &str, tile_length: i32) -> Result<Self, TileMapError> {
        if tile_length <= 0 {
            return Err(TileMapError::InvalidTileLength(tile_length));
        }
        let s = s.trim();
        if s.is_empty() {
            return Err(TileMapError::Empty);
        }

        let mut tiles = Vec::new();
        let mut width: Option<usize> = None;
        let mut rows = 0;

        for (y, line) in s.lines().map(str::trim).enumerate() {
            let mut x = 0;
            for ch in line.chars() {
                let kind = match ch {
                    '0' | '.' => TileKind::Floor,
                    'w' | '#' => TileKind::Wall,
                    _ => {
                        return Err(TileMapError::InvalidRune {
                            ch,
                            pos: Point::new(x as i32, y as i32),
                        });
                    }
                };
                tiles.push(GridTile::new(
                    x as i32 * tile_length,
                    y as i32 * tile_length,
                    tile_length,
                    tile_length,
                    kind,
                ));
                x += 1;
            }
            match width {
                None => width = Some(x),
                Some(expected) if expected != x => {
                    return Err(TileMapError::InconsistentWidth {
                        row: y,
                        expected,
                        found: x,
                    });
                }
                Some(_) => {}
            }
            rows += 1;
        }

        Ok(Self {
            tiles,
            columns: width.unwrap_or(0) as i32,
            rows,
            tile_length,
        })
    }

    /// All tiles, row-major, walls included.
    pub fn tiles(&self) -> &[GridTile] {
        &self.tiles
    }

    /// Only the passable tiles, row-major.
    pub fn floor_tiles(&self) -> impl Iterator<Item = &GridTile> {
        self.tiles.iter().filter(|t| t.kind() == TileKind::Floor)
    }

    pub fn columns(&self) -> i32 {
        self.columns
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn tile_length(&self) -> i32 {
        self.tile_length
    }

    /// Pixel area covered by the map.
    pub fn area(&self) -> Range {
        Range::with_size(
            0,
            0,
            self.columns * self.tile_length,
            self.rows * self.tile_length,
        )
    }

    /// Tile at grid cell (`column`, `row`), if inside the map.
    pub fn tile_at(&self, cell: Point) -> Option<&GridTile> {
        if !Range::new(0, 0, self.columns, self.rows).contains(cell) {
            return None;
        }
        self.tiles.get((cell.y * self.columns + cell.x) as usize)
    }
}
