//! **cannonade-core**: tile grid and geometry types for Square Cannonade.
//!
//! This crate provides the pieces the pathfinding graph consumes but does not
//! own: geometry primitives, the [`Tile`] abstraction, text-built
//! [`TileMap`]s, and entity [`Footprint`]s.

pub mod footprint;
pub mod geom;
pub mod tile;
pub mod tilemap;

pub use footprint::Footprint;
pub use geom::{Point, Range, Vec2};
pub use tile::{GridTile, Tile, TileKind};
pub use tilemap::{TileMap, TileMapError};
