use cannonade_core::{Point, Range};
use thiserror::Error;

use crate::weights::EdgeWeights;

/// Reasons a tile list cannot be turned into a [`PathGraph`](crate::PathGraph).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("edge weights must satisfy 0 < nondiagonal < diagonal, got {0:?}")]
    InvalidWeights(EdgeWeights),
    #[error("tile {rect} is not a square of side {tile_length}")]
    IrregularTile { rect: Range, tile_length: i32 },
    #[error("tile at {position} is not aligned on a {tile_length}-pixel grid")]
    MisalignedTile { position: Point, tile_length: i32 },
    #[error("more than one passable tile at {0}")]
    DuplicateTile(Point),
}

/// Reasons a search or a path reconstruction cannot produce a result.
///
/// All of these are caller mistakes: the search regions must be set from
/// footprints that touch passable tiles, and a path must exist between them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("search start region touches no passable tile")]
    EmptyStart,
    #[error("search end region touches no passable tile")]
    EmptyEnd,
    #[error("no path connects the start region to the end region")]
    NoPath,
    #[error("vertex {0} does not exist")]
    UnknownVertex(usize),
    #[error("vertex {0} was not reached by the last search")]
    Unreached(usize),
}
