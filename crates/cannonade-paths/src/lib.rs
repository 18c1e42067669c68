//! Tile-graph pathfinding for Square Cannonade.
//!
//! [`PathGraph`] turns a list of square tiles into an immutable adjacency
//! graph (8-way, without diagonal steps that would clip a wall corner) and
//! runs weighted A* searches on it:
//!
//! 1. Build the graph once per level with [`PathGraph::new`].
//! 2. Before each search, set the start and end regions from entity
//!    footprints ([`PathGraph::set_search_start`], [`PathGraph::set_search_end`]).
//!    An entity touching several tiles gives a region of several vertices.
//! 3. Run [`PathGraph::perform_astar_search`] and turn the reached vertex into
//!    a path with [`PathGraph::generate_path`] (or do both with
//!    [`PathGraph::find_path`]).
//!
//! Vertices are addressed by index: the position of their tile among the
//! passable tiles of the input.
//!
//! ```
//! use cannonade_core::{TileMap, Vec2};
//! use cannonade_paths::PathGraph;
//!
//! let map = TileMap::parse("000", 10).unwrap();
//! let mut graph = PathGraph::new(map.tiles()).unwrap();
//! graph.set_search_start_square(Vec2::new(5.0, 5.0), 5);
//! graph.set_search_end_square(Vec2::new(25.0, 5.0), 5);
//! let end = graph.perform_astar_search().unwrap();
//! assert_eq!(graph.generate_path(end).unwrap(), vec![0, 1, 2]);
//! ```

mod astar;
mod error;
mod graph;
mod path;
mod region;
mod table;
mod weights;

pub use error::{GraphError, SearchError};
pub use graph::{PathGraph, ResolutionStatus, SearchNode, UNREACHABLE, Vertex};
pub use table::AstarTable;
pub use weights::EdgeWeights;
