use std::collections::HashMap;
use std::fmt;

use cannonade_core::{Point, Range, Tile};

use crate::error::GraphError;
use crate::weights::EdgeWeights;

/// Sentinel movement cost meaning "not reached yet".
pub const UNREACHABLE: i32 = i32::MAX;

/// Offsets (in tiles) probed for straight neighbors: up, right, down, left.
const NONDIAGONAL_OFFSETS: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

/// Offsets (in tiles) probed for diagonal neighbors, clockwise from up-right.
const DIAGONAL_OFFSETS: [(i32, i32); 4] = [(1, -1), (1, 1), (-1, 1), (-1, -1)];

// ---------------------------------------------------------------------------
// Vertex
// ---------------------------------------------------------------------------

/// One passable tile and the vertices reachable from it in one step.
///
/// Adjacency is stored as vertex indices. Straight and diagonal neighbors
/// are also kept apart so the search can charge the matching edge weight.
#[derive(Debug, Clone)]
pub struct Vertex<'a, T> {
    tile: &'a T,
    adjacent: Vec<usize>,
    nondiagonal: Vec<usize>,
    diagonal: Vec<usize>,
}

impl<'a, T: Tile> Vertex<'a, T> {
    fn new(tile: &'a T) -> Self {
        Self {
            tile,
            adjacent: Vec::with_capacity(8),
            nondiagonal: Vec::with_capacity(4),
            diagonal: Vec::with_capacity(4),
        }
    }

    /// The tile this vertex stands for.
    pub fn tile(&self) -> &'a T {
        self.tile
    }

    /// Top-left corner of the tile.
    #[inline]
    pub fn position(&self) -> Point {
        self.tile.rect().min
    }

    #[inline]
    pub fn rect(&self) -> Range {
        self.tile.rect()
    }

    /// Every neighbor, in the order the edges were created.
    pub fn adjacent(&self) -> &[usize] {
        &self.adjacent
    }

    /// Neighbors one straight step away.
    pub fn nondiagonal(&self) -> &[usize] {
        &self.nondiagonal
    }

    /// Neighbors one diagonal step away.
    pub fn diagonal(&self) -> &[usize] {
        &self.diagonal
    }
}

// ---------------------------------------------------------------------------
// Per-search state
// ---------------------------------------------------------------------------

/// Progress of a vertex through an A* search.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResolutionStatus {
    /// Not interacted with yet.
    #[default]
    Untouched,
    /// Neighbor of at least one resolved vertex (the "open" set).
    CouldResolve,
    /// Best path to this vertex is known (the "closed" set).
    Resolved,
}

impl fmt::Display for ResolutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Untouched => "untouched",
            Self::CouldResolve => "could resolve",
            Self::Resolved => "resolved",
        })
    }
}

/// A* bookkeeping for one vertex, rebuilt by every search.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchNode {
    /// Vertex before this one on the best known path.
    pub previous: Option<usize>,
    /// Cost of the best known path from a start vertex.
    pub movement_cost: i32,
    /// `movement_cost` plus the estimate to the nearest end vertex.
    pub estimated_cost: i32,
    pub status: ResolutionStatus,
}

impl Default for SearchNode {
    fn default() -> Self {
        Self {
            previous: None,
            movement_cost: UNREACHABLE,
            estimated_cost: UNREACHABLE,
            status: ResolutionStatus::Untouched,
        }
    }
}

// ---------------------------------------------------------------------------
// PathGraph
// ---------------------------------------------------------------------------

/// Immutable adjacency graph over a tile grid, plus the scratch state of the
/// most recent A* search.
///
/// Tiles are borrowed for the graph's lifetime and assumed never to move.
/// The topology is fixed at construction; searches only rewrite the
/// per-vertex [`SearchNode`]s and the start/end/unresolved sets.
pub struct PathGraph<'a, T> {
    pub(crate) vertices: Vec<Vertex<'a, T>>,
    pub(crate) index: HashMap<Point, usize>,
    pub(crate) tile_length: i32,
    // bounding box of the vertices, in cells
    pub(crate) cells: Range,
    pub(crate) weights: EdgeWeights,
    nondiagonal_edges: usize,
    diagonal_edges: usize,
    // A* state
    pub(crate) nodes: Vec<SearchNode>,
    pub(crate) start: Vec<usize>,
    pub(crate) end: Vec<usize>,
    pub(crate) unresolved: Vec<usize>,
    // scratch buffer for neighbor expansion: (vertex, is_diagonal)
    pub(crate) steps: Vec<(usize, bool)>,
}

impl<'a, T: Tile> PathGraph<'a, T> {
    /// Build the graph with the default [`EdgeWeights`].
    ///
    /// Impassable tiles are skipped; vertex indices count passable tiles in
    /// input order.
    pub fn new(tiles: &'a [T]) -> Result<Self, GraphError> {
        Self::with_weights(tiles, EdgeWeights::default())
    }

    /// Build the graph with custom edge weights.
    pub fn with_weights(tiles: &'a [T], weights: EdgeWeights) -> Result<Self, GraphError> {
        if !weights.is_valid() {
            return Err(GraphError::InvalidWeights(weights));
        }

        let mut graph = Self {
            vertices: Vec::new(),
            index: HashMap::new(),
            tile_length: 0,
            cells: Range::default(),
            weights,
            nondiagonal_edges: 0,
            diagonal_edges: 0,
            nodes: Vec::new(),
            start: Vec::new(),
            end: Vec::new(),
            unresolved: Vec::new(),
            steps: Vec::with_capacity(8),
        };
        graph.create_vertices(tiles)?;
        graph.create_edges();

        log::debug!(
            "path graph: {} vertices, {} edges ({} diagonal), tile length {}",
            graph.vertex_count(),
            graph.edge_count(),
            graph.diagonal_edges,
            graph.tile_length
        );
        Ok(graph)
    }

    fn create_vertices(&mut self, tiles: &'a [T]) -> Result<(), GraphError> {
        for tile in tiles.iter().filter(|t| t.is_passable()) {
            let rect = tile.rect();
            if self.vertices.is_empty() {
                self.tile_length = rect.width();
            }
            let l = self.tile_length;
            if l <= 0 || rect.width() != l || rect.height() != l {
                return Err(GraphError::IrregularTile {
                    rect,
                    tile_length: l,
                });
            }
            if rect.min.x.rem_euclid(l) != 0 || rect.min.y.rem_euclid(l) != 0 {
                return Err(GraphError::MisalignedTile {
                    position: rect.min,
                    tile_length: l,
                });
            }
            let idx = self.vertices.len();
            if self.index.insert(rect.min, idx).is_some() {
                return Err(GraphError::DuplicateTile(rect.min));
            }
            self.vertices.push(Vertex::new(tile));
        }
        self.cells = self.cell_extent();
        Ok(())
    }

    fn cell_extent(&self) -> Range {
        let l = self.tile_length;
        let mut cells = self.vertices.iter().map(|v| v.position() / l);
        let Some(first) = cells.next() else {
            return Range::default();
        };
        let (min, max) = cells.fold((first, first), |(min, max), c| {
            (
                Point::new(min.x.min(c.x), min.y.min(c.y)),
                Point::new(max.x.max(c.x), max.y.max(c.y)),
            )
        });
        Range::new(min.x, min.y, max.x + 1, max.y + 1)
    }

    /// All straight edges first, then diagonal edges, so the corner rule
    /// only depends on which vertices exist.
    fn create_edges(&mut self) {
        for v in 0..self.vertices.len() {
            self.create_nondiagonal_edges(v);
        }
        for v in 0..self.vertices.len() {
            self.create_diagonal_edges(v);
        }
    }

    fn create_nondiagonal_edges(&mut self, v: usize) {
        let pos = self.vertices[v].position();
        let l = self.tile_length;
        for (dx, dy) in NONDIAGONAL_OFFSETS {
            let Some(&n) = self.index.get(&pos.shift(dx * l, dy * l)) else {
                continue;
            };
            if self.vertices[v].nondiagonal.contains(&n) {
                continue;
            }
            self.link(v, n, false);
        }
    }

    fn create_diagonal_edges(&mut self, v: usize) {
        let pos = self.vertices[v].position();
        let l = self.tile_length;
        for (dx, dy) in DIAGONAL_OFFSETS {
            let Some(&n) = self.index.get(&pos.shift(dx * l, dy * l)) else {
                continue;
            };
            if self.vertices[v].diagonal.contains(&n) {
                continue;
            }
            // Both tiles flanking the step must be passable, or the entity
            // would clip a wall corner.
            let corners = [pos.shift(dx * l, 0), pos.shift(0, dy * l)];
            if !corners.iter().all(|c| self.index.contains_key(c)) {
                continue;
            }
            self.link(v, n, true);
        }
    }

    fn link(&mut self, a: usize, b: usize, diagonal: bool) {
        for (from, to) in [(a, b), (b, a)] {
            let vertex = &mut self.vertices[from];
            vertex.adjacent.push(to);
            if diagonal {
                vertex.diagonal.push(to);
            } else {
                vertex.nondiagonal.push(to);
            }
        }
        if diagonal {
            self.diagonal_edges += 1;
        } else {
            self.nondiagonal_edges += 1;
        }
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of undirected edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.nondiagonal_edges + self.diagonal_edges
    }

    #[inline]
    pub fn nondiagonal_edge_count(&self) -> usize {
        self.nondiagonal_edges
    }

    #[inline]
    pub fn diagonal_edge_count(&self) -> usize {
        self.diagonal_edges
    }

    /// Side of every tile in the graph, or 0 for an empty graph.
    #[inline]
    pub fn tile_length(&self) -> i32 {
        self.tile_length
    }

    #[inline]
    pub fn weights(&self) -> EdgeWeights {
        self.weights
    }

    /// Index of the vertex whose tile has its top-left corner at `position`.
    #[inline]
    pub fn lookup_vertex(&self, position: Point) -> Option<usize> {
        self.index.get(&position).copied()
    }

    #[inline]
    pub fn vertex(&self, idx: usize) -> Option<&Vertex<'a, T>> {
        self.vertices.get(idx)
    }

    pub fn vertices(&self) -> &[Vertex<'a, T>] {
        &self.vertices
    }

    /// A* state of a vertex after the last search.
    ///
    /// Returns `None` for an unknown index or before the first search.
    #[inline]
    pub fn search_node(&self, idx: usize) -> Option<&SearchNode> {
        self.nodes.get(idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cannonade_core::{GridTile, TileMap};

    fn map(s: &str) -> TileMap {
        TileMap::parse(s, 10).unwrap()
    }

    fn assert_well_formed<T: Tile>(g: &PathGraph<'_, T>) {
        for (i, v) in g.vertices().iter().enumerate() {
            assert_eq!(v.adjacent().len(), v.nondiagonal().len() + v.diagonal().len());
            for &n in v.nondiagonal() {
                assert!(!v.diagonal().contains(&n), "{i}-{n} is both kinds");
                assert!(g.vertices()[n].nondiagonal().contains(&i));
            }
            for &n in v.diagonal() {
                assert!(g.vertices()[n].diagonal().contains(&i));
            }
        }
        let degree: usize = g.vertices().iter().map(|v| v.adjacent().len()).sum();
        assert_eq!(degree, 2 * g.edge_count());
    }

    #[test]
    fn vertex_count_open_map() {
        let m = TileMap::open(4, 3, 10).unwrap();
        let g = PathGraph::new(m.tiles()).unwrap();
        assert_eq!(g.vertex_count(), 12);
    }

    #[test]
    fn walls_do_not_become_vertices() {
        let m = map("0000\n00w0\n000w");
        let g = PathGraph::new(m.tiles()).unwrap();
        assert_eq!(g.vertex_count(), 10);
        assert_eq!(g.lookup_vertex(Point::new(20, 10)), None);
        // Index 6 skips the wall at (20, 10).
        assert_eq!(g.vertex(6).unwrap().position(), Point::new(30, 10));
    }

    #[test]
    fn walls_left_out_of_input_behave_like_flagged_walls() {
        let m = map("0000\n00w0\n000w");
        let floors: Vec<GridTile> = m.floor_tiles().copied().collect();
        let a = PathGraph::new(m.tiles()).unwrap();
        let b = PathGraph::new(&floors).unwrap();
        assert_eq!(a.vertex_count(), b.vertex_count());
        assert_eq!(a.edge_count(), b.edge_count());
    }

    #[test]
    fn lookup_vertex_by_position() {
        let m = TileMap::open(2, 1, 10).unwrap();
        let g = PathGraph::new(m.tiles()).unwrap();
        let v = g.lookup_vertex(Point::new(10, 0)).unwrap();
        assert_eq!(g.vertex(v).unwrap().rect(), Range::with_size(10, 0, 10, 10));

        let m = TileMap::open(2, 2, 10).unwrap();
        let g = PathGraph::new(m.tiles()).unwrap();
        let v = g.lookup_vertex(Point::new(10, 10)).unwrap();
        assert_eq!(g.vertex(v).unwrap().position(), Point::new(10, 10));
        assert_eq!(g.lookup_vertex(Point::new(20, 0)), None);
        // Only exact top-left corners match.
        assert_eq!(g.lookup_vertex(Point::new(5, 0)), None);
    }

    #[test]
    fn edge_counts() {
        let cases = [
            ("00", 1),
            ("00\n00", 6),
            ("00\n0w", 2),
            ("000\n000", 11),
            ("0000\n00w0\n000w", 15),
            ("000\n00w\nw00", 9),
            ("w0\n0w", 0),
        ];
        for (layout, edges) in cases {
            let m = map(layout);
            let g = PathGraph::new(m.tiles()).unwrap();
            assert_eq!(g.edge_count(), edges, "layout:\n{layout}");
            assert_well_formed(&g);
        }
    }

    #[test]
    fn open_grid_edge_count_closed_form() {
        for (w, h) in [(1, 1), (1, 5), (4, 3), (7, 7), (10, 2)] {
            let m = TileMap::open(w, h, 10).unwrap();
            let g = PathGraph::new(m.tiles()).unwrap();
            let (w, h) = (w as usize, h as usize);
            let straight = (w - 1) * h + w * (h - 1);
            let diagonal = 2 * (w - 1) * (h - 1);
            assert_eq!(g.nondiagonal_edge_count(), straight);
            assert_eq!(g.diagonal_edge_count(), diagonal);
            assert_eq!(g.edge_count(), straight + diagonal);
        }
    }

    #[test]
    fn corner_cutting_diagonal_excluded() {
        let m = map("00\n0w");
        let g = PathGraph::new(m.tiles()).unwrap();
        assert_eq!(g.diagonal_edge_count(), 0);
        // (10, 0) and (0, 10) are diagonal to each other but the corner at
        // (10, 10) is a wall.
        let a = g.lookup_vertex(Point::new(10, 0)).unwrap();
        let b = g.lookup_vertex(Point::new(0, 10)).unwrap();
        assert!(!g.vertex(a).unwrap().adjacent().contains(&b));
    }

    #[test]
    fn removing_a_tile_drops_its_edges_and_blocked_diagonals() {
        let open = TileMap::open(3, 3, 10).unwrap();
        let holed = map("000\n0w0\n000");
        let g_open = PathGraph::new(open.tiles()).unwrap();
        let g_holed = PathGraph::new(holed.tiles()).unwrap();
        assert_eq!(g_open.vertex_count() - g_holed.vertex_count(), 1);
        // The center has 8 incident edges; all 4 diagonals between the outer
        // ring tiles now cut the center wall's corner.
        assert_eq!(g_open.edge_count(), 20);
        assert_eq!(g_holed.edge_count(), 20 - 8 - 4);
        assert_eq!(g_holed.diagonal_edge_count(), 0);
        assert_well_formed(&g_holed);
    }

    #[test]
    fn isolated_tile_has_no_edges() {
        let m = map("w0w\nw0w\nwww");
        let g = PathGraph::new(m.tiles()).unwrap();
        assert_eq!(g.edge_count(), 1);
        let m = map("www\nw0w\nwww");
        let g = PathGraph::new(m.tiles()).unwrap();
        assert_eq!(g.vertex_count(), 1);
        assert_eq!(g.edge_count(), 0);
        assert!(g.vertex(0).unwrap().adjacent().is_empty());
    }

    #[test]
    fn empty_input() {
        let m = map("ww\nww");
        let g = PathGraph::new(m.tiles()).unwrap();
        assert!(g.is_empty());
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.tile_length(), 0);
    }

    #[test]
    fn irregular_tile_rejected() {
        let tiles = [GridTile::floor(0, 0, 10), GridTile::floor(10, 0, 20)];
        assert!(matches!(
            PathGraph::new(&tiles),
            Err(GraphError::IrregularTile { tile_length: 10, .. })
        ));
        let tiles = [GridTile::new(0, 0, 10, 5, cannonade_core::TileKind::Floor)];
        assert!(PathGraph::new(&tiles).is_err());
    }

    #[test]
    fn misaligned_tile_rejected() {
        let tiles = [GridTile::floor(0, 0, 10), GridTile::floor(15, 0, 10)];
        assert_eq!(
            PathGraph::new(&tiles).err(),
            Some(GraphError::MisalignedTile {
                position: Point::new(15, 0),
                tile_length: 10
            })
        );
    }

    #[test]
    fn duplicate_tile_rejected() {
        let tiles = [GridTile::floor(10, 0, 10), GridTile::floor(10, 0, 10)];
        assert_eq!(
            PathGraph::new(&tiles).err(),
            Some(GraphError::DuplicateTile(Point::new(10, 0)))
        );
    }

    #[test]
    fn invalid_weights_rejected() {
        let m = TileMap::open(2, 2, 10).unwrap();
        let bad = EdgeWeights::new(14, 10);
        assert_eq!(
            PathGraph::with_weights(m.tiles(), bad).err(),
            Some(GraphError::InvalidWeights(bad))
        );
    }

    #[test]
    fn negative_coordinates_are_aligned() {
        let tiles = [GridTile::floor(-10, -10, 10), GridTile::floor(0, 0, 10)];
        let g = PathGraph::new(&tiles).unwrap();
        // Diagonal neighbors, but both corners are missing.
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.lookup_vertex(Point::new(-10, -10)), Some(0));
    }
}
