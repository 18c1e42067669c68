//! Square Cannonade path search, driven from text maps.
//!
//! This is the consumer side of `cannonade-paths`: it builds a graph for a
//! [`TileMap`], searches from one entity footprint to another, and draws the
//! result back onto the map.

use anyhow::{Context, Result};
use cannonade_core::{Footprint, Point, Tile, TileMap};
use cannonade_paths::{EdgeWeights, PathGraph};

/// One search request.
#[derive(Debug, Clone, PartialEq)]
pub struct Search {
    /// Entity the path starts from.
    pub start: Footprint,
    /// Entity the path leads to.
    pub end: Footprint,
    pub weights: EdgeWeights,
}

/// Result of a successful search.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub start_region: Vec<usize>,
    pub end_region: Vec<usize>,
    /// Vertex indices from a start vertex to the reached end vertex.
    pub path: Vec<usize>,
    /// Tile positions along `path`.
    pub positions: Vec<Point>,
    pub cost: i32,
    /// A* table of the search, when requested.
    pub table: Option<String>,
}

/// Build the graph for `map` and run `search` on it.
pub fn run_search(map: &TileMap, search: &Search, with_table: bool) -> Result<Outcome> {
    let mut graph = PathGraph::with_weights(map.tiles(), search.weights)
        .context("failed to build the path graph")?;
    graph.set_search_start_footprint(search.start);
    graph.set_search_end_footprint(search.end);

    let ending = graph
        .perform_astar_search()
        .with_context(|| format!("no path from {:?} to {:?}", search.start, search.end))?;
    let path = graph.generate_path(ending)?;
    let cost = graph.path_cost(ending).unwrap_or_default();
    log::info!(
        "path of {} tiles, cost {cost}, ends at vertex {ending}",
        path.len()
    );

    Ok(Outcome {
        start_region: graph.search_start().to_vec(),
        end_region: graph.search_end().to_vec(),
        positions: graph.path_positions(&path),
        path,
        cost,
        table: with_table.then(|| graph.astar_table().to_string()),
    })
}

/// Draw the map with the search overlaid.
///
/// `#` wall, `.` floor, `*` path, `S` start region, `E` end region. Region
/// marks win over path marks.
pub fn render(map: &TileMap, outcome: &Outcome) -> String {
    let l = map.tile_length();
    let mut rows: Vec<Vec<char>> = (0..map.rows())
        .map(|y| {
            (0..map.columns())
                .map(|x| match map.tile_at(Point::new(x, y)) {
                    Some(t) if t.is_passable() => '.',
                    _ => '#',
                })
                .collect()
        })
        .collect();

    // Vertex indices count floor tiles in row-major order.
    let floors: Vec<Point> = map.floor_tiles().map(|t| t.position() / l).collect();
    let mut mark = |v: usize, ch: char| {
        if let Some(cell) = floors.get(v) {
            rows[cell.y as usize][cell.x as usize] = ch;
        }
    };
    for &v in &outcome.path {
        mark(v, '*');
    }
    for &v in &outcome.start_region {
        mark(v, 'S');
    }
    for &v in &outcome.end_region {
        mark(v, 'E');
    }

    let mut out = String::new();
    for row in rows {
        out.extend(row);
        out.push('\n');
    }
    out
}
