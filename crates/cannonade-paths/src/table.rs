use std::fmt;

use cannonade_core::Tile;

use crate::PathGraph;
use crate::graph::{SearchNode, UNREACHABLE};

/// Printable dump of the A* state of every vertex, one row per vertex.
///
/// Returned by [`PathGraph::astar_table`]. Unreached costs print as `inf`
/// and a missing previous vertex as `-`.
pub struct AstarTable<'g, 'a, T> {
    graph: &'g PathGraph<'a, T>,
}

impl<'a, T: Tile> PathGraph<'a, T> {
    pub fn astar_table(&self) -> AstarTable<'_, 'a, T> {
        AstarTable { graph: self }
    }
}

fn cost(c: i32) -> String {
    if c == UNREACHABLE {
        "inf".to_string()
    } else {
        c.to_string()
    }
}

impl<T: Tile> fmt::Display for AstarTable<'_, '_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:>6} {:>12} {:>8} {:>8} {:>9}  status",
            "vertex", "position", "previous", "movement", "estimated"
        )?;
        for (i, vertex) in self.graph.vertices().iter().enumerate() {
            let node = self.graph.search_node(i).copied().unwrap_or_default();
            let SearchNode {
                previous,
                movement_cost,
                estimated_cost,
                status,
            } = node;
            let previous = previous.map_or_else(|| "-".to_string(), |p| p.to_string());
            writeln!(
                f,
                "{:>6} {:>12} {:>8} {:>8} {:>9}  {}",
                i,
                vertex.position().to_string(),
                previous,
                cost(movement_cost),
                cost(estimated_cost),
                status
            )?;
        }
        Ok(())
    }
}
