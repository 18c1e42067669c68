use cannonade_core::{Point, Tile};

use crate::PathGraph;
use crate::error::SearchError;
use crate::graph::ResolutionStatus;

impl<'a, T: Tile> PathGraph<'a, T> {
    /// Rebuild the path found by the last search, ending at `ending`.
    ///
    /// The first element is a start vertex and the last is `ending`. A start
    /// vertex that is also an end vertex yields a one-element path.
    pub fn generate_path(&self, ending: usize) -> Result<Vec<usize>, SearchError> {
        if ending >= self.vertices.len() {
            return Err(SearchError::UnknownVertex(ending));
        }
        match self.nodes.get(ending) {
            Some(node) if node.status != ResolutionStatus::Untouched => {}
            _ => return Err(SearchError::Unreached(ending)),
        }

        let mut path = vec![ending];
        let mut current = ending;
        while let Some(previous) = self.nodes[current].previous {
            debug_assert!(
                path.len() < self.vertices.len(),
                "cycle in previous-vertex chain at {current}"
            );
            path.push(previous);
            current = previous;
        }
        path.reverse();
        Ok(path)
    }

    /// Search, then rebuild the path to whichever end vertex was reached.
    pub fn find_path(&mut self) -> Result<Vec<usize>, SearchError> {
        let ending = self.perform_astar_search()?;
        self.generate_path(ending)
    }

    /// Tile positions of the vertices along `path`.
    pub fn path_positions(&self, path: &[usize]) -> Vec<Point> {
        path.iter()
            .filter_map(|&v| self.vertex(v))
            .map(|v| v.position())
            .collect()
    }

    /// Movement cost of the best known path to `v` in the last search.
    pub fn path_cost(&self, v: usize) -> Option<i32> {
        self.nodes
            .get(v)
            .filter(|n| n.status != ResolutionStatus::Untouched)
            .map(|n| n.movement_cost)
    }
}
