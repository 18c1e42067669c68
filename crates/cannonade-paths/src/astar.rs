//! Weighted A* over the tile graph.
//!
//! The open set is a plain list in insertion order. Picking the lowest
//! estimate scans it front to back and keeps the first minimum, so ties go
//! to the vertex that entered the open set earliest. Expected paths depend on
//! that order; a binary heap would reorder ties.

use cannonade_core::Tile;

use crate::PathGraph;
use crate::error::SearchError;
use crate::graph::{ResolutionStatus, SearchNode};

impl<'a, T: Tile> PathGraph<'a, T> {
    /// Run A* from the start region to the end region.
    ///
    /// Returns the index of the end vertex the search reached, from which
    /// [`generate_path`](Self::generate_path) rebuilds the path. Every start
    /// vertex is an origin with cost 0.
    ///
    /// Fails if either region is empty or no end vertex is reachable; the
    /// search always terminates once the open set is exhausted.
    pub fn perform_astar_search(&mut self) -> Result<usize, SearchError> {
        if self.start.is_empty() {
            return Err(SearchError::EmptyStart);
        }
        if self.end.is_empty() {
            return Err(SearchError::EmptyEnd);
        }

        self.set_up_search();

        let mut steps = std::mem::take(&mut self.steps);
        let found = 'search: loop {
            let Some(current) = self.next_unresolved() else {
                break 'search None;
            };
            self.nodes[current].status = ResolutionStatus::Resolved;

            if self.is_goal(current) {
                break 'search Some(current);
            }

            let current_cost = self.nodes[current].movement_cost;
            let vertex = &self.vertices[current];
            steps.clear();
            steps.extend(vertex.nondiagonal().iter().map(|&n| (n, false)));
            steps.extend(vertex.diagonal().iter().map(|&n| (n, true)));

            for &(n, diagonal) in steps.iter() {
                let status = self.nodes[n].status;
                if status == ResolutionStatus::Resolved {
                    continue;
                }
                let tentative = current_cost.saturating_add(self.weights.of(diagonal));
                if status == ResolutionStatus::CouldResolve
                    && tentative >= self.nodes[n].movement_cost
                {
                    continue;
                }
                let estimate = tentative.saturating_add(self.heuristic(n));

                let node = &mut self.nodes[n];
                node.movement_cost = tentative;
                node.estimated_cost = estimate;
                node.previous = Some(current);
                if status == ResolutionStatus::Untouched {
                    node.status = ResolutionStatus::CouldResolve;
                    self.unresolved.push(n);
                }
            }
        };
        self.steps = steps;
        self.unresolved.clear();

        match found {
            Some(end) => {
                log::trace!(
                    "A* reached vertex {end} at cost {}",
                    self.nodes[end].movement_cost
                );
                if log::log_enabled!(log::Level::Trace) {
                    log::trace!("A* table:\n{}", self.astar_table());
                }
                Ok(end)
            }
            None => {
                log::warn!(
                    "A* exhausted the open set: start {:?} cannot reach end {:?}",
                    self.start,
                    self.end
                );
                Err(SearchError::NoPath)
            }
        }
    }

    /// Reset every vertex and seed the open set with the start region.
    fn set_up_search(&mut self) {
        self.nodes.clear();
        self.nodes.resize(self.vertices.len(), SearchNode::default());
        self.unresolved.clear();

        for i in 0..self.start.len() {
            let s = self.start[i];
            if self.nodes[s].status != ResolutionStatus::Untouched {
                continue;
            }
            let estimate = self.heuristic(s);
            self.nodes[s] = SearchNode {
                previous: None,
                movement_cost: 0,
                estimated_cost: estimate,
                status: ResolutionStatus::CouldResolve,
            };
            self.unresolved.push(s);
        }
    }

    /// Remove and return the open vertex with the lowest estimate, earliest
    /// entry first on ties.
    fn next_unresolved(&mut self) -> Option<usize> {
        let (slot, _) = self
            .unresolved
            .iter()
            .enumerate()
            .min_by_key(|&(_, &v)| self.nodes[v].estimated_cost)?;
        Some(self.unresolved.remove(slot))
    }

    #[inline]
    fn is_goal(&self, v: usize) -> bool {
        self.end.contains(&v)
    }

    /// Octile distance to the nearest end vertex, in edge-weight units.
    /// Tile offsets are taken in `i64` so far-apart tiles cannot overflow.
    fn heuristic(&self, v: usize) -> i32 {
        let p = self.vertices[v].position();
        let l = self.tile_length;
        self.end
            .iter()
            .map(|&e| {
                let q = self.vertices[e].position();
                let cells = |a: i32, b: i32| {
                    let d = (i64::from(a) - i64::from(b)) / i64::from(l);
                    i32::try_from(d).unwrap_or(if d < 0 { i32::MIN } else { i32::MAX })
                };
                self.weights.octile(cells(p.x, q.x), cells(p.y, q.y))
            })
            .min()
            .unwrap_or(0)
    }
}
