//! Graph search over the occupancy grid.
//!
//! All four algorithms share one call shape: reset the grid's per-cell node
//! state, expand cells from a frontier, skip neighbors the active collision
//! check rejects, and stop when the goal is expanded or the frontier runs
//! dry. The result carries the reconstructed path (empty when no path
//! exists, a normal outcome rather than an error) plus the order cells were
//! expanded in, which external tools use to render search animations.
//!
//! Each call takes the grid by exclusive reference: the algorithms share
//! the grid's node state, so only one search can run against a grid at a
//! time.

mod astar;
mod bfs;
mod dfs;

pub use astar::a_star_search;
pub use bfs::breadth_first_search;
pub use dfs::{
    depth_first_search, iterative_deepening_search, iterative_deepening_search_limited,
};

use log::debug;

use crate::grid::GridGraph;
use crate::types::Cell;

/// Outcome of one search call.
#[derive(Debug, Clone, Default)]
pub struct SearchResult {
    /// Cells from start to goal inclusive; empty when no path was found.
    pub path: Vec<Cell>,
    /// Every cell the search expanded, in expansion order.
    pub visited: Vec<Cell>,
}

impl SearchResult {
    /// Whether a path was found.
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of cell expansions the search performed.
    pub fn expanded(&self) -> usize {
        self.visited.len()
    }

    pub(crate) fn no_path(visited: Vec<Cell>) -> Self {
        Self {
            path: Vec::new(),
            visited,
        }
    }
}

/// Both endpoints must lie on the map; searches return an empty result
/// otherwise.
pub(crate) fn endpoints_in_bounds(graph: &GridGraph, start: Cell, goal: Cell) -> bool {
    let ok = graph.is_in_bounds(start) && graph.is_in_bounds(goal);
    if !ok {
        debug!(
            "search rejected: start ({}, {}) or goal ({}, {}) outside {}x{} grid",
            start.x,
            start.y,
            goal.x,
            goal.y,
            graph.width(),
            graph.height()
        );
    }
    ok
}
