//! Per-cell search bookkeeping, stored as a parallel array on the grid.

use crate::grid::GridGraph;
use crate::types::{Cell, COST_UNREACHED, NO_PARENT};

/// Mutable search state for one cell.
///
/// One node exists per cell, allocated with the grid and reset at the start
/// of every search call, so results never leak between runs. `parent` is a
/// linear cell index, or [`NO_PARENT`] for roots and unreached cells.
#[derive(Debug, Clone, Copy)]
pub struct SearchNode {
    pub visited: bool,
    pub parent: i32,
    pub cost: f32,
}

impl Default for SearchNode {
    fn default() -> Self {
        Self {
            visited: false,
            parent: NO_PARENT,
            cost: COST_UNREACHED,
        }
    }
}

impl GridGraph {
    /// Reset every search node to its default. Called by each search before
    /// it touches the frontier.
    pub(crate) fn reset_nodes(&mut self) {
        for node in &mut self.nodes {
            *node = SearchNode::default();
        }
    }

    #[inline]
    pub(crate) fn node(&self, idx: usize) -> &SearchNode {
        &self.nodes[idx]
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, idx: usize) -> &mut SearchNode {
        &mut self.nodes[idx]
    }

    /// Walk parent pointers from `goal_idx` back to the search root and
    /// return the cells in start-to-goal order.
    pub(crate) fn trace_path(&self, goal_idx: usize) -> Vec<Cell> {
        let mut path = Vec::new();
        let mut current = goal_idx as i32;
        while current != NO_PARENT {
            path.push(self.index_to_cell(current as usize));
            current = self.nodes[current as usize].parent;
        }
        path.reverse();
        path
    }
}
