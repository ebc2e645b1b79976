//! A* search on the occupancy grid.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::{debug, trace};

use crate::grid::GridGraph;
use crate::search::{endpoints_in_bounds, SearchResult};
use crate::types::{cell_distance, Cell};

/// Open-set entry. The f score is fixed when the entry is pushed; improved
/// cells are simply pushed again, so stale entries can linger in the heap
/// until popped.
struct HeapNode {
    idx: usize,
    f: f32,
}

impl PartialEq for HeapNode {
    fn eq(&self, other: &Self) -> bool {
        self.f == other.f
    }
}

impl Eq for HeapNode {}

impl Ord for HeapNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed comparison turns the max-heap into a min-heap on f.
        other.f.partial_cmp(&self.f).unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for HeapNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A* search from `start` to `goal`.
///
/// The frontier is ordered by `f = g + h` with h the straight-line cell
/// distance to the goal, while every edge costs a flat 1, diagonals
/// included. Across diagonal moves h can therefore exceed the true
/// remaining cost, and the returned path is not guaranteed shortest. There
/// is no closed set beyond the cost comparison; a cell is re-expanded
/// whenever a cheaper route to it is found.
pub fn a_star_search(graph: &mut GridGraph, start: Cell, goal: Cell) -> SearchResult {
    if !endpoints_in_bounds(graph, start, goal) {
        return SearchResult::default();
    }
    graph.reset_nodes();

    let start_idx = graph.cell_to_index(start);
    let goal_idx = graph.cell_to_index(goal);

    let mut visited_order = Vec::new();
    let mut open_set = BinaryHeap::new();
    graph.node_mut(start_idx).cost = 0.0;
    open_set.push(HeapNode {
        idx: start_idx,
        f: cell_distance(start, goal),
    });

    while let Some(HeapNode { idx: current, .. }) = open_set.pop() {
        visited_order.push(graph.index_to_cell(current));

        if current == goal_idx {
            trace!("a*: goal after {} expansions", visited_order.len());
            return SearchResult {
                path: graph.trace_path(goal_idx),
                visited: visited_order,
            };
        }

        for neighbor in graph.neighbors(current) {
            if graph.in_collision(neighbor) {
                continue;
            }

            let tentative = graph.node(current).cost + 1.0;
            if tentative < graph.node(neighbor).cost {
                let node = graph.node_mut(neighbor);
                node.cost = tentative;
                node.parent = current as i32;

                let h = cell_distance(graph.index_to_cell(neighbor), goal);
                open_set.push(HeapNode {
                    idx: neighbor,
                    f: tentative + h,
                });
            }
        }
    }

    debug!(
        "a*: frontier exhausted after {} expansions, no path",
        visited_order.len()
    );
    SearchResult::no_path(visited_order)
}
