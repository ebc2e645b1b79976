//! Breadth-first search with cost relaxation.

use std::collections::VecDeque;

use log::{debug, trace};

use crate::grid::GridGraph;
use crate::search::{endpoints_in_bounds, SearchResult};
use crate::types::{cell_distance, Cell};

/// Breadth-first search from `start` to `goal`.
///
/// The frontier is a plain FIFO queue, but neighbor costs are still relaxed
/// with the straight-line step distance and improved cells are re-enqueued.
/// This hybrid returns shortest paths on unit-cost grids only; with the
/// diagonal step costing sqrt(2) the FIFO order gives no optimality
/// guarantee.
pub fn breadth_first_search(graph: &mut GridGraph, start: Cell, goal: Cell) -> SearchResult {
    if !endpoints_in_bounds(graph, start, goal) {
        return SearchResult::default();
    }
    graph.reset_nodes();

    let start_idx = graph.cell_to_index(start);
    let goal_idx = graph.cell_to_index(goal);

    let mut visited_order = Vec::new();
    let mut queue = VecDeque::new();
    queue.push_back(start_idx);
    {
        let node = graph.node_mut(start_idx);
        node.visited = true;
        node.cost = 0.0;
    }

    while let Some(current) = queue.pop_front() {
        let current_cell = graph.index_to_cell(current);
        visited_order.push(current_cell);

        if current == goal_idx {
            trace!("bfs: goal after {} expansions", visited_order.len());
            return SearchResult {
                path: graph.trace_path(goal_idx),
                visited: visited_order,
            };
        }

        for neighbor in graph.neighbors(current) {
            if graph.in_collision(neighbor) {
                continue;
            }

            let step = cell_distance(current_cell, graph.index_to_cell(neighbor));
            let new_cost = graph.node(current).cost + step;

            let node = graph.node(neighbor);
            if !node.visited || new_cost < node.cost {
                let node = graph.node_mut(neighbor);
                node.visited = true;
                node.cost = new_cost;
                node.parent = current as i32;
                queue.push_back(neighbor);
            }
        }
    }

    debug!(
        "bfs: frontier exhausted after {} expansions, no path",
        visited_order.len()
    );
    SearchResult::no_path(visited_order)
}
