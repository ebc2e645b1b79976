//! Depth-first search and its iterative-deepening variant.

use log::{debug, trace};

use crate::grid::GridGraph;
use crate::search::{endpoints_in_bounds, SearchResult};
use crate::types::Cell;

/// Depth-first search from `start` to `goal`.
///
/// Plain LIFO traversal: cells are marked visited when discovered and the
/// first route that reaches the goal wins, however deep. No cost tracking
/// and no shortest-path guarantee.
pub fn depth_first_search(graph: &mut GridGraph, start: Cell, goal: Cell) -> SearchResult {
    if !endpoints_in_bounds(graph, start, goal) {
        return SearchResult::default();
    }
    graph.reset_nodes();

    let start_idx = graph.cell_to_index(start);
    let goal_idx = graph.cell_to_index(goal);

    let mut visited_order = Vec::new();
    let mut stack = vec![start_idx];
    graph.node_mut(start_idx).visited = true;

    while let Some(current) = stack.pop() {
        visited_order.push(graph.index_to_cell(current));

        if current == goal_idx {
            trace!("dfs: goal after {} expansions", visited_order.len());
            return SearchResult {
                path: graph.trace_path(goal_idx),
                visited: visited_order,
            };
        }

        for neighbor in graph.neighbors(current) {
            if graph.node(neighbor).visited || graph.in_collision(neighbor) {
                continue;
            }
            let node = graph.node_mut(neighbor);
            node.visited = true;
            node.parent = current as i32;
            stack.push(neighbor);
        }
    }

    debug!(
        "dfs: frontier exhausted after {} expansions, no path",
        visited_order.len()
    );
    SearchResult::no_path(visited_order)
}

/// What a single depth-limited pass learned.
enum PassOutcome {
    /// Goal reached within the depth bound; parents hold the path.
    Found,
    /// At least one expansion was truncated by the bound, so a deeper pass
    /// could still succeed.
    Cutoff,
    /// The reachable frontier was exhausted without ever hitting the bound:
    /// no depth will reach the goal.
    Exhausted,
}

/// One frame of the explicit traversal stack. Each frame owns a cursor into
/// its neighbor list so expansion order matches a recursive descent: a
/// neighbor's whole subtree is explored before its later siblings are
/// considered.
struct Frame {
    idx: usize,
    remaining: u32,
    neighbors: Vec<usize>,
    cursor: usize,
}

fn depth_limited(
    graph: &mut GridGraph,
    start_idx: usize,
    goal_idx: usize,
    limit: u32,
    visited_order: &mut Vec<Cell>,
) -> PassOutcome {
    if start_idx == goal_idx {
        return PassOutcome::Found;
    }
    if limit == 0 {
        return PassOutcome::Cutoff;
    }

    let mut hit_limit = false;
    visited_order.push(graph.index_to_cell(start_idx));
    let mut stack = vec![Frame {
        idx: start_idx,
        remaining: limit,
        neighbors: graph.neighbors(start_idx),
        cursor: 0,
    }];

    while let Some(frame) = stack.last_mut() {
        if frame.cursor >= frame.neighbors.len() {
            stack.pop();
            continue;
        }
        let neighbor = frame.neighbors[frame.cursor];
        frame.cursor += 1;
        let parent_idx = frame.idx;
        let remaining = frame.remaining;

        if graph.node(neighbor).visited || graph.in_collision(neighbor) {
            continue;
        }
        let node = graph.node_mut(neighbor);
        node.visited = true;
        node.parent = parent_idx as i32;

        if neighbor == goal_idx {
            return PassOutcome::Found;
        }
        if remaining == 1 {
            // Discovered but out of depth budget to expand from here.
            hit_limit = true;
            continue;
        }
        visited_order.push(graph.index_to_cell(neighbor));
        stack.push(Frame {
            idx: neighbor,
            remaining: remaining - 1,
            neighbors: graph.neighbors(neighbor),
            cursor: 0,
        });
    }

    if hit_limit {
        PassOutcome::Cutoff
    } else {
        PassOutcome::Exhausted
    }
}

/// Iterative-deepening search: depth-limited passes at bounds 0, 1, 2, ...
/// with a full node-state reset between passes.
///
/// A pass that exhausts the reachable cells without ever hitting its depth
/// bound proves the goal unreachable, so the search terminates with an
/// empty path instead of deepening forever. Runtime still grows with the
/// square of the path depth at worst; use
/// [`iterative_deepening_search_limited`] where latency must be bounded.
pub fn iterative_deepening_search(graph: &mut GridGraph, start: Cell, goal: Cell) -> SearchResult {
    iterative_deepening(graph, start, goal, None)
}

/// [`iterative_deepening_search`] with a ceiling on the depth bound. Once
/// `max_depth` is reached without finding the goal the search gives up and
/// returns an empty path.
pub fn iterative_deepening_search_limited(
    graph: &mut GridGraph,
    start: Cell,
    goal: Cell,
    max_depth: u32,
) -> SearchResult {
    iterative_deepening(graph, start, goal, Some(max_depth))
}

fn iterative_deepening(
    graph: &mut GridGraph,
    start: Cell,
    goal: Cell,
    max_depth: Option<u32>,
) -> SearchResult {
    if !endpoints_in_bounds(graph, start, goal) {
        return SearchResult::default();
    }

    let start_idx = graph.cell_to_index(start);
    let goal_idx = graph.cell_to_index(goal);

    let mut visited_order = Vec::new();
    let mut depth = 0u32;
    loop {
        graph.reset_nodes();
        // The root may never be rediscovered: a parent pointer onto the
        // start would put a cycle in the trace.
        graph.node_mut(start_idx).visited = true;

        match depth_limited(graph, start_idx, goal_idx, depth, &mut visited_order) {
            PassOutcome::Found => {
                trace!(
                    "ids: goal at depth bound {} after {} expansions",
                    depth,
                    visited_order.len()
                );
                return SearchResult {
                    path: graph.trace_path(goal_idx),
                    visited: visited_order,
                };
            }
            PassOutcome::Exhausted => {
                debug!(
                    "ids: exhausted reachable cells at depth bound {}, goal unreachable",
                    depth
                );
                return SearchResult::no_path(visited_order);
            }
            PassOutcome::Cutoff => {}
        }

        if let Some(max) = max_depth {
            if depth >= max {
                debug!("ids: giving up at depth ceiling {}", max);
                return SearchResult::no_path(visited_order);
            }
        }
        depth += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ODDS_FREE, ODDS_OCCUPIED};
    use glam::Vec2;

    fn grid_with_obstacles(width: u32, height: u32, occupied: &[(i32, i32)]) -> GridGraph {
        let mut odds = vec![ODDS_FREE; (width * height) as usize];
        for &(x, y) in occupied {
            odds[(x + y * width as i32) as usize] = ODDS_OCCUPIED;
        }
        let mut grid = GridGraph::new(Vec2::ZERO, width, height, 1.0, odds).unwrap();
        grid.set_collision_radius(0.2);
        grid
    }

    #[test]
    fn dfs_finds_some_path() {
        let mut grid = grid_with_obstacles(4, 4, &[]);
        let result = depth_first_search(&mut grid, Cell::new(0, 0), Cell::new(3, 3));
        assert!(result.found());
        assert_eq!(result.path.first(), Some(&Cell::new(0, 0)));
        assert_eq!(result.path.last(), Some(&Cell::new(3, 3)));
    }

    #[test]
    fn ids_start_equals_goal() {
        let mut grid = grid_with_obstacles(3, 3, &[]);
        let result = iterative_deepening_search(&mut grid, Cell::new(2, 2), Cell::new(2, 2));
        assert_eq!(result.path, vec![Cell::new(2, 2)]);
    }

    #[test]
    fn ids_adjacent_goal_found_at_depth_one() {
        let mut grid = grid_with_obstacles(3, 3, &[]);
        let result = iterative_deepening_search(&mut grid, Cell::new(0, 0), Cell::new(1, 1));
        assert_eq!(result.path, vec![Cell::new(0, 0), Cell::new(1, 1)]);
    }

    #[test]
    fn ids_terminates_on_unreachable_goal() {
        // Goal sealed in the corner behind a wall.
        let mut grid = grid_with_obstacles(4, 4, &[(2, 0), (2, 1), (0, 2), (1, 2), (2, 2)]);
        let result = iterative_deepening_search(&mut grid, Cell::new(3, 3), Cell::new(0, 0));
        assert!(!result.found());
    }

    #[test]
    fn ids_depth_ceiling_cuts_search_short() {
        let mut grid = grid_with_obstacles(6, 6, &[]);

        // A goal five diagonal steps away cannot be reached within two.
        let capped =
            iterative_deepening_search_limited(&mut grid, Cell::new(0, 0), Cell::new(5, 5), 2);
        assert!(!capped.found());

        // An adjacent goal fits comfortably under the same kind of ceiling.
        let enough =
            iterative_deepening_search_limited(&mut grid, Cell::new(0, 0), Cell::new(1, 0), 3);
        assert!(enough.found());
        assert_eq!(enough.path, vec![Cell::new(0, 0), Cell::new(1, 0)]);
    }
}
