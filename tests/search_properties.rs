//! Behavior the four search algorithms must share, exercised through the
//! public API.

use glam::Vec2;

use gridnav::types::{ODDS_FREE, ODDS_OCCUPIED};
use gridnav::{
    a_star_search, breadth_first_search, depth_first_search, iterative_deepening_search, Cell,
    GridGraph, SearchResult,
};

type Search = fn(&mut GridGraph, Cell, Cell) -> SearchResult;

const ALGORITHMS: [(&str, Search); 4] = [
    ("bfs", breadth_first_search),
    ("dfs", depth_first_search),
    ("ids", iterative_deepening_search),
    ("astar", a_star_search),
];

fn grid_with_obstacles(width: u32, height: u32, occupied: &[(i32, i32)]) -> GridGraph {
    let mut odds = vec![ODDS_FREE; (width * height) as usize];
    for &(x, y) in occupied {
        odds[(x + y * width as i32) as usize] = ODDS_OCCUPIED;
    }
    let mut grid = GridGraph::new(Vec2::ZERO, width, height, 1.0, odds).unwrap();
    // Keep the sampling disk inside a single cell so only occupancy blocks
    // movement; the collision model itself is covered elsewhere.
    grid.set_collision_radius(0.2);
    grid
}

#[test]
fn all_algorithms_cross_an_open_grid() {
    for (name, search) in ALGORITHMS {
        let mut grid = grid_with_obstacles(5, 5, &[]);
        let result = search(&mut grid, Cell::new(0, 0), Cell::new(4, 4));
        assert!(result.found(), "{} found no path on an open grid", name);
        assert_eq!(result.path.first(), Some(&Cell::new(0, 0)), "{}", name);
        assert_eq!(result.path.last(), Some(&Cell::new(4, 4)), "{}", name);
        assert!(!result.visited.is_empty(), "{}", name);
    }
}

#[test]
fn all_algorithms_fail_on_an_enclosed_goal() {
    // Goal at (5, 5) sealed behind a ring of occupied cells.
    let ring = [
        (4, 4),
        (5, 4),
        (6, 4),
        (4, 5),
        (6, 5),
        (4, 6),
        (5, 6),
        (6, 6),
    ];
    for (name, search) in ALGORITHMS {
        let mut grid = grid_with_obstacles(8, 8, &ring);
        let result = search(&mut grid, Cell::new(0, 0), Cell::new(5, 5));
        assert!(!result.found(), "{} escaped an enclosed goal", name);
        assert!(result.path.is_empty(), "{}", name);
    }
}

#[test]
fn consecutive_searches_do_not_leak_state() {
    let obstacles = [(3, 0), (3, 1), (3, 2), (6, 3), (6, 4), (6, 5)];

    // Baseline from a fresh grid.
    let mut fresh = grid_with_obstacles(10, 10, &obstacles);
    let baseline = breadth_first_search(&mut fresh, Cell::new(0, 0), Cell::new(9, 9));

    // The same search after other algorithms have churned the node state.
    let mut reused = grid_with_obstacles(10, 10, &obstacles);
    let _ = depth_first_search(&mut reused, Cell::new(9, 0), Cell::new(0, 9));
    let _ = a_star_search(&mut reused, Cell::new(5, 5), Cell::new(0, 0));
    let _ = iterative_deepening_search(&mut reused, Cell::new(0, 0), Cell::new(2, 2));
    let repeat = breadth_first_search(&mut reused, Cell::new(0, 0), Cell::new(9, 9));

    assert_eq!(repeat.path, baseline.path);
    assert_eq!(repeat.visited, baseline.visited);
}

#[test]
fn repeated_identical_searches_agree() {
    for (name, search) in ALGORITHMS {
        let mut grid = grid_with_obstacles(8, 8, &[(4, 3), (4, 4), (4, 5)]);
        let first = search(&mut grid, Cell::new(1, 4), Cell::new(7, 4));
        let second = search(&mut grid, Cell::new(1, 4), Cell::new(7, 4));
        assert_eq!(first.path, second.path, "{}", name);
        assert_eq!(first.visited, second.visited, "{}", name);
    }
}

#[test]
fn astar_is_manhattan_optimal_when_diagonals_are_blocked() {
    // Single-row corridor: the second row is solid wall, so every diagonal
    // neighbor is occupied and only horizontal moves remain.
    let wall: Vec<(i32, i32)> = (0..7).map(|x| (x, 1)).collect();
    let mut grid = grid_with_obstacles(7, 2, &wall);

    let result = a_star_search(&mut grid, Cell::new(0, 0), Cell::new(6, 0));
    assert!(result.found());
    // Manhattan distance 6 means 7 cells including both endpoints.
    assert_eq!(result.path.len(), 7);

    let bfs = breadth_first_search(&mut grid, Cell::new(0, 0), Cell::new(6, 0));
    assert_eq!(bfs.path.len(), result.path.len());
}

#[test]
fn out_of_bounds_endpoints_are_rejected() {
    for (name, search) in ALGORITHMS {
        let mut grid = grid_with_obstacles(4, 4, &[]);
        let bad_start = search(&mut grid, Cell::new(-1, 0), Cell::new(3, 3));
        assert!(!bad_start.found(), "{}", name);
        assert!(bad_start.visited.is_empty(), "{}", name);

        let bad_goal = search(&mut grid, Cell::new(0, 0), Cell::new(4, 0));
        assert!(!bad_goal.found(), "{}", name);
    }
}

#[test]
fn waypoints_follow_the_path() {
    let mut grid = grid_with_obstacles(5, 5, &[]);
    let result = breadth_first_search(&mut grid, Cell::new(0, 0), Cell::new(2, 0));
    let waypoints = grid.path_to_world(&result.path);
    assert_eq!(waypoints.len(), result.path.len());
    assert_eq!(waypoints[0], Vec2::new(0.5, 0.5));
}
