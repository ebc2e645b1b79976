//! Obstacle distance transforms.
//!
//! Each algorithm fills the grid's obstacle distance field with the per-cell
//! distance to the nearest occupied cell, in cell units, 0 for occupied
//! cells. The fast collision check reads this field, so one of these must
//! run before [`CollisionMode::DistanceField`](crate::CollisionMode) is
//! usable.
//!
//! - [`brute_force`]: exact Euclidean distances by scanning every occupied
//!   cell per free cell. O(N²) in cell count, the correctness baseline.
//! - [`manhattan`]: same scan with the Manhattan metric.
//! - [`separable_euclidean`]: a row pass then a column pass of a 1D
//!   nearest-zero scan. Much cheaper, but an approximation: the column pass
//!   only propagates from cells the row pass drove to zero (the occupied
//!   cells themselves), so it yields within-column distances and leaves
//!   obstacle-free columns at infinity. There is no parabola lower-envelope
//!   step here; treat the output as a fast heuristic, not an exact metric.
//!
//! On a map with no occupied cells at all, every distance comes out as
//! `f32::INFINITY`. That is a valid result, not an error; the fast collision
//! check then reports every cell as free.

use std::str::FromStr;
use std::time::Instant;

use log::debug;

use crate::grid::GridGraph;
use crate::types::Cell;

const INF: f32 = f32::INFINITY;

/// Selects one of the three transform implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformAlgorithm {
    BruteForce,
    Manhattan,
    SeparableEuclidean,
}

impl TransformAlgorithm {
    /// Run the selected transform over the grid.
    pub fn run(self, graph: &mut GridGraph) {
        match self {
            TransformAlgorithm::BruteForce => brute_force(graph),
            TransformAlgorithm::Manhattan => manhattan(graph),
            TransformAlgorithm::SeparableEuclidean => separable_euclidean(graph),
        }
    }
}

impl FromStr for TransformAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "brute" => Ok(TransformAlgorithm::BruteForce),
            "manhattan" => Ok(TransformAlgorithm::Manhattan),
            "euclidean" => Ok(TransformAlgorithm::SeparableEuclidean),
            other => Err(format!("unknown distance transform: {}", other)),
        }
    }
}

fn occupied_cells(graph: &GridGraph) -> Vec<Cell> {
    (0..graph.num_cells())
        .filter(|&idx| graph.is_occupied(idx))
        .map(|idx| graph.index_to_cell(idx))
        .collect()
}

/// Exact Euclidean distances by exhaustive scan.
pub fn brute_force(graph: &mut GridGraph) {
    let started = Instant::now();
    let obstacles = occupied_cells(graph);

    let mut distances = vec![INF; graph.num_cells()];
    for (idx, out) in distances.iter_mut().enumerate() {
        if graph.is_occupied(idx) {
            *out = 0.0;
            continue;
        }
        let cell = graph.index_to_cell(idx);
        for &obstacle in &obstacles {
            let d = (cell - obstacle).as_vec2().length();
            if d < *out {
                *out = d;
            }
        }
    }

    graph.set_obstacle_distances(distances);
    debug!(
        "brute-force distance transform: {} cells, {} obstacles, {:?}",
        graph.num_cells(),
        obstacles.len(),
        started.elapsed()
    );
}

/// Manhattan distances by exhaustive scan.
pub fn manhattan(graph: &mut GridGraph) {
    let started = Instant::now();
    let obstacles = occupied_cells(graph);

    let mut distances = vec![INF; graph.num_cells()];
    for (idx, out) in distances.iter_mut().enumerate() {
        if graph.is_occupied(idx) {
            *out = 0.0;
            continue;
        }
        let cell = graph.index_to_cell(idx);
        for &obstacle in &obstacles {
            let d = ((cell.x - obstacle.x).abs() + (cell.y - obstacle.y).abs()) as f32;
            if d < *out {
                *out = d;
            }
        }
    }

    graph.set_obstacle_distances(distances);
    debug!(
        "manhattan distance transform: {} cells, {} obstacles, {:?}",
        graph.num_cells(),
        obstacles.len(),
        started.elapsed()
    );
}

/// 1D distance to the nearest zero entry of `seeds`. Non-zero entries are
/// not treated as sources, whatever their value.
fn nearest_zero_1d(seeds: &[f32]) -> Vec<f32> {
    let n = seeds.len();
    let mut out = vec![INF; n];
    for i in 0..n {
        if seeds[i] == 0.0 {
            out[i] = 0.0;
            continue;
        }
        let mut min_distance = INF;
        for (j, &seed) in seeds.iter().enumerate() {
            if seed == 0.0 {
                let d = (i as i32 - j as i32).abs() as f32;
                if d < min_distance {
                    min_distance = d;
                }
            }
        }
        out[i] = min_distance;
    }
    out
}

/// Row-then-column composition of [`nearest_zero_1d`]. See the module docs
/// for the accuracy caveats.
pub fn separable_euclidean(graph: &mut GridGraph) {
    let started = Instant::now();
    let width = graph.width() as usize;
    let height = graph.height() as usize;

    let mut distances = vec![INF; graph.num_cells()];

    for j in 0..height {
        let row: Vec<f32> = (0..width)
            .map(|i| {
                if graph.is_occupied(j * width + i) {
                    0.0
                } else {
                    INF
                }
            })
            .collect();
        distances[j * width..(j + 1) * width].copy_from_slice(&nearest_zero_1d(&row));
    }

    for i in 0..width {
        let column: Vec<f32> = (0..height).map(|j| distances[j * width + i]).collect();
        let column = nearest_zero_1d(&column);
        for (j, d) in column.into_iter().enumerate() {
            distances[j * width + i] = d;
        }
    }

    graph.set_obstacle_distances(distances);
    debug!(
        "separable euclidean distance transform: {}x{} cells, {:?}",
        width,
        height,
        started.elapsed()
    );
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
        GridGraph::new(Vec2::ZERO, width, height, 1.0, odds).unwrap()
    }

    fn distance_at(graph: &GridGraph, x: i32, y: i32) -> f32 {
        graph.obstacle_distances()[graph.cell_to_index(Cell::new(x, y))]
    }

    #[test]
    fn brute_force_single_obstacle() {
        let mut grid = grid_with_obstacles(5, 5, &[(2, 2)]);
        brute_force(&mut grid);

        assert_eq!(distance_at(&grid, 2, 2), 0.0);
        assert_eq!(distance_at(&grid, 1, 2), 1.0);
        assert_eq!(distance_at(&grid, 2, 3), 1.0);
        assert_eq!(distance_at(&grid, 1, 1), std::f32::consts::SQRT_2);
        assert_eq!(distance_at(&grid, 0, 0), 8.0f32.sqrt());
    }

    #[test]
    fn manhattan_single_obstacle() {
        let mut grid = grid_with_obstacles(5, 5, &[(2, 2)]);
        manhattan(&mut grid);

        assert_eq!(distance_at(&grid, 2, 2), 0.0);
        assert_eq!(distance_at(&grid, 1, 2), 1.0);
        assert_eq!(distance_at(&grid, 1, 1), 2.0);
        assert_eq!(distance_at(&grid, 0, 0), 4.0);
    }

    #[test]
    fn occupied_cells_are_zero_for_all_transforms() {
        for algorithm in [
            TransformAlgorithm::BruteForce,
            TransformAlgorithm::Manhattan,
            TransformAlgorithm::SeparableEuclidean,
        ] {
            let mut grid = grid_with_obstacles(4, 3, &[(0, 0), (3, 2), (1, 1)]);
            algorithm.run(&mut grid);
            for &(x, y) in &[(0, 0), (3, 2), (1, 1)] {
                assert_eq!(distance_at(&grid, x, y), 0.0, "{:?}", algorithm);
            }
        }
    }

    #[test]
    fn empty_map_yields_all_infinite() {
        for algorithm in [
            TransformAlgorithm::BruteForce,
            TransformAlgorithm::Manhattan,
            TransformAlgorithm::SeparableEuclidean,
        ] {
            let mut grid = grid_with_obstacles(4, 4, &[]);
            algorithm.run(&mut grid);
            assert!(
                grid.obstacle_distances().iter().all(|d| d.is_infinite()),
                "{:?}",
                algorithm
            );
        }
    }

    #[test]
    fn separable_wall_gives_exact_vertical_distances() {
        // A full-width wall at y=2: every column has a seed, so the column
        // pass produces exact distances.
        let mut grid = grid_with_obstacles(5, 6, &[(0, 2), (1, 2), (2, 2), (3, 2), (4, 2)]);
        separable_euclidean(&mut grid);

        for x in 0..5 {
            for y in 0..6 {
                assert_eq!(distance_at(&grid, x, y), (y - 2).abs() as f32);
            }
        }
    }

    #[test]
    fn separable_leaves_obstacle_free_columns_infinite() {
        let mut grid = grid_with_obstacles(5, 5, &[(2, 2)]);
        separable_euclidean(&mut grid);

        // Seeded column: within-column distances.
        assert_eq!(distance_at(&grid, 2, 0), 2.0);
        assert_eq!(distance_at(&grid, 2, 4), 2.0);
        // Unseeded columns stay infinite, the documented approximation.
        assert!(distance_at(&grid, 1, 2).is_infinite());
        assert!(distance_at(&grid, 0, 0).is_infinite());
    }

    #[test]
    fn algorithm_names_parse() {
        assert_eq!(
            "brute".parse::<TransformAlgorithm>().unwrap(),
            TransformAlgorithm::BruteForce
        );
        assert_eq!(
            "manhattan".parse::<TransformAlgorithm>().unwrap(),
            TransformAlgorithm::Manhattan
        );
        assert_eq!(
            "euclidean".parse::<TransformAlgorithm>().unwrap(),
            TransformAlgorithm::SeparableEuclidean
        );
        assert!("voronoi".parse::<TransformAlgorithm>().is_err());
    }
}
