//! The occupancy grid graph every planner in this crate searches over.

use glam::Vec2;

use crate::collision::CollisionMode;
use crate::grid::nodes::SearchNode;
use crate::types::{
    Cell, GridError, DEFAULT_OCCUPANCY_THRESHOLD, DEFAULT_ROBOT_RADIUS, NEIGHBOR_OFFSETS,
};

/// A 2D occupancy grid with the derived state the search algorithms need.
///
/// The grid uses a coordinate system where:
/// - cell (0, 0) has its lower-left corner at `origin` in world coordinates
/// - `x` grows to the right (columns), `y` grows up (rows)
/// - cell values are occupancy log-odds, higher means more likely occupied
///
/// Occupancy data and geometry are fixed at construction. The obstacle
/// distance field starts at all zeros and is only meaningful after one of
/// the [`transform`](crate::transform) algorithms has run.
#[derive(Debug, Clone)]
pub struct GridGraph {
    origin: Vec2,
    width: u32,
    height: u32,
    /// Meters per cell.
    resolution: f32,
    odds: Vec<i8>,
    threshold: i8,
    obstacle_distances: Vec<f32>,
    collision_radius: f32,
    collision_mode: CollisionMode,
    pub(crate) nodes: Vec<SearchNode>,
}

impl GridGraph {
    /// Build a grid from its geometry and per-cell occupancy odds.
    ///
    /// The search node array is allocated here, once, sized to the grid;
    /// searches only ever reset it. The collision radius defaults to
    /// [`DEFAULT_ROBOT_RADIUS`] plus one cell of margin.
    pub fn new(
        origin: Vec2,
        width: u32,
        height: u32,
        resolution: f32,
        odds: Vec<i8>,
    ) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidMap(format!(
                "dimensions must be positive, got {}x{}",
                width, height
            )));
        }
        if resolution <= 0.0 {
            return Err(GridError::InvalidMap(format!(
                "meters per cell must be positive, got {}",
                resolution
            )));
        }
        let expected_len = (width as usize) * (height as usize);
        if odds.len() != expected_len {
            return Err(GridError::InvalidMap(format!(
                "odds length {} does not match map size {}",
                odds.len(),
                expected_len
            )));
        }

        Ok(Self {
            origin,
            width,
            height,
            resolution,
            odds,
            threshold: DEFAULT_OCCUPANCY_THRESHOLD,
            obstacle_distances: vec![0.0; expected_len],
            collision_radius: DEFAULT_ROBOT_RADIUS + resolution,
            collision_mode: CollisionMode::Exact,
            nodes: vec![SearchNode::default(); expected_len],
        })
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Meters per cell.
    pub fn resolution(&self) -> f32 {
        self.resolution
    }

    pub fn num_cells(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    pub fn odds(&self) -> &[i8] {
        &self.odds
    }

    pub fn threshold(&self) -> i8 {
        self.threshold
    }

    /// Change the odds value at or above which a cell counts as occupied.
    pub fn set_threshold(&mut self, threshold: i8) {
        self.threshold = threshold;
    }

    pub fn collision_radius(&self) -> f32 {
        self.collision_radius
    }

    /// Override the derived collision radius (meters).
    ///
    /// A radius of zero or less makes both collision checks meaningless;
    /// this is not checked here.
    pub fn set_collision_radius(&mut self, radius: f32) {
        self.collision_radius = radius;
    }

    pub fn collision_mode(&self) -> CollisionMode {
        self.collision_mode
    }

    /// Select which collision check the search algorithms use.
    ///
    /// [`CollisionMode::DistanceField`] is only valid after a
    /// [`transform`](crate::transform) has populated the distance field.
    pub fn set_collision_mode(&mut self, mode: CollisionMode) {
        self.collision_mode = mode;
    }

    /// Per-cell distance to the nearest occupied cell, in cell units.
    ///
    /// All zeros until a [`transform`](crate::transform) has run.
    pub fn obstacle_distances(&self) -> &[f32] {
        &self.obstacle_distances
    }

    pub(crate) fn set_obstacle_distances(&mut self, distances: Vec<f32>) {
        debug_assert_eq!(distances.len(), self.num_cells());
        self.obstacle_distances = distances;
    }

    /// Sanity check the loaders run after construction: occupancy array
    /// sized to the grid, positive dimensions, positive resolution.
    pub fn is_loaded(&self) -> bool {
        self.odds.len() == self.num_cells()
            && self.width > 0
            && self.height > 0
            && self.resolution > 0.0
    }

    /// Linear storage index of an in-bounds cell: `x + y * width`.
    #[inline]
    pub fn cell_to_index(&self, cell: Cell) -> usize {
        (cell.x + cell.y * self.width as i32) as usize
    }

    /// Inverse of [`cell_to_index`](Self::cell_to_index).
    #[inline]
    pub fn index_to_cell(&self, idx: usize) -> Cell {
        let w = self.width as usize;
        Cell::new((idx % w) as i32, (idx / w) as i32)
    }

    /// Cell containing a world point. The result may be out of bounds for
    /// points off the map.
    pub fn world_to_cell(&self, point: Vec2) -> Cell {
        let p = (point - self.origin) / self.resolution;
        Cell::new(p.x.floor() as i32, p.y.floor() as i32)
    }

    /// World coordinates of a cell's center.
    pub fn cell_to_world(&self, cell: Cell) -> Vec2 {
        (cell.as_vec2() + Vec2::splat(0.5)) * self.resolution + self.origin
    }

    /// Convert a cell path into world-frame waypoints, one per cell center.
    pub fn path_to_world(&self, path: &[Cell]) -> Vec<Vec2> {
        path.iter().map(|&c| self.cell_to_world(c)).collect()
    }

    #[inline]
    pub fn is_in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && cell.x < self.width as i32 && cell.y < self.height as i32
    }

    #[inline]
    pub fn is_occupied(&self, idx: usize) -> bool {
        self.odds[idx] >= self.threshold
    }

    #[inline]
    pub fn is_cell_occupied(&self, cell: Cell) -> bool {
        self.is_occupied(self.cell_to_index(cell))
    }

    /// In-bounds Moore neighbors of a cell, as linear indices.
    ///
    /// Always returned in the fixed [`NEIGHBOR_OFFSETS`] order.
    pub fn neighbors(&self, idx: usize) -> Vec<usize> {
        let cell = self.index_to_cell(idx);
        let mut neighbors = Vec::with_capacity(8);
        for (dx, dy) in NEIGHBOR_OFFSETS {
            let n = Cell::new(cell.x + dx, cell.y + dy);
            if self.is_in_bounds(n) {
                neighbors.push(self.cell_to_index(n));
            }
        }
        neighbors
    }
}
