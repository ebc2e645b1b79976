//! Geometric value types shared across the grid and search APIs.

use glam::IVec2;

/// Discrete grid coordinate: `x` is the column, `y` is the row.
///
/// Cells are plain values and may lie outside the grid, e.g. when converting
/// a world point that is off the map. Check with
/// [`GridGraph::is_in_bounds`](crate::GridGraph::is_in_bounds) before
/// indexing.
pub type Cell = IVec2;

/// Moore-neighborhood offsets `(dx, dy)` in the fixed expansion order used
/// by every search algorithm. The order is observable behavior: it decides
/// tie-breaking between equally good paths.
pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Straight-line distance between two cells, in cell units.
#[inline]
pub fn cell_distance(a: Cell, b: Cell) -> f32 {
    (a - b).as_vec2().length()
}
