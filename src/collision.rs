//! Robot collision checks against the occupancy grid.
//!
//! Both checks answer the same question for a cell: does a robot disk of
//! [`collision_radius`](crate::GridGraph::collision_radius) centered on the
//! cell intersect any occupied cell?
//!
//! The exact check samples the disk boundary and is always valid. The fast
//! check reads the precomputed obstacle distance field and is only valid
//! after one of the [`transform`](crate::transform) algorithms has run; on a
//! fresh grid the field is all zeros and every cell reads as colliding.

use std::f32::consts::TAU;

use glam::Vec2;

use crate::grid::GridGraph;

/// Which collision check the search algorithms consult.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionMode {
    /// Ray-sampled check against the raw occupancy data.
    #[default]
    Exact,
    /// Threshold on the precomputed obstacle distance field. Requires a
    /// prior distance transform run; this is not checked.
    DistanceField,
}

impl GridGraph {
    /// Collision check used by the searches, dispatched on the grid's
    /// [`CollisionMode`].
    #[inline]
    pub fn in_collision(&self, idx: usize) -> bool {
        match self.collision_mode() {
            CollisionMode::Exact => self.check_collision(idx),
            CollisionMode::DistanceField => self.check_collision_fast(idx),
        }
    }

    /// Exact ray-sampled collision check.
    ///
    /// Samples points on the circle of the collision radius around the
    /// cell's world center at angular steps of `resolution / radius`
    /// radians. Any sample that leaves the map or lands on an occupied cell
    /// means collision. The angular step bounds the accuracy: a thin
    /// occupied wedge can slip between two samples. That is the trade
    /// against scanning the full disk.
    pub fn check_collision(&self, idx: usize) -> bool {
        if self.is_occupied(idx) {
            return true;
        }

        let radius = self.collision_radius();
        let center = self.cell_to_world(self.index_to_cell(idx));
        let dtheta = self.resolution() / radius;

        let mut theta = 0.0f32;
        while theta < TAU {
            let sample = center + radius * Vec2::new(theta.cos(), theta.sin());
            let cell = self.world_to_cell(sample);
            if !self.is_in_bounds(cell) || self.is_cell_occupied(cell) {
                return true;
            }
            theta += dtheta;
        }
        false
    }

    /// Distance-field collision check: collide iff the precomputed obstacle
    /// distance, converted to meters, is within the collision radius.
    ///
    /// Callers must run a distance transform first; see the module docs.
    #[inline]
    pub fn check_collision_fast(&self, idx: usize) -> bool {
        self.obstacle_distances()[idx] * self.resolution() <= self.collision_radius()
    }
}
