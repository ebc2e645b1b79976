pub mod constants;
pub mod error;
pub mod geometry;

pub use constants::*;
pub use error::GridError;
pub use geometry::{cell_distance, Cell, NEIGHBOR_OFFSETS};
