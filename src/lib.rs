pub mod collision;
pub mod grid;
pub mod loaders;
pub mod search;
pub mod transform;
pub mod types;
pub mod visualization;

pub use collision::CollisionMode;
pub use grid::GridGraph;
pub use loaders::{load_image_map, load_map, save_map};
pub use search::{
    a_star_search, breadth_first_search, depth_first_search, iterative_deepening_search,
    iterative_deepening_search_limited, SearchResult,
};
pub use transform::TransformAlgorithm;
pub use types::{Cell, GridError};
