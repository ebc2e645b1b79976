pub mod image;
pub mod text;

pub use self::image::load_image_map;
pub use self::text::{load_map, map_to_string, parse_map_str, save_map};
