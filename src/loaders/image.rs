//! Image-backed map loader.
//!
//! Loads a grid from a YAML metadata file pointing at a grayscale map
//! image:
//!
//! ```yaml
//! image: floor.png
//! resolution: 0.05
//! origin: [-10.0, -10.0]
//! occupied_thresh: 0.65
//! free_thresh: 0.196
//! negate: false
//! ```
//!
//! Dark pixels read as occupied unless `negate` flips the sense. Pixels
//! whose occupancy exceeds `occupied_thresh` become [`ODDS_OCCUPIED`],
//! pixels below `free_thresh` become [`ODDS_FREE`], everything in between
//! stays [`ODDS_UNKNOWN`]. Image rows are flipped so the top of the image
//! is the highest map row and the picture appears upright in world
//! coordinates.

use std::path::{Path, PathBuf};

use glam::Vec2;
use log::debug;
use serde::Deserialize;

use crate::grid::GridGraph;
use crate::types::{
    GridError, DEFAULT_FREE_THRESH, DEFAULT_OCCUPIED_THRESH, ODDS_FREE, ODDS_OCCUPIED,
    ODDS_UNKNOWN,
};

#[derive(Debug, Deserialize)]
struct ImageMapMetadata {
    image: String,
    resolution: f32,
    origin: [f32; 2],
    #[serde(
        default = "default_occupied_thresh",
        deserialize_with = "deserialize_threshold"
    )]
    occupied_thresh: f32,
    #[serde(
        default = "default_free_thresh",
        deserialize_with = "deserialize_threshold"
    )]
    free_thresh: f32,
    #[serde(default)]
    negate: bool,
}

fn default_occupied_thresh() -> f32 {
    DEFAULT_OCCUPIED_THRESH
}

fn default_free_thresh() -> f32 {
    DEFAULT_FREE_THRESH
}

fn deserialize_threshold<'de, D>(deserializer: D) -> Result<f32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = f32::deserialize(deserializer)?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(serde::de::Error::custom(
            "thresholds must be in the range [0.0, 1.0]",
        ))
    }
}

/// Load an occupancy grid from a YAML metadata file and its map image.
pub fn load_image_map(yaml_path: impl AsRef<Path>) -> Result<GridGraph, GridError> {
    let yaml_path = yaml_path.as_ref();
    let yaml_str = std::fs::read_to_string(yaml_path)?;
    let metadata: ImageMapMetadata = serde_yaml::from_str(&yaml_str)?;

    if metadata.occupied_thresh <= metadata.free_thresh {
        return Err(GridError::InvalidMap(
            "occupied_thresh must be greater than free_thresh".to_string(),
        ));
    }

    let image_path = resolve_image_path(yaml_path, &metadata.image);
    let image = image::open(&image_path)?.to_luma8();
    let (width, height) = image.dimensions();

    let mut odds = vec![ODDS_UNKNOWN; (width as usize) * (height as usize)];
    for y in 0..height {
        for x in 0..width {
            let lightness = image.get_pixel(x, y).0[0] as f32 / 255.0;
            let occupancy = if metadata.negate {
                lightness
            } else {
                1.0 - lightness
            };

            let value = if occupancy >= metadata.occupied_thresh {
                ODDS_OCCUPIED
            } else if occupancy <= metadata.free_thresh {
                ODDS_FREE
            } else {
                ODDS_UNKNOWN
            };

            let grid_y = height - 1 - y;
            odds[(grid_y as usize) * (width as usize) + (x as usize)] = value;
        }
    }

    let graph = GridGraph::new(
        Vec2::new(metadata.origin[0], metadata.origin[1]),
        width,
        height,
        metadata.resolution,
        odds,
    )?;
    debug!(
        "loaded {}x{} map at {} m/cell from image {}",
        width,
        height,
        metadata.resolution,
        image_path.display()
    );
    Ok(graph)
}

fn resolve_image_path(yaml_path: &Path, image_ref: &str) -> PathBuf {
    let image_path = PathBuf::from(image_ref);
    if image_path.is_absolute() {
        return image_path;
    }

    match yaml_path.parent() {
        Some(parent) => parent.join(image_path),
        None => image_path,
    }
}
