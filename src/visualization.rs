//! Plan files and map previews for external rendering tools.
//!
//! A plan file captures one search call for a navigation viewer to replay:
//!
//! ```text
//! algorithm
//! start_x start_y goal_x goal_y
//! path <N>
//! x y          (N lines, start to goal; N = 0 when no path was found)
//! visited <M>
//! x y          (M lines, in expansion order, for search animations)
//! map
//! <the text map format, see loaders::text>
//! ```

use std::fmt::Write as _;
use std::path::Path;

use image::{GrayImage, Luma};

use crate::grid::GridGraph;
use crate::loaders::text::map_to_string;
use crate::search::SearchResult;
use crate::types::{Cell, GridError};

/// Render one search call into the plan-file format.
pub fn plan_to_string(
    graph: &GridGraph,
    algorithm: &str,
    start: Cell,
    goal: Cell,
    result: &SearchResult,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", algorithm);
    let _ = writeln!(out, "{} {} {} {}", start.x, start.y, goal.x, goal.y);

    let _ = writeln!(out, "path {}", result.path.len());
    for cell in &result.path {
        let _ = writeln!(out, "{} {}", cell.x, cell.y);
    }

    let _ = writeln!(out, "visited {}", result.visited.len());
    for cell in &result.visited {
        let _ = writeln!(out, "{} {}", cell.x, cell.y);
    }

    let _ = writeln!(out, "map");
    out.push_str(&map_to_string(graph));
    out
}

/// Write a search call's plan file to disk.
pub fn write_plan_file(
    path: impl AsRef<Path>,
    graph: &GridGraph,
    algorithm: &str,
    start: Cell,
    goal: Cell,
    result: &SearchResult,
) -> Result<(), GridError> {
    std::fs::write(path, plan_to_string(graph, algorithm, start, goal, result))?;
    Ok(())
}

/// Convert an occupancy grid to a grayscale preview.
///
/// Occupied cells come out dark, free cells light, unknown mid-gray. The
/// output is oriented like typical map images: map row 0 is written to the
/// bottom of the image.
pub fn grid_to_image(graph: &GridGraph) -> GrayImage {
    let width = graph.width();
    let height = graph.height();
    let mut img = GrayImage::new(width, height);

    for y_img in 0..height {
        let y_grid = (height - 1 - y_img) as i32;
        for x in 0..width {
            let idx = graph.cell_to_index(Cell::new(x as i32, y_grid));
            let px = odds_to_gray(graph.odds()[idx]);
            img.put_pixel(x, y_img, Luma([px]));
        }
    }

    img
}

fn odds_to_gray(odds: i8) -> u8 {
    // Linear ramp: strongly free -> white, strongly occupied -> black,
    // unknown (0) -> mid-gray.
    (127 - odds as i16).clamp(0, 255) as u8
}
