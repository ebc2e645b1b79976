//! Plain-text map interchange format.
//!
//! Whitespace-delimited: a five-field header
//!
//! ```text
//! origin_x origin_y width height meters_per_cell
//! ```
//!
//! followed by `width * height` occupancy odds values in row-major order
//! (row 0 first, columns fastest). Tokens may be separated by any
//! whitespace, so writers are free to break lines wherever convenient;
//! [`map_to_string`] puts the header on one line and each row on its own
//! line.

use std::fmt::Write as _;
use std::path::Path;
use std::str::FromStr;

use glam::Vec2;
use log::debug;

use crate::grid::GridGraph;
use crate::types::{Cell, GridError};

fn next_token<'a, T: FromStr>(
    tokens: &mut impl Iterator<Item = &'a str>,
    field: &str,
) -> Result<T, GridError> {
    let token = tokens
        .next()
        .ok_or_else(|| GridError::MalformedMap(format!("missing {}", field)))?;
    token
        .parse()
        .map_err(|_| GridError::MalformedMap(format!("bad {}: {:?}", field, token)))
}

/// Parse a map from its text form.
pub fn parse_map_str(s: &str) -> Result<GridGraph, GridError> {
    let mut tokens = s.split_whitespace();

    let origin_x: f32 = next_token(&mut tokens, "origin_x")?;
    let origin_y: f32 = next_token(&mut tokens, "origin_y")?;
    let width: i64 = next_token(&mut tokens, "width")?;
    let height: i64 = next_token(&mut tokens, "height")?;
    let meters_per_cell: f32 = next_token(&mut tokens, "meters_per_cell")?;

    if width <= 0 || height <= 0 {
        return Err(GridError::InvalidMap(format!(
            "dimensions must be positive, got {}x{}",
            width, height
        )));
    }

    let num_cells = (width as usize) * (height as usize);
    let mut odds = Vec::with_capacity(num_cells);
    for n in 0..num_cells {
        odds.push(next_token::<i8>(&mut tokens, &format!("odds value {}", n))?);
    }

    GridGraph::new(
        Vec2::new(origin_x, origin_y),
        width as u32,
        height as u32,
        meters_per_cell,
        odds,
    )
}

/// Load a map from a text file.
pub fn load_map(path: impl AsRef<Path>) -> Result<GridGraph, GridError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;
    let graph = parse_map_str(&contents)?;
    debug!(
        "loaded {}x{} map at {} m/cell from {}",
        graph.width(),
        graph.height(),
        graph.resolution(),
        path.display()
    );
    Ok(graph)
}

/// Render a map back into the text format. Round-trips through
/// [`parse_map_str`].
pub fn map_to_string(graph: &GridGraph) -> String {
    let mut out = String::new();
    let origin = graph.origin();
    let _ = writeln!(
        out,
        "{} {} {} {} {}",
        origin.x,
        origin.y,
        graph.width(),
        graph.height(),
        graph.resolution()
    );
    for j in 0..graph.height() as i32 {
        for i in 0..graph.width() as i32 {
            if i > 0 {
                out.push(' ');
            }
            let _ = write!(out, "{}", graph.odds()[graph.cell_to_index(Cell::new(i, j))]);
        }
        out.push('\n');
    }
    out
}

/// Write a map to a text file.
pub fn save_map(path: impl AsRef<Path>, graph: &GridGraph) -> Result<(), GridError> {
    std::fs::write(path, map_to_string(graph))?;
    Ok(())
}
