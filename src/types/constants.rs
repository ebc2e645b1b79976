/// Log-odds written by loaders for definitely-occupied cells.
pub const ODDS_OCCUPIED: i8 = 127;
/// Log-odds written by loaders for definitely-free cells.
pub const ODDS_FREE: i8 = -127;
/// Log-odds for unobserved cells.
pub const ODDS_UNKNOWN: i8 = 0;

/// Cells with odds at or above this count as occupied unless overridden.
pub const DEFAULT_OCCUPANCY_THRESHOLD: i8 = 0;

/// Base robot radius in meters. The derived collision radius adds one cell
/// of margin on top of this.
pub const DEFAULT_ROBOT_RADIUS: f32 = 0.15;

/// Path cost of a cell no search has reached yet.
pub const COST_UNREACHED: f32 = 1e6;
/// Parent sentinel for root or unreached cells.
pub const NO_PARENT: i32 = -1;

pub const DEFAULT_OCCUPIED_THRESH: f32 = 0.65;
pub const DEFAULT_FREE_THRESH: f32 = 0.196;
