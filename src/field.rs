//! Normalized distance from the pattern center.

use {
  crate::{
    config::GridConfig,
    geometry::{P2, V2}
  }
};

/// Center of the grid's bounding box, offsets included.
pub fn center(grid: &GridConfig) -> P2 {
  P2::new(
    grid.cols as f64 * grid.cell_size / 2.0 + grid.offset_x,
    grid.rows as f64 * grid.cell_size / 2.0 + grid.offset_y
  )
}

/// Half of the bounding box diagonal: the distance from the center to any corner.
pub fn half_diagonal(grid: &GridConfig) -> f64 {
  V2::new(
    grid.cols as f64 * grid.cell_size / 2.0,
    grid.rows as f64 * grid.cell_size / 2.0
  ).length()
}

/// Distance from `point` to the center over the half-diagonal, clamped to `[0, 1]`:
/// 0 at the center, 1 at the corners and beyond.
/// Degenerate grids (no cells, zero or non-finite cell size) yield 0 everywhere.
pub fn normalized_distance(grid: &GridConfig, point: P2) -> f64 {
  let max_dist = half_diagonal(grid);
  if !(max_dist > 0.0) || !max_dist.is_finite() {
    return 0.0;
  }
  let dist = (point - center(grid)).length() / max_dist;
  if dist.is_nan() { 0.0 } else { dist.clamp(0.0, 1.0) }
}
