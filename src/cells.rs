//! Enumeration of every rendered cell of a grid.

use {
  crate::{
    config::GridConfig,
    field,
    geometry::P2,
    symmetry
  }
};

/// One rendered instance. Recomputed on every pass, never cached.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cell {
  /// Center of the cell in canvas pixels.
  pub position: P2,
  pub col: u32,
  pub row: u32,
  /// Normalized distance to the grid center, see [`field::normalized_distance`].
  pub distance: f64,
  /// `false` for instances produced by symmetry.
  pub original: bool,
  /// Degrees added to the shape's own rotation. Non-zero only for radial copies.
  pub extra_rotation: f64,
}

/// Center of lattice cell `(col, row)`.
pub fn cell_center(grid: &GridConfig, col: u32, row: u32) -> P2 {
  P2::new(
    col as f64 * grid.cell_size + grid.cell_size / 2.0 + grid.offset_x,
    row as f64 * grid.cell_size + grid.cell_size / 2.0 + grid.offset_y
  )
}

/// All cells in emission order: rows top to bottom, columns left to right, and for every
/// base cell its symmetry instances in [`symmetry::expand`] order.
///
/// The position in this sequence is the cell index used by index-keyed fill modes.
/// The iterator holds no state beyond `grid`; call again for a fresh pass.
pub fn enumerate(grid: &GridConfig) -> impl Iterator<Item = Cell> + '_ {
  let center = field::center(grid);
  itertools::iproduct!(0..grid.rows, 0..grid.cols)
    .flat_map(move |(row, col)| {
      let position = cell_center(grid, col, row);
      let base = Cell {
        position,
        col,
        row,
        distance: field::normalized_distance(grid, position),
        original: true,
        extra_rotation: 0.0,
      };
      symmetry::expand(grid, center, base)
    })
}

#[cfg(test)] mod tests;
