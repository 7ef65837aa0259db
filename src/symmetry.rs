//! Replication of a base cell under the active [`SymmetryMode`].
//!
//! The order of the returned instances is part of the contract: index-keyed fill modes
//! color cells by their global emission position, so reordering here recolors every preset.

use {
  crate::{
    cells::Cell,
    config::{GridConfig, SymmetryMode},
    geometry::{P2, V2}
  },
  euclid::{Angle, Rotation2D}
};

/// The original first, then the copies:
/// - `None`: `[o]`
/// - `Horizontal`: `[o, h]`
/// - `Vertical`: `[o, v]`
/// - `Both`: `[o, h, v, hv]`
/// - `Radial`: `[o, r1, .., r(n-1)]`, `ri` turned by `i * 360 / n` degrees around `center`,
///   with `n` from [`GridConfig::radial_order`].
///
/// Every copy carries the base cell's distance unchanged.
pub fn expand(grid: &GridConfig, center: P2, base: Cell) -> Vec<Cell> {
  let mut out = Vec::with_capacity(grid.instances_per_cell());
  out.push(Cell { original: true, ..base });

  let copy = |position: P2, col: u32, row: u32| Cell { position, col, row, original: false, ..base };
  let mirror_col = grid.cols.saturating_sub(1).saturating_sub(base.col);
  let mirror_row = grid.rows.saturating_sub(1).saturating_sub(base.row);
  let mirror_x = 2.0 * center.x - base.position.x;
  let mirror_y = 2.0 * center.y - base.position.y;

  match grid.symmetry {
    SymmetryMode::None => {}
    SymmetryMode::Horizontal => {
      out.push(copy(P2::new(mirror_x, base.position.y), mirror_col, base.row));
    }
    SymmetryMode::Vertical => {
      out.push(copy(P2::new(base.position.x, mirror_y), base.col, mirror_row));
    }
    SymmetryMode::Both => {
      out.push(copy(P2::new(mirror_x, base.position.y), mirror_col, base.row));
      out.push(copy(P2::new(base.position.x, mirror_y), base.col, mirror_row));
      out.push(copy(P2::new(mirror_x, mirror_y), mirror_col, mirror_row));
    }
    SymmetryMode::Radial => {
      let count = grid.radial_order();
      let offset: V2 = base.position - center;
      let step = 360.0 / count as f64;
      out.extend((1..count).map(|i| {
        let turn = i as f64 * step;
        // a cell on the center stays there
        let position = center + Rotation2D::new(Angle::degrees(turn)).transform_vector(offset);
        Cell { extra_rotation: turn, ..copy(position, base.col, base.row) }
      }));
    }
  }
  out
}
