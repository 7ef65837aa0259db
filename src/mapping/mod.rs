//! Distance to render parameters.
//!
//! A [`Mapper`] borrows the configuration of one pass and turns each [`Cell`] into an
//! [`Instance`]: size, rotation, fill and stroke, ready for a renderer. It keeps no state,
//! so one mapper can serve any number of threads or frames.

use {
  crate::{
    cells::{self, Cell},
    color::{Color, Palette},
    config::{
      AnimationConfig, BlendMode, FillMode, GridConfig, PatternConfig, Preset, ShapeConfig,
      ShapeKind, StrokeMode
    },
    geometry::P2,
    noise::{self, NoiseSampler}
  }
};


/// Everything a renderer needs to draw one cell.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Instance {
  pub position: P2,
  /// Diameter in canvas pixels.
  pub size: f64,
  /// Degrees, clockwise on screen, unbounded.
  pub rotation: f64,
  pub fill: Color,
  pub fill_opacity: f64,
  pub stroke: Option<Color>,
  pub stroke_opacity: f64,
  pub stroke_weight: f64,
  pub blend_mode: BlendMode,
  pub kind: ShapeKind,
}

pub struct Mapper<'a, N> {
  pub grid: &'a GridConfig,
  pub shape: &'a ShapeConfig,
  pub pattern: &'a PatternConfig,
  pub animation: &'a AnimationConfig,
  pub palette: &'a Palette,
  pub noise: &'a N,
}

impl<N> Clone for Mapper<'_, N> {
  fn clone(&self) -> Self { *self }
}
impl<N> Copy for Mapper<'_, N> {}

impl<'a, N: NoiseSampler> Mapper<'a, N> {
  pub fn new(preset: &'a Preset, noise: &'a N) -> Self {
    Mapper {
      grid: &preset.grid,
      shape: &preset.shape,
      pattern: &preset.pattern,
      animation: &preset.animation,
      palette: &preset.palette,
      noise
    }
  }

  /// Shape diameter: `cell_size * base_size * scale`, where `scale` runs from `scale_max` at
  /// the center to `scale_min` at the corners along the scale curve, then is multiplied by
  /// `0.5 + pattern * 0.5` when the noise pattern is on. The result is not clamped.
  pub fn size(&self, distance: f64, time: f64) -> f64 {
    let shape = self.shape;
    let base = self.grid.cell_size * shape.base_size;
    let t = 1.0 - distance;
    let eased = shape.scale_mode.ease(t, shape.scale_power);
    let mut scale = shape.scale_min + (shape.scale_max - shape.scale_min) * eased;
    if self.pattern.enabled {
      let pattern = noise::pattern_value(self.noise, self.pattern, distance, time);
      scale *= 0.5 + pattern * 0.5;
    }
    base * scale
  }

  /// Rotation in degrees, before any symmetry turn. See [`Mapper::instance`] for the
  /// complete rotation of a cell.
  pub fn rotation(&self, distance: f64, base_rotation: f64, time: f64) -> f64 {
    let shape = self.shape;
    let mut rotation = match shape.rotate_mode.ease(1.0 - distance) {
      Some(eased) => base_rotation + shape.rotate_min + (shape.rotate_max - shape.rotate_min) * eased,
      None => base_rotation
    };
    if shape.auto_rotate {
      rotation += time * 360.0 * shape.rotation_speed;
    }
    rotation
  }

  /// `index` is the cell's position in [`cells::enumerate`] order.
  pub fn fill_color(&self, distance: f64, index: usize, time: f64) -> Color {
    let palette = self.palette;
    let cycle = self.animation.color_cycle;
    let shift = if cycle && !palette.is_empty() {
      (time.rem_euclid(1.0) * palette.len() as f64).floor() as usize
    } else {
      0
    };
    let color = match self.shape.fill_mode {
      FillMode::Solid => None,
      FillMode::DistanceGradient => {
        let mut t = distance;
        if cycle {
          // wrap past the last swatch only, so distance 1 at time 0 stays on it
          t += time.rem_euclid(1.0);
          if t > 1.0 { t -= 1.0; }
        }
        palette.gradient(t)
      }
      FillMode::PaletteCycle => palette.cycle(index.wrapping_add(shift)),
      FillMode::RandomByIndex => palette.scatter(index.wrapping_add(shift)),
    };
    color.unwrap_or(self.shape.fill_color)
  }

  /// `None` when the stroke is off. Non-solid strokes follow the fill at time 0, so strokes
  /// never take part in color animation.
  pub fn stroke_color(&self, distance: f64, index: usize) -> Option<Color> {
    match self.shape.stroke_mode {
      StrokeMode::None => None,
      StrokeMode::Solid => Some(self.shape.stroke_color),
      StrokeMode::MatchFill => Some(self.fill_color(distance, index, 0.0)),
    }
  }

  pub fn instance(&self, cell: &Cell, index: usize, time: f64) -> Instance {
    let shape = self.shape;
    Instance {
      position: cell.position,
      size: self.size(cell.distance, time),
      rotation: self.rotation(cell.distance, shape.base_rotation, time) + cell.extra_rotation,
      fill: self.fill_color(cell.distance, index, time),
      fill_opacity: shape.fill_opacity,
      stroke: self.stroke_color(cell.distance, index),
      stroke_opacity: shape.stroke_opacity,
      stroke_weight: shape.stroke_weight,
      blend_mode: shape.blend_mode,
      kind: shape.kind,
    }
  }

  /// Every cell of the grid at loop phase `time`, in emission order.
  pub fn instances(&self, time: f64) -> impl Iterator<Item = Instance> + 'a {
    let mapper = *self;
    cells::enumerate(self.grid)
      .enumerate()
      .map(move |(index, cell)| mapper.instance(&cell, index, time))
  }
}
