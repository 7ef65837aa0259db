//! Immutable inputs of the engine.
//!
//! Each struct maps to one section of the preset format ([`Preset`]). All of them deserialize
//! with `#[serde(default)]`, so any subset of keys is a valid section.

use {
  crate::color::Color,
  serde::{Deserialize, Serialize}
};

mod modes;
mod preset;
#[cfg(test)] mod tests;

pub use modes::*;
pub use preset::Preset;

/// Lattice geometry, in canvas pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GridConfig {
  pub cols: u32,
  pub rows: u32,
  pub cell_size: f64,
  pub offset_x: f64,
  pub offset_y: f64,
  pub symmetry: SymmetryMode,
  /// Number of rotated copies under [`SymmetryMode::Radial`], original included.
  pub radial_count: u32,
}

impl Default for GridConfig {
  fn default() -> Self {
    GridConfig {
      cols: 10,
      rows: 10,
      cell_size: 60.0,
      offset_x: 100.0,
      offset_y: 100.0,
      symmetry: SymmetryMode::None,
      radial_count: 6,
    }
  }
}

impl GridConfig {
  pub const MAX_RADIAL_COUNT: u32 = 360;

  pub fn base_cell_count(&self) -> usize {
    self.cols as usize * self.rows as usize
  }

  /// Copies per base cell under [`SymmetryMode::Radial`], original included:
  /// `radial_count` clamped to `1..=MAX_RADIAL_COUNT`.
  pub fn radial_order(&self) -> u32 {
    self.radial_count.clamp(1, Self::MAX_RADIAL_COUNT)
  }

  /// Instances emitted per base cell. A radial count below 1 still emits the original.
  pub fn instances_per_cell(&self) -> usize {
    match self.symmetry {
      SymmetryMode::None => 1,
      SymmetryMode::Horizontal | SymmetryMode::Vertical => 2,
      SymmetryMode::Both => 4,
      SymmetryMode::Radial => self.radial_order() as usize,
    }
  }

  pub fn cell_count(&self) -> usize {
    self.base_cell_count() * self.instances_per_cell()
  }
}

/// How every cell's shape is sized, turned and painted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShapeConfig {
  #[serde(rename = "type")]
  pub kind: ShapeKind,
  /// Fraction of `cell_size`.
  pub base_size: f64,
  /// Degrees.
  pub base_rotation: f64,
  pub auto_rotate: bool,
  /// Full turns per animation loop; negative turns the other way.
  pub rotation_speed: f64,
  pub scale_mode: ScaleMode,
  /// `scale_min > scale_max` is allowed and inverts the curve.
  pub scale_min: f64,
  pub scale_max: f64,
  pub scale_power: f64,
  pub rotate_mode: RotateMode,
  pub rotate_min: f64,
  pub rotate_max: f64,
  pub fill_mode: FillMode,
  pub fill_color: Color,
  pub fill_opacity: f64,
  pub stroke_mode: StrokeMode,
  pub stroke_color: Color,
  pub stroke_weight: f64,
  pub stroke_opacity: f64,
  pub blend_mode: BlendMode,
}

impl Default for ShapeConfig {
  fn default() -> Self {
    ShapeConfig {
      kind: ShapeKind::Circle,
      base_size: 0.8,
      base_rotation: 0.0,
      auto_rotate: false,
      rotation_speed: 1.0,
      scale_mode: ScaleMode::Linear,
      scale_min: 0.2,
      scale_max: 1.0,
      scale_power: 2.0,
      rotate_mode: RotateMode::None,
      rotate_min: 0.0,
      rotate_max: 180.0,
      fill_mode: FillMode::DistanceGradient,
      fill_color: Color::WHITE,
      fill_opacity: 1.0,
      stroke_mode: StrokeMode::None,
      stroke_color: Color::BLACK,
      stroke_weight: 1.0,
      stroke_opacity: 1.0,
      blend_mode: BlendMode::Normal,
    }
  }
}

/// Coherent-noise modulation of the size curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PatternConfig {
  pub enabled: bool,
  pub seed: i64,
  pub noise_scale: f64,
  pub noise_intensity: f64,
}

impl Default for PatternConfig {
  fn default() -> Self {
    PatternConfig {
      enabled: false,
      seed: 0,
      noise_scale: 1.0,
      noise_intensity: 0.5,
    }
  }
}

/// Looping animation. Time everywhere in the engine is the loop phase in `[0, 1)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnimationConfig {
  pub enabled: bool,
  /// Seconds per loop.
  pub duration: f64,
  pub fps: u32,
  /// Scroll fill colors through the palette over the loop.
  pub color_cycle: bool,
}

impl Default for AnimationConfig {
  fn default() -> Self {
    AnimationConfig {
      enabled: false,
      duration: 4.0,
      fps: 30,
      color_cycle: false,
    }
  }
}

impl AnimationConfig {
  /// Loop phase after `elapsed` seconds. A non-positive duration pins the phase to 0.
  pub fn phase(&self, elapsed: f64) -> f64 {
    if !(self.duration > 0.0) || !elapsed.is_finite() {
      return 0.0;
    }
    let phase = (elapsed / self.duration).rem_euclid(1.0);
    // rem_euclid rounds tiny negative inputs up to exactly 1.0
    if phase < 1.0 { phase } else { 0.0 }
  }

  /// Frames in one loop, at least 1.
  pub fn frame_count(&self) -> usize {
    let frames = (self.duration * self.fps as f64).round();
    if frames >= 1.0 { frames as usize } else { 1 }
  }

  /// Phase of every frame of one loop: `i / frame_count`.
  pub fn frame_times(&self) -> impl Iterator<Item = f64> + Clone {
    let count = self.frame_count();
    (0..count).map(move |i| i as f64 / count as f64)
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CanvasConfig {
  pub background: Color,
  pub width: u32,
  pub height: u32,
}

impl Default for CanvasConfig {
  fn default() -> Self {
    CanvasConfig {
      background: Color::rgb(0x11, 0x11, 0x11),
      width: 800,
      height: 800,
    }
  }
}
