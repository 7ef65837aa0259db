//! Eight-fold radial bloom of noisy hexagons, written as a single PNG.

use {
  grid_field::{
    color::{Color, Palette},
    config::{BlendMode, FillMode, Preset, RotateMode, ScaleMode, ShapeKind, SymmetryMode},
    drawing,
    noise::PerlinSampler
  },
  anyhow::Result
};

fn main() -> Result<()> {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

  let mut preset = Preset::default();
  preset.canvas.width = 1024;
  preset.canvas.height = 1024;
  preset.canvas.background = Color::rgb(12, 10, 24);

  preset.grid.cols = 14;
  preset.grid.rows = 14;
  preset.grid.cell_size = 40.0;
  preset.grid.offset_x = 512.0 - 14.0 * 40.0 / 2.0;
  preset.grid.offset_y = 512.0 - 14.0 * 40.0 / 2.0;
  preset.grid.symmetry = SymmetryMode::Radial;
  preset.grid.radial_count = 8;

  preset.shape.kind = ShapeKind::Hexagon;
  preset.shape.scale_mode = ScaleMode::EaseOut;
  preset.shape.scale_power = 3.0;
  preset.shape.rotate_mode = RotateMode::EaseOut;
  preset.shape.rotate_max = 120.0;
  preset.shape.fill_mode = FillMode::DistanceGradient;
  preset.shape.fill_opacity = 0.6;
  preset.shape.blend_mode = BlendMode::Screen;

  preset.pattern.enabled = true;
  preset.pattern.seed = 7;
  preset.pattern.noise_scale = 0.8;

  preset.palette = Palette::new(
    ["#ffbe0b", "#fb5607", "#ff006e", "#8338ec", "#3a86ff"].iter()
      .map(|hex| hex.parse())
      .collect::<Result<Vec<Color>, _>>()?
  );

  drawing::export_png(&preset, &PerlinSampler::default(), 0.0, "radial_bloom.png")?;
  Ok(())
}
