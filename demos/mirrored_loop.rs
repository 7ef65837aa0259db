//! Four-way mirrored grid of spinning squares, one animation loop as numbered PNG frames.
//! The preset is also saved next to the frames so the loop can be re-rendered from the CLI.

use {
  grid_field::{
    config::{FillMode, Preset, StrokeMode},
    drawing,
    noise::PerlinSampler
  },
  anyhow::{Context, Result}
};

const PRESET: &str = r##"{
  "grid": { "cols": 12, "rows": 12, "cellSize": 50, "offsetX": 0, "offsetY": 0, "symmetry": "both" },
  "shape": {
    "type": "square",
    "baseSize": 0.7,
    "scaleMode": "easeInOut",
    "autoRotate": true,
    "rotationSpeed": 0.25,
    "fillMode": "paletteCycle",
    "strokeMode": "matchFill",
    "strokeWeight": 2,
    "fillOpacity": 0.4
  },
  "animation": { "enabled": true, "duration": 2, "fps": 24, "colorCycle": true },
  "canvas": { "background": "#0b0b0b", "width": 600, "height": 600 }
}"##;

fn main() -> Result<()> {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

  let preset = Preset::from_json(PRESET)?;
  assert_eq!(preset.shape.fill_mode, FillMode::PaletteCycle);
  assert_eq!(preset.shape.stroke_mode, StrokeMode::MatchFill);

  let dir = std::path::Path::new("mirrored_loop");
  drawing::export_sequence(&preset, &PerlinSampler::default(), dir)
    .context("rendering loop")?;
  preset.save(dir.join("preset.json"))?;
  Ok(())
}
