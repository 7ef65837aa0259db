use {
  super::*,
  crate::color::{Color, Palette},
  anyhow::Result,
  rstest::rstest
};

fn exotic() -> Preset {
  Preset {
    grid: GridConfig {
      cols: 7,
      rows: 3,
      cell_size: 33.333333333333336,
      offset_x: -12.5,
      offset_y: 0.1 + 0.2,
      symmetry: SymmetryMode::Radial,
      radial_count: 9,
    },
    shape: ShapeConfig {
      kind: ShapeKind::Hexagon,
      base_size: 0.7071067811865476,
      base_rotation: -45.0,
      auto_rotate: true,
      rotation_speed: -0.25,
      scale_mode: ScaleMode::Swirl,
      scale_min: 1.5,
      scale_max: 0.25,
      scale_power: 3.0,
      rotate_mode: RotateMode::EaseOut,
      rotate_min: 10.0,
      rotate_max: 1e-9,
      fill_mode: FillMode::RandomByIndex,
      fill_color: Color::rgb(1, 2, 3),
      fill_opacity: 0.3,
      stroke_mode: StrokeMode::MatchFill,
      stroke_color: Color::rgb(250, 128, 0),
      stroke_weight: 2.5,
      stroke_opacity: 0.6,
      blend_mode: BlendMode::Exclusion,
    },
    pattern: PatternConfig {
      enabled: true,
      seed: -4242,
      noise_scale: std::f64::consts::PI,
      noise_intensity: 0.123456789,
    },
    animation: AnimationConfig {
      enabled: true,
      duration: 2.75,
      fps: 24,
      color_cycle: true,
    },
    palette: Palette::new(vec![
      Color::rgb(0, 0, 0),
      Color::rgb(255, 255, 255),
      Color::rgb(18, 52, 86),
      Color::rgb(171, 205, 239),
      Color::rgb(1, 35, 69),
    ]),
    canvas: CanvasConfig {
      background: Color::rgb(0xfe, 0xdc, 0xba),
      width: 1920,
      height: 1080,
    },
  }
}

#[test] fn round_trip_is_lossless() -> Result<()> {
  let preset = exotic();
  let json = preset.to_json()?;
  assert_eq!(Preset::from_json(&json)?, preset);
  Ok(())
}

#[test] fn layout_uses_camel_case_sections() -> Result<()> {
  let value: serde_json::Value = serde_json::from_str(&exotic().to_json()?)?;
  assert_eq!(value["grid"]["cellSize"], 33.333333333333336);
  assert_eq!(value["grid"]["symmetry"], "radial");
  assert_eq!(value["shape"]["type"], "hexagon");
  assert_eq!(value["shape"]["fillMode"], "randomByIndex");
  assert_eq!(value["palette"]["colors"][2], "#123456");
  assert_eq!(value["canvas"]["background"], "#fedcba");
  assert_eq!(value["animation"]["colorCycle"], true);
  Ok(())
}

#[test] fn partial_preset_keeps_current_values() -> Result<()> {
  let current = exotic();
  let merged = current.merge_json(r##"{
    "grid": { "cols": 12 },
    "shape": { "fillColor": "#00ff00", "strokeWeight": null },
    "palette": { "colors": ["#ffffff", "#000000"] }
  }"##)?;
  assert_eq!(merged.grid.cols, 12);
  assert_eq!(merged.grid.rows, current.grid.rows);
  assert_eq!(merged.grid.symmetry, current.grid.symmetry);
  assert_eq!(merged.shape.fill_color, Color::rgb(0, 255, 0));
  assert_eq!(merged.shape.stroke_weight, current.shape.stroke_weight);
  assert_eq!(merged.shape.kind, current.shape.kind);
  assert_eq!(merged.palette.colors, vec![Color::WHITE, Color::BLACK]);
  assert_eq!(merged.pattern, current.pattern);
  assert_eq!(merged.canvas, current.canvas);
  Ok(())
}

#[test] fn empty_object_is_defaults() -> Result<()> {
  assert_eq!(Preset::from_json("{}")?, Preset::default());
  Ok(())
}

#[test] fn unknown_keys_are_ignored() -> Result<()> {
  let preset = Preset::from_json(r#"{ "version": 3, "grid": { "cols": 4, "jitter": 0.5 } }"#)?;
  assert_eq!(preset.grid.cols, 4);
  Ok(())
}

#[rstest]
#[case(r#"{ "grid": { "symmetry": "kaleidoscope" } }"#)]
#[case(r#"{ "grid": { "symmetry": 3 } }"#)]
fn unknown_symmetry_is_none(#[case] json: &str) -> Result<()> {
  let current = exotic();
  assert_eq!(current.merge_json(json)?.grid.symmetry, SymmetryMode::None);
  Ok(())
}

#[test] fn unknown_modes_fall_back() -> Result<()> {
  let preset = exotic().merge_json(r#"{ "shape": {
    "type": "svg",
    "scaleMode": "bounce",
    "rotateMode": "spin",
    "fillMode": "hsl",
    "strokeMode": "dashed",
    "blendMode": "burn"
  } }"#)?;
  assert_eq!(preset.shape.kind, ShapeKind::Circle);
  assert_eq!(preset.shape.scale_mode, ScaleMode::Linear);
  assert_eq!(preset.shape.rotate_mode, RotateMode::None);
  assert_eq!(preset.shape.fill_mode, FillMode::Solid);
  assert_eq!(preset.shape.stroke_mode, StrokeMode::None);
  assert_eq!(preset.shape.blend_mode, BlendMode::Normal);
  Ok(())
}

#[test] fn mode_names_are_case_insensitive() {
  assert_eq!(ScaleMode::from_name("EASEINOUT"), ScaleMode::EaseInOut);
  assert_eq!(FillMode::from_name(" paletteCycle "), FillMode::PaletteCycle);
  for mode in BlendMode::ALL {
    assert_eq!(BlendMode::from_name(mode.name()), *mode);
  }
}

#[test] fn malformed_color_is_an_error() {
  assert!(Preset::from_json(r##"{ "canvas": { "background": "#zzz" } }"##).is_err());
  assert!(Preset::from_json("not json").is_err());
}

#[rstest]
#[case(SymmetryMode::None, 1)]
#[case(SymmetryMode::Horizontal, 2)]
#[case(SymmetryMode::Vertical, 2)]
#[case(SymmetryMode::Both, 4)]
#[case(SymmetryMode::Radial, 5)]
fn cell_count_per_symmetry(#[case] symmetry: SymmetryMode, #[case] per_cell: usize) {
  let grid = GridConfig { cols: 3, rows: 4, symmetry, radial_count: 5, ..GridConfig::default() };
  assert_eq!(grid.cell_count(), 12 * per_cell);
}

#[rstest]
#[case(0, 1)]
#[case(1, 1)]
#[case(12, 12)]
#[case(360, 360)]
#[case(4_000_000_000, 360)]
fn radial_order_is_clamped(#[case] radial_count: u32, #[case] order: u32) -> Result<()> {
  let preset = Preset::from_json(&format!(
    r#"{{ "grid": {{ "cols": 2, "rows": 2, "symmetry": "radial", "radialCount": {} }} }}"#,
    radial_count
  ))?;
  assert_eq!(preset.grid.radial_count, radial_count);
  assert_eq!(preset.grid.radial_order(), order);
  assert_eq!(preset.grid.cell_count(), 4 * order as usize);
  Ok(())
}

#[test] fn animation_phase_wraps() {
  let animation = AnimationConfig { duration: 4.0, ..AnimationConfig::default() };
  assert_eq!(animation.phase(0.0), 0.0);
  assert_eq!(animation.phase(1.0), 0.25);
  assert_eq!(animation.phase(5.0), 0.25);
  assert_eq!(animation.phase(-1.0), 0.75);
  assert_eq!(AnimationConfig { duration: 0.0, ..animation }.phase(3.0), 0.0);
}

#[test] fn frame_times_cover_one_loop() {
  let animation = AnimationConfig { duration: 0.5, fps: 8, ..AnimationConfig::default() };
  assert_eq!(animation.frame_count(), 4);
  assert_eq!(animation.frame_times().collect::<Vec<_>>(), vec![0.0, 0.25, 0.5, 0.75]);
  let still = AnimationConfig { duration: 0.0, ..animation };
  assert_eq!(still.frame_times().collect::<Vec<_>>(), vec![0.0]);
}
