//! Per-channel blend modes, applied in normalized sRGB byte space.

use {
  crate::{color::Color, config::BlendMode},
  image::Rgba
};

fn blend_channel(mode: BlendMode, b: f64, s: f64) -> f64 {
  match mode {
    BlendMode::Normal => s,
    BlendMode::Multiply => b * s,
    BlendMode::Screen => 1.0 - (1.0 - b) * (1.0 - s),
    BlendMode::Overlay => if b <= 0.5 {
      2.0 * b * s
    } else {
      1.0 - 2.0 * (1.0 - b) * (1.0 - s)
    },
    BlendMode::Add => (b + s).min(1.0),
    BlendMode::Difference => (b - s).abs(),
    BlendMode::Exclusion => b + s - 2.0 * b * s,
    BlendMode::Lightest => b.max(s),
    BlendMode::Darkest => b.min(s),
  }
}

/// Blend `src` onto `dst` with `mode`, then mix the result over `dst` by `alpha`.
pub fn composite(mode: BlendMode, dst: Rgba<u8>, src: Color, alpha: f64) -> Rgba<u8> {
  let alpha = alpha.clamp(0.0, 1.0);
  let to_byte = |v: f64| (v * 255.0).round().clamp(0.0, 255.0) as u8;
  let mut out = dst;
  (0..3).for_each(|c| {
    let b = dst.0[c] as f64 / 255.0;
    let s = src.0[c] as f64 / 255.0;
    let mixed = blend_channel(mode, b, s);
    out.0[c] = to_byte(b + (mixed - b) * alpha);
  });
  let a = dst.0[3] as f64 / 255.0;
  out.0[3] = to_byte(a + (1.0 - a) * alpha);
  out
}
