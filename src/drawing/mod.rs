//! Raster renderer for [`Instance`]s.
//!
//! Shapes are rasterized through their signed distance function with one pixel of
//! anti-aliasing: fill first, then a stroke band of `stroke_weight` centered on the outline.

use {
  crate::{
    config::Preset,
    error::Result,
    geometry::{BoundingBox, CanvasSpace, Shape, UnitShape, P2, V2},
    mapping::{Instance, Mapper},
    noise::NoiseSampler,
    sdf::SDF
  },
  euclid::{Angle, Box2D, Size2D},
  image::{Rgba, RgbaImage},
  std::path::{Path, PathBuf}
};

pub mod blend;

pub trait Draw<Backend> {
  fn draw(&self, image: &mut Backend);
}

impl Draw<RgbaImage> for Instance {
  fn draw(&self, image: &mut RgbaImage) {
    let size = self.size.abs();
    if !(size > 0.0) || !size.is_finite() || !self.position.x.is_finite() || !self.position.y.is_finite() {
      return;
    }
    let shape = UnitShape::from(self.kind)
      .rotate(Angle::degrees(self.rotation))
      .scale(V2::splat(size / 2.0))
      .translate(self.position.to_vector());
    paint(self, &shape, image);
  }
}

// 0.5 px either side of the outline
fn coverage(sdf: f64) -> f64 {
  (0.5 - sdf).clamp(0.0, 1.0)
}

fn paint(instance: &Instance, shape: &impl Shape, image: &mut RgbaImage) {
  let stroke = instance.stroke
    .filter(|_| instance.stroke_weight > 0.0 && instance.stroke_opacity > 0.0);
  let half_weight = if stroke.is_some() { instance.stroke_weight / 2.0 } else { 0.0 };
  let margin = half_weight + 1.0;

  let canvas = Box2D::<f64, CanvasSpace>::from_size(Size2D::new(image.width() as f64, image.height() as f64));
  let bounds = match shape.bounding_box()
    .inflate(margin, margin)
    .intersection(&canvas) {
    Some(bounds) => bounds.round_out().to_u32(),
    None => return // entirely off canvas
  };

  itertools::iproduct!(bounds.y_range(), bounds.x_range())
    .for_each(|(y, x)| {
      let sdf = shape.sdf(P2::new(x as f64 + 0.5, y as f64 + 0.5));
      let pixel = image.get_pixel_mut(x, y);
      let fill_alpha = coverage(sdf) * instance.fill_opacity;
      if fill_alpha > 0.0 {
        *pixel = blend::composite(instance.blend_mode, *pixel, instance.fill, fill_alpha);
      }
      if let Some(color) = stroke {
        let stroke_alpha = coverage(sdf.abs() - half_weight) * instance.stroke_opacity;
        if stroke_alpha > 0.0 {
          *pixel = blend::composite(instance.blend_mode, *pixel, color, stroke_alpha);
        }
      }
    });
}

/// Canvas of `preset.canvas` size filled with its background, every cell drawn at loop
/// phase `time` in emission order.
pub fn render_frame(preset: &Preset, noise: &impl NoiseSampler, time: f64) -> RgbaImage {
  let canvas = &preset.canvas;
  let [r, g, b] = canvas.background.0;
  let mut image = RgbaImage::from_pixel(canvas.width, canvas.height, Rgba([r, g, b, 255]));
  let count = Mapper::new(preset, noise)
    .instances(time)
    .fold(0usize, |count, instance| {
      instance.draw(&mut image);
      count + 1
    });
  log::debug!("rendered {} cells at t = {:.4}", count, time);
  image
}

/// One full animation loop, frames rendered in parallel.
pub fn render_sequence<N>(preset: &Preset, noise: &N) -> Vec<RgbaImage>
  where N: NoiseSampler + Sync {
  use rayon::prelude::*;

  let times = preset.animation.frame_times().collect::<Vec<_>>();
  times.par_iter()
    .map(|&time| render_frame(preset, noise, time))
    .collect()
}

pub fn export_png(preset: &Preset, noise: &impl NoiseSampler, time: f64, path: impl AsRef<Path>) -> Result<()> {
  let path = path.as_ref();
  render_frame(preset, noise, time).save(path)?;
  log::info!("wrote {} ({})", path.display(), file_size(path)?);
  Ok(())
}

/// Write `frame_00000.png`, `frame_00001.png`, .. for one loop into `dir`.
pub fn export_sequence<N>(preset: &Preset, noise: &N, dir: impl AsRef<Path>) -> Result<Vec<PathBuf>>
  where N: NoiseSampler + Sync {
  use rayon::prelude::*;

  let dir = dir.as_ref();
  std::fs::create_dir_all(dir)?;
  let times = preset.animation.frame_times().collect::<Vec<_>>();
  let paths = times.par_iter()
    .enumerate()
    .map(|(i, &time)| -> Result<PathBuf> {
      let path = dir.join(format!("frame_{:05}.png", i));
      render_frame(preset, noise, time).save(&path)?;
      Ok(path)
    })
    .collect::<Result<Vec<_>>>()?;
  log::info!("wrote {} frames to {}", paths.len(), dir.display());
  Ok(paths)
}

fn file_size(path: &Path) -> Result<String> {
  use humansize::{FileSize, file_size_opts as options};

  let len = std::fs::metadata(path)?.len();
  Ok(len.file_size(options::CONVENTIONAL).unwrap_or_else(|_| format!("{} B", len)))
}
