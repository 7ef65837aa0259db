//! Coherent noise used to modulate the size curve.
//!
//! The engine only relies on the [`NoiseSampler`] contract; [`PerlinSampler`] is the default
//! implementation.

use {
  crate::config::PatternConfig,
  ::noise::{NoiseFn, Perlin}
};

/// Stateless 2D noise. Must return the same value for the same point, in `[-1, 1]`.
pub trait NoiseSampler {
  fn sample(&self, x: f64, y: f64) -> f64;
}

impl<F> NoiseSampler for F where F: Fn(f64, f64) -> f64 {
  fn sample(&self, x: f64, y: f64) -> f64 { self(x, y) }
}

/// Perlin noise over a fixed permutation table. Variation between presets comes from the
/// pattern seed shifting the sample coordinates, not from reseeding the table.
#[derive(Clone)]
pub struct PerlinSampler {
  noise: Perlin
}

impl PerlinSampler {
  pub const TABLE_SEED: u32 = 0;

  pub fn new(table_seed: u32) -> Self {
    PerlinSampler { noise: Perlin::new(table_seed) }
  }
}

impl Default for PerlinSampler {
  fn default() -> Self {
    PerlinSampler::new(Self::TABLE_SEED)
  }
}

impl NoiseSampler for PerlinSampler {
  fn sample(&self, x: f64, y: f64) -> f64 {
    self.noise.get([x, y]).clamp(-1.0, 1.0)
  }
}

/// Noise-derived modulation factor in `[0, 1]`:
/// `(noise(d * scale * 10 + seed, t * scale + seed) + 1) / 2`.
pub fn pattern_value(sampler: &impl NoiseSampler, pattern: &PatternConfig, distance: f64, time: f64) -> f64 {
  let seed = pattern.seed as f64;
  let x = distance * pattern.noise_scale * 10.0 + seed;
  let y = time * pattern.noise_scale + seed;
  (sampler.sample(x, y) + 1.0) / 2.0
}
