//! Remappings of the unit interval.
//!
//! Inputs are not clamped; callers feed `1 - distance`, which is already in `[0, 1]`.

use {
  crate::config::{ScaleMode, RotateMode},
  num_traits::{Float, FloatConst}
};

#[cfg(test)] mod tests;

/// Exponent used by the rotation easings, which have no power setting of their own.
pub const ROTATION_POWER: f64 = 2.0;

pub fn linear<F: Float>(t: F) -> F {
  t
}

pub fn ease_in<F: Float>(t: F, power: F) -> F {
  t.powf(power)
}

pub fn ease_out<F: Float>(t: F, power: F) -> F {
  F::one() - (F::one() - t).powf(power)
}

pub fn ease_in_out<F: Float>(t: F, power: F) -> F {
  let two = F::one() + F::one();
  let half = F::one() / two;
  if t < half {
    (two * t).powf(power) / two
  } else {
    F::one() - (two * (F::one() - t)).powf(power) / two
  }
}

/// Hard threshold at 0.5, independent of any scale bounds.
pub fn step<F: Float>(t: F) -> F {
  let half = F::one() / (F::one() + F::one());
  if t > half { F::one() } else { F::zero() }
}

/// `sin(t * pi * power) * 0.5 + 0.5`; oscillates instead of rising.
pub fn swirl<F: Float + FloatConst>(t: F, power: F) -> F {
  let half = F::one() / (F::one() + F::one());
  (t * F::PI() * power).sin() * half + half
}

impl ScaleMode {
  /// `None` applies no distance shaping at all and returns `1`.
  pub fn ease(self, t: f64, power: f64) -> f64 {
    match self {
      ScaleMode::None => 1.0,
      ScaleMode::Linear => linear(t),
      ScaleMode::EaseIn => ease_in(t, power),
      ScaleMode::EaseOut => ease_out(t, power),
      ScaleMode::EaseInOut => ease_in_out(t, power),
      ScaleMode::Step => step(t),
      ScaleMode::Swirl => swirl(t, power),
    }
  }
}

impl RotateMode {
  /// `None` has no curve; the rotation mapper never calls it for that mode.
  pub fn ease(self, t: f64) -> Option<f64> {
    match self {
      RotateMode::None => None,
      RotateMode::Linear => Some(linear(t)),
      RotateMode::EaseIn => Some(ease_in(t, ROTATION_POWER)),
      RotateMode::EaseOut => Some(ease_out(t, ROTATION_POWER)),
    }
  }
}
