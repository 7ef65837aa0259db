//! 8-bit RGB colors and the 5-swatch palette.
//!
//! Interpolation is byte-linear: channels are blended in sRGB byte space and rounded,
//! not converted to linear light first.

use {
  crate::error::{Error, Result},
  serde::{Deserialize, Deserializer, Serialize, Serializer},
  std::{fmt, str::FromStr}
};


#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Color(pub [u8; 3]);

impl Color {
  pub const BLACK: Color = Color([0, 0, 0]);
  pub const WHITE: Color = Color([255, 255, 255]);

  pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
    Color([r, g, b])
  }

  /// Accepts `#rrggbb`, `rrggbb`, `#rgb` and `rgb`, case-insensitive.
  pub fn from_hex(s: &str) -> Result<Self> {
    let digits = s.trim().trim_start_matches('#');
    let expanded = match digits.len() {
      3 => digits.chars().flat_map(|c| [c, c]).collect::<String>(),
      6 => digits.to_string(),
      _ => return Err(Error::InvalidColor(s.to_string()))
    };
    let mut rgb = [0u8; 3];
    hex::decode_to_slice(&expanded, &mut rgb)
      .map_err(|_| Error::InvalidColor(s.to_string()))?;
    Ok(Color(rgb))
  }

  /// Lowercase `#rrggbb`.
  pub fn to_hex(self) -> String {
    format!("#{}", hex::encode(self.0))
  }

  /// Per-channel `a + (b - a) * t`, rounded to the nearest byte.
  pub fn lerp(self, other: Color, t: f64) -> Color {
    let mut out = [0u8; 3];
    out.iter_mut()
      .zip(self.0.iter().zip(other.0.iter()))
      .for_each(|(out, (&a, &b))| {
        let v = a as f64 + (b as f64 - a as f64) * t;
        *out = v.round().clamp(0.0, 255.0) as u8;
      });
    Color(out)
  }
}

impl fmt::Display for Color {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.to_hex())
  }
}

impl FromStr for Color {
  type Err = Error;
  fn from_str(s: &str) -> Result<Self> { Color::from_hex(s) }
}

impl Serialize for Color {
  fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&self.to_hex())
  }
}

impl<'de> Deserialize<'de> for Color {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
    let s = String::deserialize(deserializer)?;
    Color::from_hex(&s).map_err(serde::de::Error::custom)
  }
}

/// Ordered list of swatches. Five by convention, any length is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
  pub colors: Vec<Color>
}

impl Default for Palette {
  fn default() -> Self {
    Palette {
      colors: vec![
        Color::rgb(0x26, 0x46, 0x53),
        Color::rgb(0x2a, 0x9d, 0x8f),
        Color::rgb(0xe9, 0xc4, 0x6a),
        Color::rgb(0xf4, 0xa2, 0x61),
        Color::rgb(0xe7, 0x6f, 0x51),
      ]
    }
  }
}

impl Palette {
  pub fn new(colors: Vec<Color>) -> Self {
    Palette { colors }
  }

  pub fn len(&self) -> usize {
    self.colors.len()
  }

  pub fn is_empty(&self) -> bool {
    self.colors.is_empty()
  }

  /// Piecewise-linear gradient through all swatches, `t` in `[0, 1]`.
  /// `t = 0` is exactly the first swatch, `t >= 1` exactly the last.
  pub fn gradient(&self, t: f64) -> Option<Color> {
    let last = self.colors.last().copied()?;
    let n = self.colors.len();
    let pos = t * (n - 1) as f64;
    // NaN and negative positions land on the first swatch
    let i = if pos > 0.0 { pos.floor() as usize } else { 0 };
    if i >= n - 1 {
      return Some(last);
    }
    let frac = if pos > 0.0 { pos - i as f64 } else { 0.0 };
    Some(self.colors[i].lerp(self.colors[i + 1], frac))
  }

  /// `colors[index mod N]`.
  pub fn cycle(&self, index: usize) -> Option<Color> {
    match self.colors.len() {
      0 => None,
      n => Some(self.colors[index % n])
    }
  }

  /// Deterministic scatter: `colors[(index * 7) mod N]`.
  pub fn scatter(&self, index: usize) -> Option<Color> {
    match self.colors.len() {
      0 => None,
      n => Some(self.colors[(index % n) * 7 % n])
    }
  }
}
