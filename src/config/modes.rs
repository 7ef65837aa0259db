//! Named modes of the preset format.
//!
//! Every mode is stored by name. A name this build does not know (older presets, typos,
//! modes from newer builds) loads as the mode's default variant instead of failing,
//! so partially compatible presets still open.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

macro_rules! named_modes {
  (
    $(#[$meta:meta])*
    pub enum $name:ident (default $default:ident) {
      $($(#[$vmeta:meta])* $variant:ident => $label:literal),+ $(,)?
    }
  ) => {
    $(#[$meta])*
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub enum $name {
      $($(#[$vmeta])* $variant),+
    }

    impl Default for $name {
      fn default() -> Self { $name::$default }
    }

    impl $name {
      pub const ALL: &'static [$name] = &[$($name::$variant),+];

      pub fn name(self) -> &'static str {
        match self {
          $($name::$variant => $label),+
        }
      }

      /// Case-insensitive lookup; unknown names resolve to the default variant.
      pub fn from_name(name: &str) -> Self {
        match Self::ALL.iter().find(|mode| mode.name().eq_ignore_ascii_case(name.trim())) {
          Some(mode) => *mode,
          None => {
            log::warn!(
              "unknown {} {:?}, using {:?}",
              stringify!($name), name, $name::$default
            );
            $name::$default
          }
        }
      }
    }

    impl std::fmt::Display for $name {
      fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
      }
    }

    impl Serialize for $name {
      fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
      }
    }

    impl<'de> Deserialize<'de> for $name {
      fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(match value.as_str() {
          Some(name) => $name::from_name(name),
          None => {
            log::warn!(
              "expected a {} name, got {}, using {:?}",
              stringify!($name), value, $name::$default
            );
            $name::$default
          }
        })
      }
    }
  };
}

named_modes! {
  /// How the base lattice is replicated.
  pub enum SymmetryMode (default None) {
    None => "none",
    /// Mirror across the vertical axis through the center.
    Horizontal => "horizontal",
    /// Mirror across the horizontal axis through the center.
    Vertical => "vertical",
    Both => "both",
    /// `radial_count`-fold rotation around the center.
    Radial => "radial",
  }
}

named_modes! {
  pub enum ShapeKind (default Circle) {
    Circle => "circle",
    Square => "square",
    Triangle => "triangle",
    Hexagon => "hexagon",
    Diamond => "diamond",
    Cross => "cross",
    Ring => "ring",
  }
}

named_modes! {
  /// Curve from inverted distance to the `[scale_min, scale_max]` range.
  pub enum ScaleMode (default Linear) {
    None => "none",
    Linear => "linear",
    EaseIn => "easeIn",
    EaseOut => "easeOut",
    EaseInOut => "easeInOut",
    Step => "step",
    Swirl => "swirl",
  }
}

named_modes! {
  pub enum RotateMode (default None) {
    None => "none",
    Linear => "linear",
    EaseIn => "easeIn",
    EaseOut => "easeOut",
  }
}

named_modes! {
  pub enum FillMode (default Solid) {
    Solid => "solid",
    DistanceGradient => "distanceGradient",
    PaletteCycle => "paletteCycle",
    RandomByIndex => "randomByIndex",
  }
}

named_modes! {
  pub enum StrokeMode (default None) {
    None => "none",
    Solid => "solid",
    /// Any non-solid stroke follows the fill mapping, frozen at time 0.
    MatchFill => "matchFill",
  }
}

named_modes! {
  /// Compositing of a shape onto what is already on the canvas.
  pub enum BlendMode (default Normal) {
    Normal => "normal",
    Multiply => "multiply",
    Screen => "screen",
    Overlay => "overlay",
    Add => "add",
    Difference => "difference",
    Exclusion => "exclusion",
    Lightest => "lightest",
    Darkest => "darkest",
  }
}
