//! Distance-field transforms over symmetric shape grids.
//!
//! A grid of cells is laid out on a canvas, optionally mirrored or rotated around its center,
//! and every cell's shape is sized, turned and colored as a function of its normalized
//! distance to that center (plus animation time and coherent noise).
//!
//! The pipeline is split into pure steps:
//! - [`cells::enumerate`] walks the lattice row by row and expands every base cell through
//!   [`symmetry::expand`], tagging it with [`field::normalized_distance`];
//! - a [`mapping::Mapper`] turns each cell into an [`mapping::Instance`] using the
//!   [`easing`] curves, the [`color::Palette`] and a [`noise::NoiseSampler`];
//! - [`drawing`] rasterizes instances (requires `drawing` feature).
//!
//! # Basic usage
//! ```
//! # use grid_field::{
//! #   config::{Preset, SymmetryMode},
//! #   mapping::Mapper,
//! #   noise::PerlinSampler,
//! # };
//! let mut preset = Preset::default();
//! preset.grid.symmetry = SymmetryMode::Radial;
//! preset.grid.radial_count = 8;
//!
//! let noise = PerlinSampler::default();
//! let mapper = Mapper::new(&preset, &noise);
//! // loop phase in [0, 1)
//! for instance in mapper.instances(0.25) {
//!   // hand `instance` to a renderer
//!   assert!(instance.size.is_finite());
//! }
//! assert_eq!(mapper.instances(0.25).count(), 10 * 10 * 8);
//! ```
//!
//! Presets are JSON documents (see [`config::Preset`]). Loading merges onto the current
//! state, and names of modes this version doesn't know fall back to defaults:
//! ```
//! # use grid_field::config::{Preset, FillMode};
//! # fn main() -> grid_field::error::Result<()> {
//! let preset = Preset::from_json(r#"{ "shape": { "fillMode": "paletteCycle" } }"#)?;
//! assert_eq!(preset.shape.fill_mode, FillMode::PaletteCycle);
//! assert_eq!(Preset::from_json(&preset.to_json()?)?, preset);
//! # Ok(())
//! # }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod error;
pub mod color;
pub mod easing;
pub mod noise;
pub mod config;
pub mod field;
pub mod symmetry;
pub mod cells;
pub mod mapping;
pub mod sdf;
pub mod geometry;
#[cfg(feature = "drawing")]
#[cfg_attr(docsrs, doc(cfg(feature = "drawing")))]
pub mod drawing;
