//! Parallax Compositing Engine
//!
//! This crate turns an ordered list of layer configurations into one
//! seamless, tileable RGBA image. All output is byte-identical given the
//! same configuration, size, and per-layer seeds: every random draw goes
//! through a PCG32 stream and the noise permutation tables are derived from
//! the same stream, so a full reload is a pure function of its inputs.
//!
//! # Example
//!
//! ```
//! use parallax_render::generate::compose;
//! use parallax_render::layer::Layer;
//! use parallax_spec::parse_layers;
//!
//! let configs = parse_layers(r##"
//! [[layers]]
//! type = "noise"
//! inner_color = "#1A1A2E"
//! seed = 99
//!
//! [[layers]]
//! type = "points"
//! seed = 7
//! point_count = 400
//! "##).unwrap();
//!
//! let layers = configs
//!     .iter()
//!     .map(Layer::build)
//!     .collect::<Result<Vec<_>, _>>()
//!     .unwrap();
//! let image = compose(&layers, 256, 256).unwrap();
//! assert_eq!(image.width, 256);
//! ```
//!
//! Layers are applied strictly in declaration order; each one reads the
//! fully written output of the previous one and blends its own contribution
//! on top through the source/destination factor algebra in [`color`].

pub mod color;
pub mod generate;
pub mod image;
pub mod layer;
pub mod noise;
pub mod png;
pub mod rng;

// Re-export main types for convenience
pub use color::Color;
pub use generate::{compose, GenerateError, Generator};
pub use image::{sane_mod, Image};
pub use layer::Layer;
pub use noise::{NoiseField, NoiseParams, TileableNoise};
pub use rng::SeededRng;
