//! Parallax Layer Configuration Library
//!
//! This crate provides the typed configuration model for the parallax
//! background generator. A configuration is a TOML document holding an
//! ordered `[[layers]]` array of tagged records; layer order is significant
//! and is preserved all the way into the compositing pass.
//!
//! # Example
//!
//! ```
//! use parallax_spec::{parse_layers, LayerConfig};
//!
//! let config = r##"
//! [[layers]]
//! type = "noise"
//! inner_color = "#FFFFFFFF"
//! outer_color = "#00000000"
//! seed = 42
//! octaves = 5
//!
//! [[layers]]
//! type = "points"
//! seed = 7
//! point_count = 1000
//! "##;
//!
//! let layers = parse_layers(config).unwrap();
//! assert_eq!(layers.len(), 2);
//! assert!(matches!(layers[0], LayerConfig::Noise { .. }));
//! ```
//!
//! Unknown layer types, unknown enum strings, and unrecognized keys are all
//! fatal parse errors; a configuration either loads in full or not at all.

pub mod error;
pub mod layer;

pub use error::SpecError;
pub use layer::{
    load_layers, parse_layers, BlendFactor, LayerConfig, NoiseKind, DEFAULT_LACUNARITY,
};
