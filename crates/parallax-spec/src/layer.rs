//! Layer configuration records.
//!
//! Each layer is a tagged record in the `[[layers]]` array. Defaults follow
//! the ones the generator has always shipped with: a noise layer with no
//! overrides fades white over black with three octaves of fbm.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SpecError;

/// Default lacunarity for fractal noise, 2π/3.
pub const DEFAULT_LACUNARITY: f64 = std::f64::consts::TAU / 3.0;

/// One configured contribution to the final image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", deny_unknown_fields)]
pub enum LayerConfig {
    /// Gradient-mapped noise fill.
    Noise {
        /// Color at full noise intensity (hex string).
        #[serde(default = "default_white")]
        inner_color: String,
        /// Color at zero noise intensity (hex string).
        #[serde(default = "default_black")]
        outer_color: String,
        /// Fractal noise flavor.
        #[serde(default)]
        noise_kind: NoiseKind,
        /// Noise seed.
        #[serde(default = "default_seed")]
        seed: u32,
        /// Amplitude multiplier per octave.
        #[serde(default = "default_persistence")]
        persistence: f64,
        /// Frequency multiplier per octave.
        #[serde(default = "default_lacunarity")]
        lacunarity: f64,
        /// Base sampling frequency.
        #[serde(default = "default_frequency")]
        frequency: f64,
        /// Number of octaves (1 to 32).
        #[serde(default = "default_octaves")]
        octaves: u32,
        /// Noise values below this are cut off before color mapping, in [0, 1).
        #[serde(default)]
        threshold: f64,
        /// Blend factor applied to this layer's contribution.
        #[serde(default)]
        src_factor: BlendFactor,
        /// Blend factor applied to the accumulated image.
        #[serde(default)]
        dst_factor: BlendFactor,
    },
    /// Random point scatter, optionally noise-masked.
    Points {
        /// Seed for the point stream.
        #[serde(default = "default_seed")]
        seed: u32,
        /// How many points to scatter.
        #[serde(default = "default_point_count")]
        point_count: u32,
        /// Color of a point at distance 0 (hex string).
        #[serde(default = "default_white")]
        close_color: String,
        /// Color of a point at distance 1 (hex string).
        #[serde(default = "default_black")]
        far_color: String,
        /// Half-width of a point; a point covers a square of side `2 * point_size - 1`.
        #[serde(default = "default_point_size")]
        point_size: u32,
        /// Blend factor applied to this layer's contribution.
        #[serde(default)]
        src_factor: BlendFactor,
        /// Blend factor applied to the accumulated image.
        #[serde(default)]
        dst_factor: BlendFactor,
        /// Whether point placement is rejection-sampled against a noise mask.
        #[serde(default)]
        masked: bool,
        /// Mask noise seed.
        #[serde(default = "default_seed")]
        mask_seed: u32,
        /// Mask noise flavor.
        #[serde(default)]
        mask_noise_kind: NoiseKind,
        /// Mask amplitude multiplier per octave.
        #[serde(default = "default_persistence")]
        mask_persistence: f64,
        /// Mask frequency multiplier per octave.
        #[serde(default = "default_lacunarity")]
        mask_lacunarity: f64,
        /// Mask base sampling frequency.
        #[serde(default = "default_frequency")]
        mask_frequency: f64,
        /// Mask octave count (1 to 32).
        #[serde(default = "default_octaves")]
        mask_octaves: u32,
        /// Mask threshold, in [0, 1).
        #[serde(default)]
        mask_threshold: f64,
    },
}

/// Fractal noise flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoiseKind {
    /// Fractal Brownian motion.
    #[default]
    Fbm,
    /// Ridged multifractal.
    Ridged,
}

/// Weighting rule for one side of the blend equation.
///
/// `Src*` factors read the layer's own contribution, `Dst*` factors read the
/// accumulated image; `*Alpha` variants broadcast the alpha channel as a
/// scalar over RGB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendFactor {
    Zero,
    #[default]
    One,
    SrcColor,
    OneMinusSrcColor,
    DstColor,
    OneMinusDstColor,
    SrcAlpha,
    OneMinusSrcAlpha,
    DstAlpha,
    OneMinusDstAlpha,
}

pub(crate) fn default_white() -> String {
    "#FFFFFF".to_string()
}

pub(crate) fn default_black() -> String {
    "#000000".to_string()
}

pub(crate) fn default_seed() -> u32 {
    1234
}

pub(crate) fn default_persistence() -> f64 {
    0.5
}

pub(crate) fn default_lacunarity() -> f64 {
    DEFAULT_LACUNARITY
}

pub(crate) fn default_frequency() -> f64 {
    1.0
}

pub(crate) fn default_octaves() -> u32 {
    3
}

pub(crate) fn default_point_count() -> u32 {
    100
}

pub(crate) fn default_point_size() -> u32 {
    1
}

/// A full configuration document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigDocument {
    #[serde(default)]
    layers: Vec<LayerConfig>,
}

/// Parse a configuration document from TOML text.
pub fn parse_layers(text: &str) -> Result<Vec<LayerConfig>, SpecError> {
    let doc: ConfigDocument = toml::from_str(text)?;
    Ok(doc.layers)
}

/// Load a configuration document from a file.
pub fn load_layers(path: &Path) -> Result<Vec<LayerConfig>, SpecError> {
    let text = std::fs::read_to_string(path)?;
    parse_layers(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn noise_layer_defaults() {
        let layers = parse_layers("[[layers]]\ntype = \"noise\"\n").unwrap();
        assert_eq!(layers.len(), 1);
        match &layers[0] {
            LayerConfig::Noise {
                inner_color,
                outer_color,
                noise_kind,
                seed,
                persistence,
                lacunarity,
                frequency,
                octaves,
                threshold,
                src_factor,
                dst_factor,
            } => {
                assert_eq!(inner_color, "#FFFFFF");
                assert_eq!(outer_color, "#000000");
                assert_eq!(*noise_kind, NoiseKind::Fbm);
                assert_eq!(*seed, 1234);
                assert_eq!(*persistence, 0.5);
                assert_eq!(*lacunarity, DEFAULT_LACUNARITY);
                assert_eq!(*frequency, 1.0);
                assert_eq!(*octaves, 3);
                assert_eq!(*threshold, 0.0);
                assert_eq!(*src_factor, BlendFactor::One);
                assert_eq!(*dst_factor, BlendFactor::One);
            }
            other => panic!("expected noise layer, got {:?}", other),
        }
    }

    #[test]
    fn points_layer_defaults() {
        let layers = parse_layers("[[layers]]\ntype = \"points\"\n").unwrap();
        match &layers[0] {
            LayerConfig::Points {
                point_count,
                point_size,
                masked,
                mask_octaves,
                ..
            } => {
                assert_eq!(*point_count, 100);
                assert_eq!(*point_size, 1);
                assert!(!masked);
                assert_eq!(*mask_octaves, 3);
            }
            other => panic!("expected points layer, got {:?}", other),
        }
    }

    #[test]
    fn layer_order_is_preserved() {
        let config = r#"
            [[layers]]
            type = "points"

            [[layers]]
            type = "noise"

            [[layers]]
            type = "points"
        "#;
        let layers = parse_layers(config).unwrap();
        assert!(matches!(layers[0], LayerConfig::Points { .. }));
        assert!(matches!(layers[1], LayerConfig::Noise { .. }));
        assert!(matches!(layers[2], LayerConfig::Points { .. }));
    }

    #[test]
    fn unknown_layer_type_is_fatal() {
        let err = parse_layers("[[layers]]\ntype = \"gradient\"\n").unwrap_err();
        assert!(matches!(err, SpecError::Parse(_)));
    }

    #[test]
    fn unknown_blend_factor_is_fatal() {
        let config = "[[layers]]\ntype = \"noise\"\nsrc_factor = \"src_saturate\"\n";
        assert!(parse_layers(config).is_err());
    }

    #[test]
    fn unknown_noise_kind_is_fatal() {
        let config = "[[layers]]\ntype = \"noise\"\nnoise_kind = \"billow\"\n";
        assert!(parse_layers(config).is_err());
    }

    #[test]
    fn unknown_key_is_fatal() {
        let config = "[[layers]]\ntype = \"noise\"\nspin = 3\n";
        assert!(parse_layers(config).is_err());
    }

    #[test]
    fn empty_document_has_no_layers() {
        assert!(parse_layers("").unwrap().is_empty());
    }

    #[test]
    fn blend_factor_strings_round_trip() {
        let config = r#"
            [[layers]]
            type = "noise"
            src_factor = "one_minus_dst_alpha"
            dst_factor = "src_color"
        "#;
        match &parse_layers(config).unwrap()[0] {
            LayerConfig::Noise {
                src_factor,
                dst_factor,
                ..
            } => {
                assert_eq!(*src_factor, BlendFactor::OneMinusDstAlpha);
                assert_eq!(*dst_factor, BlendFactor::SrcColor);
            }
            other => panic!("expected noise layer, got {:?}", other),
        }
    }

    #[test]
    fn load_layers_missing_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_layers(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, SpecError::Io(_)));
    }
}
