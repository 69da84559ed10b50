//! Full-reload entry point: configuration to composited image.

use std::path::{Path, PathBuf};

use thiserror::Error;

use parallax_spec::{load_layers, SpecError};

use crate::color::ColorParseError;
use crate::image::Image;
use crate::layer::Layer;
use crate::noise::NoiseError;

/// Errors from a full reload.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Configuration could not be loaded or parsed.
    #[error(transparent)]
    Spec(#[from] SpecError),

    /// A configured color string is malformed.
    #[error("invalid color: {0}")]
    Color(#[from] ColorParseError),

    /// Noise parameters out of range.
    #[error("invalid noise parameters: {0}")]
    Noise(#[from] NoiseError),

    /// Other invalid parameter.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Drives full recomposition passes from a configuration file.
///
/// The generator holds nothing but the configuration path: every call to
/// [`Generator::full_reload`] re-reads the file, rebuilds the layer list,
/// and renders a brand-new image. Nothing is cached between calls.
pub struct Generator {
    config_path: PathBuf,
}

impl Generator {
    /// Create a generator reading its layers from `config_path`.
    pub fn new(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    /// The configuration file this generator reloads from.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Reload the configuration and composite a fresh image.
    ///
    /// Deterministic for identical configuration, size, and per-layer
    /// seeds. Any failure aborts the whole reload; no partial image is
    /// returned.
    pub fn full_reload(&self, width: u32, height: u32) -> Result<Image, GenerateError> {
        validate_size(width, height)?;

        let configs = load_layers(&self.config_path)?;
        let layers = configs
            .iter()
            .map(Layer::build)
            .collect::<Result<Vec<_>, _>>()?;

        compose(&layers, width, height)
    }
}

/// Composite already-built layers into a fresh image.
///
/// The image starts at the base color (opaque black) and each layer is
/// applied in list order, in place; layer N + 1 sees layer N's fully
/// written buffer.
pub fn compose(layers: &[Layer], width: u32, height: u32) -> Result<Image, GenerateError> {
    validate_size(width, height)?;

    let mut image = Image::new_base(width, height);
    for layer in layers {
        layer.apply(&mut image)?;
    }
    Ok(image)
}

fn validate_size(width: u32, height: u32) -> Result<(), GenerateError> {
    if width == 0 || height == 0 {
        return Err(GenerateError::InvalidParameter(format!(
            "image size must be at least 1x1, got {}x{}",
            width, height
        )));
    }
    Ok(())
}
