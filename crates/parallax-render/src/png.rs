//! Deterministic PNG writer.
//!
//! Uses fixed compression settings so the same composited image always
//! produces a byte-identical file.

use std::io::Write;
use std::path::Path;

use png::{BitDepth, ColorType, Compression, Encoder, FilterType};
use thiserror::Error;

use crate::image::Image;

/// Errors from PNG operations.
#[derive(Debug, Error)]
pub enum PngError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding error: {0}")]
    Encoding(#[from] png::EncodingError),
}

/// PNG export configuration for deterministic output.
#[derive(Debug, Clone)]
pub struct PngConfig {
    /// Compression level. Use a fixed value for determinism.
    pub compression: Compression,
    /// Filter type. Use a fixed value for determinism.
    pub filter: FilterType,
}

impl Default for PngConfig {
    fn default() -> Self {
        Self {
            compression: Compression::Default,
            filter: FilterType::NoFilter,
        }
    }
}

/// Write a composited image to a PNG file.
pub fn write_rgba(image: &Image, path: &Path, config: &PngConfig) -> Result<(), PngError> {
    let file = std::fs::File::create(path)?;
    let writer = std::io::BufWriter::new(file);
    write_rgba_to_writer(image, writer, config)
}

/// Write a composited image to any writer.
pub fn write_rgba_to_writer<W: Write>(
    image: &Image,
    writer: W,
    config: &PngConfig,
) -> Result<(), PngError> {
    let mut encoder = Encoder::new(writer, image.width, image.height);
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(config.compression);
    encoder.set_filter(config.filter);

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&image.to_rgba8())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn writes_a_decodable_file() {
        let mut image = Image::new_base(4, 2);
        image.set(1, 0, Color::white());

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        write_rgba(&image, &path, &PngConfig::default()).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        // PNG signature
        assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n']);
    }

    #[test]
    fn output_is_byte_identical_across_writes() {
        let image = Image::new(8, 8, Color::rgb(0.2, 0.4, 0.6));

        let mut a = Vec::new();
        let mut b = Vec::new();
        write_rgba_to_writer(&image, &mut a, &PngConfig::default()).unwrap();
        write_rgba_to_writer(&image, &mut b, &PngConfig::default()).unwrap();
        assert_eq!(a, b);
    }
}
