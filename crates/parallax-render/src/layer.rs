//! Runtime layers and their application to the image buffer.
//!
//! [`Layer::build`] turns an immutable configuration record into a runtime
//! layer, performing all validation up front: hex colors are parsed, octave
//! counts and thresholds are range-checked, and a bad value aborts the
//! reload before any pixel work happens.

use parallax_spec::{BlendFactor, LayerConfig};

use crate::color::{blend, Color};
use crate::generate::GenerateError;
use crate::image::Image;
use crate::noise::{NoiseField, NoiseParams, TileableNoise};
use crate::rng::SeededRng;

/// Layer-wide budget of rejected masked-scatter attempts. Once spent, every
/// further rejected point is accepted unconditionally instead of retried,
/// which over-densifies low-probability regions for very large point counts.
/// Long-standing behavior, kept as-is.
const MAX_REJECTED_POINTS: u32 = 8192;

/// One built layer, ready to apply.
#[derive(Debug, Clone)]
pub enum Layer {
    /// Gradient-mapped noise fill.
    Noise(NoiseLayer),
    /// Random point scatter, optionally noise-masked.
    Points(PointsLayer),
}

impl Layer {
    /// Build a runtime layer from a configuration record.
    pub fn build(config: &LayerConfig) -> Result<Layer, GenerateError> {
        match config {
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
                let params = NoiseParams {
                    kind: *noise_kind,
                    seed: *seed,
                    frequency: *frequency,
                    persistence: *persistence,
                    lacunarity: *lacunarity,
                    octaves: *octaves,
                };
                params.validate()?;
                validate_threshold("threshold", *threshold)?;

                Ok(Layer::Noise(NoiseLayer {
                    inner_color: Color::from_hex(inner_color)?,
                    outer_color: Color::from_hex(outer_color)?,
                    params,
                    threshold: *threshold,
                    src_factor: *src_factor,
                    dst_factor: *dst_factor,
                }))
            }
            LayerConfig::Points {
                seed,
                point_count,
                close_color,
                far_color,
                point_size,
                src_factor,
                dst_factor,
                masked,
                mask_seed,
                mask_noise_kind,
                mask_persistence,
                mask_lacunarity,
                mask_frequency,
                mask_octaves,
                mask_threshold,
            } => {
                if *point_size == 0 {
                    return Err(GenerateError::InvalidParameter(
                        "point_size must be at least 1".to_string(),
                    ));
                }

                let mask = if *masked {
                    let params = NoiseParams {
                        kind: *mask_noise_kind,
                        seed: *mask_seed,
                        frequency: *mask_frequency,
                        persistence: *mask_persistence,
                        lacunarity: *mask_lacunarity,
                        octaves: *mask_octaves,
                    };
                    params.validate()?;
                    validate_threshold("mask_threshold", *mask_threshold)?;
                    Some(PointMask {
                        params,
                        threshold: *mask_threshold,
                    })
                } else {
                    None
                };

                Ok(Layer::Points(PointsLayer {
                    seed: *seed,
                    point_count: *point_count,
                    close_color: Color::from_hex(close_color)?,
                    far_color: Color::from_hex(far_color)?,
                    point_size: *point_size,
                    src_factor: *src_factor,
                    dst_factor: *dst_factor,
                    mask,
                }))
            }
        }
    }

    /// Apply this layer to the image, in place.
    pub fn apply(&self, image: &mut Image) -> Result<(), GenerateError> {
        match self {
            Layer::Noise(layer) => layer.apply(image),
            Layer::Points(layer) => layer.apply(image),
        }
    }
}

/// Reject thresholds outside [0, 1); at exactly 1 the rescale step would
/// divide by zero.
fn validate_threshold(name: &str, value: f64) -> Result<(), GenerateError> {
    if !value.is_finite() || !(0.0..1.0).contains(&value) {
        return Err(GenerateError::InvalidParameter(format!(
            "{} must be in [0, 1), got {}",
            name, value
        )));
    }
    Ok(())
}

/// Normalize a raw [-1, 1] noise sample and cut it off below `threshold`,
/// rescaling the survivors back to the full [0, 1] range.
fn shape_noise(raw: f64, threshold: f64) -> f64 {
    let n = ((raw + 1.0) / 2.0).clamp(0.0, 1.0);
    (n - threshold).clamp(0.0, 1.0) * (1.0 / (1.0 - threshold))
}

/// Gradient-mapped noise fill.
#[derive(Debug, Clone)]
pub struct NoiseLayer {
    inner_color: Color,
    outer_color: Color,
    params: NoiseParams,
    threshold: f64,
    src_factor: BlendFactor,
    dst_factor: BlendFactor,
}

impl NoiseLayer {
    fn apply(&self, image: &mut Image) -> Result<(), GenerateError> {
        let noise = TileableNoise::new(self.params, image.width as f64, image.height as f64)?;

        for y in 0..image.height {
            for x in 0..image.width {
                let n = shape_noise(noise.sample(x as f64, y as f64), self.threshold);
                let src = self.outer_color.mix(&self.inner_color, n);
                let dst = image.get(x, y);
                image.set(x, y, blend(&dst, &src, self.dst_factor, self.src_factor));
            }
        }

        Ok(())
    }
}

/// Noise mask for rejection-sampled point placement.
#[derive(Debug, Clone)]
struct PointMask {
    params: NoiseParams,
    threshold: f64,
}

/// Random point scatter.
#[derive(Debug, Clone)]
pub struct PointsLayer {
    seed: u32,
    point_count: u32,
    close_color: Color,
    far_color: Color,
    point_size: u32,
    src_factor: BlendFactor,
    dst_factor: BlendFactor,
    mask: Option<PointMask>,
}

impl PointsLayer {
    fn apply(&self, image: &mut Image) -> Result<(), GenerateError> {
        let width = image.width;
        let height = image.height;

        // Points render into a scratch buffer first so overlapping points in
        // the same layer do not double-blend against the accumulator.
        let mut scratch = Image::new_base(width, height);
        let mut rng = SeededRng::new(self.seed);

        match &self.mask {
            None => {
                for _ in 0..self.point_count {
                    let (x, y) = self.draw_position(&mut rng, width, height);
                    self.paint_point(&mut scratch, x, y, &mut rng);
                }
            }
            Some(mask) => {
                let noise =
                    TileableNoise::new(mask.params, width as f64, height as f64)?;

                let mut rejected = 0u32;
                let mut placed = 0u32;
                while placed < self.point_count {
                    let (x, y) = self.draw_position(&mut rng, width, height);
                    let density =
                        shape_noise(noise.sample(x as f64, y as f64), mask.threshold);
                    if rng.next_f64() > density && rejected < MAX_REJECTED_POINTS {
                        // Redraw this point; the loop index does not advance.
                        rejected += 1;
                        continue;
                    }
                    self.paint_point(&mut scratch, x, y, &mut rng);
                    placed += 1;
                }
            }
        }

        // Blend the whole scratch buffer onto the accumulator, untouched
        // (base color) pixels included, so factors that read the source
        // color see black wherever no point landed.
        for y in 0..height {
            for x in 0..width {
                let dst = image.get(x, y);
                let src = scratch.get(x, y);
                image.set(x, y, blend(&dst, &src, self.dst_factor, self.src_factor));
            }
        }

        Ok(())
    }

    /// Draw the next candidate position: rel_x then rel_y, each in [0, 1).
    fn draw_position(&self, rng: &mut SeededRng, width: u32, height: u32) -> (i64, i64) {
        let x = (rng.next_f64() * width as f64).floor() as i64;
        let y = (rng.next_f64() * height as f64).floor() as i64;
        (x, y)
    }

    /// Draw the distance value and stamp a square of side `2 * point_size - 1`
    /// centered on (x, y), wrapping toroidally at the image edges.
    fn paint_point(&self, scratch: &mut Image, x: i64, y: i64, rng: &mut SeededRng) {
        let dist = rng.next_f64();
        let color = self.close_color.mix(&self.far_color, dist);

        let reach = self.point_size as i64 - 1;
        for dy in -reach..=reach {
            for dx in -reach..=reach {
                scratch.set_wrapped(x + dx, y + dy, color);
            }
        }
    }
}
