//! Seamlessly tiling fractal noise.

use std::f64::consts::TAU;

use parallax_spec::NoiseKind;
use thiserror::Error;

use super::{NoiseField, Perlin4};

/// Upper bound on fractal octave count.
pub const MAX_OCTAVES: u32 = 32;

/// Errors from noise parameter validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoiseError {
    /// Octave count outside `1..=MAX_OCTAVES`.
    #[error("octave count must be between 1 and {MAX_OCTAVES}, got {0}")]
    OctavesOutOfRange(u32),
}

/// Fractal parameter set for one tileable noise instance.
///
/// The tile period is not part of the parameters; it is the image size and
/// is handed to the sampler at construction, once per layer application.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseParams {
    /// Fractal flavor.
    pub kind: NoiseKind,
    /// Seed for the gradient permutation table.
    pub seed: u32,
    /// Base sampling frequency.
    pub frequency: f64,
    /// Amplitude multiplier per octave.
    pub persistence: f64,
    /// Frequency multiplier per octave.
    pub lacunarity: f64,
    /// Octave count, `1..=MAX_OCTAVES`.
    pub octaves: u32,
}

impl NoiseParams {
    /// Check parameter ranges. Called at layer-build time so a bad octave
    /// count is rejected before any sampling occurs.
    pub fn validate(&self) -> Result<(), NoiseError> {
        if self.octaves == 0 || self.octaves > MAX_OCTAVES {
            return Err(NoiseError::OctavesOutOfRange(self.octaves));
        }
        Ok(())
    }
}

/// Fractal gradient noise that tiles at a fixed period along each axis.
///
/// Each 2D input coordinate is mapped onto a torus: the x axis becomes a
/// circle of circumference `period_x` (and likewise for y), and the 4D
/// gradient field is sampled at that point. Walking one full period along
/// either axis returns to the same 4D location, so the field has no seam.
pub struct TileableNoise {
    params: NoiseParams,
    period_x: f64,
    period_y: f64,
    perlin: Perlin4,
}

impl TileableNoise {
    /// Create a sampler with the given tile periods, in pixels.
    pub fn new(params: NoiseParams, period_x: f64, period_y: f64) -> Result<Self, NoiseError> {
        params.validate()?;
        Ok(Self {
            perlin: Perlin4::new(params.seed),
            period_x,
            period_y,
            params,
        })
    }
}

impl NoiseField for TileableNoise {
    fn sample(&self, x: f64, y: f64) -> f64 {
        let p = &self.params;

        // Map each axis onto a circle whose circumference is the period, so
        // one noise unit still spans about one pixel at frequency 1.
        let angle_x = TAU * x / self.period_x;
        let angle_y = TAU * y / self.period_y;
        let radius_x = self.period_x / TAU;
        let radius_y = self.period_y / TAU;

        let px = angle_x.cos() * radius_x;
        let py = angle_x.sin() * radius_x;
        let pz = angle_y.cos() * radius_y;
        let pw = angle_y.sin() * radius_y;

        let mut total = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = p.frequency;
        let mut max_value = 0.0;

        for _ in 0..p.octaves {
            let mut n = self
                .perlin
                .sample(px * frequency, py * frequency, pz * frequency, pw * frequency);
            if p.kind == NoiseKind::Ridged {
                // Fold valleys into ridges, then recenter on [-1, 1].
                n = 2.0 * (1.0 - n.abs()) - 1.0;
            }
            total += n * amplitude;
            max_value += amplitude;
            amplitude *= p.persistence;
            frequency *= p.lacunarity;
        }

        (total / max_value).clamp(-1.0, 1.0)
    }
}
