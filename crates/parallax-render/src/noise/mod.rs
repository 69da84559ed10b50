//! Tileable noise sampling.
//!
//! The compositing layers consume noise through the [`NoiseField`] trait and
//! never see the underlying algorithm. The concrete sampler here is seeded
//! 4D gradient noise evaluated on a torus, which makes the field wrap
//! seamlessly at a chosen period along each axis.

mod perlin;
mod tileable;

pub use perlin::Perlin4;
pub use tileable::{NoiseError, NoiseParams, TileableNoise, MAX_OCTAVES};

/// A 2D noise field sampled per pixel.
pub trait NoiseField {
    /// Sample the field at a 2D coordinate. Returns a value in [-1, 1],
    /// stable for identical configuration and inputs.
    fn sample(&self, x: f64, y: f64) -> f64;
}

/// Quintic fade curve used for gradient noise interpolation.
#[inline]
pub(crate) fn quintic(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Linear interpolation.
#[inline]
pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}
