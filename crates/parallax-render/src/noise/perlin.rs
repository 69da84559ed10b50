//! 4D gradient (Perlin) noise.
//!
//! Four dimensions because the tileable sampler maps each image axis onto a
//! circle; the permutation table is shuffled through the engine's PCG32
//! wrapper so the field is fully pinned by its seed.

use super::{lerp, quintic};
use crate::rng::SeededRng;

/// Seeded 4D gradient noise generator.
#[derive(Clone)]
pub struct Perlin4 {
    /// Permutation table (256 values, doubled for wrapping).
    perm: [u8; 512],
}

impl Perlin4 {
    /// Gradient vectors for 4D: one zero component, the rest ±1.
    const GRAD4: [[f64; 4]; 32] = [
        [0.0, 1.0, 1.0, 1.0],
        [0.0, 1.0, 1.0, -1.0],
        [0.0, 1.0, -1.0, 1.0],
        [0.0, 1.0, -1.0, -1.0],
        [0.0, -1.0, 1.0, 1.0],
        [0.0, -1.0, 1.0, -1.0],
        [0.0, -1.0, -1.0, 1.0],
        [0.0, -1.0, -1.0, -1.0],
        [1.0, 0.0, 1.0, 1.0],
        [1.0, 0.0, 1.0, -1.0],
        [1.0, 0.0, -1.0, 1.0],
        [1.0, 0.0, -1.0, -1.0],
        [-1.0, 0.0, 1.0, 1.0],
        [-1.0, 0.0, 1.0, -1.0],
        [-1.0, 0.0, -1.0, 1.0],
        [-1.0, 0.0, -1.0, -1.0],
        [1.0, 1.0, 0.0, 1.0],
        [1.0, 1.0, 0.0, -1.0],
        [1.0, -1.0, 0.0, 1.0],
        [1.0, -1.0, 0.0, -1.0],
        [-1.0, 1.0, 0.0, 1.0],
        [-1.0, 1.0, 0.0, -1.0],
        [-1.0, -1.0, 0.0, 1.0],
        [-1.0, -1.0, 0.0, -1.0],
        [1.0, 1.0, 1.0, 0.0],
        [1.0, 1.0, -1.0, 0.0],
        [1.0, -1.0, 1.0, 0.0],
        [1.0, -1.0, -1.0, 0.0],
        [-1.0, 1.0, 1.0, 0.0],
        [-1.0, 1.0, -1.0, 0.0],
        [-1.0, -1.0, 1.0, 0.0],
        [-1.0, -1.0, -1.0, 0.0],
    ];

    /// Create a new generator with the given seed.
    pub fn new(seed: u32) -> Self {
        let mut rng = SeededRng::new(seed);

        let mut source: Vec<u8> = (0..=255).collect();

        // Fisher-Yates shuffle
        for i in (1..256).rev() {
            let j = rng.next_index(i);
            source.swap(i, j);
        }

        // Double the permutation table for overflow handling
        let mut perm = [0u8; 512];
        perm[..256].copy_from_slice(&source);
        perm[256..512].copy_from_slice(&source);

        Self { perm }
    }

    /// Hash lattice coordinates into a gradient index.
    #[inline]
    fn hash(&self, x: i64, y: i64, z: i64, w: i64) -> usize {
        let xi = (x & 255) as usize;
        let yi = (y & 255) as usize;
        let zi = (z & 255) as usize;
        let wi = (w & 255) as usize;
        let h = self.perm[wi] as usize;
        let h = self.perm[zi + h] as usize;
        let h = self.perm[yi + h] as usize;
        self.perm[xi + h] as usize
    }

    /// Gradient dot product at a lattice corner.
    #[inline]
    fn grad(&self, hash: usize, x: f64, y: f64, z: f64, w: f64) -> f64 {
        let g = &Self::GRAD4[hash & 31];
        g[0] * x + g[1] * y + g[2] * z + g[3] * w
    }

    #[inline]
    fn fast_floor(v: f64) -> i64 {
        if v >= 0.0 {
            v as i64
        } else {
            v as i64 - 1
        }
    }

    /// Sample the noise at a 4D coordinate. Output is roughly in [-1, 1].
    pub fn sample(&self, x: f64, y: f64, z: f64, w: f64) -> f64 {
        let x0 = Self::fast_floor(x);
        let y0 = Self::fast_floor(y);
        let z0 = Self::fast_floor(z);
        let w0 = Self::fast_floor(w);

        // Fractional parts
        let fx = x - x0 as f64;
        let fy = y - y0 as f64;
        let fz = z - z0 as f64;
        let fw = w - w0 as f64;

        let u = quintic(fx);
        let v = quintic(fy);
        let s = quintic(fz);
        let t = quintic(fw);

        // Gradient dot product at corner (dx, dy, dz, dw) of the hypercube.
        let corner = |dx: i64, dy: i64, dz: i64, dw: i64| -> f64 {
            let h = self.hash(x0 + dx, y0 + dy, z0 + dz, w0 + dw);
            self.grad(
                h,
                fx - dx as f64,
                fy - dy as f64,
                fz - dz as f64,
                fw - dw as f64,
            )
        };

        // Collapse the 16 corners one axis at a time.
        let lerp_x = |dy: i64, dz: i64, dw: i64| -> f64 {
            lerp(corner(0, dy, dz, dw), corner(1, dy, dz, dw), u)
        };
        let lerp_xy = |dz: i64, dw: i64| -> f64 { lerp(lerp_x(0, dz, dw), lerp_x(1, dz, dw), v) };
        let lerp_xyz = |dw: i64| -> f64 { lerp(lerp_xy(0, dw), lerp_xy(1, dw), s) };

        lerp(lerp_xyz(0), lerp_xyz(1), t)
    }
}
