//! Pseudo-random numbers, vectors and directions.
//!
//! All generators draw from an explicit [`Rand`] context seeded by the
//! caller, so two runs with the same seed see the same sequence.

use gloam_math::{TAU, Vec2, Vec3, na};
use rand::prelude::*;

/// Seeded random source.
pub struct Rand {
    seed: u64,
    rng: StdRng,
}

impl Rand {
    /// Create a generator from a seed.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// The seed this generator was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Restart the sequence from the original seed.
    pub fn reset(&mut self) {
        self.rng = StdRng::seed_from_u64(self.seed);
    }

    /// Uniform float in `[0, 1)`.
    #[inline]
    pub fn rand(&mut self) -> f64 {
        self.rng.r#gen::<f64>()
    }

    /// Uniform integer in `[a, b]`, both end points included.
    ///
    /// The bounds are swapped if `a > b`.
    pub fn rand_int(&mut self, a: i64, b: i64) -> i64 {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        self.rng.gen_range(lo..=hi)
    }

    /// `a + rand() * (b - a)`.
    #[inline]
    pub fn rand_range(&mut self, a: f64, b: f64) -> f64 {
        a + self.rand() * (b - a)
    }

    /// Vector in the unit cube, each component drawn independently.
    pub fn rand_nd<const N: usize>(&mut self) -> na::SVector<f64, N> {
        na::SVector::<f64, N>::from_fn(|_, _| self.rand())
    }

    /// Vector in the box spanned by `a` and `b`: `a + rand_nd() * (b - a)`.
    pub fn rand_nd_range<const N: usize>(
        &mut self,
        a: &na::SVector<f64, N>,
        b: &na::SVector<f64, N>,
    ) -> na::SVector<f64, N> {
        let c = b - a;
        a + self.rand_nd::<N>().component_mul(&c)
    }

    /// Point on the unit circle, uniform in angle.
    pub fn rand_unit_2d(&mut self) -> Vec2 {
        let a = self.rand() * TAU;
        Vec2::new(a.cos(), a.sin())
    }

    /// Point inside the unit disk, uniform in area.
    pub fn rand_solid_2d(&mut self) -> Vec2 {
        let a = self.rand() * TAU;
        let r = self.rand().sqrt();
        Vec2::new(a.cos(), a.sin()) * r
    }

    /// Point on the unit sphere, uniform in area.
    ///
    /// Archimedes: a uniform height `s` in `[-1, 1]` and a uniform azimuth.
    pub fn rand_unit_3d(&mut self) -> Vec3 {
        let u = self.rand_unit_2d();
        let s = self.rand() * 2.0 - 1.0;
        let c = (1.0 - s * s).sqrt();
        Vec3::new(c * u.x, c * u.y, s)
    }
}

impl Default for Rand {
    fn default() -> Self {
        Self::new(0)
    }
}
