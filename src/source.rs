//! Uniform random sources consumed by the samplers.

use rand::Rng;

/// Anything that can hand out uniform reals in `[0, 1)`.
///
/// Every [`rand::Rng`] is a source, so `rand::rng()` works for everyday use
/// and a seeded generator (`StdRng::seed_from_u64`, `Pcg32::seed_from_u64`)
/// gives a reproducible stream. Implement it yourself to script exact draws.
pub trait UniformSource {
    /// Next value in `[0, 1)`. Called once per sample.
    fn next_uniform(&mut self) -> f64;
}

impl<R: Rng + ?Sized> UniformSource for R {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// Map 64 random bits to `[0, 1)` using the top 53, as `rand` does for `f64`.
#[inline]
pub fn unit_f64(bits: u64) -> f64 {
    const SCALE: f64 = 1.0 / (1u64 << 53) as f64;
    (bits >> 11) as f64 * SCALE
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn unit_f64_bounds() {
        assert_eq!(unit_f64(0), 0.0);
        assert_eq!(unit_f64(1 << 63), 0.5);
        assert_eq!(unit_f64(1 << 62), 0.25);
        let top = unit_f64(u64::MAX);
        assert!(top < 1.0, "top={top}");
        assert!(top > 0.999_999);
    }

    #[test]
    fn seeded_rng_is_a_reproducible_source() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let x = a.next_uniform();
            assert!((0.0..1.0).contains(&x));
            assert_eq!(x, b.next_uniform());
        }
    }

    #[test]
    fn unsized_rng_is_a_source() {
        let mut rng = StdRng::seed_from_u64(1);
        let dynamic: &mut dyn rand::RngCore = &mut rng;
        let x = UniformSource::next_uniform(dynamic);
        assert!((0.0..1.0).contains(&x));
    }
}
