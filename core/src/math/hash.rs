//! Stateless hash functions.
//!
//! A hash maps a seed deterministically to a pseudo-random value in [0, 1).
//! The scene derives every random quantity, such as the lane of a car or
//! the phase of a raindrop, by hashing some function of time and instance
//! index, so nothing needs to be remembered between frames.

use super::{Vec2, Vec3, fract, splat, vec3};
#[cfg(feature = "fp")]
use super::float::f32 as fp;

/// Trait for families of hash functions.
///
/// Implementations must be pure: equal inputs give bit-identical outputs.
/// For finite inputs, every output channel must be in [0, 1).
pub trait HashFn: Copy {
    /// Hashes a scalar to a scalar.
    fn hash1(&self, x: f32) -> f32;

    /// Hashes a 2-vector to a scalar.
    fn hash2(&self, p: Vec2) -> f32;

    /// Hashes a scalar to three pseudo-independent channels.
    fn hash3(&self, x: f32) -> Vec3;
}

/// The default hash family.
///
/// [`hash1`][HashFn::hash1] scrambles its input with a sine followed by a
/// large multiplier, keeping only the fractional part. The vector hashes
/// multiply by fixed fractional coefficients, perturb each channel by the
/// dot product with its own rotation, and combine channels crosswise.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Scramble;

/// A "hash" that returns the same value on every channel for every input.
///
/// Useful for examining a scene with all randomness pinned down.
/// The value should be in [0, 1) to honor the contract of [`HashFn`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Constant(pub f32);

#[cfg(feature = "fp")]
impl HashFn for Scramble {
    #[inline]
    fn hash1(&self, x: f32) -> f32 {
        fract(fp::sin(x * 10234.324) * 123423.235)
    }

    fn hash2(&self, p: Vec2) -> f32 {
        let [x, y] = p.0;
        let p = perturb(vec3(x, y, x) * vec3(443.897, 441.423, 437.195));
        let [x, y, z] = p.0;
        fract((x + y) * z)
    }

    fn hash3(&self, x: f32) -> Vec3 {
        let p = perturb(splat::<3>(x) * vec3(0.1031, 0.11369, 0.13787));
        let [x, y, z] = p.0;
        vec3((x + y) * z, (x + z) * y, (y + z) * x).map(fract)
    }
}

/// Takes the fractional parts of `p`, then adds to each channel the dot
/// product of `p` with its cyclic rotation `p.yzx + 19.19`.
#[inline]
#[cfg(feature = "fp")]
fn perturb(p: Vec3) -> Vec3 {
    let p = p.map(fract);
    let [x, y, z] = p.0;
    p + splat::<3>(p.dot(&vec3(y + 19.19, z + 19.19, x + 19.19)))
}

impl HashFn for Constant {
    #[inline]
    fn hash1(&self, _: f32) -> f32 {
        self.0
    }
    #[inline]
    fn hash2(&self, _: Vec2) -> f32 {
        self.0
    }
    #[inline]
    fn hash3(&self, _: f32) -> Vec3 {
        splat(self.0)
    }
}

#[cfg(all(test, feature = "fp"))]
mod tests {
    use crate::math::vec2;

    use super::*;

    const IN_RANGE: core::ops::Range<f32> = 0.0..1.0;

    fn seeds() -> impl Iterator<Item = f32> {
        // Irregular seeds over a wide domain, both signs
        (-5000..5000).map(|i| i as f32 * 0.731 + (i % 7) as f32 * 13.1)
    }

    #[test]
    fn hash1_in_range() {
        for x in seeds() {
            let h = Scramble.hash1(x);
            assert!(IN_RANGE.contains(&h), "hash1({x}) = {h}");
        }
    }

    #[test]
    fn hash2_in_range() {
        for x in seeds() {
            let h = Scramble.hash2(vec2(x, -0.37 * x + 11.0));
            assert!(IN_RANGE.contains(&h), "hash2({x}) = {h}");
        }
    }

    #[test]
    fn hash3_channels_in_range() {
        for x in seeds() {
            let h = Scramble.hash3(x);
            for c in h.0 {
                assert!(IN_RANGE.contains(&c), "hash3({x}) = {h:?}");
            }
        }
    }

    #[test]
    fn hashes_are_deterministic() {
        for x in [0.0, 1.0, -17.25, 1234.5] {
            assert_eq!(Scramble.hash1(x).to_bits(), Scramble.hash1(x).to_bits());
            assert_eq!(Scramble.hash3(x), Scramble.hash3(x));
            let p = vec2(x, 2.0 * x);
            assert_eq!(Scramble.hash2(p).to_bits(), Scramble.hash2(p).to_bits());
        }
    }

    #[test]
    fn hash3_channels_differ() {
        let differing = seeds()
            .map(|x| Scramble.hash3(x).0)
            .filter(|[a, b, c]| a != b && b != c && a != c)
            .count();
        assert!(differing > 9000, "only {differing} of 10000 differ");
    }

    #[test]
    fn hash1_spreads_over_unit_interval() {
        let mut bins = [0u32; 10];
        for x in seeds() {
            bins[((Scramble.hash1(x) * 10.0) as usize).min(9)] += 1;
        }
        for (i, n) in bins.iter().enumerate() {
            assert!(*n > 500, "bin {i} has only {n} of 10000 samples");
        }
    }

    #[test]
    fn constant_is_constant() {
        let c = Constant(0.25);
        assert_eq!(c.hash1(123.0), 0.25);
        assert_eq!(c.hash2(vec2(1.0, 2.0)), 0.25);
        assert_eq!(c.hash3(-9.0), splat(0.25));
    }
}
