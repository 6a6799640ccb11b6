//! Shaping functions in the style of shading languages.
//!
//! These follow the GLSL definitions where one exists, and differ from
//! their namesakes in `core` where GLSL does: [`fract`] is `x - floor(x)`,
//! which is never negative, unlike [`f32::fract`].

use super::{float::f32 as fp, inv_lerp};

/// The largest `f32` less than one.
const ONE_MINUS_EPS: f32 = 1.0 - f32::EPSILON / 2.0;

/// Returns the fractional part of `x`, defined as `x - floor(x)`.
///
/// The result is always in [0, 1) for finite `x`, including the negative
/// values just below an integer whose difference would round up to 1.0.
///
/// # Examples
/// ```
/// use nightrain_core::math::fract;
///
/// assert_eq!(fract(1.25), 0.25);
/// assert_eq!(fract(-0.25), 0.75);
/// assert!(fract(-1e-9) < 1.0);
/// ```
#[inline]
pub fn fract(x: f32) -> f32 {
    let f = x - fp::floor(x);
    if f >= 1.0 { ONE_MINUS_EPS } else { f }
}

/// Clamps `x` to [0, 1].
#[inline]
pub fn saturate(x: f32) -> f32 {
    x.clamp(0.0, 1.0)
}

/// Interpolates smoothly from 0.0 to 1.0 as `t` goes from 0.0 to 1.0.
///
/// Returns 0 for all `t` <= 0 and 1 for all `t` >= 1. Has a continuous
/// first derivative.
#[inline]
pub fn smoothstep(t: f32) -> f32 {
    step(t, &0.0, &1.0, |t| t * t * (3.0 - 2.0 * t))
}

/// Hermite interpolation of `x` between the edges `e0` and `e1`.
///
/// Equivalent to the three-argument `smoothstep` of GLSL. The edges may be
/// given in either order: if `e0 > e1`, the result falls from 1 to 0 as
/// `x` goes from `e1` to `e0`. If the edges coincide, the result is a hard
/// step: 0 if `x < e0`, otherwise 1.
///
/// # Examples
/// ```
/// use nightrain_core::math::smooth_edge;
///
/// assert_eq!(smooth_edge(1.0, 3.0, 2.0), 0.5);
/// assert_eq!(smooth_edge(3.0, 1.0, 0.0), 1.0);
/// assert_eq!(smooth_edge(2.0, 2.0, 2.0), 1.0);
/// ```
#[inline]
pub fn smooth_edge(e0: f32, e1: f32, x: f32) -> f32 {
    if e0 == e1 {
        return if x < e0 { 0.0 } else { 1.0 };
    }
    smoothstep(inv_lerp(x, e0, e1))
}

/// Maps `t` linearly from the range `a..b` to the range `c..d`.
///
/// Does not clamp: values outside `a..b` extrapolate.
///
/// # Examples
/// ```
/// use nightrain_core::math::remap;
///
/// assert_eq!(remap(0.0, 10.0, 100.0, 200.0, 2.5), 125.0);
/// ```
#[inline]
pub fn remap(a: f32, b: f32, c: f32, d: f32, t: f32) -> f32 {
    inv_lerp(t, a, b) * (d - c) + c
}

/// Helper for defining step functions.
///
/// Returns `min` if t ≤ 0, `max` if t ≥ 1, and `f(t)` if 0 < t < 1.
#[inline]
pub fn step<T: Clone, F>(t: f32, min: &T, max: &T, f: F) -> T
where
    F: FnOnce(f32) -> T,
{
    if t <= 0.0 {
        min.clone()
    } else if t >= 1.0 {
        max.clone()
    } else {
        f(t)
    }
}

#[cfg(test)]
mod tests {
    use crate::assert_approx_eq;

    use super::*;

    #[test]
    fn fract_is_glsl_fract() {
        assert_eq!(fract(0.0), 0.0);
        assert_eq!(fract(2.5), 0.5);
        assert_eq!(fract(-2.5), 0.5);
        assert_eq!(fract(-3.0), 0.0);
    }

    #[test]
    fn fract_never_reaches_one() {
        for x in [-1e-9, -1e-12, -3.0 - 1e-7, -f32::MIN_POSITIVE] {
            let f = fract(x);
            assert!((0.0..1.0).contains(&f), "fract({x}) = {f}");
        }
    }

    #[test]
    fn fract_propagates_nan() {
        assert!(fract(f32::NAN).is_nan());
    }

    #[test]
    fn smoothstep_endpoints_and_midpoint() {
        assert_eq!(smoothstep(-1.0), 0.0);
        assert_eq!(smoothstep(0.0), 0.0);
        assert_eq!(smoothstep(0.5), 0.5);
        assert_eq!(smoothstep(1.0), 1.0);
        assert_eq!(smoothstep(2.0), 1.0);
    }

    #[test]
    fn smooth_edge_forward_and_reversed() {
        assert_eq!(smooth_edge(0.2, 0.1, 0.05), 1.0);
        assert_eq!(smooth_edge(0.2, 0.1, 0.25), 0.0);
        assert_approx_eq!(smooth_edge(0.2, 0.1, 0.15), 0.5);
        assert_approx_eq!(
            smooth_edge(0.1, 0.2, 0.13),
            1.0 - smooth_edge(0.2, 0.1, 0.13)
        );
    }

    #[test]
    fn smooth_edge_degenerate_is_step() {
        assert_eq!(smooth_edge(0.0, 0.0, -0.1), 0.0);
        assert_eq!(smooth_edge(0.0, 0.0, 0.0), 1.0);
        assert_eq!(smooth_edge(0.0, 0.0, 0.1), 1.0);
    }

    #[test]
    fn remap_matches_definition() {
        assert_approx_eq!(remap(1.0, 0.7, 0.1, 1.5, 1.0), 0.1);
        assert_approx_eq!(remap(1.0, 0.7, 0.1, 1.5, 0.7), 1.5);
        assert_approx_eq!(remap(1.0, 0.7, 0.1, 1.5, 0.0), 0.1 + 1.4 / 0.3);
    }
}
