//! Vectors, colors, hashing and other useful mathematics.
//!
//! Includes [vectors][self::vec], [colors][color], [hash functions][hash],
//! [shaping functions][shape] in the style of shading languages, and
//! utilities such as approximate equality comparisons.
//!
//! Floating-point functions outside `core` are routed through the
//! [`float`] compatibility layer so that the same code runs with `std`,
//! `libm`, or `micromath`.

pub use {
    approx::ApproxEq,
    color::{Color, Color3, Color3f, rgb},
    hash::{Constant, HashFn, Scramble},
    shape::{fract, remap, saturate, smooth_edge, smoothstep, step},
    vec::{Vec2, Vec3, Vector, splat, vec2, vec3},
};

pub mod approx;
pub mod color;
pub mod float;
pub mod hash;
pub mod shape;
pub mod vec;

/// Trait for linear interpolation between two values.
pub trait Lerp: Sized {
    /// Linearly interpolates between `self` and `other`.
    ///
    /// if `t` = 0, returns `self`; if `t` = 1, returns `other`.
    /// For 0 < `t` < 1, returns the weighted average of `self` and `other`
    /// ```text
    /// (1 - t) * self + t * other
    /// ```
    /// Values of `t` outside [0, 1] extrapolate.
    ///
    /// # Examples
    /// ```
    /// use nightrain_core::math::Lerp;
    ///
    /// assert_eq!(f32::lerp(&1.0, &5.0, 0.25), 2.0);
    /// ```
    fn lerp(&self, other: &Self, t: f32) -> Self;
}

/// Linearly interpolates between two values.
///
/// Equivalent to `mix(from, to, t)` in GLSL. For examples and more
/// information, see [`Lerp::lerp`].
#[inline]
pub fn lerp<T: Lerp>(t: f32, from: T, to: T) -> T {
    from.lerp(&to, t)
}

/// Returns the relative position of `t` between `min` and `max`.
///
/// That is, returns 0 when `t` = `min`, 1 when `t` = `max`, and linearly
/// interpolates in between.
///
/// The result is unspecified if any of the parameters is non-finite, or if
/// `min` = `max`.
///
/// # Examples
/// ```
/// use nightrain_core::math::inv_lerp;
///
/// // Two is one fourth of the way from one to five
/// assert_eq!(inv_lerp(2.0, 1.0, 5.0), 0.25);
///
/// // Zero is halfway between -2 and 2
/// assert_eq!(inv_lerp(0.0, -2.0, 2.0), 0.5);
/// ```
#[inline]
pub fn inv_lerp(t: f32, min: f32, max: f32) -> f32 {
    (t - min) / (max - min)
}

impl Lerp for f32 {
    #[inline]
    fn lerp(&self, other: &Self, t: f32) -> Self {
        self + t * (other - self)
    }
}
