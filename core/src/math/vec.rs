//! Real vectors in two and three dimensions.
//!
//! Vectors are thin wrappers of `f32` arrays. Arithmetic operators work
//! component-wise, like in shading languages: `v * w` multiplies matching
//! components, `v * s` scales by a scalar.

use core::{
    array,
    fmt::{self, Debug, Formatter},
    ops::{Add, AddAssign, Div, Index, Mul, MulAssign, Neg, Sub, SubAssign},
};

use super::{ApproxEq, Lerp, float::f32 as fp};

//
// Types
//

/// A generic vector type.
///
/// # Type parameters
/// * `Repr`: Representation of the scalar components of the vector,
///   currently always an array of `f32`.
#[repr(transparent)]
#[derive(Copy, Clone, Default, PartialEq)]
pub struct Vector<Repr>(pub Repr);

/// A 2-vector with `f32` components.
pub type Vec2 = Vector<[f32; 2]>;

/// A 3-vector with `f32` components.
pub type Vec3 = Vector<[f32; 3]>;

//
// Free fns
//

/// Returns a 2D vector with components `x` and `y`.
#[inline]
pub const fn vec2(x: f32, y: f32) -> Vec2 {
    Vector([x, y])
}

/// Returns a 3D vector with components `x`, `y`, and `z`.
#[inline]
pub const fn vec3(x: f32, y: f32, z: f32) -> Vec3 {
    Vector([x, y, z])
}

/// Returns a vector with all components equal to `s`.
///
/// # Examples
/// ```
/// # use nightrain_core::math::vec::{splat, vec3, Vec3};
/// let v: Vec3 = splat(0.5);
/// assert_eq!(v, vec3(0.5, 0.5, 0.5));
/// ```
#[inline]
pub const fn splat<const N: usize>(s: f32) -> Vector<[f32; N]> {
    Vector([s; N])
}

//
// Inherent impls
//

impl<const N: usize> Vector<[f32; N]> {
    /// The zero vector.
    pub const ZERO: Self = Self([0.0; N]);

    /// Returns the dot product of `self` and `other`.
    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        let mut res = 0.0;
        for i in 0..N {
            res += self.0[i] * other.0[i];
        }
        res
    }

    /// Returns the Euclidean length of `self`.
    #[inline]
    pub fn len(&self) -> f32 {
        fp::sqrt(self.dot(self))
    }

    /// Returns `self` scaled to unit length.
    ///
    /// The result is non-finite if `self` is the zero vector.
    #[inline]
    #[must_use]
    pub fn normalize(&self) -> Self {
        *self / self.len()
    }

    /// Returns a vector with `f` applied to each component of `self`.
    #[inline]
    #[must_use]
    pub fn map(self, mut f: impl FnMut(f32) -> f32) -> Self {
        Self(self.0.map(&mut f))
    }

    /// Returns a vector with `f` applied to each pair of matching
    /// components of `self` and `other`.
    #[inline]
    #[must_use]
    pub fn zip_map(self, other: Self, mut f: impl FnMut(f32, f32) -> f32) -> Self {
        Self(array::from_fn(|i| f(self.0[i], other.0[i])))
    }
}

impl Vec2 {
    /// Unit vector codirectional with the positive x-axis.
    pub const X: Self = vec2(1.0, 0.0);
    /// Unit vector codirectional with the positive y-axis.
    pub const Y: Self = vec2(0.0, 1.0);

    /// Returns the x component of `self`.
    #[inline]
    pub const fn x(&self) -> f32 {
        self.0[0]
    }
    /// Returns the y component of `self`.
    #[inline]
    pub const fn y(&self) -> f32 {
        self.0[1]
    }
}

impl Vec3 {
    /// Unit vector codirectional with the positive x-axis.
    pub const X: Self = vec3(1.0, 0.0, 0.0);
    /// Unit vector codirectional with the positive y-axis.
    pub const Y: Self = vec3(0.0, 1.0, 0.0);
    /// Unit vector codirectional with the positive z-axis.
    pub const Z: Self = vec3(0.0, 0.0, 1.0);

    /// Returns the x component of `self`.
    #[inline]
    pub const fn x(&self) -> f32 {
        self.0[0]
    }
    /// Returns the y component of `self`.
    #[inline]
    pub const fn y(&self) -> f32 {
        self.0[1]
    }
    /// Returns the z component of `self`.
    #[inline]
    pub const fn z(&self) -> f32 {
        self.0[2]
    }

    /// Returns the cross product of `self` and `other`.
    ///
    /// The result is perpendicular to both operands, and its length equals
    /// the area of the parallelogram they span.
    pub fn cross(&self, other: &Self) -> Self {
        let [a, b, c] = self.0;
        let [d, e, f] = other.0;
        vec3(b * f - c * e, c * d - a * f, a * e - b * d)
    }
}

//
// Trait impls
//

impl<const N: usize> Debug for Vector<[f32; N]> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Vec{:?}", self.0)
    }
}

impl<const N: usize> From<[f32; N]> for Vector<[f32; N]> {
    #[inline]
    fn from(els: [f32; N]) -> Self {
        Self(els)
    }
}

impl<const N: usize> Index<usize> for Vector<[f32; N]> {
    type Output = f32;
    #[inline]
    fn index(&self, i: usize) -> &f32 {
        &self.0[i]
    }
}

impl<const N: usize> Lerp for Vector<[f32; N]> {
    #[inline]
    fn lerp(&self, other: &Self, t: f32) -> Self {
        self.zip_map(*other, |a, b| a.lerp(&b, t))
    }
}

impl<const N: usize> ApproxEq<Self, f32> for Vector<[f32; N]> {
    fn approx_eq_eps(&self, other: &Self, rel_eps: &f32) -> bool {
        self.0.approx_eq_eps(&other.0, rel_eps)
    }
    fn relative_epsilon() -> f32 {
        f32::relative_epsilon()
    }
}

/// Implements a component-wise binary operator and its assigning variant.
macro_rules! impl_op {
    ($trait:ident :: $method:ident, $atrait:ident :: $amethod:ident, $op:tt) => {
        impl<const N: usize> $trait for Vector<[f32; N]> {
            type Output = Self;
            #[inline]
            fn $method(self, rhs: Self) -> Self {
                self.zip_map(rhs, |a, b| a $op b)
            }
        }
        impl<const N: usize> $atrait for Vector<[f32; N]> {
            #[inline]
            fn $amethod(&mut self, rhs: Self) {
                *self = *self $op rhs;
            }
        }
    };
}

impl_op!(Add::add, AddAssign::add_assign, +);
impl_op!(Sub::sub, SubAssign::sub_assign, -);
impl_op!(Mul::mul, MulAssign::mul_assign, *);

impl<const N: usize> Mul<f32> for Vector<[f32; N]> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self {
        self.map(|a| a * rhs)
    }
}

impl<const N: usize> Mul<Vector<[f32; N]>> for f32 {
    type Output = Vector<[f32; N]>;
    #[inline]
    fn mul(self, rhs: Vector<[f32; N]>) -> Self::Output {
        rhs * self
    }
}

impl<const N: usize> MulAssign<f32> for Vector<[f32; N]> {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl<const N: usize> Div<f32> for Vector<[f32; N]> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f32) -> Self {
        self.map(|a| a / rhs)
    }
}

impl<const N: usize> Neg for Vector<[f32; N]> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        self.map(|a| -a)
    }
}
