//! Colors and color spaces.

use core::{
    fmt::{self, Debug, Formatter},
    marker::PhantomData,
    ops::{Add, AddAssign, Index, Mul},
};

use super::{ApproxEq, Lerp, Vec3};

//
// Types
//

/// A generic color type, similar to [`Vector`][super::Vector].
///
/// # Type parameters
/// * `Repr`: the representation of the components of `Self`.
///   Color components are also called *channels*.
/// * `Space`: the color space that `Self` is an element of.
#[repr(transparent)]
#[derive(Copy, Clone, Default, Eq, PartialEq)]
pub struct Color<Repr, Space>(pub Repr, PhantomData<Space>);

/// The linear RGB color space.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Rgb;

/// An RGB color with `u8` components.
pub type Color3<Space = Rgb> = Color<[u8; 3], Space>;

/// An RGB color with `f32` components.
///
/// Channels are nominally in [0, 1], but accumulated light can and does
/// exceed one; values are clamped only when converted to [`Color3`].
pub type Color3f<Space = Rgb> = Color<[f32; 3], Space>;

/// Returns a new RGB color with `r`, `g`, and `b` components.
pub const fn rgb<Ch>(r: Ch, g: Ch, b: Ch) -> Color<[Ch; 3], Rgb> {
    Color([r, g, b], PhantomData)
}

//
// Inherent impls
//

impl Color3 {
    /// Returns a `u32` containing the component bytes of `self`
    /// in format `0x00_RR_GG_BB`.
    #[inline]
    pub const fn to_rgb_u32(self) -> u32 {
        let [r, g, b] = self.0;
        u32::from_be_bytes([0x00, r, g, b])
    }
}

impl Color3f {
    /// Black, the additive identity.
    pub const BLACK: Self = rgb(0.0, 0.0, 0.0);

    /// Returns a `Color3` with the components of `self` mapped to `u8`
    /// with `(c.clamp(0.0, 1.0) * 255.0) as u8`.
    ///
    /// NaN channels map to zero.
    #[inline]
    pub fn to_color3(self) -> Color3 {
        Color(self.0.map(|c| (c.clamp(0.0, 1.0) * 255.0) as u8), PhantomData)
    }

    /// Returns `self` with each channel clamped to [0, 1].
    #[inline]
    #[must_use]
    pub fn saturate(self) -> Self {
        self.map(|c| c.clamp(0.0, 1.0))
    }

    /// Returns a color with `f` applied to each channel of `self`.
    #[inline]
    #[must_use]
    pub fn map(self, f: impl FnMut(f32) -> f32) -> Self {
        Color(self.0.map(f), PhantomData)
    }
}

impl<R, Sc> Color<R, Rgb>
where
    R: Index<usize, Output = Sc>,
    Sc: Copy,
{
    /// Returns the red component of `self`.
    pub fn r(&self) -> Sc {
        self.0[0]
    }
    /// Returns the green component of `self`.
    pub fn g(&self) -> Sc {
        self.0[1]
    }
    /// Returns the blue component of `self`.
    pub fn b(&self) -> Sc {
        self.0[2]
    }
}

//
// Trait impls
//

impl<Sc: Debug, Sp: Debug + Default> Debug for Color<[Sc; 3], Sp> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Color<{:?}>{:?}", Sp::default(), self.0)
    }
}

impl<Ch> From<[Ch; 3]> for Color<[Ch; 3], Rgb> {
    #[inline]
    fn from(els: [Ch; 3]) -> Self {
        Color(els, PhantomData)
    }
}

impl From<Vec3> for Color3f {
    /// Reinterprets the x, y, and z components of `v` as r, g, and b.
    #[inline]
    fn from(v: Vec3) -> Self {
        v.0.into()
    }
}

impl Add for Color3f {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        let [r, g, b] = self.0;
        let [s, h, c] = rhs.0;
        rgb(r + s, g + h, b + c)
    }
}

impl AddAssign for Color3f {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Mul<f32> for Color3f {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self {
        self.map(|c| c * rhs)
    }
}

/// Channel-wise product, used for tinting.
impl Mul for Color3f {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let [r, g, b] = self.0;
        let [s, h, c] = rhs.0;
        rgb(r * s, g * h, b * c)
    }
}

impl Lerp for Color3f {
    #[inline]
    fn lerp(&self, other: &Self, t: f32) -> Self {
        let [r, g, b] = self.0;
        let [s, h, c] = other.0;
        rgb(r.lerp(&s, t), g.lerp(&h, t), b.lerp(&c, t))
    }
}

impl ApproxEq<Self, f32> for Color3f {
    fn approx_eq_eps(&self, other: &Self, rel_eps: &f32) -> bool {
        self.0.approx_eq_eps(&other.0, rel_eps)
    }
    fn relative_epsilon() -> f32 {
        f32::relative_epsilon()
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use crate::{assert_approx_eq, math::vec3};

    use super::*;

    #[test]
    fn color3f_to_color3_clamps() {
        assert_eq!(rgb(0.0f32, 0.5, 1.0).to_color3(), rgb(0u8, 127, 255));
        assert_eq!(rgb(-1.0f32, 2.0, f32::NAN).to_color3(), rgb(0u8, 255, 0));
    }

    #[test]
    fn color3_to_rgb_u32() {
        assert_eq!(rgb(0x11u8, 0x22, 0x33).to_rgb_u32(), 0x00_11_22_33);
    }

    #[test]
    fn arithmetic() {
        let c: Color3f = rgb(0.1, 0.2, 0.3);
        assert_approx_eq!(c + c, rgb(0.2, 0.4, 0.6));
        assert_approx_eq!(c * 2.0, rgb(0.2, 0.4, 0.6));
        assert_approx_eq!(c * rgb(1.0, 0.5, 0.0), rgb(0.1, 0.1, 0.0));
        assert_approx_eq!(c.lerp(&Color3f::BLACK, 0.5), rgb(0.05, 0.1, 0.15));
    }

    #[test]
    fn from_vec3() {
        assert_eq!(Color3f::from(vec3(0.6, 0.5, 0.9)), rgb(0.6, 0.5, 0.9));
    }

    #[test]
    fn debug() {
        assert_eq!(format!("{:?}", rgb(1u8, 2, 3)), "Color<Rgb>[1, 2, 3]");
    }
}
