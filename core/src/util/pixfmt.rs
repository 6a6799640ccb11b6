//! Pixel formats and conversions from colors to pixels.

use crate::math::{Color3, Color3f};

/// Trait for converting colors to pixels of type `T` in format `F`.
///
/// Renderers are generic over the pixel type of their target buffer; the
/// format parameter disambiguates layouts that share a storage type.
pub trait IntoPixel<T, F>: Sized {
    /// Converts `self` to `T` in format `F`.
    fn into_pixel(self) -> T;

    /// Converts `self` to `T`, taking an `F` to help type inference.
    ///
    /// This can be used to avoid the awkward fully-qualified syntax
    /// `IntoPixel::<_, F>::into_pixel(self)`.
    fn into_pixel_fmt(self, _: F) -> T {
        self.into_pixel()
    }
}

/// Eight-bit channels in R,G,B order.
///
/// As a `u32`, the top byte is unused: `0x00_RR_GG_BB`.
#[derive(Copy, Clone, Debug, Default)]
pub struct Rgb888;

impl IntoPixel<u32, Rgb888> for Color3 {
    fn into_pixel(self) -> u32 {
        self.to_rgb_u32()
    }
}
impl IntoPixel<[u8; 3], Rgb888> for Color3 {
    fn into_pixel(self) -> [u8; 3] {
        self.0
    }
}
impl IntoPixel<Color3, Rgb888> for Color3 {
    fn into_pixel(self) -> Color3 {
        self
    }
}

/// Float colors are clamped to [0, 1] and quantized to eight bits.
impl<T> IntoPixel<T, Rgb888> for Color3f
where
    Color3: IntoPixel<T, Rgb888>,
{
    fn into_pixel(self) -> T {
        self.to_color3().into_pixel()
    }
}
