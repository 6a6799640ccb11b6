//! Floating-point compatibility API.
//!
//! Most floating-point functions are unavailable in `no_std`. This module
//! provides the ones used by this crate using either `std`, the `libm`
//! crate, or the `micromath` crate, depending on which feature is enabled.
//! As a fallback, a critical subset is implemented even if none of the
//! features is enabled.
//!
//! Import the selected backend under an alias that does not shadow the
//! primitive type, then call functions through it:
//! ```
//! use nightrain_core::math::float::f32 as fp;
//! assert_eq!(fp::floor(-1.5), -2.0);
//! ```

#[cfg(feature = "libm")]
pub mod libm {
    pub use libm::fabsf as abs;
    pub use libm::floorf as floor;

    pub use libm::powf;
    pub use libm::sqrtf as sqrt;

    pub use libm::cosf as cos;
    pub use libm::sinf as sin;

    pub use libm::log2f as log2;
}

#[cfg(feature = "mm")]
pub mod mm {
    use micromath::F32Ext as mm;

    #[inline]
    pub fn abs(x: f32) -> f32 {
        mm::abs(x)
    }
    #[inline]
    pub fn floor(x: f32) -> f32 {
        mm::floor(x)
    }
    /// Returns the approximate square root of `x`.
    #[inline]
    pub fn sqrt(x: f32) -> f32 {
        if x <= 0.0 {
            return if x == 0.0 { 0.0 } else { f32::NAN };
        }
        let y = mm::sqrt(x);
        // Two rounds of Newton's method
        let y = 0.5 * (y + (x / y));
        0.5 * (y + (x / y))
    }
    #[inline]
    pub fn powf(x: f32, y: f32) -> f32 {
        mm::powf(x, y)
    }
    #[inline]
    pub fn sin(x: f32) -> f32 {
        mm::sin(x)
    }
    #[inline]
    pub fn cos(x: f32) -> f32 {
        mm::cos(x)
    }
    #[inline]
    pub fn log2(x: f32) -> f32 {
        mm::log2(x)
    }
}

pub mod fallback {
    /// Returns the largest integer less than or equal to `x`.
    #[inline]
    pub fn floor(x: f32) -> f32 {
        (x as i64 - (x < (x as i64) as f32) as i64) as f32
    }
    /// Returns the absolute value of `x`.
    #[inline]
    pub fn abs(x: f32) -> f32 {
        f32::from_bits(x.to_bits() & !(1 << 31))
    }
    /// Returns the approximate square root of `x`.
    #[inline]
    pub fn sqrt(x: f32) -> f32 {
        if x <= 0.0 {
            return if x == 0.0 { 0.0 } else { f32::NAN };
        }
        // Initial guess from halving the exponent
        let mut y = f32::from_bits((x.to_bits() >> 1) + 0x1fbd_1df5);
        // Three rounds of Newton's method
        for _ in 0..3 {
            y = 0.5 * (y + x / y);
        }
        y
    }
}

#[cfg(feature = "std")]
#[allow(non_camel_case_types)]
pub type f32 = core::primitive::f32;

#[cfg(all(feature = "libm", not(feature = "std")))]
pub use libm as f32;

#[cfg(all(feature = "mm", not(feature = "std"), not(feature = "libm")))]
pub use mm as f32;

#[cfg(not(feature = "fp"))]
pub use fallback as f32;
