//! Various utility types and functions.

pub use dims::Dims;

pub mod buf;
pub mod pixfmt;
pub mod pnm;

pub mod dims {
    /// Width and height of a rectangular area, such as a window or a
    /// pixel buffer.
    #[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Dims<T = u32>(pub T, pub T);

    impl<T: Copy> Dims<T> {
        pub fn width(&self) -> T {
            self.0
        }
        pub fn height(&self) -> T {
            self.1
        }
    }
    impl Dims<u32> {
        /// Returns the ratio of width to height.
        pub fn aspect_ratio(&self) -> f32 {
            self.0 as f32 / self.1 as f32
        }
        /// Returns the total number of pixels in an area of size `self`.
        pub fn area(&self) -> usize {
            self.0 as usize * self.1 as usize
        }
    }

    impl From<(u32, u32)> for Dims {
        fn from((w, h): (u32, u32)) -> Self {
            Self(w, h)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dims_aspect_and_area() {
        let d = Dims(1280, 720);
        assert_eq!(d.aspect_ratio(), 16.0 / 9.0);
        assert_eq!(d.area(), 921_600);
        assert_eq!(Dims::from((600, 600)).aspect_ratio(), 1.0);
    }
}
