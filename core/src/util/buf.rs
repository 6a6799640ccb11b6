//! Two-dimensional buffers.

use alloc::vec::Vec;
use core::{
    fmt::{self, Debug, Formatter},
    iter::repeat_n,
    ops::{Index, IndexMut},
};

use super::Dims;

/// A rectangular 2D buffer that owns its elements, backed by a `Vec`.
///
/// `Buf2` stores its elements contiguously, in standard row-major order,
/// such that element (x, y) maps to element at index
/// ```text
/// buf.width() * y + x
/// ```
/// in the backing vector.
///
/// # Examples
/// ```
/// # use nightrain_core::util::buf::Buf2;
/// // Elements initialized with `Default::default()`
/// let mut buf = Buf2::new_default(4, 4);
/// // Indexing with [x, y] yields element at row y, column x:
/// buf[[2, 1]] = 123;
/// // Indexing with an usize i yields row with index i as a slice:
/// assert_eq!(&buf[1usize], &[0, 0, 123, 0]);
/// // Thus you can also do this, row first, column second:
/// assert_eq!(buf[1usize][2], 123)
/// ```
#[derive(Clone, Eq, PartialEq)]
pub struct Buf2<T> {
    w: usize,
    h: usize,
    data: Vec<T>,
}

impl<T> Buf2<T> {
    /// Returns a buffer with size `w` × `h`, with elements initialized
    /// with values from `init` in row-major order.
    ///
    /// # Panics
    /// If there are fewer than `w * h` elements in `init`.
    pub fn new<I>(w: usize, h: usize, init: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let data: Vec<_> = init.into_iter().take(w * h).collect();
        assert_eq!(data.len(), w * h);
        Self { w, h, data }
    }
    /// Returns a buffer with size `w` × `h`, with every element
    /// initialized by calling `T::default()`.
    pub fn new_default(w: usize, h: usize) -> Self
    where
        T: Clone + Default,
    {
        Self::new(w, h, repeat_n(T::default(), w * h))
    }
    /// Returns a buffer with size `w` × `h`, with every element
    /// initialized by calling `init_fn(x, y)` where x is the column index
    /// and y the row index of the element being initialized.
    pub fn new_with<F>(w: usize, h: usize, mut init_fn: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut data = Vec::with_capacity(w * h);
        for y in 0..h {
            data.extend((0..w).map(|x| init_fn(x, y)));
        }
        Self { w, h, data }
    }

    /// Returns the width of `self`.
    #[inline]
    pub fn width(&self) -> usize {
        self.w
    }
    /// Returns the height of `self`.
    #[inline]
    pub fn height(&self) -> usize {
        self.h
    }
    /// Returns the width and height of `self`.
    pub fn dims(&self) -> Dims {
        Dims(self.w as u32, self.h as u32)
    }

    /// Returns a view of the backing data of `self`.
    pub fn data(&self) -> &[T] {
        &self.data
    }
    /// Returns a mutable view of the backing data of `self`.
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Returns an iterator over the rows of `self` as `&[T]` slices.
    /// The length of each slice equals [`self.width()`](Self::width).
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // max(1) as chunks panics on zero
        self.data.chunks(self.w.max(1))
    }
    /// Returns an iterator over the rows of this buffer as `&mut [T]`.
    /// The length of each slice equals [`self.width()`](Self::width).
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [T]> {
        self.data.chunks_mut(self.w.max(1))
    }

    /// Returns a reference to the element at (x, y),
    /// or `None` if the position is out of bounds.
    pub fn get(&self, [x, y]: [usize; 2]) -> Option<&T> {
        (x < self.w && y < self.h).then(|| &self.data[y * self.w + x])
    }

    /// Fills the buffer with clones of `val`.
    pub fn fill(&mut self, val: T)
    where
        T: Clone,
    {
        self.data.fill(val);
    }
}

impl<T> Debug for Buf2<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buf2")
            .field("w", &self.w)
            .field("h", &self.h)
            .finish()
    }
}

impl<T> Index<usize> for Buf2<T> {
    type Output = [T];

    /// Returns a reference to the row of `self` at index `i`.
    /// The returned slice has length `self.width()`.
    #[inline]
    fn index(&self, i: usize) -> &[T] {
        &self.data[i * self.w..][..self.w]
    }
}

impl<T> IndexMut<usize> for Buf2<T> {
    /// Returns a mutable reference to the row of `self` at index `i`.
    /// The returned slice has length `self.width()`.
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut [T] {
        let w = self.w;
        &mut self.data[i * w..][..w]
    }
}

impl<T> Index<[usize; 2]> for Buf2<T> {
    type Output = T;

    /// Returns a reference to the element at column x, row y.
    ///
    /// # Panics
    /// If x or y is out of bounds.
    #[inline]
    fn index(&self, [x, y]: [usize; 2]) -> &T {
        &self[y][x]
    }
}

impl<T> IndexMut<[usize; 2]> for Buf2<T> {
    /// Returns a mutable reference to the element at column x, row y.
    ///
    /// # Panics
    /// If x or y is out of bounds.
    #[inline]
    fn index_mut(&mut self, [x, y]: [usize; 2]) -> &mut T {
        &mut self[y][x]
    }
}
