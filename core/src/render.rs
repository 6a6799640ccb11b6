//! Turning pixel shaders into raster images.
//!
//! A [pixel shader][PixelShader] is a pure function from a pixel's
//! normalized position and the [frame parameters][FrameContext] to a color.
//! The functions in this module invoke a shader once per pixel of a buffer
//! and convert the results to the buffer's pixel format.
//!
//! Pixel (x, y), with y increasing downwards in the buffer, is shaded at
//! ```text
//! uv = ((x + ½) / w, 1 - (y + ½) / h)
//! ```
//! so that, as in OpenGL, (0, 0) is the bottom left corner of the image and
//! (1, 1) the top right, and samples are taken at pixel centers.

use log::trace;

use crate::math::{Color3f, Vec2, vec2};
use crate::util::{
    Dims,
    buf::Buf2,
    pixfmt::{IntoPixel, Rgb888},
};

pub use stats::Stats;

#[cfg(feature = "fp")]
pub mod flat;
pub mod stats;
#[cfg(feature = "fp")]
pub mod text;

/// Per-frame parameters shared by every pixel of a frame.
///
/// Owned by the frame driver, read-only to shaders.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FrameContext {
    /// Elapsed time in seconds.
    pub time: f64,
    /// Width and height of the viewport in pixels.
    pub resolution: Dims,
}

/// Trait for pixel shaders, used to compute the color of each pixel
/// of an image independently of the others.
pub trait PixelShader {
    /// Computes the color of the pixel at `uv`, in normalized coordinates
    /// where (0, 0) is the bottom left and (1, 1) the top right corner of
    /// the viewport.
    ///
    /// # Panics
    /// `shade_pixel` should never panic.
    fn shade_pixel(&self, uv: Vec2, frame: &FrameContext) -> Color3f;
}

impl<F> PixelShader for F
where
    F: Fn(Vec2, &FrameContext) -> Color3f,
{
    fn shade_pixel(&self, uv: Vec2, frame: &FrameContext) -> Color3f {
        self(uv, frame)
    }
}

impl FrameContext {
    /// Returns a new frame context.
    pub fn new(time: f64, resolution: impl Into<Dims>) -> Self {
        Self { time, resolution: resolution.into() }
    }

    /// Returns the normalized coordinates of the center of pixel (x, y),
    /// where y grows downwards.
    #[inline]
    pub fn pixel_uv(&self, x: usize, y: usize) -> Vec2 {
        let Dims(w, h) = self.resolution;
        vec2(
            (x as f32 + 0.5) / w as f32,
            1.0 - (y as f32 + 0.5) / h as f32,
        )
    }

    /// Returns the window coordinates of `uv`, in pixels from the bottom
    /// left corner, like `gl_FragCoord`.
    #[inline]
    pub fn frag_coord(&self, uv: Vec2) -> Vec2 {
        let Dims(w, h) = self.resolution;
        vec2(uv.x() * w as f32, uv.y() * h as f32)
    }
}

/// Shades every pixel of `buf` with `shader`, row by row.
///
/// The resolution of `frame` should equal the dimensions of `buf`.
/// Returns statistics about the rendering.
pub fn render<S, P>(
    shader: &S,
    frame: &FrameContext,
    buf: &mut Buf2<P>,
) -> Stats
where
    S: PixelShader + ?Sized,
    Color3f: IntoPixel<P, Rgb888>,
{
    debug_assert_eq!(frame.resolution, buf.dims());
    trace!("rendering frame at t={:.3}s, {:?}", frame.time, buf.dims());

    let stats = Stats::start();
    for (y, row) in buf.rows_mut().enumerate() {
        shade_row(shader, frame, y, row);
    }
    stats.finish().frame(buf.dims())
}

/// Shades every pixel of `buf` with `shader`, rows in parallel.
///
/// The result is identical to that of [`render`].
#[cfg(feature = "rayon")]
pub fn par_render<S, P>(
    shader: &S,
    frame: &FrameContext,
    buf: &mut Buf2<P>,
) -> Stats
where
    S: PixelShader + Sync + ?Sized,
    P: Send,
    Color3f: IntoPixel<P, Rgb888>,
{
    use rayon::prelude::*;

    debug_assert_eq!(frame.resolution, buf.dims());
    trace!(
        "rendering frame at t={:.3}s, {:?} in parallel",
        frame.time,
        buf.dims()
    );

    let stats = Stats::start();
    let w = buf.width().max(1);
    buf.data_mut()
        .par_chunks_mut(w)
        .enumerate()
        .for_each(|(y, row)| shade_row(shader, frame, y, row));
    stats.finish().frame(buf.dims())
}

#[inline]
fn shade_row<S, P>(shader: &S, frame: &FrameContext, y: usize, row: &mut [P])
where
    S: PixelShader + ?Sized,
    Color3f: IntoPixel<P, Rgb888>,
{
    for (x, pix) in row.iter_mut().enumerate() {
        let uv = frame.pixel_uv(x, y);
        *pix = shader.shade_pixel(uv, frame).into_pixel();
    }
}
