//! Frontends for running `nightrain` pixel shaders in a window.

use std::time::Duration;

use thiserror::Error;

use nightrain_core::{
    render::{FrameContext, Stats},
    util::buf::Buf2,
};

#[cfg(feature = "minifb")]
pub mod minifb;

/// Per-frame state. The window run method passes an instance of `Frame`
/// to the callback function on every iteration of the main loop.
pub struct Frame<'a, Win> {
    /// Elapsed time since the start of the first frame.
    pub t: Duration,
    /// Elapsed time since the start of the previous frame.
    pub dt: Duration,
    /// Frame parameters to pass to pixel shaders.
    pub ctx: FrameContext,
    /// Framebuffer in which to draw, in `0x00_RR_GG_BB` format.
    pub buf: &'a mut Buf2<u32>,
    /// Reference to the window object.
    pub win: &'a mut Win,
    /// Rendering statistics. Add the stats of each render call here.
    pub stats: &'a mut Stats,
}

/// Errors reported by frontends.
#[derive(Debug, Error)]
pub enum Error {
    /// The window could not be created.
    #[cfg(feature = "minifb")]
    #[error("could not create window")]
    Window(#[source] ::minifb::Error),
    /// A frame could not be shown in the window.
    #[cfg(feature = "minifb")]
    #[error("could not present frame")]
    Present(#[source] ::minifb::Error),
    /// The requested window size has zero width or height.
    #[error("invalid window size {0}×{1}")]
    InvalidDims(u32, u32),
}

pub mod dims {
    //! Common window sizes.
    use nightrain_core::util::Dims;

    /// The square window of the flat quad demo.
    pub const SQUARE_600: Dims = Dims(600, 600);
    /// The 16:9 window of the night drive demo.
    pub const HD_1280_720: Dims = Dims(1280, 720);
    /// The default window size.
    pub const SVGA_800_600: Dims = Dims(800, 600);
}

impl<Win> Frame<'_, Win> {
    /// Clears the framebuffer to black.
    pub fn clear(&mut self) {
        self.buf.fill(0);
    }
}
