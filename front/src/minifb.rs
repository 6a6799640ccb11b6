//! Frontend using the `minifb` crate for window creation and event handling.

use std::{
    error::Error as _,
    ops::ControlFlow::{self, Break},
    time::Instant,
};

use log::{info, warn};
use minifb::{Key, MouseMode, WindowOptions};

use nightrain_core::{
    render::{FrameContext, Stats},
    util::{Dims, buf::Buf2},
};

use crate::{Error, Frame, dims::SVGA_800_600};

/// A lightweight wrapper of a `minifb` window.
pub struct Window {
    /// The wrapped minifb window.
    pub imp: minifb::Window,
    /// The width and height of the window.
    pub dims: Dims,
}

/// Builder for creating `Window`s.
pub struct Builder<'title> {
    pub dims: Dims,
    pub title: &'title str,
    pub target_fps: Option<u32>,
    pub opts: WindowOptions,
}

impl Default for Builder<'_> {
    fn default() -> Self {
        Self {
            dims: SVGA_800_600,
            title: "// nightrain //",
            target_fps: Some(60),
            opts: WindowOptions::default(),
        }
    }
}

impl<'t> Builder<'t> {
    /// Sets the width and height of the window.
    pub fn dims(mut self, dims: Dims) -> Self {
        self.dims = dims;
        self
    }
    /// Sets the title of the window.
    pub fn title(mut self, title: &'t str) -> Self {
        self.title = title;
        self
    }
    /// Sets the frame rate cap of the window. `None` means unlimited
    /// frame rate (the main loop runs as fast as possible).
    pub fn target_fps(mut self, fps: Option<u32>) -> Self {
        self.target_fps = fps;
        self
    }
    /// Sets other `minifb` options.
    pub fn options(mut self, opts: WindowOptions) -> Self {
        self.opts = opts;
        self
    }

    /// Creates the window.
    ///
    /// # Errors
    /// If the size has zero width or height, or if the window could not be
    /// created.
    pub fn build(self) -> Result<Window, Error> {
        let Self { dims, title, target_fps, opts } = self;
        let Dims(w, h) = dims;
        if w == 0 || h == 0 {
            return Err(Error::InvalidDims(w, h));
        }
        let mut imp = minifb::Window::new(title, w as usize, h as usize, opts)
            .map_err(Error::Window)?;
        if let Some(fps) = target_fps {
            imp.set_target_fps(fps as usize);
        }
        info!("created {w}×{h} window \"{title}\"");
        Ok(Window { imp, dims })
    }
}

impl Window {
    /// Returns a window builder.
    pub fn builder() -> Builder<'static> {
        Builder::default()
    }

    /// Updates the window content with pixel data from `fb`.
    ///
    /// The data is interpreted as colors in `0x00_RR_GG_BB` format.
    pub fn present(&mut self, fb: &[u32]) -> Result<(), Error> {
        let Dims(w, h) = self.dims;
        self.imp
            .update_with_buffer(fb, w as usize, h as usize)
            .map_err(Error::Present)
    }

    /// Returns the horizontal position of the mouse cursor, from 0.0 at
    /// the left edge of the window to 1.0 at the right edge, or `None` if
    /// the cursor is outside the window.
    pub fn mouse_x(&self) -> Option<f32> {
        let (x, _) = self.imp.get_mouse_pos(MouseMode::Discard)?;
        Some(x / self.dims.width() as f32)
    }

    /// Runs the main loop of the program, invoking the callback on each
    /// iteration to compute and draw the next frame.
    ///
    /// The main loop stops and this function returns if:
    /// * the user closes the window via the GUI (e.g. titlebar close button);
    /// * the Esc key is pressed; or
    /// * the callback returns `ControlFlow::Break`.
    ///
    /// Returns the accumulated statistics of all frames.
    pub fn run<F>(&mut self, mut frame_fn: F) -> Stats
    where
        F: FnMut(&mut Frame<Self>) -> ControlFlow<()>,
    {
        let Dims(w, h) = self.dims;
        let mut buf = Buf2::new_default(w as usize, h as usize);
        let mut stats = Stats::new();

        let start = Instant::now();
        let mut last = Instant::now();
        loop {
            if self.should_quit() {
                break;
            }
            let t = start.elapsed();
            let frame = &mut Frame {
                t,
                dt: last.elapsed(),
                ctx: FrameContext::new(t.as_secs_f64(), self.dims),
                buf: &mut buf,
                win: self,
                stats: &mut stats,
            };
            frame.clear();

            last = Instant::now();
            if let Break(_) = frame_fn(frame) {
                break;
            }
            if let Err(e) = self.present(buf.data()) {
                let cause = e.source().map(|s| s.to_string()).unwrap_or_default();
                warn!("{e}: {cause}");
            }
        }
        info!("\n{stats}");
        stats
    }

    fn should_quit(&self) -> bool {
        !self.imp.is_open() || self.imp.is_key_down(Key::Escape)
    }
}
