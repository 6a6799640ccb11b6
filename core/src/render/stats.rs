//! Rendering statistics.

use alloc::{format, string::String};
use core::fmt::{self, Display, Formatter};
use core::ops::AddAssign;
use core::time::Duration;
#[cfg(feature = "std")]
use std::time::Instant;

use crate::util::Dims;

/// Collects and accumulates rendering statistics and performance data.
#[derive(Clone, Debug, Default)]
pub struct Stats {
    /// Time spent rendering.
    pub time: Duration,
    /// Number of frames rendered.
    pub frames: f32,
    /// Number of pixels shaded.
    pub pixels: usize,

    #[cfg(feature = "std")]
    start: Option<Instant>,
}

impl Stats {
    /// Creates a new zeroed `Stats` instance.
    pub fn new() -> Self {
        Self::default()
    }
    /// Creates a `Stats` instance that records the time of its creation.
    ///
    /// Call [`finish`][Self::finish] to write the elapsed time to `self.time`.
    ///
    /// Equivalent to [`Stats::new`] if the `std` feature is not enabled.
    pub fn start() -> Self {
        Self {
            #[cfg(feature = "std")]
            start: Some(Instant::now()),
            ..Self::default()
        }
    }

    /// Stops the timer and records the elapsed time to `self.time`.
    ///
    /// No-op if the timer was not running. This method is also no-op unless
    /// the `std` feature is enabled.
    #[must_use]
    pub fn finish(self) -> Self {
        Self {
            #[cfg(feature = "std")]
            time: self.start.map(|st| st.elapsed()).unwrap_or(self.time),
            #[cfg(feature = "std")]
            start: None,
            ..self
        }
    }

    /// Records one more frame of size `dims`.
    #[must_use]
    pub fn frame(self, dims: Dims) -> Self {
        Self {
            frames: self.frames + 1.0,
            pixels: self.pixels + dims.area(),
            ..self
        }
    }

    /// Returns the average throughput in items per second.
    pub fn per_sec(&self) -> Self {
        let secs = if self.time.is_zero() {
            1.0
        } else {
            self.time.as_secs_f32()
        };
        Self {
            time: Duration::from_secs(1),
            frames: self.frames / secs,
            pixels: (self.pixels as f32 / secs) as usize,
            #[cfg(feature = "std")]
            start: None,
        }
    }
    /// Returns the average throughput in items per frame.
    pub fn per_frame(&self) -> Self {
        let frames = self.frames.max(1.0);
        Self {
            time: self.time.div_f32(frames),
            frames: 1.0,
            pixels: self.pixels / frames as usize,
            #[cfg(feature = "std")]
            start: None,
        }
    }
}

impl Display for Stats {
    #[rustfmt::skip]
    #[inline(never)]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let w = f.width().unwrap_or(12);
        let per_s = self.per_sec();
        let per_f = self.per_frame();
        write!(f,
            " STATS  {:>w$} │ {:>w$} │ {:>w$}\n\
             ────────{empty:─>w$}─┼─{empty:─>w$}─┼─{empty:─>w$}─\n \
              time   {:>w$} │ {empty:w$} │ {:>w$}\n \
              frames {:>w$} │ {:>w$.1} │\n \
              pixels {:>w$} │ {:>w$} │ {:>w$}\n",
            "TOTAL", "PER SEC", "PER FRAME",
            human_time(self.time), human_time(per_f.time),
            self.frames, per_s.frames,
            human_num(self.pixels), human_num(per_s.pixels),
            human_num(per_f.pixels),
            empty = ""
        )
    }
}

impl AddAssign for Stats {
    /// Appends the stats of `other` to `self`.
    fn add_assign(&mut self, other: Self) {
        self.time += other.time;
        self.frames += other.frames;
        self.pixels += other.pixels;
    }
}

#[inline(never)]
fn human_num(n: usize) -> String {
    if n < 1_000 {
        format!("{n:5}")
    } else if n < 100_000 {
        format!("{:4.1}k", n as f32 / 1_000.)
    } else if n < 1_000_000 {
        format!("{:4}k", n / 1_000)
    } else if n < 100_000_000 {
        format!("{:4.1}M", n as f32 / 1_000_000.)
    } else if n < 1_000_000_000 {
        format!("{:4}M", n / 1_000_000)
    } else if (n as u64) < 100_000_000_000 {
        format!("{:4.1}G", n as f32 / 1_000_000_000.)
    } else {
        format!("{n:5.1e}")
    }
}

#[inline(never)]
fn human_time(d: Duration) -> String {
    let secs = d.as_secs_f32();
    if secs < 1e-3 {
        format!("{:4.1}μs", secs * 1_000_000.)
    } else if secs < 1.0 {
        format!("{:4.1}ms", secs * 1_000.)
    } else if secs < 60.0 {
        format!("{:.1}s", secs)
    } else {
        let secs = secs as u32;
        format!("{}min {:02}s", secs / 60, secs % 60)
    }
}
