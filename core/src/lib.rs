//! Core functionality of the `nightrain` project.
//!
//! A procedural "night driving in the rain" image, computed entirely by a
//! per-pixel color function. Given a pixel's normalized screen position,
//! the elapsed time and the viewport resolution, the [scene][scene] kernel
//! builds a camera ray distorted by raindrops on the windshield, then sums
//! the out-of-focus glow of head-, tail-, street and roadside lights spaced
//! along an endless road.
//!
//! Nothing is stored between pixels or frames. Every color is a pure
//! function of `(uv, time, resolution)`, so pixels may be shaded in any
//! order or in parallel with identical results.
//!
//! # Crate features
//!
//! * `std` (default):
//!   Uses the floating-point functions of `std`, and makes available items
//!   requiring I/O or timekeeping, such as [`save_ppm`][util::pnm::save_ppm].
//!
//! * `libm`:
//!   Provides software implementations of floating-point functions via the
//!   [libm](https://crates.io/crates/libm) crate.
//!
//! * `mm`:
//!   Provides fast approximate implementations of floating-point functions
//!   via the [micromath](https://crates.io/crates/micromath) crate.
//!
//! * `rayon`:
//!   Enables [`par_render`][render::par_render], which shades the rows of
//!   a frame on the `rayon` thread pool.
//!
//! * `serde`:
//!   Derives `Serialize` and `Deserialize` for the scene configuration.
//!
//! The scene kernel needs one of `std`, `libm`, or `mm`.

#![no_std]

#[cfg(any(feature = "std", test))]
extern crate std;

extern crate alloc;
extern crate core;

pub mod math;
pub mod render;
#[cfg(feature = "fp")]
pub mod scene;
pub mod util;

pub mod prelude {
    pub use crate::math::{
        Lerp,
        color::{Color3, Color3f, rgb},
        hash::{Constant, HashFn, Scramble},
        lerp,
        vec::{Vec2, Vec3, vec2, vec3},
    };

    pub use crate::render::{FrameContext, PixelShader, render};

    #[cfg(feature = "fp")]
    pub use crate::scene::{Config, Layers, Quality, Scene};

    pub use crate::util::{Dims, buf::Buf2};
}
