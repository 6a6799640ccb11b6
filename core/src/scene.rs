//! The night drive scene.
//!
//! A car drives along an endless road at night in the rain. The view
//! through its windshield is computed one pixel at a time:
//!
//! 1. The [camera][cam] bobs over bumps in the road and casts a ray through
//!    the pixel, displaced by the [raindrops][rain] on the glass.
//! 2. Every [light][lights] along the road contributes an out-of-focus
//!    [bokeh disc][bokeh] depending on how close it is to the ray.
//! 3. A faint glow of the sky is added above the horizon.
//!
//! The result depends only on the pixel position, the time, and the
//! aspect ratio of the viewport.

use log::debug;

use crate::math::{
    Color3f, HashFn, Scramble, Vec2, float::f32 as fp, rgb, saturate, vec2,
};
use crate::render::{FrameContext, PixelShader};
use crate::util::Dims;

use lights::{EnvLight, HeadLight, StreetLight, TailLight, side_of};

pub use self::{
    cam::{Camera, Ray},
    config::{Config, Layers, Quality},
};

pub mod bokeh;
pub mod cam;
pub mod config;
pub mod lights;
pub mod rain;

/// Color of the sky glow, scaled by the elevation of the ray.
pub const SKY: Color3f = rgb(0.6, 0.5, 0.9);

/// Number of street light instances per frame.
const STREET_LIGHTS: u32 = 8;
/// Number of oncoming car instances per frame.
const HEAD_LIGHTS: u32 = 8;
/// Phases of the two cars ahead.
const TAIL_LIGHTS: [f32; 2] = [0.0, 0.5];

/// Rate of scene time relative to wall clock time.
const SCENE_RATE: f32 = 0.03;

/// The night drive scene, parameterized by a [hash family][HashFn].
///
/// All randomness of the scene is drawn from `H`; substituting
/// [`Constant`][crate::math::Constant] pins it down for inspection.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Scene<H = Scramble> {
    /// The configuration of the scene.
    pub config: Config,
    hash: H,
}

impl Scene {
    /// Returns a scene with the default hash family.
    pub fn new(config: Config) -> Self {
        Self::with_hash(config, Scramble)
    }
}

impl<H: HashFn> Scene<H> {
    /// Returns a scene drawing its randomness from `hash`.
    pub fn with_hash(config: Config, hash: H) -> Self {
        debug!("scene configuration: {config:?}");
        Self { config, hash }
    }

    /// Returns the hash family of `self`.
    pub fn hash(&self) -> &H {
        &self.hash
    }

    /// Returns the camera at `time` seconds.
    pub fn camera(&self, time: f32) -> Camera {
        Camera::at(&self.hash, time, self.config.cam_shake)
    }

    /// Returns the view ray through screen point `p` at `time` seconds.
    ///
    /// `p` is relative to the center of the screen, with y up and one unit
    /// corresponding to the height of the screen.
    pub fn view_ray(&self, p: Vec2, time: f32) -> Ray {
        let cam = self.camera(time);
        let p = p + vec2(0.0, cam.bumps * 4.0);
        let offset = rain::lens_offset(&self.hash, p, time, &self.config);
        cam.ray(p, offset)
    }

    /// Returns the light received along `ray` at scene time `t`.
    ///
    /// Scene time advances much slower than wall clock time; see
    /// [`evaluate_pixel`][Self::evaluate_pixel].
    pub fn shade_ray(&self, ray: &Ray, t: f32) -> Color3f {
        let Config { quality: q, layers, lane_bias, .. } = self.config;
        let side = side_of(ray.dir.x());
        let mut col = Color3f::BLACK;

        if layers.contains(Layers::STREET) {
            for k in 0..STREET_LIGHTS {
                let i = k as f32 / STREET_LIGHTS as f32;
                col += StreetLight::at(i, t, side).radiance(ray, q);
            }
        }
        if layers.contains(Layers::HEAD) {
            let step = 1.0 / HEAD_LIGHTS as f32;
            for k in 0..HEAD_LIGHTS {
                let i = k as f32 * step;
                // Irregular spacing between cars
                let n = self.hash.hash1(i + fp::floor(t));
                let i = i + n * step * 0.7;
                col += HeadLight::at(i, t).radiance(ray, q);
            }
        }
        if layers.contains(Layers::ENV) {
            let count = q.env_lights();
            for k in 0..count {
                let i = k as f32 / count as f32;
                col += EnvLight::at(&self.hash, i, t, side).radiance(ray, q);
            }
        }
        if layers.contains(Layers::TAIL) {
            for i in TAIL_LIGHTS {
                let light = TailLight::at(&self.hash, i, t, lane_bias);
                col += light.radiance(ray, q);
            }
        }
        if layers.contains(Layers::SKY) {
            col += SKY * saturate(ray.dir.y());
        }
        col
    }

    /// Returns the color of the pixel at normalized screen position `uv`
    /// at `time` seconds, in a viewport of size `resolution`.
    ///
    /// (0, 0) is the bottom left and (1, 1) the top right corner of the
    /// viewport. The resolution only affects the aspect ratio: the vertical
    /// field of view is fixed, the horizontal one widens with the aspect.
    ///
    /// The color is not clamped; the conversion to a pixel format does that.
    pub fn evaluate_pixel(&self, uv: Vec2, time: f64, resolution: Dims) -> Color3f {
        let aspect = if resolution.height() > 0 {
            resolution.aspect_ratio()
        } else {
            1.0
        };
        let p = vec2((uv.x() - 0.5) * aspect, uv.y() - 0.5);
        let time = time as f32;

        let ray = self.view_ray(p, time);
        let t = time * SCENE_RATE + self.config.scrub;
        self.shade_ray(&ray, t)
    }
}

impl<H: HashFn> PixelShader for Scene<H> {
    fn shade_pixel(&self, uv: Vec2, frame: &FrameContext) -> Color3f {
        self.evaluate_pixel(uv, frame.time, frame.resolution)
    }
}
