//! The lights along the road.
//!
//! Every light is an instance of some family, positioned at time `t` by
//! its phase `i` in [0, 1). As time passes, each instance moves along the
//! road and wraps around, so that a fixed number of instances give an
//! endless stream of lights. Randomness is drawn by hashing the instance
//! and the number of wraps so far; no state is kept between frames.
//!
//! The road runs along the z axis. The camera is near the origin, looking
//! towards positive z. Oncoming traffic drives on the left, at x = -0.3.

use crate::math::{
    Color3f, HashFn, Vec3, float::f32 as fp, fract, lerp, remap, rgb,
    saturate, smooth_edge, vec3,
};

use super::{Quality, bokeh::bokeh_mask as lamp, cam::Ray};

/// Color of headlights.
pub const HEADLIGHT: Color3f = rgb(0.8, 0.8, 1.0);
/// Color of taillights and brake lights.
pub const TAILLIGHT: Color3f = rgb(1.0, 0.1, 0.1);
/// Color of turn signals.
pub const BLINKER: Color3f = rgb(1.0, 0.7, 0.2);
/// Color of sodium-vapor street lights.
pub const STREETLIGHT: Color3f = rgb(1.0, 0.7, 0.3);

/// Half the distance between the two lamps of a car.
const LAMP_OFFSET: f32 = 0.08;
/// Relative blur of direct lamp images.
const LAMP_BLUR: f32 = 0.1;
/// Relative blur of lamp reflections on the wet road.
const REFLECTION_BLUR: f32 = 0.8;
/// Size of a reflection relative to its lamp.
const REFLECTION_SIZE: f32 = 2.5;

/// Headlights of an oncoming car.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HeadLight {
    /// Center point between the lamps.
    pub pos: Vec3,
    /// Distance along the road, in [0, 1), increasing away from the camera.
    pub z: f32,
}

/// Taillights of a car ahead, driving in one of two lanes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TailLight {
    /// Center point between the lamps.
    pub pos: Vec3,
    /// Distance along the road, in (0, 3], increasing away from the camera.
    pub z: f32,
    /// Fraction of the current pass elapsed, in [0, 1). Fades the car in.
    pub phase: f32,
    /// Brightness of the extra brake lamps, in [0, 1].
    pub brake: f32,
    /// Brightness of the turn signal, in [0, 1].
    pub blinker: f32,
}

/// A street lamp on one side of the road.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StreetLight {
    pub pos: Vec3,
    /// Distance along the road, in [0, 1).
    pub z: f32,
}

/// A miscellaneous light further away from the road.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EnvLight {
    pub pos: Vec3,
    /// Distance along the road, in [0, 1).
    pub z: f32,
    /// The random value of this instance, in [0, 1). Determines the color,
    /// position, and flicker frequency.
    pub seed: f32,
}

/// Returns which side of the road `x` is on: -1.0 for left, 1.0 for right,
/// and 0.0 if `x` is zero or NaN.
///
/// Unlike [`f32::signum`], zero maps to zero.
#[inline]
pub fn side_of(x: f32) -> f32 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Fades roadside lights in at the far end, brightening as they approach.
#[inline]
fn roadside_fade(z: f32) -> f32 {
    remap(1.0, 0.7, 0.1, 1.5, 1.0 - fp::powf(1.0 - z, 6.0))
}

impl HeadLight {
    /// Returns the headlight with phase `i` at scene time `t`.
    ///
    /// Oncoming cars approach at two road units per unit of time.
    pub fn at(i: f32, t: f32) -> Self {
        let z = fract(-t * 2.0 + i);
        Self { pos: vec3(-0.3, 0.1, z * 40.0), z }
    }

    /// Returns the light received along `ray` from `self`, including its
    /// reflection on the wet road.
    pub fn radiance(&self, ray: &Ray, q: Quality) -> Color3f {
        let Self { pos: p, z } = *self;
        let d = (p - ray.origin).len();
        let size = lerp(smooth_edge(0.02, 0.07, z), 0.03, 0.05) * d;

        let dx = vec3(LAMP_OFFSET, 0.0, 0.0);
        let mut m = lamp(ray, p - dx, size, LAMP_BLUR, q)
            + lamp(ray, p + dx, size, LAMP_BLUR, q);
        if q.is_high() {
            let dx = vec3(0.1, 0.0, 0.0);
            m += lamp(ray, p + dx, size, LAMP_BLUR, q)
                + lamp(ray, p - dx, size, LAMP_BLUR, q);
        }

        let dist_fade = fp::powf(1.0 - z, 9.0).max(0.01);

        let size = size * REFLECTION_SIZE;
        let r = lamp(ray, p + vec3(-0.09, -0.2, 0.0), size, REFLECTION_BLUR, q)
            + lamp(ray, p + vec3(0.09, -0.2, 0.0), size, REFLECTION_BLUR, q);
        let r = r * dist_fade * dist_fade;

        HEADLIGHT * ((m + r) * dist_fade)
    }
}

impl TailLight {
    /// Returns the taillight with phase `i` at scene time `t`.
    ///
    /// Each pass, the car drives in the lane of the camera if the hash of
    /// the pass exceeds `lane_bias`, and in the lane to the right otherwise.
    /// As the camera catches up, a car in its lane moves over to the right,
    /// signaling with its turn signal.
    pub fn at<H: HashFn>(hash: &H, i: f32, t: f32, lane_bias: f32) -> Self {
        let t = t * 1.5 + i;
        let id = fp::floor(t) + i;
        let n = hash.hash3(id);

        let phase = fract(t);
        let z = 3.0 - phase * 3.0;
        let lane_id = smooth_edge(lane_bias, lane_bias + 0.01, n.y())
            * smooth_edge(0.2, 1.5, z);
        let lane = lerp(lane_id, 0.6, 0.3);

        let bs = n.z() * 3.0;
        let brake = smooth_edge(bs, bs + 0.01, z)
            * smooth_edge(bs + 0.01, bs, z - 0.5 * n.y());

        let blinker = smooth_edge(1.5, 1.4, z)
            * smooth_edge(0.2, 0.3, z)
            * saturate(fp::sin(t * 200.0) * 100.0)
            * lane_id;

        Self {
            pos: vec3(lane, 0.1, z),
            z,
            phase,
            brake,
            blinker,
        }
    }

    /// Returns the light received along `ray` from `self`, including its
    /// brake lights, turn signal, and reflections.
    pub fn radiance(&self, ray: &Ray, q: Quality) -> Color3f {
        let p = self.pos;
        let d = (p - ray.origin).len();
        let size = 0.05 * d;
        let ref_size = size * REFLECTION_SIZE;

        let dx = vec3(LAMP_OFFSET, 0.0, 0.0);
        let mut m = lamp(ray, p - dx, size, LAMP_BLUR, q)
            + lamp(ray, p + dx, size, LAMP_BLUR, q);
        if q.is_high() {
            let dx = vec3(0.1, 0.0, 0.0);
            m += (lamp(ray, p + dx, size, LAMP_BLUR, q)
                + lamp(ray, p - dx, size, LAMP_BLUR, q))
                * self.brake;
        }
        m += lamp(ray, p + vec3(-0.09, -0.2, 0.0), ref_size, REFLECTION_BLUR, q)
            + lamp(ray, p + vec3(0.09, -0.2, 0.0), ref_size, REFLECTION_BLUR, q);

        let mut col = TAILLIGHT * (m * self.phase);

        if self.blinker > 0.0 {
            let b = lamp(ray, p + vec3(0.12, 0.0, 0.0), size, LAMP_BLUR, q)
                + lamp(ray, p + vec3(0.12, -0.2, 0.0), ref_size, REFLECTION_BLUR, q)
                    * 0.2;
            col += BLINKER * (self.blinker * b);
        }
        col
    }
}

impl StreetLight {
    /// Returns the street light with phase `i` at scene time `t`, on the
    /// given `side` of the road.
    ///
    /// The lights on the right side are offset by half a spacing.
    pub fn at(i: f32, t: f32, side: f32) -> Self {
        let offset = side.max(0.0) / 16.0;
        let z = fract(i - t + offset);
        Self { pos: vec3(2.0 * side, 2.0, z * 60.0), z }
    }

    /// Returns the light received along `ray` from `self`.
    pub fn radiance(&self, ray: &Ray, q: Quality) -> Color3f {
        let d = (self.pos - ray.origin).len();
        let fade = roadside_fade(self.z) * (1.0 - self.z);
        STREETLIGHT * (lamp(ray, self.pos, 0.05 * d, LAMP_BLUR, q) * fade)
    }
}

impl EnvLight {
    /// Returns the environment light with phase `i` at scene time `t`, on
    /// the given `side` of the road.
    pub fn at<H: HashFn>(hash: &H, i: f32, t: f32, side: f32) -> Self {
        let n = hash.hash1(i + fp::floor(t));
        let offset = side.max(0.0) / 16.0;
        let z = fract(i - t + offset + fract(n * 234.0));
        let height = fract(n * 100.0);
        Self {
            pos: vec3((3.0 + n) * side, height * height * height, z * 60.0),
            z,
            seed: n,
        }
    }

    /// Returns the light received along `ray` from `self`.
    pub fn radiance(&self, ray: &Ray, q: Quality) -> Color3f {
        let Self { pos, z, seed: n } = *self;
        let d = (pos - ray.origin).len();
        let fade = roadside_fade(z);

        let mut m = lamp(ray, pos, 0.05 * d, LAMP_BLUR, q) * fade * fade * 0.5;
        // Flicker
        let f = fp::sin(z * 6.28 * 20.0 * n) * 0.5 + 0.5;
        m *= 1.0 - fp::powf(f, 20.0);

        let random = rgb(fract(n * -34.5), fract(n * 4572.0), fract(n * 1264.0));
        let base = lerp(fract(n * -65.42), TAILLIGHT, STREETLIGHT);
        lerp(n, base, random) * (m * 0.2)
    }
}
