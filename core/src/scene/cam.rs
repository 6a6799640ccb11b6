//! Camera and view rays.

use crate::math::{
    HashFn, Vec2, Vec3, float::f32 as fp, fract, lerp, smoothstep, vec3,
};

/// A ray with an origin and a unit direction.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit direction vector.
    pub dir: Vec3,
}

/// A pinhole camera riding along the road.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Camera {
    /// The position of the camera.
    pub pos: Vec3,
    /// The point the camera is looking at.
    pub lookat: Vec3,
    /// Distance from the camera to the image plane.
    pub zoom: f32,
    /// Current vertical displacement caused by road bumps.
    pub bumps: f32,
}

impl Ray {
    /// Returns the distance from `p` to the infinite line through
    /// `self.origin` in direction `self.dir`.
    ///
    /// Points behind the origin are measured to the backward extension of
    /// the line, not to the origin.
    #[inline]
    pub fn distance_to(&self, p: Vec3) -> f32 {
        (p - self.origin).cross(&self.dir).len()
    }
}

impl Camera {
    /// Resting position of the camera, at the left side of the near lane.
    pub const POS: Vec3 = vec3(0.3, 0.15, 0.0);

    /// Returns the camera at `time` seconds.
    ///
    /// The camera bobs up and down over bumps in the road: five times per
    /// second it moves smoothly towards a new hashed height. `shake` scales
    /// the displacement. The view sways slowly between looking ahead along
    /// the lane and looking left towards the oncoming traffic.
    pub fn at<H: HashFn>(hash: &H, time: f32, shake: f32) -> Self {
        let bt = time * 5.0;
        let (h1, h2) = (hash.hash1(fp::floor(bt)), hash.hash1(fp::floor(bt) + 1.0));
        let b = lerp(smoothstep(fract(bt)), h1, h2) * 0.1;
        let bumps = b * b * b * shake;

        let pos = Self::POS + vec3(0.0, bumps, 0.0);
        let y = pos.y() + bumps;
        let sway = fp::sin(time * 0.1) * 0.5 + 0.5;
        let lookat = lerp(sway, vec3(0.3, y, 1.0), vec3(0.0, y, 0.7));

        Self { pos, lookat, zoom: 2.0, bumps }
    }

    /// Returns the forward, right, and up unit vectors of `self`.
    pub fn basis(&self) -> [Vec3; 3] {
        let fwd = (self.lookat - self.pos).normalize();
        let right = Vec3::Y.cross(&fwd).normalize();
        let up = fwd.cross(&right);
        [fwd, right, up]
    }

    /// Returns the ray through point `uv - offset` of the image plane,
    /// where `uv` is relative to the center of the plane.
    ///
    /// The offset is purely a translation of the sample point: a zero
    /// offset gives the undistorted ray.
    pub fn ray(&self, uv: Vec2, offset: Vec2) -> Ray {
        let [fwd, right, up] = self.basis();
        let center = self.pos + fwd * self.zoom;
        let p = uv - offset;
        let i = center + right * p.x() + up * p.y();
        Ray {
            origin: self.pos,
            dir: (i - self.pos).normalize(),
        }
    }
}
