//! Out-of-focus light discs.

use crate::math::{Vec3, lerp, smooth_edge};

use super::{Quality, cam::Ray};

/// Returns the brightness in [0, 1] of a defocused point light at `p`, as
/// seen along `ray`.
///
/// The light is drawn as a disc of radius `size` around the line of the
/// ray: fully lit out to `size * (1 - blur)`, then fading out to zero at
/// `size`. `blur` is clamped to [0, 1]. A non-positive `size` gives zero.
///
/// With [`Quality::High`], the center of the disc is dimmed to 70% so that
/// the disc has a brighter rim, like the bokeh of a real lens.
pub fn bokeh_mask(ray: &Ray, p: Vec3, size: f32, blur: f32, quality: Quality) -> f32 {
    if !(size > 0.0) {
        return 0.0;
    }
    let d = ray.distance_to(p);
    let blur = blur.clamp(0.0, 1.0);

    let mut m = 1.0 - smooth_edge(size * (1.0 - blur), size, d);
    if quality.is_high() {
        m *= lerp(smooth_edge(0.8 * size, size, d), 0.7, 1.0);
    }
    m
}

#[cfg(test)]
mod tests {
    use crate::assert_approx_eq;
    use crate::math::vec3;

    use super::*;

    const RAY: Ray = Ray {
        origin: vec3(0.0, 0.0, 0.0),
        dir: vec3(0.0, 0.0, 1.0),
    };

    fn at(d: f32) -> Vec3 {
        vec3(d, 0.0, 10.0)
    }

    #[test]
    fn zero_or_negative_size_is_dark() {
        for q in [Quality::Low, Quality::High] {
            assert_eq!(bokeh_mask(&RAY, at(0.0), 0.0, 0.1, q), 0.0);
            assert_eq!(bokeh_mask(&RAY, at(0.0), -1.0, 0.1, q), 0.0);
            assert_eq!(bokeh_mask(&RAY, at(0.0), f32::NAN, 0.1, q), 0.0);
        }
    }

    #[test]
    fn full_inside_zero_outside() {
        let q = Quality::Medium;
        assert_eq!(bokeh_mask(&RAY, at(0.0), 1.0, 0.2, q), 1.0);
        assert_eq!(bokeh_mask(&RAY, at(0.79), 1.0, 0.2, q), 1.0);
        assert_eq!(bokeh_mask(&RAY, at(1.0), 1.0, 0.2, q), 0.0);
        assert_eq!(bokeh_mask(&RAY, at(3.0), 1.0, 0.2, q), 0.0);
        assert_approx_eq!(bokeh_mask(&RAY, at(0.9), 1.0, 0.2, q), 0.5);
    }

    #[test]
    fn falloff_is_monotone_without_rim() {
        for blur in [0.0, 0.1, 0.5, 0.8, 1.0] {
            let mut prev = 1.0;
            for i in 0..=200 {
                let m = bokeh_mask(&RAY, at(i as f32 * 0.01), 1.5, blur, Quality::Low);
                assert!((0.0..=1.0).contains(&m), "m={m}");
                assert!(m <= prev, "blur={blur} i={i}: {m} > {prev}");
                prev = m;
            }
        }
    }

    #[test]
    fn rim_dims_the_center() {
        let q = Quality::High;
        assert_approx_eq!(bokeh_mask(&RAY, at(0.0), 1.0, 0.1, q), 0.7);
        assert_approx_eq!(bokeh_mask(&RAY, at(0.5), 1.0, 0.1, q), 0.7);
        // Brightest near the edge
        let rim = bokeh_mask(&RAY, at(0.88), 1.0, 0.1, q);
        assert!(rim > 0.7, "rim={rim}");
        assert_eq!(bokeh_mask(&RAY, at(1.0), 1.0, 0.1, q), 0.0);
    }

    #[test]
    fn blur_is_clamped() {
        let q = Quality::Low;
        for d in [0.0, 0.3, 0.7] {
            assert_eq!(
                bokeh_mask(&RAY, at(d), 1.0, 2.0, q),
                bokeh_mask(&RAY, at(d), 1.0, 1.0, q)
            );
            assert_eq!(
                bokeh_mask(&RAY, at(d), 1.0, -1.0, q),
                bokeh_mask(&RAY, at(d), 1.0, 0.0, q)
            );
        }
    }
}
