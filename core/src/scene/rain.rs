//! Raindrops on the windshield.
//!
//! Rain is modeled as a screen-space displacement of the view ray. The
//! screen is tiled into tall cells, each holding one drop that slides down
//! in a jerky sawtooth motion and leaves a trail of smaller droplets. The
//! displacement is the offset of the sample point from the nearest drop or
//! droplet center, which bends the image like a tiny lens.

use crate::math::{
    HashFn, Vec2, float::f32 as fp, fract, lerp, smooth_edge, vec2,
};

use super::Config;

/// Horizontal and vertical cell count of a drop layer per unit of `uv`.
const CELLS: Vec2 = vec2(20.0, 5.0);

/// Trail droplets per drop cell.
const TRAIL_SCALE: f32 = 1.5;

/// A periodic waveform with a slow rise and a fast fall, in [-1.2, 1.2].
///
/// Drives the sliding motion of the drops: they linger, then rush down.
#[inline]
pub fn saw_tooth(t: f32) -> f32 {
    fp::cos(t + fp::cos(t)) + fp::sin(2.0 * t) * 0.2 + fp::sin(4.0 * t) * 0.02
}

/// The derivative of [`saw_tooth`] with respect to `t`.
#[inline]
pub fn delta_saw_tooth(t: f32) -> f32 {
    0.4 * fp::cos(2.0 * t) + 0.08 * fp::cos(4.0 * t)
        - (1.0 - fp::sin(t)) * fp::sin(t + fp::cos(t))
}

/// Returns the displacement caused by one layer of drops at `uv`.
///
/// `seed` decorrelates layers. `time` is in seconds; the configured
/// scrub offset is applied thirtyfold.
///
/// If `cfg.drop_debug` is set, the layer does not scroll or deform, and
/// the borders of the drop cells are marked with a displacement of (1, 1).
pub fn drop_layer<H: HashFn>(
    hash: &H,
    uv: Vec2,
    seed: f32,
    time: f32,
    cfg: &Config,
) -> Vec2 {
    let debug = cfg.drop_debug;
    let mut t = time + cfg.scrub * 30.0;
    let orig = uv;

    let uv = if debug { uv } else { uv + vec2(0.0, t * 0.05) };
    let uv = uv * CELLS;
    let id = uv.map(fp::floor);
    let n = hash.hash3(id.x() + (id.y() + seed) * 546.3524);
    let phase = hash.hash2(id + vec2(seed, seed));

    let mut bd = uv - id - vec2(0.5, 0.5);
    bd = vec2(bd.x() + (n.x() - 0.5) * 0.6, bd.y() * 4.0);

    t += n.z() * 6.28;
    let slide = saw_tooth(t);

    let trail_pos = vec2(
        bd.x() * TRAIL_SCALE,
        (fract(bd.y() * TRAIL_SCALE * 2.0 - t * 2.0 + phase) - 0.5) * 0.5,
    );

    let mut y = bd.y() + slide * 2.0;
    if cfg.quality.is_high() && !debug {
        // Drops bulge downward while sliding fast
        y += bd.x() * bd.x() * delta_saw_tooth(t);
    }
    let bd = vec2(bd.x(), y);

    let d = bd.len();
    let trail_mask = smooth_edge(-0.2, 0.2, bd.y()) * bd.y();
    let td = (trail_pos * trail_mask.max(0.5)).len();

    let main_drop = smooth_edge(0.2, 0.1, d);
    let drop_trail = smooth_edge(0.1, 0.02, td) * trail_mask;

    let offs = lerp(drop_trail, bd * main_drop, trail_pos);

    if debug {
        let cell = orig * CELLS;
        let edge = cell - cell.map(fp::floor);
        if edge.x() < 0.02 || edge.y() < 0.01 {
            return vec2(1.0, 1.0);
        }
    }
    offs
}

/// Returns the total displacement of the view ray at screen point `uv`,
/// relative to the screen center.
///
/// Sums up to three drop layers of different scales, depending on quality,
/// plus a fine high-frequency ripple. At high quality the drop field is
/// also slowly rotated and swayed, as if by wind.
///
/// Returns zero if rain is disabled.
pub fn lens_offset<H: HashFn>(hash: &H, uv: Vec2, time: f32, cfg: &Config) -> Vec2 {
    if !cfg.rain {
        return Vec2::ZERO;
    }
    let hq = cfg.quality.is_high();
    let debug = cfg.drop_debug;

    let mut drop_uv = uv;
    if hq && !debug {
        let a = fp::sin(time * 0.1) * 0.5 + 0.5;
        let a = -(a * 0.5) * (a * 0.5);
        let (s, c) = (fp::sin(a), fp::cos(a));
        let [x, y] = drop_uv.0;
        drop_uv = vec2(x * c - y * s, x * s + y * c);
        drop_uv = drop_uv + vec2(-fp::sin(time * 0.1) * 0.5, 0.0);
    }

    let mut offs = drop_layer(hash, drop_uv, 1.0, time, cfg);
    if !debug {
        offs = offs + drop_layer(hash, drop_uv * 1.4, 10.0, time, cfg);
        if hq {
            offs = offs + drop_layer(hash, drop_uv * 2.4, 25.0, time, cfg);
        }
        let r = fp::sin(time + uv.y() * 3.1415 * 30.0 + uv.x() * 124.0);
        let r = (r * 0.5 + 0.5) * 0.005;
        offs = offs + vec2(r * r, r);
    }
    offs
}

#[cfg(test)]
mod tests {
    use crate::assert_approx_eq;
    use crate::math::{Constant, Scramble};
    use crate::scene::Quality;

    use super::*;

    #[test]
    fn saw_tooth_derivative() {
        let h = 1e-3;
        for i in 0..100 {
            let t = i as f32 * 0.137 - 5.0;
            let numeric = (saw_tooth(t + h) - saw_tooth(t - h)) / (2.0 * h);
            assert_approx_eq!(delta_saw_tooth(t), numeric, eps = 1e-2);
        }
    }

    #[test]
    fn saw_tooth_is_bounded_and_periodic() {
        for i in 0..1000 {
            let t = i as f32 * 0.01;
            let s = saw_tooth(t);
            assert!(s.abs() <= 1.22, "t={t} s={s}");
            assert_approx_eq!(saw_tooth(t + core::f32::consts::TAU), s, eps = 1e-4);
        }
    }

    #[test]
    fn rain_disabled_has_no_offset() {
        let cfg = Config::default().rain(false);
        for uv in [vec2(0.0, 0.0), vec2(-0.7, 0.3), vec2(0.8, -0.5)] {
            assert_eq!(lens_offset(&Scramble, uv, 12.3, &cfg), Vec2::ZERO);
        }
    }

    #[test]
    fn offsets_are_small() {
        let cfg = Config::default();
        for i in 0..400 {
            let uv = vec2((i % 20) as f32 * 0.09 - 0.9, (i / 20) as f32 * 0.05 - 0.5);
            let o = lens_offset(&Scramble, uv, 7.0, &cfg);
            assert!(o.x().is_finite() && o.y().is_finite());
            // Each layer displaces by less than a cell
            assert!(o.len() < 3.0, "uv={uv:?} o={o:?}");
        }
    }

    #[test]
    fn layer_is_deterministic() {
        let cfg = Config::default();
        let uv = vec2(0.123, -0.321);
        let a = drop_layer(&Scramble, uv, 1.0, 3.5, &cfg);
        let b = drop_layer(&Scramble, uv, 1.0, 3.5, &cfg);
        assert_eq!(a, b);
    }

    #[test]
    fn debug_marks_cell_borders() {
        let cfg = Config::default().drop_debug(true);
        // Cells are 1/20 wide and 1/5 tall
        let border = vec2(0.0505, 0.1);
        assert_eq!(drop_layer(&Constant(0.5), border, 1.0, 0.0, &cfg), vec2(1.0, 1.0));
        let inside = vec2(0.075, 0.1);
        assert_ne!(drop_layer(&Constant(0.5), inside, 1.0, 0.0, &cfg), vec2(1.0, 1.0));
    }

    #[test]
    fn debug_uses_single_layer_without_ripple() {
        let cfg = Config::default().drop_debug(true).quality(Quality::High);
        let uv = vec2(0.31, 0.17);
        assert_eq!(
            lens_offset(&Scramble, uv, 4.0, &cfg),
            drop_layer(&Scramble, uv, 1.0, 4.0, &cfg)
        );
    }

    #[test]
    fn scrub_shifts_rain_time() {
        let uv = vec2(0.2, 0.4);
        let scrubbed = Config::default().scrub(0.125);
        let a = drop_layer(&Scramble, uv, 1.0, 0.0, &scrubbed);
        let b = drop_layer(&Scramble, uv, 1.0, 3.75, &Config::default());
        assert_eq!(a, b);
    }
}
