use nightrain_core::prelude::*;

use nightrain_core::{
    assert_approx_eq,
    render::Stats,
    scene::{Camera, SKY},
};

const HD: (u32, u32) = (1280, 720);

fn frame(time: f64, res: (u32, u32)) -> (FrameContext, Buf2<u32>) {
    let buf = Buf2::new_default(res.0 as usize, res.1 as usize);
    (FrameContext::new(time, res), buf)
}

#[test]
fn evaluation_is_deterministic() {
    let scene = Scene::new(Config::default());
    for (i, t) in [0.0, 0.5, 17.25, 600.0].into_iter().enumerate() {
        let uv = vec2(0.1 + 0.2 * i as f32, 0.9 - 0.2 * i as f32);
        let a = scene.evaluate_pixel(uv, t, HD.into());
        let b = scene.evaluate_pixel(uv, t, HD.into());
        assert_eq!(a, b, "uv={uv:?} t={t}");
    }
}

#[test]
fn frames_are_deterministic() {
    let scene = Scene::new(Config::default().quality(Quality::Medium));
    let (ctx, mut a) = frame(3.0, (64, 36));
    let (_, mut b) = frame(3.0, (64, 36));
    render(&scene, &ctx, &mut a);
    render(&scene, &ctx, &mut b);
    assert_eq!(a, b);
}

#[test]
fn resolution_only_affects_aspect() {
    let scene = Scene::new(Config::default());
    for uv in [vec2(0.5, 0.5), vec2(0.13, 0.77), vec2(0.9, 0.42)] {
        let small = scene.evaluate_pixel(uv, 8.0, Dims(640, 360));
        let large = scene.evaluate_pixel(uv, 8.0, Dims(1280, 720));
        assert_eq!(small, large, "uv={uv:?}");
    }
}

#[test]
fn only_sky_above_horizon_at_start() {
    // No randomness, no rain: at t = 0 every car and light is below
    // its fade threshold or off screen in the upper part of the image.
    let cfg = Config::default().rain(false);
    let scene = Scene::with_hash(cfg, Constant(0.0));
    let sky = Scene::with_hash(cfg.layers(Layers::SKY), Constant(0.0));

    let uv = vec2(0.5, 0.9);
    let c = scene.evaluate_pixel(uv, 0.0, HD.into());
    assert_approx_eq!(c, sky.evaluate_pixel(uv, 0.0, HD.into()));
    assert_approx_eq!(c, SKY * 0.19612, eps = 1e-4);
    // Pale blue
    assert!(c.b() > c.r() && c.r() > c.g());
}

#[test]
fn no_street_or_tail_lights_at_start() {
    let cfg = Config::default().rain(false);
    let center = vec2(0.5, 0.5);
    for layer in [Layers::STREET, Layers::TAIL, Layers::SKY] {
        let scene = Scene::with_hash(cfg.layers(layer), Constant(0.0));
        let c = scene.evaluate_pixel(center, 0.0, HD.into());
        assert_eq!(c, Color3f::BLACK, "{layer:?}");
    }
    // The oncoming traffic is straight ahead
    let head = Scene::with_hash(cfg.layers(Layers::HEAD), Constant(0.0));
    assert!(head.evaluate_pixel(center, 0.0, HD.into()).b() > 0.1);
}

#[test]
fn rain_is_a_pure_offset() {
    let dry = Scene::new(Config::default().rain(false));
    let wet = Scene::new(Config::default());

    for t in [0.0, 2.5, 40.0] {
        let cam = dry.camera(t);
        assert_eq!(cam, wet.camera(t));
        for p in [vec2(0.0, 0.0), vec2(-0.6, 0.3), vec2(0.7, -0.4)] {
            let p_cam = p + vec2(0.0, cam.bumps * 4.0);
            let plain = cam.ray(p_cam, Vec2::ZERO);
            assert_eq!(dry.view_ray(p, t), plain);

            let ray = wet.view_ray(p, t);
            let offset = nightrain_core::scene::rain::lens_offset(
                wet.hash(),
                p_cam,
                t,
                &wet.config,
            );
            assert_eq!(ray, cam.ray(p_cam - offset, Vec2::ZERO));
        }
    }
}

#[test]
fn rays_are_unit_length() {
    let scene = Scene::new(Config::default());
    let cam: Camera = scene.camera(11.0);
    for i in 0..50 {
        let p = vec2(i as f32 * 0.035 - 0.9, 0.5 - i as f32 * 0.02);
        let ray = scene.view_ray(p, 11.0);
        assert_approx_eq!(ray.dir.len(), 1.0, eps = 1e-5);
        assert_eq!(ray.origin, cam.pos);
    }
}

#[test]
fn colors_are_finite_and_non_negative() {
    for q in [Quality::Low, Quality::Medium, Quality::High] {
        let scene = Scene::new(Config::default().quality(q));
        let (ctx, _) = frame(123.4, (32, 18));
        for y in 0..18 {
            for x in 0..32 {
                let c = scene.shade_pixel(ctx.pixel_uv(x, y), &ctx);
                for ch in [c.r(), c.g(), c.b()] {
                    assert!(ch.is_finite() && ch >= 0.0, "{q:?} ({x}, {y}): {c:?}");
                }
            }
        }
    }
}

#[test]
fn stats_count_pixels() {
    let scene = Scene::new(Config::default().quality(Quality::Low));
    let (ctx, mut buf) = frame(1.0, (16, 9));
    let mut stats = Stats::new();
    stats += render(&scene, &ctx, &mut buf);
    stats += render(&scene, &ctx, &mut buf);
    assert_eq!(stats.frames, 2.0);
    assert_eq!(stats.pixels, 2 * 16 * 9);
}

#[cfg(feature = "rayon")]
#[test]
fn parallel_equals_sequential() {
    use nightrain_core::render::par_render;

    let scene = Scene::new(Config::default());
    let (ctx, mut seq) = frame(77.7, (160, 90));
    let (_, mut par) = frame(77.7, (160, 90));
    render(&scene, &ctx, &mut seq);
    par_render(&scene, &ctx, &mut par);
    assert_eq!(seq, par);
}
