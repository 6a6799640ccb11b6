//! Driving home at night in the rain.
//!
//! Move the mouse horizontally to scrub through time.

use std::{env, ops::ControlFlow::Continue};

use log::error;

use nr::{render::par_render, scene::Scene};

use nightrain_demos::{Args, Result, init_logging};
use nr_front::{Frame, dims::HD_1280_720, minifb::Window};

fn main() -> Result {
    init_logging();
    run().inspect_err(|e| error!("{e}"))
}

fn run() -> Result {
    let args = Args::parse(env::args().skip(1))?;
    let cfg = args.scene_config()?;

    let mut win = Window::builder()
        .title("nightrain//drive")
        .dims(args.size.unwrap_or(HD_1280_720))
        .build()?;

    let mut scene = Scene::new(cfg);
    win.run(|frame: &mut Frame<_>| {
        if let Some(x) = frame.win.mouse_x() {
            scene.config.scrub = cfg.scrub + x;
        }
        *frame.stats += par_render(&scene, &frame.ctx, frame.buf);
        Continue(())
    });
    Ok(())
}
