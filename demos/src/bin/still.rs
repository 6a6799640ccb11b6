//! Renders a single frame of the night drive to a PPM file.

use std::{env, path::PathBuf};

use log::{error, info};

use nr::{
    math::Color3,
    render::{FrameContext, par_render},
    scene::Scene,
    util::{Dims, buf::Buf2, pnm::save_ppm},
};

use nightrain_demos::{Args, Result, init_logging};

fn main() -> Result {
    init_logging();
    run().inspect_err(|e| error!("{e}"))
}

fn run() -> Result {
    let args = Args::parse(env::args().skip(1))?;
    let scene = Scene::new(args.scene_config()?);

    let dims @ Dims(w, h) = args.size.unwrap_or(Dims(1280, 720));
    let time = args.time.unwrap_or(0.0);
    let out = args.out.unwrap_or_else(|| PathBuf::from("nightrain.ppm"));

    let ctx = FrameContext::new(time, dims);
    let mut buf = Buf2::<Color3>::new_default(w as usize, h as usize);
    let stats = par_render(&scene, &ctx, &mut buf);

    save_ppm(&out, &buf)?;
    info!("wrote {} at t={time}s\n{stats}", out.display());
    Ok(())
}
