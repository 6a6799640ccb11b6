//! A flat black quad showing the elapsed time.

use std::{env, ops::ControlFlow::Continue};

use log::error;

use nr::prelude::*;
use nr::render::{flat::FlatQuad, text::Readout};

use nightrain_demos::{Args, Result, init_logging};
use nr_front::{Frame, dims::SQUARE_600, minifb::Window};

fn main() -> Result {
    init_logging();
    run().inspect_err(|e| error!("{e}"))
}

fn run() -> Result {
    let args = Args::parse(env::args().skip(1))?;

    let mut win = Window::builder()
        .title("nightrain//quad")
        .dims(args.size.unwrap_or(SQUARE_600))
        .build()?;

    let readout = Readout::at(96.0, 5.0).decimals(2.0);
    let quad = FlatQuad::new(Color3f::BLACK).with_readout(readout, rgb(0.0, 1.0, 1.0));

    win.run(|frame: &mut Frame<_>| {
        *frame.stats += render(&quad, &frame.ctx, frame.buf);
        Continue(())
    });
    Ok(())
}
