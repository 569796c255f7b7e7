//! glcubes: three small OpenGL demos sharing one render-loop core.
//!
//! Run as `glcubes [quad|cube|colors]`. All GPU resources are created before
//! the loop starts; each iteration only computes per-frame timing, redraws
//! the full geometry and swaps buffers.

use glow::HasContext;

use crate::{demos::DemoKind, error::Error, frame::FrameClock, gfx::App};

mod demos;
mod error;
mod frame;
mod geometry;
mod gfx;
mod loader;

fn main() {
    setup_logging();

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let kind = match std::env::args().nth(1) {
        Some(name) => name.parse::<DemoKind>()?,
        None => DemoKind::Cube,
    };

    log::info!("creating rendering context");
    let mut app = App::new(kind.title(), 640, 480)?;

    let mut demo = kind.build(&app.gl)?;
    let mut clock = FrameClock::new();

    log::info!("entering render loop");
    'running: loop {
        for event in app.event_pump.poll_iter() {
            match event {
                sdl2::event::Event::Quit { .. } => break 'running,
                sdl2::event::Event::Window {
                    win_event: sdl2::event::WindowEvent::Resized(width, height),
                    ..
                } => unsafe {
                    app.gl.viewport(0, 0, width, height);
                },
                _ => {}
            }
        }

        let timing = clock.tick();
        let aspect = app.aspect_ratio();
        demo.render(&timing, aspect);
        app.window.gl_swap_window();
    }

    Ok(())
}

fn setup_logging() {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%H:%M:%S"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Info)
        .chain(std::io::stdout())
        .apply()
        .unwrap();
}
