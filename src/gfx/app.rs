//! SDL2 and OpenGL application management.
//!
//! This module defines the [`App`] struct which encapsulates the SDL2
//! and OpenGL context necessary for creating a windowed application.

use std::sync::Arc;

use crate::error::Error;

/// The [`App`] struct encapsulates the SDL2 and OpenGL context.
pub struct App {
    pub sdl: sdl2::Sdl,
    pub video_subsystem: sdl2::VideoSubsystem,
    pub window: sdl2::video::Window,
    pub gl_context: sdl2::video::GLContext,
    pub gl: Arc<glow::Context>,
    pub event_pump: sdl2::EventPump,
}

impl App {
    /// Creates a new [`App`] instance with the specified title, width, and height.
    ///
    /// Any failure along the way means the machine cannot give us a usable
    /// rendering context, so it is reported as [`Error::Context`] and no
    /// further initialization is attempted by the caller.
    pub fn new(title: &str, width: u32, height: u32) -> Result<Self, Error> {
        let sdl = sdl2::init().map_err(Error::Context)?;
        let video_subsystem = sdl.video().map_err(Error::Context)?;
        let gl_attr = video_subsystem.gl_attr();
        gl_attr.set_context_profile(sdl2::video::GLProfile::Core);
        gl_attr.set_context_version(3, 3);
        let window = video_subsystem
            .window(title, width, height)
            .opengl()
            .resizable()
            .build()
            .map_err(|e| Error::Context(e.to_string()))?;
        let gl_context = window.gl_create_context().map_err(Error::Context)?;
        window.gl_make_current(&gl_context).map_err(Error::Context)?;
        let gl = unsafe {
            glow::Context::from_loader_function(|s| {
                video_subsystem.gl_get_proc_address(s) as *const _
            })
        };
        let event_pump = sdl.event_pump().map_err(Error::Context)?;
        let gl = Arc::new(gl);

        Ok(Self {
            sdl,
            video_subsystem,
            window,
            gl_context,
            gl,
            event_pump,
        })
    }

    /// Current drawable aspect ratio, read fresh every frame so resizes
    /// take effect immediately.
    pub fn aspect_ratio(&self) -> f32 {
        let (width, height) = self.window.drawable_size();
        width as f32 / height as f32
    }
}
