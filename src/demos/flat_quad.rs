//! Flat quad demo: a full-viewport triangle strip with no animation.

use std::sync::Arc;

use glow::HasContext;

use crate::{
    error::Error,
    frame::FrameTiming,
    geometry,
    gfx::{Mesh, ShaderProgram},
    loader,
};

use super::{Demo, DemoKind};

pub struct FlatQuad {
    gl: Arc<glow::Context>,
    program: ShaderProgram,
    mesh: Mesh,
}

impl FlatQuad {
    pub fn new(gl: &Arc<glow::Context>) -> Result<Self, Error> {
        log::info!("loading shaders");
        let sources = loader::load_shader_sources(&DemoKind::Quad.shader_dir())?;

        log::info!("building shader program");
        let program = ShaderProgram::from_sources(gl, &sources.vertex, &sources.fragment)?;

        log::info!("initializing buffers");
        let mesh = Mesh::new_unindexed(gl, &geometry::quad_vertices(), glow::TRIANGLE_STRIP);

        Ok(Self {
            gl: Arc::clone(gl),
            program,
            mesh,
        })
    }
}

impl Demo for FlatQuad {
    fn render(&mut self, _timing: &FrameTiming, _aspect: f32) {
        unsafe {
            self.gl.clear_color(0.0, 0.0, 0.0, 1.0);
            self.gl.clear(glow::COLOR_BUFFER_BIT);
        }

        self.program.use_program();
        self.mesh.draw();
    }
}
