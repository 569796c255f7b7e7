//! Colored cube demo: a tumbling cube with a solid color per face.

use std::sync::Arc;

use glow::HasContext;

use crate::{
    error::Error,
    frame::{self, FrameTiming},
    geometry,
    gfx::{Mesh, ShaderProgram},
    loader,
};

use super::{Demo, DemoKind};

pub struct ColoredCube {
    gl: Arc<glow::Context>,
    program: ShaderProgram,
    mesh: Mesh,
}

impl ColoredCube {
    pub fn new(gl: &Arc<glow::Context>) -> Result<Self, Error> {
        log::info!("loading shaders");
        let sources = loader::load_shader_sources(&DemoKind::Colors.shader_dir())?;

        log::info!("building shader program");
        let program = ShaderProgram::from_sources(gl, &sources.vertex, &sources.fragment)?;

        log::info!("initializing buffers");
        let mesh = Mesh::new(
            gl,
            &geometry::cube_colored_vertices(),
            &geometry::CUBE_INDICES,
            glow::TRIANGLES,
        );

        log::info!("cube mesh uploaded ({} indices)", mesh.count());

        unsafe {
            gl.enable(glow::DEPTH_TEST);
            gl.depth_func(glow::LEQUAL);
        }

        Ok(Self {
            gl: Arc::clone(gl),
            program,
            mesh,
        })
    }
}

impl Demo for ColoredCube {
    fn render(&mut self, timing: &FrameTiming, aspect: f32) {
        unsafe {
            self.gl.clear_color(0.0, 0.0, 0.0, 1.0);
            self.gl.clear_depth_f64(1.0);
            self.gl
                .clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
        }

        self.program.use_program();
        self.program
            .set_uniform("u_projection", frame::projection(aspect));
        self.program
            .set_uniform("u_model_view", frame::model_view(timing.elapsed));

        self.mesh.draw();
    }
}
