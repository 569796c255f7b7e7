//! Textured cube demo: a tumbling cube with one texture tile per face.

use std::{path::Path, sync::Arc};

use glow::HasContext;

use crate::{
    error::Error,
    frame::{self, FrameTiming},
    geometry,
    gfx::{Mesh, ShaderProgram, Texture},
    loader,
};

use super::{Demo, DemoKind};

const TEXTURE_PATH: &str = "assets/textures/cubetexture.png";

pub struct TexturedCube {
    gl: Arc<glow::Context>,
    program: ShaderProgram,
    mesh: Mesh,
    texture: Texture,
}

impl TexturedCube {
    pub fn new(gl: &Arc<glow::Context>) -> Result<Self, Error> {
        log::info!("loading shaders and texture");
        let (sources, image) = loader::load_textured_resources(
            &DemoKind::Cube.shader_dir(),
            Path::new(TEXTURE_PATH),
        )?;

        log::info!("building shader program");
        let program = ShaderProgram::from_sources(gl, &sources.vertex, &sources.fragment)?;

        log::info!("initializing buffers");
        let mesh = Mesh::new(
            gl,
            &geometry::cube_textured_vertices(),
            &geometry::CUBE_INDICES,
            glow::TRIANGLES,
        );
        let texture = Texture::new(gl, &image);
        log::info!(
            "cube mesh uploaded ({} indices), texture {}x{}",
            mesh.count(),
            texture.width(),
            texture.height()
        );

        unsafe {
            gl.enable(glow::DEPTH_TEST);
            gl.depth_func(glow::LEQUAL);
        }

        Ok(Self {
            gl: Arc::clone(gl),
            program,
            mesh,
            texture,
        })
    }
}

impl Demo for TexturedCube {
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

        self.texture.bind(0);
        self.program.set_uniform("u_sampler", 0i32);

        self.mesh.draw();
    }
}
