//! The three demos and their common interface.
//!
//! Each demo owns its GPU resources (program, mesh, texture where relevant),
//! built once at startup; rendering only reads them.

use std::{path::PathBuf, str::FromStr, sync::Arc};

use crate::{error::Error, frame::FrameTiming};

pub mod colored_cube;
pub mod flat_quad;
pub mod textured_cube;

/// Common interface for a demo: build resources up front, then redraw the
/// full geometry every frame.
pub trait Demo {
    /// Renders one frame. `aspect` is the drawable's current aspect ratio.
    fn render(&mut self, timing: &FrameTiming, aspect: f32);
}

/// Which demo to run, as selected on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DemoKind {
    /// Flat quad drawn as a triangle strip.
    Quad,
    /// Texture-mapped tumbling cube.
    Cube,
    /// Per-face-colored tumbling cube.
    Colors,
}

impl DemoKind {
    /// Window title for the demo.
    pub fn title(&self) -> &'static str {
        match self {
            DemoKind::Quad => "glcubes - flat quad",
            DemoKind::Cube => "glcubes - textured cube",
            DemoKind::Colors => "glcubes - colored cube",
        }
    }

    /// Directory holding the demo's `vert.glsl` / `frag.glsl` pair.
    pub fn shader_dir(&self) -> PathBuf {
        let name = match self {
            DemoKind::Quad => "quad",
            DemoKind::Cube => "cube",
            DemoKind::Colors => "colors",
        };
        PathBuf::from("assets/shaders").join(name)
    }

    /// Builds the demo, loading all of its resources before returning.
    pub fn build(&self, gl: &Arc<glow::Context>) -> Result<Box<dyn Demo>, Error> {
        Ok(match self {
            DemoKind::Quad => Box::new(flat_quad::FlatQuad::new(gl)?),
            DemoKind::Cube => Box::new(textured_cube::TexturedCube::new(gl)?),
            DemoKind::Colors => Box::new(colored_cube::ColoredCube::new(gl)?),
        })
    }
}

impl FromStr for DemoKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "quad" => Ok(DemoKind::Quad),
            "cube" => Ok(DemoKind::Cube),
            "colors" => Ok(DemoKind::Colors),
            other => Err(Error::UnknownDemo(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_selection() {
        assert_eq!("quad".parse::<DemoKind>().unwrap(), DemoKind::Quad);
        assert_eq!("cube".parse::<DemoKind>().unwrap(), DemoKind::Cube);
        assert_eq!("colors".parse::<DemoKind>().unwrap(), DemoKind::Colors);
        assert!(matches!(
            "teapot".parse::<DemoKind>(),
            Err(Error::UnknownDemo(name)) if name == "teapot"
        ));
    }

    #[test]
    fn test_shader_dirs_are_distinct() {
        assert_ne!(DemoKind::Quad.shader_dir(), DemoKind::Cube.shader_dir());
        assert_ne!(DemoKind::Cube.shader_dir(), DemoKind::Colors.shader_dir());
    }
}
