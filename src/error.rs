//! Error types for demo startup and resource loading.
//!
//! Every failure here is terminal for the run: nothing is retried, the error
//! is logged and the process exits without starting the render loop.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The SDL window or OpenGL context could not be created.
    #[error("unable to initialize the rendering context: {0}")]
    Context(String),

    /// A shader stage failed to compile. Carries the driver's info log.
    #[error("error compiling the {stage} shader: {log}")]
    ShaderCompile { stage: &'static str, log: String },

    /// The shader program failed to link. Carries the driver's info log.
    #[error("unable to link the shader program: {log}")]
    ProgramLink { log: String },

    /// A shader source file could not be read.
    #[error("failed to read shader source {path}: {source}")]
    ShaderSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The texture image could not be read or decoded.
    #[error("failed to load the texture {path}: {source}")]
    TextureDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The texture did not finish decoding within the load deadline.
    #[error("timed out loading the texture: {path}")]
    TextureTimeout { path: PathBuf },

    /// A resource loader thread died without reporting a result.
    #[error("resource loader thread panicked")]
    LoaderPanicked,

    /// The demo name given on the command line is not one of ours.
    #[error("unknown demo '{0}' (expected quad, cube or colors)")]
    UnknownDemo(String),
}
