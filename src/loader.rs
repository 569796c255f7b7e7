//! Asynchronous startup resource loading.
//!
//! Shader sources and the texture image are fetched on worker threads and
//! joined before the render loop starts; the first failure aborts startup.
//! The texture decode is the only load with a deadline (2000 ms), after
//! which the attempt is reported as failed. One attempt per resource, no
//! retries.

use std::{
    path::Path,
    sync::mpsc::{self, Receiver, RecvTimeoutError},
    thread::{self, JoinHandle},
    time::Duration,
};

use image::DynamicImage;

use crate::error::Error;

/// How long a texture decode may take before the load counts as failed.
pub const TEXTURE_TIMEOUT: Duration = Duration::from_millis(2000);

/// The vertex/fragment source pair for one demo.
#[derive(Debug)]
pub struct ShaderSources {
    pub vertex: String,
    pub fragment: String,
}

/// Reads one shader stage's source text.
fn read_source(path: &Path) -> Result<String, Error> {
    std::fs::read_to_string(path).map_err(|source| Error::ShaderSource {
        path: path.to_path_buf(),
        source,
    })
}

/// Decodes the image file at `path` on the calling thread.
pub fn decode_image(path: &Path) -> Result<DynamicImage, Error> {
    image::open(path).map_err(|source| Error::TextureDecode {
        path: path.to_path_buf(),
        source,
    })
}

fn join<T>(handle: JoinHandle<Result<T, Error>>) -> Result<T, Error> {
    handle.join().map_err(|_| Error::LoaderPanicked)?
}

/// Loads `vert.glsl` and `frag.glsl` from `dir` concurrently.
pub fn load_shader_sources(dir: &Path) -> Result<ShaderSources, Error> {
    let vert_path = dir.join("vert.glsl");
    let frag_path = dir.join("frag.glsl");
    let vert = thread::spawn(move || read_source(&vert_path));
    let frag = thread::spawn(move || read_source(&frag_path));

    Ok(ShaderSources {
        vertex: join(vert)?,
        fragment: join(frag)?,
    })
}

/// Loads shader sources and the texture image concurrently, failing fast on
/// whichever goes wrong first.
pub fn load_textured_resources(
    shader_dir: &Path,
    texture_path: &Path,
) -> Result<(ShaderSources, DynamicImage), Error> {
    let dir = shader_dir.to_path_buf();
    let shaders = thread::spawn(move || load_shader_sources(&dir));
    let image = spawn_image_decode(texture_path);

    let sources = join(shaders)?;
    let image = await_decode(image, TEXTURE_TIMEOUT, texture_path)?;
    Ok((sources, image))
}

fn spawn_image_decode(path: &Path) -> Receiver<Result<DynamicImage, Error>> {
    let (tx, rx) = mpsc::channel();
    let worker_path = path.to_path_buf();
    thread::spawn(move || {
        // The receiver may have timed out and gone away; that send failure
        // is irrelevant by then.
        let _ = tx.send(decode_image(&worker_path));
    });
    rx
}

/// Waits for the decode result. Success and failure are mutually exclusive
/// terminal outcomes; a deadline miss carries the attempted path.
fn await_decode(
    rx: Receiver<Result<DynamicImage, Error>>,
    timeout: Duration,
    path: &Path,
) -> Result<DynamicImage, Error> {
    match rx.recv_timeout(timeout) {
        Ok(result) => result,
        Err(RecvTimeoutError::Timeout) => Err(Error::TextureTimeout {
            path: path.to_path_buf(),
        }),
        Err(RecvTimeoutError::Disconnected) => Err(Error::LoaderPanicked),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("glcubes-{name}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_decode_timeout_carries_the_path() {
        let (tx, rx) = mpsc::channel();
        let path = Path::new("textures/cubetexture.png");

        let result = await_decode(rx, Duration::from_millis(10), path);
        match result {
            Err(Error::TextureTimeout { path: reported }) => {
                assert_eq!(reported, path);
            }
            other => panic!("expected a timeout, got {other:?}"),
        }
        drop(tx);
    }

    #[test]
    fn test_decode_missing_image_fails_with_path() {
        let path = Path::new("does/not/exist.png");
        match decode_image(path) {
            Err(Error::TextureDecode { path: reported, .. }) => {
                assert_eq!(reported, path);
            }
            other => panic!("expected a decode failure, got {other:?}"),
        }
    }

    #[test]
    fn test_shader_sources_round_trip() {
        let dir = scratch_dir("shaders-ok");
        std::fs::write(dir.join("vert.glsl"), "void main() {}").unwrap();
        std::fs::write(dir.join("frag.glsl"), "void main() {}").unwrap();

        let sources = load_shader_sources(&dir).unwrap();
        assert_eq!(sources.vertex, "void main() {}");
        assert_eq!(sources.fragment, "void main() {}");

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_shader_source_fails_fast() {
        let dir = scratch_dir("shaders-missing");
        std::fs::write(dir.join("vert.glsl"), "void main() {}").unwrap();
        // No frag.glsl on purpose.

        match load_shader_sources(&dir) {
            Err(Error::ShaderSource { path, .. }) => {
                assert_eq!(path, dir.join("frag.glsl"));
            }
            other => panic!("expected a source read failure, got {other:?}"),
        }

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_textured_load_aborts_on_first_failure() {
        let dir = scratch_dir("textured-missing");
        // Neither shaders nor texture exist; the join must surface an error
        // rather than hang or succeed partially.
        let result = load_textured_resources(&dir.join("nope"), Path::new("missing.png"));
        assert!(result.is_err());

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
