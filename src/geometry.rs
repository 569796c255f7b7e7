//! Declarative geometry tables for the three demos.
//!
//! All geometry is compiled-in constant data, kept apart from the rendering
//! code so it can be swapped without touching the renderers. Front faces are
//! wound counter-clockwise throughout.

use glam::{Vec2, Vec3, Vec4};
use glow::HasContext;

use crate::gfx::Vertex;

/// 2-D position only, for the flat quad's triangle strip.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct QuadVertex {
    pub position: Vec2,
}

impl Vertex for QuadVertex {
    fn vertex_attribs(gl: &glow::Context) {
        unsafe {
            let stride = std::mem::size_of::<QuadVertex>() as i32;

            gl.enable_vertex_attrib_array(0);
            gl.vertex_attrib_pointer_f32(0, 2, glow::FLOAT, false, stride, 0);
        }
    }
}

/// 3-D position plus texture coordinate, for the textured cube.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct TexturedVertex {
    pub position: Vec3,
    pub uv: Vec2,
}

impl Vertex for TexturedVertex {
    fn vertex_attribs(gl: &glow::Context) {
        unsafe {
            let stride = std::mem::size_of::<TexturedVertex>() as i32;

            // Position attribute
            gl.enable_vertex_attrib_array(0);
            gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, stride, 0);

            // Texture coordinate attribute
            gl.enable_vertex_attrib_array(1);
            gl.vertex_attrib_pointer_f32(
                1,
                2,
                glow::FLOAT,
                false,
                stride,
                size_of::<Vec3>() as i32,
            );
        }
    }
}

/// 3-D position plus RGBA color, for the per-face-colored cube.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct ColoredVertex {
    pub position: Vec3,
    pub color: Vec4,
}

impl Vertex for ColoredVertex {
    fn vertex_attribs(gl: &glow::Context) {
        unsafe {
            let stride = std::mem::size_of::<ColoredVertex>() as i32;

            // Position attribute
            gl.enable_vertex_attrib_array(0);
            gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, stride, 0);

            // Color attribute
            gl.enable_vertex_attrib_array(1);
            gl.vertex_attrib_pointer_f32(
                1,
                4,
                glow::FLOAT,
                false,
                stride,
                size_of::<Vec3>() as i32,
            );
        }
    }
}

/// Full-viewport quad as a 4-vertex triangle strip.
pub const QUAD_POSITIONS: [[f32; 2]; 4] = [[1.0, 1.0], [1.0, -1.0], [-1.0, 1.0], [-1.0, -1.0]];

/// Cube corner positions, four per face so each face can carry its own
/// texture coordinates or color. Face order: front, back, top, bottom,
/// right, left.
pub const CUBE_POSITIONS: [[f32; 3]; 24] = [
    // Front face
    [-1.0, -1.0, 1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, 1.0],
    [-1.0, 1.0, 1.0],
    // Back face
    [-1.0, -1.0, -1.0],
    [-1.0, 1.0, -1.0],
    [1.0, 1.0, -1.0],
    [1.0, -1.0, -1.0],
    // Top face
    [-1.0, 1.0, -1.0],
    [-1.0, 1.0, 1.0],
    [1.0, 1.0, 1.0],
    [1.0, 1.0, -1.0],
    // Bottom face
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, -1.0],
    [1.0, -1.0, 1.0],
    [-1.0, -1.0, 1.0],
    // Right face
    [1.0, -1.0, -1.0],
    [1.0, 1.0, -1.0],
    [1.0, 1.0, 1.0],
    [1.0, -1.0, 1.0],
    // Left face
    [-1.0, -1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [-1.0, 1.0, 1.0],
    [-1.0, 1.0, -1.0],
];

/// One full texture tile per face, in the same corner order as
/// [`CUBE_POSITIONS`].
pub const CUBE_UVS: [[f32; 2]; 24] = [
    // Front
    [0.0, 0.0],
    [1.0, 0.0],
    [1.0, 1.0],
    [0.0, 1.0],
    // Back
    [0.0, 0.0],
    [1.0, 0.0],
    [1.0, 1.0],
    [0.0, 1.0],
    // Top
    [0.0, 0.0],
    [1.0, 0.0],
    [1.0, 1.0],
    [0.0, 1.0],
    // Bottom
    [0.0, 0.0],
    [1.0, 0.0],
    [1.0, 1.0],
    [0.0, 1.0],
    // Right
    [0.0, 0.0],
    [1.0, 0.0],
    [1.0, 1.0],
    [0.0, 1.0],
    // Left
    [0.0, 0.0],
    [1.0, 0.0],
    [1.0, 1.0],
    [0.0, 1.0],
];

/// One RGBA color per face, expanded to all four corners of that face.
pub const CUBE_FACE_COLORS: [[f32; 4]; 6] = [
    [1.0, 1.0, 1.0, 1.0], // Front: white
    [1.0, 0.0, 0.0, 1.0], // Back: red
    [0.0, 1.0, 0.0, 1.0], // Top: green
    [0.0, 0.0, 1.0, 1.0], // Bottom: blue
    [1.0, 1.0, 0.0, 1.0], // Right: yellow
    [1.0, 0.0, 1.0, 1.0], // Left: purple
];

/// Two CCW triangles per face, 36 indices into the 24 cube corners.
pub const CUBE_INDICES: [u16; 36] = [
    0, 1, 2, 0, 2, 3, // front
    4, 5, 6, 4, 6, 7, // back
    8, 9, 10, 8, 10, 11, // top
    12, 13, 14, 12, 14, 15, // bottom
    16, 17, 18, 16, 18, 19, // right
    20, 21, 22, 20, 22, 23, // left
];

/// Assembles the flat quad's vertex stream.
pub fn quad_vertices() -> Vec<QuadVertex> {
    QUAD_POSITIONS
        .iter()
        .map(|&position| QuadVertex {
            position: Vec2::from(position),
        })
        .collect()
}

/// Assembles the textured cube's interleaved vertex stream.
pub fn cube_textured_vertices() -> Vec<TexturedVertex> {
    CUBE_POSITIONS
        .iter()
        .zip(CUBE_UVS.iter())
        .map(|(&position, &uv)| TexturedVertex {
            position: Vec3::from(position),
            uv: Vec2::from(uv),
        })
        .collect()
}

/// Assembles the colored cube's interleaved vertex stream, expanding each
/// face color to its four corners.
pub fn cube_colored_vertices() -> Vec<ColoredVertex> {
    CUBE_POSITIONS
        .iter()
        .enumerate()
        .map(|(i, &position)| ColoredVertex {
            position: Vec3::from(position),
            color: Vec4::from(CUBE_FACE_COLORS[i / 4]),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_index_count_and_range() {
        assert_eq!(CUBE_INDICES.len(), 36);
        for &index in CUBE_INDICES.iter() {
            assert!((index as usize) < CUBE_POSITIONS.len());
        }
    }

    #[test]
    fn test_cube_faces_share_the_fan_pattern() {
        // Each face is a fan of two triangles: (a, b, c) and (a, c, d).
        for face in 0..6 {
            let i = &CUBE_INDICES[face * 6..face * 6 + 6];
            assert_eq!(i[0], i[3]);
            assert_eq!(i[2], i[4]);
        }
    }

    #[test]
    fn test_cube_winding_faces_outward() {
        // The cube is centered at the origin, so a CCW front face has its
        // triangle normal pointing away from the origin.
        for triangle in CUBE_INDICES.chunks(3) {
            let a = Vec3::from(CUBE_POSITIONS[triangle[0] as usize]);
            let b = Vec3::from(CUBE_POSITIONS[triangle[1] as usize]);
            let c = Vec3::from(CUBE_POSITIONS[triangle[2] as usize]);
            let normal = (b - a).cross(c - a);
            let centroid = (a + b + c) / 3.0;
            assert!(
                normal.dot(centroid) > 0.0,
                "triangle {triangle:?} winds inward"
            );
        }
    }

    #[test]
    fn test_colored_cube_has_uniform_face_colors() {
        let vertices = cube_colored_vertices();
        assert_eq!(vertices.len(), 24);
        for face in 0..6 {
            let expected = Vec4::from(CUBE_FACE_COLORS[face]);
            for corner in 0..4 {
                assert_eq!(vertices[face * 4 + corner].color, expected);
            }
        }
    }

    #[test]
    fn test_quad_strip_has_four_vertices() {
        assert_eq!(quad_vertices().len(), 4);
    }
}
