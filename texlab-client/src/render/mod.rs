//! Vertex layouts and shaders used to draw the textured primitives.

use glow::HasContext;
use texlab_core::geometry::SurfaceVertex;

use crate::abs::Vertex;

impl Vertex for SurfaceVertex {
    fn vertex_attribs(gl: &glow::Context) {
        unsafe {
            let stride = std::mem::size_of::<SurfaceVertex>() as i32;

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
                std::mem::size_of::<[f32; 3]>() as i32,
            );
        }
    }
}
