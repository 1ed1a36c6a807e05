//! Thin RAII wrappers around SDL2 and the OpenGL objects the viewer needs:
//! the window and context, shaders, meshes and textures.

pub mod app;
pub mod mesh;
pub mod shader;
pub mod texture;

pub use app::*;
pub use mesh::*;
pub use shader::*;
pub use texture::*;
