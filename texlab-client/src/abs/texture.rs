//! GPU textures.
//!
//! The [`Texture`] struct owns an OpenGL texture uploaded from a decoded
//! [`TextureImage`].

use std::sync::Arc;

use glow::HasContext;
use texlab_core::texture::TextureImage;

/// Represents a texture stored on the GPU side.
pub struct Texture {
    gl: Arc<glow::Context>,
    id: glow::Texture,
    width: u32,
    height: u32,
}

impl Texture {
    /// Uploads RGB8 pixels with linear filtering and repeat wrapping.
    pub fn new(gl: &Arc<glow::Context>, image: &TextureImage) -> Result<Self, String> {
        unsafe {
            let texture = gl.create_texture()?;
            gl.bind_texture(glow::TEXTURE_2D, Some(texture));
            // RGB rows are not necessarily 4-byte aligned.
            gl.pixel_store_i32(glow::UNPACK_ALIGNMENT, 1);
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_S, glow::REPEAT as i32);
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_T, glow::REPEAT as i32);
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MIN_FILTER,
                glow::LINEAR as i32,
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MAG_FILTER,
                glow::LINEAR as i32,
            );
            gl.tex_image_2d(
                glow::TEXTURE_2D,
                0,
                glow::RGB as i32,
                image.width as i32,
                image.height as i32,
                0,
                glow::RGB,
                glow::UNSIGNED_BYTE,
                glow::PixelUnpackData::Slice(Some(image.data.as_slice())),
            );
            gl.bind_texture(glow::TEXTURE_2D, None);

            Ok(Self {
                gl: Arc::clone(gl),
                id: texture,
                width: image.width,
                height: image.height,
            })
        }
    }

    /// Returns the width of the texture.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height of the texture.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Binds the texture to the specified texture unit.
    pub fn bind(&self, unit: u32) {
        unsafe {
            self.gl.active_texture(glow::TEXTURE0 + unit);
            self.gl.bind_texture(glow::TEXTURE_2D, Some(self.id));
        }
    }

    /// Leaves `unit` with no texture, which samples as opaque black.
    pub fn unbind(gl: &glow::Context, unit: u32) {
        unsafe {
            gl.active_texture(glow::TEXTURE0 + unit);
            gl.bind_texture(glow::TEXTURE_2D, None);
        }
    }
}

impl Drop for Texture {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_texture(self.id);
        }
    }
}
