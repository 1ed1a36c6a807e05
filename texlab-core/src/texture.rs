//! Texture decoding and the cyclable set of textures an exercise owns.
//!
//! Decoding happens here, on the CPU. The client uploads the resulting
//! [`TextureImage`]s and keeps the GPU handles in a [`TextureSet`].

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// What to do when one of the requested texture files cannot be loaded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MissingTexture {
    /// Abort with the error.
    Fatal,
    /// Log a warning and continue with the remaining files.
    Skip,
}

/// Tightly packed RGB8 pixels, bottom row first.
#[derive(Clone, Debug, PartialEq)]
pub struct TextureImage {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl TextureImage {
    /// Loads an image file in any format the `image` crate understands.
    ///
    /// Rows are flipped so the buffer can be handed to `glTexImage2D`
    /// directly, whose first row is the bottom of the picture.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let img = image::open(path).map_err(|source| Error::Texture {
            path: path.to_path_buf(),
            source,
        })?;
        let rgb = img.flipv().to_rgb8();
        let (width, height) = rgb.dimensions();
        log::debug!("Decoded {} ({}x{})", path.display(), width, height);
        Ok(Self {
            width,
            height,
            data: rgb.into_raw(),
        })
    }
}

/// Loads every path in order, applying `policy` to failures.
pub fn load_all<P: AsRef<Path>>(
    paths: &[P],
    policy: MissingTexture,
) -> Result<Vec<(PathBuf, TextureImage)>> {
    let mut loaded = Vec::with_capacity(paths.len());
    for path in paths {
        let path = path.as_ref();
        match TextureImage::load(path) {
            Ok(image) => loaded.push((path.to_path_buf(), image)),
            Err(err) if policy == MissingTexture::Skip => {
                log::warn!("{err}. Skipping.");
            }
            Err(err) => return Err(err),
        }
    }
    Ok(loaded)
}

/// Ordered textures with a current selection that wraps around.
#[derive(Debug)]
pub struct TextureSet<T> {
    items: Vec<T>,
    current: usize,
}

impl<T> TextureSet<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items, current: 0 }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> Option<&T> {
        self.items.get(self.current)
    }

    /// Moves to the next texture, wrapping to the first after the last.
    pub fn cycle(&mut self) -> Option<usize> {
        if self.items.is_empty() {
            return None;
        }
        self.current = (self.current + 1) % self.items.len();
        Some(self.current)
    }
}
