//! The core of the texlab viewer. This crate holds everything that does not
//! need a window or a GL context: the procedural geometry, the drag-to-rotate
//! camera maths, texture decoding, configuration and the table of exercises.
//!
//! The `texlab-client` crate turns these pieces into an SDL2/OpenGL program.

pub mod config;
pub mod error;
pub mod exercise;
pub mod geometry;
pub mod orbit;
pub mod texture;

pub use error::{Error, Result};
