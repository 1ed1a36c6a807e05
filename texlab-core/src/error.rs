//! Error type shared by the core and the client.

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while setting up or running a viewer.
#[derive(Debug, Error)]
pub enum Error {
    /// A texture file could not be opened or decoded.
    #[error("cannot load texture {}: {source}", .path.display())]
    Texture {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A configuration value is out of range or inconsistent.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The configuration file is not valid JSON for [`crate::config::ConfigFile`].
    #[error("cannot parse configuration file {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot read configuration file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// SDL or OpenGL reported a failure.
    #[error("platform error: {0}")]
    Platform(String),
}

pub type Result<T> = std::result::Result<T, Error>;
