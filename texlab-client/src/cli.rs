//! Command line interface.

use std::path::PathBuf;

use clap::Parser;
use texlab_core::{
    config::{Overrides, parse_size},
    exercise::Exercise,
};

/// Interactive viewer for textured primitives.
///
/// Drag with the left mouse button to rotate the model. Depending on the
/// exercise, `H` hides the pyramid's front wall and `T` switches textures.
#[derive(Debug, Parser)]
#[command(name = "texlab", version, about)]
pub struct Cli {
    /// Exercise to run: quad, pyramid, gallery or egg.
    pub exercise: Exercise,

    /// Configuration file (defaults to <config dir>/texlab/config.json if present).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory relative texture paths are resolved against.
    #[arg(long)]
    pub texture_dir: Option<PathBuf>,

    /// Texture file to load instead of the exercise defaults. Repeatable.
    #[arg(long = "texture", value_name = "PATH")]
    pub textures: Vec<PathBuf>,

    /// Grid resolution of the egg surface.
    #[arg(long)]
    pub resolution: Option<usize>,

    /// Initial window size, e.g. 800x600.
    #[arg(long, value_name = "WxH", value_parser = parse_size)]
    pub size: Option<(u32, u32)>,

    /// Log debug messages.
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors.
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn log_level(&self) -> log::LevelFilter {
        if self.verbose {
            log::LevelFilter::Debug
        } else if self.quiet {
            log::LevelFilter::Warn
        } else {
            log::LevelFilter::Info
        }
    }

    pub fn overrides(&self) -> Overrides {
        Overrides {
            texture_dir: self.texture_dir.clone(),
            textures: self.textures.clone(),
            egg_resolution: self.resolution,
            window_size: self.size,
        }
    }
}
