//! Viewer configuration.
//!
//! Settings are layered: the exercise's built-in defaults, then an optional
//! JSON file, then command line overrides.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{
    Error, Result,
    exercise::{Exercise, Shape},
    geometry::egg::{DEFAULT_RESOLUTION, MAX_RESOLUTION},
};

/// Name of the directory under the platform config dir.
const CONFIG_DIR_NAME: &str = "texlab";
const CONFIG_FILE_NAME: &str = "config.json";

/// Contents of `config.json`. Every field is optional.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub texture_dir: Option<PathBuf>,
    pub textures: Option<Vec<PathBuf>>,
    pub egg_resolution: Option<usize>,
    pub vsync: Option<bool>,
    pub window_width: Option<u32>,
    pub window_height: Option<u32>,
}

impl ConfigFile {
    /// Default location, e.g. `~/.config/texlab/config.json` on Linux.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    pub fn parse(contents: &str, path: &Path) -> Result<Self> {
        serde_json::from_str(contents).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let file = Self::parse(&contents, path)?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(file)
    }

    /// Loads `explicit` if given, otherwise the default file if it exists.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }
}

/// Values given on the command line; `None` leaves the lower layers alone.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub texture_dir: Option<PathBuf>,
    pub textures: Vec<PathBuf>,
    pub egg_resolution: Option<usize>,
    pub window_size: Option<(u32, u32)>,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub exercise: Exercise,
    pub textures: Vec<PathBuf>,
    pub egg_resolution: usize,
    pub vsync: bool,
    pub window_size: (u32, u32),
}

impl Settings {
    pub fn resolve(exercise: Exercise, file: ConfigFile, overrides: Overrides) -> Result<Self> {
        let texture_dir = overrides
            .texture_dir
            .or(file.texture_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        let relative = if !overrides.textures.is_empty() {
            overrides.textures
        } else if let Some(list) = file.textures {
            list
        } else {
            exercise
                .default_textures()
                .iter()
                .map(PathBuf::from)
                .collect()
        };
        let textures = relative
            .into_iter()
            .map(|p| if p.is_absolute() { p } else { texture_dir.join(p) })
            .collect();

        let egg_resolution = overrides
            .egg_resolution
            .or(file.egg_resolution)
            .unwrap_or(DEFAULT_RESOLUTION);
        // Only the egg tessellates.
        if exercise.shape() == Shape::Egg && !(2..=MAX_RESOLUTION).contains(&egg_resolution) {
            return Err(Error::Config(format!(
                "egg_resolution must be between 2 and {MAX_RESOLUTION}, got {egg_resolution}"
            )));
        }

        let (default_w, default_h) = exercise.window_size();
        let window_size = overrides.window_size.unwrap_or((
            file.window_width.unwrap_or(default_w),
            file.window_height.unwrap_or(default_h),
        ));
        if window_size.0 == 0 || window_size.1 == 0 {
            return Err(Error::Config(format!(
                "window size must be non-zero, got {}x{}",
                window_size.0, window_size.1
            )));
        }

        Ok(Self {
            exercise,
            textures,
            egg_resolution,
            vsync: file.vsync.unwrap_or(true),
            window_size,
        })
    }
}

/// Parses `WIDTHxHEIGHT`, e.g. `800x600`.
pub fn parse_size(s: &str) -> std::result::Result<(u32, u32), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let w = w.trim().parse::<u32>().map_err(|e| format!("invalid width '{w}': {e}"))?;
    let h = h.trim().parse::<u32>().map_err(|e| format!("invalid height '{h}': {e}"))?;
    if w == 0 || h == 0 {
        return Err(format!("window size must be non-zero, got '{s}'"));
    }
    Ok((w, h))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_exercise() {
        let settings =
            Settings::resolve(Exercise::Egg, ConfigFile::default(), Overrides::default()).unwrap();
        assert_eq!(settings.window_size, (600, 600));
        assert_eq!(settings.egg_resolution, DEFAULT_RESOLUTION);
        assert!(settings.vsync);
        assert_eq!(settings.textures.len(), 5);
        assert_eq!(settings.textures[0], Path::new(".").join("tekstury/P1_t.tga"));
    }

    #[test]
    fn file_then_cli_layering() {
        let file = ConfigFile::parse(
            r#"{ "texture_dir": "/assets", "egg_resolution": 20, "vsync": false, "window_width": 800 }"#,
            Path::new("config.json"),
        )
        .unwrap();
        let overrides = Overrides {
            egg_resolution: Some(30),
            ..Overrides::default()
        };
        let settings = Settings::resolve(Exercise::Quad, file, overrides).unwrap();
        assert_eq!(settings.egg_resolution, 30);
        assert!(!settings.vsync);
        assert_eq!(settings.window_size, (800, 400));
        assert_eq!(settings.textures, vec![PathBuf::from("/assets/tekstura.tga")]);
    }

    #[test]
    fn explicit_textures_replace_defaults() {
        let overrides = Overrides {
            texture_dir: Some(PathBuf::from("res")),
            textures: vec![PathBuf::from("a.png"), PathBuf::from("/abs/b.png")],
            ..Overrides::default()
        };
        let settings =
            Settings::resolve(Exercise::Gallery, ConfigFile::default(), overrides).unwrap();
        assert_eq!(
            settings.textures,
            vec![PathBuf::from("res/a.png"), PathBuf::from("/abs/b.png")]
        );
    }

    #[test]
    fn rejects_bad_values() {
        let overrides = Overrides {
            egg_resolution: Some(1),
            ..Overrides::default()
        };
        assert!(matches!(
            Settings::resolve(Exercise::Egg, ConfigFile::default(), overrides),
            Err(Error::Config(_))
        ));

        let err = ConfigFile::parse(r#"{ "colour": "red" }"#, Path::new("bad.json")).unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
    }

    #[test]
    fn resolution_bounds_apply_to_egg_only() {
        let low = Overrides {
            egg_resolution: Some(1),
            ..Overrides::default()
        };
        let settings = Settings::resolve(Exercise::Quad, ConfigFile::default(), low.clone())
            .unwrap();
        assert_eq!(settings.egg_resolution, 1);
        assert!(Settings::resolve(Exercise::Pyramid, ConfigFile::default(), low).is_ok());

        let high = Overrides {
            egg_resolution: Some(MAX_RESOLUTION + 1),
            ..Overrides::default()
        };
        assert!(Settings::resolve(Exercise::Gallery, ConfigFile::default(), high.clone()).is_ok());
        assert!(matches!(
            Settings::resolve(Exercise::Egg, ConfigFile::default(), high),
            Err(Error::Config(_))
        ));

        let file = ConfigFile {
            egg_resolution: Some(60_000),
            ..ConfigFile::default()
        };
        assert!(matches!(
            Settings::resolve(Exercise::Egg, file, Overrides::default()),
            Err(Error::Config(_))
        ));

        let top = Overrides {
            egg_resolution: Some(MAX_RESOLUTION),
            ..Overrides::default()
        };
        let settings = Settings::resolve(Exercise::Egg, ConfigFile::default(), top).unwrap();
        assert_eq!(settings.egg_resolution, MAX_RESOLUTION);
    }

    #[test]
    fn missing_file_error_names_the_path() {
        let path = std::env::temp_dir()
            .join(format!("texlab-config-{}", std::process::id()))
            .join("does-not-exist.json");
        let err = ConfigFile::load(&path).unwrap_err();
        match &err {
            Error::ConfigRead { path: reported, source } => {
                assert_eq!(reported, &path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("does-not-exist.json"));

        let err = ConfigFile::discover(Some(&path)).unwrap_err();
        assert!(matches!(err, Error::ConfigRead { .. }));
    }

    #[test]
    fn size_parsing() {
        assert_eq!(parse_size("800x600"), Ok((800, 600)));
        assert_eq!(parse_size("1024X768"), Ok((1024, 768)));
        assert!(parse_size("800").is_err());
        assert!(parse_size("0x600").is_err());
    }
}
