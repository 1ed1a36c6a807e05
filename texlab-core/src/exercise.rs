//! The table of viewer exercises and their fixed parameters.

use crate::{orbit::ViewportPolicy, texture::MissingTexture};

/// Which primitive an exercise draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    Quad,
    Pyramid,
    Egg,
}

/// Which faces are discarded by culling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CullFace {
    Back,
    Front,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Exercise {
    /// A flat textured square, yaw only.
    Quad,
    /// Textured pyramid whose front wall can be hidden with `H`.
    Pyramid,
    /// The pyramid with eight textures cycled by `T`.
    Gallery,
    /// The parametric egg with textures cycled by `T`.
    Egg,
}

impl Exercise {
    pub const ALL: [Exercise; 4] = [
        Exercise::Quad,
        Exercise::Pyramid,
        Exercise::Gallery,
        Exercise::Egg,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Exercise::Quad => "quad",
            Exercise::Pyramid => "pyramid",
            Exercise::Gallery => "gallery",
            Exercise::Egg => "egg",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Exercise::Quad => "texlab - textured quad",
            Exercise::Pyramid => "texlab - pyramid",
            Exercise::Gallery => "texlab - pyramid texture gallery",
            Exercise::Egg => "texlab - textured egg",
        }
    }

    pub fn shape(self) -> Shape {
        match self {
            Exercise::Quad => Shape::Quad,
            Exercise::Pyramid | Exercise::Gallery => Shape::Pyramid,
            Exercise::Egg => Shape::Egg,
        }
    }

    pub fn window_size(self) -> (u32, u32) {
        match self {
            Exercise::Egg => (600, 600),
            _ => (400, 400),
        }
    }

    pub fn camera_distance(self) -> f32 {
        match self {
            Exercise::Egg => 15.0,
            _ => 10.0,
        }
    }

    pub fn viewport_policy(self) -> ViewportPolicy {
        match self {
            Exercise::Egg => ViewportPolicy::Stretch,
            _ => ViewportPolicy::LetterboxSquare,
        }
    }

    /// The egg's outer shell winds counter-clockwise, so culling front faces
    /// drops the near side and shows the inside of the far shell.
    pub fn cull_face(self) -> CullFace {
        match self {
            Exercise::Egg => CullFace::Front,
            _ => CullFace::Back,
        }
    }

    pub fn pitch_enabled(self) -> bool {
        self != Exercise::Quad
    }

    /// `H` hides or shows the pyramid's front wall.
    pub fn front_wall_toggle(self) -> bool {
        matches!(self, Exercise::Pyramid | Exercise::Gallery)
    }

    /// `T` switches to the next texture.
    pub fn texture_cycling(self) -> bool {
        matches!(self, Exercise::Gallery | Exercise::Egg)
    }

    pub fn missing_texture(self) -> MissingTexture {
        match self {
            Exercise::Egg => MissingTexture::Skip,
            _ => MissingTexture::Fatal,
        }
    }

    /// Texture files relative to the texture directory.
    pub fn default_textures(self) -> &'static [&'static str] {
        match self {
            Exercise::Quad | Exercise::Pyramid => &["tekstura.tga"],
            Exercise::Gallery => &[
                "tekstury/D1_t.tga",
                "tekstury/D2_t.tga",
                "tekstury/D3_t.tga",
                "tekstury/D4_t.tga",
                "tekstury/D5_t.tga",
                "tekstury/M1_t.tga",
                "tekstury/N1_t.tga",
                "tekstury/P1_t.tga",
            ],
            Exercise::Egg => &[
                "tekstury/P1_t.tga",
                "tekstury/P2_t.tga",
                "tekstury/dirt.tga",
                "tekstury/tekstura.tga",
                "tekstury/moja-tekstura.tga",
            ],
        }
    }
}

impl std::fmt::Display for Exercise {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Exercise {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        Exercise::ALL
            .into_iter()
            .find(|e| e.name() == lower)
            .ok_or_else(|| {
                let names: Vec<_> = Exercise::ALL.iter().map(|e| e.name()).collect();
                format!("unknown exercise '{s}', expected one of: {}", names.join(", "))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for exercise in Exercise::ALL {
            assert_eq!(exercise.name().parse::<Exercise>(), Ok(exercise));
        }
        assert_eq!("EGG".parse::<Exercise>(), Ok(Exercise::Egg));
        assert!("cube".parse::<Exercise>().is_err());
    }

    #[test]
    fn key_bindings_per_exercise() {
        assert!(!Exercise::Quad.front_wall_toggle() && !Exercise::Quad.texture_cycling());
        assert!(Exercise::Pyramid.front_wall_toggle() && !Exercise::Pyramid.texture_cycling());
        assert!(Exercise::Gallery.front_wall_toggle() && Exercise::Gallery.texture_cycling());
        assert!(!Exercise::Egg.front_wall_toggle() && Exercise::Egg.texture_cycling());
    }

    #[test]
    fn only_egg_tolerates_missing_textures() {
        for exercise in Exercise::ALL {
            let expected = if exercise == Exercise::Egg {
                MissingTexture::Skip
            } else {
                MissingTexture::Fatal
            };
            assert_eq!(exercise.missing_texture(), expected);
        }
        assert_eq!(Exercise::Gallery.default_textures().len(), 8);
    }
}
