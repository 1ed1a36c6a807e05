//! The viewer scene: one textured primitive, drag to rotate.

use std::sync::Arc;

use glow::HasContext;
use sdl2::{event::Event, keyboard::Keycode, mouse::MouseButton};
use texlab_core::{
    Error, Result,
    config::Settings,
    exercise::{CullFace, Exercise, Shape},
    geometry::{self, MeshData},
    orbit::{Camera, DragRotation, Viewport},
    texture::{self, TextureSet},
};

use super::{Scene, SceneSwitch};
use crate::{
    abs::{Mesh, ShaderProgram, Texture},
    shader_program,
};

const TEXTURE_UNIT: u32 = 0;

/// The [`Viewer`] struct draws the primitive of one [`Exercise`].
pub struct Viewer {
    exercise: Exercise,
    egg_resolution: usize,
    mesh: Mesh,
    shader: ShaderProgram,
    textures: TextureSet<Texture>,
    camera: Camera,
    rotation: DragRotation,
    viewport: Viewport,
    show_front_wall: bool,
}

fn build_geometry(
    exercise: Exercise,
    egg_resolution: usize,
    show_front_wall: bool,
) -> Result<MeshData> {
    Ok(match exercise.shape() {
        Shape::Quad => geometry::quad(),
        Shape::Pyramid => geometry::pyramid(show_front_wall),
        Shape::Egg => geometry::egg(egg_resolution)?,
    })
}

impl Viewer {
    /// Loads the textures, builds the mesh and sets up GL state.
    pub fn new(
        gl: &Arc<glow::Context>,
        settings: &Settings,
        drawable: (u32, u32),
    ) -> Result<Self> {
        let exercise = settings.exercise;

        let shader = shader_program!(textured, gl, "..").map_err(Error::Platform)?;

        let data = build_geometry(exercise, settings.egg_resolution, true)?;
        let mesh = Mesh::new(gl, &data.vertices, &data.indices, glow::TRIANGLES)
            .map_err(Error::Platform)?;
        log::debug!(
            "Uploaded {} mesh: {} vertices, {} indices",
            exercise.name(),
            data.vertices.len(),
            mesh.index_count()
        );

        log::info!("Loading textures...");
        let images = texture::load_all(&settings.textures, exercise.missing_texture())?;
        let mut uploaded = Vec::with_capacity(images.len());
        for (path, image) in &images {
            let tex = Texture::new(gl, image).map_err(Error::Platform)?;
            log::debug!("Uploaded {} ({}x{})", path.display(), tex.width(), tex.height());
            uploaded.push(tex);
        }
        let textures = TextureSet::new(uploaded);

        if textures.is_empty() {
            log::warn!("No textures could be loaded, the surface will be drawn black.");
        } else {
            log::info!("Loaded {} texture(s).", textures.len());
        }
        let mut controls = vec!["left mouse drag - rotate"];
        if exercise.front_wall_toggle() {
            controls.push("[H] - toggle front wall");
        }
        if exercise.texture_cycling() {
            controls.push("[T] - next texture");
        }
        controls.push("[Esc] - quit");
        log::info!("Controls: {}", controls.join(", "));

        unsafe {
            gl.enable(glow::DEPTH_TEST);
            gl.enable(glow::CULL_FACE);
            gl.front_face(glow::CCW);
            gl.cull_face(match exercise.cull_face() {
                CullFace::Back => glow::BACK,
                CullFace::Front => glow::FRONT,
            });
            gl.clear_color(0.0, 0.0, 0.0, 1.0);
        }

        let mut viewer = Self {
            exercise,
            egg_resolution: settings.egg_resolution,
            mesh,
            shader,
            textures,
            camera: Camera::at_distance(exercise.camera_distance()),
            rotation: DragRotation::new(exercise.pitch_enabled()),
            viewport: exercise.viewport_policy().viewport(drawable.0, drawable.1),
            show_front_wall: true,
        };
        viewer.resize(gl, drawable.0, drawable.1);
        Ok(viewer)
    }

    fn key_pressed(&mut self, key: Keycode) -> SceneSwitch {
        if key == Keycode::Escape {
            return SceneSwitch::Quit;
        }
        if key == Keycode::H && self.exercise.front_wall_toggle() {
            if let Err(e) = self.toggle_front_wall() {
                log::error!("Cannot rebuild mesh: {e}");
            }
        } else if key == Keycode::T && self.exercise.texture_cycling() {
            if let Some(index) = self.textures.cycle() {
                log::info!("Switched to texture index {index}");
            }
        }
        SceneSwitch::None
    }

    fn toggle_front_wall(&mut self) -> Result<()> {
        self.show_front_wall = !self.show_front_wall;
        let data = build_geometry(self.exercise, self.egg_resolution, self.show_front_wall)?;
        self.mesh.update(&data.vertices, &data.indices);
        log::info!("Front wall visible: {}", self.show_front_wall);
        Ok(())
    }
}

impl Scene for Viewer {
    fn handle_event(&mut self, event: &Event) -> SceneSwitch {
        match event {
            Event::Quit { .. } => return SceneSwitch::Quit,
            Event::KeyDown {
                keycode: Some(key),
                repeat: false,
                ..
            } => return self.key_pressed(*key),
            Event::MouseButtonDown { mouse_btn, .. } => {
                self.rotation.button(*mouse_btn == MouseButton::Left, true);
            }
            Event::MouseButtonUp { mouse_btn, .. } => {
                self.rotation.button(*mouse_btn == MouseButton::Left, false);
            }
            Event::MouseMotion { x, y, .. } => {
                self.rotation.cursor_moved(*x as f32, *y as f32);
            }
            _ => {}
        }
        SceneSwitch::None
    }

    fn resize(&mut self, gl: &Arc<glow::Context>, width: u32, height: u32) {
        self.viewport = self.exercise.viewport_policy().viewport(width, height);
        self.rotation.set_framebuffer_width(width);
        unsafe {
            gl.viewport(
                self.viewport.x,
                self.viewport.y,
                self.viewport.width,
                self.viewport.height,
            );
        }
        log::debug!("Viewport set to {:?}", self.viewport);
    }

    fn update(&mut self) {
        self.rotation.advance();
    }

    fn render(&mut self, gl: &Arc<glow::Context>) {
        unsafe {
            gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
        }

        self.shader.use_program();
        self.shader
            .set_uniform("u_projection", self.camera.projection(self.viewport.aspect));
        self.shader.set_uniform("u_view", self.camera.view());
        self.shader.set_uniform("u_model", self.rotation.model());
        self.shader.set_uniform("u_texture", TEXTURE_UNIT as i32);

        match self.textures.current() {
            Some(texture) => texture.bind(TEXTURE_UNIT),
            None => Texture::unbind(gl, TEXTURE_UNIT),
        }
        self.mesh.draw();
    }
}
