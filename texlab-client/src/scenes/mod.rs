//! Module providing the `Scene` trait and the viewer scene.

use std::sync::Arc;

pub enum SceneSwitch {
    None,
    Quit,
}

/// The Scene trait defines the common interface for everything drawn in the window.
pub trait Scene {
    /// Handles an event.
    fn handle_event(&mut self, _event: &sdl2::event::Event) -> SceneSwitch {
        SceneSwitch::None
    }

    /// Reacts to a new drawable size in pixels.
    fn resize(&mut self, gl: &Arc<glow::Context>, width: u32, height: u32);

    /// Advances the scene state by one frame.
    fn update(&mut self) {}

    /// Renders the scene.
    fn render(&mut self, gl: &Arc<glow::Context>);
}

pub mod viewer;
