//! Drag-to-rotate view state, camera and viewport maths.

use glam::{Mat4, Vec2, Vec3};

/// How the drawable area is mapped to the GL viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportPolicy {
    /// Keep a square aspect and centre the largest square that fits.
    LetterboxSquare,
    /// Use the whole drawable area and follow its aspect ratio.
    Stretch,
}

/// A viewport rectangle plus the aspect ratio used for the projection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub aspect: f32,
}

impl ViewportPolicy {
    /// Computes the viewport for a drawable of `width × height` pixels.
    pub fn viewport(self, width: u32, height: u32) -> Viewport {
        match self {
            ViewportPolicy::LetterboxSquare => {
                let (w, h) = (width as i32, height as i32);
                if w <= h {
                    Viewport { x: 0, y: (h - w) / 2, width: w, height: w, aspect: 1.0 }
                } else {
                    Viewport { x: (w - h) / 2, y: 0, width: h, height: h, aspect: 1.0 }
                }
            }
            ViewportPolicy::Stretch => {
                let (w, h) = (width.max(1), height.max(1));
                Viewport {
                    x: 0,
                    y: 0,
                    width: w as i32,
                    height: h as i32,
                    aspect: w as f32 / h as f32,
                }
            }
        }
    }
}

/// Perspective camera looking at the origin from a point on the +Z axis.
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub fov_y_deg: f32,
    pub z_near: f32,
    pub z_far: f32,
}

impl Camera {
    pub fn at_distance(distance: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, distance),
            fov_y_deg: 70.0,
            z_near: 0.1,
            z_far: 300.0,
        }
    }

    #[inline]
    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, Vec3::ZERO, Vec3::Y)
    }

    /// OpenGL-style projection (clip z in [-1, 1]).
    #[inline]
    pub fn projection(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh_gl(
            self.fov_y_deg.to_radians(),
            aspect.max(1e-6),
            self.z_near,
            self.z_far,
        )
    }
}

/// Rotation driven by dragging with the left mouse button.
///
/// Angles are in degrees. The cursor delta accumulates between frames and is
/// consumed by [`DragRotation::advance`].
#[derive(Clone, Debug)]
pub struct DragRotation {
    pub theta: f32,
    pub phi: f32,
    pitch_enabled: bool,
    pix2angle: f32,
    left_pressed: bool,
    last_cursor: Vec2,
    delta: Vec2,
}

impl DragRotation {
    pub fn new(pitch_enabled: bool) -> Self {
        Self {
            theta: 0.0,
            phi: 0.0,
            pitch_enabled,
            pix2angle: 1.0,
            left_pressed: false,
            last_cursor: Vec2::ZERO,
            delta: Vec2::ZERO,
        }
    }

    /// Degrees of rotation per pixel of drag.
    pub fn pix2angle(&self) -> f32 {
        self.pix2angle
    }

    pub fn is_dragging(&self) -> bool {
        self.left_pressed
    }

    /// A full drag across the framebuffer width turns the model once.
    pub fn set_framebuffer_width(&mut self, width: u32) {
        self.pix2angle = 360.0 / width.max(1) as f32;
    }

    pub fn cursor_moved(&mut self, x: f32, y: f32) {
        let pos = Vec2::new(x, y);
        self.delta += pos - self.last_cursor;
        self.last_cursor = pos;
    }

    /// Any button event other than a left press ends the drag.
    pub fn button(&mut self, left: bool, pressed: bool) {
        self.left_pressed = left && pressed;
    }

    /// Applies the pending cursor delta, if dragging, and clears it.
    pub fn advance(&mut self) {
        if self.left_pressed {
            self.theta += self.delta.x * self.pix2angle;
            if self.pitch_enabled {
                self.phi += self.delta.y * self.pix2angle;
            }
        }
        self.delta = Vec2::ZERO;
    }

    /// Model matrix: yaw about +Y, then pitch about +X.
    pub fn model(&self) -> Mat4 {
        Mat4::from_rotation_y(self.theta.to_radians()) * Mat4::from_rotation_x(self.phi.to_radians())
    }
}
