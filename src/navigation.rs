//! Viewer navigation.
//!
//! # Coordinate System
//!
//! Right-handed, Z up. The ground grid lies on `z = 0`.
//!
//! # Orientation
//!
//! The view is stored as a heading and a tilt, and the picture-plane axes
//! are derived from them whenever a [`Camera`] is needed:
//!
//! - **Heading**: rotation of the horizontal axis around Z
//! - **Tilt**: how far the vertical axis leans away from Z (positive = look down)
//!
//! ```text
//! x_axis = (cos h, sin h, 0)
//! y_axis = (sin t sin h, -sin t cos h, cos t)
//! ```
//!
//! which puts the plane normal at `(sin h cos t, -cos h cos t, -sin t)`.

use std::f64::consts::FRAC_PI_3;

use crate::camera::Camera;
use crate::error::Result;
use crate::math::vec3::Vec3;
use crate::window::InputState;

/// User-facing camera parameters.
///
/// Every input event produces a new `ViewState`; the renderer then builds a
/// fresh [`Camera`] from it and redraws the whole scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub eye: Vec3,
    pub heading: f64,
    pub tilt: f64,
    pub distance: f64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            eye: Vec3::new(15.0, 10.0, 5.0),
            heading: -FRAC_PI_3,
            tilt: 0.1,
            distance: 15.0,
        }
    }
}

impl ViewState {
    pub fn x_axis(&self) -> Vec3 {
        let (sin_h, cos_h) = self.heading.sin_cos();
        Vec3::new(cos_h, sin_h, 0.0)
    }

    pub fn y_axis(&self) -> Vec3 {
        let (sin_h, cos_h) = self.heading.sin_cos();
        let (sin_t, cos_t) = self.tilt.sin_cos();
        Vec3::new(sin_t * sin_h, -sin_t * cos_h, cos_t)
    }

    /// Horizontal direction the viewer is facing.
    pub fn forward(&self) -> Vec3 {
        let (sin_h, cos_h) = self.heading.sin_cos();
        Vec3::new(sin_h, -cos_h, 0.0)
    }

    pub fn camera(&self) -> Result<Camera> {
        Camera::new(self.eye, self.distance, self.x_axis(), self.y_axis())
    }

    // =========================================================================
    // Movement
    // =========================================================================

    pub fn moved_forward(&self, amount: f64) -> Self {
        Self {
            eye: self.eye + self.forward() * amount,
            ..*self
        }
    }

    pub fn moved_right(&self, amount: f64) -> Self {
        Self {
            eye: self.eye + self.x_axis() * amount,
            ..*self
        }
    }

    pub fn raised(&self, amount: f64) -> Self {
        Self {
            eye: self.eye + Vec3::Z * amount,
            ..*self
        }
    }

    pub fn turned(&self, delta: f64) -> Self {
        Self {
            heading: (self.heading + delta).rem_euclid(std::f64::consts::TAU),
            ..*self
        }
    }

    pub fn zoomed(&self, distance: f64) -> Self {
        Self { distance, ..*self }
    }
}

// =============================================================================
// Camera Controller
// =============================================================================

/// Speeds and limits for mapping input to view changes.
#[derive(Debug, Clone)]
pub struct NavigationConfig {
    /// Eye movement per frame while an arrow key is held, in world units.
    pub move_speed: f64,
    /// Heading change per pixel of horizontal drag, in radians.
    pub look_sensitivity: f64,
    /// Eye height change per pixel of vertical drag, in world units.
    pub elevation_per_pixel: f64,
    /// Distance multiplier per wheel notch.
    pub zoom_step: f64,
    pub min_distance: f64,
    pub max_distance: f64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            move_speed: 0.5,
            look_sensitivity: 0.005,
            elevation_per_pixel: 0.05,
            zoom_step: 1.1,
            min_distance: 1.0,
            max_distance: 500.0,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CameraController {
    pub config: NavigationConfig,
}

impl CameraController {
    pub fn new(config: NavigationConfig) -> Self {
        Self { config }
    }

    /// Applies one frame of input to `view`.
    ///
    /// # Input Mapping
    /// - Up/Down: move along the horizontal facing direction
    /// - Left/Right: strafe along the picture plane's x axis
    /// - Mouse drag: x turns the heading, y raises or lowers the eye
    /// - Wheel: scroll up pushes the picture plane out (zoom in)
    pub fn update(&self, view: &ViewState, input: &InputState) -> ViewState {
        let mut next = *view;

        if input.forward {
            next = next.moved_forward(self.config.move_speed);
        }
        if input.back {
            next = next.moved_forward(-self.config.move_speed);
        }
        if input.right {
            next = next.moved_right(self.config.move_speed);
        }
        if input.left {
            next = next.moved_right(-self.config.move_speed);
        }

        let (dx, dy) = input.drag_delta;
        if dx != 0 || dy != 0 {
            next = next
                .turned(f64::from(dx) * self.config.look_sensitivity)
                .raised(f64::from(dy) * self.config.elevation_per_pixel);
        }

        if input.wheel != 0 {
            let distance = next.distance * self.config.zoom_step.powi(input.wheel);
            next = next.zoomed(distance.clamp(self.config.min_distance, self.config.max_distance));
        }

        next
    }
}
