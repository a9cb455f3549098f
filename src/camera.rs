//! Planar perspective camera.
//!
//! # Model
//!
//! A camera is an eye point plus two axes spanning the picture plane:
//! - `x_axis`, `y_axis`: unit vectors, the picture plane's horizontal and
//!   vertical directions
//! - `plane_normal`: cross product of the *raw* axes, not renormalised
//! - `distance`: how far the picture plane sits from the eye (zoom)
//!
//! The visible half-space is every point `p` with `(p - eye) · plane_normal > 0`.
//!
//! A [`Camera`] is immutable. Pan, turn and zoom build a new one through
//! [`Camera::update_parameters`], so the derived fields always belong to the
//! same set of axes.

use tracing::debug;

use crate::error::{ProjectionError, Result};
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    eye: Vec3,
    distance: f64,
    x_axis: Vec3,
    y_axis: Vec3,
    plane_normal: Vec3,
}

impl Camera {
    /// Builds a camera from an eye point, zoom distance and two raw
    /// (not necessarily unit) picture-plane axes.
    ///
    /// # Errors
    /// - [`ProjectionError::DegenerateVector`] if either axis has zero length.
    /// - [`ProjectionError::DegenerateCamera`] if the axes are parallel.
    pub fn new(eye: Vec3, distance: f64, x_axis: Vec3, y_axis: Vec3) -> Result<Self> {
        let unit_x = x_axis.unit()?;
        let unit_y = y_axis.unit()?;
        let plane_normal = x_axis.cross(y_axis);

        if plane_normal == Vec3::ZERO {
            return Err(ProjectionError::DegenerateCamera);
        }

        debug!(?eye, distance, ?plane_normal, "camera rebuilt");

        Ok(Self {
            eye,
            distance,
            x_axis: unit_x,
            y_axis: unit_y,
            plane_normal,
        })
    }

    /// Returns a camera with every parameter replaced.
    ///
    /// `self` is left untouched; on error the caller keeps drawing with it.
    pub fn update_parameters(
        &self,
        eye: Vec3,
        distance: f64,
        x_axis: Vec3,
        y_axis: Vec3,
    ) -> Result<Self> {
        Self::new(eye, distance, x_axis, y_axis)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn x_axis(&self) -> Vec3 {
        self.x_axis
    }

    pub fn y_axis(&self) -> Vec3 {
        self.y_axis
    }

    pub fn plane_normal(&self) -> Vec3 {
        self.plane_normal
    }

    /// Signed offset of `point` from the eye plane, along the plane normal.
    ///
    /// Not a true distance: it is scaled by the length of the normal.
    pub fn depth(&self, point: Vec3) -> f64 {
        point.subtract(self.eye).dot(self.plane_normal)
    }

    pub fn in_front_of_eye(&self, point: Vec3) -> bool {
        self.depth(point) > 0.0
    }

    // =========================================================================
    // Projection
    // =========================================================================

    /// Projects a world point onto the picture plane.
    ///
    /// `λ = distance / ((p - eye) · P)` and the result is
    /// `(λ (p - eye)·X, λ (p - eye)·Y)`.
    ///
    /// Points behind the eye still project (mirrored); use
    /// [`in_front_of_eye`](Self::in_front_of_eye) or the clipper to exclude
    /// them.
    ///
    /// # Errors
    /// [`ProjectionError::PointOnEyePlane`] when the point lies in the plane
    /// through the eye.
    pub fn projected_coords(&self, point: Vec3) -> Result<Vec2> {
        let offset = point.subtract(self.eye);
        let depth = offset.dot(self.plane_normal);
        if depth == 0.0 {
            return Err(ProjectionError::PointOnEyePlane);
        }

        let lambda = self.distance / depth;
        Ok(Vec2::new(
            lambda * offset.dot(self.x_axis),
            lambda * offset.dot(self.y_axis),
        ))
    }
}

/// Builds a [`Camera`]; see [`Camera::new`].
pub fn make_camera(eye: Vec3, distance: f64, x_axis: Vec3, y_axis: Vec3) -> Result<Camera> {
    Camera::new(eye, distance, x_axis, y_axis)
}

/// One-shot projection of `point` through a camera built from the given
/// parameters.
pub fn project(eye: Vec3, distance: f64, x_axis: Vec3, y_axis: Vec3, point: Vec3) -> Result<Vec2> {
    Camera::new(eye, distance, x_axis, y_axis)?.projected_coords(point)
}
