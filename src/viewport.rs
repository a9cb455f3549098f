//! Mapping from picture-plane coordinates to pixels.
//!
//! [`PlotBounds`] is the rectangle of plot space that should fill the
//! output; [`Viewport`] pairs it with an output size and performs the linear
//! map. Plot `y` grows upward, pixel `y` grows downward.

use crate::error::{ProjectionError, Result};
use crate::math::vec2::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotBounds {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

impl PlotBounds {
    pub fn new(left: f64, right: f64, bottom: f64, top: f64) -> Self {
        Self {
            left,
            right,
            bottom,
            top,
        }
    }

    /// Bounds centered on the origin, `half_width` wide on each side, with
    /// the height following `aspect_ratio` (width / height).
    pub fn centered(half_width: f64, aspect_ratio: f64) -> Self {
        let half_height = half_width / aspect_ratio;
        Self::new(-half_width, half_width, -half_height, half_height)
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }
}

impl Default for PlotBounds {
    fn default() -> Self {
        Self::centered(10.0, 4.0 / 3.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    bounds: PlotBounds,
    width: u32,
    height: u32,
    dx: f64,
    dy: f64,
    origin: Vec2,
}

impl Viewport {
    /// # Errors
    /// [`ProjectionError::EmptyBounds`] if the bounds have no area or the
    /// output has no pixels.
    pub fn new(bounds: PlotBounds, width: u32, height: u32) -> Result<Self> {
        let valid = bounds.width() > 0.0
            && bounds.height() > 0.0
            && bounds.width().is_finite()
            && bounds.height().is_finite();
        if !valid || width == 0 || height == 0 {
            return Err(ProjectionError::EmptyBounds);
        }

        let dx = f64::from(width) / bounds.width();
        let dy = f64::from(height) / bounds.height();

        Ok(Self {
            bounds,
            width,
            height,
            dx,
            dy,
            origin: Vec2::new(-dx * bounds.left, dy * bounds.top),
        })
    }

    /// Centered bounds matching the output's aspect ratio.
    pub fn centered(half_width: f64, width: u32, height: u32) -> Result<Self> {
        let aspect_ratio = f64::from(width) / f64::from(height.max(1));
        Self::new(PlotBounds::centered(half_width, aspect_ratio), width, height)
    }

    pub fn bounds(&self) -> PlotBounds {
        self.bounds
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixels per plot unit, horizontally and vertically.
    pub fn scale(&self) -> Vec2 {
        Vec2::new(self.dx, self.dy)
    }

    pub fn to_pixel(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            point.x * self.dx + self.origin.x,
            self.origin.y - point.y * self.dy,
        )
    }

    pub fn to_plot(&self, pixel: Vec2) -> Vec2 {
        Vec2::new(
            (pixel.x - self.origin.x) / self.dx,
            (self.origin.y - pixel.y) / self.dy,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn corners_map_to_output_corners() {
        let viewport = Viewport::new(PlotBounds::new(-7.0, 10.0, -2.0, 2.0), 340, 80).unwrap();
        assert_relative_eq!(viewport.to_pixel(Vec2::new(-7.0, 2.0)), Vec2::ZERO);
        assert_relative_eq!(
            viewport.to_pixel(Vec2::new(10.0, -2.0)),
            Vec2::new(340.0, 80.0),
            epsilon = 1e-9
        );
    }

    #[test]
    fn origin_lands_where_the_axes_cross() {
        let viewport = Viewport::new(PlotBounds::new(-7.0, 10.0, -2.0, 2.0), 340, 80).unwrap();
        // 20 px per unit horizontally, 20 px per unit vertically
        assert_relative_eq!(viewport.to_pixel(Vec2::ZERO), Vec2::new(140.0, 40.0));
        assert_relative_eq!(viewport.scale(), Vec2::new(20.0, 20.0));
    }

    #[test]
    fn to_plot_inverts_to_pixel() {
        let viewport = Viewport::centered(10.0, 800, 600).unwrap();
        let point = Vec2::new(3.25, -4.5);
        assert_relative_eq!(
            viewport.to_plot(viewport.to_pixel(point)),
            point,
            epsilon = 1e-12
        );
    }

    #[test]
    fn centered_bounds_keep_aspect_ratio() {
        let viewport = Viewport::centered(10.0, 800, 600).unwrap();
        let scale = viewport.scale();
        assert_relative_eq!(scale.x, scale.y, epsilon = 1e-12);
        assert_relative_eq!(viewport.to_pixel(Vec2::ZERO), Vec2::new(400.0, 300.0));
    }

    #[test]
    fn empty_bounds_are_rejected() {
        assert_eq!(
            Viewport::new(PlotBounds::new(1.0, 1.0, 0.0, 1.0), 10, 10),
            Err(ProjectionError::EmptyBounds)
        );
        assert_eq!(
            Viewport::new(PlotBounds::new(0.0, 1.0, 2.0, 1.0), 10, 10),
            Err(ProjectionError::EmptyBounds)
        );
        assert_eq!(
            Viewport::new(PlotBounds::default(), 0, 10),
            Err(ProjectionError::EmptyBounds)
        );
    }
}
