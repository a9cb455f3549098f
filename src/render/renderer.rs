//! Pixel-buffer rendering.
//!
//! Provides the [`Renderer`] struct which owns the color buffer and implements
//! line drawing, wireframe rendering and PNG export.

use std::path::Path;

use crate::camera::Camera;
use crate::clipper::{ScreenRect, SegmentClipper};
use crate::colors::{self, Color};
use crate::error::LoadError;
use crate::math::vec2::Vec2;
use crate::scene::Wireframe;
use crate::viewport::Viewport;

const MARKER_RADIUS: i32 = 2;

pub struct Renderer {
    color_buffer: Vec<u32>,
    width: u32,
    height: u32,
}

impl Renderer {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width * height) as usize;
        Self {
            color_buffer: vec![colors::BACKGROUND; size],
            width,
            height,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        let size = (width * height) as usize;
        self.color_buffer = vec![colors::BACKGROUND; size];
        self.width = width;
        self.height = height;
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clear(&mut self, color: Color) {
        self.color_buffer.fill(color);
    }

    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            let index = (y as u32 * self.width + x as u32) as usize;
            self.color_buffer[index] = color;
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(self.color_buffer[(y as u32 * self.width + x as u32) as usize])
        } else {
            None
        }
    }

    /// Draws a line between two pixel positions.
    ///
    /// The line is first cut to the buffer rectangle, so endpoints may lie
    /// anywhere, including very far off screen.
    pub fn draw_line(&mut self, a: Vec2, b: Vec2, color: Color) {
        let Some((a, b)) = ScreenRect::from_size(self.width, self.height).clip_line(a, b) else {
            return;
        };
        self.draw_line_bresenham(
            a.x.round() as i32,
            a.y.round() as i32,
            b.x.round() as i32,
            b.y.round() as i32,
            color,
        );
    }

    /// Draws a line between two points using Bresenham's line algorithm.
    ///
    /// For each step along the major axis, an error term decides whether to
    /// also step along the minor axis.
    pub fn draw_line_bresenham(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();

        let x_incr_direction = if x0 < x1 { 1 } else { -1 };
        let y_incr_direction = if y0 < y1 { 1 } else { -1 };

        let mut err = dx - dy;
        let mut x = x0;
        let mut y = y0;

        loop {
            self.set_pixel(x, y, color);

            if x == x1 && y == y1 {
                break;
            }

            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x += x_incr_direction;
            }
            if e2 < dx {
                err += dx;
                y += y_incr_direction;
            }
        }
    }

    /// Small cross centred on `at`, used where a text label would sit.
    pub fn draw_marker(&mut self, at: Vec2, color: Color) {
        let (x, y) = (at.x.round() as i32, at.y.round() as i32);
        for d in -MARKER_RADIUS..=MARKER_RADIUS {
            self.set_pixel(x + d, y, color);
            self.set_pixel(x, y + d, color);
        }
    }

    /// Clears the buffer and draws every visible line of `scene`, then a
    /// marker at each on-screen label anchor. Text is only written by
    /// [`SvgDocument`](crate::render::SvgDocument).
    ///
    /// Returns the number of lines drawn.
    pub fn draw_wireframe(
        &mut self,
        scene: &Wireframe,
        camera: &Camera,
        clipper: &SegmentClipper,
        viewport: &Viewport,
    ) -> usize {
        self.clear(colors::BACKGROUND);

        let mut drawn = 0;
        for (projected, color) in scene.project(camera, clipper) {
            self.draw_line(
                viewport.to_pixel(projected.p1),
                viewport.to_pixel(projected.p2),
                color,
            );
            drawn += 1;
        }

        let screen = ScreenRect::from_size(self.width, self.height);
        for (anchor, _) in scene.project_labels(camera) {
            let at = viewport.to_pixel(anchor);
            if screen.contains(at) {
                self.draw_marker(at, colors::CURVE);
            }
        }
        drawn
    }

    pub fn as_bytes(&self) -> &[u8] {
        // SAFETY: u32 has no padding and a stricter alignment than u8; the
        // byte slice covers exactly the buffer's memory and borrows `self`.
        unsafe {
            std::slice::from_raw_parts(
                self.color_buffer.as_ptr() as *const u8,
                self.color_buffer.len() * 4,
            )
        }
    }

    /// Copies the buffer into an RGBA image.
    pub fn to_image(&self) -> image::RgbaImage {
        image::RgbaImage::from_fn(self.width, self.height, |x, y| {
            let (r, g, b, a) = colors::unpack_color(self.color_buffer[(y * self.width + x) as usize]);
            image::Rgba([r, g, b, a])
        })
    }

    /// Writes the buffer to an image file; the format follows the extension.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), LoadError> {
        self.to_image().save(path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vec3::Vec3;

    const RED: Color = 0xFFFF0000;

    #[test]
    fn horizontal_line_covers_every_pixel() {
        let mut renderer = Renderer::new(10, 10);
        renderer.draw_line_bresenham(1, 5, 8, 5, RED);
        for x in 1..=8 {
            assert_eq!(renderer.pixel(x, 5), Some(RED));
        }
        assert_eq!(renderer.pixel(0, 5), Some(colors::BACKGROUND));
        assert_eq!(renderer.pixel(9, 5), Some(colors::BACKGROUND));
    }

    #[test]
    fn line_reaches_both_endpoints_in_any_direction() {
        let mut renderer = Renderer::new(20, 20);
        renderer.draw_line_bresenham(17, 2, 3, 15, RED);
        assert_eq!(renderer.pixel(17, 2), Some(RED));
        assert_eq!(renderer.pixel(3, 15), Some(RED));
    }

    #[test]
    fn far_off_screen_endpoints_are_clipped() {
        let mut renderer = Renderer::new(10, 10);
        renderer.draw_line(Vec2::new(-1e12, 4.0), Vec2::new(1e12, 4.0), RED);
        for x in 0..10 {
            assert_eq!(renderer.pixel(x, 4), Some(RED));
        }
    }

    #[test]
    fn out_of_bounds_pixels_are_ignored() {
        let mut renderer = Renderer::new(4, 4);
        renderer.set_pixel(-1, 0, RED);
        renderer.set_pixel(4, 0, RED);
        assert!(renderer.as_bytes().chunks(4).all(|px| px == [0xFF; 4]));
        assert_eq!(renderer.pixel(4, 0), None);
    }

    #[test]
    fn wireframe_draws_visible_lines_only() {
        let camera = Camera::new(Vec3::ZERO, 1.0, Vec3::X, Vec3::Y).unwrap();
        let viewport = Viewport::centered(1.0, 100, 100).unwrap();
        let mut scene = Wireframe::new();
        scene
            .add_segment(Vec3::new(-1.0, 0.0, 2.0), Vec3::new(1.0, 0.0, 2.0), RED)
            .add_segment(Vec3::new(-1.0, 0.0, -2.0), Vec3::new(1.0, 0.0, -2.0), RED);

        let mut renderer = Renderer::new(100, 100);
        let drawn = renderer.draw_wireframe(&scene, &camera, &SegmentClipper::default(), &viewport);

        assert_eq!(drawn, 1);
        // projected to x in [-0.5, 0.5] on the horizontal center line
        assert_eq!(renderer.pixel(50, 50), Some(RED));
        assert_eq!(renderer.pixel(10, 50), Some(colors::BACKGROUND));
    }

    #[test]
    fn image_copy_keeps_channels() {
        let mut renderer = Renderer::new(2, 1);
        renderer.set_pixel(1, 0, RED);
        let image = renderer.to_image();
        assert_eq!(image.get_pixel(0, 0).0, [0xFF, 0xFF, 0xFF, 0xFF]);
        assert_eq!(image.get_pixel(1, 0).0, [0xFF, 0x00, 0x00, 0xFF]);
    }

    #[test]
    fn wireframe_marks_visible_label_anchors() {
        let camera = Camera::new(Vec3::ZERO, 1.0, Vec3::X, Vec3::Y).unwrap();
        let viewport = Viewport::centered(1.0, 100, 100).unwrap();
        let mut scene = Wireframe::new();
        scene
            .add_label(Vec3::new(0.0, 0.0, 2.0), "origin")
            .add_label(Vec3::new(-1.0, 0.0, -2.0), "behind");

        let mut renderer = Renderer::new(100, 100);
        let drawn = renderer.draw_wireframe(&scene, &camera, &SegmentClipper::default(), &viewport);

        assert_eq!(drawn, 0);
        assert_eq!(renderer.pixel(50, 50), Some(colors::CURVE));
        assert_eq!(renderer.pixel(52, 50), Some(colors::CURVE));
        assert_eq!(renderer.pixel(50, 48), Some(colors::CURVE));
        assert_eq!(renderer.pixel(53, 50), Some(colors::BACKGROUND));
        assert_eq!(renderer.pixel(51, 51), Some(colors::BACKGROUND));
        // the label behind the eye would mirror to (75, 50)
        assert_eq!(renderer.pixel(75, 50), Some(colors::BACKGROUND));
    }
}
