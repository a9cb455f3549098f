//! Screen-rectangle line clipping.
//!
//! Projected segments can land arbitrarily far outside the drawable area
//! (points just past the clip plane scale by `distance / depth`). Before
//! rasterizing, a line is cut to the rectangle against its four edges, each
//! treated as a plane with an inward normal.

use crate::math::vec2::Vec2;

/// Axis-aligned rectangle, `min` inclusive, `max` inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    pub min: Vec2,
    pub max: Vec2,
}

impl ScreenRect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Rectangle covering pixel centers of a `width` x `height` buffer.
    pub fn from_size(width: u32, height: u32) -> Self {
        Self::new(
            Vec2::ZERO,
            Vec2::new(
                f64::from(width.saturating_sub(1)),
                f64::from(height.saturating_sub(1)),
            ),
        )
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Returns the part of the line `a`–`b` inside the rectangle.
    pub fn clip_line(&self, a: Vec2, b: Vec2) -> Option<(Vec2, Vec2)> {
        if !a.is_finite() || !b.is_finite() {
            return None;
        }

        let delta = b - a;
        let mut t_enter = 0.0_f64;
        let mut t_exit = 1.0_f64;

        // (rate of approach along the edge normal, signed distance of `a`)
        let edges = [
            (delta.x, a.x - self.min.x),
            (-delta.x, self.max.x - a.x),
            (delta.y, a.y - self.min.y),
            (-delta.y, self.max.y - a.y),
        ];

        for (rate, distance) in edges {
            if rate == 0.0 {
                // parallel to this edge
                if distance < 0.0 {
                    return None;
                }
                continue;
            }

            let t = -distance / rate;
            if rate > 0.0 {
                // moving inward: entering
                t_enter = t_enter.max(t);
            } else {
                t_exit = t_exit.min(t);
            }

            if t_enter > t_exit {
                return None;
            }
        }

        Some((a + delta * t_enter, a + delta * t_exit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn rect() -> ScreenRect {
        ScreenRect::new(Vec2::new(0.0, 0.0), Vec2::new(100.0, 50.0))
    }

    #[test]
    fn line_inside_is_unchanged() {
        let a = Vec2::new(10.0, 10.0);
        let b = Vec2::new(90.0, 40.0);
        assert_eq!(rect().clip_line(a, b), Some((a, b)));
    }

    #[test]
    fn line_outside_is_rejected() {
        assert_eq!(
            rect().clip_line(Vec2::new(-10.0, 60.0), Vec2::new(200.0, 70.0)),
            None
        );
        assert_eq!(
            rect().clip_line(Vec2::new(-10.0, -10.0), Vec2::new(-5.0, 100.0)),
            None
        );
    }

    #[test]
    fn long_line_is_cut_at_both_edges() {
        let (a, b) = rect()
            .clip_line(Vec2::new(-1e9, 25.0), Vec2::new(1e9, 25.0))
            .unwrap();
        assert_relative_eq!(a, Vec2::new(0.0, 25.0), epsilon = 1e-6);
        assert_relative_eq!(b, Vec2::new(100.0, 25.0), epsilon = 1e-6);
    }

    #[test]
    fn diagonal_is_cut_at_corner_edges() {
        let (a, b) = rect()
            .clip_line(Vec2::new(-10.0, -10.0), Vec2::new(60.0, 60.0))
            .unwrap();
        assert_relative_eq!(a, Vec2::new(0.0, 0.0), epsilon = 1e-9);
        assert_relative_eq!(b, Vec2::new(50.0, 50.0), epsilon = 1e-9);
    }

    #[test]
    fn non_finite_endpoints_are_rejected() {
        assert_eq!(
            rect().clip_line(Vec2::new(f64::NAN, 0.0), Vec2::new(10.0, 10.0)),
            None
        );
        assert_eq!(
            rect().clip_line(Vec2::new(0.0, 0.0), Vec2::new(f64::INFINITY, 10.0)),
            None
        );
    }

    #[test]
    fn from_size_covers_last_pixel() {
        let rect = ScreenRect::from_size(800, 600);
        assert!(rect.contains(Vec2::new(799.0, 599.0)));
        assert!(!rect.contains(Vec2::new(800.0, 0.0)));
    }
}
