//! Wireframe scenes.
//!
//! A [`Wireframe`] is nothing more than a flat list of coloured world-space
//! segments plus a few text labels. Builders cover what the viewer draws:
//! a ground grid, coordinate axes with numeric ticks, sampled parametric
//! curves, and the edges of polygon meshes read from OBJ files.

use std::collections::HashSet;
use std::io::BufRead;
use std::path::Path;

use tracing::debug;

use crate::camera::Camera;
use crate::clipper::{ProjectedSegment, Segment, SegmentClipper};
use crate::colors::{self, Color};
use crate::error::LoadError;
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;

/// Arrowhead length as a fraction of the axis half-length.
const ARROWHEAD_RATIO: f64 = 0.05;

/// Spacing parameters the grid and tick builders can step through.
fn valid_spacing(extent: f64, step: f64) -> bool {
    extent.is_finite() && extent >= 0.0 && step.is_finite() && step > 0.0
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub segment: Segment,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub position: Vec3,
    pub text: String,
}

#[derive(Debug, Clone, Default)]
pub struct Wireframe {
    lines: Vec<Line>,
    labels: Vec<Label>,
}

impl Wireframe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn add_segment(&mut self, start: Vec3, end: Vec3, color: Color) -> &mut Self {
        self.lines.push(Line {
            segment: Segment::new(start, end),
            color,
        });
        self
    }

    /// Joins consecutive points. Fewer than two points adds nothing.
    pub fn add_polyline(&mut self, points: &[Vec3], color: Color) -> &mut Self {
        for pair in points.windows(2) {
            self.add_segment(pair[0], pair[1], color);
        }
        self
    }

    pub fn add_label(&mut self, position: Vec3, text: impl Into<String>) -> &mut Self {
        self.labels.push(Label {
            position,
            text: text.into(),
        });
        self
    }

    pub fn extend(&mut self, other: Wireframe) -> &mut Self {
        self.lines.extend(other.lines);
        self.labels.extend(other.labels);
        self
    }

    // =========================================================================
    // Builders
    // =========================================================================

    /// Square grid on the `z = 0` plane spanning `[-extent, extent]` in x
    /// and y, one line every `step` units. A non-positive or non-finite
    /// step or extent gives an empty grid.
    pub fn grid(extent: f64, step: f64, color: Color) -> Self {
        let mut grid = Self::new();
        if !valid_spacing(extent, step) {
            return grid;
        }

        // integer count avoids drift from repeated float addition
        let count = (2.0 * extent / step).floor() as i64;
        for i in 0..=count {
            let c = -extent + i as f64 * step;
            grid.add_segment(
                Vec3::new(c, -extent, 0.0),
                Vec3::new(c, extent, 0.0),
                color,
            );
            grid.add_segment(
                Vec3::new(-extent, c, 0.0),
                Vec3::new(extent, c, 0.0),
                color,
            );
        }
        grid
    }

    /// The three coordinate axes from `-length` to `length`, with an
    /// arrowhead and a name label at each positive end.
    pub fn axes(length: f64) -> Self {
        let mut axes = Self::new();
        let head = length * ARROWHEAD_RATIO;
        for (direction, across, color, name) in [
            (Vec3::X, Vec3::Y, colors::AXIS_X, "x"),
            (Vec3::Y, Vec3::X, colors::AXIS_Y, "y"),
            (Vec3::Z, Vec3::X, colors::AXIS_Z, "z"),
        ] {
            let tip = direction * length;
            let base = tip - direction * head;
            axes
                .add_segment(direction * -length, tip, color)
                .add_segment(base + across * (head / 2.0), tip, color)
                .add_segment(base - across * (head / 2.0), tip, color)
                .add_label(tip, name);
        }
        axes
    }

    /// Numeric labels along the three axes at every multiple of `step`
    /// within `[-extent, extent]`. The origin is labelled once, as `0`.
    pub fn tick_labels(extent: f64, step: f64) -> Self {
        let mut ticks = Self::new();
        if !valid_spacing(extent, step) {
            return ticks;
        }

        ticks.add_label(Vec3::ZERO, "0");
        let count = (extent / step).floor() as i64;
        for direction in [Vec3::X, Vec3::Y, Vec3::Z] {
            for i in (-count..=count).filter(|&i| i != 0) {
                // rounded so 3 * 0.1 reads as 0.3
                let value = (i as f64 * step * 1e9).round() / 1e9;
                ticks.add_label(direction * value, format!("{value}"));
            }
        }
        ticks
    }

    /// Samples `curve` at `samples + 1` evenly spaced parameters from `t0`
    /// to `t1` inclusive and joins them.
    pub fn parametric<F>(curve: F, t0: f64, t1: f64, samples: usize, color: Color) -> Self
    where
        F: Fn(f64) -> Vec3,
    {
        let mut wireframe = Self::new();
        if samples == 0 {
            return wireframe;
        }

        let step = (t1 - t0) / samples as f64;
        let points: Vec<Vec3> = (0..=samples)
            .map(|i| curve(t0 + i as f64 * step))
            .collect();
        wireframe.add_polyline(&points, color);
        wireframe
    }

    /// Every polygon edge of every object in an OBJ file.
    pub fn from_obj<P: AsRef<Path>>(path: P, color: Color) -> Result<Self, LoadError> {
        let (models, _materials) = tobj::load_obj(path.as_ref(), &tobj::LoadOptions::default())?;
        debug!(path = %path.as_ref().display(), models = models.len(), "loaded OBJ");
        Ok(Self::from_models(&models, color))
    }

    /// Like [`from_obj`](Self::from_obj), reading from a buffer. Material
    /// libraries are ignored.
    pub fn from_obj_reader<R: BufRead>(reader: &mut R, color: Color) -> Result<Self, LoadError> {
        let (models, _materials) =
            tobj::load_obj_buf(reader, &tobj::LoadOptions::default(), |_| {
                Err(tobj::LoadError::GenericFailure)
            })?;
        Ok(Self::from_models(&models, color))
    }

    fn from_models(models: &[tobj::Model], color: Color) -> Self {
        let mut wireframe = Self::new();

        for model in models {
            let mesh = &model.mesh;
            let vertex = |index: u32| {
                let i = index as usize * 3;
                Vec3::new(
                    f64::from(mesh.positions[i]),
                    f64::from(mesh.positions[i + 1]),
                    f64::from(mesh.positions[i + 2]),
                )
            };

            // face_arities is empty when every face is a triangle
            let arities: Vec<usize> = if mesh.face_arities.is_empty() {
                vec![3; mesh.indices.len() / 3]
            } else {
                mesh.face_arities.iter().map(|&a| a as usize).collect()
            };

            let mut seen = HashSet::new();
            let mut offset = 0;
            for arity in arities {
                let Some(face) = mesh.indices.get(offset..offset + arity) else {
                    break;
                };
                offset += arity;

                for (k, &a) in face.iter().enumerate() {
                    let b = face[(k + 1) % face.len()];
                    if a == b || !seen.insert((a.min(b), a.max(b))) {
                        continue;
                    }
                    wireframe.add_segment(vertex(a), vertex(b), color);
                }
            }
        }

        wireframe
    }

    // =========================================================================
    // Projection
    // =========================================================================

    /// Clips and projects every line; hidden lines are left out.
    pub fn project<'a>(
        &'a self,
        camera: &'a Camera,
        clipper: &'a SegmentClipper,
    ) -> impl Iterator<Item = (ProjectedSegment, Color)> + 'a {
        self.lines.iter().filter_map(move |line| {
            clipper
                .clip_and_project(camera, line.segment.start, line.segment.end)
                .map(|projected| (projected, line.color))
        })
    }

    /// Projected label anchors for labels in front of the eye.
    pub fn project_labels<'a>(
        &'a self,
        camera: &'a Camera,
    ) -> impl Iterator<Item = (Vec2, &'a str)> + 'a {
        self.labels.iter().filter_map(move |label| {
            if !camera.in_front_of_eye(label.position) {
                return None;
            }
            camera
                .projected_coords(label.position)
                .ok()
                .map(|point| (point, label.text.as_str()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::io::Cursor;

    #[test]
    fn grid_has_two_lines_per_step() {
        let grid = Wireframe::grid(5.0, 1.0, colors::GRID);
        assert_eq!(grid.len(), 22);
        assert!(grid
            .lines()
            .iter()
            .all(|line| line.segment.start.z == 0.0 && line.segment.end.z == 0.0));
    }

    #[test]
    fn grid_with_bad_step_is_empty() {
        assert!(Wireframe::grid(5.0, 0.0, colors::GRID).is_empty());
        assert!(Wireframe::grid(5.0, -1.0, colors::GRID).is_empty());
    }

    #[test]
    fn grid_with_non_finite_spacing_is_empty() {
        assert!(Wireframe::grid(f64::NAN, 1.0, colors::GRID).is_empty());
        assert!(Wireframe::grid(f64::INFINITY, 1.0, colors::GRID).is_empty());
        assert!(Wireframe::grid(5.0, f64::NAN, colors::GRID).is_empty());
        assert!(Wireframe::grid(5.0, f64::INFINITY, colors::GRID).is_empty());
    }

    #[test]
    fn axes_are_labelled() {
        let axes = Wireframe::axes(4.0);
        // one axis line and two arrowhead strokes per axis
        assert_eq!(axes.len(), 9);
        let names: Vec<&str> = axes.labels().iter().map(|l| l.text.as_str()).collect();
        assert_eq!(names, ["x", "y", "z"]);
        assert_eq!(axes.labels()[2].position, Vec3::new(0.0, 0.0, 4.0));
    }

    #[test]
    fn arrowheads_meet_at_the_positive_tips() {
        let axes = Wireframe::axes(10.0);
        let tip = Vec3::new(10.0, 0.0, 0.0);
        let strokes: Vec<&Segment> = axes
            .lines()
            .iter()
            .map(|line| &line.segment)
            .filter(|segment| segment.end == tip)
            .collect();
        assert_eq!(strokes.len(), 3);
        assert_relative_eq!(strokes[1].start, Vec3::new(9.5, 0.25, 0.0));
        assert_relative_eq!(strokes[2].start, Vec3::new(9.5, -0.25, 0.0));
    }

    #[test]
    fn tick_labels_step_along_each_axis() {
        let ticks = Wireframe::tick_labels(2.5, 1.0);
        // origin plus -2, -1, 1, 2 on each of three axes
        assert_eq!(ticks.labels().len(), 13);
        assert!(ticks.is_empty());

        let texts: Vec<&str> = ticks.labels()[1..5].iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, ["-2", "-1", "1", "2"]);
        assert_eq!(ticks.labels()[0].position, Vec3::ZERO);
        assert_eq!(ticks.labels()[12].position, Vec3::new(0.0, 0.0, 2.0));
    }

    #[test]
    fn tick_labels_use_integer_stepping() {
        let ticks = Wireframe::tick_labels(1.0, 0.1);
        let x_labels = &ticks.labels()[1..21];
        assert_eq!(x_labels.first().map(|l| l.text.as_str()), Some("-1"));
        assert_eq!(x_labels.last().map(|l| l.text.as_str()), Some("1"));
        assert!(x_labels.iter().any(|l| l.text == "0.3"));
        assert_eq!(ticks.labels().len(), 61);
    }

    #[test]
    fn tick_labels_with_bad_spacing_are_empty() {
        assert!(Wireframe::tick_labels(5.0, 0.0).labels().is_empty());
        assert!(Wireframe::tick_labels(f64::INFINITY, 1.0).labels().is_empty());
        assert!(Wireframe::tick_labels(f64::NAN, 1.0).labels().is_empty());
    }

    #[test]
    fn parametric_includes_both_ends() {
        let line = Wireframe::parametric(
            |t| Vec3::new(t, 2.0 * t, 0.0),
            0.0,
            1.0,
            4,
            colors::CURVE,
        );
        assert_eq!(line.len(), 4);
        assert_eq!(line.lines()[0].segment.start, Vec3::ZERO);
        assert_relative_eq!(line.lines()[3].segment.end, Vec3::new(1.0, 2.0, 0.0));
    }

    #[test]
    fn parametric_without_samples_is_empty() {
        assert!(Wireframe::parametric(|t| Vec3::new(t, t, t), 0.0, 1.0, 0, colors::CURVE)
            .is_empty());
    }

    #[test]
    fn obj_quad_edges_are_deduplicated() {
        let obj = "\
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
v 0 0 1
f 1 2 3 4
f 1 2 5
";
        let wireframe =
            Wireframe::from_obj_reader(&mut Cursor::new(obj), colors::WIREFRAME).unwrap();
        // quad: 4 edges, triangle adds 2 new ones (1-2 is shared)
        assert_eq!(wireframe.len(), 6);
        let edge_2_5 = Segment::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0));
        assert!(wireframe
            .lines()
            .iter()
            .any(|line| line.segment == edge_2_5));
    }

    #[test]
    fn missing_obj_file_is_an_error() {
        let result = Wireframe::from_obj("does/not/exist.obj", colors::WIREFRAME);
        assert!(matches!(result, Err(LoadError::Obj(_))));
    }

    #[test]
    fn projection_drops_hidden_lines() {
        let camera = Camera::new(Vec3::ZERO, 1.0, Vec3::X, Vec3::Y).unwrap();
        let mut wireframe = Wireframe::new();
        wireframe
            .add_segment(Vec3::new(0.0, 0.0, 2.0), Vec3::new(1.0, 0.0, 2.0), colors::CURVE)
            .add_segment(Vec3::new(0.0, 0.0, -2.0), Vec3::new(1.0, 0.0, -2.0), colors::GRID)
            .add_label(Vec3::new(0.0, 0.0, -3.0), "behind")
            .add_label(Vec3::new(2.0, 0.0, 4.0), "ahead");

        let clipper = SegmentClipper::default();
        let projected: Vec<_> = wireframe.project(&camera, &clipper).collect();
        assert_eq!(projected.len(), 1);
        assert_eq!(projected[0].1, colors::CURVE);
        assert_relative_eq!(projected[0].0.p2, Vec2::new(0.5, 0.0));

        let labels: Vec<_> = wireframe.project_labels(&camera).collect();
        assert_eq!(labels, vec![(Vec2::new(0.5, 0.0), "ahead")]);
    }
}
