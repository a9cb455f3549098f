//! Eye-plane segment clipping.
//!
//! A segment is tested against a single plane parallel to the picture plane,
//! sitting `offset` units (along the camera's plane normal) in front of the
//! eye. The portion behind that plane is cut away before projection, so no
//! endpoint ever reaches the eye plane itself where the projection divides
//! by zero.

use tracing::trace;

use crate::camera::Camera;
use crate::error::{ProjectionError, Result};
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;

/// Default distance of the clip plane in front of the eye plane, in world
/// units scaled by the plane normal's length.
pub const DEFAULT_CLIP_OFFSET: f64 = 1.0;

/// A world-space line segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Vec3,
    pub end: Vec3,
}

impl Segment {
    pub const fn new(start: Vec3, end: Vec3) -> Self {
        Self { start, end }
    }

    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.start)
    }
}

/// A segment on the picture plane, ready to be mapped to pixels and drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedSegment {
    pub p1: Vec2,
    pub p2: Vec2,
}

/// Outcome of clipping one segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Clip {
    /// Nothing in front of the clip plane.
    Hidden,
    /// Both endpoints in front of the eye; the segment is unchanged.
    Whole(Segment),
    /// One endpoint was moved onto the clip plane.
    ///
    /// `lambda` is the interpolation parameter of the new point, measured
    /// from the hidden endpoint towards the visible one.
    Truncated { segment: Segment, lambda: f64 },
}

impl Clip {
    /// The part of the segment left to draw, if any.
    pub fn visible(&self) -> Option<Segment> {
        match *self {
            Clip::Hidden => None,
            Clip::Whole(segment) | Clip::Truncated { segment, .. } => Some(segment),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipConfig {
    /// How far in front of the eye plane the clip plane sits. Must be > 0.
    pub offset: f64,
}

impl Default for ClipConfig {
    fn default() -> Self {
        Self {
            offset: DEFAULT_CLIP_OFFSET,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SegmentClipper {
    config: ClipConfig,
}

impl SegmentClipper {
    pub fn new(config: ClipConfig) -> Self {
        Self { config }
    }

    pub fn offset(&self) -> f64 {
        self.config.offset
    }

    /// Cuts `segment` down to the part the camera can see.
    ///
    /// Endpoints are classified with [`Camera::in_front_of_eye`]. When exactly
    /// one is visible, the hidden one is replaced by the point where the
    /// segment crosses the clip plane. A crossing that lands beyond the
    /// visible endpoint means the whole segment is closer than the clip
    /// plane, and it is reported as [`Clip::Hidden`].
    ///
    /// # Errors
    /// [`ProjectionError::UnprojectableSegment`] when the endpoints are
    /// classified differently but the segment is parallel to the plane.
    pub fn clip(&self, camera: &Camera, segment: Segment) -> Result<Clip> {
        let start_in = camera.in_front_of_eye(segment.start);
        let end_in = camera.in_front_of_eye(segment.end);

        match (start_in, end_in) {
            (false, false) => Ok(Clip::Hidden),
            (true, true) => Ok(Clip::Whole(segment)),
            (false, true) => {
                let Some(lambda) = self.crossing(camera, segment.start, segment.end)? else {
                    return Ok(Clip::Hidden);
                };
                Ok(Clip::Truncated {
                    segment: Segment::new(segment.start.lerp(segment.end, lambda), segment.end),
                    lambda,
                })
            }
            (true, false) => {
                let Some(lambda) = self.crossing(camera, segment.end, segment.start)? else {
                    return Ok(Clip::Hidden);
                };
                Ok(Clip::Truncated {
                    segment: Segment::new(segment.start, segment.end.lerp(segment.start, lambda)),
                    lambda,
                })
            }
        }
    }

    /// Clips and projects a segment.
    ///
    /// Returns `None` when nothing should be drawn this frame, whether the
    /// segment is hidden or one of the degenerate cases was hit.
    pub fn clip_and_project(
        &self,
        camera: &Camera,
        start: Vec3,
        end: Vec3,
    ) -> Option<ProjectedSegment> {
        match self.try_clip_and_project(camera, Segment::new(start, end)) {
            Ok(projected) => projected,
            Err(error) => {
                trace!(%error, ?start, ?end, "segment dropped");
                None
            }
        }
    }

    fn try_clip_and_project(
        &self,
        camera: &Camera,
        segment: Segment,
    ) -> Result<Option<ProjectedSegment>> {
        let Some(visible) = self.clip(camera, segment)?.visible() else {
            return Ok(None);
        };
        Ok(Some(ProjectedSegment {
            p1: camera.projected_coords(visible.start)?,
            p2: camera.projected_coords(visible.end)?,
        }))
    }

    /// Interpolation parameter, from `hidden` towards `visible`, of the point
    /// where the line crosses the clip plane:
    ///
    /// `λ = ((eye - hidden)·P + offset) / ((visible - hidden)·P)`
    ///
    /// `None` if the crossing is at or past `visible`.
    fn crossing(&self, camera: &Camera, hidden: Vec3, visible: Vec3) -> Result<Option<f64>> {
        let normal = camera.plane_normal();
        let denominator = visible.subtract(hidden).dot(normal);
        if denominator == 0.0 {
            return Err(ProjectionError::UnprojectableSegment);
        }

        let lambda = (camera.eye().subtract(hidden).dot(normal) + self.config.offset) / denominator;
        if !lambda.is_finite() || lambda >= 1.0 {
            return Ok(None);
        }
        Ok(Some(lambda))
    }
}

/// Clips and projects with the default one-unit clip offset.
pub fn clip_and_project(camera: &Camera, start: Vec3, end: Vec3) -> Option<ProjectedSegment> {
    SegmentClipper::default().clip_and_project(camera, start, end)
}
