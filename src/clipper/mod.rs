//! Line clipping.
//!
//! Two clippers, applied in order when drawing a wireframe:
//!
//! - [`segment`]: world-space clipping against the plane just in front of the
//!   eye, followed by projection onto the picture plane.
//! - [`rect`]: pixel-space clipping of the projected line against the
//!   drawable rectangle, so the rasterizer only walks visible pixels.

pub mod rect;
pub mod segment;

pub use rect::ScreenRect;
pub use segment::{
    clip_and_project, Clip, ClipConfig, ProjectedSegment, Segment, SegmentClipper,
    DEFAULT_CLIP_OFFSET,
};
