//! Planar perspective projection and eye-plane line clipping for 3D
//! wireframe plots.
//!
//! A [`Camera`] turns world points into picture-plane coordinates; a
//! [`SegmentClipper`] trims segments that pass behind the eye before they
//! are projected. Around that core sit a small wireframe scene, a pixel
//! renderer with PNG export, an SVG writer, and an SDL2 viewer.
//!
//! # Quick Start
//!
//! ```ignore
//! use planeview::prelude::*;
//!
//! let camera = ViewState::default().camera()?;
//! let scene = Wireframe::grid(10.0, 1.0, colors::GRID);
//! let viewport = Viewport::centered(10.0, 800, 600)?;
//!
//! let mut svg = SvgDocument::new(800, 600);
//! svg.render_wireframe(&scene, &camera, &SegmentClipper::default(), &viewport);
//! println!("{svg}");
//! ```

// Public API - exposed to library consumers
pub mod camera;
pub mod clipper;
pub mod colors;
pub mod error;
pub mod math;
pub mod navigation;
pub mod render;
pub mod scene;
pub mod viewport;
pub mod window;

// Re-export commonly needed types at crate root for convenience
pub use camera::{make_camera, project, Camera};
pub use clipper::{clip_and_project, ProjectedSegment, Segment, SegmentClipper};
pub use error::{LoadError, ProjectionError};

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use planeview::prelude::*;
/// ```
pub mod prelude {
    // Core
    pub use crate::camera::{make_camera, project, Camera};
    pub use crate::clipper::{
        clip_and_project, Clip, ClipConfig, ProjectedSegment, Segment, SegmentClipper,
    };
    pub use crate::error::{LoadError, ProjectionError};

    // Math
    pub use crate::math::vec2::Vec2;
    pub use crate::math::vec3::Vec3;

    // Navigation
    pub use crate::navigation::{CameraController, NavigationConfig, ViewState};

    // Scene & output
    pub use crate::colors;
    pub use crate::render::{Renderer, SvgDocument};
    pub use crate::scene::Wireframe;
    pub use crate::viewport::{PlotBounds, Viewport};

    // Window & Input
    pub use crate::window::{FrameLimiter, InputState, Window, WindowEvent};
}
