//! Output surfaces for projected wireframes.
//!
//! - [`Renderer`]: CPU pixel buffer, shown by the viewer window and
//!   exportable to PNG.
//! - [`SvgDocument`]: vector output.

mod renderer;
mod svg;

pub use renderer::Renderer;
pub use svg::{SvgDocument, TextAnchor};
