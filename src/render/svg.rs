//! SVG output.
//!
//! [`SvgDocument`] collects `<line>` and `<text>` elements and serialises
//! them into a standalone `<svg>` document sized to the viewport.

use std::fmt;

use crate::camera::Camera;
use crate::clipper::{ScreenRect, SegmentClipper};
use crate::colors::{self, Color};
use crate::math::vec2::Vec2;
use crate::scene::Wireframe;
use crate::viewport::Viewport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    fn as_str(self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Element {
    Line {
        from: Vec2,
        to: Vec2,
        stroke: Color,
        stroke_width: f64,
    },
    Text {
        at: Vec2,
        text: String,
        anchor: TextAnchor,
        font_family: &'static str,
        font_size: u32,
    },
}

#[derive(Debug, Clone)]
pub struct SvgDocument {
    width: u32,
    height: u32,
    elements: Vec<Element>,
}

impl SvgDocument {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            elements: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn line(&mut self, from: Vec2, to: Vec2, stroke: Color) -> &mut Self {
        self.elements.push(Element::Line {
            from,
            to,
            stroke,
            stroke_width: 1.0,
        });
        self
    }

    pub fn text(&mut self, at: Vec2, text: impl Into<String>, anchor: TextAnchor) -> &mut Self {
        self.elements.push(Element::Text {
            at,
            text: text.into(),
            anchor,
            font_family: "Arial",
            font_size: 12,
        });
        self
    }

    /// Adds every visible line and label of `scene`.
    ///
    /// Lines are cut to the document rectangle; labels are placed just below
    /// and left of their anchor, and skipped when the anchor is off the page.
    pub fn render_wireframe(
        &mut self,
        scene: &Wireframe,
        camera: &Camera,
        clipper: &SegmentClipper,
        viewport: &Viewport,
    ) -> &mut Self {
        let page = ScreenRect::new(
            Vec2::ZERO,
            Vec2::new(f64::from(self.width), f64::from(self.height)),
        );

        for (projected, color) in scene.project(camera, clipper) {
            let from = viewport.to_pixel(projected.p1);
            let to = viewport.to_pixel(projected.p2);
            if let Some((from, to)) = page.clip_line(from, to) {
                self.line(from, to, color);
            }
        }

        for (anchor, text) in scene.project_labels(camera) {
            let at = viewport.to_pixel(anchor);
            if page.contains(at) {
                self.text(at + Vec2::new(-5.0, 12.0), text, TextAnchor::End);
            }
        }

        self
    }
}

impl fmt::Display for SvgDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" preserveAspectRatio="none" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height,
        )?;

        for element in &self.elements {
            match element {
                Element::Line {
                    from,
                    to,
                    stroke,
                    stroke_width,
                } => writeln!(
                    f,
                    r#"  <line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="{}"/>"#,
                    from.x,
                    from.y,
                    to.x,
                    to.y,
                    colors::to_hex(*stroke),
                    stroke_width,
                )?,
                Element::Text {
                    at,
                    text,
                    anchor,
                    font_family,
                    font_size,
                } => writeln!(
                    f,
                    r#"  <text x="{:.2}" y="{:.2}" text-anchor="{}" font-family="{}" font-size="{}">{}</text>"#,
                    at.x,
                    at.y,
                    anchor.as_str(),
                    font_family,
                    font_size,
                    escape(text),
                )?,
            }
        }

        f.write_str("</svg>\n")
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
