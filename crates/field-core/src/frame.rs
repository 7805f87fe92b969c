//! Draw commands produced by one simulation step, and the surface trait the
//! host paints them onto.

use crate::theme::Rgba;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
    pub blur: f32,
    pub color: Rgba,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Circle {
        center: Vec2,
        radius: f32,
        fill: Rgba,
        glow: Option<Glow>,
    },
    Line {
        from: Vec2,
        to: Vec2,
        stroke: Rgba,
        width: f32,
    },
}

/// A paintable layer. Implemented by the web front-end for a 2D canvas.
pub trait Surface {
    /// Erase the whole layer.
    fn clear(&mut self);
    fn fill_circle(&mut self, center: Vec2, radius: f32, fill: Rgba, glow: Option<Glow>);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, stroke: Rgba, width: f32);

    fn draw(&mut self, shape: &Shape) {
        match *shape {
            Shape::Circle {
                center,
                radius,
                fill,
                glow,
            } => self.fill_circle(center, radius, fill, glow),
            Shape::Line {
                from,
                to,
                stroke,
                width,
            } => self.stroke_line(from, to, stroke, width),
        }
    }
}

/// Two-layer command list. Buffers are reused between frames.
#[derive(Clone, Debug, Default)]
pub struct Frame {
    /// Particles followed by connection lines.
    pub background: Vec<Shape>,
    /// Trail dots, oldest first, then the cursor dot. Empty while the pointer
    /// is outside the window.
    pub cursor: Vec<Shape>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.background.clear();
        self.cursor.clear();
    }

    /// Clear both surfaces, then replay each layer onto its surface.
    pub fn paint(&self, background: &mut impl Surface, cursor: &mut impl Surface) {
        background.clear();
        cursor.clear();
        for shape in &self.background {
            background.draw(shape);
        }
        for shape in &self.cursor {
            cursor.draw(shape);
        }
    }
}
