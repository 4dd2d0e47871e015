//! 2D drawing surface abstraction
//!
//! The scene code only talks to `Surface`, so it runs unchanged against the
//! browser canvas, a null target for headless runs, or a recorder in tests.

use glam::Vec2;

use crate::sim::Aabb;

/// Stroke settings for dashed lines
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    pub color: &'static str,
    pub width: f32,
    /// On/off dash lengths
    pub dash: [f32; 2],
}

/// Filled circle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

/// Fill color and font for a text draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub color: &'static str,
    /// CSS font shorthand
    pub font: &'static str,
}

pub trait Surface {
    /// Erase the whole drawing area to transparent
    fn clear(&mut self, size: Vec2);

    fn fill_rect(&mut self, rect: Aabb, color: &'static str);

    fn stroke_line(&mut self, from: Vec2, to: Vec2, style: &LineStyle);

    /// Fill all circles as a single path
    fn fill_circles(&mut self, circles: &[Circle], color: &'static str);

    /// Draw text with its baseline starting at `pos`
    fn fill_text(&mut self, text: &str, pos: Vec2, style: &TextStyle);
}

/// Discards every draw call (headless runs)
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn clear(&mut self, _size: Vec2) {}
    fn fill_rect(&mut self, _rect: Aabb, _color: &'static str) {}
    fn stroke_line(&mut self, _from: Vec2, _to: Vec2, _style: &LineStyle) {}
    fn fill_circles(&mut self, _circles: &[Circle], _color: &'static str) {}
    fn fill_text(&mut self, _text: &str, _pos: Vec2, _style: &TextStyle) {}
}

/// Records draw calls for assertions
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
}

#[cfg(test)]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear(Vec2),
    Rect(Aabb, &'static str),
    Line(Vec2, Vec2, LineStyle),
    Circles(Vec<Circle>, &'static str),
    Text(String, Vec2, TextStyle),
}

#[cfg(test)]
impl Surface for RecordingSurface {
    fn clear(&mut self, size: Vec2) {
        self.ops.push(DrawOp::Clear(size));
    }

    fn fill_rect(&mut self, rect: Aabb, color: &'static str) {
        self.ops.push(DrawOp::Rect(rect, color));
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, style: &LineStyle) {
        self.ops.push(DrawOp::Line(from, to, *style));
    }

    fn fill_circles(&mut self, circles: &[Circle], color: &'static str) {
        self.ops.push(DrawOp::Circles(circles.to_vec(), color));
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, style: &TextStyle) {
        self.ops.push(DrawOp::Text(text.to_string(), pos, *style));
    }
}
