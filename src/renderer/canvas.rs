//! Browser `Surface` backed by a canvas 2D context

use glam::Vec2;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::surface::{Circle, LineStyle, Surface, TextStyle};
use crate::sim::Aabb;

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, size: Vec2) {
        self.ctx.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
    }

    fn fill_rect(&mut self, rect: Aabb, color: &'static str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(
            rect.pos.x as f64,
            rect.pos.y as f64,
            rect.size.x as f64,
            rect.size.y as f64,
        );
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, style: &LineStyle) {
        let dash = js_sys::Array::of2(
            &JsValue::from_f64(style.dash[0] as f64),
            &JsValue::from_f64(style.dash[1] as f64),
        );
        self.ctx.set_stroke_style_str(style.color);
        self.ctx.set_line_dash(&dash).ok();
        self.ctx.set_line_width(style.width as f64);

        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }

    fn fill_circles(&mut self, circles: &[Circle], color: &'static str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.begin_path();
        for c in circles {
            self.ctx
                .arc(
                    c.center.x as f64,
                    c.center.y as f64,
                    c.radius as f64,
                    0.0,
                    std::f64::consts::TAU,
                )
                .ok();
        }
        self.ctx.fill();
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, style: &TextStyle) {
        self.ctx.set_fill_style_str(style.color);
        self.ctx.set_font(style.font);
        self.ctx.fill_text(text, pos.x as f64, pos.y as f64).ok();
    }
}
