//! Canvas 2D implementation of `Surface`

use glam::Vec2;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use super::surface::{Rect, Surface, TextAlign};

const FONT_FAMILY: &str = "ui-monospace, SFMono-Regular, Menlo, monospace";

/// Browser drawing target
pub struct Canvas2d {
    ctx: CanvasRenderingContext2d,
}

impl Canvas2d {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Surface for Canvas2d {
    type Image = HtmlImageElement;

    fn clear(&mut self, w: f32, h: f32) {
        self.ctx.clear_rect(0.0, 0.0, w as f64, h as f64);
    }

    fn fill_rect(&mut self, rect: Rect, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx
            .fill_rect(rect.x as f64, rect.y as f64, rect.w as f64, rect.h as f64);
    }

    fn stroke_rect(&mut self, rect: Rect, color: &str) {
        self.ctx.set_stroke_style_str(color);
        self.ctx
            .stroke_rect(rect.x as f64, rect.y as f64, rect.w as f64, rect.h as f64);
    }

    fn fill_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.begin_path();
        self.ctx.move_to(a.x as f64, a.y as f64);
        self.ctx.line_to(b.x as f64, b.y as f64);
        self.ctx.line_to(c.x as f64, c.y as f64);
        self.ctx.close_path();
        self.ctx.fill();
    }

    fn draw_image(&mut self, image: &HtmlImageElement, rect: Rect) {
        if let Err(e) = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
            image,
            rect.x as f64,
            rect.y as f64,
            rect.w as f64,
            rect.h as f64,
        ) {
            log::warn!("drawImage failed: {:?}", e);
        }
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, size_px: u32, align: TextAlign, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.set_font(&format!("{}px {}", size_px, FONT_FAMILY));
        self.ctx.set_text_align(match align {
            TextAlign::Start => "start",
            TextAlign::Center => "center",
        });
        if let Err(e) = self.ctx.fill_text(text, pos.x as f64, pos.y as f64) {
            log::warn!("fillText failed: {:?}", e);
        }
        self.ctx.set_text_align("start");
    }
}
