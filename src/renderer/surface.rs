//! Drawing surface abstraction

use glam::Vec2;

/// Screen-space rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle of the given size at `pos`
    pub fn at(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }
}

/// Horizontal text anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Start,
    Center,
}

/// Immediate-mode drawing target. Colors are CSS color strings.
pub trait Surface {
    type Image;

    fn clear(&mut self, w: f32, h: f32);
    fn fill_rect(&mut self, rect: Rect, color: &str);
    fn stroke_rect(&mut self, rect: Rect, color: &str);
    fn fill_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: &str);
    fn draw_image(&mut self, image: &Self::Image, rect: Rect);
    fn fill_text(&mut self, text: &str, pos: Vec2, size_px: u32, align: TextAlign, color: &str);
}

/// An image that may still be loading
#[derive(Debug, Clone)]
pub enum Sprite<I> {
    Loading,
    Ready(I),
}

impl<I> Default for Sprite<I> {
    fn default() -> Self {
        Sprite::Loading
    }
}
