//! Drawing-surface abstraction used by the previews.
//!
//! Previews only ever talk to a [`Canvas2d`]; the web front-end implements it
//! over `CanvasRenderingContext2d`, tests implement it with a recorder. All
//! coordinates are logical (CSS) pixels.

use glam::Vec2;
use std::fmt;

/// 8-bit RGB colour with a float alpha, formatted as a CSS `rgba()` string.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn white(a: f32) -> Self {
        Self::new(255, 255, 255, a)
    }

    pub const fn from_rgb(rgb: [u8; 3], a: f32) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2], a)
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    pub fn css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: Rgba,
    pub width: f32,
}

/// Minimal set of 2D primitives the previews need.
pub trait Canvas2d {
    fn clear(&mut self, width: f32, height: f32);
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Rgba);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    fn stroke_circle(&mut self, center: Vec2, radius: f32, style: StrokeStyle);
    /// Stroke `points` in order with round caps and joins; `closed` adds a
    /// final segment back to the first point.
    fn stroke_polyline(&mut self, points: &[Vec2], closed: bool, style: StrokeStyle);
}

/// Clear the whole surface and lay down a translucent white wash.
#[inline]
pub fn wash(canvas: &mut dyn Canvas2d, width: f32, height: f32, alpha: f32) {
    canvas.clear(width, height);
    canvas.fill_rect(Vec2::ZERO, Vec2::new(width, height), Rgba::white(alpha));
}
