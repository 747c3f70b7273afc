//! Glyph quads supplied by the host layout engine.

use std::ops::{Add, AddAssign, Mul, Sub};

use crate::color::Rgba;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Linear interpolation between `self` and `other`.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

/// One rendered character: a quad with per-vertex colors.
///
/// Vertices run bottom-left, top-left, top-right, bottom-right, so vertices 0
/// and 2 are opposite corners. Invisible glyphs (spaces, line breaks) keep
/// their slot so glyph indices line up with the compiled text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glyph {
    pub vertices: [Vec2; 4],
    pub colors: [Rgba; 4],
    pub visible: bool,
}

impl Glyph {
    /// Axis-aligned visible quad with its bottom-left corner at `origin`.
    pub fn quad(origin: Vec2, width: f32, height: f32, color: Rgba) -> Self {
        let Vec2 { x, y } = origin;
        Self {
            vertices: [
                Vec2::new(x, y),
                Vec2::new(x, y + height),
                Vec2::new(x + width, y + height),
                Vec2::new(x + width, y),
            ],
            colors: [color; 4],
            visible: true,
        }
    }

    /// Zero-sized invisible glyph at `origin`.
    pub fn hidden(origin: Vec2) -> Self {
        Self {
            vertices: [origin; 4],
            colors: [Rgba::WHITE; 4],
            visible: false,
        }
    }

    /// Midpoint of the diagonal between vertices 0 and 2.
    pub fn center(&self) -> Vec2 {
        (self.vertices[0] + self.vertices[2]) * 0.5
    }

    pub fn translate(&mut self, offset: Vec2) {
        for vertex in &mut self.vertices {
            *vertex += offset;
        }
    }

    /// Scale every vertex about the quad center.
    pub fn scale_about_center(&mut self, factor: f32) {
        let center = self.center();
        for vertex in &mut self.vertices {
            *vertex = center + (*vertex - center) * factor;
        }
    }

    pub fn multiply_alpha(&mut self, factor: f32) {
        for color in &mut self.colors {
            color.a *= factor;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quad_center() {
        let glyph = Glyph::quad(Vec2::new(10.0, 0.0), 4.0, 8.0, Rgba::WHITE);
        assert_eq!(glyph.center(), Vec2::new(12.0, 4.0));
        assert!(glyph.visible);
    }

    #[test]
    fn test_scale_about_center() {
        let mut glyph = Glyph::quad(Vec2::ZERO, 2.0, 2.0, Rgba::WHITE);
        glyph.scale_about_center(0.0);
        assert!(glyph.vertices.iter().all(|&v| v == Vec2::new(1.0, 1.0)));

        let mut glyph = Glyph::quad(Vec2::ZERO, 2.0, 2.0, Rgba::WHITE);
        glyph.scale_about_center(2.0);
        assert_eq!(glyph.vertices[0], Vec2::new(-1.0, -1.0));
        assert_eq!(glyph.vertices[2], Vec2::new(3.0, 3.0));
        assert_eq!(glyph.center(), Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_translate_and_alpha() {
        let mut glyph = Glyph::quad(Vec2::ZERO, 1.0, 1.0, Rgba::WHITE.with_alpha(0.5));
        glyph.translate(Vec2::new(0.0, 3.0));
        glyph.multiply_alpha(0.5);
        assert_eq!(glyph.vertices[0], Vec2::new(0.0, 3.0));
        assert!(glyph.colors.iter().all(|c| c.a == 0.25));
    }

    #[test]
    fn test_lerp() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(4.0, -2.0);
        assert_eq!(a.lerp(b, 0.5), Vec2::new(2.0, -1.0));
    }
}
