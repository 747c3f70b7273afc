//! Typewriter reveal animations.

use typefx_markup::RevealAnimation;

use crate::geometry::Glyph;

/// Scale a glyph reaches at the start of the strong reveal.
pub const STRONG_START_SCALE: f32 = 1.5;

/// Transforming a glyph by how far it has typed in.
pub trait Reveal {
    /// `fraction` is clamped to `[0, 1]`.
    fn reveal(&self, glyph: &mut Glyph, fraction: f32);
}

impl Reveal for RevealAnimation {
    fn reveal(&self, glyph: &mut Glyph, fraction: f32) {
        let fraction = fraction.clamp(0.0, 1.0);
        match self {
            // grow from nothing
            RevealAnimation::Standard => glyph.scale_about_center(fraction),
            // shrink from oversized while fading in
            RevealAnimation::Strong => {
                glyph.scale_about_center(lerp(STRONG_START_SCALE, 1.0, fraction));
                glyph.multiply_alpha(fraction);
            }
        }
    }
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use crate::geometry::Vec2;

    fn glyph() -> Glyph {
        Glyph::quad(Vec2::ZERO, 2.0, 2.0, Rgba::WHITE)
    }

    #[test]
    fn test_standard_reveal() {
        let mut hidden = glyph();
        RevealAnimation::Standard.reveal(&mut hidden, 0.0);
        assert!(hidden.vertices.iter().all(|&v| v == Vec2::new(1.0, 1.0)));

        let mut half = glyph();
        RevealAnimation::Standard.reveal(&mut half, 0.5);
        assert_eq!(half.vertices[0], Vec2::new(0.5, 0.5));
        assert_eq!(half.colors, [Rgba::WHITE; 4]);

        let mut full = glyph();
        RevealAnimation::Standard.reveal(&mut full, 1.0);
        assert_eq!(full, glyph());
    }

    #[test]
    fn test_strong_reveal() {
        let mut start = glyph();
        RevealAnimation::Strong.reveal(&mut start, 0.0);
        assert_eq!(start.vertices[0], Vec2::new(-0.5, -0.5));
        assert!(start.colors.iter().all(|c| c.a == 0.0));

        let mut full = glyph();
        RevealAnimation::Strong.reveal(&mut full, 1.0);
        assert_eq!(full, glyph());
    }

    #[test]
    fn test_fraction_is_clamped() {
        let mut over = glyph();
        RevealAnimation::Strong.reveal(&mut over, 3.0);
        assert_eq!(over, glyph());
    }
}
