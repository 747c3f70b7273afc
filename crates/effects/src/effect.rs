//! Per-frame effects of closable tags.
//!
//! Effects are pure functions of the tag parameters, the glyph index, the
//! glyph's own vertices and the elapsed time. They only touch visible glyphs
//! inside the tag span, clipped to the glyphs the host supplied.

use std::ops::Range;

use typefx_markup::{ClosableTag, Rainbow, RangeEffect, Shake, Wave};

use crate::color::Rgba;
use crate::geometry::{Glyph, Vec2};

/// Applying a tag's visual effect over its span.
pub trait GlyphEffect {
    fn apply(&self, glyphs: &mut [Glyph], elapsed: f32);
}

impl GlyphEffect for ClosableTag {
    fn apply(&self, glyphs: &mut [Glyph], elapsed: f32) {
        let range = self.span.clipped(glyphs.len());
        match &self.effect {
            RangeEffect::Rainbow(rainbow) => {
                for_each_visible(glyphs, range, |_, glyph| {
                    rainbow.paint(glyph, elapsed)
                });
            }
            RangeEffect::Shake(shake) => {
                for_each_visible(glyphs, range, |i, glyph| {
                    glyph.translate(Vec2::new(0.0, shake.offset(i, elapsed)))
                });
            }
            RangeEffect::Wave(wave) => {
                for_each_visible(glyphs, range, |i, glyph| {
                    glyph.translate(Vec2::new(0.0, wave.offset(i, elapsed)))
                });
            }
            RangeEffect::TypingSpeed(_) => {}
        }
    }
}

fn for_each_visible(
    glyphs: &mut [Glyph],
    range: Range<usize>,
    mut f: impl FnMut(usize, &mut Glyph),
) {
    let start = range.start;
    for (i, glyph) in glyphs[range].iter_mut().enumerate() {
        if glyph.visible {
            f(start + i, glyph);
        }
    }
}

/// Hue-cycling colors, sampled per vertex.
trait Paint {
    fn paint(&self, glyph: &mut Glyph, elapsed: f32);
}

impl Paint for Rainbow {
    fn paint(&self, glyph: &mut Glyph, elapsed: f32) {
        for (vertex, color) in glyph.vertices.iter().zip(glyph.colors.iter_mut()) {
            let hue = repeat(elapsed * self.speed * 0.25 + vertex.x * self.scale * 0.01, 1.0);
            *color = Rgba::from_hsv(hue, 1.0, 1.0, color.a);
        }
    }
}

/// Vertical displacement of glyph `i`.
trait Offset {
    fn offset(&self, i: usize, elapsed: f32) -> f32;
}

impl Offset for Shake {
    fn offset(&self, i: usize, elapsed: f32) -> f32 {
        (elapsed * self.frequency + i as f32 / 100.0).sin() * self.amplitude
    }
}

impl Offset for Wave {
    fn offset(&self, i: usize, elapsed: f32) -> f32 {
        (elapsed * self.speed + i as f32 * self.scale).sin() * self.height
    }
}

/// Wraps `t` into `[0, length)`.
fn repeat(t: f32, length: f32) -> f32 {
    (t - (t / length).floor() * length).clamp(0.0, length)
}
