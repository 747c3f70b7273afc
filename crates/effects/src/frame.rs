//! Frame application and playback clock.

use typefx_markup::CompiledText;

use crate::effect::GlyphEffect;
use crate::geometry::Glyph;
use crate::reveal::Reveal;

/// Time inputs for one frame.
///
/// `elapsed` drives the looping tag effects; `typing_time` is the position on
/// the typing timeline and drives the reveal.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameClock {
    pub elapsed: f32,
    pub typing_time: f32,
}

impl FrameClock {
    pub fn new(elapsed: f32, typing_time: f32) -> Self {
        Self {
            elapsed,
            typing_time,
        }
    }
}

/// Compute the presented glyphs for one frame.
///
/// Copies `base`, applies every closable tag effect in tag order, then the
/// reveal animation of every visible glyph the timeline covers. `base` is
/// never modified, so hosts can keep one laid-out copy per text.
///
/// # Examples
///
/// ```
/// use typefx_effects::{FrameClock, Glyph, Rgba, Vec2, render_frame};
/// use typefx_markup::compile;
///
/// let compiled = compile("<wave>hi</wave>");
/// let base: Vec<Glyph> = (0..2)
///     .map(|i| Glyph::quad(Vec2::new(i as f32 * 10.0, 0.0), 8.0, 12.0, Rgba::WHITE))
///     .collect();
///
/// // before typing starts every glyph is collapsed or transparent
/// let frame = render_frame(&compiled, &base, FrameClock::new(0.0, 0.0));
/// assert!(frame.iter().all(|g| g.colors.iter().all(|c| c.a == 0.0)));
/// ```
pub fn render_frame(compiled: &CompiledText, base: &[Glyph], clock: FrameClock) -> Vec<Glyph> {
    let mut glyphs = base.to_vec();
    if glyphs.len() != compiled.glyph_count() {
        log::debug!(
            "host supplied {} glyph(s) for {} compiled glyph(s)",
            glyphs.len(),
            compiled.glyph_count()
        );
    }

    for tag in compiled.closable_tags() {
        tag.apply(&mut glyphs, clock.elapsed);
    }

    let timeline = compiled.timeline();
    for (i, glyph) in glyphs.iter_mut().enumerate().take(timeline.len()) {
        if !glyph.visible {
            continue;
        }
        let fraction = timeline.reveal_fraction(i, clock.typing_time);
        timeline
            .animation(i)
            .unwrap_or_default()
            .reveal(glyph, fraction);
    }

    glyphs
}

/// Host-side typing clock.
///
/// # Examples
///
/// ```
/// use typefx_effects::Playback;
///
/// let mut playback = Playback::new(2.0);
/// playback.advance(0.5);
/// assert_eq!(playback.time, 1.0);
/// assert!(playback.is_finished(1.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Playback {
    /// Position on the typing timeline, in seconds.
    pub time: f32,
    /// Typing speed multiplier; negative speeds rewind.
    pub speed: f32,
}

impl Default for Playback {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Playback {
    pub fn new(speed: f32) -> Self {
        Self { time: 0.0, speed }
    }

    /// Move the clock forward by `dt` seconds of wall time.
    pub fn advance(&mut self, dt: f32) {
        self.time = (self.time + dt * self.speed).max(0.0);
    }

    pub fn skip_to_end(&mut self, total: f32) {
        if self.time < total {
            log::trace!("skipping playback from {:.3}s to {total:.3}s", self.time);
            self.time = total;
        }
    }

    pub fn is_finished(&self, total: f32) -> bool {
        self.time >= total
    }

    pub fn restart(&mut self) {
        self.time = 0.0;
    }

    /// Frame clock for the current position, given the elapsed wall time.
    pub fn clock(&self, elapsed: f32) -> FrameClock {
        FrameClock::new(elapsed, self.time)
    }
}
