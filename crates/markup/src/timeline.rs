//! Per-glyph typing timeline.
//!
//! `starts[i]` is the time at which every glyph before `i` has typed in and
//! glyph `i` begins; the extra sentinel `starts[n]` is the total typing time.
//! A glyph's duration is its class duration divided by the product of the
//! speed multipliers of every closable tag covering it. Pauses are added once,
//! in front of the glyph at which they fired.

use std::cmp::Reverse;

use crate::config::TimingConfig;
use crate::tag::{ClosableTag, RevealAnimation, Tag, is_usable_speed};

/// Start and length of one glyph's reveal transition.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CharTiming {
    pub start: f32,
    pub length: f32,
}

/// Typing schedule for a compiled text.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Timeline {
    starts: Vec<f32>,
    durations: Vec<f32>,
    reveal_lengths: Vec<f32>,
    animations: Vec<Option<RevealAnimation>>,
}

impl Timeline {
    /// Build the timeline for `glyphs` (byte offsets into `text`).
    pub(crate) fn build(
        text: &str,
        glyphs: &[usize],
        tags: &[Tag],
        pauses: &[(usize, f32)],
        timing: &TimingConfig,
    ) -> Self {
        let count = glyphs.len();
        let mut pause_at = vec![0.0_f32; count + 1];
        for &(index, seconds) in pauses {
            pause_at[index.min(count)] += seconds;
        }

        let coverage = SpanCoverage::sweep(tags, count);

        let mut starts = Vec::with_capacity(count + 1);
        let mut durations = Vec::with_capacity(count);
        let mut reveal_lengths = Vec::with_capacity(count);

        let mut time = pause_at[0];
        starts.push(time);

        for (i, &offset) in glyphs.iter().enumerate() {
            let c = text[offset..].chars().next().unwrap_or_default();
            let inverse = 1.0 / coverage.multipliers[i];

            let duration = timing.duration_for(c) * inverse;
            time += duration + pause_at[i + 1];

            starts.push(time);
            durations.push(duration);
            reveal_lengths.push(timing.reveal * inverse);
        }

        Self {
            starts,
            durations,
            reveal_lengths,
            animations: coverage.animations,
        }
    }

    /// Number of glyphs (the sentinel is not counted).
    pub fn len(&self) -> usize {
        self.durations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.durations.is_empty()
    }

    /// Cumulative start times, one per glyph plus the total.
    pub fn starts(&self) -> &[f32] {
        &self.starts
    }

    /// Time at which glyph `index` begins typing. `start(len())` is the total.
    pub fn start(&self, index: usize) -> Option<f32> {
        self.starts.get(index).copied()
    }

    /// Effective typing duration of a glyph, pauses excluded.
    pub fn duration(&self, index: usize) -> Option<f32> {
        self.durations.get(index).copied()
    }

    /// Length of a glyph's reveal transition.
    pub fn reveal_length(&self, index: usize) -> Option<f32> {
        self.reveal_lengths.get(index).copied()
    }

    pub fn char_timing(&self, index: usize) -> Option<CharTiming> {
        Some(CharTiming {
            start: self.start(index)?,
            length: self.reveal_length(index)?,
        })
    }

    /// Reveal animation override of a glyph; `None` means the default animation.
    pub fn animation(&self, index: usize) -> Option<RevealAnimation> {
        self.animations.get(index).copied().flatten()
    }

    pub fn animations(&self) -> &[Option<RevealAnimation>] {
        &self.animations
    }

    /// Total typing time, trailing pauses included.
    pub fn total_time(&self) -> f32 {
        self.starts.last().copied().unwrap_or(0.0)
    }

    /// How far glyph `index` has typed in at `time`, in `[0, 1]`.
    pub fn reveal_fraction(&self, index: usize, time: f32) -> f32 {
        let Some(timing) = self.char_timing(index) else {
            return 0.0;
        };
        if time <= timing.start {
            0.0
        } else if time < timing.start + timing.length {
            (time - timing.start) / timing.length
        } else {
            1.0
        }
    }

    /// Number of glyphs that have started typing at `time`.
    pub fn typed_count(&self, time: f32) -> usize {
        self.starts[..self.len()].partition_point(|&start| start < time)
    }
}

/// Composed speed multiplier and innermost reveal override of every glyph.
struct SpanCoverage {
    multipliers: Vec<f32>,
    animations: Vec<Option<RevealAnimation>>,
}

/// A span still covering the sweep position.
struct OpenSpan {
    end: usize,
    multiplier: f32,
    animation: Option<RevealAnimation>,
}

impl SpanCoverage {
    /// One pass over the glyphs with a stack of open spans.
    ///
    /// Emitted spans come off a LIFO stack, so any two either nest or are
    /// disjoint. Sorted outer first, each span pushed lies inside the current
    /// top, and popping spans that ended keeps the stack exactly the set of
    /// spans covering the current glyph.
    fn sweep(tags: &[Tag], count: usize) -> Self {
        let mut spans: Vec<(usize, &ClosableTag)> = tags
            .iter()
            .filter_map(Tag::as_closable)
            .enumerate()
            .filter(|(_, tag)| !tag.span.is_empty())
            .collect();
        // on identical spans the one closed first is the inner one
        spans.sort_by_key(|(order, tag)| (tag.index(), Reverse(tag.length()), Reverse(*order)));

        let mut multipliers = Vec::with_capacity(count);
        let mut animations = Vec::with_capacity(count);
        let mut open: Vec<OpenSpan> = Vec::new();
        let mut pending = spans.iter().peekable();

        for i in 0..count {
            while open.last().is_some_and(|span| span.end <= i) {
                open.pop();
            }
            while let Some((_, tag)) = pending.next_if(|(_, tag)| tag.index() <= i) {
                let (multiplier, animation) = open
                    .last()
                    .map_or((1.0, None), |span| (span.multiplier, span.animation));
                open.push(OpenSpan {
                    end: tag.span.end(),
                    multiplier: compose(multiplier, tag.typing_speed_multiplier()),
                    animation: tag.typing_animation().or(animation),
                });
            }

            let (multiplier, animation) = open
                .last()
                .map_or((1.0, None), |span| (span.multiplier, span.animation));
            multipliers.push(multiplier);
            animations.push(animation);
        }

        Self {
            multipliers,
            animations,
        }
    }
}

/// Multiply in one more speed factor, unless the result could not be inverted
/// into a finite duration.
fn compose(multiplier: f32, factor: f32) -> f32 {
    let composed = multiplier * factor;
    if is_usable_speed(composed) {
        composed
    } else {
        log::trace!("speed factor {factor} ignored: composed multiplier would be {composed}");
        multiplier
    }
}
