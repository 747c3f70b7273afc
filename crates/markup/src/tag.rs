//! Tag instances produced by the compiler.
//!
//! Tags form a closed set. An [`InstantTag`] fires once while the markup is
//! scanned and has no span; a [`ClosableTag`] covers a [`Span`] of glyphs
//! between its opening and closing markup. Each carries a typed parameter
//! struct that interprets its own arguments.

use crate::args::Args;
use crate::span::Span;

/// Discriminant of a tag variant.
///
/// Closing markup is accepted only when the kind it resolves to equals the
/// kind of the innermost open tag, so `slow` and `fast` close each other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TagKind {
    Pause,
    Rainbow,
    Shake,
    Wave,
    TypingSpeed,
}

/// Reveal animation used while a glyph types in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RevealAnimation {
    /// Grow from nothing to full size.
    #[default]
    Standard,
    /// Shrink from 1.5× to full size while fading in.
    Strong,
}

/// A resolved tag.
#[derive(Clone, Debug, PartialEq)]
pub enum Tag {
    Instant(InstantTag),
    Closable(ClosableTag),
}

impl Tag {
    /// A fresh pause tag with default arguments.
    pub fn pause() -> Self {
        Tag::Instant(InstantTag::new(InstantEffect::Pause(Pause::default())))
    }

    pub fn rainbow() -> Self {
        Tag::Closable(ClosableTag::new(RangeEffect::Rainbow(Rainbow::default())))
    }

    pub fn shake() -> Self {
        Tag::Closable(ClosableTag::new(RangeEffect::Shake(Shake::default())))
    }

    pub fn wave() -> Self {
        Tag::Closable(ClosableTag::new(RangeEffect::Wave(Wave::default())))
    }

    /// A typing-speed tag whose default multiplier is `speed`.
    pub fn typing_speed(speed: f32) -> Self {
        Tag::Closable(ClosableTag::new(RangeEffect::TypingSpeed(TypingSpeed {
            speed,
        })))
    }

    pub fn kind(&self) -> TagKind {
        match self {
            Tag::Instant(tag) => tag.kind(),
            Tag::Closable(tag) => tag.kind(),
        }
    }

    /// Start glyph.
    pub fn index(&self) -> usize {
        match self {
            Tag::Instant(tag) => tag.index,
            Tag::Closable(tag) => tag.span.index,
        }
    }

    pub(crate) fn set_index(&mut self, index: usize) {
        match self {
            Tag::Instant(tag) => tag.index = index,
            Tag::Closable(tag) => tag.span = Span::new(index, 0),
        }
    }

    /// Interpret the arguments of the opening markup `raw`.
    ///
    /// Missing or malformed values leave the current value untouched.
    pub fn load_args(&mut self, raw: &str, args: &Args) {
        log::trace!("loading {} argument(s) from {raw}", args.len());
        match self {
            Tag::Instant(tag) => tag.effect.load_args(args),
            Tag::Closable(tag) => tag.effect.load_args(args),
        }
    }

    /// Seconds of typing pause contributed at [`index`](Self::index).
    pub fn typing_pause(&self) -> f32 {
        match self {
            Tag::Instant(tag) => tag.typing_pause(),
            Tag::Closable(_) => 0.0,
        }
    }

    pub fn as_closable(&self) -> Option<&ClosableTag> {
        match self {
            Tag::Closable(tag) => Some(tag),
            Tag::Instant(_) => None,
        }
    }

    pub fn as_instant(&self) -> Option<&InstantTag> {
        match self {
            Tag::Instant(tag) => Some(tag),
            Tag::Closable(_) => None,
        }
    }

    pub fn is_closable(&self) -> bool {
        matches!(self, Tag::Closable(_))
    }
}

/// A tag without a span.
#[derive(Clone, Debug, PartialEq)]
pub struct InstantTag {
    /// Glyph position at which the tag fired.
    pub index: usize,
    pub effect: InstantEffect,
}

impl InstantTag {
    pub fn new(effect: InstantEffect) -> Self {
        Self { index: 0, effect }
    }

    pub fn kind(&self) -> TagKind {
        match self.effect {
            InstantEffect::Pause(_) => TagKind::Pause,
        }
    }

    pub fn typing_pause(&self) -> f32 {
        match &self.effect {
            InstantEffect::Pause(pause) => pause.time,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum InstantEffect {
    Pause(Pause),
}

impl InstantEffect {
    fn load_args(&mut self, args: &Args) {
        match self {
            InstantEffect::Pause(p) => p.load_args(args),
        }
    }
}

/// A tag covering a run of glyphs.
#[derive(Clone, Debug, PartialEq)]
pub struct ClosableTag {
    pub span: Span,
    pub effect: RangeEffect,
}

impl ClosableTag {
    pub fn new(effect: RangeEffect) -> Self {
        Self {
            span: Span::default(),
            effect,
        }
    }

    pub fn index(&self) -> usize {
        self.span.index
    }

    pub fn length(&self) -> usize {
        self.span.length
    }

    pub fn kind(&self) -> TagKind {
        match self.effect {
            RangeEffect::Rainbow(_) => TagKind::Rainbow,
            RangeEffect::Shake(_) => TagKind::Shake,
            RangeEffect::Wave(_) => TagKind::Wave,
            RangeEffect::TypingSpeed(_) => TagKind::TypingSpeed,
        }
    }

    /// Multiplier applied to the typing speed of every covered glyph.
    pub fn typing_speed_multiplier(&self) -> f32 {
        match &self.effect {
            RangeEffect::TypingSpeed(s) => s.speed,
            _ => 1.0,
        }
    }

    /// Reveal animation replacing the default one over this span.
    pub fn typing_animation(&self) -> Option<RevealAnimation> {
        match self.effect {
            RangeEffect::Rainbow(_) | RangeEffect::Wave(_) => Some(RevealAnimation::Strong),
            RangeEffect::Shake(_) | RangeEffect::TypingSpeed(_) => None,
        }
    }
}

/// Parameters of a closable tag.
#[derive(Clone, Debug, PartialEq)]
pub enum RangeEffect {
    Rainbow(Rainbow),
    Shake(Shake),
    Wave(Wave),
    TypingSpeed(TypingSpeed),
}

impl RangeEffect {
    fn load_args(&mut self, args: &Args) {
        match self {
            RangeEffect::Rainbow(r) => r.load_args(args),
            RangeEffect::Shake(s) => s.load_args(args),
            RangeEffect::Wave(w) => w.load_args(args),
            RangeEffect::TypingSpeed(s) => s.load_args(args),
        }
    }
}

/// `<pause time="seconds"/>`
#[derive(Clone, Debug, PartialEq)]
pub struct Pause {
    pub time: f32,
}

impl Default for Pause {
    fn default() -> Self {
        Self { time: 1.0 }
    }
}

impl Pause {
    fn load_args(&mut self, args: &Args) {
        let time = args.get_float("time", self.time);
        if time >= 0.0 {
            self.time = time;
        }
    }
}

/// `<rainbow scale=.. speed=..>`: cycles vertex hue over time and x position.
#[derive(Clone, Debug, PartialEq)]
pub struct Rainbow {
    pub scale: f32,
    pub speed: f32,
}

impl Default for Rainbow {
    fn default() -> Self {
        Self {
            scale: 1.0,
            speed: 1.0,
        }
    }
}

impl Rainbow {
    fn load_args(&mut self, args: &Args) {
        self.scale = args.get_float("scale", self.scale);
        self.speed = args.get_float("speed", self.speed);
    }
}

/// `<shake amplitude=.. frequency=..>`: vertical jitter.
#[derive(Clone, Debug, PartialEq)]
pub struct Shake {
    pub amplitude: f32,
    pub frequency: f32,
}

impl Default for Shake {
    fn default() -> Self {
        Self {
            amplitude: 1.0,
            frequency: 10.0,
        }
    }
}

impl Shake {
    fn load_args(&mut self, args: &Args) {
        self.amplitude = args.get_float("amplitude", self.amplitude);
        self.frequency = args.get_float("frequency", self.frequency);
    }
}

/// `<wave scale=.. speed=.. height=..>`: sine wave travelling along the span.
///
/// Stored values are the markup values scaled by 2, 5 and 2 respectively.
#[derive(Clone, Debug, PartialEq)]
pub struct Wave {
    pub scale: f32,
    pub speed: f32,
    pub height: f32,
}

impl Default for Wave {
    fn default() -> Self {
        Self {
            scale: 2.0,
            speed: 5.0,
            height: 2.0,
        }
    }
}

impl Wave {
    fn load_args(&mut self, args: &Args) {
        self.scale = args.get_float("scale", self.scale / 2.0) * 2.0;
        self.speed = args.get_float("speed", self.speed / 5.0) * 5.0;
        self.height = args.get_float("height", self.height / 2.0) * 2.0;
    }
}

/// `<slow>` / `<fast>` / custom speed tags.
#[derive(Clone, Debug, PartialEq)]
pub struct TypingSpeed {
    pub speed: f32,
}

impl Default for TypingSpeed {
    fn default() -> Self {
        Self { speed: 1.0 }
    }
}

impl TypingSpeed {
    fn load_args(&mut self, args: &Args) {
        let speed = args.get_float("speed", self.speed);
        if is_usable_speed(speed) {
            self.speed = speed;
        } else {
            log::trace!("typing speed {speed} ignored");
        }
    }
}

/// A multiplier whose reciprocal is a finite, positive duration scale.
pub(crate) fn is_usable_speed(speed: f32) -> bool {
    speed.is_finite() && speed > 0.0 && (1.0 / speed).is_finite()
}
