//! Compiler configuration: per-character typing durations and host markup handling.

use crate::error::ConfigError;

/// Duration of an ordinary character, in seconds.
pub const TYPING_TIME_DEFAULT: f32 = 0.02;
/// Duration of a whitespace character.
pub const TYPING_TIME_WHITESPACE: f32 = TYPING_TIME_DEFAULT * 2.0;
/// Duration of `,` `;` `:`.
pub const TYPING_TIME_PUNCTUATION: f32 = TYPING_TIME_DEFAULT * 8.0;
/// Duration of `.` and `—`.
pub const TYPING_TIME_PUNCTUATION_LONG: f32 = TYPING_TIME_PUNCTUATION * 3.0;
/// Duration of a line break.
pub const TYPING_TIME_LINE_BREAK: f32 = TYPING_TIME_PUNCTUATION_LONG * 2.0;

/// Timing class of a clean-text character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharClass {
    Ordinary,
    Whitespace,
    Punctuation,
    LongPunctuation,
    LineBreak,
}

impl CharClass {
    /// Classify a character.
    pub fn of(c: char) -> Self {
        match c {
            '\n' => CharClass::LineBreak,
            '.' | '—' => CharClass::LongPunctuation,
            ',' | ';' | ':' => CharClass::Punctuation,
            c if c.is_whitespace() => CharClass::Whitespace,
            _ => CharClass::Ordinary,
        }
    }
}

/// Base typing durations per character class.
///
/// The defaults keep the ordering line break > long punctuation >
/// punctuation > whitespace > ordinary.
#[derive(Clone, Debug, PartialEq)]
pub struct TimingConfig {
    pub ordinary: f32,
    pub whitespace: f32,
    pub punctuation: f32,
    pub long_punctuation: f32,
    pub line_break: f32,
    /// Length of one character's reveal transition at speed 1.
    pub reveal: f32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            ordinary: TYPING_TIME_DEFAULT,
            whitespace: TYPING_TIME_WHITESPACE,
            punctuation: TYPING_TIME_PUNCTUATION,
            long_punctuation: TYPING_TIME_PUNCTUATION_LONG,
            line_break: TYPING_TIME_LINE_BREAK,
            reveal: TYPING_TIME_DEFAULT,
        }
    }
}

impl TimingConfig {
    /// Base duration for a character class.
    pub fn duration(&self, class: CharClass) -> f32 {
        match class {
            CharClass::Ordinary => self.ordinary,
            CharClass::Whitespace => self.whitespace,
            CharClass::Punctuation => self.punctuation,
            CharClass::LongPunctuation => self.long_punctuation,
            CharClass::LineBreak => self.line_break,
        }
    }

    /// Base duration for a character.
    pub fn duration_for(&self, c: char) -> f32 {
        self.duration(CharClass::of(c))
    }

    /// Multiply every duration by `factor`.
    pub fn scaled(mut self, factor: f32) -> Self {
        self.ordinary *= factor;
        self.whitespace *= factor;
        self.punctuation *= factor;
        self.long_punctuation *= factor;
        self.line_break *= factor;
        self.reveal *= factor;
        self
    }

    /// Check that every duration is finite and positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let classes = [
            CharClass::Ordinary,
            CharClass::Whitespace,
            CharClass::Punctuation,
            CharClass::LongPunctuation,
            CharClass::LineBreak,
        ];
        for class in classes {
            let value = self.duration(class);
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositiveDuration { class, value });
            }
        }
        if !(self.reveal.is_finite() && self.reveal > 0.0) {
            return Err(ConfigError::NonPositiveReveal(self.reveal));
        }
        Ok(())
    }
}

/// How `<...>` runs left in the clean text are counted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HostMarkup {
    /// Every clean-text character is a glyph.
    #[default]
    Literal,
    /// Unclaimed `<...>` runs belong to the host layout engine: they stay in the
    /// clean text but produce no glyphs and no timeline entries.
    Hidden,
}

/// Full compiler configuration.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CompilerConfig {
    pub timing: TimingConfig,
    pub host_markup: HostMarkup,
}

impl CompilerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timing(mut self, timing: TimingConfig) -> Self {
        self.timing = timing;
        self
    }

    pub fn with_host_markup(mut self, host_markup: HostMarkup) -> Self {
        self.host_markup = host_markup;
        self
    }

    /// Validate the embedded timing configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.timing.validate()
    }
}
