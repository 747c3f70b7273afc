//! CompiledText result type.

use std::fmt;

use crate::tag::{ClosableTag, InstantTag, Tag};
use crate::timeline::Timeline;

/// The result of compiling tagged text.
///
/// Holds the clean text, the emitted tags in emission order (instant tags when
/// opened, closable tags when closed) and the typing timeline. Positions in
/// tags and timeline count glyphs of the clean text.
///
/// # Examples
///
/// ```
/// use typefx_markup::CompiledText;
///
/// let compiled = CompiledText::compile("<rainbow>Hi</rainbow>!");
/// assert_eq!(compiled.text(), "Hi!");
/// assert_eq!(compiled.glyph_count(), 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CompiledText {
    text: String,
    /// Byte offset in `text` of every glyph.
    glyphs: Vec<usize>,
    tags: Vec<Tag>,
    timeline: Timeline,
}

impl CompiledText {
    pub(crate) fn new(text: String, glyphs: Vec<usize>, tags: Vec<Tag>, timeline: Timeline) -> Self {
        Self {
            text,
            glyphs,
            tags,
            timeline,
        }
    }

    /// Compile with the built-in registry and default configuration.
    pub fn compile(input: &str) -> Self {
        crate::parser::compile(input)
    }

    /// Compile UTF-16 storage. Unpaired surrogates become U+FFFD.
    pub fn compile_utf16(units: &[u16]) -> Self {
        crate::parser::compile(&String::from_utf16_lossy(units))
    }

    /// Clean display text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Emitted tags in emission order.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn closable_tags(&self) -> impl Iterator<Item = &ClosableTag> {
        self.tags.iter().filter_map(Tag::as_closable)
    }

    pub fn instant_tags(&self) -> impl Iterator<Item = &InstantTag> {
        self.tags.iter().filter_map(Tag::as_instant)
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn total_typing_time(&self) -> f32 {
        self.timeline.total_time()
    }

    /// Number of glyphs.
    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    /// Returns true if no tag was emitted.
    pub fn is_plain(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Character of glyph `index`.
    pub fn glyph(&self, index: usize) -> Option<char> {
        let offset = *self.glyphs.get(index)?;
        self.text[offset..].chars().next()
    }

    /// Iterate over glyph characters.
    pub fn glyphs(&self) -> impl Iterator<Item = char> + '_ {
        self.glyphs
            .iter()
            .filter_map(|&offset| self.text[offset..].chars().next())
    }

    /// UTF-8 byte offset of glyph `index`; `glyph_count()` maps to the text end.
    pub fn byte_offset(&self, index: usize) -> Option<usize> {
        match self.glyphs.get(index) {
            Some(&offset) => Some(offset),
            None if index == self.glyphs.len() => Some(self.text.len()),
            None => None,
        }
    }

    /// UTF-16 offset of glyph `index`, for hosts storing text as UTF-16.
    pub fn utf16_offset(&self, index: usize) -> Option<usize> {
        let offset = self.byte_offset(index)?;
        Some(self.text[..offset].encode_utf16().count())
    }

    /// Closable tags covering glyph `index`, in emission order.
    pub fn tags_at(&self, index: usize) -> Vec<&ClosableTag> {
        self.closable_tags()
            .filter(|t| t.span.contains(index))
            .collect()
    }
}

impl fmt::Display for CompiledText {
    /// Multi-line dump of text, tags and timeline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "text: {:?}", self.text)?;
        for tag in &self.tags {
            match tag {
                Tag::Instant(t) => writeln!(f, "tag: {:?} @{}", t.kind(), t.index)?,
                Tag::Closable(t) => writeln!(
                    f,
                    "tag: {:?} [{}, {})",
                    t.kind(),
                    t.span.index,
                    t.span.end()
                )?,
            }
        }
        let starts: Vec<String> = self
            .timeline
            .starts()
            .iter()
            .map(|s| format!("{s:.2}"))
            .collect();
        write!(f, "starts: {}", starts.join(" "))
    }
}
