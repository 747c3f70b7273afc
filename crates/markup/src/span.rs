//! Character spans in glyph coordinates.

/// A contiguous run of glyphs `[index, index + length)`.
///
/// Positions count characters of the clean text (one per Unicode scalar
/// value), not bytes or UTF-16 units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// First glyph covered.
    pub index: usize,
    /// Number of glyphs covered.
    pub length: usize,
}

impl Span {
    pub fn new(index: usize, length: usize) -> Self {
        Self { index, length }
    }

    /// One past the last glyph covered.
    pub fn end(&self) -> usize {
        self.index + self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Check if this span covers a glyph.
    pub fn contains(&self, glyph: usize) -> bool {
        glyph >= self.index && glyph < self.end()
    }

    /// Check if this span overlaps with another span.
    pub fn overlaps(&self, other: &Span) -> bool {
        self.index < other.end() && other.index < self.end()
    }

    /// Check if `other` lies entirely within this span.
    pub fn encloses(&self, other: &Span) -> bool {
        other.index >= self.index && other.end() <= self.end()
    }

    /// Glyph indices covered, clipped to `limit`.
    pub fn clipped(&self, limit: usize) -> std::ops::Range<usize> {
        self.index.min(limit)..self.end().min(limit)
    }
}
