//! Lexer for tagged text.
//!
//! Splits input into literal text and tag occurrences. Whether a tag is
//! actually recognized is decided later against the registry; the lexer only
//! knows the syntax.

use super::syntax::{TagMarkup, tag_markup};

/// A token produced by the lexer.
#[derive(Clone, Debug, PartialEq)]
pub enum Token<'a> {
    /// Literal text.
    Text(&'a str),
    /// `<name args...>`
    OpenTag(TagMarkup<'a>),
    /// `</name>`
    CloseTag(TagMarkup<'a>),
}

impl<'a> Token<'a> {
    /// The source text this token was read from.
    pub fn raw(&self) -> &'a str {
        match self {
            Token::Text(text) => text,
            Token::OpenTag(markup) | Token::CloseTag(markup) => markup.raw,
        }
    }
}

/// Lexer for tagged text.
///
/// # Examples
///
/// ```
/// use typefx_markup::parser::Lexer;
///
/// let tokens: Vec<_> = Lexer::new("<wave>Hi</wave>").collect();
/// assert_eq!(tokens.len(), 3);
/// ```
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Consume text up to the next `<`. A `<` at the current position that
    /// failed to parse as a tag is consumed as text.
    fn consume_text(&mut self) -> &'a str {
        let start = self.pos;
        let skip = usize::from(self.remaining().starts_with('<'));
        self.pos = match self.input[start + skip..].find('<') {
            Some(offset) => start + skip + offset,
            None => self.input.len(),
        };
        &self.input[start..self.pos]
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.input.len() {
            return None;
        }

        if self.remaining().starts_with('<') {
            if let Ok((rest, markup)) = tag_markup(self.remaining()) {
                self.pos = self.input.len() - rest.len();
                return Some(if markup.closing {
                    Token::CloseTag(markup)
                } else {
                    Token::OpenTag(markup)
                });
            }
        }

        Some(Token::Text(self.consume_text()))
    }
}
