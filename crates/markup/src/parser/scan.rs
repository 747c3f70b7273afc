//! Single-pass markup compiler.
//!
//! Walks the lexer's tokens left to right, strips every tag the registry
//! recognizes, resolves closable tags against a LIFO stack, records tag
//! positions in glyph coordinates and finally builds the typing timeline.

use crate::args::Args;
use crate::compiled::CompiledText;
use crate::config::{CompilerConfig, HostMarkup};
use crate::registry::{Registry, TagFactory};
use crate::tag::{ClosableTag, Tag};
use crate::timeline::Timeline;

use super::lexer::{Lexer, Token};
use super::syntax::TagMarkup;

/// Compile tagged text with the built-in registry and default configuration.
///
/// # Examples
///
/// ```
/// use typefx_markup::parser::compile;
///
/// let compiled = compile("<wave>Hi</wave> there");
/// assert_eq!(compiled.text(), "Hi there");
/// assert_eq!(compiled.tags().len(), 1);
/// assert_eq!(compiled.timeline().len(), 8);
/// ```
pub fn compile(input: &str) -> CompiledText {
    compile_with(input, Registry::builtin(), &CompilerConfig::default())
}

/// Compile tagged text against a specific registry and configuration.
///
/// Never fails: unknown or unbalanced markup stays in the text as literal
/// characters.
pub fn compile_with(input: &str, registry: &Registry, config: &CompilerConfig) -> CompiledText {
    let mut scanner = Scanner::new(registry, config.host_markup);
    for token in Lexer::new(input) {
        scanner.process_token(token);
    }
    let Scanner {
        output,
        glyphs,
        tags,
        pauses,
        ..
    } = scanner.finish();

    let timeline = Timeline::build(&output, &glyphs, &tags, &pauses, &config.timing);
    log::trace!(
        "compiled {} byte(s) into {} glyph(s), {} tag(s), {:.3}s",
        input.len(),
        glyphs.len(),
        tags.len(),
        timeline.total_time()
    );
    CompiledText::new(output, glyphs, tags, timeline)
}

/// Compiler state for one input.
struct Scanner<'r> {
    registry: &'r Registry,
    host_markup: HostMarkup,
    /// Closable tags opened but not yet closed, innermost last.
    stack: Vec<ClosableTag>,
    /// Emitted tags: instants when opened, closables when closed.
    tags: Vec<Tag>,
    /// Clean text baked so far.
    output: String,
    /// Text appended since the last accepted tag.
    pending: String,
    /// Byte offset in `output` of every glyph.
    glyphs: Vec<usize>,
    /// `(glyph index, seconds)` for every pause fired.
    pauses: Vec<(usize, f32)>,
}

impl<'r> Scanner<'r> {
    fn new(registry: &'r Registry, host_markup: HostMarkup) -> Self {
        Self {
            registry,
            host_markup,
            stack: Vec::new(),
            tags: Vec::new(),
            output: String::new(),
            pending: String::new(),
            glyphs: Vec::new(),
            pauses: Vec::new(),
        }
    }

    fn process_token(&mut self, token: Token<'_>) {
        match token {
            Token::Text(text) => self.pending.push_str(text),
            Token::OpenTag(markup) => match self.registry.lookup(markup.name) {
                Some(factory) => self.open_tag(factory, &markup),
                None => self.keep_literal(&markup, "unknown tag"),
            },
            Token::CloseTag(markup) => match self.registry.lookup(markup.name) {
                Some(factory) => self.close_tag(factory, &markup),
                None => self.keep_literal(&markup, "unknown tag"),
            },
        }
    }

    fn keep_literal(&mut self, markup: &TagMarkup<'_>, reason: &str) {
        log::debug!("{reason}: keeping {} as text", markup.raw);
        self.pending.push_str(markup.raw);
    }

    /// Current position in glyph coordinates.
    fn glyph_index(&mut self) -> usize {
        self.bake();
        self.glyphs.len()
    }

    fn open_tag(&mut self, factory: TagFactory, markup: &TagMarkup<'_>) {
        let args = Args::from_pairs(markup.args.iter().copied());
        let index = self.glyph_index();

        let mut tag = factory();
        tag.set_index(index);
        tag.load_args(markup.raw, &args);

        let pause = tag.typing_pause();
        if pause != 0.0 {
            self.pauses.push((index, pause));
        }

        log::trace!("open {:?} at glyph {index}", tag.kind());
        match tag {
            Tag::Closable(closable) => self.stack.push(closable),
            Tag::Instant(_) => self.tags.push(tag),
        }
    }

    fn close_tag(&mut self, factory: TagFactory, markup: &TagMarkup<'_>) {
        let kind = factory().kind();
        let matches_top = self.stack.last().is_some_and(|top| top.kind() == kind);
        if !matches_top {
            self.keep_literal(markup, "unbalanced close");
            return;
        }

        let index = self.glyph_index();
        if let Some(mut closable) = self.stack.pop() {
            closable.span.length = index - closable.span.index;
            log::trace!("close {kind:?} spanning {:?}", closable.span);
            self.tags.push(Tag::Closable(closable));
        }
    }

    /// Move pending text into the output, recording which characters are glyphs.
    fn bake(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let base = self.output.len();
        match self.host_markup {
            HostMarkup::Literal => {
                self.glyphs
                    .extend(self.pending.char_indices().map(|(offset, _)| base + offset));
            }
            HostMarkup::Hidden => bake_hidden(&self.pending, base, &mut self.glyphs),
        }
        self.output.push_str(&self.pending);
        self.pending.clear();
    }

    fn finish(mut self) -> Self {
        self.bake();
        for open in self.stack.drain(..) {
            log::debug!(
                "dropping unclosed {:?} opened at glyph {}",
                open.kind(),
                open.index()
            );
        }
        self
    }
}

/// Record glyphs of `segment`, skipping `<...>` runs the host consumes.
///
/// A `<` superseded by a later `<`, or never terminated, is ordinary text.
fn bake_hidden(segment: &str, base: usize, glyphs: &mut Vec<usize>) {
    let chars: Vec<(usize, char)> = segment.char_indices().collect();
    let mut open: Option<usize> = None;

    for (k, &(offset, c)) in chars.iter().enumerate() {
        match c {
            '<' => {
                if let Some(start) = open {
                    glyphs.extend(chars[start..k].iter().map(|(o, _)| base + o));
                }
                open = Some(k);
            }
            '>' if open.is_some() => open = None,
            _ if open.is_none() => glyphs.push(base + offset),
            _ => {}
        }
    }

    if let Some(start) = open {
        glyphs.extend(chars[start..].iter().map(|(o, _)| base + o));
    }
}
