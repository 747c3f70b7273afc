//! Inline tag preprocessor and typing-timeline compiler.
//!
//! This crate turns text like `<rainbow>Hello</rainbow><pause time="0.5"/>World`
//! into clean display text, a list of resolved tags with glyph spans, and a
//! per-glyph timeline for typewriter-style reveal.
//!
//! # Overview
//!
//! - `<name key="value" key2=value2>` opens a tag, `</name>` closes it
//! - Quoted values may contain whitespace; bare values end at whitespace or `>`
//! - A `/` right before `>` is accepted and ignored: `<pause time="0.5"/>`
//! - Names the [`Registry`] does not know stay in the text verbatim
//! - A close that does not match the innermost open tag stays in the text
//! - Tags still open at the end of the input are dropped
//!
//! Built-in tags: `rainbow`, `shake`, `wave`, `slow`, `fast` (closable) and
//! `pause` (instant).
//!
//! Positions count Unicode scalar values, so a character stored as a UTF-16
//! surrogate pair is exactly one glyph.
//!
//! # Usage
//!
//! ```
//! use typefx_markup::MarkupCompiler;
//!
//! let mut compiler = MarkupCompiler::new();
//! let compiled = compiler.compile("ab<pause time=\"0.5\"/>cd");
//! assert_eq!(compiled.text(), "abcd");
//!
//! let timeline = compiled.timeline();
//! let gap = timeline.start(2).unwrap() - timeline.start(1).unwrap();
//! assert!((gap - 0.52).abs() < 1e-5);
//! ```

pub mod args;
pub mod compiled;
pub mod compiler;
pub mod config;
pub mod error;
pub mod parser;
pub mod registry;
pub mod span;
pub mod tag;
pub mod timeline;

// Re-export main types at crate root
pub use args::Args;
pub use compiled::CompiledText;
pub use compiler::MarkupCompiler;
pub use config::{CharClass, CompilerConfig, HostMarkup, TimingConfig};
pub use error::{ArgError, ConfigError, RegistryError};
pub use parser::{compile, compile_with};
pub use registry::{BUILTIN_TAGS, Registry, RegistryBuilder, TagFactory};
pub use span::Span;
pub use tag::{
    ClosableTag, InstantEffect, InstantTag, Pause, Rainbow, RangeEffect, RevealAnimation, Shake,
    Tag, TagKind, TypingSpeed, Wave,
};
pub use timeline::{CharTiming, Timeline};
